//! Human-readable formatting of states and errors
//!
//! Used by the CLI and anything else that prints trajectories.

use crate::gravity::DomainError;
use crate::state::StateVector;

/// Format a state as `[x, y, z, vx, vy, vz]`
pub fn format_state(state: &StateVector) -> String {
    let components: [f64; 6] = (*state).into();
    let parts: Vec<String> = components.iter().map(|c| format!("{:?}", c)).collect();
    format!("[{}]", parts.join(", "))
}

/// Format a domain error for display
pub fn format_domain_error(error: &DomainError) -> String {
    format!("Domain error: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_state() {
        let state = StateVector::from_array([7e6, 0.0, 0.0, 0.0, 7.5e3, 0.0]);
        assert_eq!(format_state(&state), "[7000000.0, 0.0, 0.0, 0.0, 7500.0, 0.0]");
    }

    #[test]
    fn test_format_domain_error() {
        assert_eq!(
            format_domain_error(&DomainError::PositionAtOrigin),
            "Domain error: position at origin, undefined gravitational direction"
        );
    }
}
