use crate::gravity::{DomainError, GravityModel};
use crate::state::StateVector;

impl GravityModel {
    /// Advance `state` by `dt` seconds using explicit (forward) Euler integration.
    ///
    /// Both updates use derivatives at the start of the step:
    /// `v' = v + a(x)*dt`, then `x' = x + v*dt` with the old `v`.
    /// Any `dt` is accepted, including zero and negative values.
    pub fn step_euler(&self, state: StateVector, dt: f64) -> Result<StateVector, DomainError> {
        let StateVector { position, velocity } = state;

        let acceleration = self.acceleration(position)?;

        let new_velocity = velocity + acceleration * dt;
        let new_position = position + velocity * dt;

        Ok(StateVector::new(new_position, new_velocity))
    }
}

/// Advance `state` by one forward Euler step around Earth
pub fn integrate_euler(state: StateVector, time_step: f64) -> Result<StateVector, DomainError> {
    GravityModel::default().step_euler(state, time_step)
}
