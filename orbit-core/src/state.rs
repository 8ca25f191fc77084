use crate::gravity::{DomainError, GravitationalParameter};
use glam::DVec3;

/// Position relative to the central body, in meters
pub type PositionVector = DVec3;

/// Velocity in meters per second
pub type VelocityVector = DVec3;

/// Acceleration in meters per second squared
pub type AccelerationVector = DVec3;

/// Sample low-Earth-orbit state `[7e6, 0, 0, 0, 7.5e3, 0]`, meters and meters/second
pub const LEO_SAMPLE: [f64; 6] = [7e6, 0.0, 0.0, 0.0, 7.5e3, 0.0];

/// Instantaneous position and velocity of an orbiting body.
///
/// Ordered as position then velocity when flattened, i.e.
/// `[x, y, z, vx, vy, vz]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub position: PositionVector,
    pub velocity: VelocityVector,
}

impl StateVector {
    pub fn new(position: PositionVector, velocity: VelocityVector) -> Self {
        Self { position, velocity }
    }

    /// Build a state from `[x, y, z, vx, vy, vz]`
    pub fn from_array(components: [f64; 6]) -> Self {
        let [x, y, z, vx, vy, vz] = components;
        Self {
            position: DVec3::new(x, y, z),
            velocity: DVec3::new(vx, vy, vz),
        }
    }

    /// Flatten into `[x, y, z, vx, vy, vz]`
    pub fn to_array(&self) -> [f64; 6] {
        let [x, y, z] = self.position.to_array();
        let [vx, vy, vz] = self.velocity.to_array();
        [x, y, z, vx, vy, vz]
    }

    /// Distance from the central body
    pub fn radius(&self) -> f64 {
        self.position.length()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Specific orbital energy `v²/2 - μ/r`, in J/kg.
    ///
    /// Constant along an exact two-body orbit, so its change over a
    /// propagated trajectory measures integration error.
    pub fn specific_energy(&self, mu: GravitationalParameter) -> Result<f64, DomainError> {
        let r = self.radius();
        if r == 0.0 {
            return Err(DomainError::PositionAtOrigin);
        }
        Ok(0.5 * self.velocity.length_squared() - mu.value() / r)
    }
}

impl From<[f64; 6]> for StateVector {
    fn from(components: [f64; 6]) -> Self {
        Self::from_array(components)
    }
}

impl From<StateVector> for [f64; 6] {
    fn from(state: StateVector) -> Self {
        state.to_array()
    }
}
