pub mod diagnostics;
pub mod gravity;
pub mod integrator;
pub mod runtime;
pub mod state;

pub use diagnostics::{format_domain_error, format_state};
pub use gravity::{
    gravitational_acceleration, CentralBody, DomainError, GravitationalParameter, GravityModel,
    MU_EARTH,
};
pub use integrator::integrate_euler;
pub use runtime::{propagate, propagate_final, Trajectory};
pub use state::{AccelerationVector, PositionVector, StateVector, VelocityVector, LEO_SAMPLE};
