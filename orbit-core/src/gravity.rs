//! Newtonian gravity of a single point mass fixed at the origin
//!
//! The central body's strength is carried by a [`GravitationalParameter`],
//! bound into a [`GravityModel`]. The free functions in this crate use
//! Earth's value.

use crate::state::{AccelerationVector, PositionVector};
use thiserror::Error;

/// Earth's standard gravitational parameter G·M, in m³/s²
pub const MU_EARTH: f64 = 3.986004418e14;

/// Raised when a gravitational quantity is undefined for the given input
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    #[error("position at origin, undefined gravitational direction")]
    PositionAtOrigin,
}

/// Gravitational parameter μ = G·M of the central body, in m³/s²
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravitationalParameter(f64);

impl GravitationalParameter {
    pub const EARTH: Self = Self(MU_EARTH);

    pub const fn new(mu: f64) -> Self {
        Self(mu)
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for GravitationalParameter {
    fn default() -> Self {
        Self::EARTH
    }
}

/// Central bodies with well-known gravitational parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CentralBody {
    #[default]
    Earth,
    Moon,
    Mars,
    Sun,
}

impl CentralBody {
    pub fn mu(self) -> GravitationalParameter {
        match self {
            CentralBody::Earth => GravitationalParameter::EARTH,
            CentralBody::Moon => GravitationalParameter::new(4.9048695e12),
            CentralBody::Mars => GravitationalParameter::new(4.282837e13),
            CentralBody::Sun => GravitationalParameter::new(1.32712440018e20),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CentralBody::Earth => "earth",
            CentralBody::Moon => "moon",
            CentralBody::Mars => "mars",
            CentralBody::Sun => "sun",
        }
    }
}

/// Two-body gravity field around a central body at the origin
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GravityModel {
    pub mu: GravitationalParameter,
}

impl GravityModel {
    pub fn new(mu: GravitationalParameter) -> Self {
        Self { mu }
    }

    pub fn for_body(body: CentralBody) -> Self {
        Self { mu: body.mu() }
    }

    /// Acceleration `-μ·p / |p|³`, pointing from `position` toward the origin.
    ///
    /// Only an exactly zero radius is rejected. Radii arbitrarily close to
    /// zero produce very large but finite results.
    pub fn acceleration(&self, position: PositionVector) -> Result<AccelerationVector, DomainError> {
        let r = position.length();
        if r == 0.0 {
            return Err(DomainError::PositionAtOrigin);
        }
        let factor = -self.mu.value() / (r * r * r);
        tracing::trace!(r, factor, "computed gravitational acceleration");
        Ok(position * factor)
    }
}

/// Gravitational acceleration toward Earth at the origin
pub fn gravitational_acceleration(position: PositionVector) -> Result<AccelerationVector, DomainError> {
    GravityModel::default().acceleration(position)
}
