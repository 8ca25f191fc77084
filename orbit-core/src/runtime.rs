use crate::gravity::{DomainError, GravityModel};
use crate::state::StateVector;

/// Upper bound on states reserved up front; longer runs grow as they go
const MAX_RESERVED_STATES: usize = 1 << 16;

/// Sequence of states produced by repeated Euler steps
#[derive(Debug, Clone)]
pub struct Trajectory {
    time_step: f64,
    /// Initial state first, then one entry per step; never empty
    states: Vec<StateVector>,
}

impl Trajectory {
    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn states(&self) -> &[StateVector] {
        &self.states
    }

    pub fn initial_state(&self) -> StateVector {
        self.states[0]
    }

    pub fn final_state(&self) -> StateVector {
        self.states[self.states.len() - 1]
    }

    /// Number of steps taken
    pub fn steps(&self) -> usize {
        self.states.len() - 1
    }

    /// Change in specific orbital energy between the first and last state
    pub fn energy_drift(&self, model: &GravityModel) -> Result<f64, DomainError> {
        let start = self.initial_state().specific_energy(model.mu)?;
        let end = self.final_state().specific_energy(model.mu)?;
        Ok(end - start)
    }
}

/// Main entry point: advance `initial` by `steps` forward Euler steps of `time_step`.
///
/// Each step's output is the next step's input. The first domain error
/// aborts propagation.
pub fn propagate(
    model: &GravityModel,
    initial: StateVector,
    time_step: f64,
    steps: usize,
) -> Result<Trajectory, DomainError> {
    tracing::debug!(mu = model.mu.value(), time_step, steps, "propagating trajectory");

    let mut states = Vec::with_capacity(steps.saturating_add(1).min(MAX_RESERVED_STATES));
    states.push(initial);

    let mut state = initial;
    for step in 0..steps {
        state = model.step_euler(state, time_step).map_err(|e| {
            tracing::debug!(step, error = %e, "propagation aborted");
            e
        })?;
        tracing::trace!(step, r = state.radius(), v = state.speed(), "stepped");
        states.push(state);
    }

    Ok(Trajectory { time_step, states })
}

/// Like [`propagate`], but keeps only the final state
pub fn propagate_final(
    model: &GravityModel,
    initial: StateVector,
    time_step: f64,
    steps: usize,
) -> Result<StateVector, DomainError> {
    tracing::debug!(mu = model.mu.value(), time_step, steps, "propagating to final state");

    (0..steps).try_fold(initial, |state, step| {
        model.step_euler(state, time_step).map_err(|e| {
            tracing::debug!(step, error = %e, "propagation aborted");
            e
        })
    })
}
