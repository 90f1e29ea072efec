use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{algorithms::particles::SwarmStatus, core::SearchBounds, Float, Vector2};

/// A struct that holds the results of a run of a [`SwarmDriver`](crate::core::SwarmDriver).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SwarmSummary {
    /// The bounds the swarm was seeded in.
    pub bounds: SearchBounds,
    /// A message describing why the run ended.
    pub message: String,
    /// The best position found by the swarm.
    pub x: Vector2,
    /// The value of the surface at [`SwarmSummary::x`] (`NaN` if the swarm never found a value).
    pub fx: Float,
    /// The number of particles.
    pub n_particles: usize,
    /// The number of completed iterations.
    pub n_steps: usize,
    /// The number of fitness evaluations.
    pub n_f_evals: usize,
}

impl From<&SwarmStatus> for SwarmSummary {
    fn from(status: &SwarmStatus) -> Self {
        Self {
            bounds: status.bounds,
            message: status.message.clone(),
            x: status.gbest.x,
            fx: status.gbest.fx.unwrap_or(Float::NAN),
            n_particles: status.particles.len(),
            n_steps: status.n_steps,
            n_f_evals: status.n_f_evals,
        }
    }
}

impl Display for SwarmSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "MSG:       {}", self.message)?;
        writeln!(f, "X:         {:+.5}", self.x.x)?;
        writeln!(f, "Y:         {:+.5}", self.x.y)?;
        writeln!(f, "F(X, Y):   {:+.5}", self.fx)?;
        writeln!(f, "BOUNDS:    {}", self.bounds)?;
        writeln!(f, "PARTICLES: {}", self.n_particles)?;
        writeln!(f, "N_STEPS:   {}", self.n_steps)?;
        write!(f, "N_F_EVALS: {}", self.n_f_evals)
    }
}
