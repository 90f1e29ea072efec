use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::{
    algorithms::particles::{
        SwarmBoundaryMethod, SwarmPositionInitializer, SwarmVelocityInitializer,
    },
    core::{SearchBounds, SwarmError},
    Float,
};

const DEFAULT_POPULATION_SIZE: usize = 30;
const DEFAULT_INERTIA_WEIGHT: Float = 0.5;
const DEFAULT_COGNITIVE_WEIGHT: Float = 1.5;
const DEFAULT_SOCIAL_WEIGHT: Float = 1.5;

/// A [`SwarmParameters`] bundle shared between an optimizer and whatever control surface tunes it.
///
/// The optimizer takes a read lock once per iteration, so writers are never blocked for longer
/// than it takes to copy a handful of numbers.
pub type SharedParameters = Arc<RwLock<SwarmParameters>>;

/// The configuration of a particle swarm.
///
/// The update weights, velocity cap and boundary method are read at the start of every
/// [`step`](crate::algorithms::particles::SwarmOptimizer::step) and can be retuned while the
/// swarm runs. The population size, search bounds and initializers only matter when a swarm is
/// built; changing them has no effect until a new optimizer is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmParameters {
    /// The number of particles in the swarm (default = `30`).
    pub population_size: usize,
    /// The inertial weight $`\omega`$ (default = `0.5`).
    pub inertia_weight: Float,
    /// The cognitive weight $`c_1`$ pulling a particle towards its personal best (default = `1.5`).
    pub cognitive_weight: Float,
    /// The social weight $`c_2`$ pulling a particle towards the global best (default = `1.5`).
    pub social_weight: Float,
    /// The rectangle the particles are seeded in (default = $`[-10, 10]^2`$).
    pub search_bounds: SearchBounds,
    /// An optional cap on the magnitude of each velocity component (default = `None`).
    pub max_velocity: Option<Float>,
    /// How particles leaving the search bounds are handled (default = [`SwarmBoundaryMethod::Free`]).
    pub boundary_method: SwarmBoundaryMethod,
    /// How initial positions are chosen (default = [`SwarmPositionInitializer::RandomInBounds`]).
    pub position_initializer: SwarmPositionInitializer,
    /// How initial velocities are chosen (default = [`SwarmVelocityInitializer::Zero`]).
    pub velocity_initializer: SwarmVelocityInitializer,
}

impl Default for SwarmParameters {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            inertia_weight: DEFAULT_INERTIA_WEIGHT,
            cognitive_weight: DEFAULT_COGNITIVE_WEIGHT,
            social_weight: DEFAULT_SOCIAL_WEIGHT,
            search_bounds: SearchBounds::default(),
            max_velocity: None,
            boundary_method: SwarmBoundaryMethod::default(),
            position_initializer: SwarmPositionInitializer::default(),
            velocity_initializer: SwarmVelocityInitializer::default(),
        }
    }
}

impl SwarmParameters {
    /// Sets the number of particles.
    pub fn with_population_size(&mut self, value: usize) -> &mut Self {
        self.population_size = value;
        self
    }
    /// Sets the inertial weight $`\omega`$.
    pub fn with_inertia_weight(&mut self, value: Float) -> &mut Self {
        self.inertia_weight = value;
        self
    }
    /// Sets the cognitive weight $`c_1`$ which controls the particle's tendency to move towards
    /// its personal best.
    pub fn with_cognitive_weight(&mut self, value: Float) -> &mut Self {
        self.cognitive_weight = value;
        self
    }
    /// Sets the social weight $`c_2`$ which controls the particle's tendency to move towards the
    /// global best.
    pub fn with_social_weight(&mut self, value: Float) -> &mut Self {
        self.social_weight = value;
        self
    }
    /// Sets the rectangle the particles are seeded in.
    pub fn with_search_bounds<B: Into<SearchBounds>>(&mut self, value: B) -> &mut Self {
        self.search_bounds = value.into();
        self
    }
    /// Caps each velocity component to `[-value, value]`.
    pub fn with_max_velocity(&mut self, value: Float) -> &mut Self {
        self.max_velocity = Some(value);
        self
    }
    /// Removes the velocity cap.
    pub fn without_max_velocity(&mut self) -> &mut Self {
        self.max_velocity = None;
        self
    }
    /// Set the [`SwarmBoundaryMethod`].
    pub fn with_boundary_method(&mut self, value: SwarmBoundaryMethod) -> &mut Self {
        self.boundary_method = value;
        self
    }
    /// Set the [`SwarmPositionInitializer`].
    pub fn with_position_initializer(&mut self, value: SwarmPositionInitializer) -> &mut Self {
        self.position_initializer = value;
        self
    }
    /// Set the [`SwarmVelocityInitializer`].
    pub fn with_velocity_initializer(&mut self, value: SwarmVelocityInitializer) -> &mut Self {
        self.velocity_initializer = value;
        self
    }
    /// Wrap the parameters in a [`SharedParameters`] handle.
    pub fn shared(self) -> SharedParameters {
        Arc::new(RwLock::new(self))
    }

    /// Checks every value against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidParameter`] if the population is empty, the search bounds are
    /// empty or not finite, any weight is not finite, $`c_1`$ or $`c_2`$ is negative, the velocity
    /// cap is negative or not finite, or a custom set of initial positions does not contain
    /// exactly one position per particle.
    pub fn validate(&self) -> Result<(), SwarmError> {
        if self.population_size < 1 {
            return Err(SwarmError::invalid(
                "population_size",
                "the swarm needs at least one particle",
            ));
        }
        self.search_bounds.validate()?;
        self.step_parameters().validate()?;
        if let SwarmPositionInitializer::Custom(positions) = &self.position_initializer {
            if positions.len() != self.population_size {
                return Err(SwarmError::invalid(
                    "position_initializer",
                    format!(
                        "expected {} custom positions, got {}",
                        self.population_size,
                        positions.len()
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Copy out the values read by every iteration.
    pub const fn step_parameters(&self) -> StepParameters {
        StepParameters {
            inertia_weight: self.inertia_weight,
            cognitive_weight: self.cognitive_weight,
            social_weight: self.social_weight,
            max_velocity: self.max_velocity,
            boundary_method: self.boundary_method,
        }
    }
}

/// The subset of [`SwarmParameters`] which is re-read at the start of every iteration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepParameters {
    /// The inertial weight $`\omega`$.
    pub inertia_weight: Float,
    /// The cognitive weight $`c_1`$.
    pub cognitive_weight: Float,
    /// The social weight $`c_2`$.
    pub social_weight: Float,
    /// The optional per-axis velocity cap.
    pub max_velocity: Option<Float>,
    /// The boundary handling method.
    pub boundary_method: SwarmBoundaryMethod,
}

impl StepParameters {
    /// Bitwise comparison, under which a `NaN` field equals itself.
    pub(crate) fn is_identical(&self, other: &Self) -> bool {
        self.inertia_weight.to_bits() == other.inertia_weight.to_bits()
            && self.cognitive_weight.to_bits() == other.cognitive_weight.to_bits()
            && self.social_weight.to_bits() == other.social_weight.to_bits()
            && self.max_velocity.map(Float::to_bits) == other.max_velocity.map(Float::to_bits)
            && self.boundary_method == other.boundary_method
    }
    /// Checks the update weights and velocity cap.
    ///
    /// # Errors
    ///
    /// See [`SwarmParameters::validate`].
    pub fn validate(&self) -> Result<(), SwarmError> {
        if !self.inertia_weight.is_finite() {
            return Err(SwarmError::invalid("inertia_weight", "must be finite"));
        }
        for (name, value) in [
            ("cognitive_weight", self.cognitive_weight),
            ("social_weight", self.social_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SwarmError::invalid(
                    name,
                    format!("must be finite and non-negative, got {}", value),
                ));
            }
        }
        if let Some(v_max) = self.max_velocity {
            if !v_max.is_finite() || v_max < 0.0 {
                return Err(SwarmError::invalid(
                    "max_velocity",
                    format!("must be finite and non-negative, got {}", v_max),
                ));
            }
        }
        Ok(())
    }
}
