use crate::{
    core::{
        utils::{latin_hypercube, SampleFloat},
        Point, SearchBounds, StepParameters,
    },
    traits::FitnessFunction,
    Float, Vector2,
};
use fastrand::Rng;
use serde::{Deserialize, Serialize};

/// The fraction of the search bounds' width used as the velocity range by
/// [`SwarmVelocityInitializer::Random`] when no velocity cap is set.
const UNCAPPED_VELOCITY_FRACTION: Float = 0.1;

/// Methods for handling particles which leave the search bounds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwarmBoundaryMethod {
    /// Let particles roam freely; the search bounds only constrain the initial placement
    #[default]
    Free,
    /// Move the particle onto the crossed edge and zero that velocity component
    Clamp,
    /// Mirror the particle back inside across the crossed edge and reverse that velocity component
    Reflect,
}

/// Methods to initialize the positions of particles in a swarm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum SwarmPositionInitializer {
    /// Uniform random distribution within the search bounds
    #[default]
    RandomInBounds,
    /// Latin Hypercube sampling within the search bounds
    LatinHypercube,
    /// Custom positions, one per particle
    Custom(Vec<Vector2>),
}
impl SwarmPositionInitializer {
    /// Initialize the positions of `n_particles` particles using the given random number generator.
    pub fn init_positions(
        &self,
        rng: &mut Rng,
        bounds: &SearchBounds,
        n_particles: usize,
    ) -> Vec<Vector2> {
        match self {
            Self::RandomInBounds => (0..n_particles)
                .map(|_| bounds.random_point(rng))
                .collect(),
            Self::LatinHypercube => latin_hypercube(bounds, n_particles, rng),
            Self::Custom(positions) => positions.clone(),
        }
    }
}

/// Methods for setting the initial velocity of particles in a swarm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwarmVelocityInitializer {
    /// Initialize all velocities to zero
    #[default]
    Zero,
    /// Initialize each component uniformly in `[-max_velocity, max_velocity]`, or in a tenth of
    /// the search bounds' width on that axis if no cap is set
    Random,
}
impl SwarmVelocityInitializer {
    /// Initialize the velocities of `n_particles` particles using the given random number generator.
    pub fn init_velocities(
        &self,
        rng: &mut Rng,
        bounds: &SearchBounds,
        max_velocity: Option<Float>,
        n_particles: usize,
    ) -> Vec<Vector2> {
        match self {
            Self::Zero => vec![Vector2::zeros(); n_particles],
            Self::Random => {
                let limits = max_velocity.map_or_else(
                    || bounds.widths() * UNCAPPED_VELOCITY_FRACTION,
                    |v_max| Vector2::repeat(v_max),
                );
                (0..n_particles)
                    .map(|_| limits.map(|limit| symmetric_draw(rng, limit)))
                    .collect()
            }
        }
    }
}

fn symmetric_draw(rng: &mut Rng, limit: Float) -> Float {
    if limit > 0.0 {
        rng.range(-limit, limit)
    } else {
        0.0
    }
}

/// A particle with a position, velocity, and best known position
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SwarmParticle {
    /// The current position of the particle
    pub position: Point,
    /// The current velocity of the particle
    pub velocity: Vector2,
    /// The best position of the particle (as measured by the minimum value of `fx`)
    pub best: Point,
}
impl SwarmParticle {
    /// Create a new particle at `position` moving with `velocity`. The position is evaluated and
    /// becomes the particle's personal best.
    pub fn new<F: FitnessFunction + ?Sized>(position: Vector2, velocity: Vector2, func: &F) -> Self {
        let mut position = Point::from(position);
        position.evaluate(func);
        Self {
            position,
            velocity,
            best: position,
        }
    }
    /// Apply the PSO velocity rule towards the particle's own best and `gbest`:
    ///
    /// ```math
    /// v' = \omega v + c_1 r_1 (p - x) + c_2 r_2 (g - x)
    /// ```
    /// where $`r_1`$ and $`r_2`$ are drawn uniformly from $`[0, 1)`$ independently for each axis
    /// on every call. The result is clamped per axis if a velocity cap is set.
    pub fn update_velocity(&mut self, gbest: &Vector2, params: &StepParameters, rng: &mut Rng) {
        let x = self.position.x;
        let r1 = rng.unit_vector2();
        let r2 = rng.unit_vector2();
        let mut velocity = self.velocity.scale(params.inertia_weight)
            + r1.component_mul(&(self.best.x - x))
                .scale(params.cognitive_weight)
            + r2.component_mul(&(gbest - x)).scale(params.social_weight);
        if let Some(v_max) = params.max_velocity {
            velocity.apply(|v| *v = v.clamp(-v_max, v_max));
        }
        self.velocity = velocity;
    }
    /// Move the particle along its velocity, then apply the boundary method. The new position
    /// is left unevaluated.
    pub fn update_position(&mut self, bounds: &SearchBounds, boundary_method: SwarmBoundaryMethod) {
        let mut new_position = self.position.x + self.velocity;
        match boundary_method {
            SwarmBoundaryMethod::Free => {}
            SwarmBoundaryMethod::Clamp => {
                for (d, bound) in [bounds.x, bounds.y].iter().enumerate() {
                    if bound.bound_excess(new_position[d]) != 0.0 {
                        new_position[d] = bound.clamp(new_position[d]);
                        self.velocity[d] = 0.0;
                    }
                }
            }
            SwarmBoundaryMethod::Reflect => {
                for (d, bound) in [bounds.x, bounds.y].iter().enumerate() {
                    if bound.bound_excess(new_position[d]) != 0.0 {
                        new_position[d] = bound.reflect(new_position[d]);
                        self.velocity[d] = -self.velocity[d];
                    }
                }
            }
        }
        self.position.set_position(new_position);
    }
    /// Evaluate the current position and adopt it as the personal best if it is strictly better.
    /// Returns the value at the current position.
    pub fn evaluate_and_update_best<F: FitnessFunction + ?Sized>(&mut self, func: &F) -> Float {
        let fx = self.position.evaluate(func);
        if self.position.improves_on(&self.best) {
            self.best = self.position;
        }
        fx
    }
}
