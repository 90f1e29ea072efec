use fastrand::Rng;
use tracing::{debug, trace, warn};

use crate::{
    algorithms::particles::{SwarmParticle, SwarmStatus},
    core::{Point, SharedParameters, StepParameters, SwarmError, SwarmParameters},
    traits::FitnessFunction,
    Vector2,
};

/// Particle Swarm Optimizer over a two-dimensional surface
///
/// The PSO algorithm involves an ensemble of particles which are aware of the best position
/// found by the whole swarm. Each iteration updates every particle's velocity as follows:
///
/// ```math
/// v_i^{t+1} = \omega v_i^t + c_1 r_{1,i}^{t+1}(p^t_i - x^t_i) + c_2 r_{2,i}^{t+1}(g^t - x^t_i)
/// ```
/// where $`r_1`$ and $`r_2`$ are uniformly distributed random vectors in $`[0,1)`$, $`\omega`$ is
/// an inertial weight parameter, $`c_1`$ and $`c_2`$ are cognitive and social weights
/// respectively, $`p_i^t`$ is the particle's personal best position, and $`g^t`$ is the swarm's
/// best position. The particle then moves by $`v_i^{t+1}`$ and is re-evaluated.
///
/// Updates are synchronous: $`g^t`$ is held fixed for the whole pass and only refreshed once
/// every particle has moved, so the order of the particles has no influence on an iteration.
///
/// There is no stopping criterion. The optimizer is meant to be ticked forever by its owner
/// (see [`SwarmDriver`](crate::core::SwarmDriver) and [`Trajectory`]) and rebuilt when the surface
/// changes. Stepping requires `&mut self`, so two steps can never run at the same time.
///
/// See [^1] for more information.
///
/// [^1]: [Houssein, E. H., Gad, A. G., Hussain, K., & Suganthan, P. N. (2021). Major Advances in Particle Swarm Optimization: Theory, Analysis, and Application. In Swarm and Evolutionary Computation (Vol. 63, p. 100868). Elsevier BV.](https://doi.org/10.1016/j.swevo.2021.100868)
pub struct SwarmOptimizer<F> {
    func: F,
    parameters: SharedParameters,
    step_parameters: StepParameters,
    rejected_parameters: Option<StepParameters>,
    rng: Rng,
    status: SwarmStatus,
}

impl<F: FitnessFunction> SwarmOptimizer<F> {
    /// Build a swarm over `func` from an owned set of parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidParameter`] if the parameters fail
    /// [`SwarmParameters::validate`].
    pub fn new(func: F, parameters: SwarmParameters, rng: Rng) -> Result<Self, SwarmError> {
        Self::from_shared(func, parameters.shared(), rng)
    }

    /// Build a swarm over `func` from a parameter handle which may keep being tuned while the
    /// swarm runs.
    ///
    /// Every particle is placed by the configured position initializer, given its initial
    /// velocity, and evaluated. The best of those evaluations seeds the global best.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidParameter`] if the parameters fail
    /// [`SwarmParameters::validate`].
    pub fn from_shared(
        func: F,
        parameters: SharedParameters,
        mut rng: Rng,
    ) -> Result<Self, SwarmError> {
        let config = parameters.read().clone();
        config.validate()?;
        let n_particles = config.population_size;
        let positions =
            config
                .position_initializer
                .init_positions(&mut rng, &config.search_bounds, n_particles);
        let velocities = config.velocity_initializer.init_velocities(
            &mut rng,
            &config.search_bounds,
            config.max_velocity,
            n_particles,
        );
        let particles = positions
            .into_iter()
            .zip(velocities)
            .map(|(position, velocity)| SwarmParticle::new(position, velocity, &func))
            .collect();
        let mut status = SwarmStatus {
            particles,
            bounds: config.search_bounds,
            n_f_evals: n_particles,
            ..Default::default()
        };
        status.update_global_best();
        status.update_message("Initialized");
        debug!(
            n_particles,
            bounds = %config.search_bounds,
            gbest = %status.gbest,
            "swarm initialized"
        );
        if !status.gbest.fx.map_or(false, |fx| fx.is_finite()) {
            warn!(
                gbest = %status.gbest,
                "initial global best is not finite"
            );
        }
        Ok(Self {
            func,
            parameters,
            step_parameters: config.step_parameters(),
            rejected_parameters: None,
            rng,
            status,
        })
    }

    /// Run one synchronous iteration over the whole swarm.
    ///
    /// The tunable parameters are read once at the start of the iteration. Each particle, in
    /// index order, updates its velocity towards its personal best and the global best, moves,
    /// and is re-evaluated. Only after the full pass is the global best refreshed.
    pub fn step(&mut self) {
        self.refresh_step_parameters();
        let params = self.step_parameters;
        let gbest = self.status.gbest.x;
        let bounds = self.status.bounds;
        for particle in &mut self.status.particles {
            particle.update_velocity(&gbest, &params, &mut self.rng);
            particle.update_position(&bounds, params.boundary_method);
            particle.evaluate_and_update_best(&self.func);
        }
        self.status.update_global_best();
        self.status.n_f_evals += self.status.particles.len();
        self.status.n_steps += 1;
        trace!(step = self.status.n_steps, gbest = %self.status.gbest, "swarm stepped");
    }

    /// Take a fresh snapshot of the shared parameters. A snapshot which fails validation (for
    /// instance a negative velocity cap written by a control surface) is ignored and the last
    /// valid one is kept. Returns `true` if a newly rejected snapshot was reported; the same
    /// rejected values are only reported once.
    fn refresh_step_parameters(&mut self) -> bool {
        let latest = self.parameters.read().step_parameters();
        if latest == self.step_parameters {
            self.rejected_parameters = None;
            return false;
        }
        match latest.validate() {
            Ok(()) => {
                debug!(?latest, "step parameters updated");
                self.step_parameters = latest;
                self.rejected_parameters = None;
                false
            }
            Err(err) => {
                if self
                    .rejected_parameters
                    .is_some_and(|rejected| rejected.is_identical(&latest))
                {
                    return false;
                }
                warn!(%err, "ignoring invalid parameter update");
                self.rejected_parameters = Some(latest);
                true
            }
        }
    }

    /// Turn the optimizer into an unbounded iterator over the swarm's positions. The first item
    /// is the freshly initialized swarm, every following item is taken after one more
    /// [`step`](Self::step).
    pub fn trajectory(self) -> Trajectory<F> {
        Trajectory {
            optimizer: self,
            started: false,
        }
    }
}

impl<F> SwarmOptimizer<F> {
    /// The particles' current positions, in the same order on every call.
    pub fn current_positions(&self) -> Vec<Vector2> {
        self.status.current_positions()
    }
    /// Borrowing version of [`current_positions`](Self::current_positions).
    pub fn positions(&self) -> impl ExactSizeIterator<Item = &Vector2> + '_ {
        self.status.positions()
    }
    /// The best position found so far.
    pub const fn global_best(&self) -> &Point {
        &self.status.gbest
    }
    /// The particles in index order.
    pub fn particles(&self) -> &[SwarmParticle] {
        &self.status.particles
    }
    /// The full state of the swarm.
    pub const fn status(&self) -> &SwarmStatus {
        &self.status
    }
    pub(crate) fn update_message(&mut self, message: &str) {
        self.status.update_message(message);
    }
    /// A handle to the shared parameters. Writes are picked up by the next
    /// [`step`](Self::step).
    pub fn parameters(&self) -> SharedParameters {
        self.parameters.clone()
    }
    /// The parameters used by the most recent iteration.
    pub const fn step_parameters(&self) -> &StepParameters {
        &self.step_parameters
    }
    /// The surface being searched.
    pub const fn fitness(&self) -> &F {
        &self.func
    }
}

/// An unbounded, pull-based sequence of swarm positions.
///
/// Created by [`SwarmOptimizer::trajectory`]. The sequence never ends; callers decide how many
/// items to take and how long to wait between them. It can only be restarted by building a new
/// optimizer.
pub struct Trajectory<F> {
    optimizer: SwarmOptimizer<F>,
    started: bool,
}

impl<F> Trajectory<F> {
    /// The optimizer driving this trajectory.
    pub const fn optimizer(&self) -> &SwarmOptimizer<F> {
        &self.optimizer
    }
    /// Recover the optimizer.
    pub fn into_inner(self) -> SwarmOptimizer<F> {
        self.optimizer
    }
}

impl<F: FitnessFunction> Iterator for Trajectory<F> {
    type Item = Vec<Vector2>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            self.optimizer.step();
        } else {
            self.started = true;
        }
        Some(self.optimizer.current_positions())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::{
        algorithms::particles::{
            SwarmBoundaryMethod, SwarmPositionInitializer, SwarmVelocityInitializer,
        },
        core::SearchBounds,
        test_functions::{Rastrigin, Sphere},
        Float,
    };

    fn seeded(seed: u64) -> Rng {
        let mut rng = Rng::new();
        rng.seed(seed);
        rng
    }

    fn sphere_swarm(seed: u64) -> SwarmOptimizer<Sphere> {
        SwarmOptimizer::new(Sphere, SwarmParameters::default(), seeded(seed)).unwrap()
    }

    #[test]
    fn test_empty_population_rejected() {
        let mut params = SwarmParameters::default();
        params.with_population_size(0);
        let result = SwarmOptimizer::new(Sphere, params, seeded(0));
        assert!(matches!(
            result,
            Err(SwarmError::InvalidParameter {
                name: "population_size",
                ..
            })
        ));
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        let mut params = SwarmParameters::default();
        params.with_search_bounds([(-1.0, 1.0), (2.0, 2.0)]);
        assert!(SwarmOptimizer::new(Sphere, params, seeded(0)).is_err());
    }

    #[test]
    fn test_overflowing_bounds_rejected() {
        let mut params = SwarmParameters::default();
        params
            .with_search_bounds([(-Float::MAX, Float::MAX), (-1.0, 1.0)])
            .with_velocity_initializer(SwarmVelocityInitializer::Random);
        assert!(matches!(
            SwarmOptimizer::new(Sphere, params, seeded(0)),
            Err(SwarmError::InvalidParameter {
                name: "search_bounds.x",
                ..
            })
        ));
    }

    #[test]
    fn test_construction_seeds_bests() {
        let optimizer = sphere_swarm(0);
        assert_eq!(optimizer.particles().len(), 30);
        assert_eq!(optimizer.status().message, "Initialized");
        assert_eq!(optimizer.status().n_f_evals, 30);
        let bounds = SearchBounds::default();
        let mut lowest = Float::INFINITY;
        for particle in optimizer.particles() {
            assert!(bounds.contains(&particle.position.x));
            assert_eq!(particle.best.x, particle.position.x);
            assert_eq!(particle.velocity, Vector2::zeros());
            lowest = lowest.min(particle.best.fx_checked());
        }
        assert_eq!(optimizer.global_best().fx_checked(), lowest);
    }

    #[test]
    fn test_single_particle_swarm() {
        let mut params = SwarmParameters::default();
        params.with_population_size(1);
        let mut optimizer = SwarmOptimizer::new(Sphere, params, seeded(4)).unwrap();
        for _ in 0..10 {
            optimizer.step();
            assert_eq!(optimizer.current_positions().len(), 1);
        }
    }

    #[test]
    fn test_deterministic_with_fixed_seed() {
        let a: Vec<Vec<Vector2>> = sphere_swarm(42).trajectory().take(25).collect();
        let b: Vec<Vec<Vector2>> = sphere_swarm(42).trajectory().take(25).collect();
        let c: Vec<Vec<Vector2>> = sphere_swarm(43).trajectory().take(25).collect();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_global_best_is_monotonic() {
        let mut optimizer =
            SwarmOptimizer::new(Rastrigin, SwarmParameters::default(), seeded(1)).unwrap();
        let mut previous = optimizer.global_best().fx_checked();
        for _ in 0..200 {
            optimizer.step();
            let current = optimizer.global_best().fx_checked();
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn test_personal_bests_match_fitness_and_dominate_history() {
        let mut optimizer =
            SwarmOptimizer::new(Rastrigin, SwarmParameters::default(), seeded(2)).unwrap();
        let mut lowest_seen: Vec<Float> = optimizer
            .particles()
            .iter()
            .map(|p| p.position.fx_checked())
            .collect();
        for _ in 0..100 {
            optimizer.step();
            for (particle, lowest) in optimizer.particles().iter().zip(lowest_seen.iter_mut()) {
                *lowest = lowest.min(particle.position.fx_checked());
                let best = particle.best.fx_checked();
                assert_eq!(best, Rastrigin.evaluate(particle.best.x.x, particle.best.x.y));
                assert_eq!(best, *lowest);
                assert!(best >= optimizer.global_best().fx_checked());
            }
        }
    }

    #[test]
    fn test_positions_are_index_aligned() {
        let mut optimizer = sphere_swarm(3);
        for _ in 0..20 {
            let before = optimizer.current_positions();
            optimizer.step();
            let after = optimizer.current_positions();
            assert_eq!(after.len(), 30);
            for (i, particle) in optimizer.particles().iter().enumerate() {
                assert_eq!(after[i], before[i] + particle.velocity);
            }
        }
    }

    #[test]
    fn test_converges_on_sphere() {
        let mut optimizer = sphere_swarm(0);
        for _ in 0..200 {
            optimizer.step();
        }
        assert!(optimizer.global_best().fx_checked() < 0.01);
        assert!(optimizer.global_best().x.norm() < 0.1);
        assert_eq!(optimizer.status().n_steps, 200);
        assert_eq!(optimizer.status().n_f_evals, 30 * 201);
    }

    #[test]
    fn test_velocity_clamp_respected_every_step() {
        let mut params = SwarmParameters::default();
        params
            .with_max_velocity(0.3)
            .with_velocity_initializer(SwarmVelocityInitializer::Random)
            .with_inertia_weight(0.9)
            .with_cognitive_weight(2.0)
            .with_social_weight(2.0);
        let mut optimizer = SwarmOptimizer::new(Rastrigin, params, seeded(5)).unwrap();
        for _ in 0..100 {
            optimizer.step();
            for particle in optimizer.particles() {
                assert!(particle.velocity.x.abs() <= 0.3);
                assert!(particle.velocity.y.abs() <= 0.3);
            }
        }
    }

    #[test]
    fn test_bounded_methods_keep_swarm_inside() {
        for method in [SwarmBoundaryMethod::Clamp, SwarmBoundaryMethod::Reflect] {
            let mut params = SwarmParameters::default();
            params
                .with_search_bounds([(1.0, 3.0), (1.0, 3.0)])
                .with_boundary_method(method);
            let mut optimizer = SwarmOptimizer::new(Sphere, params, seeded(6)).unwrap();
            let bounds = optimizer.status().bounds;
            for _ in 0..50 {
                optimizer.step();
                assert!(optimizer.positions().all(|p| bounds.contains(p)));
            }
            let best = optimizer.global_best().x;
            assert!(best.x < 1.1 && best.y < 1.1);
        }
    }

    #[test]
    fn test_live_parameter_update_applies_next_step() {
        let shared = SwarmParameters::default().shared();
        let mut optimizer = SwarmOptimizer::from_shared(Sphere, shared.clone(), seeded(7)).unwrap();
        optimizer.step();
        shared
            .write()
            .with_inertia_weight(0.0)
            .with_cognitive_weight(0.0)
            .with_social_weight(0.0);
        let before = optimizer.current_positions();
        optimizer.step();
        assert_eq!(optimizer.step_parameters().inertia_weight, 0.0);
        assert_eq!(optimizer.current_positions(), before);
        assert!(optimizer
            .particles()
            .iter()
            .all(|p| p.velocity == Vector2::zeros()));
    }

    #[test]
    fn test_live_update_from_another_thread() {
        let mut optimizer = sphere_swarm(8);
        let handle = optimizer.parameters();
        thread::spawn(move || {
            handle.write().with_max_velocity(0.01);
        })
        .join()
        .unwrap();
        optimizer.step();
        assert_eq!(optimizer.step_parameters().max_velocity, Some(0.01));
        assert!(optimizer
            .particles()
            .iter()
            .all(|p| p.velocity.x.abs() <= 0.01 && p.velocity.y.abs() <= 0.01));
    }

    #[test]
    fn test_invalid_live_update_is_ignored() {
        let mut optimizer = sphere_swarm(9);
        optimizer.parameters().write().with_max_velocity(-1.0);
        optimizer.step();
        assert_eq!(optimizer.step_parameters().max_velocity, None);
        optimizer.parameters().write().with_max_velocity(1.0);
        optimizer.step();
        assert_eq!(optimizer.step_parameters().max_velocity, Some(1.0));
    }

    #[test]
    fn test_population_change_needs_rebuild() {
        let mut optimizer = sphere_swarm(10);
        let handle = optimizer.parameters();
        handle.write().with_population_size(5);
        optimizer.step();
        assert_eq!(optimizer.current_positions().len(), 30);
        let rebuilt = SwarmOptimizer::from_shared(Sphere, handle, seeded(10)).unwrap();
        assert_eq!(rebuilt.current_positions().len(), 5);
    }

    #[test]
    fn test_trajectory_starts_with_initial_positions() {
        let optimizer = sphere_swarm(11);
        let initial = optimizer.current_positions();
        let mut trajectory = optimizer.trajectory();
        assert_eq!(trajectory.next(), Some(initial));
        assert_eq!(trajectory.optimizer().status().n_steps, 0);
        let _ = trajectory.nth(4);
        assert_eq!(trajectory.optimizer().status().n_steps, 5);
        assert_eq!(trajectory.into_inner().status().n_steps, 5);
    }

    #[test]
    fn test_nan_surface_does_not_panic() {
        let surface = |x: Float, y: Float| if x > 0.0 { Float::NAN } else { x * x + y * y };
        let mut optimizer =
            SwarmOptimizer::new(surface, SwarmParameters::default(), seeded(12)).unwrap();
        for _ in 0..20 {
            optimizer.step();
        }
        assert_eq!(optimizer.current_positions().len(), 30);
        for particle in optimizer.particles() {
            assert!(!particle.best.fx_checked().is_nan() || particle.best.x.x > 0.0);
        }
    }

    #[test]
    fn test_invalid_live_update_is_reported_once() {
        let mut optimizer = sphere_swarm(13);
        optimizer.parameters().write().with_inertia_weight(Float::NAN);
        assert!(optimizer.refresh_step_parameters());
        assert!(!optimizer.refresh_step_parameters());
        optimizer.step();
        assert_eq!(optimizer.step_parameters().inertia_weight, 0.5);
        optimizer.parameters().write().with_cognitive_weight(-1.0);
        assert!(optimizer.refresh_step_parameters());
        optimizer
            .parameters()
            .write()
            .with_inertia_weight(0.5)
            .with_cognitive_weight(1.5);
        assert!(!optimizer.refresh_step_parameters());
        optimizer.parameters().write().with_inertia_weight(Float::NAN);
        assert!(optimizer.refresh_step_parameters());
    }

    #[test]
    fn test_nan_particle_does_not_seed_global_best() {
        let surface = |x: Float, y: Float| if x > 0.0 { Float::NAN } else { x * x + y * y };
        let mut params = SwarmParameters::default();
        params
            .with_population_size(2)
            .with_position_initializer(SwarmPositionInitializer::Custom(vec![
                Vector2::new(1.0, 0.0),
                Vector2::new(-1.0, 0.0),
            ]));
        let mut optimizer = SwarmOptimizer::new(surface, params, seeded(14)).unwrap();
        assert_eq!(optimizer.global_best().x, Vector2::new(-1.0, 0.0));
        assert_eq!(optimizer.global_best().fx, Some(1.0));
        for _ in 0..50 {
            optimizer.step();
            let gbest = optimizer.global_best().fx_checked();
            assert!(gbest.is_finite());
            let lowest_finite = optimizer
                .particles()
                .iter()
                .map(|p| p.best.fx_checked())
                .filter(|fx| !fx.is_nan())
                .fold(Float::INFINITY, Float::min);
            assert_eq!(gbest, lowest_finite);
        }
    }

    #[test]
    fn test_all_nan_swarm_keeps_global_best_unevaluated() {
        let mut optimizer = SwarmOptimizer::new(
            |_: Float, _: Float| Float::NAN,
            SwarmParameters::default(),
            seeded(15),
        )
        .unwrap();
        assert!(optimizer.global_best().fx.is_none());
        optimizer.step();
        assert!(optimizer.global_best().fx.is_none());
        assert_eq!(optimizer.current_positions().len(), 30);
    }
}
