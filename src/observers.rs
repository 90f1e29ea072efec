use std::{ops::ControlFlow, sync::Arc};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    algorithms::particles::SwarmStatus,
    core::{Point, SurfacePoint},
    traits::{FitnessFunction, SwarmObserver},
    Float, Vector2,
};

/// A debugging observer which logs the step and global best of the swarm at every iteration
/// through [`tracing::debug!`].
///
/// # Usage:
///
/// ```rust
/// use std::time::Duration;
/// use fastrand::Rng;
/// use swarm_surface::prelude::*;
/// use swarm_surface::observers::DebugObserver;
/// use swarm_surface::test_functions::Sphere;
///
/// let optimizer = SwarmOptimizer::new(Sphere, SwarmParameters::default(), Rng::new()).unwrap();
/// let mut driver = SwarmDriver::new(optimizer).setup(|d| {
///     d.with_cadence(Duration::ZERO)
///         .with_max_steps(5)
///         .with_observer(DebugObserver::build())
/// });
/// driver.run();
/// // ^ This will emit a debug event for each step
/// ```
pub struct DebugObserver;
impl DebugObserver {
    /// Finalize the [`SwarmObserver`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self))
    }
}
impl SwarmObserver for DebugObserver {
    fn observe(&mut self, step: usize, status: &SwarmStatus) -> ControlFlow<()> {
        debug!(
            step,
            gbest = %status.gbest,
            n_f_evals = status.n_f_evals,
            "swarm observed"
        );
        ControlFlow::Continue(())
    }
}

/// A [`SwarmObserver`] which stores the history of the particles' positions as well as the
/// history of global best positions.
///
/// The history is serializable, so it can be exported (for example with `serde-pickle`) and
/// animated offline.
#[derive(Serialize, Deserialize, Default, Clone)]
pub struct TrackingSwarmObserver {
    /// The positions of every particle at every observed step
    pub history: Vec<Vec<Vector2>>,
    /// The global best at every observed step
    pub best_history: Vec<Point>,
}

impl TrackingSwarmObserver {
    /// Finalize the [`SwarmObserver`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self::default()))
    }
}

impl SwarmObserver for TrackingSwarmObserver {
    fn observe(&mut self, _step: usize, status: &SwarmStatus) -> ControlFlow<()> {
        self.history.push(status.current_positions());
        self.best_history.push(status.gbest);
        ControlFlow::Continue(())
    }
}

/// A [`SwarmObserver`] which keeps the latest swarm lifted onto the rendered surface, one
/// [`SurfacePoint`] per particle in particle order.
///
/// A renderer holds on to this observer and eases each of its particle meshes towards the
/// matching point of [`SurfaceObserver::frame`] at its own frame rate.
pub struct SurfaceObserver<F> {
    func: F,
    z_scale: Float,
    /// The lifted positions from the most recent step
    pub frame: Vec<SurfacePoint>,
    /// The step at which [`SurfaceObserver::frame`] was taken
    pub step: usize,
}

impl<F: FitnessFunction> SurfaceObserver<F> {
    /// Create a new observer lifting positions onto the surface of `func`, with heights scaled
    /// by [`SurfacePoint::DEFAULT_Z_SCALE`].
    pub fn new(func: F) -> Self {
        Self {
            func,
            z_scale: SurfacePoint::DEFAULT_Z_SCALE,
            frame: Vec::new(),
            step: 0,
        }
    }
    /// Set the vertical scale applied to fitness values.
    pub fn with_z_scale(mut self, z_scale: Float) -> Self {
        self.z_scale = z_scale;
        self
    }
    /// Finalize the [`SwarmObserver`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }
}

impl<F: FitnessFunction> SwarmObserver for SurfaceObserver<F> {
    fn observe(&mut self, step: usize, status: &SwarmStatus) -> ControlFlow<()> {
        self.step = step;
        self.frame = status
            .positions()
            .map(|position| SurfacePoint::lift(position, &self.func, self.z_scale))
            .collect();
        ControlFlow::Continue(())
    }
}
