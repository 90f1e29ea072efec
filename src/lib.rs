//! `swarm-surface` runs a particle swarm over a two-dimensional fitness surface and exposes the
//! swarm's positions after every iteration, so that an external renderer can animate the search.
//!
//! The user supplies any function $`f(\mathbb{R}^2) \to \mathbb{R}`$ (a plain closure works) and
//! a [`SwarmParameters`](crate::core::SwarmParameters) bundle. Lower values are better, so the
//! swarm settles into the valleys of the surface.
//!
//! # Table of Contents
//! - [Key Features](#key-features)
//! - [Quick Start](#quick-start)
//! - [Live Tuning](#live-tuning)
//! - [Driving the Swarm](#driving-the-swarm)
//!
//! # Key Features
//! * Canonical synchronous PSO: the global best is only refreshed after a full pass over the
//!   swarm, so particle order never biases an iteration.
//! * Index-stable output: position `i` always belongs to the same particle.
//! * Parameters are read fresh every iteration and may be retuned from another thread.
//! * Seeded [`fastrand::Rng`] for fully reproducible trajectories.
//! * Pressing `Ctrl-C` while a [`SwarmDriver`](crate::core::SwarmDriver) is running stops it
//!   cleanly when it is given a [`CtrlCAbortSignal`](crate::core::CtrlCAbortSignal).
//!
//! # Quick Start
//!
//! ```rust
//! use fastrand::Rng;
//! use swarm_surface::prelude::*;
//!
//! let mut rng = Rng::new();
//! rng.seed(0);
//! let mut optimizer = SwarmOptimizer::new(
//!     |x: Float, y: Float| x.powi(2) + y.powi(2),
//!     SwarmParameters::default(),
//!     rng,
//! )
//! .unwrap();
//! for _ in 0..100 {
//!     optimizer.step();
//! }
//! assert_eq!(optimizer.current_positions().len(), 30);
//! assert!(optimizer.global_best().fx_checked() < 1e-3);
//! ```
//!
//! # Live Tuning
//!
//! [`SwarmOptimizer::parameters`](crate::algorithms::particles::SwarmOptimizer::parameters)
//! hands out the shared parameter handle. Writes through it take effect at the start of the
//! next [`step`](crate::algorithms::particles::SwarmOptimizer::step):
//!
//! ```rust
//! use fastrand::Rng;
//! use swarm_surface::prelude::*;
//!
//! let mut optimizer =
//!     SwarmOptimizer::new(|x: Float, y: Float| x * x + y * y, SwarmParameters::default(), Rng::new())
//!         .unwrap();
//! optimizer.parameters().write().with_inertia_weight(0.9).with_max_velocity(0.5);
//! optimizer.step();
//! ```
//!
//! # Driving the Swarm
//!
//! The optimizer never owns timing. Either pull position sets from a
//! [`Trajectory`](crate::algorithms::particles::Trajectory), or hand the optimizer to a
//! [`SwarmDriver`](crate::core::SwarmDriver) which ticks it on a fixed cadence and notifies
//! observers after each iteration.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing the particle swarm optimizer.
pub mod algorithms;
/// Module containing core types: bounds, points, parameters, errors and the driver.
pub mod core;
/// Module containing built-in [`SwarmObserver`](crate::traits::SwarmObserver)s.
pub mod observers;
/// Module containing standard 2D test surfaces.
pub mod test_functions;
/// Module containing the traits at the seams of the crate.
pub mod traits;

/// The floating-point type used throughout the crate.
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// The floating-point type used throughout the crate.
#[cfg(feature = "f32")]
pub type Float = f32;

/// The mathematical constant $`\pi`$.
#[cfg(not(feature = "f32"))]
pub const PI: Float = std::f64::consts::PI;

/// The mathematical constant $`\pi`$.
#[cfg(feature = "f32")]
pub const PI: Float = std::f32::consts::PI;

/// A two-dimensional position or velocity.
pub type Vector2 = nalgebra::Vector2<Float>;

/// Re-exports of the most common types.
pub mod prelude {
    pub use crate::algorithms::particles::{
        SwarmBoundaryMethod, SwarmOptimizer, SwarmParticle, SwarmPositionInitializer,
        SwarmStatus, SwarmVelocityInitializer, Trajectory,
    };
    pub use crate::core::{
        AtomicAbortSignal, Bound, CtrlCAbortSignal, NopAbortSignal, Point, SearchBounds,
        SharedParameters, SurfacePoint, SwarmDriver, SwarmError, SwarmParameters, SwarmSummary,
    };
    pub use crate::traits::{AbortSignal, FitnessFunction, SwarmObserver};
    pub use crate::{Float, Vector2};
}
