/// Basic implementations of [`AbortSignal`](crate::traits::AbortSignal)
pub mod abort_signals;
/// [`Bound`] and [`SearchBounds`] types for the rectangle the swarm is seeded in.
pub mod bound;
/// [`SwarmParameters`] type holding the tunable configuration of a swarm.
pub mod config;
/// [`SwarmDriver`] type which ticks an optimizer on a fixed cadence.
pub mod driver;
/// [`SwarmError`] type for invalid configurations.
pub mod error;
/// [`Point`] type for defining an evaluated position on the surface.
pub mod point;
/// [`SwarmSummary`] type for the state of a swarm after a run.
pub mod summary;
/// Random sampling helpers.
pub mod utils;

pub use abort_signals::{AtomicAbortSignal, CtrlCAbortSignal, NopAbortSignal};
pub use bound::{Bound, SearchBounds};
pub use config::{SharedParameters, StepParameters, SwarmParameters};
pub use driver::SwarmDriver;
pub use error::SwarmError;
pub use point::{Point, SurfacePoint};
pub use summary::SwarmSummary;
