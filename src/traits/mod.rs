/// Module containing the [`AbortSignal`] trait.
pub mod abort_signal;
/// Module containing the [`FitnessFunction`] trait.
pub mod fitness_function;
/// Module containing the [`SwarmObserver`] trait.
pub mod observer;

pub use abort_signal::AbortSignal;
pub use fitness_function::FitnessFunction;
pub use observer::SwarmObserver;
