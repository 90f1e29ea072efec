use std::ops::ControlFlow;

use crate::algorithms::particles::SwarmStatus;

/// A trait which holds an [`observe`](`SwarmObserver::observe`) function that is handed the
/// [`SwarmStatus`] after every iteration run by a [`SwarmDriver`](`crate::core::SwarmDriver`).
///
/// This is the consumer side of the swarm: renderers, recorders and loggers implement it to
/// receive each new set of particle positions.
pub trait SwarmObserver {
    /// Called once with the freshly constructed swarm (`step == 0`) and then after every
    /// completed iteration. Returning [`ControlFlow::Break`] stops the driver.
    fn observe(&mut self, step: usize, status: &SwarmStatus) -> ControlFlow<()>;
}
