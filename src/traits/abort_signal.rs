/// A trait for abort signals.
/// This trait is used by the [`SwarmDriver`](crate::core::SwarmDriver) to check if the user has
/// requested to stop ticking the swarm.
pub trait AbortSignal {
    /// Return `true` if the user has requested to abort the run.
    fn is_aborted(&self) -> bool;
    /// Abort the run. Make `is_aborted()` return `true`.
    fn abort(&self);
    /// Reset the abort signal. Make `is_aborted()` return `false`.
    fn reset(&self);
}
