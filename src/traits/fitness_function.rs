use crate::Float;

/// A trait which describes a surface $`f(\mathbb{R}^2) \to \mathbb{R}`$ to be minimized.
///
/// The swarm treats the function as opaque and only calls it to rank candidate positions, lower
/// values being better. It is assumed to be total and pure. Non-finite values are not rejected:
/// since every comparison against `NaN` is `false`, a best position whose value is `NaN` is never
/// replaced.
///
/// Any `Fn(Float, Float) -> Float` implements this trait, so closures can be passed directly:
///
/// ```rust
/// use swarm_surface::{traits::FitnessFunction, Float};
///
/// let bowl = |x: Float, y: Float| x * x + y * y;
/// assert_eq!(bowl.evaluate(3.0, 4.0), 25.0);
/// ```
pub trait FitnessFunction {
    /// The value of the surface at `(x, y)`.
    fn evaluate(&self, x: Float, y: Float) -> Float;
}

impl<F> FitnessFunction for F
where
    F: Fn(Float, Float) -> Float,
{
    fn evaluate(&self, x: Float, y: Float) -> Float {
        self(x, y)
    }
}
