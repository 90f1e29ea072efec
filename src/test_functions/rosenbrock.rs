use crate::{traits::FitnessFunction, Float};

/// The Rosenbrock function, a non-convex function with a single minimum at the bottom of a
/// long, curved valley.
///
/// ```math
/// f(x, y) = 100(y - x^2)^2 + (1 - x)^2
/// ```
/// This function has a minimum at $`f(1, 1) = 0`$.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rosenbrock;
impl FitnessFunction for Rosenbrock {
    #[allow(clippy::suboptimal_flops)]
    fn evaluate(&self, x: Float, y: Float) -> Float {
        100.0 * (y - x.powi(2)).powi(2) + (1.0 - x).powi(2)
    }
}
