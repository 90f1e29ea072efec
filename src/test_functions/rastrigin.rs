use crate::{traits::FitnessFunction, Float, PI};

/// The Rastrigin function, a non-convex function with a single minimum but many local minima.
///
/// ```math
/// f(x, y) = 20 + (x^2 - 10\cos(2\pi x)) + (y^2 - 10\cos(2\pi y))
/// ```
/// The minimum is $`f(0, 0) = 0`$.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rastrigin;
impl FitnessFunction for Rastrigin {
    fn evaluate(&self, x: Float, y: Float) -> Float {
        #[allow(clippy::suboptimal_flops)]
        let term = |v: Float| v.powi(2) - 10.0 * Float::cos(2.0 * PI * v);
        20.0 + term(x) + term(y)
    }
}
