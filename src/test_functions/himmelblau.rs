use crate::{traits::FitnessFunction, Float};

/// Himmelblau's function, which has four identical minima.
///
/// ```math
/// f(x, y) = (x^2 + y - 11)^2 + (x + y^2 - 7)^2
/// ```
/// One of the minima is $`f(3, 2) = 0`$.
#[derive(Clone, Copy, Debug, Default)]
pub struct Himmelblau;
impl FitnessFunction for Himmelblau {
    fn evaluate(&self, x: Float, y: Float) -> Float {
        (x.powi(2) + y - 11.0).powi(2) + (x + y.powi(2) - 7.0).powi(2)
    }
}
