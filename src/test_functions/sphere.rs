use crate::{traits::FitnessFunction, Float};

/// The sphere function, a convex bowl with its minimum at the origin.
///
/// ```math
/// f(x, y) = x^2 + y^2
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Sphere;
impl FitnessFunction for Sphere {
    fn evaluate(&self, x: Float, y: Float) -> Float {
        x.powi(2) + y.powi(2)
    }
}
