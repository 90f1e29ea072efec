use crate::{traits::FitnessFunction, Float, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Describes a position on the surface together with its (lazily computed) fitness.
#[derive(Clone, Copy, Default, Debug, Serialize, Deserialize)]
pub struct Point {
    /// the point's position
    pub x: Vector2,
    /// the point's evaluation (`None` if the point has not yet been evaluated)
    pub fx: Option<Float>,
}
impl Point {
    /// Returns `true` if this point has a strictly lower value than `other`.
    ///
    /// An unevaluated point never improves on anything, and any evaluated point other than `NaN`
    /// improves on an unevaluated one. Comparisons involving `NaN` are `false`, so a `NaN` value
    /// can neither improve on nor be improved on by another point.
    pub fn improves_on(&self, other: &Self) -> bool {
        match (self.fx, other.fx) {
            (Some(s), Some(o)) => s < o,
            (Some(s), None) => !s.is_nan(),
            (None, _) => false,
        }
    }
    /// Move the point to a new position, resetting the evaluation of the point
    pub fn set_position(&mut self, x: Vector2) {
        self.x = x;
        self.fx = None;
    }
    /// Get the current evaluation of the point, if it has been evaluated
    ///
    /// # Panics
    ///
    /// This method will panic if the point is unevaluated.
    pub fn fx_checked(&self) -> Float {
        #[allow(clippy::expect_used)]
        self.fx.expect("Point value requested before evaluation")
    }
    /// Evaluate the given function at the point's coordinate and set the `fx` value to the
    /// result. Already evaluated points are left untouched.
    pub fn evaluate<F: FitnessFunction + ?Sized>(&mut self, func: &F) -> Float {
        match self.fx {
            Some(fx) => fx,
            None => {
                let fx = func.evaluate(self.x.x, self.x.y);
                self.fx = Some(fx);
                fx
            }
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.fx {
            Some(fx) => write!(f, "x: ({}, {}), f(x): {}", self.x.x, self.x.y, fx),
            None => write!(f, "x: ({}, {}), f(x): -", self.x.x, self.x.y),
        }
    }
}

impl From<Vector2> for Point {
    fn from(value: Vector2) -> Self {
        Self { x: value, fx: None }
    }
}
impl From<(Float, Float)> for Point {
    fn from(value: (Float, Float)) -> Self {
        Vector2::new(value.0, value.1).into()
    }
}

/// A position lifted onto the rendered surface, `(x, y, f(x, y) * z_scale)`.
///
/// This is the mapping a renderer applies to every particle so that the swarm sits on the mesh
/// drawn for the same fitness function.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    /// The `x` coordinate.
    pub x: Float,
    /// The `y` coordinate.
    pub y: Float,
    /// The scaled fitness value.
    pub z: Float,
}

impl SurfacePoint {
    /// The default vertical scale, which keeps steep surfaces readable.
    pub const DEFAULT_Z_SCALE: Float = 0.2;

    /// Lift `position` onto the surface of `func`, scaling the height by `z_scale`.
    pub fn lift<F: FitnessFunction + ?Sized>(position: &Vector2, func: &F, z_scale: Float) -> Self {
        Self {
            x: position.x,
            y: position.y,
            z: func.evaluate(position.x, position.y) * z_scale,
        }
    }
}
