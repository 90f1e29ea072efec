use crate::{
    core::{utils::SampleFloat, SwarmError},
    Float, Vector2,
};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A closed interval `[lower, upper]` on a single axis of the surface.
///
/// A [`Bound`] is not checked when it is built. [`Bound::validate`] is called by
/// [`SwarmParameters::validate`](crate::core::SwarmParameters::validate) before a swarm is
/// constructed.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bound {
    /// The lower edge of the interval.
    pub lower: Float,
    /// The upper edge of the interval.
    pub upper: Float,
}
impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
impl From<(Float, Float)> for Bound {
    fn from(value: (Float, Float)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Bound {
    /// Create a new interval from its edges.
    pub const fn new(lower: Float, upper: Float) -> Self {
        Self { lower, upper }
    }
    /// Ensures both edges and the width are finite and `lower < upper`.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidParameter`] naming `name` if the interval is empty, inverted,
    /// not finite, or too wide for its width to be represented.
    pub fn validate(&self, name: &'static str) -> Result<(), SwarmError> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(SwarmError::invalid(
                name,
                format!("bound {} must be finite", self),
            ));
        }
        if self.lower >= self.upper {
            return Err(SwarmError::invalid(
                name,
                format!("lower edge must be below upper edge, got {}", self),
            ));
        }
        if !self.width().is_finite() {
            return Err(SwarmError::invalid(
                name,
                format!("width of {} overflows", self),
            ));
        }
        Ok(())
    }
    /// The length of the interval.
    pub fn width(&self) -> Float {
        self.upper - self.lower
    }
    /// Get a value in the uniform distribution between `lower` and `upper`.
    pub fn get_uniform(&self, rng: &mut Rng) -> Float {
        rng.range(self.lower, self.upper)
    }
    /// Checks whether the given `value` lies in the interval.
    pub fn contains(&self, value: Float) -> bool {
        value >= self.lower && value <= self.upper
    }
    /// Returns `0.0` if `value` lies in the interval and the signed distance to the crossed edge
    /// otherwise (negative below `lower`, positive above `upper`).
    pub fn bound_excess(&self, value: Float) -> Float {
        if value < self.lower {
            value - self.lower
        } else if value > self.upper {
            value - self.upper
        } else {
            0.0
        }
    }
    /// Moves `value` onto the nearest edge if it lies outside of the interval.
    pub fn clamp(&self, value: Float) -> Float {
        value.clamp(self.lower, self.upper)
    }
    /// Mirrors `value` back into the interval across the edge it crossed. Excursions longer than
    /// the interval itself end up on the opposite edge.
    pub fn reflect(&self, value: Float) -> Float {
        self.clamp(value - 2.0 * self.bound_excess(value))
    }
}

/// The rectangle `[x_min, x_max] x [y_min, y_max]` in which particles are seeded, and which
/// bounded [`SwarmBoundaryMethod`](crate::algorithms::particles::SwarmBoundaryMethod)s keep them
/// inside of.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SearchBounds {
    /// The interval on the `x` axis.
    pub x: Bound,
    /// The interval on the `y` axis.
    pub y: Bound,
}
impl Default for SearchBounds {
    fn default() -> Self {
        Self::square(10.0)
    }
}
impl Display for SearchBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.x, self.y)
    }
}
impl<B: Into<Bound>> From<[B; 2]> for SearchBounds {
    fn from(value: [B; 2]) -> Self {
        let [x, y] = value;
        Self::new(x, y)
    }
}

impl SearchBounds {
    /// Create a new rectangle from the intervals on each axis.
    pub fn new<B: Into<Bound>>(x: B, y: B) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
    /// The square `[-half_width, half_width]^2` centered on the origin.
    pub const fn square(half_width: Float) -> Self {
        Self {
            x: Bound::new(-half_width, half_width),
            y: Bound::new(-half_width, half_width),
        }
    }
    /// Ensures both intervals are valid.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidParameter`] if either axis fails [`Bound::validate`].
    pub fn validate(&self) -> Result<(), SwarmError> {
        self.x.validate("search_bounds.x")?;
        self.y.validate("search_bounds.y")
    }
    /// Checks whether the point lies inside of the rectangle (edges included).
    pub fn contains(&self, point: &Vector2) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }
    /// Draw a point uniformly from the rectangle.
    pub fn random_point(&self, rng: &mut Rng) -> Vector2 {
        Vector2::new(self.x.get_uniform(rng), self.y.get_uniform(rng))
    }
    /// The widths of the rectangle along each axis.
    pub fn widths(&self) -> Vector2 {
        Vector2::new(self.x.width(), self.y.width())
    }
}
