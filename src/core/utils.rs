use crate::{core::SearchBounds, Float, Vector2};
use fastrand::Rng;
use fastrand_contrib::RngExt;

/// A helper trait to get feature-gated floating-point random values
pub trait SampleFloat {
    /// Get a random value in the range `[lower, upper)`
    fn range(&mut self, lower: Float, upper: Float) -> Float;
    /// Get a random value in the range `[0, 1)`
    fn float(&mut self) -> Float;
    /// Get a vector whose components are independent draws from `[0, 1)`
    fn unit_vector2(&mut self) -> Vector2 {
        Vector2::new(self.float(), self.float())
    }
}
impl SampleFloat for Rng {
    #[cfg(not(feature = "f32"))]
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        self.f64_range(lower..upper)
    }
    #[cfg(feature = "f32")]
    fn range(&mut self, lower: Float, upper: Float) -> Float {
        self.f32_range(lower..upper)
    }
    #[cfg(not(feature = "f32"))]
    fn float(&mut self) -> Float {
        self.f64()
    }
    #[cfg(feature = "f32")]
    fn float(&mut self) -> Float {
        self.f32()
    }
}

/// Latin hypercube sample of `n` points in `bounds`: each axis is cut into `n` equal bins and
/// every bin receives exactly one point.
pub(crate) fn latin_hypercube(bounds: &SearchBounds, n: usize, rng: &mut Rng) -> Vec<Vector2> {
    let mut points = vec![Vector2::zeros(); n];
    for (d, limit) in [bounds.x, bounds.y].iter().enumerate() {
        let mut bins: Vec<usize> = (0..n).collect();
        rng.shuffle(&mut bins);
        let bin_size = limit.width() / n as Float;
        for (point, &bin) in points.iter_mut().zip(bins.iter()) {
            let lower = limit.lower + bin as Float * bin_size;
            point[d] = rng.range(lower, lower + bin_size);
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_in_unit_interval() {
        let mut rng = Rng::with_seed(0);
        for _ in 0..1000 {
            let u = rng.float();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_range_reproducible() {
        let mut a = Rng::with_seed(7);
        let mut b = Rng::with_seed(7);
        for _ in 0..10 {
            assert_eq!(a.range(-3.0, 5.0), b.range(-3.0, 5.0));
        }
    }

    #[test]
    fn test_latin_hypercube_one_point_per_bin() {
        let mut rng = Rng::with_seed(0);
        let bounds = SearchBounds::new((0.0, 10.0), (-5.0, 5.0));
        let points = latin_hypercube(&bounds, 10, &mut rng);
        assert_eq!(points.len(), 10);
        let mut x_bins: Vec<usize> = points.iter().map(|p| p.x.floor() as usize).collect();
        let mut y_bins: Vec<usize> = points.iter().map(|p| (p.y + 5.0).floor() as usize).collect();
        x_bins.sort_unstable();
        y_bins.sort_unstable();
        assert_eq!(x_bins, (0..10).collect::<Vec<_>>());
        assert_eq!(y_bins, (0..10).collect::<Vec<_>>());
    }
}
