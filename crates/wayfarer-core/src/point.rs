//! N-dimensional points with Manhattan and Euclidean metrics.

use num_traits::{Num, ToPrimitive};
use rand::Rng;

use crate::error::{Result, WayfarerError};

/// A point in n-dimensional space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point<T> {
    coordinates: Vec<T>,
}

impl<T: Num + PartialOrd + Copy + ToPrimitive> Point<T> {
    /// Creates a point from its coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::InvalidArgument`] if no coordinates are
    /// given.
    pub fn new(coordinates: Vec<T>) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(WayfarerError::InvalidArgument(
                "at least one coordinate must be specified".to_string(),
            ));
        }
        Ok(Self { coordinates })
    }

    /// The number of dimensions of the space this point lives in.
    pub fn dimensions(&self) -> usize {
        self.coordinates.len()
    }

    /// The coordinate of this point in the given dimension.
    pub fn coordinate(&self, dimension: usize) -> T {
        self.coordinates[dimension]
    }

    /// Calculates the Manhattan distance between this and another point.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::InvalidArgument`] if the dimensions of the
    /// two points do not match.
    pub fn manhattan_distance(&self, other: &Self) -> Result<T> {
        self.check_dimensions(other)?;

        let mut total = T::zero();
        for (&a, &b) in self.coordinates.iter().zip(&other.coordinates) {
            total = total + abs_difference(a, b);
        }
        Ok(total)
    }

    /// Calculates the Euclidean distance between this and another point.
    ///
    /// # Errors
    ///
    /// Returns [`WayfarerError::InvalidArgument`] if the dimensions of the
    /// two points do not match, or if a coordinate difference is not
    /// representable as `f64`.
    pub fn euclidean_distance(&self, other: &Self) -> Result<f64> {
        self.check_dimensions(other)?;

        let mut total = 0.0;
        for (&a, &b) in self.coordinates.iter().zip(&other.coordinates) {
            let difference = abs_difference(a, b).to_f64().ok_or_else(|| {
                WayfarerError::InvalidArgument(
                    "coordinate difference is not representable as f64".to_string(),
                )
            })?;
            total += difference * difference;
        }
        Ok(total.sqrt())
    }

    fn check_dimensions(&self, other: &Self) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(WayfarerError::InvalidArgument(format!(
                "number of dimensions does not match: {} vs {}",
                self.dimensions(),
                other.dimensions()
            )));
        }
        Ok(())
    }
}

impl Point<f64> {
    /// Creates a random point within the rectangle bounded by `(0, 0)` and
    /// `(x_max, y_max)`.
    pub fn random_2d<R: Rng + ?Sized>(rng: &mut R, x_max: f64, y_max: f64) -> Self {
        Self {
            coordinates: vec![rng.random_range(0.0..x_max), rng.random_range(0.0..y_max)],
        }
    }
}

fn abs_difference<T: Num + PartialOrd + Copy>(a: T, b: T) -> T {
    if a >= b {
        a - b
    } else {
        b - a
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use crate::num::approx_eq;

    use super::*;

    #[test]
    fn zero_dimensional_points_are_rejected() {
        assert!(matches!(
            Point::<i32>::new(Vec::new()),
            Err(WayfarerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn manhattan_distance_sums_axis_distances() {
        let a = Point::new(vec![1, 2, 3]).unwrap();
        let b = Point::new(vec![4, 0, 3]).unwrap();
        assert_eq!(a.manhattan_distance(&b).unwrap(), 5);
        assert_eq!(b.manhattan_distance(&a).unwrap(), 5);
    }

    #[test]
    fn euclidean_distance_matches_pythagoras() {
        let a = Point::new(vec![0.0, 0.0]).unwrap();
        let b = Point::new(vec![3.0, 4.0]).unwrap();
        assert!(approx_eq(a.euclidean_distance(&b).unwrap(), 5.0));
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let a = Point::new(vec![1, 2]).unwrap();
        let b = Point::new(vec![1, 2, 3]).unwrap();
        assert!(matches!(
            a.manhattan_distance(&b),
            Err(WayfarerError::InvalidArgument(_))
        ));
        let c = Point::new(vec![1.0]).unwrap();
        let d = Point::new(vec![1.0, 2.0]).unwrap();
        assert!(matches!(
            c.euclidean_distance(&d),
            Err(WayfarerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn random_2d_stays_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let point = Point::random_2d(&mut rng, 10.0, 20.0);
            assert!(point.coordinate(0) >= 0.0 && point.coordinate(0) < 10.0);
            assert!(point.coordinate(1) >= 0.0 && point.coordinate(1) < 20.0);
        }
    }
}
