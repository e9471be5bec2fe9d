//! Numeric utilities: tolerant float comparison, cumulative-weight search
//! and weighted random selection.
//!
//! Every quality-score comparison in the workspace routes through
//! [`approx_eq`] / [`approx_eq_within`] rather than raw `==`, to avoid
//! floating-point flakiness.

use rand::Rng;

use crate::error::{Result, WayfarerError};

/// Pre-defined error margin for comparison of floating point numbers.
pub const FLOAT_COMPARISON_MARGIN: f64 = 1e-6;

/// Returns true if the two values are equal within
/// [`FLOAT_COMPARISON_MARGIN`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    approx_eq_within(a, b, FLOAT_COMPARISON_MARGIN)
}

/// Returns true if the two values are equal within the given margin.
pub fn approx_eq_within(a: f64, b: f64, margin: f64) -> bool {
    (a - b).abs() <= margin.abs()
}

/// Finds the first index in an ascending list whose value is greater than or
/// equal to `value`.
///
/// The list must be sorted in ascending order; this precondition is the
/// caller's responsibility and is not validated.
///
/// # Errors
///
/// Returns [`WayfarerError::InvalidArgument`] for an empty list, and
/// [`WayfarerError::OutOfRange`] if `value` exceeds the last element.
pub fn cumulative_search(value: f64, ascending: &[f64]) -> Result<usize> {
    if ascending.is_empty() {
        return Err(WayfarerError::InvalidArgument(
            "cannot search an empty list".to_string(),
        ));
    }

    let index = ascending.partition_point(|&entry| entry < value);
    if index == ascending.len() {
        return Err(WayfarerError::OutOfRange(format!(
            "search value {value} exceeds the last cumulative weight {}",
            ascending[ascending.len() - 1]
        )));
    }

    Ok(index)
}

/// Draws one index from `weights` with probability proportional to its
/// weight, via inverse-CDF sampling over cumulative weights.
///
/// Weights must be non-negative (caller precondition, not validated). When
/// every weight is zero the first index is returned.
///
/// # Errors
///
/// Returns [`WayfarerError::InvalidArgument`] for an empty weight list.
pub fn select_weighted<R: Rng + ?Sized>(rng: &mut R, weights: &[f64]) -> Result<usize> {
    if weights.is_empty() {
        return Err(WayfarerError::InvalidArgument(
            "cannot select from an empty weight list".to_string(),
        ));
    }

    let mut cumulative = Vec::with_capacity(weights.len());
    let mut total = 0.0;
    for &weight in weights {
        total += weight;
        cumulative.push(total);
    }

    let drawn = if total > 0.0 {
        rng.random_range(0.0..total)
    } else {
        0.0
    };
    cumulative_search(drawn, &cumulative)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn approx_eq_accepts_values_within_margin() {
        assert!(approx_eq(0.001, 0.001000000001));
        assert!(approx_eq((-1.0f64).abs(), 0.99999999));
        assert!(approx_eq(-0.0000002, -0.0000005));
        assert!(!approx_eq(3.0, 4.0));
    }

    #[test]
    fn approx_eq_within_honours_custom_margins() {
        assert!(approx_eq_within(3.0, 4.0, 2.0));
        assert!(approx_eq_within(0.1, 0.2, 0.5));
        assert!(!approx_eq_within(0.0, -0.1, 0.01));
    }

    #[test]
    fn cumulative_search_finds_first_index_at_or_above_value() {
        let list = [3.0, 4.0, 17.0];
        assert_eq!(cumulative_search(-2.0, &list).unwrap(), 0);
        assert_eq!(cumulative_search(3.5, &list).unwrap(), 1);
        assert_eq!(cumulative_search(13.34876324, &list).unwrap(), 2);
        assert_eq!(cumulative_search(17.0, &list).unwrap(), 2);
    }

    #[test]
    fn cumulative_search_rejects_values_beyond_the_range() {
        let list = [3.0, 4.0, 17.0];
        assert!(matches!(
            cumulative_search(17.1, &list),
            Err(WayfarerError::OutOfRange(_))
        ));
        assert!(matches!(
            cumulative_search(0.0, &[]),
            Err(WayfarerError::InvalidArgument(_))
        ));
    }

    #[test]
    fn select_weighted_never_picks_zero_weight_entries() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let weights = [0.0, 2.0, 0.0, 5.0];
        for _ in 0..200 {
            let index = select_weighted(&mut rng, &weights).unwrap();
            assert!(index == 1 || index == 3, "picked zero-weight index {index}");
        }
    }

    #[test]
    fn select_weighted_handles_all_zero_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(select_weighted(&mut rng, &[0.0, 0.0, 0.0]).unwrap(), 0);
    }

    #[test]
    fn select_weighted_is_roughly_proportional() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let weights = [1.0, 3.0];
        let mut counts = [0u32; 2];
        for _ in 0..4000 {
            counts[select_weighted(&mut rng, &weights).unwrap()] += 1;
        }
        // Expect index 1 to win about three times as often as index 0.
        assert!(counts[1] > counts[0] * 2);
    }
}
