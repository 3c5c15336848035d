//! Walk generation.

use tracing::debug;

use super::result::WalkResult;
use crate::error::WalkError;
use crate::rng::WalkRng;

/// Generates a bounded integer random walk.
///
/// Starting from an accumulator set to `start_value`, each of the `length`
/// steps adds a delta drawn uniformly from `[-volatility, volatility]` and
/// records the new accumulator value. `start_value` itself is not emitted,
/// so `values[0]` already lies one step away from it.
///
/// # Arguments
///
/// * `length` - Number of points; zero yields an empty walk
/// * `volatility` - Step bound, inclusive on both sides; must be positive
/// * `start_value` - Initial accumulator value
/// * `seed` - Seed for reproducibility; `None` selects a time-derived seed
///
/// The accumulator saturates at the `i64` bounds rather than wrapping, which
/// can only shorten a step.
///
/// # Errors
///
/// Returns [`WalkError::InvalidArgument`] if `volatility <= 0`. Validation
/// happens before any random draws.
///
/// # Examples
///
/// ```rust
/// use walk_core::walk::generate_walk;
///
/// let walk = generate_walk(5, 1, 10, Some(42)).unwrap();
/// assert_eq!(walk.indices(), &[0, 1, 2, 3, 4]);
/// assert!((walk.values()[0] - 10).abs() <= 1);
///
/// // Same seed, same walk
/// assert_eq!(walk, generate_walk(5, 1, 10, Some(42)).unwrap());
///
/// assert!(generate_walk(5, 0, 10, Some(42)).is_err());
/// ```
pub fn generate_walk(
    length: usize,
    volatility: i64,
    start_value: i64,
    seed: Option<u64>,
) -> Result<WalkResult, WalkError> {
    if volatility <= 0 {
        return Err(WalkError::invalid_argument(
            "volatility",
            format!("must be positive, got {}", volatility),
        ));
    }

    let mut rng = WalkRng::from_optional_seed(seed);
    debug!(
        length,
        volatility,
        start_value,
        seed = rng.seed(),
        explicit_seed = seed.is_some(),
        "generating walk"
    );

    let mut values = vec![0_i64; length];
    rng.fill_steps(&mut values, volatility)?;

    let mut accumulator = start_value;
    for value in values.iter_mut() {
        accumulator = accumulator.saturating_add(*value);
        *value = accumulator;
    }

    Ok(WalkResult::new(values, rng.seed()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_step_bound(walk: &WalkResult, start_value: i64, volatility: i64) {
        let mut previous = start_value;
        for &value in walk.values() {
            let step = (i128::from(value) - i128::from(previous)).abs();
            assert!(
                step <= i128::from(volatility),
                "step {} exceeds volatility {}",
                step,
                volatility
            );
            previous = value;
        }
    }

    #[test]
    fn test_reference_example() {
        let walk = generate_walk(5, 1, 10, Some(42)).unwrap();
        assert_eq!(walk.indices(), &[0, 1, 2, 3, 4]);
        assert_eq!(walk.len(), 5);
        assert_eq!(walk.seed(), 42);
        assert_step_bound(&walk, 10, 1);

        let again = generate_walk(5, 1, 10, Some(42)).unwrap();
        assert_eq!(walk.values(), again.values());
    }

    #[test]
    fn test_zero_length() {
        let walk = generate_walk(0, 3, 50, None).unwrap();
        assert!(walk.indices().is_empty());
        assert!(walk.values().is_empty());
    }

    #[test]
    fn test_non_positive_volatility_fails() {
        for volatility in [0, -1, -3, i64::MIN] {
            let err = generate_walk(10, volatility, 50, Some(1)).unwrap_err();
            assert!(matches!(
                err,
                WalkError::InvalidArgument {
                    name: "volatility",
                    ..
                }
            ));
        }
    }

    /// Zero-length requests are still validated.
    #[test]
    fn test_zero_length_still_validates() {
        assert!(generate_walk(0, 0, 50, None).is_err());
    }

    #[test]
    fn test_seed_zero_is_reproducible() {
        let a = generate_walk(100, 3, 50, Some(0)).unwrap();
        let b = generate_walk(100, 3, 50, Some(0)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed(), 0);
    }

    #[test]
    fn test_unseeded_walk_reports_replayable_seed() {
        let walk = generate_walk(200, 3, 50, None).unwrap();
        let replay = generate_walk(200, 3, 50, Some(walk.seed())).unwrap();
        assert_eq!(walk.values(), replay.values());
    }

    #[test]
    fn test_unseeded_walks_differ() {
        let a = generate_walk(200, 3, 50, None).unwrap();
        let b = generate_walk(200, 3, 50, None).unwrap();
        assert_ne!(a.seed(), b.seed());
        assert_ne!(a.values(), b.values());
    }

    #[test]
    fn test_saturates_at_upper_bound() {
        let walk = generate_walk(1_000, 5, i64::MAX - 2, Some(3)).unwrap();
        assert_step_bound(&walk, i64::MAX - 2, 5);
    }

    #[test]
    fn test_saturates_at_lower_bound() {
        let walk = generate_walk(1_000, i64::MAX, i64::MIN, Some(3)).unwrap();
        assert_step_bound(&walk, i64::MIN, i64::MAX);
    }
}
