//! Walk request parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::generator::generate_walk;
use super::result::WalkResult;
use crate::error::WalkError;

/// Step bound used when none is given.
pub const DEFAULT_VOLATILITY: i64 = 3;

/// Starting value used when none is given.
pub const DEFAULT_START_VALUE: i64 = 50;

/// Parameters for a single walk.
///
/// Construct with [`WalkRequest::new`], which fills in the defaults
/// (`volatility = 3`, `start_value = 50`, no seed), then override fields
/// with the fluent setters.
///
/// # Examples
///
/// ```rust
/// use walk_core::walk::WalkRequest;
///
/// let request = WalkRequest::new(252)
///     .volatility(5)
///     .start_value(100)
///     .seed(42);
///
/// assert!(request.validate().is_ok());
/// let walk = request.generate().expect("valid request");
/// assert_eq!(walk.len(), 252);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WalkRequest {
    /// Number of points in the walk.
    pub length: usize,
    /// Maximum absolute size of a single step.
    pub volatility: i64,
    /// Value the accumulator starts from (not itself emitted).
    pub start_value: i64,
    /// Seed for reproducibility; `None` selects a time-derived seed.
    pub seed: Option<u64>,
}

impl WalkRequest {
    /// Creates a request for `length` points with default parameters.
    #[inline]
    pub fn new(length: usize) -> Self {
        Self {
            length,
            volatility: DEFAULT_VOLATILITY,
            start_value: DEFAULT_START_VALUE,
            seed: None,
        }
    }

    /// Sets the step bound.
    #[inline]
    pub fn volatility(mut self, volatility: i64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Sets the starting value.
    #[inline]
    pub fn start_value(mut self, start_value: i64) -> Self {
        self.start_value = start_value;
        self
    }

    /// Sets an explicit seed. Zero is a valid seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the seed, including clearing it with `None`.
    #[inline]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidArgument`] if `volatility <= 0`.
    pub fn validate(&self) -> Result<(), WalkError> {
        if self.volatility <= 0 {
            return Err(WalkError::invalid_argument(
                "volatility",
                format!("must be positive, got {}", self.volatility),
            ));
        }
        Ok(())
    }

    /// Generates the walk described by this request.
    ///
    /// # Errors
    ///
    /// Returns [`WalkError::InvalidArgument`] if `volatility <= 0`.
    #[inline]
    pub fn generate(&self) -> Result<WalkResult, WalkError> {
        generate_walk(self.length, self.volatility, self.start_value, self.seed)
    }
}

impl Default for WalkRequest {
    /// An empty walk with default parameters.
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = WalkRequest::new(10);
        assert_eq!(request.length, 10);
        assert_eq!(request.volatility, 3);
        assert_eq!(request.start_value, 50);
        assert_eq!(request.seed, None);
    }

    #[test]
    fn test_setters() {
        let request = WalkRequest::new(3).volatility(7).start_value(-4).seed(0);
        assert_eq!(request.volatility, 7);
        assert_eq!(request.start_value, -4);
        assert_eq!(request.seed, Some(0));

        let cleared = request.with_seed(None);
        assert_eq!(cleared.seed, None);
    }

    #[test]
    fn test_validate_rejects_non_positive_volatility() {
        for volatility in [0, -1, i64::MIN] {
            let err = WalkRequest::new(5).volatility(volatility).validate().unwrap_err();
            assert!(matches!(
                err,
                WalkError::InvalidArgument {
                    name: "volatility",
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_validate_accepts_zero_length() {
        assert!(WalkRequest::default().validate().is_ok());
    }

    #[test]
    fn test_generate_matches_free_function() {
        let request = WalkRequest::new(50).volatility(2).start_value(7).seed(11);
        let via_request = request.generate().unwrap();
        let direct = generate_walk(50, 2, 7, Some(11)).unwrap();
        assert_eq!(via_request, direct);
    }
}
