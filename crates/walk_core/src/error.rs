//! Error types for walk generation.

use thiserror::Error;

/// Errors raised by the walk generator.
///
/// Validation happens before any random draws, so an error never comes
/// with a partial result.
///
/// # Examples
/// ```
/// use walk_core::WalkError;
///
/// let err = WalkError::invalid_argument("volatility", "must be positive, got 0");
/// assert_eq!(
///     err.to_string(),
///     "Invalid argument 'volatility': must be positive, got 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// An input parameter is outside its valid domain.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },
}

impl WalkError {
    /// Create an invalid argument error
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WalkError::invalid_argument("volatility", "must be positive, got -2");
        assert!(err.to_string().contains("volatility"));
        assert!(err.to_string().contains("-2"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            WalkError::invalid_argument("volatility", "x"),
            WalkError::InvalidArgument {
                name: "volatility",
                reason: "x".to_string(),
            }
        );
    }
}
