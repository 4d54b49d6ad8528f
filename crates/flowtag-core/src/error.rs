//! Error types for FlowTag.

use thiserror::Error;

/// Errors raised when a pass or a style receives malformed input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A size, bound or measurement was negative or not finite.
    #[error("invalid argument `{name}`: {value}")]
    InvalidArgument {
        /// Argument name
        name: &'static str,
        /// Offending value
        value: f32,
    },

    /// A style value or display density could not be used.
    #[error("invalid style value for `{field}`: {value}")]
    InvalidStyle {
        /// Style field name
        field: &'static str,
        /// Offending value
        value: f32,
    },
}

impl LayoutError {
    /// Check a pixel quantity is finite and non-negative.
    pub fn check_argument(name: &'static str, value: f32) -> Result<f32, Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidArgument { name, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_argument_accepts_zero() {
        assert_eq!(LayoutError::check_argument("width", 0.0), Ok(0.0));
    }

    #[test]
    fn test_check_argument_rejects_negative_and_nan() {
        let err = LayoutError::check_argument("width", -4.0).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidArgument {
                name: "width",
                value: -4.0
            }
        );
        assert!(LayoutError::check_argument("width", f32::NAN).is_err());
        assert!(LayoutError::check_argument("width", f32::INFINITY).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = LayoutError::InvalidStyle {
            field: "density",
            value: 0.0,
        };
        assert_eq!(err.to_string(), "invalid style value for `density`: 0");
    }
}
