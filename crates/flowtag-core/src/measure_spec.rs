//! Parent-imposed sizing constraints for the measure pass.

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// How a parent constrains one dimension of a child.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum MeasureSpec {
    /// The parent fixed the size; the child must use it verbatim.
    Exact(f32),
    /// The child may be as large as it wants up to the given size.
    AtMost(f32),
    /// No constraint.
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// The size carried by the spec, if any.
    #[must_use]
    pub const fn size(&self) -> Option<f32> {
        match self {
            Self::Exact(size) | Self::AtMost(size) => Some(*size),
            Self::Unspecified => None,
        }
    }

    /// Space available for content. Unbounded when unspecified.
    #[must_use]
    pub fn available(&self) -> f32 {
        self.size().unwrap_or(f32::INFINITY)
    }

    /// Fail fast on negative or non-finite sizes.
    pub fn validate(self, name: &'static str) -> Result<Self, LayoutError> {
        if let Some(size) = self.size() {
            LayoutError::check_argument(name, size)?;
        }
        Ok(self)
    }

    /// Final size for a computed value: the exact size wins, anything else
    /// keeps the computed value clamped at zero.
    #[must_use]
    pub fn resolve(&self, computed: f32) -> f32 {
        match self {
            Self::Exact(size) => *size,
            Self::AtMost(_) | Self::Unspecified => computed.max(0.0),
        }
    }

    /// Spec handed to a wrap-content child once `padding` is taken out.
    #[must_use]
    pub fn for_child(&self, padding: f32) -> Self {
        match self {
            Self::Exact(size) | Self::AtMost(size) => Self::AtMost((size - padding).max(0.0)),
            Self::Unspecified => Self::Unspecified,
        }
    }

    /// Apply the spec to a child's preferred size.
    #[must_use]
    pub fn constrain(&self, preferred: f32) -> f32 {
        match self {
            Self::Exact(size) => *size,
            Self::AtMost(size) => preferred.min(*size),
            Self::Unspecified => preferred,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available() {
        assert_eq!(MeasureSpec::Exact(140.0).available(), 140.0);
        assert_eq!(MeasureSpec::AtMost(90.0).available(), 90.0);
        assert_eq!(MeasureSpec::Unspecified.available(), f32::INFINITY);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(MeasureSpec::Exact(140.0).resolve(50.0), 140.0);
        assert_eq!(MeasureSpec::AtMost(140.0).resolve(50.0), 50.0);
        assert_eq!(MeasureSpec::Unspecified.resolve(-3.0), 0.0);
    }

    #[test]
    fn test_for_child() {
        assert_eq!(
            MeasureSpec::Exact(100.0).for_child(24.0),
            MeasureSpec::AtMost(76.0)
        );
        assert_eq!(
            MeasureSpec::AtMost(10.0).for_child(24.0),
            MeasureSpec::AtMost(0.0)
        );
        assert_eq!(
            MeasureSpec::Unspecified.for_child(24.0),
            MeasureSpec::Unspecified
        );
    }

    #[test]
    fn test_constrain() {
        assert_eq!(MeasureSpec::Exact(30.0).constrain(80.0), 30.0);
        assert_eq!(MeasureSpec::AtMost(30.0).constrain(80.0), 30.0);
        assert_eq!(MeasureSpec::AtMost(30.0).constrain(20.0), 20.0);
        assert_eq!(MeasureSpec::Unspecified.constrain(80.0), 80.0);
    }

    #[test]
    fn test_validate() {
        assert!(MeasureSpec::Exact(0.0).validate("width").is_ok());
        assert!(MeasureSpec::Unspecified.validate("width").is_ok());
        assert_eq!(
            MeasureSpec::AtMost(-1.0).validate("width"),
            Err(LayoutError::InvalidArgument {
                name: "width",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_default_is_unspecified() {
        assert_eq!(MeasureSpec::default(), MeasureSpec::Unspecified);
    }
}
