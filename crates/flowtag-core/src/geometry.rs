//! Geometric primitives: Size, Rect, Insets.

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Fail fast on a negative or non-finite dimension.
    pub fn validate(
        &self,
        width_name: &'static str,
        height_name: &'static str,
    ) -> Result<Self, LayoutError> {
        LayoutError::check_argument(width_name, self.width)?;
        LayoutError::check_argument(height_name, self.height)?;
        Ok(*self)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from left/top/right/bottom edges, as hosts report frames.
    #[must_use]
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Create from size at origin.
    #[must_use]
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Get the size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if this rectangle intersects another.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Padding on the four sides of a container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Insets {
    /// Left padding
    pub left: f32,
    /// Top padding
    pub top: f32,
    /// Right padding
    pub right: f32,
    /// Bottom padding
    pub bottom: f32,
}

impl Insets {
    /// No padding.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Create insets with individual values.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same padding on left/right and on top/bottom.
    #[must_use]
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Total horizontal padding.
    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding.
    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Fail fast on a negative or non-finite side.
    pub fn validate(&self) -> Result<Self, LayoutError> {
        LayoutError::check_argument("padding.left", self.left)?;
        LayoutError::check_argument("padding.top", self.top)?;
        LayoutError::check_argument("padding.right", self.right)?;
        LayoutError::check_argument("padding.bottom", self.bottom)?;
        Ok(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_validate() {
        assert!(Size::new(0.0, 10.0).validate("w", "h").is_ok());
        assert_eq!(
            Size::new(-1.0, 10.0).validate("w", "h"),
            Err(LayoutError::InvalidArgument {
                name: "w",
                value: -1.0
            })
        );
        assert!(Size::new(f32::NAN, 10.0).validate("w", "h").is_err());
        assert!(Size::new(10.0, f32::INFINITY).validate("w", "h").is_err());
    }

    #[test]
    fn test_rect_from_edges() {
        let r = Rect::from_edges(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r, Rect::new(10.0, 20.0, 100.0, 50.0));
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn test_rect_intersects_edge_touching() {
        let a = Rect::new(0.0, 0.0, 50.0, 20.0);
        let b = Rect::new(50.0, 0.0, 50.0, 20.0);
        let c = Rect::new(49.0, 0.0, 50.0, 20.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_insets_totals() {
        let insets = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(insets.horizontal(), 4.0);
        assert_eq!(insets.vertical(), 6.0);
        assert!(insets.validate().is_ok());
        assert_eq!(
            Insets::new(0.0, 0.0, -2.0, 0.0).validate(),
            Err(LayoutError::InvalidArgument {
                name: "padding.right",
                value: -2.0
            })
        );
    }

    #[test]
    fn test_geometry_serde() {
        let insets = Insets::symmetric(12.0, 3.0);
        let json = serde_json::to_string(&insets).unwrap();
        let back: Insets = serde_json::from_str(&json).unwrap();
        assert_eq!(insets, back);
    }
}
