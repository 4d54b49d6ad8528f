//! Tag container style: declarative attributes and their resolved pixel form.

use crate::error::LayoutError;
use crate::geometry::Insets;
use crate::units::DisplayMetrics;
use serde::{Deserialize, Serialize};

/// Default horizontal spacing between tags, in dp.
pub const DEFAULT_HORIZONTAL_SPACING_DP: f32 = 8.0;
/// Default vertical spacing between rows, in dp.
pub const DEFAULT_VERTICAL_SPACING_DP: f32 = 4.0;
/// Default horizontal padding, in dp.
pub const DEFAULT_HORIZONTAL_PADDING_DP: f32 = 12.0;
/// Default vertical padding, in dp.
pub const DEFAULT_VERTICAL_PADDING_DP: f32 = 3.0;
/// Default tag border stroke width, in dp.
pub const DEFAULT_BORDER_STROKE_WIDTH_DP: f32 = 0.5;
/// Default tag text size, in sp.
pub const DEFAULT_TEXT_SIZE_SP: f32 = 13.0;

/// Attribute overrides as written in a layout declaration.
///
/// Lengths are density-independent (dp), the text size is scale-independent
/// (sp). Unset fields fall back to the defaults above.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleAttributes {
    /// Horizontal spacing between tags (dp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_spacing: Option<f32>,
    /// Vertical spacing between rows (dp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_spacing: Option<f32>,
    /// Horizontal padding (dp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_padding: Option<f32>,
    /// Vertical padding (dp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_padding: Option<f32>,
    /// Tag border stroke width (dp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_stroke_width: Option<f32>,
    /// Tag text size (sp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_size: Option<f32>,
}

impl StyleAttributes {
    /// Create an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override both spacings.
    #[must_use]
    pub const fn spacing(mut self, horizontal: f32, vertical: f32) -> Self {
        self.horizontal_spacing = Some(horizontal);
        self.vertical_spacing = Some(vertical);
        self
    }

    /// Override both paddings.
    #[must_use]
    pub const fn padding(mut self, horizontal: f32, vertical: f32) -> Self {
        self.horizontal_padding = Some(horizontal);
        self.vertical_padding = Some(vertical);
        self
    }

    /// Override the border stroke width.
    #[must_use]
    pub const fn border_stroke_width(mut self, width: f32) -> Self {
        self.border_stroke_width = Some(width);
        self
    }

    /// Override the text size.
    #[must_use]
    pub const fn text_size(mut self, size: f32) -> Self {
        self.text_size = Some(size);
        self
    }

    /// Resolve against display metrics into pixel values.
    ///
    /// Spacing and padding snap down to whole pixels; the stroke width and
    /// text size keep their fractional part.
    pub fn resolve(&self, metrics: &DisplayMetrics) -> Result<LayoutStyle, LayoutError> {
        metrics.validate()?;
        let dp = |value: Option<f32>, default: f32| metrics.dp_to_px(value.unwrap_or(default));

        LayoutStyle::new(
            dp(self.horizontal_spacing, DEFAULT_HORIZONTAL_SPACING_DP).trunc(),
            dp(self.vertical_spacing, DEFAULT_VERTICAL_SPACING_DP).trunc(),
            dp(self.horizontal_padding, DEFAULT_HORIZONTAL_PADDING_DP).trunc(),
            dp(self.vertical_padding, DEFAULT_VERTICAL_PADDING_DP).trunc(),
            dp(self.border_stroke_width, DEFAULT_BORDER_STROKE_WIDTH_DP),
            metrics.sp_to_px(self.text_size.unwrap_or(DEFAULT_TEXT_SIZE_SP)),
        )
    }
}

/// Resolved style of a tag container, in pixels.
///
/// Built once when the container is created and only read afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutStyle {
    horizontal_spacing: f32,
    vertical_spacing: f32,
    horizontal_padding: f32,
    vertical_padding: f32,
    border_stroke_width: f32,
    text_size: f32,
}

impl LayoutStyle {
    /// Create a style from pixel values, rejecting negative or non-finite ones.
    pub fn new(
        horizontal_spacing: f32,
        vertical_spacing: f32,
        horizontal_padding: f32,
        vertical_padding: f32,
        border_stroke_width: f32,
        text_size: f32,
    ) -> Result<Self, LayoutError> {
        let style = Self {
            horizontal_spacing,
            vertical_spacing,
            horizontal_padding,
            vertical_padding,
            border_stroke_width,
            text_size,
        };
        style.validate()?;
        Ok(style)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        for (field, value) in [
            ("horizontal_spacing", self.horizontal_spacing),
            ("vertical_spacing", self.vertical_spacing),
            ("horizontal_padding", self.horizontal_padding),
            ("vertical_padding", self.vertical_padding),
            ("border_stroke_width", self.border_stroke_width),
            ("text_size", self.text_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidStyle { field, value });
            }
        }
        Ok(())
    }

    /// Gap between neighbouring tags on a row.
    #[must_use]
    pub const fn horizontal_spacing(&self) -> f32 {
        self.horizontal_spacing
    }

    /// Gap between rows.
    #[must_use]
    pub const fn vertical_spacing(&self) -> f32 {
        self.vertical_spacing
    }

    /// Left and right padding.
    #[must_use]
    pub const fn horizontal_padding(&self) -> f32 {
        self.horizontal_padding
    }

    /// Top and bottom padding.
    #[must_use]
    pub const fn vertical_padding(&self) -> f32 {
        self.vertical_padding
    }

    /// Tag outline stroke width.
    #[must_use]
    pub const fn border_stroke_width(&self) -> f32 {
        self.border_stroke_width
    }

    /// Tag text size.
    #[must_use]
    pub const fn text_size(&self) -> f32 {
        self.text_size
    }

    /// Container padding implied by the style.
    #[must_use]
    pub const fn padding(&self) -> Insets {
        Insets::symmetric(self.horizontal_padding, self.vertical_padding)
    }
}

impl Default for LayoutStyle {
    /// The default attribute set at baseline density: 8/4 spacing, 12/3
    /// padding, 0.5 stroke, 13 text.
    fn default() -> Self {
        Self {
            horizontal_spacing: DEFAULT_HORIZONTAL_SPACING_DP,
            vertical_spacing: DEFAULT_VERTICAL_SPACING_DP,
            horizontal_padding: DEFAULT_HORIZONTAL_PADDING_DP,
            vertical_padding: DEFAULT_VERTICAL_PADDING_DP,
            border_stroke_width: DEFAULT_BORDER_STROKE_WIDTH_DP,
            text_size: DEFAULT_TEXT_SIZE_SP,
        }
    }
}
