//! Ready-made tags.

use flowtag_core::{LayoutStyle, MeasureSpec, Rect, Size, Tag};
use unicode_width::UnicodeWidthStr;

/// Advance of one terminal column, as a fraction of the text size.
const COLUMN_ADVANCE_EM: f32 = 0.5;
/// Line height as a multiple of the text size.
const LINE_HEIGHT_EM: f32 = 1.25;

/// A tag with a fixed size, independent of the parent's constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTag {
    size: Size,
    visible: bool,
    frame: Option<Rect>,
}

impl FixedTag {
    /// Create a visible tag of the given size.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            visible: true,
            frame: None,
        }
    }

    /// Show or collapse the tag.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Builder form of [`FixedTag::set_visible`].
    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Frame from the last layout pass.
    #[must_use]
    pub const fn frame(&self) -> Option<Rect> {
        self.frame
    }
}

impl Tag for FixedTag {
    fn measure(&mut self, _width: MeasureSpec, _height: MeasureSpec) -> Size {
        self.size
    }

    fn measured_size(&self) -> Size {
        self.size
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = Some(frame);
    }

    fn clear_frame(&mut self) {
        self.frame = None;
    }
}

/// A text label sized from its content and the container style.
///
/// The label is padded by the style's horizontal/vertical padding and
/// outlined by its border stroke; glyphs are approximated by a fixed advance
/// per display column.
#[derive(Debug, Clone, PartialEq)]
pub struct TextTag {
    text: String,
    text_size: f32,
    inset_x: f32,
    inset_y: f32,
    measured: Size,
    visible: bool,
    frame: Option<Rect>,
}

impl TextTag {
    /// Create a label styled by `style`.
    #[must_use]
    pub fn new(text: impl Into<String>, style: &LayoutStyle) -> Self {
        Self {
            text: text.into(),
            text_size: style.text_size(),
            inset_x: style.horizontal_padding() + style.border_stroke_width(),
            inset_y: style.vertical_padding() + style.border_stroke_width(),
            measured: Size::ZERO,
            visible: true,
            frame: None,
        }
    }

    /// Label text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the label text. Takes effect on the next measure pass.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Show or collapse the tag.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Frame from the last layout pass.
    #[must_use]
    pub const fn frame(&self) -> Option<Rect> {
        self.frame
    }

    /// Size the label would like with no constraints.
    #[must_use]
    pub fn preferred_size(&self) -> Size {
        let columns = self.text.width() as f32;
        Size::new(
            (columns * self.text_size * COLUMN_ADVANCE_EM + 2.0 * self.inset_x).ceil(),
            (self.text_size * LINE_HEIGHT_EM + 2.0 * self.inset_y).ceil(),
        )
    }
}

impl Tag for TextTag {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let preferred = self.preferred_size();
        self.measured = Size::new(
            width.constrain(preferred.width),
            height.constrain(preferred.height),
        );
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = Some(frame);
    }

    fn clear_frame(&mut self) {
        self.frame = None;
    }
}
