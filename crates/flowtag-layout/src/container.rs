//! Tag container adapter for hosts driving the measure/layout protocol.

use crate::flow::{FlowLayoutEngine, Placement};
use flowtag_core::{Insets, LayoutError, LayoutStyle, MeasureSpec, Rect, Size, Tag};

/// A container that owns its tags and lays them out in wrapping rows.
///
/// The host calls [`FlowTagLayout::on_measure`] and then
/// [`FlowTagLayout::on_layout`], in that order, as many times as it likes.
/// Nothing computed by one pass is reused by the next.
#[derive(Debug, Clone)]
pub struct FlowTagLayout<T> {
    style: LayoutStyle,
    padding: Insets,
    tags: Vec<T>,
    measured: Option<Size>,
}

impl<T: Tag> FlowTagLayout<T> {
    /// Create an empty container padded as the style says.
    #[must_use]
    pub fn new(style: LayoutStyle) -> Self {
        Self {
            padding: style.padding(),
            style,
            tags: Vec::new(),
            measured: None,
        }
    }

    /// Override the container padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Container style.
    #[must_use]
    pub const fn style(&self) -> &LayoutStyle {
        &self.style
    }

    /// Container padding.
    #[must_use]
    pub const fn padding(&self) -> Insets {
        self.padding
    }

    /// Append a tag.
    pub fn add_tag(&mut self, tag: T) {
        self.tags.push(tag);
    }

    /// Insert a tag at `index`, clamped to the end of the sequence.
    pub fn insert_tag(&mut self, index: usize, tag: T) {
        let index = index.min(self.tags.len());
        self.tags.insert(index, tag);
    }

    /// Remove and return the tag at `index`.
    pub fn remove_tag(&mut self, index: usize) -> Option<T> {
        (index < self.tags.len()).then(|| self.tags.remove(index))
    }

    /// Remove every tag.
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    /// Tags in order.
    #[must_use]
    pub fn tags(&self) -> &[T] {
        &self.tags
    }

    /// Tags in order, mutable.
    pub fn tags_mut(&mut self) -> &mut [T] {
        &mut self.tags
    }

    /// Number of tags, visible or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the container holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Size from the last successful measure pass.
    #[must_use]
    pub const fn measured_size(&self) -> Option<Size> {
        self.measured
    }

    /// Measure every tag and the container itself.
    ///
    /// A failed pass leaves no measured size behind.
    pub fn on_measure(
        &mut self,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<Size, LayoutError> {
        self.measured = None;
        let engine = FlowLayoutEngine::new(&self.style);
        let size = engine.measure(&mut self.tags, width, height, self.padding)?;
        self.measured = Some(size);
        Ok(size)
    }

    /// Place every visible tag inside `bounds` and hand each its frame.
    /// Collapsed tags lose any frame an earlier pass gave them.
    ///
    /// Hosts reporting left/top/right/bottom edges build `bounds` with
    /// [`Rect::from_edges`].
    pub fn on_layout(&mut self, bounds: Rect) -> Result<Vec<Placement>, LayoutError> {
        let engine = FlowLayoutEngine::new(&self.style);
        let placements = engine.layout(&self.tags, bounds, self.padding)?;
        for tag in self.tags.iter_mut().filter(|tag| !tag.is_visible()) {
            tag.clear_frame();
        }
        for placement in &placements {
            self.tags[placement.index].set_frame(placement.frame);
        }
        Ok(placements)
    }
}
