//! Flow layout: tags run left to right and wrap onto a new row when the
//! current one is full.
//!
//! Both passes walk the children with the same [`Row`] accumulator and the
//! same wrap predicate, so the rows found while measuring are exactly the
//! rows used while placing, and placement never overflows the measured
//! height.

use flowtag_core::{Insets, LayoutError, LayoutStyle, MeasureSpec, Rect, Size, Tag};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Slack allowed when comparing a row against its limit, so the width
/// reported by the measure pass always fits its own row again.
const WRAP_EPSILON: f32 = 1e-3;

/// Frame assigned to a visible child.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Position of the child in the container's child sequence
    pub index: usize,
    /// Frame in the container's coordinate space
    pub frame: Rect,
}

/// Output of a full measure + layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Container size
    pub size: Size,
    /// Frames of visible children, in child order
    pub placements: Vec<Placement>,
}

impl LayoutResult {
    /// Frame of the child at `index`, if it was placed.
    #[must_use]
    pub fn frame_of(&self, index: usize) -> Option<Rect> {
        self.placements
            .iter()
            .find(|placement| placement.index == index)
            .map(|placement| placement.frame)
    }

    /// Number of rows in the result.
    #[must_use]
    pub fn row_count(&self) -> usize {
        let mut rows = 0;
        let mut last_y = None;
        for placement in &self.placements {
            if last_y != Some(placement.frame.y) {
                rows += 1;
                last_y = Some(placement.frame.y);
            }
        }
        rows
    }
}

/// Running state of the row being filled.
#[derive(Debug, Clone, Copy, Default)]
struct Row {
    /// Offset of the next child from the row start, spacing included
    cursor: f32,
    /// Right edge of the last child, spacing excluded
    extent: f32,
    max_height: f32,
    items: usize,
}

impl Row {
    /// A child wraps when the row already holds something and the child
    /// would cross `limit`. A lone child never wraps, however wide.
    fn wraps(&self, child_width: f32, limit: f32) -> bool {
        self.items > 0 && self.cursor + child_width > limit + WRAP_EPSILON
    }

    fn push(&mut self, child: Size, spacing: f32) -> f32 {
        let offset = self.cursor;
        self.extent = offset + child.width;
        self.cursor = self.extent + spacing;
        self.max_height = self.max_height.max(child.height);
        self.items += 1;
        offset
    }
}

/// Row-wrapping layout over a borrowed style.
#[derive(Debug, Clone, Copy)]
pub struct FlowLayoutEngine<'s> {
    style: &'s LayoutStyle,
}

impl<'s> FlowLayoutEngine<'s> {
    /// Create an engine for the given style.
    #[must_use]
    pub const fn new(style: &'s LayoutStyle) -> Self {
        Self { style }
    }

    /// Style the engine lays out with.
    #[must_use]
    pub const fn style(&self) -> &'s LayoutStyle {
        self.style
    }

    /// Measure pass: ask every child for its size and compute the size of
    /// the container.
    ///
    /// Without a wrap the width hugs the single row; once anything wraps the
    /// container takes the full available width. Exact specs override the
    /// computed value.
    pub fn measure<T: Tag>(
        &self,
        children: &mut [T],
        width: MeasureSpec,
        height: MeasureSpec,
        padding: Insets,
    ) -> Result<Size, LayoutError> {
        let width = width.validate("width")?;
        let height = height.validate("height")?;
        let padding = padding.validate()?;

        let child_width_spec = width.for_child(padding.horizontal());
        let child_height_spec = height.for_child(padding.vertical());
        let limit = (width.available() - padding.horizontal()).max(0.0);
        let spacing = self.style.horizontal_spacing();

        let mut row = Row::default();
        let mut wraps = 0_usize;
        let mut content_height = 0.0_f32;

        for (index, child) in children.iter_mut().enumerate() {
            let size = child.measure(child_width_spec, child_height_spec);
            if !child.is_visible() {
                continue;
            }
            let size = size.validate("child.width", "child.height")?;

            if row.wraps(size.width, limit) {
                trace!(index, row_width = row.extent, "tag wraps to a new row");
                wraps += 1;
                content_height += row.max_height + self.style.vertical_spacing();
                row = Row::default();
            }
            row.push(size, spacing);
        }

        content_height += row.max_height;

        let computed_width = if wraps == 0 {
            row.extent + padding.horizontal()
        } else {
            width.available()
        };
        let computed_height = content_height + padding.vertical();
        let size = Size::new(width.resolve(computed_width), height.resolve(computed_height));

        debug!(
            children = children.len(),
            rows = wraps + usize::from(row.items > 0),
            width = size.width,
            height = size.height,
            "measured flow layout"
        );
        Ok(size)
    }

    /// Layout pass: place every visible child inside `bounds`, using the
    /// size stored by the measure pass. Collapsed children get no placement
    /// and do not move the cursor.
    pub fn layout<T: Tag>(
        &self,
        children: &[T],
        bounds: Rect,
        padding: Insets,
    ) -> Result<Vec<Placement>, LayoutError> {
        if !bounds.x.is_finite() {
            return Err(LayoutError::InvalidArgument {
                name: "bounds.x",
                value: bounds.x,
            });
        }
        if !bounds.y.is_finite() {
            return Err(LayoutError::InvalidArgument {
                name: "bounds.y",
                value: bounds.y,
            });
        }
        bounds.size().validate("bounds.width", "bounds.height")?;
        let padding = padding.validate()?;

        let left = bounds.x + padding.left;
        let limit = (bounds.width - padding.horizontal()).max(0.0);
        let spacing = self.style.horizontal_spacing();

        let mut top = bounds.y + padding.top;
        let mut row = Row::default();
        let mut placements = Vec::with_capacity(children.len());

        for (index, child) in children.iter().enumerate() {
            if !child.is_visible() {
                continue;
            }
            let size = child
                .measured_size()
                .validate("child.width", "child.height")?;

            if row.wraps(size.width, limit) {
                top += row.max_height + self.style.vertical_spacing();
                row = Row::default();
            }
            let offset = row.push(size, spacing);

            placements.push(Placement {
                index,
                frame: Rect::new(left + offset, top, size.width, size.height),
            });
        }

        debug!(placed = placements.len(), "laid out flow layout");
        Ok(placements)
    }

    /// Measure, then lay out at the origin with the measured size.
    pub fn compute<T: Tag>(
        &self,
        children: &mut [T],
        width: MeasureSpec,
        height: MeasureSpec,
        padding: Insets,
    ) -> Result<LayoutResult, LayoutError> {
        let size = self.measure(children, width, height, padding)?;
        let placements = self.layout(children, Rect::from_size(size), padding)?;
        Ok(LayoutResult { size, placements })
    }
}
