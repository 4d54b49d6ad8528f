//! The contract between a tag container and its children.

use crate::geometry::{Rect, Size};
use crate::measure_spec::MeasureSpec;

/// A child element arranged by a tag container.
///
/// The container never computes a tag's intrinsic size itself: it asks the
/// tag once per measure pass and afterwards reads the stored result back
/// through [`Tag::measured_size`].
pub trait Tag {
    /// Measure the tag under the given constraints and store the result.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Size stored by the last call to [`Tag::measure`].
    fn measured_size(&self) -> Size;

    /// Collapsed tags take no space and receive no frame.
    fn is_visible(&self) -> bool {
        true
    }

    /// Receive the frame assigned by the layout pass.
    fn set_frame(&mut self, frame: Rect);

    /// Drop the frame of a tag that was collapsed since the last layout.
    fn clear_frame(&mut self) {}
}

impl<T: Tag + ?Sized> Tag for Box<T> {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        (**self).measure(width, height)
    }

    fn measured_size(&self) -> Size {
        (**self).measured_size()
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn set_frame(&mut self, frame: Rect) {
        (**self).set_frame(frame);
    }

    fn clear_frame(&mut self) {
        (**self).clear_frame();
    }
}
