//! Core types for the FlowTag tag container.
//!
//! This crate provides the types shared by the layout engine and its hosts:
//! - Geometric primitives: [`Size`], [`Rect`], [`Insets`]
//! - Parent constraints: [`MeasureSpec`]
//! - Styling: [`StyleAttributes`] resolved through [`DisplayMetrics`] into [`LayoutStyle`]
//! - The child contract: [`Tag`]

mod error;
mod geometry;
mod measure_spec;
pub mod style;
mod tag;
mod units;

pub use error::LayoutError;
pub use geometry::{Insets, Rect, Size};
pub use measure_spec::MeasureSpec;
pub use style::{LayoutStyle, StyleAttributes};
pub use tag::Tag;
pub use units::DisplayMetrics;
