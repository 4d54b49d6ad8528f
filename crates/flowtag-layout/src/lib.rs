#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
//! Layout engine for FlowTag.
//!
//! Arranges tags left to right and wraps them onto new rows when the
//! available width runs out, under a two-pass protocol:
//!
//! - **Measure**: every tag is measured once, rows are found, and the
//!   container reports its size (hugging a single row, or taking the full
//!   width once anything wraps).
//! - **Layout**: tags are placed row by row inside the container bounds,
//!   using the same wrap decision as the measure pass.
//!
//! [`FlowLayoutEngine`] is the stateless algorithm; [`FlowTagLayout`] is a
//! container owning its tags for hosts that drive the two passes.

mod container;
mod flow;
mod tags;

pub use container::FlowTagLayout;
pub use flow::{FlowLayoutEngine, LayoutResult, Placement};
pub use tags::{FixedTag, TextTag};
