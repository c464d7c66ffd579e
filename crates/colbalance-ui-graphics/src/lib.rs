//! Geometry primitives shared by the colbalance layout crates
//!
//! Sizes and rectangles are plain `f32` data in layout units; nothing here
//! knows about columns or items.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Rect, Size};
}
