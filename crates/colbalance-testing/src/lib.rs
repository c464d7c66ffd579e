//! Testing utilities for colbalance layouts

pub mod assertions;
pub mod fixtures;
pub mod invariants;

pub use assertions::*;
pub use fixtures::*;
pub use invariants::*;

pub mod prelude {
    pub use crate::assertions::{assert_approx_eq, assert_rect_approx_eq};
    pub use crate::fixtures::{items_from_sizes, labeled_items, scattered_items, FixedItem};
    pub use crate::invariants::check_layout_invariants;
}
