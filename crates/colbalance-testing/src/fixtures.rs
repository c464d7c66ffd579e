//! Items with fixed sizes for driving layouts in tests.

use colbalance_ui_graphics::Size;
use colbalance_ui_layout::{ColumnItem, Constraints, SizeProvider};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// An item that always reports the same size, whatever the budget.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedItem {
    pub label: Option<String>,
    pub size: Size,
}

impl FixedItem {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            label: None,
            size: Size::new(width, height),
        }
    }

    pub fn labeled(label: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            label: Some(label.into()),
            size: Size::new(width, height),
        }
    }
}

impl ColumnItem for FixedItem {
    fn desired_size(&self) -> Size {
        self.size
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl SizeProvider for FixedItem {
    fn measure(&self, _constraints: Constraints) -> Size {
        self.size
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Unlabelled items from `(width, height)` pairs, in order.
pub fn items_from_sizes(sizes: &[(f32, f32)]) -> Vec<FixedItem> {
    sizes
        .iter()
        .map(|&(width, height)| FixedItem::new(width, height))
        .collect()
}

pub fn labeled_items(items: &[(&str, f32, f32)]) -> Vec<FixedItem> {
    items
        .iter()
        .map(|&(label, width, height)| FixedItem::labeled(label, width, height))
        .collect()
}

/// Seeded random sizes for property-style tests.
///
/// Widths fall in `[min, max)` and heights in `[min, max * 2)`; the same
/// seed always yields the same sequence.
pub fn scattered_items(count: usize, seed: u64, min: f32, max: f32) -> Vec<FixedItem> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let width = rng.gen_range(min..max);
            let height = rng.gen_range(min..max * 2.0);
            FixedItem::new(width, height)
        })
        .collect()
}
