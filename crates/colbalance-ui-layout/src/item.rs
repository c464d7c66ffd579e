//! Item contracts consumed by the layout engine.

use crate::constraints::{Constraints, Viewport};
use colbalance_ui_graphics::Size;

/// An item whose desired size was already measured for the current pass.
///
/// The engine only reads the size; it never asks the item to re-measure.
pub trait ColumnItem {
    /// The intrinsic size measured for this pass.
    fn desired_size(&self) -> Size;

    /// Optional identifying label used by the debug dump.
    fn label(&self) -> Option<&str> {
        None
    }
}

impl ColumnItem for Size {
    fn desired_size(&self) -> Size {
        *self
    }
}

impl<T: ColumnItem + ?Sized> ColumnItem for &T {
    fn desired_size(&self) -> Size {
        (**self).desired_size()
    }

    fn label(&self) -> Option<&str> {
        (**self).label()
    }
}

impl<T: ColumnItem + ?Sized> ColumnItem for Box<T> {
    fn desired_size(&self) -> Size {
        (**self).desired_size()
    }

    fn label(&self) -> Option<&str> {
        (**self).label()
    }
}

/// Host-side object able to size itself within a width/height budget.
pub trait SizeProvider {
    /// Measures the item against the provided budget.
    fn measure(&self, constraints: Constraints) -> Size;

    fn label(&self) -> Option<&str> {
        None
    }
}

impl<T: SizeProvider + ?Sized> SizeProvider for Box<T> {
    fn measure(&self, constraints: Constraints) -> Size {
        (**self).measure(constraints)
    }

    fn label(&self) -> Option<&str> {
        (**self).label()
    }
}

/// Immutable snapshot of one item after measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredItem {
    pub size: Size,
    pub label: Option<String>,
}

impl MeasuredItem {
    pub fn new(size: Size) -> Self {
        Self { size, label: None }
    }

    pub fn labeled(label: impl Into<String>, size: Size) -> Self {
        Self {
            size,
            label: Some(label.into()),
        }
    }
}

impl ColumnItem for MeasuredItem {
    fn desired_size(&self) -> Size {
        self.size
    }

    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// Measures every provider once against the viewport budget.
///
/// The returned snapshot is what both the measure and arrange passes feed
/// to the engine, so sizes cannot drift between the two.
pub fn measure_items<P: SizeProvider>(providers: &[P], viewport: Viewport) -> Vec<MeasuredItem> {
    let constraints = viewport.item_constraints();
    providers
        .iter()
        .map(|provider| MeasuredItem {
            size: provider.measure(constraints),
            label: provider.label().map(str::to_owned),
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/item_tests.rs"]
mod tests;
