//! Measure/arrange surface for hosts.
//!
//! Hosts run two passes over the same item snapshot. Both go through
//! [`run_layout`], which builds a fresh engine every time, so calling
//! measure repeatedly before a single arrange yields identical results.

use crate::config::ColumnBalanceSpec;
use crate::constraints::{Constraints, Viewport};
use crate::engine::{ItemPlacement, LayoutEngine, SizedLayout};
use crate::error::LayoutError;
use crate::item::ColumnItem;
use colbalance_ui_graphics::Size;

/// Result of an arrange pass.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasureResult {
    pub size: Size,
    pub placements: Vec<ItemPlacement>,
}

impl MeasureResult {
    pub fn new(size: Size, placements: Vec<ItemPlacement>) -> Self {
        Self { size, placements }
    }
}

/// Runs assignment and sizing for one pass.
pub fn run_layout<T: ColumnItem>(
    items: &[T],
    viewport: Viewport,
    spec: ColumnBalanceSpec,
) -> Result<SizedLayout, LayoutError> {
    let mut engine = LayoutEngine::new(viewport, spec);
    engine.assign_items(items)?;
    Ok(engine.calculate_column_sizes())
}

/// Total content size; height exceeds the viewport when columns overflow.
pub fn compute_total_size<T: ColumnItem>(
    items: &[T],
    viewport: Viewport,
    spec: ColumnBalanceSpec,
) -> Result<Size, LayoutError> {
    Ok(run_layout(items, viewport, spec)?.total_size())
}

pub fn compute_placements<T: ColumnItem>(
    items: &[T],
    viewport: Viewport,
    spec: ColumnBalanceSpec,
) -> Result<Vec<ItemPlacement>, LayoutError> {
    Ok(run_layout(items, viewport, spec)?.placements())
}

/// Policy a panel adapter drives from its measure and arrange overrides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BalancedColumnsPolicy {
    spec: ColumnBalanceSpec,
}

impl BalancedColumnsPolicy {
    pub fn new(spec: ColumnBalanceSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> ColumnBalanceSpec {
        self.spec
    }

    /// Measure pass: the desired size to report upward.
    pub fn measure<T: ColumnItem>(
        &self,
        items: &[T],
        constraints: Constraints,
    ) -> Result<Size, LayoutError> {
        let viewport = Viewport::from_constraints(constraints)?;
        if !constraints.has_bounded_width() {
            log::warn!(
                "measuring {} items with unbounded width; columns keep their desired widths",
                items.len()
            );
        }
        compute_total_size(items, viewport, self.spec)
    }

    /// Arrange pass: the total size plus one rectangle per item.
    pub fn arrange<T: ColumnItem>(
        &self,
        items: &[T],
        constraints: Constraints,
    ) -> Result<MeasureResult, LayoutError> {
        let viewport = Viewport::from_constraints(constraints)?;
        let layout = run_layout(items, viewport, self.spec)?;
        Ok(MeasureResult::new(layout.total_size(), layout.placements()))
    }
}

#[cfg(test)]
#[path = "tests/policy_tests.rs"]
mod tests;
