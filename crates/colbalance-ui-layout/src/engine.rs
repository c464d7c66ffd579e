//! Greedy column assignment and slack-based column sizing.
//!
//! A pass runs in two stages. [`LayoutEngine`] assigns items to columns:
//! an item joins an existing column with room for it, otherwise opens a new
//! column while the viewport still has horizontal room, otherwise overflows
//! into the shortest column. [`LayoutEngine::calculate_column_sizes`] then
//! consumes the engine and distributes the horizontal slack, producing a
//! [`SizedLayout`] from which totals and placements are read.
//!
//! Columns are never rebalanced once an item lands in them, so orderings
//! such as one tall item arriving last can leave visibly uneven columns.

use crate::column::{Column, ColumnEntry};
use crate::config::{ColumnBalanceSpec, ColumnFit, SlackDistribution};
use crate::constraints::Viewport;
use crate::error::LayoutError;
use crate::item::ColumnItem;
use colbalance_ui_graphics::{Rect, Size};

/// Final rectangle for one input item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPlacement {
    /// Position of the item in the input sequence.
    pub index: usize,
    /// Column the item was assigned to, in creation order.
    pub column: usize,
    pub rect: Rect,
}

/// Assignment stage of a layout pass.
#[derive(Clone, Debug)]
pub struct LayoutEngine {
    viewport: Viewport,
    spec: ColumnBalanceSpec,
    columns: Vec<Column>,
    next_index: usize,
}

impl LayoutEngine {
    pub fn new(viewport: Viewport, spec: ColumnBalanceSpec) -> Self {
        Self {
            viewport,
            spec,
            columns: Vec::new(),
            next_index: 0,
        }
    }

    /// Assigns `items` in order, continuing the index sequence of any
    /// previous call.
    ///
    /// Every size is validated before the first assignment, so a rejected
    /// batch leaves the engine untouched.
    pub fn assign_items<T: ColumnItem>(&mut self, items: &[T]) -> Result<(), LayoutError> {
        let sizes = items
            .iter()
            .enumerate()
            .map(|(offset, item)| {
                let size = item.desired_size();
                if size.is_non_negative() && size.is_finite() {
                    Ok(size)
                } else {
                    Err(LayoutError::InvalidItemSize {
                        index: self.next_index + offset,
                        width: size.width,
                        height: size.height,
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        for size in sizes {
            let entry = ColumnEntry::new(self.next_index, size);
            self.next_index += 1;
            self.assign(entry);
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    fn assign(&mut self, entry: ColumnEntry) {
        if let Some(column) = self.accommodating_column(entry.size) {
            log::trace!("item {} -> column {}", entry.index, column);
            self.columns[column].add(entry);
            return;
        }

        let overflow_target = if self.has_room_for_new_column(entry.size.width) {
            None
        } else {
            self.shortest_column()
        };

        match overflow_target {
            Some(column) => {
                log::debug!(
                    "item {} ({}x{}) overflows into column {} (height {})",
                    entry.index,
                    entry.size.width,
                    entry.size.height,
                    column,
                    self.columns[column].desired_height()
                );
                self.columns[column].add_overflow(entry);
            }
            None => {
                log::trace!("item {} opens column {}", entry.index, self.columns.len());
                let mut column = Column::new(self.viewport.height());
                column.add(entry);
                self.columns.push(column);
            }
        }
    }

    fn accommodating_column(&self, size: Size) -> Option<usize> {
        let mut candidates = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.can_accommodate(size));

        match self.spec.fit {
            ColumnFit::FirstFit => candidates.next().map(|(index, _)| index),
            ColumnFit::BestFit => candidates
                .min_by(|(_, a), (_, b)| a.remaining_height().total_cmp(&b.remaining_height()))
                .map(|(index, _)| index),
        }
    }

    fn has_room_for_new_column(&self, width: f32) -> bool {
        if self.columns.is_empty() {
            return true;
        }
        let used_width: f32 = self.columns.iter().map(Column::desired_width).sum();
        used_width + width < self.viewport.width()
    }

    /// Shortest column by desired height; the earliest one wins ties.
    fn shortest_column(&self) -> Option<usize> {
        self.columns
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.desired_height().total_cmp(&b.desired_height()))
            .map(|(index, _)| index)
    }

    /// Distributes the horizontal slack and ends the assignment stage.
    pub fn calculate_column_sizes(self) -> SizedLayout {
        let LayoutEngine {
            viewport,
            spec,
            mut columns,
            ..
        } = self;

        let total_desired_width: f32 = columns.iter().map(Column::desired_width).sum();
        if columns.is_empty() {
            return SizedLayout {
                viewport,
                columns,
                total_desired_width,
                spare_space: 0.0,
            };
        }

        let spare_space = if viewport.width().is_finite() {
            viewport.width() - total_desired_width
        } else {
            log::debug!("unbounded viewport width; no slack distributed");
            0.0
        };

        let column_count = columns.len() as f32;
        for (index, column) in columns.iter_mut().enumerate() {
            let desired_width = column.desired_width();
            let slack = match spec.slack {
                SlackDistribution::Proportional if total_desired_width > 0.0 => {
                    spare_space * desired_width / total_desired_width
                }
                SlackDistribution::Uniform | SlackDistribution::Proportional => {
                    spare_space / column_count
                }
            };
            let width = desired_width + slack;
            if width < 0.0 {
                log::debug!("column {index} width {width} clamped to 0");
            }
            column.set_calculated_width(width.max(0.0));
        }

        SizedLayout {
            viewport,
            columns,
            total_desired_width,
            spare_space,
        }
    }
}

/// Sized stage of a layout pass: column widths are final.
#[derive(Clone, Debug, PartialEq)]
pub struct SizedLayout {
    viewport: Viewport,
    columns: Vec<Column>,
    total_desired_width: f32,
    spare_space: f32,
}

impl SizedLayout {
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn total_desired_width(&self) -> f32 {
        self.total_desired_width
    }

    /// Viewport width minus the summed desired widths; negative when the
    /// content is wider than the viewport.
    pub fn spare_space(&self) -> f32 {
        self.spare_space
    }

    /// Returns the column holding the item at `index`.
    pub fn column_of(&self, index: usize) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.elements().iter().any(|entry| entry.index == index))
    }

    /// Summed calculated widths by the tallest column's desired height.
    pub fn total_size(&self) -> Size {
        let width = self.columns.iter().map(Column::calculated_width).sum();
        let height = self
            .columns
            .iter()
            .map(Column::desired_height)
            .fold(0.0, f32::max);
        Size::new(width, height)
    }

    /// Placement rectangles in column order, top to bottom within a column.
    ///
    /// Items stretch to their column's width and keep their measured height.
    pub fn placements(&self) -> Vec<ItemPlacement> {
        let mut placements = Vec::with_capacity(self.columns.iter().map(Column::len).sum());
        let mut x = 0.0;
        for (column_index, column) in self.columns.iter().enumerate() {
            let width = column.calculated_width();
            let mut y = 0.0;
            for entry in column.elements() {
                placements.push(ItemPlacement {
                    index: entry.index,
                    column: column_index,
                    rect: Rect::new(x, y, width, entry.size.height),
                });
                y += entry.size.height;
            }
            x += width;
        }
        placements
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
