//! A single vertical bucket of items.

use colbalance_ui_graphics::Size;
use smallvec::SmallVec;

/// Inline capacity for column entries. Typical columns hold a handful of
/// items, so 8 keeps most passes off the heap.
pub type ColumnEntries = SmallVec<[ColumnEntry; 8]>;

/// One item as seen by a column: its position in the input and its
/// measured size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnEntry {
    pub index: usize,
    pub size: Size,
}

impl ColumnEntry {
    pub fn new(index: usize, size: Size) -> Self {
        Self { index, size }
    }
}

/// Ordered items sharing one horizontal slot.
///
/// Desired width and height are derived from the entries on every call;
/// nothing is cached, so membership is the only state that matters.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    elements: ColumnEntries,
    visible_height: f32,
    calculated_width: f32,
    overflowed: bool,
}

impl Column {
    /// Creates an empty column with a height budget fixed for its lifetime.
    pub fn new(visible_height: f32) -> Self {
        Self {
            elements: SmallVec::new(),
            visible_height,
            calculated_width: 0.0,
            overflowed: false,
        }
    }

    /// Returns true if an item of `size` fits under the height budget.
    pub fn can_accommodate(&self, size: Size) -> bool {
        self.desired_height() + size.height <= self.visible_height
    }

    /// Appends an entry after the last one.
    pub fn add(&mut self, entry: ColumnEntry) {
        self.elements.push(entry);
    }

    /// Appends an entry that did not fit anywhere, marking the column as
    /// overflowing its budget.
    pub(crate) fn add_overflow(&mut self, entry: ColumnEntry) {
        self.overflowed = true;
        self.add(entry);
    }

    /// Widest entry, or 0 for an empty column.
    pub fn desired_width(&self) -> f32 {
        self.elements
            .iter()
            .map(|entry| entry.size.width)
            .fold(0.0, f32::max)
    }

    /// Stacked height of all entries, or 0 for an empty column.
    pub fn desired_height(&self) -> f32 {
        self.elements.iter().map(|entry| entry.size.height).sum()
    }

    /// Height left under the budget; negative once the column overflows.
    pub fn remaining_height(&self) -> f32 {
        self.visible_height - self.desired_height()
    }

    #[inline]
    pub fn visible_height(&self) -> f32 {
        self.visible_height
    }

    /// Final width after slack distribution. Zero until sizing runs.
    #[inline]
    pub fn calculated_width(&self) -> f32 {
        self.calculated_width
    }

    pub(crate) fn set_calculated_width(&mut self, width: f32) {
        self.calculated_width = width;
    }

    /// Returns true once an item was placed here by the overflow fallback.
    #[inline]
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn elements(&self) -> &[ColumnEntry] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/column_tests.rs"]
mod tests;
