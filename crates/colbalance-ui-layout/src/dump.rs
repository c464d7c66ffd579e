//! Human-readable dump of a sized layout.
//!
//! ```text
//! column 0: desired 350x448, calculated 360, overflow
//!   header: 350x250
//!   #1: 300x198
//! ```
//!
//! Items without a label print as `#<index>`.

use crate::engine::SizedLayout;
use crate::item::ColumnItem;
use std::fmt;

/// Display adapter pairing a layout with the items it was built from.
pub struct LayoutDump<'a, T> {
    layout: &'a SizedLayout,
    items: &'a [T],
}

impl SizedLayout {
    /// Returns a [`Display`](fmt::Display) adapter that labels entries from
    /// `items`.
    ///
    /// Labels are looked up by input index, so `items` must be every item
    /// the engine assigned, in order. After several `assign_items` batches
    /// that means the batches concatenated.
    pub fn dump<'a, T: ColumnItem>(&'a self, items: &'a [T]) -> LayoutDump<'a, T> {
        LayoutDump {
            layout: self,
            items,
        }
    }

    pub fn debug_dump<T: ColumnItem>(&self, items: &[T]) -> String {
        self.dump(items).to_string()
    }
}

impl<T: ColumnItem> fmt::Display for LayoutDump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_layout(f, self.layout, |index| {
            self.items.get(index).and_then(|item| item.label())
        })
    }
}

impl fmt::Display for SizedLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_layout(f, self, |_| None)
    }
}

fn write_layout<'a>(
    f: &mut fmt::Formatter<'_>,
    layout: &SizedLayout,
    label_of: impl Fn(usize) -> Option<&'a str>,
) -> fmt::Result {
    for (index, column) in layout.columns().iter().enumerate() {
        write!(
            f,
            "column {}: desired {}x{}, calculated {}",
            index,
            column.desired_width(),
            column.desired_height(),
            column.calculated_width()
        )?;
        if column.is_overflowed() {
            f.write_str(", overflow")?;
        }
        writeln!(f)?;

        for entry in column.elements() {
            match label_of(entry.index) {
                Some(label) => write!(f, "  {label}")?,
                None => write!(f, "  #{}", entry.index)?,
            }
            writeln!(f, ": {}x{}", entry.size.width, entry.size.height)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/dump_tests.rs"]
mod tests;
