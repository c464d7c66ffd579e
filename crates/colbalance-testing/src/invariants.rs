//! Structural checks every balanced layout must pass.

use colbalance_ui_layout::{Column, ColumnItem, SizedLayout};

const TOLERANCE: f32 = 1e-3;

/// Checks a sized layout against the items it was built from.
///
/// Returns a description of the first violation found:
/// - every item sits in exactly one column, with its measured size;
/// - columns that never overflowed stay within their height budget, unless
///   their only item is taller than the viewport on its own;
/// - unclamped widths account for exactly the spare space;
/// - placements stretch to the column width and keep the item height;
/// - the total size is the summed widths by the tallest column.
pub fn check_layout_invariants<T: ColumnItem>(
    layout: &SizedLayout,
    items: &[T],
) -> Result<(), String> {
    let mut seen = vec![0usize; items.len()];
    for (column_index, column) in layout.columns().iter().enumerate() {
        for entry in column.elements() {
            let Some(item) = items.get(entry.index) else {
                return Err(format!(
                    "column {column_index} holds unknown item {}",
                    entry.index
                ));
            };
            if entry.size != item.desired_size() {
                return Err(format!(
                    "item {} recorded as {:?}, measured {:?}",
                    entry.index,
                    entry.size,
                    item.desired_size()
                ));
            }
            seen[entry.index] += 1;
        }

        if !column.is_overflowed()
            && column.len() > 1
            && column.desired_height() > column.visible_height()
        {
            return Err(format!(
                "column {column_index} exceeds its budget without overflowing: {} > {}",
                column.desired_height(),
                column.visible_height()
            ));
        }
    }
    if let Some(index) = seen.iter().position(|&count| count != 1) {
        return Err(format!("item {index} assigned {} times", seen[index]));
    }

    let total = layout.total_size();
    let widths: f32 = layout.columns().iter().map(Column::calculated_width).sum();
    if (total.width - widths).abs() > TOLERANCE {
        return Err(format!("total width {} != summed widths {widths}", total.width));
    }
    let tallest = layout
        .columns()
        .iter()
        .map(Column::desired_height)
        .fold(0.0, f32::max);
    if total.height != tallest {
        return Err(format!("total height {} != tallest column {tallest}", total.height));
    }

    let unclamped = layout
        .columns()
        .iter()
        .all(|column| column.calculated_width() > 0.0);
    if layout.column_count() > 0 && unclamped && layout.viewport().width().is_finite() {
        let distributed = total.width - layout.total_desired_width();
        let tolerance = TOLERANCE * layout.viewport().width().max(1.0);
        if (distributed - layout.spare_space()).abs() > tolerance {
            return Err(format!(
                "distributed {distributed} but spare space is {}",
                layout.spare_space()
            ));
        }
    }

    for placement in layout.placements() {
        let column = &layout.columns()[placement.column];
        if placement.rect.width != column.calculated_width() {
            return Err(format!(
                "item {} width {} != column width {}",
                placement.index,
                placement.rect.width,
                column.calculated_width()
            ));
        }
        let height = items[placement.index].desired_size().height;
        if placement.rect.height != height {
            return Err(format!(
                "item {} height {} != desired {height}",
                placement.index, placement.rect.height
            ));
        }
    }

    Ok(())
}
