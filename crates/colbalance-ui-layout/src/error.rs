//! Errors reported at the layout boundary.

use thiserror::Error;

/// Precondition violations detected before a layout pass starts.
///
/// Everything past the boundary (empty input, negative slack, overflowing
/// columns) is handled inside the engine and never surfaces as an error.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    #[error("invalid viewport {width}x{height}: dimensions must be non-negative numbers")]
    InvalidViewport { width: f32, height: f32 },

    #[error("item {index} has invalid desired size {width}x{height}")]
    InvalidItemSize { index: usize, width: f32, height: f32 },
}
