//! Layout constraints and the validated viewport bound

use crate::error::LayoutError;
use colbalance_ui_graphics::Size;

/// Constraints handed down by the host during measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Creates constraints with loose bounds (min = 0, max = given values).
    pub fn loose(max_width: f32, max_height: f32) -> Self {
        Self {
            min_width: 0.0,
            max_width,
            min_height: 0.0,
            max_height,
        }
    }

    /// Returns true if the width is bounded (max_width is finite).
    #[inline]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }
}

/// The visible bound a layout pass balances columns against.
///
/// Construction is the only place a bound is validated: width and height
/// must be non-negative and not NaN. The height may be infinite when the
/// host places no scrolling limit, in which case every item fits the first
/// column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, LayoutError> {
        if !Size::new(width, height).is_non_negative() {
            return Err(LayoutError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Uses the maximum bounds of the host constraints as the visible size.
    pub fn from_constraints(constraints: Constraints) -> Result<Self, LayoutError> {
        Self::new(constraints.max_width, constraints.max_height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The budget each item is asked to self-size within.
    pub fn item_constraints(&self) -> Constraints {
        Constraints::loose(self.width, self.height)
    }
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
