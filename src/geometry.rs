//! Integer page-pixel geometry.

use serde::{Deserialize, Serialize};

use crate::error::RoleError;

/// A point in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in page pixels, `(x, y)` being the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Horizontal center, rounded toward zero.
    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Left edge at vertical mid-height: every context query is made for this point.
    pub fn left_reference(&self) -> PixelPoint {
        PixelPoint::new(self.x, self.y + self.height / 2)
    }

    /// Right edge at vertical mid-height.
    pub fn right_reference(&self) -> PixelPoint {
        PixelPoint::new(self.right(), self.y + self.height / 2)
    }

    /// Reject empty or inverted boxes, and boxes whose far edges do not fit in `i32`.
    ///
    /// Edge and reference-point helpers are only overflow-free on validated boxes.
    pub fn validate(&self) -> Result<(), RoleError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(RoleError::invalid_input(format!(
                "degenerate bounds {}x{} at ({}, {})",
                self.width, self.height, self.x, self.y
            )));
        }
        if self.x.checked_add(self.width).is_none() || self.y.checked_add(self.height).is_none() {
            return Err(RoleError::invalid_input(format!(
                "bounds {}x{} at ({}, {}) overflow the page coordinates",
                self.width, self.height, self.x, self.y
            )));
        }
        Ok(())
    }
}
