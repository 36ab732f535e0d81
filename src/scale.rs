//! Page scale: converts interline fractions into page pixels.

use serde::{Deserialize, Serialize};

/// Converts a distance in abstract (interline) units into page pixels.
///
/// Each page carries its own scale; implementations must not be shared
/// between pages scanned at different resolutions.
pub trait PageScale {
    fn to_pixels(&self, units: f64) -> i32;
}

/// Scale driven by the staff interline, the distance between two staff lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub interline: i32,
}

impl Scale {
    pub fn new(interline: i32) -> Self {
        Self { interline }
    }
}

impl PageScale for Scale {
    fn to_pixels(&self, units: f64) -> i32 {
        // Half-way values round to even.
        (units * f64::from(self.interline)).round_ties_even() as i32
    }
}
