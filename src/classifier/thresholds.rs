//! Classification thresholds, expressed in interline units.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RoleError;
use crate::scale::PageScale;

// ── Defaults ────────────────────────────────────────────────────────
pub(super) const DEFAULT_MAX_RIGHT_DX: f64 = 2.0; // right end of the staves
pub(super) const DEFAULT_MAX_CENTER_DX: f64 = 30.0; // around center of page
pub(super) const DEFAULT_MAX_SHORT_LENGTH: f64 = 35.0; // short sentence, no lyrics
pub(super) const DEFAULT_MAX_TINY_LENGTH: f64 = 2.0; // tiny sentence, noise
pub(super) const DEFAULT_MAX_STAFF_DY: f64 = 7.0; // above staff, for a direction
pub(super) const DEFAULT_MIN_TITLE_HEIGHT: f64 = 3.0; // title text

/// Process-wide threshold set. Built once and handed to the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Maximum horizontal distance on the right end of the staves.
    pub max_right_dx: f64,
    /// Maximum horizontal distance around the center of the page.
    pub max_center_dx: f64,
    /// Maximum width of a short sentence.
    pub max_short_length: f64,
    /// Maximum width of a tiny sentence.
    pub max_tiny_length: f64,
    /// Maximum distance above the staff for a direction.
    pub max_staff_dy: f64,
    /// Minimum height of a title.
    pub min_title_height: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            max_right_dx: DEFAULT_MAX_RIGHT_DX,
            max_center_dx: DEFAULT_MAX_CENTER_DX,
            max_short_length: DEFAULT_MAX_SHORT_LENGTH,
            max_tiny_length: DEFAULT_MAX_TINY_LENGTH,
            max_staff_dy: DEFAULT_MAX_STAFF_DY,
            min_title_height: DEFAULT_MIN_TITLE_HEIGHT,
        }
    }
}

impl ThresholdConfig {
    /// Parse overrides from JSON; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, RoleError> {
        let config: ThresholdConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, RoleError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), RoleError> {
        let fields = [
            ("max_right_dx", self.max_right_dx),
            ("max_center_dx", self.max_center_dx),
            ("max_short_length", self.max_short_length),
            ("max_tiny_length", self.max_tiny_length),
            ("max_staff_dy", self.max_staff_dy),
            ("min_title_height", self.min_title_height),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(RoleError::Config(format!(
                    "threshold {name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Convert every threshold through the scale of one page.
    pub fn to_pixels<S: PageScale + ?Sized>(&self, scale: &S) -> PixelThresholds {
        PixelThresholds {
            max_right_dx: scale.to_pixels(self.max_right_dx),
            max_center_dx: scale.to_pixels(self.max_center_dx),
            max_short_length: scale.to_pixels(self.max_short_length),
            max_tiny_length: scale.to_pixels(self.max_tiny_length),
            max_staff_dy: scale.to_pixels(self.max_staff_dy),
            min_title_height: scale.to_pixels(self.min_title_height),
        }
    }
}

/// Thresholds of a single page, in pixels. Never reused for another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PixelThresholds {
    pub max_right_dx: i32,
    pub max_center_dx: i32,
    pub max_short_length: i32,
    pub max_tiny_length: i32,
    pub max_staff_dy: i32,
    pub min_title_height: i32,
}
