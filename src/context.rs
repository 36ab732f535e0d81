//! Read-only structural context the classifier queries for a text block.
//!
//! A context describes the system (group of staves) a text block belongs to,
//! as seen from the block's reference point. Position queries take that point
//! explicitly; the classifier always passes the left edge at mid-height.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::PixelPoint;

/// Vertical position of a point relative to a group of staves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffPosition {
    Above,
    Within,
    Below,
}

impl fmt::Display for StaffPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StaffPosition::Above => "above",
            StaffPosition::Within => "within",
            StaffPosition::Below => "below",
        };
        f.write_str(s)
    }
}

/// Queries answered by whatever owns the page layout.
pub trait StructuralContext {
    /// 1-based ordinal of the system on its page.
    fn system_id(&self) -> usize;

    /// Number of systems on the page.
    fn system_count(&self) -> usize;

    /// Position of `point` relative to all staves of the system.
    fn staff_position(&self, point: PixelPoint) -> StaffPosition;

    /// Position of `point` relative to the staves of the part containing it,
    /// or the part right above it.
    fn part_staff_position(&self, point: PixelPoint) -> StaffPosition;

    /// Top-left corner of the staff nearest to `point`.
    fn staff_top_left(&self, point: PixelPoint) -> PixelPoint;

    /// Left abscissa of the system staves.
    fn system_left(&self) -> i32;

    /// Width of the system staves.
    fn system_width(&self) -> i32;

    fn page_width(&self) -> i32;

    fn is_first_system(&self) -> bool {
        self.system_id() == 1
    }

    fn is_last_system(&self) -> bool {
        self.system_id() == self.system_count()
    }

    /// Whether `point` starts strictly before the system staves.
    fn is_left_of_staves(&self, point: PixelPoint) -> bool {
        point.x < self.system_left()
    }
}
