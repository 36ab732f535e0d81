//! Geometric features of a text block, derived once per classification.

use serde::{Deserialize, Serialize};

use super::thresholds::PixelThresholds;
use crate::context::{StaffPosition, StructuralContext};
use crate::error::RoleError;
use crate::geometry::PixelRect;

/// Style hint: is the text (mainly) slanted, as in italics?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slant {
    Slanted,
    Upright,
    #[default]
    Unknown,
}

impl Slant {
    pub fn is_slanted(self) -> bool {
        self == Slant::Slanted
    }
}

impl From<Option<bool>> for Slant {
    fn from(italic: Option<bool>) -> Self {
        match italic {
            Some(true) => Slant::Slanted,
            Some(false) => Slant::Upright,
            None => Slant::Unknown,
        }
    }
}

/// Everything the rule table looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextFeatures {
    pub bounds: PixelRect,
    pub first_system: bool,
    pub last_system: bool,
    pub system_position: StaffPosition,
    pub part_position: StaffPosition,
    pub staff_dy: i32,
    pub close_to_staff: bool,
    pub left_of_staves: bool,
    pub page_centered: bool,
    pub right_aligned: bool,
    pub short_block: bool,
    pub tiny_block: bool,
    pub tall_block: bool,
    pub slant: Slant,
}

impl TextFeatures {
    /// Measure `bounds` against its system.
    ///
    /// `thresholds` must come from the scale of the page `context` belongs to.
    pub fn derive<C: StructuralContext + ?Sized>(
        bounds: &PixelRect,
        context: &C,
        thresholds: &PixelThresholds,
        slant: Slant,
    ) -> Result<Self, RoleError> {
        bounds.validate()?;

        let left = bounds.left_reference();
        let right = bounds.right_reference();

        // Context values are not bounded by the box, so distances go through i64.
        let staff_dy = (i64::from(context.staff_top_left(left).y) - i64::from(bounds.y)).abs();
        let staff_dy = i32::try_from(staff_dy).unwrap_or(i32::MAX);
        let page_center = i64::from(context.page_width() / 2);
        let system_right = i64::from(context.system_left()) + i64::from(context.system_width());
        let center_dx = (i64::from(bounds.center_x()) - page_center).abs();
        let right_dx = (i64::from(right.x) - system_right).abs();

        Ok(Self {
            bounds: *bounds,
            first_system: context.is_first_system(),
            last_system: context.is_last_system(),
            system_position: context.staff_position(left),
            part_position: context.part_staff_position(left),
            staff_dy,
            close_to_staff: staff_dy <= thresholds.max_staff_dy,
            left_of_staves: context.is_left_of_staves(left),
            page_centered: center_dx <= i64::from(thresholds.max_center_dx),
            right_aligned: right_dx <= i64::from(thresholds.max_right_dx),
            short_block: bounds.width <= thresholds.max_short_length,
            tiny_block: bounds.width <= thresholds.max_tiny_length,
            tall_block: bounds.height >= thresholds.min_title_height,
            slant,
        })
    }
}
