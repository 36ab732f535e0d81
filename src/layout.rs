//! In-memory page layout: systems, parts and staves with known geometry.
//!
//! This is not a layout detector. It answers the structural queries of
//! [`StructuralContext`] for geometry supplied by the caller, typically the
//! output of an upstream staff detection step.

use serde::{Deserialize, Serialize};

use crate::context::{StaffPosition, StructuralContext};
use crate::error::RoleError;
use crate::geometry::{PixelPoint, PixelRect};
use crate::scale::Scale;

/// One staff, as the bounding box of its lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffLayout {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl StaffLayout {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Saturates on layouts that have not been validated.
    pub fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    pub fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    pub fn top_left(&self) -> PixelPoint {
        PixelPoint::new(self.left, self.top)
    }

    /// Vertical distance from `y` to the staff, 0 when `y` lies on it.
    fn vertical_distance(&self, y: i32) -> i64 {
        let y = i64::from(y);
        let (top, bottom) = (i64::from(self.top), i64::from(self.bottom()));
        if y < top {
            top - y
        } else if y > bottom {
            y - bottom
        } else {
            0
        }
    }

    fn fits(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.left.checked_add(self.width).is_some()
            && self.top.checked_add(self.height).is_some()
    }
}

/// A part: the staves of one instrument (two for a grand staff, say).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartLayout {
    pub staves: Vec<StaffLayout>,
}

impl PartLayout {
    pub fn new(staves: Vec<StaffLayout>) -> Self {
        Self { staves }
    }

    fn top(&self) -> i32 {
        self.staves.first().map_or(0, |s| s.top)
    }
}

/// A system: parts played together, one above the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemLayout {
    pub parts: Vec<PartLayout>,
}

impl SystemLayout {
    pub fn new(parts: Vec<PartLayout>) -> Self {
        Self { parts }
    }

    pub fn staves(&self) -> impl Iterator<Item = &StaffLayout> + '_ {
        self.parts.iter().flat_map(|p| p.staves.iter())
    }

    /// Bounding box of all staves in the system.
    pub fn bounds(&self) -> PixelRect {
        let mut staves = self.staves();
        let Some(first) = staves.next() else {
            return PixelRect::new(0, 0, 0, 0);
        };
        let (mut left, mut top, mut right, mut bottom) =
            (first.left, first.top, first.right(), first.bottom());
        for s in staves {
            left = left.min(s.left);
            top = top.min(s.top);
            right = right.max(s.right());
            bottom = bottom.max(s.bottom());
        }
        let span = |lo: i32, hi: i32| i32::try_from(i64::from(hi) - i64::from(lo)).unwrap_or(i32::MAX);
        PixelRect::new(left, top, span(left, right), span(top, bottom))
    }

    fn vertical_distance(&self, y: i32) -> i64 {
        self.staves()
            .map(|s| s.vertical_distance(y))
            .min()
            .unwrap_or(i64::MAX)
    }
}

/// Geometry of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    pub width: i32,
    pub height: i32,
    /// Distance between two staff lines, in pixels.
    pub interline: i32,
    /// Systems from top to bottom.
    pub systems: Vec<SystemLayout>,
}

impl PageLayout {
    pub fn scale(&self) -> Scale {
        Scale::new(self.interline)
    }

    pub fn validate(&self) -> Result<(), RoleError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(RoleError::InvalidLayout(format!(
                "page size {}x{}",
                self.width, self.height
            )));
        }
        if self.interline <= 0 {
            return Err(RoleError::InvalidLayout(format!("interline {}", self.interline)));
        }
        if self.systems.is_empty() {
            return Err(RoleError::InvalidLayout("page has no system".into()));
        }
        for (si, system) in self.systems.iter().enumerate() {
            if system.parts.is_empty() {
                return Err(RoleError::InvalidLayout(format!("system {} has no part", si + 1)));
            }
            for (pi, part) in system.parts.iter().enumerate() {
                if part.staves.is_empty() {
                    return Err(RoleError::InvalidLayout(format!(
                        "part {} of system {} has no staff",
                        pi + 1,
                        si + 1
                    )));
                }
                if !part.staves.iter().all(StaffLayout::fits) {
                    return Err(RoleError::InvalidLayout(format!(
                        "part {} of system {} has an empty or out-of-range staff",
                        pi + 1,
                        si + 1
                    )));
                }
            }
        }
        Ok(())
    }

    /// Resolve the system a point belongs to: the one whose staves are
    /// vertically closest, the upper one on ties.
    pub fn system_at(&self, point: PixelPoint) -> Result<SystemView<'_>, RoleError> {
        let outside = point.x < 0 || point.y < 0 || point.x >= self.width || point.y >= self.height;
        if outside {
            return Err(RoleError::ContextResolution {
                x: point.x,
                y: point.y,
            });
        }

        let mut best: Option<(usize, i64)> = None;
        for (index, system) in self.systems.iter().enumerate() {
            if system.staves().next().is_none() {
                continue;
            }
            let dy = system.vertical_distance(point.y);
            if best.map_or(true, |(_, best_dy)| dy < best_dy) {
                best = Some((index, dy));
            }
        }

        best.map(|(index, _)| SystemView { page: self, index })
            .ok_or(RoleError::ContextResolution {
                x: point.x,
                y: point.y,
            })
    }

    /// Resolve the context of a text block, for its left edge at mid-height.
    pub fn context_for(&self, bounds: &PixelRect) -> Result<SystemView<'_>, RoleError> {
        bounds.validate()?;
        self.system_at(bounds.left_reference())
    }
}

/// Vertical position of `y` with respect to a run of staves, top to bottom.
fn position_among<'a>(mut staves: impl Iterator<Item = &'a StaffLayout>, y: i32) -> StaffPosition {
    let Some(first) = staves.next() else {
        return StaffPosition::Within;
    };
    let last = staves.last().unwrap_or(first);
    if y < first.top {
        StaffPosition::Above
    } else if y > last.bottom() {
        StaffPosition::Below
    } else {
        StaffPosition::Within
    }
}

/// A system of a page, as seen by the classifier.
#[derive(Debug, Clone, Copy)]
pub struct SystemView<'a> {
    page: &'a PageLayout,
    index: usize,
}

impl<'a> SystemView<'a> {
    pub fn system(&self) -> &'a SystemLayout {
        &self.page.systems[self.index]
    }

    pub fn page(&self) -> &'a PageLayout {
        self.page
    }

    /// The part containing `point`, or the lowest part starting above it.
    /// Above all parts, the first one.
    pub fn part_above(&self, point: PixelPoint) -> Option<&'a PartLayout> {
        let parts = &self.system().parts;
        parts
            .iter()
            .rev()
            .find(|p| !p.staves.is_empty() && p.top() <= point.y)
            .or_else(|| parts.iter().find(|p| !p.staves.is_empty()))
    }

    /// The staff vertically nearest to `point`, the upper one on ties.
    pub fn staff_at(&self, point: PixelPoint) -> Option<&'a StaffLayout> {
        // min_by_key keeps the first of equal minima.
        self.system()
            .staves()
            .min_by_key(|s| s.vertical_distance(point.y))
    }
}

impl StructuralContext for SystemView<'_> {
    fn system_id(&self) -> usize {
        self.index + 1
    }

    fn system_count(&self) -> usize {
        self.page.systems.len()
    }

    fn staff_position(&self, point: PixelPoint) -> StaffPosition {
        position_among(self.system().staves(), point.y)
    }

    fn part_staff_position(&self, point: PixelPoint) -> StaffPosition {
        let staves = self.part_above(point).into_iter().flat_map(|p| p.staves.iter());
        position_among(staves, point.y)
    }

    fn staff_top_left(&self, point: PixelPoint) -> PixelPoint {
        // A resolved view always has at least one staff.
        match self.staff_at(point) {
            Some(staff) => staff.top_left(),
            None => {
                let bounds = self.system().bounds();
                PixelPoint::new(bounds.x, bounds.y)
            }
        }
    }

    fn system_left(&self) -> i32 {
        self.system().bounds().x
    }

    fn system_width(&self) -> i32 {
        self.system().bounds().width
    }

    fn page_width(&self) -> i32 {
        self.page.width
    }
}
