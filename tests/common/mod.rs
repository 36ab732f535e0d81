//! Shared fake context for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;

use textrole::{PixelPoint, StaffPosition, StructuralContext};

/// A context answering fixed values, whatever the point.
/// Every queried point is recorded.
#[derive(Debug)]
pub struct FakeContext {
    pub system_id: usize,
    pub system_count: usize,
    pub position: StaffPosition,
    pub part_position: StaffPosition,
    pub staff_top_left: PixelPoint,
    pub system_left: i32,
    pub system_width: i32,
    pub page_width: i32,
    pub queried: RefCell<Vec<PixelPoint>>,
}

impl FakeContext {
    /// First of two systems on a 2000 px wide page, staves spanning x 200..1800
    /// and starting at y 500.
    pub fn new(position: StaffPosition) -> Self {
        Self {
            system_id: 1,
            system_count: 2,
            position,
            part_position: position,
            staff_top_left: PixelPoint::new(200, 500),
            system_left: 200,
            system_width: 1600,
            page_width: 2000,
            queried: RefCell::new(Vec::new()),
        }
    }

    pub fn in_system(mut self, id: usize, count: usize) -> Self {
        self.system_id = id;
        self.system_count = count;
        self
    }

    pub fn with_part_position(mut self, part_position: StaffPosition) -> Self {
        self.part_position = part_position;
        self
    }

    fn record(&self, point: PixelPoint) {
        self.queried.borrow_mut().push(point);
    }
}

impl StructuralContext for FakeContext {
    fn system_id(&self) -> usize {
        self.system_id
    }

    fn system_count(&self) -> usize {
        self.system_count
    }

    fn staff_position(&self, point: PixelPoint) -> StaffPosition {
        self.record(point);
        self.position
    }

    fn part_staff_position(&self, point: PixelPoint) -> StaffPosition {
        self.record(point);
        self.part_position
    }

    fn staff_top_left(&self, point: PixelPoint) -> PixelPoint {
        self.record(point);
        self.staff_top_left
    }

    fn system_left(&self) -> i32 {
        self.system_left
    }

    fn system_width(&self) -> i32 {
        self.system_width
    }

    fn page_width(&self) -> i32 {
        self.page_width
    }
}
