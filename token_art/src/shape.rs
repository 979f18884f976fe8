/// Exclusive upper bound for the x and y position of a shape.
pub const POS_BOUND: u32 = 50;
/// Exclusive upper bound for the width and height of a shape.
pub const EXTENT_BOUND: u32 = 30;
/// Exclusive upper bound for each color channel.
pub const CHANNEL_BOUND: u32 = 256;

/// Every collection holds at least this many shapes.
pub const BASE_SHAPE_COUNT: u32 = 5;
/// The drawn count offset is in [0, SHAPE_COUNT_SPREAD).
pub const SHAPE_COUNT_SPREAD: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl Shape {
    pub fn in_bounds(&self) -> bool {
        self.x < POS_BOUND
            && self.y < POS_BOUND
            && self.width < EXTENT_BOUND
            && self.height < EXTENT_BOUND
            && self.r < CHANNEL_BOUND
            && self.g < CHANNEL_BOUND
            && self.b < CHANNEL_BOUND
    }
}
