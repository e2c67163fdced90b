//! Device pixel coordinates.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// A point in device pixels; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, new)]
pub struct Point {
    /// Horizontal offset from the left edge.
    pub x: u16,
    /// Vertical offset from the top edge.
    pub y: u16,
}

/// An axis-aligned rectangle given by origin and extent.
///
/// The rectangle spans `[x, x + dx]` by `[y, y + dy]`, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, new)]
pub struct Rect {
    /// Left edge.
    pub x: u16,
    /// Top edge.
    pub y: u16,
    /// Width.
    pub dx: u16,
    /// Height.
    pub dy: u16,
}

impl Rect {
    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Right edge (inclusive).
    pub fn right(&self) -> u32 {
        u32::from(self.x) + u32::from(self.dx)
    }

    /// Bottom edge (inclusive).
    pub fn bottom(&self) -> u32 {
        u32::from(self.y) + u32::from(self.dy)
    }

    /// Returns true when `point` lies inside or on the border.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && u32::from(point.x) <= self.right()
            && point.y >= self.y
            && u32::from(point.y) <= self.bottom()
    }

    /// Returns true when the two rectangles share at least one pixel.
    pub fn intersects(&self, other: &Rect) -> bool {
        u32::from(self.x) <= other.right()
            && u32::from(other.x) <= self.right()
            && u32::from(self.y) <= other.bottom()
            && u32::from(other.y) <= self.bottom()
    }
}
