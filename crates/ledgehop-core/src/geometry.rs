use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in screen coordinates (y grows downward).
///
/// Used for both collision and drawing. Width and height are expected to be
/// positive; see [`Aabb::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Whether the box has a positive, finite extent.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// Strict intersection test. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Move vertically so the bottom edge sits on `top_y`.
    pub fn snap_bottom_to(&mut self, top_y: f32) {
        self.y = top_y - self.height;
    }

    /// Move vertically so the top edge sits on `bottom_y`.
    pub fn snap_top_to(&mut self, bottom_y: f32) {
        self.y = bottom_y;
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.width;
    }
}
