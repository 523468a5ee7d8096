//! Axis-aligned rectangles in world units.
use raylib::prelude::Vector2;

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos(pos: Vector2, w: f32, h: f32) -> Self {
        Self::new(pos.x, pos.y, w, h)
    }

    pub fn from_center(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w * 0.5, cy - h * 0.5, w, h)
    }

    #[inline] pub fn right(&self) -> f32 { self.x + self.w }
    #[inline] pub fn bottom(&self) -> f32 { self.y + self.h }

    #[inline]
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Strict overlap: rects that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Top-left position that keeps a `w`x`h` box inside `self`.
    /// If the box is larger than the bounds it is pinned to the bounds origin.
    pub fn clamp_pos(&self, pos: Vector2, w: f32, h: f32) -> Vector2 {
        let max_x = (self.right() - w).max(self.x);
        let max_y = (self.bottom() - h).max(self.y);
        Vector2::new(pos.x.clamp(self.x, max_x), pos.y.clamp(self.y, max_y))
    }

    pub fn to_raylib(&self) -> raylib::prelude::Rectangle {
        raylib::prelude::Rectangle::new(self.x, self.y, self.w, self.h)
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Vector2, b: Vector2) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}
