//! Hard-follow camera clamped to the world bounds.
use raylib::prelude::Vector2;

use crate::core::geometry::Rect;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub offset: Vector2,
    pub viewport_w: f32,
    pub viewport_h: f32,
    pub world_w: f32,
    pub world_h: f32,
}

/// Offset for one axis: centre the target, then keep the view inside the world.
/// A world narrower than the viewport pins the axis at 0.
#[inline]
fn follow_axis(target_center: f32, viewport: f32, world: f32) -> f32 {
    let wanted = viewport * 0.5 - target_center;
    let min = (viewport - world).min(0.0);
    wanted.clamp(min, 0.0)
}

impl Camera {
    pub fn new(viewport_w: f32, viewport_h: f32, world_w: f32, world_h: f32) -> Self {
        Self {
            offset: Vector2::new(0.0, 0.0),
            viewport_w,
            viewport_h,
            world_w,
            world_h,
        }
    }

    pub fn set_world(&mut self, world_w: f32, world_h: f32) {
        self.world_w = world_w;
        self.world_h = world_h;
        self.offset = Vector2::new(0.0, 0.0);
    }

    pub fn update(&mut self, target: &Rect) {
        let c = target.center();
        self.offset = Vector2::new(
            follow_axis(c.x, self.viewport_w, self.world_w),
            follow_axis(c.y, self.viewport_h, self.world_h),
        );
    }

    /// World rect -> screen rect.
    pub fn apply(&self, rect: &Rect) -> Rect {
        rect.translated(self.offset.x, self.offset.y)
    }

    /// World-space rect currently on screen.
    pub fn visible_world(&self) -> Rect {
        Rect::new(-self.offset.x, -self.offset.y, self.viewport_w, self.viewport_h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_bounds(cam: &Camera) -> bool {
        let min_x = (cam.viewport_w - cam.world_w).min(0.0);
        let min_y = (cam.viewport_h - cam.world_h).min(0.0);
        cam.offset.x >= min_x && cam.offset.x <= 0.0 && cam.offset.y >= min_y && cam.offset.y <= 0.0
    }

    #[test]
    fn centres_target_in_the_middle_of_the_world() {
        let mut cam = Camera::new(740.0, 600.0, 3200.0, 3200.0);
        cam.update(&Rect::from_center(1600.0, 1600.0, 50.0, 50.0));
        assert_eq!(cam.offset.x, 370.0 - 1600.0);
        assert_eq!(cam.offset.y, 300.0 - 1600.0);
    }

    #[test]
    fn clamps_at_both_ends() {
        let mut cam = Camera::new(740.0, 600.0, 2000.0, 1000.0);
        cam.update(&Rect::from_center(0.0, 0.0, 50.0, 50.0));
        assert_eq!((cam.offset.x, cam.offset.y), (0.0, 0.0));

        cam.update(&Rect::from_center(5000.0, 5000.0, 50.0, 50.0));
        assert_eq!(cam.offset.x, -(2000.0 - 740.0));
        assert_eq!(cam.offset.y, -(1000.0 - 600.0));
    }

    #[test]
    fn offset_stays_within_bounds_for_any_target() {
        let mut cam = Camera::new(800.0, 600.0, 1920.0, 1280.0);
        let mut x = -500.0;
        while x < 2500.0 {
            let mut y = -500.0;
            while y < 2000.0 {
                cam.update(&Rect::from_center(x, y, 50.0, 50.0));
                assert!(in_bounds(&cam), "offset {:?} for target ({x},{y})", cam.offset);
                y += 37.0;
            }
            x += 41.0;
        }
    }

    #[test]
    fn small_world_pins_offset_to_zero() {
        let mut cam = Camera::new(800.0, 600.0, 320.0, 240.0);
        cam.update(&Rect::from_center(300.0, 200.0, 10.0, 10.0));
        assert_eq!((cam.offset.x, cam.offset.y), (0.0, 0.0));
    }

    #[test]
    fn apply_translates_by_offset() {
        let mut cam = Camera::new(100.0, 100.0, 400.0, 400.0);
        cam.update(&Rect::from_center(200.0, 200.0, 10.0, 10.0));
        let r = cam.apply(&Rect::new(200.0, 200.0, 10.0, 10.0));
        assert_eq!((r.x, r.y), (50.0, 50.0));
    }
}
