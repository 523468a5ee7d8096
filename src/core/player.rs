//! Player data, keyboard movement and hit areas.
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use crate::core::animation::Animation;
use crate::core::facing::Facing;
use crate::core::geometry::Rect;
use crate::core::input::InputSnapshot;

/// Area the player is vulnerable through.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HitboxShape {
    /// The whole sprite rect.
    Body,
    /// A small rect just outside the sprite on its facing side.
    /// `width` runs across the facing direction, `height` along it.
    Front { width: f32, height: f32 },
}

/// Where the player is kept.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClampArea {
    Viewport,
    World,
}

const WALK_FRAMES: usize = 4;
const WALK_FRAME_TIME: f32 = 0.12;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos: Vector2,
    pub size: f32,
    pub speed: f32,
    pub facing: Facing,
    pub animation: Animation,
    pub moving: bool,
}

impl Player {
    pub fn new(pos: Vector2, size: f32, speed: f32) -> Self {
        Self {
            pos,
            size,
            speed,
            facing: Facing::default(),
            animation: Animation::new(WALK_FRAMES, WALK_FRAME_TIME),
            moving: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, self.size, self.size)
    }

    /// One tick of keyboard movement, then clamp into `area`.
    pub fn update(&mut self, input: &InputSnapshot, area: &Rect, dt: f32) {
        let (dx, dy) = input.axis();
        self.pos.x += dx as f32 * self.speed;
        self.pos.y += dy as f32 * self.speed;
        self.pos = area.clamp_pos(self.pos, self.size, self.size);

        self.facing = self.facing.latch(input);
        self.moving = dx != 0 || dy != 0;
        self.animation.update(self.facing, self.moving, dt);
    }

    pub fn hitbox(&self, shape: HitboxShape) -> Rect {
        match shape {
            HitboxShape::Body => self.rect(),
            HitboxShape::Front { width, height } => self.front_rect(width, height),
        }
    }

    /// Area cleared by an attack: `reach` deep in front of the sprite, as wide as it.
    pub fn strike_zone(&self, reach: f32) -> Rect {
        self.front_rect(self.size, reach)
    }

    fn front_rect(&self, across: f32, along: f32) -> Rect {
        let r = self.rect();
        let c = r.center();
        match self.facing {
            Facing::Up => Rect::new(c.x - across * 0.5, r.y - along, across, along),
            Facing::Down => Rect::new(c.x - across * 0.5, r.bottom(), across, along),
            Facing::Left => Rect::new(r.x - along, c.y - across * 0.5, along, across),
            Facing::Right => Rect::new(r.right(), c.y - across * 0.5, along, across),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(left: bool, right: bool, up: bool, down: bool) -> InputSnapshot {
        InputSnapshot { left, right, up, down, ..Default::default() }
    }

    #[test]
    fn moves_by_speed_per_axis() {
        let area = Rect::new(0.0, 0.0, 800.0, 600.0);
        let mut p = Player::new(Vector2::new(100.0, 100.0), 50.0, 5.0);
        p.update(&held(false, true, false, true), &area, 1.0 / 60.0);
        assert_eq!((p.pos.x, p.pos.y), (105.0, 105.0));
        assert!(p.moving);
    }

    #[test]
    fn clamped_position_stays_in_area() {
        let area = Rect::new(0.0, 0.0, 740.0, 600.0);
        let mut p = Player::new(Vector2::new(0.0, 0.0), 50.0, 7.0);
        for _ in 0..200 {
            p.update(&held(false, true, false, true), &area, 0.016);
            assert!(p.pos.x >= 0.0 && p.pos.x <= 740.0 - 50.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 600.0 - 50.0);
        }
        assert_eq!((p.pos.x, p.pos.y), (690.0, 550.0));
        for _ in 0..200 {
            p.update(&held(true, false, true, false), &area, 0.016);
        }
        assert_eq!((p.pos.x, p.pos.y), (0.0, 0.0));
    }

    #[test]
    fn front_hitbox_sits_above_when_facing_up() {
        let mut p = Player::new(Vector2::new(100.0, 100.0), 50.0, 5.0);
        p.facing = Facing::Up;
        let hb = p.hitbox(HitboxShape::Front { width: 20.0, height: 30.0 });
        assert_eq!(hb, Rect::new(115.0, 70.0, 20.0, 30.0));
    }

    #[test]
    fn front_hitbox_rotates_with_facing() {
        let mut p = Player::new(Vector2::new(100.0, 100.0), 50.0, 5.0);
        p.facing = Facing::Right;
        let hb = p.hitbox(HitboxShape::Front { width: 20.0, height: 30.0 });
        assert_eq!(hb, Rect::new(150.0, 115.0, 30.0, 20.0));
    }

    #[test]
    fn body_hitbox_is_sprite_rect() {
        let p = Player::new(Vector2::new(10.0, 20.0), 50.0, 5.0);
        assert_eq!(p.hitbox(HitboxShape::Body), p.rect());
    }
}
