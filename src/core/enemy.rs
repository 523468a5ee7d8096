//! Enemy chase rules and spawn placement.
use rand::Rng;
use raylib::prelude::Vector2;
use serde::{Deserialize, Serialize};

use crate::core::geometry::{distance, Rect};

/// Rejection sampling gives up after this many draws.
pub const MAX_SPAWN_ATTEMPTS: usize = 1000;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChaseRule {
    /// Unit vector towards the player times speed. Constant magnitude.
    Normalized,
    /// Up to one speed unit per axis. Diagonals move at speed * sqrt(2).
    Grid,
}

/// How a level fills its enemy list.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// The level's `enemy_count` spawn at level start; clearing them completes the level.
    Fixed,
    /// One enemy at a random screen edge every `interval_secs`. Never completes.
    Timed { interval_secs: f32 },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Enemy {
    pub pos: Vector2,
    pub size: f32,
    pub speed: f32,
}

impl Enemy {
    pub fn new(pos: Vector2, size: f32, speed: f32) -> Self {
        Self { pos, size, speed }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos(self.pos, self.size, self.size)
    }

    pub fn center(&self) -> Vector2 {
        self.rect().center()
    }

    /// One tick towards `target` (the player's centre). Ignores obstacles.
    pub fn chase(&mut self, target: Vector2, rule: ChaseRule) {
        let (dx, dy) = chase_step(self.center(), target, self.speed, rule);
        self.pos.x += dx;
        self.pos.y += dy;
    }
}

/// Displacement for one tick from `from` towards `to`.
pub fn chase_step(from: Vector2, to: Vector2, speed: f32, rule: ChaseRule) -> (f32, f32) {
    let vx = to.x - from.x;
    let vy = to.y - from.y;
    match rule {
        ChaseRule::Normalized => {
            let dist = (vx * vx + vy * vy).sqrt();
            if dist == 0.0 {
                return (0.0, 0.0);
            }
            (vx / dist * speed, vy / dist * speed)
        }
        ChaseRule::Grid => (axis_step(vx, speed), axis_step(vy, speed)),
    }
}

#[inline]
fn axis_step(delta: f32, speed: f32) -> f32 {
    let speed = speed.abs();
    delta.clamp(-speed, speed)
}

/// Random top-left on one of the four edges of `area`, fully inside it.
pub fn spawn_at_edge<R: Rng + ?Sized>(rng: &mut R, area: &Rect, size: f32) -> Vector2 {
    let max_x = (area.right() - size).max(area.x);
    let max_y = (area.bottom() - size).max(area.y);
    let along_x = rng.gen_range(area.x..=max_x);
    let along_y = rng.gen_range(area.y..=max_y);
    match rng.gen_range(0..4) {
        0 => Vector2::new(along_x, area.y),
        1 => Vector2::new(along_x, max_y),
        2 => Vector2::new(area.x, along_y),
        _ => Vector2::new(max_x, along_y),
    }
}

/// Random top-left inside `area` whose centre is at least `min_distance`
/// from `avoid`. Returns `None` after [`MAX_SPAWN_ATTEMPTS`] rejected draws.
pub fn spawn_away_from<R: Rng + ?Sized>(
    rng: &mut R,
    area: &Rect,
    size: f32,
    avoid: Vector2,
    min_distance: f32,
) -> Option<Vector2> {
    let max_x = (area.right() - size).max(area.x);
    let max_y = (area.bottom() - size).max(area.y);
    for _ in 0..MAX_SPAWN_ATTEMPTS {
        let pos = Vector2::new(rng.gen_range(area.x..=max_x), rng.gen_range(area.y..=max_y));
        let center = Rect::from_pos(pos, size, size).center();
        if distance(center, avoid) >= min_distance {
            return Some(pos);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn normalized_step_has_speed_magnitude() {
        let (dx, dy) = chase_step(Vector2::new(0.0, 0.0), Vector2::new(30.0, 40.0), 2.0, ChaseRule::Normalized);
        assert!((dx - 1.2).abs() < 1e-5);
        assert!((dy - 1.6).abs() < 1e-5);
    }

    #[test]
    fn normalized_step_at_zero_distance_is_zero() {
        let p = Vector2::new(12.5, 7.0);
        let (dx, dy) = chase_step(p, p, 3.0, ChaseRule::Normalized);
        assert_eq!((dx, dy), (0.0, 0.0));
        assert!(!dx.is_nan() && !dy.is_nan());
    }

    #[test]
    fn coincident_enemy_does_not_move() {
        let mut e = Enemy::new(Vector2::new(100.0, 100.0), 40.0, 2.0);
        let target = e.center();
        e.chase(target, ChaseRule::Normalized);
        assert_eq!((e.pos.x, e.pos.y), (100.0, 100.0));
    }

    #[test]
    fn grid_step_moves_diagonally_by_speed_per_axis() {
        let (dx, dy) = chase_step(Vector2::new(0.0, 0.0), Vector2::new(-100.0, 50.0), 3.0, ChaseRule::Grid);
        assert_eq!((dx, dy), (-3.0, 3.0));
    }

    #[test]
    fn grid_step_does_not_overshoot() {
        let (dx, dy) = chase_step(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), 3.0, ChaseRule::Grid);
        assert_eq!((dx, dy), (1.0, 0.0));
    }

    #[test]
    fn grid_step_with_negative_speed_still_chases() {
        let (dx, dy) = chase_step(Vector2::new(0.0, 0.0), Vector2::new(100.0, -100.0), -3.0, ChaseRule::Grid);
        assert_eq!((dx, dy), (3.0, -3.0));
    }

    #[test]
    fn edge_spawns_touch_an_edge() {
        let mut rng = StdRng::seed_from_u64(7);
        let area = Rect::new(0.0, 0.0, 800.0, 600.0);
        for _ in 0..200 {
            let p = spawn_at_edge(&mut rng, &area, 40.0);
            let on_edge = p.x == 0.0 || p.y == 0.0 || p.x == 760.0 || p.y == 560.0;
            assert!(on_edge, "{p:?} not on an edge");
            assert!(p.x >= 0.0 && p.x <= 760.0 && p.y >= 0.0 && p.y <= 560.0);
        }
    }

    #[test]
    fn accepted_spawns_respect_min_distance() {
        let mut rng = StdRng::seed_from_u64(42);
        let area = Rect::new(0.0, 0.0, 740.0, 600.0);
        let player_center = Vector2::new(370.0, 300.0);
        for _ in 0..500 {
            let pos = spawn_away_from(&mut rng, &area, 50.0, player_center, 200.0)
                .expect("threshold is reachable");
            let c = Rect::from_pos(pos, 50.0, 50.0).center();
            assert!(distance(c, player_center) >= 200.0);
        }
    }

    #[test]
    fn unreachable_threshold_gives_up() {
        let mut rng = StdRng::seed_from_u64(1);
        let area = Rect::new(0.0, 0.0, 100.0, 100.0);
        let got = spawn_away_from(&mut rng, &area, 10.0, Vector2::new(50.0, 50.0), 1000.0);
        assert!(got.is_none());
    }
}
