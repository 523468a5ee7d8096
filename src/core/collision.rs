//! Hitbox tests against the enemy list.
use crate::core::enemy::Enemy;
use crate::core::geometry::Rect;

/// Index of the first enemy overlapping `hitbox`.
pub fn first_hit(hitbox: &Rect, enemies: &[Enemy]) -> Option<usize> {
    enemies.iter().position(|e| hitbox.intersects(&e.rect()))
}

/// Removes every enemy inside `zone` and returns how many were removed.
pub fn clear_struck(zone: &Rect, enemies: &mut Vec<Enemy>) -> usize {
    let before = enemies.len();
    enemies.retain(|e| !zone.intersects(&e.rect()));
    before - enemies.len()
}
