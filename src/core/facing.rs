//! Four-way facing latch.
use serde::{Deserialize, Serialize};

use crate::core::input::InputSnapshot;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
    Up,
    #[default]
    Down,
}

/// Held axis combination -> facing, indexed by `(dx + 1, dy + 1)`.
/// Diagonals resolve to the horizontal key; `None` keeps the previous facing.
const AXIS_TABLE: [[Option<Facing>; 3]; 3] = [
    // dx = -1
    [Some(Facing::Left), Some(Facing::Left), Some(Facing::Left)],
    // dx = 0
    [Some(Facing::Up), None, Some(Facing::Down)],
    // dx = +1
    [Some(Facing::Right), Some(Facing::Right), Some(Facing::Right)],
];

impl Facing {
    /// Unit direction in screen coordinates (y grows downwards).
    pub fn unit(self) -> (f32, f32) {
        match self {
            Facing::Left => (-1.0, 0.0),
            Facing::Right => (1.0, 0.0),
            Facing::Up => (0.0, -1.0),
            Facing::Down => (0.0, 1.0),
        }
    }

    /// Next facing given this frame's input.
    ///
    /// A key pressed this frame wins. Otherwise the current facing is kept
    /// while its key stays held, then the held-axis table decides, and with
    /// nothing held the latch keeps `self`.
    pub fn latch(self, input: &InputSnapshot) -> Facing {
        if let Some(pressed) = input.just_pressed {
            if input.is_held(pressed) {
                return pressed;
            }
        }
        if input.is_held(self) {
            return self;
        }
        let (dx, dy) = input.axis();
        AXIS_TABLE[(dx + 1) as usize][(dy + 1) as usize].unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_facing_down() {
        assert_eq!(Facing::default(), Facing::Down);
    }

    #[test]
    fn idle_keeps_last_facing() {
        let idle = InputSnapshot::default();
        assert_eq!(Facing::Left.latch(&idle), Facing::Left);
        assert_eq!(Facing::Up.latch(&idle), Facing::Up);
    }

    #[test]
    fn newest_press_wins_over_held_key() {
        let input = InputSnapshot {
            up: true,
            left: true,
            just_pressed: Some(Facing::Left),
            ..Default::default()
        };
        assert_eq!(Facing::Up.latch(&input), Facing::Left);
    }

    #[test]
    fn held_key_keeps_facing_when_second_axis_held() {
        let input = InputSnapshot { up: true, right: true, ..Default::default() };
        assert_eq!(Facing::Up.latch(&input), Facing::Up);
    }

    #[test]
    fn table_decides_when_previous_key_released() {
        let input = InputSnapshot { down: true, right: true, ..Default::default() };
        assert_eq!(Facing::Up.latch(&input), Facing::Right);
        let input = InputSnapshot { down: true, ..Default::default() };
        assert_eq!(Facing::Left.latch(&input), Facing::Down);
    }

    #[test]
    fn cancelled_axis_keeps_facing() {
        let input = InputSnapshot { left: true, right: true, ..Default::default() };
        // left is held, so a Left latch survives
        assert_eq!(Facing::Left.latch(&input), Facing::Left);
        assert_eq!(Facing::Up.latch(&input), Facing::Up);
    }
}
