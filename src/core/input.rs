//! Backend-neutral input: held keys per frame plus discrete events.
use crate::core::facing::Facing;

/// Keys the game reacts to as discrete presses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Space,
    Escape,
    Digit(u8),
    Other,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Pressed(Key),
}

/// Snapshot of the keys held during one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub attack: bool,
    /// Direction key that went down this frame, if any.
    pub just_pressed: Option<Facing>,
}

impl InputSnapshot {
    /// Per-axis direction in {-1, 0, 1}; opposite keys cancel.
    pub fn axis(&self) -> (i8, i8) {
        let dx = self.right as i8 - self.left as i8;
        let dy = self.down as i8 - self.up as i8;
        (dx, dy)
    }

    pub fn is_held(&self, dir: Facing) -> bool {
        match dir {
            Facing::Left => self.left,
            Facing::Right => self.right,
            Facing::Up => self.up,
            Facing::Down => self.down,
        }
    }

    pub fn any_direction(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}
