//! Sprite animation selector: facing x (idle | walking) with frame cycling.
use crate::core::facing::Facing;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pose {
    Idle(Facing),
    Walking(Facing),
}

impl Pose {
    pub fn facing(self) -> Facing {
        match self {
            Pose::Idle(f) | Pose::Walking(f) => f,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Animation {
    pub pose: Pose,
    pub frame: usize,
    frames: usize,
    frame_time: f32,
    timer: f32,
}

impl Animation {
    pub fn new(frames: usize, frame_time: f32) -> Self {
        Self {
            pose: Pose::Idle(Facing::default()),
            frame: 0,
            frames: frames.max(1),
            frame_time,
            timer: 0.0,
        }
    }

    /// Advances the walk cycle while moving; idle snaps back to frame 0.
    pub fn update(&mut self, facing: Facing, moving: bool, dt: f32) {
        let next = if moving { Pose::Walking(facing) } else { Pose::Idle(facing) };
        if next != self.pose {
            self.pose = next;
            self.frame = 0;
            self.timer = 0.0;
        }
        if !moving || self.frame_time <= 0.0 {
            return;
        }
        self.timer += dt;
        while self.timer >= self.frame_time {
            self.timer -= self.frame_time;
            self.frame = (self.frame + 1) % self.frames;
        }
    }

    /// Column in a sprite sheet laid out as one row per facing.
    pub fn sheet_cell(&self) -> (usize, usize) {
        let row = match self.pose.facing() {
            Facing::Down => 0,
            Facing::Left => 1,
            Facing::Right => 2,
            Facing::Up => 3,
        };
        (self.frame, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walking_cycles_frames() {
        let mut a = Animation::new(4, 0.1);
        a.update(Facing::Right, true, 0.05);
        assert_eq!(a.pose, Pose::Walking(Facing::Right));
        assert_eq!(a.frame, 0);
        a.update(Facing::Right, true, 0.06);
        assert_eq!(a.frame, 1);
        a.update(Facing::Right, true, 0.3);
        assert_eq!(a.frame, 0);
    }

    #[test]
    fn stopping_keeps_facing_and_resets_frame() {
        let mut a = Animation::new(4, 0.1);
        a.update(Facing::Left, true, 0.25);
        assert_eq!(a.frame, 2);
        a.update(Facing::Left, false, 0.016);
        assert_eq!(a.pose, Pose::Idle(Facing::Left));
        assert_eq!(a.sheet_cell(), (0, 1));
    }
}
