//! Score accumulator.
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScorePolicy {
    /// +1 per whole second spent playing.
    SurvivalSeconds,
    /// +1 per enemy spawned.
    EnemiesSpawned,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Score {
    pub value: u32,
    policy: ScorePolicy,
    elapsed: f32,
}

impl Score {
    pub fn new(policy: ScorePolicy) -> Self {
        Self { value: 0, policy, elapsed: 0.0 }
    }

    pub fn reset(&mut self) {
        self.value = 0;
        self.elapsed = 0.0;
    }

    pub fn tick(&mut self, dt: f32) {
        if self.policy != ScorePolicy::SurvivalSeconds {
            return;
        }
        self.elapsed += dt;
        while self.elapsed >= 1.0 {
            self.elapsed -= 1.0;
            self.value += 1;
        }
    }

    pub fn on_spawn(&mut self) {
        if self.policy == ScorePolicy::EnemiesSpawned {
            self.value += 1;
        }
    }
}
