//! Level definitions and the ordered registry.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Tile map file. `None` draws the background image instead.
    pub map: Option<PathBuf>,
    pub enemy_count: usize,
    /// Added to the enemy speed when this level is entered.
    #[serde(default)]
    pub speed_increment: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LevelRegistry {
    levels: Vec<Level>,
}

impl LevelRegistry {
    pub fn new(levels: Vec<Level>) -> GameResult<Self> {
        if levels.is_empty() {
            return Err(GameError::InvalidConfig("at least one level is required".into()));
        }
        if let Some(i) = levels
            .iter()
            .position(|l| !(l.speed_increment.is_finite() && l.speed_increment >= 0.0))
        {
            return Err(GameError::InvalidConfig(format!(
                "level {} speed increment must be non-negative, got {}",
                i + 1,
                levels[i].speed_increment
            )));
        }
        Ok(Self { levels })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn get(&self, index: usize) -> GameResult<&Level> {
        self.levels.get(index).ok_or(GameError::InvalidLevelIndex {
            index,
            count: self.levels.len(),
        })
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.levels.len()
    }

    /// Enemy speed for `index`: base plus every increment up to and including it.
    pub fn enemy_speed(&self, index: usize, base: f32) -> GameResult<f32> {
        self.get(index)?;
        Ok(base + self.levels[..=index].iter().map(|l| l.speed_increment).sum::<f32>())
    }
}
