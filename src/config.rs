//! Game configuration: RON file or one of the built-in presets.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::enemy::{ChaseRule, SpawnPolicy};
use crate::core::level::Level;
use crate::core::player::{ClampArea, HitboxShape};
use crate::core::score::ScorePolicy;
use crate::error::{GameError, GameResult};

pub type Rgba = [u8; 4];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgba,
    pub player: Rgba,
    pub enemy: Rgba,
    pub hitbox: Rgba,
    pub text: Rgba,
    pub game_over: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [255, 255, 255, 255],
            player: [255, 0, 0, 255],
            enemy: [0, 0, 0, 255],
            hitbox: [0, 0, 255, 255],
            text: [0, 0, 0, 255],
            game_over: [139, 0, 0, 255],
        }
    }
}

/// Every path is optional; missing files get a generated stand-in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub player: Option<PathBuf>,
    /// The player image is a walk sheet: 4 frames across, rows Down/Left/Right/Up.
    pub player_sheet: bool,
    pub enemy: Option<PathBuf>,
    pub background: Option<PathBuf>,
    /// Texture per map char.
    pub tiles: Vec<(char, PathBuf)>,
    pub caught_sound: Option<PathBuf>,
    pub music: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub window_width: i32,
    pub window_height: i32,
    pub fps: u32,

    pub player_size: f32,
    /// Pixels per tick.
    pub player_speed: f32,
    /// Top-left start; `None` centres the player in the viewport.
    pub player_start: Option<[f32; 2]>,
    pub clamp_area: ClampArea,
    pub hitbox: HitboxShape,
    pub show_hitbox: bool,
    /// Depth of the attack zone; `None` disables attacking.
    pub strike_reach: Option<f32>,

    pub enemy_size: f32,
    /// Pixels per tick on the first level.
    pub enemy_speed: f32,
    pub chase: ChaseRule,
    pub spawn: SpawnPolicy,
    pub min_spawn_distance: f32,
    pub score: ScorePolicy,

    pub tile_size: f32,
    pub levels: Vec<Level>,
    pub assets: AssetPaths,
    pub caught_volume: f32,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::campaign()
    }
}

impl GameConfig {
    /// Endless survival on a single screen; enemies pour in from the edges.
    pub fn arena() -> Self {
        Self {
            title: "Top Down Game".into(),
            window_width: 800,
            window_height: 600,
            fps: 60,
            player_size: 50.0,
            player_speed: 5.0,
            player_start: None,
            clamp_area: ClampArea::Viewport,
            hitbox: HitboxShape::Front { width: 20.0, height: 30.0 },
            show_hitbox: true,
            strike_reach: None,
            enemy_size: 40.0,
            enemy_speed: 2.0,
            chase: ChaseRule::Normalized,
            spawn: SpawnPolicy::Timed { interval_secs: 1.0 },
            min_spawn_distance: 0.0,
            score: ScorePolicy::EnemiesSpawned,
            tile_size: 32.0,
            levels: vec![Level { map: None, enemy_count: 0, speed_increment: 0.0 }],
            assets: AssetPaths {
                player: Some("assets/player.png".into()),
                enemy: Some("assets/enemy.png".into()),
                background: Some("assets/bg.png".into()),
                caught_sound: Some("assets/fatality.wav".into()),
                ..AssetPaths::default()
            },
            caught_volume: 0.8,
            palette: Palette {
                background: [0, 0, 0, 255],
                text: [255, 255, 255, 255],
                ..Palette::default()
            },
        }
    }

    /// Three scrolling tile-map levels; clear every enemy to advance.
    pub fn campaign() -> Self {
        let level = |n: usize, enemy_count: usize, speed_increment: f32| Level {
            map: Some(PathBuf::from(format!("assets/maps/level{n}.txt"))),
            enemy_count,
            speed_increment,
        };
        Self {
            title: "Top-Down Game".into(),
            window_width: 740,
            window_height: 600,
            fps: 30,
            player_size: 50.0,
            player_speed: 5.0,
            player_start: None,
            clamp_area: ClampArea::World,
            hitbox: HitboxShape::Body,
            show_hitbox: false,
            strike_reach: Some(40.0),
            enemy_size: 50.0,
            enemy_speed: 2.0,
            chase: ChaseRule::Grid,
            spawn: SpawnPolicy::Fixed,
            min_spawn_distance: 150.0,
            score: ScorePolicy::SurvivalSeconds,
            tile_size: 32.0,
            levels: vec![level(1, 5, 0.0), level(2, 10, 1.0), level(3, 15, 1.0)],
            assets: AssetPaths {
                tiles: vec![('#', "assets/tiles/wall.png".into()), ('.', "assets/tiles/floor.png".into())],
                ..AssetPaths::default()
            },
            caught_volume: 0.8,
            palette: Palette::default(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: GameConfig = ron::from_str(&text).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        log::info!("loaded config {:?} ({} levels)", path, cfg.levels.len());
        Ok(cfg)
    }

    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new().depth_limit(3))
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.window_width as f32, self.window_height as f32)
    }

    pub fn validate(&self) -> GameResult<()> {
        let bad = |msg: String| -> GameResult<()> { Err(GameError::InvalidConfig(msg)) };
        if self.window_width <= 0 || self.window_height <= 0 {
            return bad(format!("window size {}x{} must be positive", self.window_width, self.window_height));
        }
        if self.fps == 0 {
            return bad("fps must be positive".into());
        }
        for (name, v) in [
            ("player_size", self.player_size),
            ("enemy_size", self.enemy_size),
            ("tile_size", self.tile_size),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return bad(format!("{name} must be positive, got {v}"));
            }
        }
        for (name, v) in [
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("min_spawn_distance", self.min_spawn_distance),
        ] {
            if !(v.is_finite() && v >= 0.0) {
                return bad(format!("{name} must be non-negative, got {v}"));
            }
        }
        if let SpawnPolicy::Timed { interval_secs } = self.spawn {
            if !(interval_secs.is_finite() && interval_secs > 0.0) {
                return bad(format!("spawn interval must be positive, got {interval_secs}"));
            }
        }
        if let Some(reach) = self.strike_reach {
            if !(reach.is_finite() && reach > 0.0) {
                return bad(format!("strike_reach must be positive, got {reach}"));
            }
        }
        if let HitboxShape::Front { width, height } = self.hitbox {
            if !(width > 0.0 && height > 0.0) {
                return bad("front hitbox needs a positive size".into());
            }
        }
        if self.levels.is_empty() {
            return bad("at least one level is required".into());
        }
        for (i, level) in self.levels.iter().enumerate() {
            let inc = level.speed_increment;
            if !(inc.is_finite() && inc >= 0.0) {
                return bad(format!("level {} speed increment must be non-negative, got {inc}", i + 1));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn presets_are_valid() {
        GameConfig::arena().validate().unwrap();
        GameConfig::campaign().validate().unwrap();
    }

    #[test]
    fn campaign_has_three_growing_levels() {
        let cfg = GameConfig::campaign();
        let counts: Vec<_> = cfg.levels.iter().map(|l| l.enemy_count).collect();
        assert_eq!(counts, vec![5, 10, 15]);
    }

    #[test]
    fn ron_round_trip_through_file() {
        let cfg = GameConfig::arena();
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(cfg.to_ron().unwrap().as_bytes()).unwrap();
        let back = GameConfig::load(f.path()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "(fps: 45, chase: Normalized)").unwrap();
        let cfg = GameConfig::load(f.path()).unwrap();
        assert_eq!(cfg.fps, 45);
        assert_eq!(cfg.chase, ChaseRule::Normalized);
        assert_eq!(cfg.levels, GameConfig::campaign().levels);
    }

    #[test]
    fn rejects_zero_sized_player() {
        let cfg = GameConfig { player_size: 0.0, ..GameConfig::campaign() };
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_negative_speed_increment() {
        let mut cfg = GameConfig::campaign();
        cfg.levels[0].speed_increment = -5.0;
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "(fps: \"fast\")").unwrap();
        assert!(matches!(GameConfig::load(f.path()), Err(GameError::ConfigParse { .. })));
    }
}
