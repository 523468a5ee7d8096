//! Frame driver: the menu / playing / level-complete / game-over / win machine.
//!
//! `Game` owns every piece of mutable play state. The outer loop feeds it one
//! `InputSnapshot` plus the frame's discrete `InputEvent`s and reacts to the
//! returned `GameEvent`s (sounds, logging, quitting). Level advances happen in
//! place, so no call depth grows with the number of levels.
use rand::rngs::StdRng;
use rand::SeedableRng;
use raylib::prelude::Vector2;

use crate::config::GameConfig;
use crate::core::camera::Camera;
use crate::core::collision::{clear_struck, first_hit};
use crate::core::enemy::{spawn_at_edge, spawn_away_from, Enemy, SpawnPolicy};
use crate::core::geometry::{distance, Rect};
use crate::core::input::{InputEvent, InputSnapshot, Key};
use crate::core::level::LevelRegistry;
use crate::core::player::{ClampArea, Player};
use crate::core::score::Score;
use crate::error::{GameError, GameResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    LevelComplete,
    GameOver,
    Win,
}

/// Things the outer loop may want to react to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    LevelStarted { index: usize },
    EnemySpawned,
    EnemiesCleared(usize),
    PlayerCaught,
    LevelCompleted { index: usize },
    Won,
    Quit,
}

pub struct Game {
    config: GameConfig,
    registry: LevelRegistry,
    /// World size in pixels per level.
    worlds: Vec<(f32, f32)>,
    rng: StdRng,
    state: GameState,
    level: usize,
    enemy_speed: f32,
    spawn_timer: f32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub score: Score,
    pub camera: Camera,
}

impl Game {
    pub fn new(config: GameConfig, worlds: Vec<(f32, f32)>) -> GameResult<Self> {
        Self::with_rng(config, worlds, StdRng::from_entropy())
    }

    pub fn with_rng(config: GameConfig, worlds: Vec<(f32, f32)>, rng: StdRng) -> GameResult<Self> {
        config.validate()?;
        let registry = LevelRegistry::new(config.levels.clone())?;
        if worlds.len() != registry.len() {
            return Err(GameError::InvalidConfig(format!(
                "{} world sizes for {} levels",
                worlds.len(),
                registry.len()
            )));
        }

        let (vw, vh) = config.viewport();
        let start = start_position(&config);
        let mut game = Self {
            player: Player::new(start, config.player_size, config.player_speed),
            enemies: Vec::new(),
            score: Score::new(config.score),
            camera: Camera::new(vw, vh, worlds[0].0, worlds[0].1),
            enemy_speed: config.enemy_speed,
            spawn_timer: 0.0,
            state: GameState::Menu,
            level: 0,
            config,
            registry,
            worlds,
            rng,
        };
        game.check_spawn_distance()?;
        game.reset();
        Ok(game)
    }

    pub fn state(&self) -> GameState { self.state }
    pub fn level_index(&self) -> usize { self.level }
    pub fn level_count(&self) -> usize { self.registry.len() }
    pub fn enemy_speed(&self) -> f32 { self.enemy_speed }
    pub fn config(&self) -> &GameConfig { &self.config }

    pub fn world_size(&self) -> (f32, f32) {
        self.worlds[self.level]
    }

    /// Back to the process-start state: menu, first level, no enemies, zero score.
    pub fn reset(&mut self) {
        self.state = GameState::Menu;
        self.level = 0;
        self.player = Player::new(start_position(&self.config), self.config.player_size, self.config.player_speed);
        self.enemies.clear();
        self.score.reset();
        self.spawn_timer = 0.0;
        self.enemy_speed = self.config.enemy_speed;
        let (ww, wh) = self.worlds[0];
        self.camera.set_world(ww, wh);
        self.camera.update(&self.player.rect());
    }

    /// One frame. `dt` is the frame time in seconds; movement is per tick.
    pub fn step(&mut self, input: &InputSnapshot, events: &[InputEvent], dt: f32) -> GameResult<Vec<GameEvent>> {
        let mut out = Vec::new();
        if events.contains(&InputEvent::Quit) {
            out.push(GameEvent::Quit);
            return Ok(out);
        }
        let first_key = events.iter().find_map(|e| match e {
            InputEvent::Pressed(k) => Some(*k),
            InputEvent::Quit => None,
        });

        match self.state {
            GameState::Menu => {
                if let Some(key) = first_key {
                    match key {
                        Key::Escape => out.push(GameEvent::Quit),
                        Key::Digit(n) if n >= 1 && (n as usize) <= self.registry.len() => {
                            self.begin_level(n as usize - 1, &mut out)?;
                        }
                        _ => self.begin_level(0, &mut out)?,
                    }
                }
            }
            GameState::Playing => self.play_frame(input, dt, &mut out),
            GameState::LevelComplete => match first_key {
                Some(Key::Escape) => out.push(GameEvent::Quit),
                Some(_) => self.begin_level(self.level + 1, &mut out)?,
                None => {}
            },
            GameState::GameOver => match first_key {
                Some(Key::Space) => {
                    self.reset();
                    self.begin_level(0, &mut out)?;
                }
                Some(Key::Escape) => out.push(GameEvent::Quit),
                _ => {}
            },
            GameState::Win => match first_key {
                Some(Key::Space) => self.reset(),
                Some(Key::Escape) => out.push(GameEvent::Quit),
                _ => {}
            },
        }
        Ok(out)
    }

    /// Area the player is clamped to, in world coordinates.
    pub fn play_area(&self) -> Rect {
        match self.config.clamp_area {
            ClampArea::Viewport => {
                let (vw, vh) = self.config.viewport();
                Rect::new(0.0, 0.0, vw, vh)
            }
            ClampArea::World => {
                let (ww, wh) = self.world_size();
                Rect::new(0.0, 0.0, ww, wh)
            }
        }
    }

    pub fn hitbox(&self) -> Rect {
        self.player.hitbox(self.config.hitbox)
    }

    fn begin_level(&mut self, index: usize, out: &mut Vec<GameEvent>) -> GameResult<()> {
        let level = self.registry.get(index)?.clone();
        self.level = index;
        self.enemy_speed = self.registry.enemy_speed(index, self.config.enemy_speed)?;
        self.player = Player::new(start_position(&self.config), self.config.player_size, self.config.player_speed);
        self.enemies.clear();
        self.spawn_timer = 0.0;

        let (ww, wh) = self.worlds[index];
        self.camera.set_world(ww, wh);
        self.camera.update(&self.player.rect());

        if self.config.spawn == SpawnPolicy::Fixed {
            let area = Rect::new(0.0, 0.0, ww, wh);
            let avoid = self.player.rect().center();
            for _ in 0..level.enemy_count {
                match spawn_away_from(&mut self.rng, &area, self.config.enemy_size, avoid, self.config.min_spawn_distance) {
                    Some(pos) => {
                        self.enemies.push(Enemy::new(pos, self.config.enemy_size, self.enemy_speed));
                        self.score.on_spawn();
                    }
                    None => log::warn!("no spawn point {} px from the player, skipping enemy", self.config.min_spawn_distance),
                }
            }
        }

        log::info!(
            "level {}/{} started: {} enemies at speed {}",
            index + 1,
            self.registry.len(),
            self.enemies.len(),
            self.enemy_speed
        );
        self.state = GameState::Playing;
        out.push(GameEvent::LevelStarted { index });
        Ok(())
    }

    fn play_frame(&mut self, input: &InputSnapshot, dt: f32, out: &mut Vec<GameEvent>) {
        let area = self.play_area();
        self.player.update(input, &area, dt);

        if let SpawnPolicy::Timed { interval_secs } = self.config.spawn {
            self.spawn_timer += dt;
            while self.spawn_timer >= interval_secs {
                self.spawn_timer -= interval_secs;
                let pos = spawn_at_edge(&mut self.rng, &self.camera.visible_world(), self.config.enemy_size);
                self.enemies.push(Enemy::new(pos, self.config.enemy_size, self.enemy_speed));
                self.score.on_spawn();
                log::debug!("enemy spawned at ({:.0}, {:.0})", pos.x, pos.y);
                out.push(GameEvent::EnemySpawned);
            }
        }

        let target = self.player.rect().center();
        for enemy in &mut self.enemies {
            enemy.chase(target, self.config.chase);
        }

        if let Some(reach) = self.config.strike_reach {
            if input.attack {
                let cleared = clear_struck(&self.player.strike_zone(reach), &mut self.enemies);
                if cleared > 0 {
                    log::debug!("struck {cleared} enemies, {} left", self.enemies.len());
                    out.push(GameEvent::EnemiesCleared(cleared));
                }
            }
        }

        self.camera.update(&self.player.rect());

        if first_hit(&self.hitbox(), &self.enemies).is_some() {
            log::info!("player caught on level {} with score {}", self.level + 1, self.score.value);
            self.state = GameState::GameOver;
            out.push(GameEvent::PlayerCaught);
            return;
        }

        self.score.tick(dt);

        if self.config.spawn == SpawnPolicy::Fixed && self.enemies.is_empty() {
            if self.registry.is_last(self.level) {
                log::info!("all {} levels cleared, score {}", self.registry.len(), self.score.value);
                self.state = GameState::Win;
                out.push(GameEvent::Won);
            } else {
                log::info!("level {} cleared", self.level + 1);
                self.state = GameState::LevelComplete;
                out.push(GameEvent::LevelCompleted { index: self.level });
            }
        }
    }

    /// Fails when some level is too small for any spawn to clear the minimum distance.
    fn check_spawn_distance(&self) -> GameResult<()> {
        if self.config.spawn != SpawnPolicy::Fixed || self.config.min_spawn_distance <= 0.0 {
            return Ok(());
        }
        let start = self.player.rect().center();
        let half = self.config.enemy_size * 0.5;
        for (i, &(ww, wh)) in self.worlds.iter().enumerate() {
            let (x0, x1) = (half, (ww - half).max(half));
            let (y0, y1) = (half, (wh - half).max(half));
            let farthest = [(x0, y0), (x1, y0), (x0, y1), (x1, y1)]
                .into_iter()
                .map(|(x, y)| distance(start, Vector2::new(x, y)))
                .fold(0.0_f32, f32::max);
            if farthest < self.config.min_spawn_distance {
                return Err(GameError::InvalidConfig(format!(
                    "level {} ({}x{}) has no spawn point {} px from the player",
                    i + 1,
                    ww,
                    wh,
                    self.config.min_spawn_distance
                )));
            }
        }
        Ok(())
    }
}

/// Canonical player start: configured, or centred in the viewport.
fn start_position(config: &GameConfig) -> Vector2 {
    match config.player_start {
        Some([x, y]) => Vector2::new(x, y),
        None => {
            let (vw, vh) = config.viewport();
            Vector2::new((vw - config.player_size) * 0.5, (vh - config.player_size) * 0.5)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::Level;

    fn press(k: Key) -> Vec<InputEvent> {
        vec![InputEvent::Pressed(k)]
    }

    fn small_campaign() -> GameConfig {
        GameConfig {
            levels: vec![
                Level { map: None, enemy_count: 2, speed_increment: 0.0 },
                Level { map: None, enemy_count: 3, speed_increment: 1.0 },
            ],
            ..GameConfig::campaign()
        }
    }

    fn game(cfg: GameConfig) -> Game {
        let worlds = vec![(1280.0, 960.0); cfg.levels.len()];
        Game::with_rng(cfg, worlds, StdRng::seed_from_u64(3)).unwrap()
    }

    #[test]
    fn starts_in_menu() {
        let g = game(small_campaign());
        assert_eq!(g.state(), GameState::Menu);
        assert!(g.enemies.is_empty());
    }

    #[test]
    fn any_key_starts_first_level() {
        let mut g = game(small_campaign());
        let ev = g.step(&InputSnapshot::default(), &press(Key::Other), 0.016).unwrap();
        assert_eq!(ev, vec![GameEvent::LevelStarted { index: 0 }]);
        assert_eq!(g.state(), GameState::Playing);
        assert_eq!(g.enemies.len(), 2);
    }

    #[test]
    fn digit_selects_level() {
        let mut g = game(small_campaign());
        g.step(&InputSnapshot::default(), &press(Key::Digit(2)), 0.016).unwrap();
        assert_eq!(g.level_index(), 1);
        assert_eq!(g.enemy_speed(), 3.0);
        assert_eq!(g.enemies.len(), 3);
    }

    #[test]
    fn quit_event_wins_in_every_state() {
        let mut g = game(small_campaign());
        let ev = g.step(&InputSnapshot::default(), &[InputEvent::Quit], 0.016).unwrap();
        assert_eq!(ev, vec![GameEvent::Quit]);
    }

    #[test]
    fn mismatched_world_list_is_rejected() {
        let cfg = small_campaign();
        assert!(Game::with_rng(cfg, vec![(800.0, 600.0)], StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn unreachable_spawn_distance_is_rejected() {
        let cfg = GameConfig { min_spawn_distance: 5000.0, ..small_campaign() };
        let worlds = vec![(740.0, 600.0); 2];
        assert!(matches!(
            Game::with_rng(cfg, worlds, StdRng::seed_from_u64(0)),
            Err(GameError::InvalidConfig(_))
        ));
    }
}
