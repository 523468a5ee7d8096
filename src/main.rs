// main.rs
use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use raylib::prelude::*;

use topdown_chase::audio_manager::AudioManager;
use topdown_chase::config::GameConfig;
use topdown_chase::core::facing::Facing;
use topdown_chase::core::game::{Game, GameEvent, GameState};
use topdown_chase::core::input::{InputEvent, InputSnapshot, Key};
use topdown_chase::core::tilemap::TileMap;
use topdown_chase::render::textures::TextureManager;
use topdown_chase::render::{hud, scene};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    /// Single screen, endless waves from the edges
    Arena,
    /// Scrolling tile-map levels
    Campaign,
}

#[derive(Parser, Debug)]
#[command(version, about = "Top-down chase arcade")]
struct Args {
    /// RON config file (takes precedence over --mode)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Mode::Campaign)]
    mode: Mode,

    /// Print the selected configuration as RON and exit
    #[arg(long)]
    dump_config: bool,
}

const DIRECTION_KEYS: [(Facing, KeyboardKey, KeyboardKey); 4] = [
    (Facing::Left, KeyboardKey::KEY_LEFT, KeyboardKey::KEY_A),
    (Facing::Right, KeyboardKey::KEY_RIGHT, KeyboardKey::KEY_D),
    (Facing::Up, KeyboardKey::KEY_UP, KeyboardKey::KEY_W),
    (Facing::Down, KeyboardKey::KEY_DOWN, KeyboardKey::KEY_S),
];

fn map_key(k: KeyboardKey) -> Key {
    match k {
        KeyboardKey::KEY_SPACE => Key::Space,
        KeyboardKey::KEY_ESCAPE => Key::Escape,
        KeyboardKey::KEY_ONE => Key::Digit(1),
        KeyboardKey::KEY_TWO => Key::Digit(2),
        KeyboardKey::KEY_THREE => Key::Digit(3),
        KeyboardKey::KEY_FOUR => Key::Digit(4),
        KeyboardKey::KEY_FIVE => Key::Digit(5),
        KeyboardKey::KEY_SIX => Key::Digit(6),
        KeyboardKey::KEY_SEVEN => Key::Digit(7),
        KeyboardKey::KEY_EIGHT => Key::Digit(8),
        KeyboardKey::KEY_NINE => Key::Digit(9),
        _ => Key::Other,
    }
}

/// Held keys plus this frame's presses.
fn read_input(rl: &mut RaylibHandle) -> (InputSnapshot, Vec<InputEvent>) {
    let mut input = InputSnapshot::default();
    for (dir, a, b) in DIRECTION_KEYS {
        let held = rl.is_key_down(a) || rl.is_key_down(b);
        match dir {
            Facing::Left => input.left = held,
            Facing::Right => input.right = held,
            Facing::Up => input.up = held,
            Facing::Down => input.down = held,
        }
        if input.just_pressed.is_none() && (rl.is_key_pressed(a) || rl.is_key_pressed(b)) {
            input.just_pressed = Some(dir);
        }
    }
    input.attack = rl.is_key_down(KeyboardKey::KEY_SPACE) || rl.is_key_down(KeyboardKey::KEY_X);

    let mut events = Vec::new();
    while let Some(k) = rl.get_key_pressed() {
        events.push(InputEvent::Pressed(map_key(k)));
    }
    if rl.window_should_close() {
        events.push(InputEvent::Quit);
    }
    (input, events)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
        None => match args.mode {
            Mode::Arena => GameConfig::arena(),
            Mode::Campaign => GameConfig::campaign(),
        },
    };
    if args.dump_config {
        println!("{}", config.to_ron()?);
        return Ok(());
    }

    // Maps load once up front; a broken map is fatal.
    let mut maps: Vec<Option<TileMap>> = Vec::with_capacity(config.levels.len());
    for level in &config.levels {
        let map = match &level.map {
            Some(path) => Some(
                TileMap::load(path, config.tile_size).with_context(|| format!("loading map {}", path.display()))?,
            ),
            None => None,
        };
        maps.push(map);
    }
    let worlds: Vec<(f32, f32)> = maps
        .iter()
        .map(|m| m.as_ref().map_or(config.viewport(), |m| (m.pixel_width(), m.pixel_height())))
        .collect();
    let tile_chars: BTreeSet<char> = maps.iter().flatten().flat_map(|m| m.iter().map(|(_, _, c)| c)).collect();

    let mut game = Game::new(config.clone(), worlds).context("setting up the game")?;

    let (mut rl, thread) = raylib::init()
        .size(config.window_width, config.window_height)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.fps);
    // Escape is a game key, not the window's close shortcut.
    rl.set_exit_key(None);

    let texman = TextureManager::new(&mut rl, &thread, &config, tile_chars);

    let mut audio = AudioManager::new();
    match audio.as_mut() {
        Some(a) => {
            if let Some(p) = &config.assets.caught_sound {
                a.load_caught(p, config.caught_volume);
            }
            if let Some(p) = &config.assets.music {
                a.play_music_loop(p);
            }
        }
        None => log::warn!("no audio device, running silently"),
    }

    log::info!("{} ready: {} levels, {} fps", config.title, game.level_count(), config.fps);

    'frames: loop {
        let (input, events) = read_input(&mut rl);
        let dt = rl.get_frame_time();

        for event in game.step(&input, &events, dt)? {
            match event {
                GameEvent::Quit => break 'frames,
                GameEvent::PlayerCaught => {
                    if let Some(a) = &audio {
                        a.play_caught();
                    }
                }
                GameEvent::Won => log::info!("final score {}", game.score.value),
                _ => {}
            }
        }

        let time = rl.get_time();
        let mut d = rl.begin_drawing(&thread);
        if matches!(game.state(), GameState::Playing | GameState::LevelComplete) {
            let map = maps[game.level_index()].as_ref();
            scene::draw_world(&mut d, &game, map, &texman);
        }
        hud::draw_overlay(&mut d, &game, time);
    }

    if let Some(a) = audio.as_mut() {
        a.stop_music();
    }
    log::info!("bye");
    Ok(())
}
