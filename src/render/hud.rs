//! Text overlays: score line and the menu / level / game-over / win screens.
use raylib::prelude::*;

use crate::core::game::{Game, GameState};
use crate::render::textures::color;

fn centered(d: &mut RaylibDrawHandle, text: &str, cx: i32, cy: i32, size: i32, c: Color) {
    let w = d.measure_text(text, size);
    d.draw_text(text, cx - w / 2, cy - size / 2, size, c);
}

pub fn draw_score(d: &mut RaylibDrawHandle, game: &Game) {
    let cfg = game.config();
    let mut line = format!("Score: {}", game.score.value);
    if game.level_count() > 1 {
        line.push_str(&format!("   Level {}/{}", game.level_index() + 1, game.level_count()));
    }
    d.draw_text(&line, 10, 10, 36, color(cfg.palette.text));
}

/// Full-screen overlay for every state but Playing. `time` drives the pulse.
pub fn draw_overlay(d: &mut RaylibDrawHandle, game: &Game, time: f64) {
    let cfg = game.config();
    let (w, h) = (cfg.window_width, cfg.window_height);
    let (cx, cy) = (w / 2, h / 2);
    let text = color(cfg.palette.text);

    match game.state() {
        GameState::Playing => draw_score(d, game),
        GameState::Menu => {
            d.clear_background(color(cfg.palette.background));
            centered(d, "Press any key to start", cx, cy, 56, text);
            if game.level_count() > 1 {
                let hint = format!("or 1-{} to pick a level", game.level_count());
                centered(d, &hint, cx, cy + 60, 24, text);
            }
        }
        GameState::LevelComplete => {
            draw_score(d, game);
            let title = format!("Level {} cleared", game.level_index() + 1);
            centered(d, &title, cx, cy - 40, 56, text);
            centered(d, "Press any key for the next level", cx, cy + 30, 24, text);
        }
        GameState::GameOver => {
            d.clear_background(color(cfg.palette.game_over));
            let pulse = 1.0 + 0.1 * (time / 0.25).sin();
            let size = (110.0 * pulse) as i32;
            centered(d, "FATALITY", cx, cy - 100, size, Color::WHITE);
            let score = format!("Final Score: {}", game.score.value);
            centered(d, &score, cx, cy, 36, Color::WHITE);
            centered(d, "Press Space to Continue, Press Esc to Exit", cx, cy + 70, 24, Color::WHITE);
        }
        GameState::Win => {
            d.clear_background(color(cfg.palette.background));
            centered(d, "You win!", cx, cy - 60, 72, text);
            let score = format!("Final Score: {}", game.score.value);
            centered(d, &score, cx, cy + 10, 36, text);
            centered(d, "Press Space for the menu, Esc to exit", cx, cy + 70, 24, text);
        }
    }
}
