//! World drawing: map or background, enemies, player, optional hitbox.
use raylib::prelude::*;

use crate::core::camera::Camera;
use crate::core::facing::Facing;
use crate::core::game::Game;
use crate::core::geometry::Rect;
use crate::core::tilemap::TileMap;
use crate::render::textures::{color, TextureKey, TextureManager};

const SHEET_COLUMNS: f32 = 4.0;
const SHEET_ROWS: f32 = 4.0;

fn full_source(tex: &Texture2D) -> Rectangle {
    Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32)
}

fn blit<D: RaylibDraw>(d: &mut D, tex: &Texture2D, source: Rectangle, dest: &Rect) {
    d.draw_texture_pro(tex, source, dest.to_raylib(), Vector2::new(0.0, 0.0), 0.0, Color::WHITE);
}

pub fn draw_map<D: RaylibDraw>(d: &mut D, map: &TileMap, camera: &Camera, tex: &TextureManager) {
    let ts = map.tile_size;
    let view = camera.visible_world();
    for (i, j, c) in map.iter() {
        let world = Rect::new(i as f32 * ts, j as f32 * ts, ts, ts);
        if !world.intersects(&view) {
            continue;
        }
        if let Some(t) = tex.get(TextureKey::Tile(c)) {
            blit(d, t, full_source(t), &camera.apply(&world));
        }
    }
}

pub fn draw_background<D: RaylibDraw>(d: &mut D, viewport: (f32, f32), tex: &TextureManager) {
    if let Some(t) = tex.get(TextureKey::Background) {
        blit(d, t, full_source(t), &Rect::new(0.0, 0.0, viewport.0, viewport.1));
    }
}

/// Draws everything in world space for the current frame.
pub fn draw_world<D: RaylibDraw>(d: &mut D, game: &Game, map: Option<&TileMap>, tex: &TextureManager) {
    let cfg = game.config();
    d.clear_background(color(cfg.palette.background));
    match map {
        Some(m) => draw_map(d, m, &game.camera, tex),
        None => draw_background(d, cfg.viewport(), tex),
    }

    for enemy in &game.enemies {
        let dest = game.camera.apply(&enemy.rect());
        match tex.get(TextureKey::Enemy) {
            Some(t) => blit(d, t, full_source(t), &dest),
            None => d.draw_rectangle_rec(dest.to_raylib(), color(cfg.palette.enemy)),
        }
    }

    draw_player(d, game, tex);

    if cfg.show_hitbox {
        let hb = game.camera.apply(&game.hitbox());
        d.draw_rectangle_rec(hb.to_raylib(), color(cfg.palette.hitbox));
    }
}

fn draw_player<D: RaylibDraw>(d: &mut D, game: &Game, tex: &TextureManager) {
    let dest = game.camera.apply(&game.player.rect());
    let Some(t) = tex.get(TextureKey::Player) else {
        d.draw_rectangle_rec(dest.to_raylib(), color(game.config().palette.player));
        return;
    };

    if tex.player_is_sheet() {
        let (col, row) = game.player.animation.sheet_cell();
        let cw = t.width as f32 / SHEET_COLUMNS;
        let ch = t.height as f32 / SHEET_ROWS;
        let src = Rectangle::new(col as f32 * cw, row as f32 * ch, cw, ch);
        blit(d, t, src, &dest);
        return;
    }

    // single image: mirror horizontally when facing left
    let mut src = full_source(t);
    if game.player.facing == Facing::Left {
        src.width = -src.width;
    }
    blit(d, t, src, &dest);

    if !tex.is_loaded(TextureKey::Player) {
        // stand-in square: show facing with a notch
        let (ux, uy) = game.player.facing.unit();
        let c = dest.center();
        let r = dest.w * 0.15;
        let notch = Rect::from_center(c.x + ux * dest.w * 0.35, c.y + uy * dest.h * 0.35, r, r);
        d.draw_rectangle_rec(notch.to_raylib(), Color::WHITE);
    }
}
