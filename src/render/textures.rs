use raylib::prelude::*;
use std::collections::HashMap;
use std::path::Path;

use crate::config::{GameConfig, Palette, Rgba};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextureKey {
    Player,
    Enemy,
    Background,
    Tile(char),
}

pub struct TextureManager {
    textures: HashMap<TextureKey, Texture2D>,
    /// Keys backed by a real file (as opposed to a generated stand-in).
    loaded: HashMap<TextureKey, bool>,
    player_sheet: bool,
}

#[inline]
pub fn color(c: Rgba) -> Color {
    Color::new(c[0], c[1], c[2], c[3])
}

impl TextureManager {
    /// Loads every configured image; anything missing gets a generated image.
    /// The background has no stand-in: without a file the screen is cleared instead.
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        config: &GameConfig,
        tile_chars: impl IntoIterator<Item = char>,
    ) -> Self {
        let mut tm = Self {
            textures: HashMap::new(),
            loaded: HashMap::new(),
            player_sheet: false,
        };
        let assets = &config.assets;
        let side = config.tile_size.max(1.0) as i32;

        if let Some(p) = &assets.background {
            tm.try_load(rl, thread, TextureKey::Background, p);
        }
        if let Some(p) = &assets.player {
            tm.try_load(rl, thread, TextureKey::Player, p);
        }
        if let Some(p) = &assets.enemy {
            tm.try_load(rl, thread, TextureKey::Enemy, p);
        }
        for (c, p) in &assets.tiles {
            tm.try_load(rl, thread, TextureKey::Tile(*c), p);
        }
        tm.player_sheet = assets.player_sheet && tm.is_loaded(TextureKey::Player);

        let palette = &config.palette;
        let mut fallbacks: Vec<(TextureKey, Image)> = vec![
            (TextureKey::Player, Image::gen_image_color(side, side, color(palette.player))),
            (TextureKey::Enemy, Image::gen_image_color(side, side, color(palette.enemy))),
        ];
        for c in tile_chars {
            let base = tile_shade(c, palette);
            let light = blend(base, palette.background, 48);
            fallbacks.push((TextureKey::Tile(c), Image::gen_image_checked(side, side, 4, 4, color(base), color(light))));
        }
        for (key, img) in fallbacks {
            if tm.textures.contains_key(&key) {
                continue;
            }
            match rl.load_texture_from_image(thread, &img) {
                Ok(tex) => {
                    tm.textures.insert(key, tex);
                    tm.loaded.insert(key, false);
                }
                Err(e) => log::warn!("could not upload fallback texture for {:?}: {}", key, e),
            }
        }
        tm
    }

    fn try_load(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, key: TextureKey, path: &Path) {
        match rl.load_texture(thread, &path.to_string_lossy()) {
            Ok(tex) => {
                log::info!("loaded {:?} from {:?}", key, path);
                self.textures.insert(key, tex);
                self.loaded.insert(key, true);
            }
            Err(e) => log::warn!("could not load {:?} from {:?}: {}; using a generated image", key, path, e),
        }
    }

    pub fn get(&self, key: TextureKey) -> Option<&Texture2D> {
        self.textures.get(&key)
    }

    pub fn is_loaded(&self, key: TextureKey) -> bool {
        self.loaded.get(&key).copied().unwrap_or(false)
    }

    pub fn player_is_sheet(&self) -> bool { self.player_sheet }
}

/// Stand-in tile colour: the palette background pulled towards the text colour
/// by an amount picked from the char, so different chars get different shades.
fn tile_shade(c: char, palette: &Palette) -> Rgba {
    let t = 40 + (c as u32 * 53 % 160) as u8;
    blend(palette.background, palette.text, t)
}

/// Linear blend from `a` (t = 0) to `b` (t = 255), alpha included.
fn blend(a: Rgba, b: Rgba, t: u8) -> Rgba {
    let t = t as u32;
    std::array::from_fn(|i| ((a[i] as u32 * (255 - t) + b[i] as u32 * t) / 255) as u8)
}
