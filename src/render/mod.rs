//! raylib drawing.
//!
//! Re-exports:
//! - `textures`: Texture manager with generated fallbacks
//! - `scene`: Map/background, entity and hitbox drawing
//! - `hud`: Score line and state screens

pub mod textures;
pub mod scene;
pub mod hud;
