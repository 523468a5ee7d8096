//! Top-down chase arcade game on raylib.
//!
//! `core` holds the backend-free rules, `render` and `audio_manager` talk to
//! raylib and rodio.

pub mod audio_manager;
pub mod config;
pub mod core;
pub mod error;
pub mod render;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
