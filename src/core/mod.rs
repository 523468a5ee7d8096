//! Core game types and logic (geometry, entities, rules, state machine).
//!
//! Re-exports:
//! - `geometry`: Rects and distances
//! - `camera`: Hard-follow camera
//! - `input` / `facing` / `animation`: Input snapshots, facing latch, sprite poses
//! - `player` / `enemy`: Entities, chase rules and spawning
//! - `collision` / `score`: Hit tests and score keeping
//! - `level` / `tilemap`: Level registry and map loading
//! - `game`: Frame driver and state machine

pub mod geometry;
pub mod camera;
pub mod input;
pub mod facing;
pub mod animation;
pub mod player;
pub mod enemy;
pub mod collision;
pub mod score;
pub mod level;
pub mod tilemap;
pub mod game;
