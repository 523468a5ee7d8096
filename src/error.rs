//! Error taxonomy for map/config loading and level lookups.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("could not read map {path:?}: {source}")]
    MapLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("map {path:?} has no tiles")]
    EmptyMap { path: PathBuf },

    #[error("could not read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Only reachable through a malformed registry or a logic bug.
    #[error("level index {index} out of range ({count} levels)")]
    InvalidLevelIndex { index: usize, count: usize },
}

pub type GameResult<T> = Result<T, GameError>;
