//! Text tile maps: one char per tile, one line per row.
use std::fs;
use std::path::Path;

use crate::error::{GameError, GameResult};

/// Char used to pad short rows.
pub const FILL: char = '.';

#[derive(Clone, Debug, PartialEq)]
pub struct TileMap {
    pub tiles: Vec<Vec<char>>,
    pub tile_size: f32,
}

impl TileMap {
    pub fn parse(text: &str, tile_size: f32) -> Option<Self> {
        let mut grid: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(|c| if c == '\t' { ' ' } else { c }).collect())
            .collect();
        if grid.is_empty() {
            return None;
        }

        let max_w = grid.iter().map(|r| r.len()).max().unwrap_or(0);
        for row in &mut grid {
            row.resize(max_w, FILL);
        }
        Some(Self { tiles: grid, tile_size })
    }

    pub fn load(path: impl AsRef<Path>, tile_size: f32) -> GameResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| GameError::MapLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::parse(&text, tile_size).ok_or_else(|| GameError::EmptyMap {
            path: path.to_path_buf(),
        })?;
        log::info!(
            "loaded map {:?}: {}x{} tiles ({}x{} px)",
            path,
            map.columns(),
            map.rows(),
            map.pixel_width(),
            map.pixel_height()
        );
        Ok(map)
    }

    pub fn columns(&self) -> usize {
        self.tiles.first().map_or(0, |r| r.len())
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn pixel_width(&self) -> f32 {
        self.columns() as f32 * self.tile_size
    }

    pub fn pixel_height(&self) -> f32 {
        self.rows() as f32 * self.tile_size
    }

    /// `(column, row, tile)` for every tile.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .flat_map(|(j, row)| row.iter().enumerate().map(move |(i, &c)| (i, j, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn pads_short_rows() {
        let map = TileMap::parse("###\n#\n#.#\n", 32.0).unwrap();
        assert_eq!(map.columns(), 3);
        assert_eq!(map.rows(), 3);
        assert_eq!(map.tiles[1], vec!['#', FILL, FILL]);
        assert_eq!((map.pixel_width(), map.pixel_height()), (96.0, 96.0));
    }

    #[test]
    fn tabs_become_spaces_and_blank_lines_are_skipped() {
        let map = TileMap::parse("#\t#\n\n\r\n###\r\n", 16.0).unwrap();
        assert_eq!(map.rows(), 2);
        assert_eq!(map.tiles[0], vec!['#', ' ', '#']);
    }

    #[test]
    fn empty_text_has_no_map() {
        assert!(TileMap::parse("\n\n", 32.0).is_none());
    }

    #[test]
    fn loads_from_disk() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "####").unwrap();
        writeln!(f, "#..#").unwrap();
        let map = TileMap::load(f.path(), 64.0).unwrap();
        assert_eq!(map.pixel_width(), 256.0);
        assert_eq!(map.iter().filter(|&(_, _, c)| c == '.').count(), 2);
    }

    #[test]
    fn missing_file_is_a_map_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TileMap::load(dir.path().join("nope.txt"), 32.0).unwrap_err();
        assert!(matches!(err, GameError::MapLoad { .. }));
    }

    #[test]
    fn blank_file_is_an_empty_map_error() {
        let f = tempfile::NamedTempFile::new().unwrap();
        let err = TileMap::load(f.path(), 32.0).unwrap_err();
        assert!(matches!(err, GameError::EmptyMap { .. }));
    }
}
