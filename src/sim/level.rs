//! Level grids and the brick builder
//!
//! A level is a rectangular grid of 0/1 cells. Cell (row, col) set to 1 becomes
//! a brick one cell in from the top-left corner of the playfield.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::brick::Brick;
use crate::config::BrickConfig;
use crate::error::LevelError;

const LEVEL_1: [[u8; 11]; 6] = [
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

const LEVEL_2: [[u8; 10]; 4] = [
    [0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 1, 0, 0],
];

/// Immutable brick layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Level {
    rows: Vec<Vec<u8>>,
}

impl Level {
    /// Validate a grid: non-empty, rectangular, cells 0 or 1
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self, LevelError> {
        let expected = rows.first().ok_or(LevelError::Empty)?.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(LevelError::RaggedRow {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
            if let Some(col) = cells.iter().position(|&c| c > 1) {
                return Err(LevelError::InvalidCell {
                    row,
                    col,
                    value: cells[col],
                });
            }
        }
        Ok(Self { rows })
    }

    /// Parse a single grid, e.g. `[[1,0,1],[0,1,0]]`
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    fn from_grid<const W: usize, const H: usize>(grid: &[[u8; W]; H]) -> Self {
        Self {
            rows: grid.iter().map(|row| row.to_vec()).collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// (row, col) of every brick cell, row-major
    pub fn brick_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &cell)| cell == 1)
                .map(move |(col, _)| (row, col))
        })
    }

    pub fn brick_count(&self) -> usize {
        self.brick_cells().count()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Level {
    type Error = LevelError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<Level> for Vec<Vec<u8>> {
    fn from(level: Level) -> Self {
        level.rows
    }
}

/// The built-in level sequence
pub fn default_levels() -> Vec<Level> {
    vec![Level::from_grid(&LEVEL_1), Level::from_grid(&LEVEL_2)]
}

/// Parse an ordered list of grids
pub fn levels_from_json(json: &str) -> Result<Vec<Level>, LevelError> {
    let levels: Vec<Level> = serde_json::from_str(json)?;
    if levels.is_empty() {
        return Err(LevelError::Empty);
    }
    Ok(levels)
}

/// Top-left corner of the brick at (row, col); the margin is one cell
pub fn brick_position(row: usize, col: usize, config: &BrickConfig) -> Vec2 {
    Vec2::new(
        config.width + col as f32 * config.width,
        config.height + row as f32 * config.height,
    )
}

/// Create a fresh brick for every set cell
pub fn build_level(level: &Level, config: &BrickConfig) -> Vec<Brick> {
    level
        .brick_cells()
        .map(|(row, col)| Brick::new(brick_position(row, col, config), config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_position_from_grid() {
        let level = Level::new(vec![
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 1],
        ])
        .unwrap();
        let bricks = build_level(&level, &BrickConfig::default());
        assert_eq!(bricks.len(), 1);
        assert_eq!(bricks[0].pos, Vec2::new(256.0, 192.0));
        assert_eq!(bricks[0].width, 64.0);
        assert!(!bricks[0].marked_for_removal);
    }

    #[test]
    fn test_build_is_row_major_and_deterministic() {
        let level = Level::new(vec![vec![1, 0, 1], vec![0, 1, 0]]).unwrap();
        let bricks = build_level(&level, &BrickConfig::default());
        let positions: Vec<Vec2> = bricks.iter().map(|b| b.pos).collect();
        assert_eq!(
            positions,
            vec![
                Vec2::new(64.0, 64.0),
                Vec2::new(192.0, 64.0),
                Vec2::new(128.0, 128.0),
            ]
        );
        let again: Vec<Vec2> = build_level(&level, &BrickConfig::default())
            .iter()
            .map(|b| b.pos)
            .collect();
        assert_eq!(positions, again);
    }

    #[test]
    fn test_custom_brick_size() {
        let config = BrickConfig {
            width: 32.0,
            height: 16.0,
        };
        assert_eq!(brick_position(2, 3, &config), Vec2::new(128.0, 48.0));
    }

    #[test]
    fn test_default_levels() {
        let levels = default_levels();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].rows().len(), 6);
        assert_eq!(levels[0].brick_count(), 39);
        assert_eq!(levels[1].brick_count(), 26);
    }

    #[test]
    fn test_json_round_trip_and_validation() {
        let level = Level::from_json("[[1,0],[0,1]]").unwrap();
        assert_eq!(level.brick_count(), 2);
        assert_eq!(serde_json::to_string(&level).unwrap(), "[[1,0],[0,1]]");

        assert!(matches!(Level::from_json("[]"), Err(LevelError::Parse(_))));
        assert!(matches!(
            Level::new(vec![vec![1, 0], vec![1]]),
            Err(LevelError::RaggedRow { row: 1, expected: 2, found: 1 })
        ));
        assert!(matches!(
            Level::new(vec![vec![1, 2]]),
            Err(LevelError::InvalidCell { row: 0, col: 1, value: 2 })
        ));
    }

    #[test]
    fn test_levels_from_json() {
        let levels = levels_from_json("[[[1]], [[0, 1], [1, 1]]]").unwrap();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[1].brick_count(), 3);
        assert!(matches!(levels_from_json("[]"), Err(LevelError::Empty)));
    }
}
