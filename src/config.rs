//! Fixed game settings. None of this is read from flags or files.

use std::time::Duration;

use crate::error::{Result, SnakeError};
use crate::{Coords, TermInt};

/// Board height including the border rows
pub const BOARD_ROWS: TermInt = 20;
/// Board width including the border columns
pub const BOARD_COLS: TermInt = 30;
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
pub const START_POS: Coords = (1, 1);

pub const FLOOR_CHAR: char = ' ';
pub const SNAKE_CHAR: char = 'o';
pub const FRUIT_CHAR: char = 'x';
/// Glyph for the first and last rows
pub const BORDER_ROW_CHAR: char = '#';
/// Glyph for the first and last columns
pub const BORDER_COL_CHAR: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: TermInt,
    pub cols: TermInt,
    pub tick_interval: Duration,
    pub start: Coords,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            tick_interval: TICK_INTERVAL,
            start: START_POS,
        }
    }
}

impl GameConfig {
    /// The board needs at least one interior cell, and the start cell must be one.
    pub fn validate(&self) -> Result<()> {
        let (x, y) = self.start;
        let has_interior = self.rows >= 3 && self.cols >= 3;
        let start_inside = x >= 1
            && y >= 1
            && x < self.cols.saturating_sub(1)
            && y < self.rows.saturating_sub(1);

        if has_interior && start_inside {
            Ok(())
        } else {
            Err(SnakeError::InvalidBoard { rows: self.rows, cols: self.cols, start: self.start })
        }
    }
}
