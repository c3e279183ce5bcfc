use thiserror::Error;

use crate::{Coords, TermInt};

#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    #[error("a {rows}x{cols} board has no room for a snake starting at {start:?}")]
    InvalidBoard { rows: TermInt, cols: TermInt, start: Coords },
}

pub type Result<T> = std::result::Result<T, SnakeError>;
