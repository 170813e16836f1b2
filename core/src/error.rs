use crate::grid::Coord;
use thiserror::Error;

/// Errors raised while loading or solving a maze.
///
/// Every variant is recoverable by the caller; nothing in the core panics on
/// bad input.
#[derive(Error, Debug)]
pub enum MazeError {
    #[error("no path found from {start} to {end} after visiting {visited} cells")]
    NoPathFound {
        start: Coord,
        end: Coord,
        visited: usize,
    },

    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: String },

    #[error("search state still holds metadata from a previous run; reset it first")]
    StaleMetadata,

    #[error("search gave up after expanding {limit} cells")]
    SearchBudgetExceeded { limit: usize },

    #[error("no maze has been set on the solver")]
    MissingGrid,

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MazeError {
    pub fn invalid_grid(reason: impl Into<String>) -> Self {
        Self::InvalidGrid {
            reason: reason.into(),
        }
    }

    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;
