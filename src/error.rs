use grid_util::Point;
use thiserror::Error;

/// What is wrong with the rows a [MazeGrid](crate::maze_grid::MazeGrid) was built from.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridDefect {
    #[error("no rows")]
    NoRows,
    #[error("row {row} is empty")]
    EmptyRow { row: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
}

#[derive(Error, Debug)]
pub enum MazeError {
    #[error("Malformed grid: {0}")]
    MalformedGrid(#[from] GridDefect),

    #[error("Point arrays should have length 2, this one has length {found}")]
    InvalidCoordinate { found: usize },

    #[error("No path from {start} to {end}")]
    NoPathFound { start: Point, end: Point },

    #[error("Search cancelled after expanding {expanded} states")]
    Cancelled { expanded: usize },

    #[error("Invalid direction {found:?} at index {index}")]
    InvalidDirection { index: usize, found: char },

    #[error("Move {step} leaves the open maze at {position}")]
    IllegalMove { step: usize, position: Point },

    #[error("Unable to parse maze message: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MazeResult<T> = Result<T, MazeError>;
