//! Error types and context management for puzzle setup and board operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Board has fewer cells than there are tiles to place
    BoardTooSmall {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
        /// Number of tiles that must fit on the board
        tiles: usize,
    },

    /// Board extent is zero in a dimension or too large to store
    InvalidDimensions {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
    },

    /// Input record could not be turned into a tile
    MalformedTile {
        /// Zero-based index of the offending record
        record: usize,
        /// Description of what's wrong with the record
        reason: String,
    },

    /// Cell coordinates lie outside the board
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Board dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Attempted to place a tile on a cell that already holds one
    CellOccupied {
        /// Row of the occupied cell
        row: usize,
        /// Column of the occupied cell
        col: usize,
    },

    /// Attempted to free a cell that holds no tile
    CellEmpty {
        /// Row of the empty cell
        row: usize,
        /// Column of the empty cell
        col: usize,
    },

    /// Tile is already placed somewhere else on the board
    TileAlreadyPlaced {
        /// Input index of the tile
        tile: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoardTooSmall { rows, cols, tiles } => {
                write!(
                    f,
                    "Specified board is not large enough: {rows}x{cols}={} cells for {tiles} tiles",
                    rows.saturating_mul(*cols)
                )
            }
            Self::InvalidDimensions { rows, cols } => {
                write!(
                    f,
                    "Invalid board dimensions {rows}x{cols}: both must be positive and the board must fit in memory"
                )
            }
            Self::MalformedTile { record, reason } => {
                write!(f, "Malformed tile record {record}: {reason}")
            }
            Self::OutOfBounds {
                row,
                col,
                dimensions,
            } => {
                write!(
                    f,
                    "Cell ({row},{col}) is outside the board (grid size {}x{})",
                    dimensions.0, dimensions.1
                )
            }
            Self::CellOccupied { row, col } => {
                write!(f, "Cell ({row},{col}) is already occupied")
            }
            Self::CellEmpty { row, col } => {
                write!(f, "Cell ({row},{col}) is already empty")
            }
            Self::TileAlreadyPlaced { tile } => {
                write!(f, "Tile {tile} is already placed on the board")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Attaches the path being worked on to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into a [`PuzzleError::FileSystem`] naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| PuzzleError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed tile error for the record at `record`
pub fn malformed_tile(record: usize, reason: &impl ToString) -> PuzzleError {
    PuzzleError::MalformedTile {
        record,
        reason: reason.to_string(),
    }
}
