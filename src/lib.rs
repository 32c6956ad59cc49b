//! Backtracking solver for edge-matching tile placement puzzles
//!
//! Every tile has a label on each of its four edges. A solution places all
//! tiles on a rectangular board, optionally rotated, so that neighbouring
//! tiles show equal non-blank labels on their shared edge and no connector
//! faces the border or an empty cell.

#![forbid(unsafe_code)]

/// Frontier generation, compatibility checks and the backtracking search
pub mod algorithm;
/// Input parsing, rendering, progress display and error handling
pub mod io;
/// Tiles, rotations, boards and placement records
pub mod puzzle;

pub use io::error::{PuzzleError, Result};
