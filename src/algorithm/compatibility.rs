//! Local consistency of a candidate placement against its placed neighbours
//!
//! A candidate passes when, for every occupied neighbour, the two labels on
//! the shared edge are equal and not blank. Blank edges may only face empty
//! cells or the board boundary. For the last tile of the sequence the
//! candidate must also complete the board without dangling connectors.

use std::fmt;

use crate::algorithm::completion::{DanglingEdge, find_dangling_edge_with};
use crate::io::configuration::BLANK_LABEL;
use crate::puzzle::board::Board;
use crate::puzzle::tile::{Direction, Rotation, Tile};

/// A tile being tried at a cell under a rotation
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'t> {
    /// Target row
    pub row: usize,
    /// Target column
    pub col: usize,
    /// Tile being placed
    pub tile: &'t Tile,
    /// Rotation being tried
    pub rotation: Rotation,
}

/// Reason a candidate placement was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Target cell is off the board or already holds a tile
    CellUnavailable,
    /// Labels on a shared edge differ
    Mismatch {
        /// Side of the candidate where the mismatch occurred
        direction: Direction,
    },
    /// Candidate shows a blank edge to a placed neighbour
    BlankAgainstNeighbor {
        /// Side of the candidate facing the neighbour
        direction: Direction,
    },
    /// Final tile would leave a connector unmatched
    Dangling(DanglingEdge),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellUnavailable => write!(f, "cell unavailable"),
            Self::Mismatch { direction } => write!(f, "label mismatch to the {direction:?}"),
            Self::BlankAgainstNeighbor { direction } => {
                write!(f, "blank edge against neighbour to the {direction:?}")
            }
            Self::Dangling(edge) => write!(
                f,
                "dangling '{}' at ({},{}) facing {:?}",
                edge.label, edge.row, edge.col, edge.direction
            ),
        }
    }
}

/// Decides whether a tile may go at a cell given the current placements
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityChecker {
    tile_count: usize,
}

impl CompatibilityChecker {
    /// Checker for a puzzle with `tile_count` tiles in total
    pub const fn new(tile_count: usize) -> Self {
        Self { tile_count }
    }

    /// Total number of tiles in the puzzle
    pub const fn tile_count(&self) -> usize {
        self.tile_count
    }

    /// Check `candidate` against the board, with `placed_so_far` tiles already placed
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] found
    pub fn check<'t>(
        &self,
        board: &Board<'t>,
        candidate: &Candidate<'t>,
        placed_so_far: usize,
    ) -> Result<(), Rejection> {
        let (row, col) = (candidate.row, candidate.col);
        if !board.contains(row, col) || board.is_occupied(row, col) {
            return Err(Rejection::CellUnavailable);
        }

        for direction in Direction::ALL {
            let Some(neighbor) = board.neighbor(row, col, direction) else {
                continue;
            };
            let ours = candidate.tile.edge(candidate.rotation, direction);
            let theirs = neighbor.edge(direction.opposite());
            if ours != theirs {
                return Err(Rejection::Mismatch { direction });
            }
            if ours == BLANK_LABEL {
                return Err(Rejection::BlankAgainstNeighbor { direction });
            }
        }

        if placed_so_far + 1 == self.tile_count {
            if let Some(edge) = find_dangling_edge_with(board, candidate) {
                return Err(Rejection::Dangling(edge));
            }
        }

        Ok(())
    }

    /// Whether `candidate` is consistent with every placed neighbour
    pub fn is_compatible<'t>(
        &self,
        board: &Board<'t>,
        candidate: &Candidate<'t>,
        placed_so_far: usize,
    ) -> bool {
        self.check(board, candidate, placed_so_far).is_ok()
    }
}
