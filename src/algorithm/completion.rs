//! Final-board validation: no connector may be left dangling
//!
//! On a filled board every non-blank edge must face an occupied cell inside
//! the board. A connector facing off the board or into an empty cell makes
//! the arrangement illegal, which is what forces puzzle borders to be blank.

use crate::algorithm::compatibility::Candidate;
use crate::puzzle::board::{Board, Occupant};
use crate::puzzle::tile::Direction;

/// Where a dangling connector was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingEdge {
    /// Row of the tile with the dangling edge
    pub row: usize,
    /// Column of the tile with the dangling edge
    pub col: usize,
    /// Side the connector faces
    pub direction: Direction,
    /// Connector label
    pub label: String,
    /// Whether the connector faces off the board rather than an empty cell
    pub off_board: bool,
}

/// First dangling connector on the board, scanning in row-major order
pub fn find_dangling_edge(board: &Board<'_>) -> Option<DanglingEdge> {
    scan(board, None)
}

/// First dangling connector once `candidate` is added to the board
///
/// The board is not modified; the candidate cell simply counts as occupied.
pub fn find_dangling_edge_with<'t>(
    board: &Board<'t>,
    candidate: &Candidate<'t>,
) -> Option<DanglingEdge> {
    scan(board, Some(candidate))
}

/// Whether a filled board leaves no connector unmatched
pub fn is_complete(board: &Board<'_>) -> bool {
    find_dangling_edge(board).is_none()
}

/// Whether adding `candidate` would leave no connector unmatched
pub fn is_complete_with<'t>(board: &Board<'t>, candidate: &Candidate<'t>) -> bool {
    find_dangling_edge_with(board, candidate).is_none()
}

fn scan<'t>(board: &Board<'t>, candidate: Option<&Candidate<'t>>) -> Option<DanglingEdge> {
    let occupied = |row: usize, col: usize| {
        board.is_occupied(row, col) || candidate.is_some_and(|c| c.row == row && c.col == col)
    };

    let extra = candidate.map(|c| {
        (
            (c.row, c.col),
            Occupant {
                tile: c.tile,
                rotation: c.rotation,
            },
        )
    });

    board
        .occupied_cells()
        .chain(extra)
        .find_map(|((row, col), occupant)| {
            Direction::ALL.iter().find_map(|&direction| {
                if occupant.tile.is_blank(occupant.rotation, direction) {
                    return None;
                }
                let neighbor = direction.step(row, col, board.rows(), board.cols());
                let dangling = match neighbor {
                    None => Some(true),
                    Some((r, c)) if !occupied(r, c) => Some(false),
                    Some(_) => None,
                };
                dangling.map(|off_board| DanglingEdge {
                    row,
                    col,
                    direction,
                    label: occupant.edge(direction).to_string(),
                    off_board,
                })
            })
        })
}
