//! Candidate cell generation for the next placement
//!
//! The frontier is every empty cell orthogonally adjacent to a placed tile,
//! produced in row-major order. An empty board seeds the search from a
//! single start cell.

use bitvec::vec::BitVec;

use crate::puzzle::board::{Board, Location};
use crate::puzzle::tile::Direction;

/// Default start cell: the board centre, rounding towards the top-left
pub const fn default_start_cell(rows: usize, cols: usize) -> (usize, usize) {
    (rows.saturating_sub(1) / 2, cols.saturating_sub(1) / 2)
}

/// Empty cells eligible to receive the next tile, in row-major order
///
/// Cells already named by an entry of `locations` are treated as reserved
/// and never returned, whether or not the board has caught up with them.
/// When nothing is placed or reserved yet, the frontier is `start` alone.
pub fn frontier_cells(
    board: &Board<'_>,
    locations: &[Location],
    start: (usize, usize),
) -> Vec<(usize, usize)> {
    let rows = board.rows();
    let cols = board.cols();

    let mut reserved: BitVec = BitVec::repeat(false, rows * cols);
    for location in locations {
        if board.contains(location.row, location.col) {
            reserved.set(location.row * cols + location.col, true);
        }
    }

    let is_taken = |row: usize, col: usize| {
        board.is_occupied(row, col) || reserved.get(row * cols + col).is_some_and(|bit| *bit)
    };

    if board.is_empty() && locations.is_empty() {
        return if board.contains(start.0, start.1) {
            vec![start]
        } else {
            Vec::new()
        };
    }

    let mut cells = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            if is_taken(row, col) {
                continue;
            }
            let touches_placed = Direction::ALL.iter().any(|direction| {
                direction
                    .step(row, col, rows, cols)
                    .is_some_and(|(r, c)| board.is_occupied(r, c))
            });
            if touches_placed {
                cells.push((row, col));
            }
        }
    }
    cells
}
