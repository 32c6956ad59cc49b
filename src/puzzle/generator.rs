//! Solvable puzzle generation for tests and benchmarks
//!
//! Builds a full tiling with blank borders and random non-blank interior
//! connectors, then emits the tiles in breadth-first order from the start
//! cell so the frontier-driven search can reach the known arrangement.

use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::VecDeque;

use crate::algorithm::frontier::default_start_cell;
use crate::io::configuration::BLANK_LABEL;
use crate::io::error::{Result, invalid_parameter};
use crate::puzzle::board::{Board, Location, Solution};
use crate::puzzle::tile::{Direction, Rotation, Tile};

/// A generated puzzle together with one arrangement known to solve it
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// Tiles in input order
    pub tiles: Vec<Tile>,
    /// Board rows
    pub rows: usize,
    /// Board columns
    pub cols: usize,
    /// Arrangement the tiles were cut from
    pub solution: Solution,
}

/// Generate a puzzle that fills a `rows` x `cols` board exactly
///
/// With `scramble_rotations` each tile is stored turned by a random
/// rotation, so only a rotation-aware search can recover the arrangement.
///
/// # Errors
///
/// Returns an error if the dimensions are rejected by
/// [`Board::checked_cell_count`], the alphabet is empty, or the alphabet
/// contains the blank label
pub fn generate_solvable(
    rows: usize,
    cols: usize,
    alphabet: &[&str],
    scramble_rotations: bool,
    seed: u64,
) -> Result<GeneratedPuzzle> {
    let cells = Board::checked_cell_count(rows, cols)?;
    if alphabet.is_empty() {
        return Err(invalid_parameter("alphabet", &"[]", &"needs at least one label"));
    }
    if alphabet.contains(&BLANK_LABEL) {
        return Err(invalid_parameter(
            "alphabet",
            &BLANK_LABEL,
            &"connector labels must not be blank",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut pick = || {
        let index = rng.random_range(0..alphabet.len());
        alphabet.get(index).copied().unwrap_or(BLANK_LABEL)
    };

    // Label between (r, c) and (r, c + 1), and between (r, c) and (r + 1, c)
    let horizontal = Array2::from_shape_simple_fn((rows, cols - 1), &mut pick);
    let vertical = Array2::from_shape_simple_fn((rows - 1, cols), &mut pick);

    let label_at = |row: usize, col: usize, direction: Direction| {
        let edge = match direction {
            Direction::North => row.checked_sub(1).and_then(|r| vertical.get((r, col))),
            Direction::South => vertical.get((row, col)),
            Direction::West => col.checked_sub(1).and_then(|c| horizontal.get((row, c))),
            Direction::East => horizontal.get((row, col)),
        };
        edge.copied().unwrap_or(BLANK_LABEL)
    };

    let mut rotation_rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let mut tiles = Vec::with_capacity(cells);
    let mut locations = Vec::with_capacity(cells);
    for (row, col) in breadth_first_order(rows, cols) {
        let [north, east, south, west] = Direction::ALL.map(|d| label_at(row, col, d));
        let tile = Tile::new(tiles.len(), north, east, south, west);

        let stored = if scramble_rotations {
            Rotation::ALL
                .get(rotation_rng.random_range(0..Rotation::ALL.len()))
                .copied()
                .unwrap_or_default()
        } else {
            Rotation::R0
        };
        tiles.push(tile.rotated(stored));
        locations.push(Location::new(row, col, stored.inverse()));
    }

    Ok(GeneratedPuzzle {
        tiles,
        rows,
        cols,
        solution: Solution::new(locations),
    })
}

/// Every cell of the board in breadth-first order from the default start cell
fn breadth_first_order(rows: usize, cols: usize) -> Vec<(usize, usize)> {
    let mut seen = Array2::from_elem((rows, cols), false);
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    let start = default_start_cell(rows, cols);
    if let Some(flag) = seen.get_mut(start) {
        *flag = true;
        queue.push_back(start);
    }

    while let Some((row, col)) = queue.pop_front() {
        order.push((row, col));
        for direction in Direction::ALL {
            if let Some(next) = direction.step(row, col, rows, cols) {
                if let Some(flag) = seen.get_mut(next) {
                    if !*flag {
                        *flag = true;
                        queue.push_back(next);
                    }
                }
            }
        }
    }
    order
}
