//! Random tile layouts for demonstration output
//!
//! Places every tile on a uniformly random empty cell with rotation 0. No
//! matching is attempted, so the result is almost never a solution.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{PuzzleError, Result};
use crate::puzzle::board::{Board, Location};
use crate::puzzle::tile::{Rotation, Tile};

/// Seeded random placer for reproducible demonstration layouts
pub struct RandomPlacer {
    rng: StdRng,
}

impl RandomPlacer {
    /// Create a deterministic placer
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Place all `tiles` at random empty cells of `board`, in input order
    ///
    /// # Errors
    ///
    /// Returns an error if the board has too few empty cells for the tiles
    pub fn place_tiles<'t>(
        &mut self,
        board: &mut Board<'t>,
        tiles: &'t [Tile],
    ) -> Result<Vec<Location>> {
        let free = board.cell_count() - board.occupied();
        if free < tiles.len() {
            return Err(PuzzleError::BoardTooSmall {
                rows: board.rows(),
                cols: board.cols(),
                tiles: tiles.len(),
            });
        }

        let mut empty: Vec<(usize, usize)> = (0..board.rows())
            .flat_map(|row| (0..board.cols()).map(move |col| (row, col)))
            .filter(|&(row, col)| !board.is_occupied(row, col))
            .collect();

        let mut locations = Vec::with_capacity(tiles.len());
        for tile in tiles {
            let pick = self.rng.random_range(0..empty.len());
            let (row, col) = empty.swap_remove(pick);
            board.place(row, col, tile, Rotation::R0)?;
            locations.push(Location::new(row, col, Rotation::R0));
        }
        Ok(locations)
    }
}
