//! Fixed-size board occupancy and placement records
//!
//! The board owns cell occupancy for the duration of one search. Cells hold
//! a reference to the placed tile together with the rotation it was placed
//! under; tiles themselves stay immutable.

use bitvec::vec::BitVec;
use log::warn;
use ndarray::Array2;
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::puzzle::tile::{Direction, Rotation, Tile};

/// A placed tile and the rotation it was placed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant<'t> {
    /// Tile occupying the cell
    pub tile: &'t Tile,
    /// Rotation the tile was placed under
    pub rotation: Rotation,
}

impl Occupant<'_> {
    /// Label this occupant shows towards `direction`
    pub fn edge(&self, direction: Direction) -> &str {
        self.tile.edge(self.rotation, direction)
    }
}

/// One entry of a placement sequence: where input tile `i` went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Board row
    pub row: usize,
    /// Board column
    pub col: usize,
    /// Rotation applied to the tile
    pub rotation: Rotation,
}

impl Location {
    /// Create a location record
    pub const fn new(row: usize, col: usize, rotation: Rotation) -> Self {
        Self { row, col, rotation }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.row, self.col, self.rotation)
    }
}

/// A complete, validated placement sequence in tile input order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Solution {
    locations: Vec<Location>,
}

impl Solution {
    /// Wrap a placement sequence
    pub const fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// Placement of each tile, indexed by input order
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Number of placed tiles
    pub const fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the solution places no tiles
    pub const fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Rebuild the board this solution describes
    ///
    /// # Errors
    ///
    /// Returns an error if the solution does not fit the given board or
    /// names a tile that is not in `tiles`
    pub fn to_board<'t>(&self, tiles: &'t [Tile], rows: usize, cols: usize) -> Result<Board<'t>> {
        let mut board = Board::new(rows, cols)?;
        for (index, location) in self.locations.iter().enumerate() {
            let tile = tiles.get(index).ok_or_else(|| {
                invalid_parameter("solution", &index, &"names a tile missing from the tile set")
            })?;
            board.place(location.row, location.col, tile, location.rotation)?;
        }
        Ok(board)
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for location in &self.locations {
            write!(f, "{location}")?;
        }
        Ok(())
    }
}

/// R x C grid where each cell is empty or holds one placed tile
#[derive(Debug, Clone)]
pub struct Board<'t> {
    cells: Array2<Option<Occupant<'t>>>,
    /// Input indices of tiles currently on the board
    placed: BitVec,
    occupied: usize,
}

impl<'t> Board<'t> {
    /// Create an empty board
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are rejected by [`Board::checked_cell_count`]
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::checked_cell_count(rows, cols)?;
        Ok(Self {
            cells: Array2::from_elem((rows, cols), None),
            placed: BitVec::new(),
            occupied: 0,
        })
    }

    /// Number of cells on a `rows` x `cols` board
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the cell storage
    /// would exceed the addressable size
    pub fn checked_cell_count(rows: usize, cols: usize) -> Result<usize> {
        let cell_bytes = size_of::<Option<Occupant<'t>>>();
        rows.checked_mul(cols)
            .filter(|&cells| {
                cells > 0
                    && cells
                        .checked_mul(cell_bytes)
                        .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(PuzzleError::InvalidDimensions { rows, cols })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells
    pub const fn occupied(&self) -> usize {
        self.occupied
    }

    /// Whether no cell is occupied
    pub const fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Whether `(row, col)` lies on the board
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols()
    }

    /// Occupant of a cell, or `None` when the cell is empty or off the board
    pub fn occupant_at(&self, row: usize, col: usize) -> Option<Occupant<'t>> {
        self.cells.get((row, col)).copied().flatten()
    }

    /// Whether a cell on the board holds a tile
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.occupant_at(row, col).is_some()
    }

    /// Occupant of the cell next to `(row, col)` in `direction`
    pub fn neighbor(&self, row: usize, col: usize, direction: Direction) -> Option<Occupant<'t>> {
        direction
            .step(row, col, self.rows(), self.cols())
            .and_then(|(r, c)| self.occupant_at(r, c))
    }

    /// Whether the tile with this input index is on the board
    pub fn is_placed(&self, tile_id: usize) -> bool {
        self.placed.get(tile_id).is_some_and(|bit| *bit)
    }

    /// Occupy an empty cell
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is off the board, already occupied, or
    /// the tile is already placed elsewhere
    pub fn place(&mut self, row: usize, col: usize, tile: &'t Tile, rotation: Rotation) -> Result<()> {
        let dimensions = (self.rows(), self.cols());
        if self.is_placed(tile.id()) {
            return Err(PuzzleError::TileAlreadyPlaced { tile: tile.id() });
        }
        let cell = self.cells.get_mut((row, col)).ok_or(PuzzleError::OutOfBounds {
            row,
            col,
            dimensions,
        })?;
        if cell.is_some() {
            return Err(PuzzleError::CellOccupied { row, col });
        }
        *cell = Some(Occupant { tile, rotation });

        if self.placed.len() <= tile.id() {
            self.placed.resize(tile.id() + 1, false);
        }
        self.placed.set(tile.id(), true);
        self.occupied += 1;
        Ok(())
    }

    /// Free an occupied cell, returning what was there
    ///
    /// # Errors
    ///
    /// Returns an error if the cell is off the board or already empty
    pub fn remove(&mut self, row: usize, col: usize) -> Result<Occupant<'t>> {
        let dimensions = (self.rows(), self.cols());
        let cell = self.cells.get_mut((row, col)).ok_or(PuzzleError::OutOfBounds {
            row,
            col,
            dimensions,
        })?;
        let occupant = cell.take().ok_or(PuzzleError::CellEmpty { row, col })?;

        if occupant.tile.id() < self.placed.len() {
            self.placed.set(occupant.tile.id(), false);
        }
        self.occupied -= 1;
        Ok(occupant)
    }

    /// Place a tile for the lifetime of the returned guard
    ///
    /// The cell is freed again when the guard is dropped, on every exit path.
    ///
    /// # Errors
    ///
    /// Same as [`Board::place`]
    pub fn place_scoped<'b>(
        &'b mut self,
        row: usize,
        col: usize,
        tile: &'t Tile,
        rotation: Rotation,
    ) -> Result<ScopedPlacement<'b, 't>> {
        self.place(row, col, tile, rotation)?;
        Ok(ScopedPlacement {
            board: self,
            row,
            col,
        })
    }

    /// Iterate over occupied cells in row-major order
    pub fn occupied_cells(&self) -> impl Iterator<Item = ((usize, usize), Occupant<'t>)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|(position, cell)| cell.map(|occupant| (position, occupant)))
    }
}

/// Tile placement that is undone when dropped
pub struct ScopedPlacement<'b, 't> {
    board: &'b mut Board<'t>,
    row: usize,
    col: usize,
}

impl<'t> Deref for ScopedPlacement<'_, 't> {
    type Target = Board<'t>;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for ScopedPlacement<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for ScopedPlacement<'_, '_> {
    fn drop(&mut self) {
        // The guard placed this cell; nested guards have already released theirs
        if let Err(error) = self.board.remove(self.row, self.col) {
            warn!("scoped placement at ({},{}) released twice: {error}", self.row, self.col);
        }
    }
}
