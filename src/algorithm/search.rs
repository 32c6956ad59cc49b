//! Depth-first backtracking search over tile positions and rotations
//!
//! Tiles are placed strictly in input order: depth `k` always places input
//! tile `k`. At each depth the engine walks the frontier in row-major order
//! and, for each cell, the permitted rotations in ascending order. Accepted
//! candidates are committed through a scoped board placement, so every exit
//! from a recursive call leaves the board exactly as it found it.
//!
//! Two independent toggles select the operating mode:
//! - `all_solutions`: record every solution and keep backtracking, or stop
//!   at the first one
//! - `allow_rotations`: try every distinct rotation per cell, or rotation 0 only

use log::{debug, trace};
use std::time::{Duration, Instant};

use crate::algorithm::compatibility::{Candidate, CompatibilityChecker};
use crate::algorithm::completion::find_dangling_edge;
use crate::algorithm::frontier::{default_start_cell, frontier_cells};
use crate::algorithm::monitor::{NoOpMonitor, SearchCommand, SearchMonitor};
use crate::io::error::{PuzzleError, Result};
use crate::puzzle::board::{Board, Location, Solution};
use crate::puzzle::tile::{Rotation, Tile};

/// Operating mode of the search engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Keep searching after the first solution
    pub all_solutions: bool,
    /// Try every distinct rotation per candidate cell
    pub allow_rotations: bool,
    /// Cell that receives the first tile (board centre when `None`)
    pub start_cell: Option<(usize, usize)>,
}

impl SearchConfig {
    /// Rotations tried for `tile` at each candidate cell, in ascending order
    ///
    /// Rotation search skips rotations that repeat an earlier view of a
    /// symmetric tile, so such placements are not reported twice.
    pub fn rotations_for(&self, tile: &Tile) -> Vec<Rotation> {
        if self.allow_rotations {
            tile.distinct_rotations()
        } else {
            vec![Rotation::R0]
        }
    }
}

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// First-solution mode stopped at a solution
    Solved,
    /// Every branch was explored
    Exhausted,
    /// A monitor stopped the search before it finished
    Aborted {
        /// Why the monitor stopped the search
        reason: String,
    },
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes expanded (partial sequences examined)
    pub nodes: u64,
    /// Candidates committed to the board
    pub placements: u64,
    /// Candidates refused by the compatibility check
    pub rejections: u64,
    /// Committed candidates undone after their subtree was explored
    pub backtracks: u64,
    /// Wall-clock time spent searching
    pub elapsed: Duration,
}

/// Outcome of a search: collected solutions plus how the search ended
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Solutions in discovery order
    pub solutions: Vec<Solution>,
    /// Termination status
    pub status: SearchStatus,
    /// Search counters
    pub stats: SearchStats,
}

impl SearchReport {
    /// First solution found, if any
    pub fn first(&self) -> Option<&Solution> {
        self.solutions.first()
    }

    /// Whether at least one solution was found
    pub const fn is_solved(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// Whether a monitor cut the search short
    pub const fn is_aborted(&self) -> bool {
        matches!(self.status, SearchStatus::Aborted { .. })
    }
}

enum Flow {
    Continue,
    Stop,
    Abort(String),
}

/// Backtracking driver for one puzzle instance
#[derive(Debug, Clone)]
pub struct SearchEngine<'t> {
    tiles: &'t [Tile],
    rows: usize,
    cols: usize,
    config: SearchConfig,
    checker: CompatibilityChecker,
    /// Rotations tried for each tile, by input index
    rotations: Vec<Vec<Rotation>>,
    stats: SearchStats,
}

impl<'t> SearchEngine<'t> {
    /// Create an engine for `tiles` on a `rows` x `cols` board
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is zero, the board is too large to
    /// store, the board has fewer cells than there are tiles, or the
    /// configured start cell is off the board
    pub fn new(tiles: &'t [Tile], rows: usize, cols: usize, config: SearchConfig) -> Result<Self> {
        let cells = Board::checked_cell_count(rows, cols)?;
        if cells < tiles.len() {
            return Err(PuzzleError::BoardTooSmall {
                rows,
                cols,
                tiles: tiles.len(),
            });
        }
        if let Some((row, col)) = config.start_cell {
            if row >= rows || col >= cols {
                return Err(PuzzleError::OutOfBounds {
                    row,
                    col,
                    dimensions: (rows, cols),
                });
            }
        }

        Ok(Self {
            tiles,
            rows,
            cols,
            config,
            checker: CompatibilityChecker::new(tiles.len()),
            rotations: tiles.iter().map(|tile| config.rotations_for(tile)).collect(),
            stats: SearchStats::default(),
        })
    }

    /// Engine configuration
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Board dimensions (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Cell receiving the first tile
    pub fn start_cell(&self) -> (usize, usize) {
        self.config
            .start_cell
            .unwrap_or_else(|| default_start_cell(self.rows, self.cols))
    }

    /// Run the search without a monitor
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be created
    pub fn run(&mut self) -> Result<SearchReport> {
        self.run_with(&mut NoOpMonitor)
    }

    /// Run the search, reporting progress to `monitor`
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be created
    pub fn run_with<M: SearchMonitor>(&mut self, monitor: &mut M) -> Result<SearchReport> {
        let mut board = Board::new(self.rows, self.cols)?;
        let mut locations = Vec::with_capacity(self.tiles.len());
        let mut solutions = Vec::new();
        self.stats = SearchStats::default();

        debug!(
            "searching {} tiles on {}x{} (all_solutions={}, allow_rotations={})",
            self.tiles.len(),
            self.rows,
            self.cols,
            self.config.all_solutions,
            self.config.allow_rotations
        );

        let start_time = Instant::now();
        monitor.on_search_start();
        let flow = self.extend(&mut board, &mut locations, &mut solutions, monitor);
        monitor.on_search_end();
        self.stats.elapsed = start_time.elapsed();

        let status = match flow {
            Flow::Stop => SearchStatus::Solved,
            Flow::Continue => SearchStatus::Exhausted,
            Flow::Abort(reason) => SearchStatus::Aborted { reason },
        };

        debug!(
            "search finished: {:?}, {} solutions, {} nodes, {} placements, {} rejections",
            status,
            solutions.len(),
            self.stats.nodes,
            self.stats.placements,
            self.stats.rejections
        );

        Ok(SearchReport {
            solutions,
            status,
            stats: self.stats,
        })
    }

    /// Find the first solution, or `None` if the search space holds none
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be created
    pub fn first_solution(&mut self) -> Result<Option<Solution>> {
        let previous = self.config.all_solutions;
        self.config.all_solutions = false;
        let report = self.run();
        self.config.all_solutions = previous;
        Ok(report?.solutions.into_iter().next())
    }

    /// Collect every solution
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be created
    pub fn all_solutions(&mut self) -> Result<Vec<Solution>> {
        let previous = self.config.all_solutions;
        self.config.all_solutions = true;
        let report = self.run();
        self.config.all_solutions = previous;
        Ok(report?.solutions)
    }

    fn extend<M: SearchMonitor>(
        &mut self,
        board: &mut Board<'t>,
        locations: &mut Vec<Location>,
        solutions: &mut Vec<Solution>,
        monitor: &mut M,
    ) -> Flow {
        let tiles = self.tiles;
        let depth = locations.len();

        if depth == tiles.len() {
            if let Some(edge) = find_dangling_edge(board) {
                trace!("full board rejected: dangling {edge:?}");
                return Flow::Continue;
            }
            let solution = Solution::new(locations.clone());
            debug!("solution {}: {solution}", solutions.len() + 1);
            monitor.on_solution(&solution);
            solutions.push(solution);
            return if self.config.all_solutions {
                Flow::Continue
            } else {
                Flow::Stop
            };
        }

        self.stats.nodes += 1;
        monitor.on_node(depth);
        if let SearchCommand::Terminate(reason) = monitor.search_command() {
            debug!("search aborted at depth {depth}: {reason}");
            return Flow::Abort(reason);
        }

        let Some(tile) = tiles.get(depth) else {
            return Flow::Continue;
        };

        let start = self.start_cell();
        let rotations = self.rotations.get(depth).cloned().unwrap_or_default();
        for (row, col) in frontier_cells(board, locations, start) {
            for &rotation in &rotations {
                let candidate = Candidate {
                    row,
                    col,
                    tile,
                    rotation,
                };
                if let Err(rejection) = self.checker.check(board, &candidate, depth) {
                    trace!("tile {depth} at ({row},{col}) rot {rotation}: {rejection}");
                    self.stats.rejections += 1;
                    continue;
                }

                let Ok(mut placed) = board.place_scoped(row, col, tile, rotation) else {
                    self.stats.rejections += 1;
                    continue;
                };
                self.stats.placements += 1;
                locations.push(Location::new(row, col, rotation));
                trace!("tile {depth} placed at ({row},{col}) rot {rotation}");

                let flow = self.extend(&mut placed, locations, solutions, monitor);

                locations.pop();
                drop(placed);

                match flow {
                    Flow::Continue => self.stats.backtracks += 1,
                    Flow::Stop | Flow::Abort(_) => return flow,
                }
            }
        }

        Flow::Continue
    }
}
