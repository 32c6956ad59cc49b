//! Command-line interface for solving tile puzzles from input files

use crate::algorithm::monitor::BudgetMonitor;
use crate::algorithm::random::RandomPlacer;
use crate::algorithm::search::{SearchConfig, SearchEngine, SearchReport};
use crate::io::configuration::{DEFAULT_RANDOM_LAYOUTS, DEFAULT_SEED, DEFAULT_TILE_SIZE};
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::io::loader::load_tiles;
use crate::io::progress::ProgressMonitor;
use crate::io::render::validate_tile_size;
use crate::io::report::Reporter;
use crate::puzzle::board::Board;
use crate::puzzle::tile::Tile;
use clap::Parser;
use log::info;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "edgetile")]
#[command(
    author,
    version,
    about = "Place edge-labelled tiles on a board so that every shared edge matches"
)]
/// Command-line arguments for the puzzle solver
// Mode selection is two independent on/off switches plus display flags
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Tile file: records of the form `tile <north> <east> <south> <west>`
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Board extent
    #[arg(
        short = 'b',
        long = "board-dimensions",
        num_args = 2,
        value_names = ["ROWS", "COLS"],
        required = true
    )]
    pub board_dimensions: Vec<usize>,

    /// Report every solution instead of stopping at the first
    #[arg(short, long)]
    pub all_solutions: bool,

    /// Try all four rotations of each tile
    #[arg(short = 'r', long)]
    pub allow_rotations: bool,

    /// Side length of one rendered tile (odd, 11 to 99)
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE, value_parser = parse_tile_size)]
    pub tile_size: usize,

    /// Abort the search after this many nodes
    #[arg(long, value_name = "NODES")]
    pub max_nodes: Option<u64>,

    /// Abort the search after this many seconds
    #[arg(long, value_name = "SECS")]
    pub time_limit: Option<f64>,

    /// Print this many random (non-matching) layouts before solving
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_RANDOM_LAYOUTS)]
    pub random_layouts: usize,

    /// Random seed for demonstration layouts
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_tile_size(value: &str) -> std::result::Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|error| format!("'{value}' is not a number: {error}"))?;
    validate_tile_size(size).map_err(|error| error.to_string())
}

impl Cli {
    /// Requested board extent as (rows, cols)
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly two positive dimensions were given
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        match self.board_dimensions.as_slice() {
            [rows, cols] if *rows > 0 && *cols > 0 => Ok((*rows, *cols)),
            [rows, cols] => Err(PuzzleError::InvalidDimensions {
                rows: *rows,
                cols: *cols,
            }),
            other => Err(invalid_parameter(
                "board_dimensions",
                &format!("{other:?}"),
                &"expected exactly two values: ROWS COLS",
            )),
        }
    }

    /// Engine configuration selected by the mode flags
    pub const fn search_config(&self) -> SearchConfig {
        SearchConfig {
            all_solutions: self.all_solutions,
            allow_rotations: self.allow_rotations,
            start_cell: None,
        }
    }

    /// Search budget from the limit flags
    ///
    /// # Errors
    ///
    /// Returns an error if the time limit is negative or not finite
    pub fn budget(&self) -> Result<BudgetMonitor> {
        let time_limit = self
            .time_limit
            .map(|secs| {
                Duration::try_from_secs_f64(secs).map_err(|error| {
                    invalid_parameter("time_limit", &secs, &error)
                })
            })
            .transpose()?;
        Ok(BudgetMonitor::new(self.max_nodes, time_limit))
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Loads the puzzle, runs the requested search and writes the results
pub struct PuzzleRunner {
    cli: Cli,
}

impl PuzzleRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run and write results to standard output
    ///
    /// # Errors
    ///
    /// Returns an error for configuration problems (unreadable or malformed
    /// input, board too small) or when output cannot be written
    pub fn run(&self) -> Result<SearchReport> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.run_to(&mut lock)
    }

    /// Run and write results to `out`
    ///
    /// # Errors
    ///
    /// Same as [`PuzzleRunner::run`]
    pub fn run_to<W: Write>(&self, out: W) -> Result<SearchReport> {
        let tiles = load_tiles(&self.cli.input)?;
        self.solve(&tiles, out)
    }

    /// Run on already loaded tiles and write results to `out`
    ///
    /// # Errors
    ///
    /// Same as [`PuzzleRunner::run`]
    pub fn solve<W: Write>(&self, tiles: &[Tile], out: W) -> Result<SearchReport> {
        let (rows, cols) = self.cli.dimensions()?;
        let config = self.cli.search_config();

        // Rejects undersized boards before any layout or search work
        let mut engine = SearchEngine::new(tiles, rows, cols, config)?;
        let mut reporter = Reporter::new(out, self.cli.tile_size);

        if self.cli.random_layouts > 0 {
            let mut placer = RandomPlacer::new(self.cli.seed);
            for _ in 0..self.cli.random_layouts {
                let mut board = Board::new(rows, cols)?;
                let locations = placer.place_tiles(&mut board, tiles)?;
                reporter.write_random_layout(&locations, &board)?;
            }
        }

        let budget = self.cli.budget()?;
        let report = if self.cli.should_show_progress() {
            engine.run_with(&mut ProgressMonitor::new(budget))?
        } else {
            engine.run_with(&mut ProgressMonitor::hidden(budget))?
        };

        info!(
            "{} solution(s) in {:.3}s ({} nodes)",
            report.solutions.len(),
            report.stats.elapsed.as_secs_f64(),
            report.stats.nodes
        );

        reporter.write_report(&report, tiles, (rows, cols), config.all_solutions)?;
        Ok(report)
    }
}
