//! Puzzle constants and runtime configuration defaults

/// Edge label meaning "no connector"
pub const BLANK_LABEL: &str = "pasture";

/// Keyword that opens every tile record in an input file
pub const TILE_RECORD_KEYWORD: &str = "tile";

// ASCII rendering settings
/// Default side length of one rendered tile in characters
pub const DEFAULT_TILE_SIZE: usize = 11;
/// Smallest side length that leaves room for connectors and the tile index
pub const MIN_TILE_SIZE: usize = 11;
/// Largest side length accepted for rendering
pub const MAX_TILE_SIZE: usize = 99;

// Default values for configurable parameters
/// Fixed seed for reproducible random layouts
pub const DEFAULT_SEED: u64 = 42;

/// Default number of random demonstration layouts (none)
pub const DEFAULT_RANDOM_LAYOUTS: usize = 0;

// Budget checks
/// Clock is consulted every 4,096 search nodes (2^12)
pub const CLOCK_CHECK_MASK: u64 = 0x0FFF;

// Progress display settings
/// Interval between spinner redraws in milliseconds
pub const SPINNER_TICK_MS: u64 = 120;
/// Number of search nodes between spinner message updates
pub const PROGRESS_UPDATE_INTERVAL: u64 = 1_024;

// Output settings
/// Prefix written before each reported solution
pub const SOLUTION_PREFIX: &str = "This is a solution: ";
/// Prefix written before each random demonstration layout
pub const RANDOM_LAYOUT_PREFIX: &str = "probably-not-a-Solution: ";
/// Message written when the search space holds no solution
pub const NO_SOLUTION_MESSAGE: &str = "did not find a solution";
/// Message written when a budget stops the search before any solution
pub const ABORTED_MESSAGE: &str = "search aborted: no solution found within budget";
/// Line written before the solutions found by a search a budget stopped
pub const ABORTED_PARTIAL_MESSAGE: &str = "search aborted, reporting solutions found so far";
