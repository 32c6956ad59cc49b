//! Search monitoring and budget enforcement
//!
//! The engine reports every node and solution to a [`SearchMonitor`] and asks
//! it after each node whether to keep going. A terminated search is reported
//! as aborted, never as proven unsolvable.

use std::time::{Duration, Instant};

use crate::io::configuration::CLOCK_CHECK_MASK;
use crate::puzzle::board::Solution;

/// Decision returned by a monitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommand {
    /// Keep searching
    Continue,
    /// Stop the search, giving a reason
    Terminate(String),
}

/// Observer hooks invoked by the search engine
pub trait SearchMonitor {
    /// Called once before the first node
    fn on_search_start(&mut self) {}

    /// Called when the engine expands a node at `depth` (tiles already placed)
    fn on_node(&mut self, depth: usize);

    /// Called for every accepted solution
    fn on_solution(&mut self, _solution: &Solution) {}

    /// Called once after the search returns
    fn on_search_end(&mut self) {}

    /// Whether the search may continue
    fn search_command(&mut self) -> SearchCommand;
}

/// Monitor that never interferes
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor;

impl SearchMonitor for NoOpMonitor {
    fn on_node(&mut self, _depth: usize) {}

    fn search_command(&mut self) -> SearchCommand {
        SearchCommand::Continue
    }
}

/// Node-count and wall-clock cutoff
///
/// The clock is only read every `CLOCK_CHECK_MASK + 1` nodes.
#[derive(Debug, Clone)]
pub struct BudgetMonitor {
    node_limit: Option<u64>,
    time_limit: Option<Duration>,
    clock_check_mask: u64,
    nodes: u64,
    start_time: Instant,
    exceeded: Option<String>,
}

impl Default for BudgetMonitor {
    fn default() -> Self {
        Self::unlimited()
    }
}

impl BudgetMonitor {
    /// Budget with the given optional limits
    pub fn new(node_limit: Option<u64>, time_limit: Option<Duration>) -> Self {
        Self {
            node_limit,
            time_limit,
            clock_check_mask: CLOCK_CHECK_MASK,
            nodes: 0,
            start_time: Instant::now(),
            exceeded: None,
        }
    }

    /// Budget that never runs out
    pub fn unlimited() -> Self {
        Self::new(None, None)
    }

    /// Budget with a custom clock-check mask (must be `2^k - 1`)
    pub fn with_clock_check_mask(mut self, mask: u64) -> Self {
        self.clock_check_mask = mask;
        self
    }

    /// Nodes observed so far
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Whether either limit is set
    pub const fn is_limited(&self) -> bool {
        self.node_limit.is_some() || self.time_limit.is_some()
    }
}

impl SearchMonitor for BudgetMonitor {
    fn on_search_start(&mut self) {
        self.nodes = 0;
        self.start_time = Instant::now();
        self.exceeded = None;
    }

    fn on_node(&mut self, _depth: usize) {
        self.nodes = self.nodes.wrapping_add(1);

        if let Some(limit) = self.node_limit {
            if self.nodes > limit {
                self.exceeded = Some(format!("node limit of {limit} reached"));
                return;
            }
        }

        if let Some(limit) = self.time_limit {
            if self.nodes & self.clock_check_mask == 0 && self.start_time.elapsed() > limit {
                self.exceeded = Some(format!("time limit of {:.3}s reached", limit.as_secs_f64()));
            }
        }
    }

    fn search_command(&mut self) -> SearchCommand {
        self.exceeded
            .clone()
            .map_or(SearchCommand::Continue, SearchCommand::Terminate)
    }
}
