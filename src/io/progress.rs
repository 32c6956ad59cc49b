//! Search progress display backed by a budget

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

use crate::algorithm::monitor::{BudgetMonitor, SearchCommand, SearchMonitor};
use crate::io::configuration::{PROGRESS_UPDATE_INTERVAL, SPINNER_TICK_MS};
use crate::puzzle::board::Solution;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner showing search depth, node count and solutions found
///
/// Budget decisions are delegated to the wrapped [`BudgetMonitor`].
pub struct ProgressMonitor {
    spinner: ProgressBar,
    budget: BudgetMonitor,
    nodes: u64,
    deepest: usize,
    solutions: usize,
}

impl ProgressMonitor {
    /// Spinner drawn to the terminal
    pub fn new(budget: BudgetMonitor) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self::with_bar(spinner, budget)
    }

    /// Monitor that tracks progress without drawing anything
    pub fn hidden(budget: BudgetMonitor) -> Self {
        Self::with_bar(ProgressBar::hidden(), budget)
    }

    fn with_bar(spinner: ProgressBar, budget: BudgetMonitor) -> Self {
        Self {
            spinner,
            budget,
            nodes: 0,
            deepest: 0,
            solutions: 0,
        }
    }

    /// Nodes seen so far
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Deepest level reached (tiles placed)
    pub const fn deepest(&self) -> usize {
        self.deepest
    }

    /// Solutions reported so far
    pub const fn solutions(&self) -> usize {
        self.solutions
    }

    fn refresh(&self) {
        self.spinner.set_message(format!(
            "nodes {} | deepest {} | solutions {}",
            self.nodes, self.deepest, self.solutions
        ));
    }
}

impl SearchMonitor for ProgressMonitor {
    fn on_search_start(&mut self) {
        self.nodes = 0;
        self.deepest = 0;
        self.solutions = 0;
        self.budget.on_search_start();
        self.refresh();
    }

    fn on_node(&mut self, depth: usize) {
        self.nodes += 1;
        self.deepest = self.deepest.max(depth);
        self.budget.on_node(depth);
        if self.nodes % PROGRESS_UPDATE_INTERVAL == 0 {
            self.refresh();
        }
    }

    fn on_solution(&mut self, solution: &Solution) {
        self.solutions += 1;
        self.deepest = self.deepest.max(solution.len());
        self.budget.on_solution(solution);
        self.refresh();
    }

    fn on_search_end(&mut self) {
        self.budget.on_search_end();
        self.spinner.finish_and_clear();
    }

    fn search_command(&mut self) -> SearchCommand {
        self.budget.search_command()
    }
}
