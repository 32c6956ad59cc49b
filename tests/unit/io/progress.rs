//! Tests for the search progress monitor

#[cfg(test)]
mod tests {
    use edgetile::algorithm::monitor::{BudgetMonitor, SearchCommand, SearchMonitor};
    use edgetile::algorithm::search::{SearchConfig, SearchEngine};
    use edgetile::io::progress::ProgressMonitor;
    use edgetile::puzzle::board::{Location, Solution};
    use edgetile::puzzle::tile::{Rotation, Tile};

    // Tests counters track nodes, depth and solutions
    // Verified by recording the latest depth instead of the deepest
    #[test]
    fn test_counters() {
        let mut monitor = ProgressMonitor::hidden(BudgetMonitor::unlimited());
        monitor.on_search_start();
        monitor.on_node(0);
        monitor.on_node(3);
        monitor.on_node(1);
        monitor.on_solution(&Solution::new(vec![Location::new(0, 0, Rotation::R0)]));
        monitor.on_search_end();

        assert_eq!(monitor.nodes(), 3);
        assert_eq!(monitor.deepest(), 3);
        assert_eq!(monitor.solutions(), 1);
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
    }

    // Tests budget decisions pass through the progress display
    // Verified by always answering Continue
    #[test]
    fn test_delegates_to_budget() {
        let mut monitor = ProgressMonitor::hidden(BudgetMonitor::new(Some(1), None));
        monitor.on_search_start();
        monitor.on_node(0);
        assert_eq!(monitor.search_command(), SearchCommand::Continue);
        monitor.on_node(1);
        assert!(matches!(monitor.search_command(), SearchCommand::Terminate(_)));
    }

    // Tests the monitor driving a real search
    // Verified by not forwarding solutions to the monitor
    #[test]
    fn test_drives_search() {
        let tiles = vec![
            Tile::new(0, "pasture", "road", "pasture", "pasture"),
            Tile::new(1, "pasture", "pasture", "pasture", "road"),
        ];
        let config = SearchConfig {
            all_solutions: true,
            ..SearchConfig::default()
        };
        let mut engine = SearchEngine::new(&tiles, 1, 2, config).expect("valid setup");
        let mut monitor = ProgressMonitor::hidden(BudgetMonitor::unlimited());
        let report = engine.run_with(&mut monitor).expect("search runs");
        assert_eq!(monitor.solutions(), report.solutions.len());
        assert_eq!(monitor.nodes(), report.stats.nodes);
        assert_eq!(monitor.deepest(), 2);
    }
}
