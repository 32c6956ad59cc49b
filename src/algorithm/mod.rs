/// Per-candidate edge matching against placed neighbours
pub mod compatibility;
/// Dangling-connector detection on a filled board
pub mod completion;
/// Empty cells eligible for the next placement
pub mod frontier;
/// Search observers, node and time budgets
pub mod monitor;
/// Random non-matching layouts for demonstration
pub mod random;
/// Recursive backtracking driver
pub mod search;
