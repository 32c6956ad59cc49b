//! Puzzle data model
//!
//! This module contains the puzzle's passive data structures:
//! - Edge-labelled tiles and rotations
//! - Board occupancy and placement sequences
//! - Solvable puzzle generation for fixtures

/// Board occupancy, locations and solutions
pub mod board;
/// Solvable puzzle generation
pub mod generator;
/// Tiles, directions and rotations
pub mod tile;

pub use board::{Board, Location, Solution};
pub use tile::{Direction, Rotation, Tile};
