//! Text output for search results and demonstration layouts

use std::io::Write;

use crate::algorithm::search::{SearchReport, SearchStatus};
use crate::io::configuration::{
    ABORTED_MESSAGE, ABORTED_PARTIAL_MESSAGE, NO_SOLUTION_MESSAGE, RANDOM_LAYOUT_PREFIX,
    SOLUTION_PREFIX,
};
use crate::io::error::Result;
use crate::io::render::{render_board, render_solution};
use crate::puzzle::board::{Board, Location};
use crate::puzzle::tile::Tile;

/// Writes search outcomes in the command-line output format
pub struct Reporter<W: Write> {
    out: W,
    tile_size: usize,
}

impl<W: Write> Reporter<W> {
    /// Reporter drawing boards with `tile_size` characters per cell side
    pub const fn new(out: W, tile_size: usize) -> Self {
        Self { out, tile_size }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write a search report
    ///
    /// In first-solution mode the solution is followed by its board. In
    /// all-solutions mode a count is followed by one line per solution.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or a solution cannot be rendered
    pub fn write_report(
        &mut self,
        report: &SearchReport,
        tiles: &[Tile],
        dimensions: (usize, usize),
        all_solutions: bool,
    ) -> Result<()> {
        let (rows, cols) = dimensions;

        if let SearchStatus::Aborted { reason } = &report.status {
            if report.solutions.is_empty() {
                writeln!(self.out, "{ABORTED_MESSAGE} ({reason})")?;
                return Ok(());
            }
            writeln!(self.out, "{ABORTED_PARTIAL_MESSAGE} ({reason})")?;
        }

        if report.solutions.is_empty() {
            writeln!(self.out, "{NO_SOLUTION_MESSAGE}")?;
            return Ok(());
        }

        if all_solutions {
            writeln!(self.out, "found {} solutions.", report.solutions.len())?;
            for solution in &report.solutions {
                writeln!(self.out, "{SOLUTION_PREFIX}{solution}")?;
            }
        } else if let Some(solution) = report.first() {
            writeln!(self.out, "{SOLUTION_PREFIX}{solution}")?;
            let art = render_solution(solution, tiles, rows, cols, self.tile_size)?;
            writeln!(self.out, "{art}")?;
        }
        Ok(())
    }

    /// Write a random demonstration layout and its board
    ///
    /// # Errors
    ///
    /// Returns an error if writing or rendering fails
    pub fn write_random_layout(&mut self, locations: &[Location], board: &Board<'_>) -> Result<()> {
        write!(self.out, "{RANDOM_LAYOUT_PREFIX}")?;
        for location in locations {
            write!(self.out, "{location}")?;
        }
        writeln!(self.out)?;
        let art = render_board(board, self.tile_size)?;
        writeln!(self.out, "{art}")?;
        Ok(())
    }
}
