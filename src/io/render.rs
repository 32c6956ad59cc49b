//! ASCII art rendering of a board
//!
//! Cells share their borders. Each placed tile draws its connectors from the
//! edge midpoint towards the centre using the first character of the label,
//! and shows its input index in the centre. Blank edges draw nothing.

use ndarray::Array2;

use crate::io::configuration::{MAX_TILE_SIZE, MIN_TILE_SIZE};
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use crate::puzzle::board::{Board, Solution};
use crate::puzzle::tile::{Direction, Tile};

/// Check that a rendered tile side length is usable
///
/// # Errors
///
/// Returns an error if `tile_size` is even or outside
/// [`MIN_TILE_SIZE`]..=[`MAX_TILE_SIZE`]
pub fn validate_tile_size(tile_size: usize) -> Result<usize> {
    if !(MIN_TILE_SIZE..=MAX_TILE_SIZE).contains(&tile_size) || tile_size % 2 == 0 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &format!("must be odd and between {MIN_TILE_SIZE} and {MAX_TILE_SIZE}"),
        ));
    }
    Ok(tile_size)
}

/// Render a board as lines of text
///
/// # Errors
///
/// Returns an error if `tile_size` is invalid or the canvas would be too
/// large to address
pub fn render_board(board: &Board<'_>, tile_size: usize) -> Result<String> {
    let tile_size = validate_tile_size(tile_size)?;
    let span = tile_size - 1;
    let half = span / 2;
    let extent = |cells: usize| cells.checked_mul(span).and_then(|n| n.checked_add(1));
    let (Some(height), Some(width)) = (extent(board.rows()), extent(board.cols())) else {
        return Err(canvas_too_large(board, tile_size));
    };
    // One char per canvas cell plus a newline per line
    let chars = height.checked_mul(width).and_then(|n| n.checked_add(height));
    if chars.is_none_or(|chars| chars > isize::MAX as usize / size_of::<char>()) {
        return Err(canvas_too_large(board, tile_size));
    }

    let mut canvas = Array2::from_elem((height, width), ' ');

    for y in 0..height {
        for x in 0..width {
            let on_row_line = y % span == 0;
            let on_col_line = x % span == 0;
            let glyph = match (on_row_line, on_col_line) {
                (true, true) => '+',
                (true, false) => '-',
                (false, true) => '|',
                (false, false) => continue,
            };
            if let Some(cell) = canvas.get_mut((y, x)) {
                *cell = glyph;
            }
        }
    }

    for ((row, col), occupant) in board.occupied_cells() {
        let top = row * span;
        let left = col * span;
        let centre = (top + half, left + half);

        for direction in Direction::ALL {
            if occupant.tile.is_blank(occupant.rotation, direction) {
                continue;
            }
            let glyph = occupant.edge(direction).chars().next().unwrap_or('?');
            for step in 1..half {
                let position = match direction {
                    Direction::North => (top + step, centre.1),
                    Direction::South => (top + span - step, centre.1),
                    Direction::West => (centre.0, left + step),
                    Direction::East => (centre.0, left + span - step),
                };
                if let Some(cell) = canvas.get_mut(position) {
                    *cell = glyph;
                }
            }
        }

        let label = occupant.tile.id().to_string();
        let first = centre.1.saturating_sub(label.len() / 2);
        for (offset, ch) in label.chars().enumerate() {
            if let Some(cell) = canvas.get_mut((centre.0, first + offset)) {
                *cell = ch;
            }
        }
    }

    let mut out = String::with_capacity(height * (width + 1));
    for line in canvas.rows() {
        out.extend(line.iter());
        out.push('\n');
    }
    Ok(out)
}

fn canvas_too_large(board: &Board<'_>, tile_size: usize) -> PuzzleError {
    invalid_parameter(
        "tile_size",
        &tile_size,
        &format!(
            "a {}x{} board cannot be drawn at this size",
            board.rows(),
            board.cols()
        ),
    )
}

/// Render the board a solution describes
///
/// # Errors
///
/// Returns an error if the solution does not fit the board or `tile_size` is invalid
pub fn render_solution(
    solution: &Solution,
    tiles: &[Tile],
    rows: usize,
    cols: usize,
    tile_size: usize,
) -> Result<String> {
    let board = solution.to_board(tiles, rows, cols)?;
    render_board(&board, tile_size)
}
