//! Tests for solvable puzzle generation

#[cfg(test)]
mod tests {
    use edgetile::PuzzleError;
    use edgetile::algorithm::completion::is_complete;
    use edgetile::io::configuration::BLANK_LABEL;
    use edgetile::puzzle::generator::generate_solvable;
    use edgetile::puzzle::tile::Rotation;

    const ALPHABET: &[&str] = &["road", "city", "river"];

    // Tests that the known arrangement fills the board and leaves nothing dangling
    // Verified by giving border edges random labels
    #[test]
    fn test_known_solution_is_complete() {
        let puzzle = generate_solvable(3, 4, ALPHABET, false, 7).expect("valid parameters");
        assert_eq!(puzzle.tiles.len(), 12);
        assert_eq!(puzzle.solution.len(), 12);

        let board = puzzle
            .solution
            .to_board(&puzzle.tiles, puzzle.rows, puzzle.cols)
            .expect("solution fits");
        assert_eq!(board.occupied(), 12);
        assert!(is_complete(&board));
    }

    // Tests that the first tile sits on the start cell and ids follow input order
    // Verified by emitting tiles in row-major order
    #[test]
    fn test_tiles_follow_breadth_first_order() {
        let puzzle = generate_solvable(3, 3, ALPHABET, false, 1).expect("valid parameters");
        let first = puzzle.solution.locations().first().copied();
        assert_eq!(first.map(|l| (l.row, l.col)), Some((1, 1)));
        for (index, tile) in puzzle.tiles.iter().enumerate() {
            assert_eq!(tile.id(), index);
        }
        // The centre of a 3x3 board has no blank edges
        assert!(
            puzzle.tiles[0]
                .edges(Rotation::R0)
                .iter()
                .all(|label| *label != BLANK_LABEL)
        );
    }

    // Tests that scrambled tiles still solve the board under the recorded rotations
    // Verified by recording the stored rotation instead of its inverse
    #[test]
    fn test_scrambled_solution_uses_inverse_rotations() {
        let puzzle = generate_solvable(2, 3, ALPHABET, true, 11).expect("valid parameters");
        let board = puzzle
            .solution
            .to_board(&puzzle.tiles, puzzle.rows, puzzle.cols)
            .expect("solution fits");
        assert!(is_complete(&board));
    }

    // Tests that the same seed always yields the same puzzle
    // Verified by seeding from the clock
    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_solvable(3, 3, ALPHABET, true, 99).expect("valid parameters");
        let b = generate_solvable(3, 3, ALPHABET, true, 99).expect("valid parameters");
        assert_eq!(a.tiles, b.tiles);
        assert_eq!(a.solution, b.solution);
    }

    // Tests parameter validation
    // Verified by accepting the blank label as a connector
    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(matches!(
            generate_solvable(0, 3, ALPHABET, false, 0),
            Err(PuzzleError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            generate_solvable(2, 2, &[], false, 0),
            Err(PuzzleError::InvalidParameter { .. })
        ));
        assert!(matches!(
            generate_solvable(2, 2, &["road", BLANK_LABEL], false, 0),
            Err(PuzzleError::InvalidParameter { .. })
        ));
    }
}
