//! Tests for candidate placement checks

#[cfg(test)]
mod tests {
    use edgetile::algorithm::compatibility::{Candidate, CompatibilityChecker, Rejection};
    use edgetile::puzzle::board::Board;
    use edgetile::puzzle::tile::{Direction, Rotation, Tile};

    fn tiles() -> Vec<Tile> {
        vec![
            Tile::new(0, "pasture", "road", "pasture", "pasture"),
            Tile::new(1, "pasture", "pasture", "pasture", "road"),
            Tile::new(2, "pasture", "pasture", "pasture", "city"),
            Tile::new(3, "pasture", "pasture", "pasture", "pasture"),
        ]
    }

    fn candidate(tile: &Tile, row: usize, col: usize, rotation: Rotation) -> Candidate<'_> {
        Candidate {
            row,
            col,
            tile,
            rotation,
        }
    }

    // Tests that matching non-blank labels are accepted
    // Verified by comparing the candidate edge with the neighbour's same side
    #[test]
    fn test_matching_labels_accepted() {
        let tiles = tiles();
        let mut board = Board::new(1, 3).expect("valid dimensions");
        board.place(0, 0, &tiles[0], Rotation::R0).expect("empty");

        let checker = CompatibilityChecker::new(3);
        assert_eq!(checker.tile_count(), 3);
        assert_eq!(
            checker.check(&board, &candidate(&tiles[1], 0, 1, Rotation::R0), 1),
            Ok(())
        );
    }

    // Tests that differing labels are refused with the side named
    // Verified by accepting any non-blank pair
    #[test]
    fn test_mismatch_refused() {
        let tiles = tiles();
        let mut board = Board::new(1, 3).expect("valid dimensions");
        board.place(0, 0, &tiles[0], Rotation::R0).expect("empty");

        let checker = CompatibilityChecker::new(3);
        assert_eq!(
            checker.check(&board, &candidate(&tiles[2], 0, 1, Rotation::R0), 1),
            Err(Rejection::Mismatch {
                direction: Direction::West
            })
        );
    }

    // Tests that two blank edges may not face each other
    // Verified by treating equal blank labels as a match
    #[test]
    fn test_blank_against_neighbour_refused() {
        let tiles = tiles();
        let mut board = Board::new(2, 1).expect("valid dimensions");
        board.place(0, 0, &tiles[3], Rotation::R0).expect("empty");

        let checker = CompatibilityChecker::new(4);
        let rejection = checker
            .check(&board, &candidate(&tiles[0], 1, 0, Rotation::R0), 1)
            .expect_err("pasture meets pasture");
        assert_eq!(
            rejection,
            Rejection::BlankAgainstNeighbor {
                direction: Direction::North
            }
        );
        assert!(rejection.to_string().contains("blank edge"));
    }

    // Tests that occupied and off-board cells are unavailable
    // Verified by skipping the occupancy check
    #[test]
    fn test_unavailable_cells_refused() {
        let tiles = tiles();
        let mut board = Board::new(1, 2).expect("valid dimensions");
        board.place(0, 0, &tiles[0], Rotation::R0).expect("empty");

        let checker = CompatibilityChecker::new(2);
        assert_eq!(
            checker.check(&board, &candidate(&tiles[1], 0, 0, Rotation::R0), 1),
            Err(Rejection::CellUnavailable)
        );
        assert!(!checker.is_compatible(&board, &candidate(&tiles[1], 3, 0, Rotation::R0), 1));
    }

    // Tests that the final tile must leave no connector dangling
    // Verified by skipping completion validation on the last placement
    #[test]
    fn test_last_tile_must_complete_board() {
        let tiles = tiles();
        let board = Board::new(1, 1).expect("valid dimensions");

        let last = CompatibilityChecker::new(1);
        let rejection = last
            .check(&board, &candidate(&tiles[0], 0, 0, Rotation::R0), 0)
            .expect_err("road points off the board");
        assert!(matches!(rejection, Rejection::Dangling(ref edge) if edge.off_board));

        // Same placement is fine while more tiles are still to come
        let more = CompatibilityChecker::new(2);
        assert!(more.is_compatible(&board, &candidate(&tiles[0], 0, 0, Rotation::R0), 0));

        assert!(last.is_compatible(&board, &candidate(&tiles[3], 0, 0, Rotation::R0), 0));
    }

    // Tests that rotations change which edge faces the neighbour
    // Verified by ignoring the candidate rotation
    #[test]
    fn test_rotation_is_applied() {
        let tiles = tiles();
        let mut board = Board::new(1, 2).expect("valid dimensions");
        board.place(0, 0, &tiles[0], Rotation::R0).expect("empty");

        // Tile 0 turned half way shows its road to the west
        let checker = CompatibilityChecker::new(3);
        assert!(checker.is_compatible(&board, &candidate(&tiles[0], 0, 1, Rotation::R180), 1));
        assert!(!checker.is_compatible(&board, &candidate(&tiles[0], 0, 1, Rotation::R0), 1));
    }
}
