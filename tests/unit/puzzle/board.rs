//! Tests for board occupancy, scoped placement and solution records

#[cfg(test)]
mod tests {
    use edgetile::PuzzleError;
    use edgetile::puzzle::board::{Board, Location, Solution};
    use edgetile::puzzle::tile::{Direction, Rotation, Tile};

    fn tiles() -> Vec<Tile> {
        vec![
            Tile::new(0, "pasture", "road", "pasture", "pasture"),
            Tile::new(1, "pasture", "pasture", "pasture", "road"),
        ]
    }

    // Tests placing, querying and removing a tile
    // Verified by not decrementing the occupied count on removal
    #[test]
    fn test_place_and_remove() {
        let tiles = tiles();
        let mut board = Board::new(2, 3).expect("valid dimensions");
        assert_eq!((board.rows(), board.cols(), board.cell_count()), (2, 3, 6));
        assert!(board.is_empty());

        board
            .place(1, 2, &tiles[0], Rotation::R90)
            .expect("cell is empty");
        assert_eq!(board.occupied(), 1);
        assert!(board.is_placed(0));
        let occupant = board.occupant_at(1, 2).expect("cell is occupied");
        assert_eq!(occupant.tile.id(), 0);
        assert_eq!(occupant.rotation, Rotation::R90);
        assert_eq!(occupant.edge(Direction::South), "road");

        let removed = board.remove(1, 2).expect("cell is occupied");
        assert_eq!(removed.tile.id(), 0);
        assert!(board.is_empty());
        assert!(!board.is_placed(0));
        assert!(board.occupant_at(1, 2).is_none());
    }

    // Tests that logic errors on the board are reported, not ignored
    // Verified by letting place overwrite an occupied cell
    #[test]
    fn test_board_logic_errors() {
        let tiles = tiles();
        let mut board = Board::new(1, 2).expect("valid dimensions");

        board.place(0, 0, &tiles[0], Rotation::R0).expect("empty");
        assert!(matches!(
            board.place(0, 0, &tiles[1], Rotation::R0),
            Err(PuzzleError::CellOccupied { row: 0, col: 0 })
        ));
        assert!(matches!(
            board.place(0, 1, &tiles[0], Rotation::R0),
            Err(PuzzleError::TileAlreadyPlaced { tile: 0 })
        ));
        assert!(matches!(
            board.remove(0, 1),
            Err(PuzzleError::CellEmpty { row: 0, col: 1 })
        ));
        assert!(matches!(
            board.place(3, 0, &tiles[1], Rotation::R0),
            Err(PuzzleError::OutOfBounds { .. })
        ));
        assert!(matches!(
            Board::new(0, 4),
            Err(PuzzleError::InvalidDimensions { rows: 0, cols: 4 })
        ));
    }

    // Tests that a scoped placement frees its cell when dropped
    // Verified by removing the Drop implementation
    #[test]
    fn test_scoped_placement_releases_cell() {
        let tiles = tiles();
        let mut board = Board::new(1, 2).expect("valid dimensions");
        {
            let mut outer = board
                .place_scoped(0, 0, &tiles[0], Rotation::R0)
                .expect("empty");
            assert_eq!(outer.occupied(), 1);
            {
                let inner = outer
                    .place_scoped(0, 1, &tiles[1], Rotation::R0)
                    .expect("empty");
                assert_eq!(inner.occupied(), 2);
                assert_eq!(
                    inner.neighbor(0, 0, Direction::East).map(|o| o.tile.id()),
                    Some(1)
                );
            }
            assert_eq!(outer.occupied(), 1);
            assert!(!outer.is_occupied(0, 1));
        }
        assert!(board.is_empty());
        assert!(!board.is_placed(0));
    }

    // Tests that occupied cells are listed in row-major order
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_occupied_cells_row_major() {
        let tiles = tiles();
        let mut board = Board::new(2, 2).expect("valid dimensions");
        board.place(1, 0, &tiles[0], Rotation::R0).expect("empty");
        board.place(0, 1, &tiles[1], Rotation::R0).expect("empty");
        let cells: Vec<(usize, usize)> = board.occupied_cells().map(|(cell, _)| cell).collect();
        assert_eq!(cells, vec![(0, 1), (1, 0)]);
    }

    // Tests solution display and reconstruction of its board
    // Verified by placing tiles in reverse order during reconstruction
    #[test]
    fn test_solution_display_and_board() {
        let tiles = tiles();
        let solution = Solution::new(vec![
            Location::new(0, 0, Rotation::R0),
            Location::new(0, 1, Rotation::R270),
        ]);
        assert_eq!(solution.to_string(), "(0,0,0)(0,1,270)");
        assert_eq!(solution.len(), 2);
        assert!(!solution.is_empty());

        let board = solution.to_board(&tiles, 1, 2).expect("solution fits");
        assert_eq!(board.occupant_at(0, 1).map(|o| o.tile.id()), Some(1));
        assert_eq!(
            board.occupant_at(0, 1).map(|o| o.rotation),
            Some(Rotation::R270)
        );

        assert!(solution.to_board(&tiles, 1, 1).is_err());
        assert!(solution.to_board(&tiles[..1], 1, 2).is_err());
    }

    // Tests that boards too large to store are refused before allocating
    // Verified by treating an overflowing cell count as valid
    #[test]
    fn test_oversized_board_rejected() {
        assert_eq!(Board::checked_cell_count(3, 4).ok(), Some(12));
        assert!(matches!(
            Board::checked_cell_count(1 << 40, 1 << 40),
            Err(PuzzleError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Board::checked_cell_count(usize::MAX / 2, 1),
            Err(PuzzleError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Board::new(1 << 40, 1 << 40),
            Err(PuzzleError::InvalidDimensions { .. })
        ));
    }

    // Tests that a guard whose cell was already freed leaves the board consistent
    // Verified by decrementing the occupied count on a failed release
    #[test]
    fn test_scoped_placement_tolerates_early_release() {
        let tiles = tiles();
        let mut board = Board::new(1, 2).expect("valid dimensions");
        {
            let mut guard = board
                .place_scoped(0, 0, &tiles[0], Rotation::R0)
                .expect("empty");
            guard.remove(0, 0).expect("cell is occupied");
            assert!(guard.is_empty());
        }
        assert!(board.is_empty());
        assert_eq!(board.occupied(), 0);
        board.place(0, 0, &tiles[0], Rotation::R0).expect("cell is free again");
    }
}
