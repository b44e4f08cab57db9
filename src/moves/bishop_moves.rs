//! Bishop move rule.
//!
//! The bishop slides along the four diagonals. Rays are enumerated
//! north-west, north-east, south-west, south-east.

use crate::game_state::chess_board::BoardView;
use crate::game_state::chess_types::Cell;
use crate::moves::sliding_moves::{
    SlidingMoves, SlidingRule, NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST,
};

pub const BISHOP_RULE: SlidingRule =
    SlidingRule::new(&[NORTH_WEST, NORTH_EAST, SOUTH_WEST, SOUTH_EAST]);

/// Whether a bishop may go from `from` to `to`.
///
/// The move must be diagonal and non-null, and every cell strictly between
/// the two must be empty. The occupancy of `to` is the caller's concern.
#[inline]
pub fn validate_bishop_move<B: BoardView + ?Sized>(from: Cell, to: Cell, board: &B) -> bool {
    BISHOP_RULE.validate_move(from, to, board)
}

/// Empty cells reachable diagonally from `position`, nearest first per ray.
#[inline]
pub fn bishop_moves<B: BoardView + ?Sized>(position: Cell, board: &B) -> SlidingMoves<'_, B> {
    BISHOP_RULE.valid_moves(position, board)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{bishop_moves, validate_bishop_move};
    use crate::game_state::chess_board::{BoardView, ChessBoard, Occupancy};
    use crate::game_state::chess_types::{Cell, Color, Piece, PieceKind};
    use crate::utils::random_board::random_occupancy;

    fn c(x: u8, y: u8) -> Cell {
        Cell::new(x, y)
    }

    // Straight-line restatement of the diagonal rule used as an oracle.
    fn reference_validate(from: Cell, to: Cell, board: &Occupancy) -> bool {
        let dx = i32::from(to.x()) - i32::from(from.x());
        let dy = i32::from(to.y()) - i32::from(from.y());
        if dx == 0 || dx.abs() != dy.abs() {
            return false;
        }
        (1..dx.abs()).all(|i| {
            let cell = Cell::try_new(
                i32::from(from.x()) + i * dx.signum(),
                i32::from(from.y()) + i * dy.signum(),
            )
            .expect("intermediate cell lies on the board");
            !board.is_occupied(cell)
        })
    }

    #[test]
    fn non_diagonal_moves_are_rejected() {
        let empty = Occupancy::default();
        for from in Cell::all() {
            for to in Cell::all() {
                let dx = (i32::from(to.x()) - i32::from(from.x())).abs();
                let dy = (i32::from(to.y()) - i32::from(from.y())).abs();
                if dx != dy {
                    assert!(!validate_bishop_move(from, to, &empty), "{from} -> {to}");
                }
            }
        }
    }

    #[test]
    fn null_move_is_rejected() {
        let empty = Occupancy::default();
        for cell in Cell::all() {
            assert!(!validate_bishop_move(cell, cell, &empty));
        }
    }

    #[test]
    fn every_diagonal_move_is_valid_on_an_empty_board() {
        let empty = ChessBoard::new_empty();
        let mut checked = 0;
        for from in Cell::all() {
            for to in Cell::all() {
                let dx = (i32::from(to.x()) - i32::from(from.x())).abs();
                let dy = (i32::from(to.y()) - i32::from(from.y())).abs();
                if dx == dy && dx != 0 {
                    assert!(validate_bishop_move(from, to, &empty), "{from} -> {to}");
                    checked += 1;
                }
            }
        }
        assert_eq!(checked, 560);
    }

    #[test]
    fn intermediate_blocker_rejects_regardless_of_target() {
        let blocked = Occupancy::from_cells([c(3, 3)]);
        assert!(!validate_bishop_move(c(2, 2), c(5, 5), &blocked));

        let blocked_and_target = Occupancy::from_cells([c(3, 3), c(5, 5)]);
        assert!(!validate_bishop_move(c(2, 2), c(5, 5), &blocked_and_target));
    }

    #[test]
    fn occupied_target_is_not_checked() {
        let mut board = ChessBoard::new_empty();
        board.place(c(5, 5), Piece::new(Color::Dark, PieceKind::Knight));
        assert!(validate_bishop_move(c(2, 2), c(5, 5), &board));

        // Adjacent target: nothing in between at all.
        board.place(c(3, 3), Piece::new(Color::Light, PieceKind::Pawn));
        assert!(validate_bishop_move(c(2, 2), c(3, 3), &board));
    }

    #[test]
    fn each_diagonal_direction_detects_its_blocker() {
        let from = c(4, 4);
        let cases = [
            (c(2, 2), c(1, 1)),
            (c(6, 2), c(7, 1)),
            (c(2, 6), c(1, 7)),
            (c(6, 6), c(7, 7)),
        ];
        for (blocker, target) in cases {
            let board = Occupancy::from_cells([blocker]);
            assert!(!validate_bishop_move(from, target, &board), "{from} -> {target}");
            assert!(validate_bishop_move(from, blocker, &board), "{from} -> {blocker}");
        }
    }

    #[test]
    fn empty_board_from_d5_lists_thirteen_cells_in_ray_order() {
        let empty = Occupancy::default();
        let moves: Vec<Cell> = bishop_moves(c(3, 3), &empty).collect();

        let expected = vec![
            // north-west
            c(2, 2),
            c(1, 1),
            c(0, 0),
            // north-east
            c(4, 2),
            c(5, 1),
            c(6, 0),
            // south-west
            c(2, 4),
            c(1, 5),
            c(0, 6),
            // south-east
            c(4, 4),
            c(5, 5),
            c(6, 6),
            c(7, 7),
        ];
        assert_eq!(moves, expected);

        let unique: HashSet<Cell> = moves.iter().copied().collect();
        assert_eq!(unique.len(), moves.len());
    }

    #[test]
    fn corner_only_has_the_long_diagonal() {
        let empty = ChessBoard::new_empty();
        let moves: Vec<Cell> = bishop_moves(c(0, 0), &empty).collect();
        assert_eq!(moves, (1..8).map(|i| c(i, i)).collect::<Vec<_>>());
    }

    #[test]
    fn blocker_at_distance_two_cuts_the_ray() {
        let mut board = ChessBoard::new_empty();
        board.place(c(5, 5), Piece::new(Color::Dark, PieceKind::Pawn));

        let moves: Vec<Cell> = bishop_moves(c(3, 3), &board).collect();
        assert!(moves.contains(&c(4, 4)));
        assert!(!moves.contains(&c(5, 5)));
        assert!(!moves.contains(&c(6, 6)));
        assert!(!moves.contains(&c(7, 7)));
        assert_eq!(moves.len(), 10);
    }

    #[test]
    fn surrounded_bishop_has_no_moves() {
        let board = Occupancy::from_cells([c(2, 2), c(4, 2), c(2, 4), c(4, 4)]);
        assert_eq!(bishop_moves(c(3, 3), &board).count(), 0);
    }

    #[test]
    fn enumeration_is_restartable_and_partially_consumable() {
        let board = Occupancy::from_cells([c(6, 6)]);
        let first: Vec<Cell> = bishop_moves(c(3, 3), &board).take(4).collect();
        let again: Vec<Cell> = bishop_moves(c(3, 3), &board).collect();
        assert_eq!(first[..], again[..4]);
    }

    #[test]
    fn listed_moves_agree_with_validation_on_random_boards() {
        let mut rng = StdRng::seed_from_u64(0xB15B0);
        for _ in 0..200 {
            let board = random_occupancy(&mut rng, 0.3);
            let from = Cell::new(rng.random_range(0..8), rng.random_range(0..8));

            let listed: HashSet<Cell> = bishop_moves(from, &board).collect();
            for to in Cell::all() {
                let expected = reference_validate(from, to, &board);
                assert_eq!(validate_bishop_move(from, to, &board), expected, "{from} -> {to}");
                // Listed cells are exactly the valid targets that are empty.
                assert_eq!(
                    listed.contains(&to),
                    expected && !board.is_occupied(to),
                    "{from} -> {to}"
                );
            }
        }
    }
}
