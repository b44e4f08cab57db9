//! Queen move rule: the bishop's diagonals followed by the rook's orthogonals.

use crate::game_state::chess_board::BoardView;
use crate::game_state::chess_types::Cell;
use crate::moves::sliding_moves::{
    SlidingMoves, SlidingRule, EAST, NORTH, NORTH_EAST, NORTH_WEST, SOUTH, SOUTH_EAST, SOUTH_WEST,
    WEST,
};

pub const QUEEN_RULE: SlidingRule = SlidingRule::new(&[
    NORTH_WEST, NORTH_EAST, SOUTH_WEST, SOUTH_EAST, WEST, EAST, NORTH, SOUTH,
]);

#[inline]
pub fn validate_queen_move<B: BoardView + ?Sized>(from: Cell, to: Cell, board: &B) -> bool {
    QUEEN_RULE.validate_move(from, to, board)
}

#[inline]
pub fn queen_moves<B: BoardView + ?Sized>(position: Cell, board: &B) -> SlidingMoves<'_, B> {
    QUEEN_RULE.valid_moves(position, board)
}
