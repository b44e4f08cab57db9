//! Rook move rule: the four orthogonal rays, walked west, east, north, south.

use crate::game_state::chess_board::BoardView;
use crate::game_state::chess_types::Cell;
use crate::moves::sliding_moves::{SlidingMoves, SlidingRule, EAST, NORTH, SOUTH, WEST};

pub const ROOK_RULE: SlidingRule = SlidingRule::new(&[WEST, EAST, NORTH, SOUTH]);

#[inline]
pub fn validate_rook_move<B: BoardView + ?Sized>(from: Cell, to: Cell, board: &B) -> bool {
    ROOK_RULE.validate_move(from, to, board)
}

#[inline]
pub fn rook_moves<B: BoardView + ?Sized>(position: Cell, board: &B) -> SlidingMoves<'_, B> {
    ROOK_RULE.valid_moves(position, board)
}
