//! Canonical chess-rule constants.
//!
//! Board geometry and the standard starting layout used when no other
//! position is configured.

/// Number of cells along each edge of the board.
pub const BOARD_SIZE: u8 = 8;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
