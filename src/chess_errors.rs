//! Errors used throughout the crate.
//!
//! Move rules never fail: they answer with a boolean or a (possibly empty)
//! sequence of cells. `ChessErrors` covers the supporting surface instead:
//! coordinate construction, algebraic parsing, board layout parsing and the
//! lookups the console front end performs on behalf of a user.
//!
//! Usage guidelines:
//! - Parsing and input-related variants (`InvalidAlgebraic`,
//!   `InvalidBoardLayout`, `InvalidPieceChar`) are recoverable and suitable for
//!   presenting to end users.
//! - `NoPieceAt` and `UnsupportedPiece` describe a request that makes no sense
//!   for the current board and should be reported back to whoever asked.

use thiserror::Error;

/// Unified error type for the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Coordinates fall outside the 8x8 board.
    #[error("coordinates ({x}, {y}) are outside the board (must be 0-7)")]
    OutOfBounds { x: i32, y: i32 },

    /// A square name such as `"e4"` could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    /// The board placement text is malformed.
    #[error("invalid board layout: {0}")]
    InvalidBoardLayout(String),

    /// A piece letter in the board layout is not one of `pnbrqkPNBRQK`.
    #[error("invalid piece character '{0}'")]
    InvalidPieceChar(char),

    /// The named square is empty.
    #[error("no piece on {0}")]
    NoPieceAt(String),

    /// The piece on the square has no sliding rule (knight, king or pawn).
    #[error("no sliding move rule for piece '{0}'")]
    UnsupportedPiece(char),
}

/// Result alias for fallible operations in this crate.
pub type ChessResult<T> = Result<T, ChessErrors>;
