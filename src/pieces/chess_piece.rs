//! Per-piece-type dispatch over the sliding move rules.
//!
//! `ChessPiece` is a stateless rule object: its color is fixed at
//! construction and every query is answered from the board passed in.
//! Knights, kings and pawns have no sliding rule and are not represented.

use tracing::trace;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_board::{BoardView, ChessBoard};
use crate::game_state::chess_types::{Cell, Color, Piece, PieceKind};
use crate::moves::bishop_moves::BISHOP_RULE;
use crate::moves::queen_moves::QUEEN_RULE;
use crate::moves::rook_moves::ROOK_RULE;
use crate::moves::sliding_moves::{SlidingMoves, SlidingRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChessPiece {
    Bishop(Color),
    Rook(Color),
    Queen(Color),
}

impl ChessPiece {
    /// Rule object for a board piece, if it is a sliding piece.
    pub fn from_piece(piece: Piece) -> Option<Self> {
        match piece.kind {
            PieceKind::Bishop => Some(ChessPiece::Bishop(piece.color)),
            PieceKind::Rook => Some(ChessPiece::Rook(piece.color)),
            PieceKind::Queen => Some(ChessPiece::Queen(piece.color)),
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => None,
        }
    }

    /// Rule object for whatever stands on `cell`.
    pub fn on(board: &ChessBoard, cell: Cell) -> ChessResult<Self> {
        let piece = board
            .piece_at(cell)
            .ok_or_else(|| ChessErrors::NoPieceAt(cell.to_string()))?;
        Self::from_piece(piece).ok_or(ChessErrors::UnsupportedPiece(piece.fen_char()))
    }

    #[inline]
    pub const fn color(self) -> Color {
        match self {
            ChessPiece::Bishop(color) | ChessPiece::Rook(color) | ChessPiece::Queen(color) => color,
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            ChessPiece::Bishop(_) => PieceKind::Bishop,
            ChessPiece::Rook(_) => PieceKind::Rook,
            ChessPiece::Queen(_) => PieceKind::Queen,
        }
    }

    #[inline]
    pub const fn rule(self) -> SlidingRule {
        match self {
            ChessPiece::Bishop(_) => BISHOP_RULE,
            ChessPiece::Rook(_) => ROOK_RULE,
            ChessPiece::Queen(_) => QUEEN_RULE,
        }
    }

    /// Symbol of the piece kind, independent of color.
    #[inline]
    pub const fn to_char(self) -> char {
        self.kind().to_char()
    }

    /// Whether this piece may move from `from` to `to`, ignoring turn and check.
    ///
    /// Capturing is not decided here: an occupied `to` is accepted as long as
    /// the path to it is clear.
    pub fn validate_move<B: BoardView + ?Sized>(self, from: Cell, to: Cell, board: &B) -> bool {
        let valid = self.rule().validate_move(from, to, board);
        trace!(piece = %self.to_char(), %from, %to, valid, "validated move");
        valid
    }

    /// Empty cells this piece can reach from `position`, ray by ray.
    ///
    /// Occupied cells end a ray without being listed, enemy pieces included.
    pub fn get_valid_moves<B: BoardView + ?Sized>(
        self,
        position: Cell,
        board: &B,
    ) -> SlidingMoves<'_, B> {
        self.rule().valid_moves(position, board)
    }
}
