//! Core value types shared by the board, the move rules and the console front end.
//!
//! Coordinates follow the console layout: `x` is the column (0 == file a) and
//! `y` is the row counted from the top of the printed board (0 == rank 8).
//! "North" therefore means decreasing `y` and "West" decreasing `x`.

use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_board::BoardView;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::utils::algebraic::cell_to_algebraic;

/// Side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case symbol used for this kind on the console board.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse a FEN piece letter, ignoring case.
    pub fn from_char(ch: char) -> Option<Self> {
        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some(kind)
    }
}

/// What a board square holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: upper case for light, lower case for dark.
    pub fn fen_char(self) -> char {
        match self.color {
            Color::Light => self.kind.to_char(),
            Color::Dark => self.kind.to_char().to_ascii_lowercase(),
        }
    }

    /// Inverse of [`Piece::fen_char`].
    pub fn from_fen_char(ch: char) -> ChessResult<Self> {
        let kind = PieceKind::from_char(ch).ok_or(ChessErrors::InvalidPieceChar(ch))?;
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        Ok(Self { color, kind })
    }
}

/// A single board square, identified by `(x, y)` in `0..8`.
///
/// Cells are plain coordinates; the board owns occupancy. Use
/// [`Cell::is_occupied`] to ask a board about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    x: u8,
    y: u8,
}

impl Cell {
    /// Build a cell from in-range coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is `>= 8`. Callers own coordinate validity;
    /// use [`Cell::try_new`] for untrusted input.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(
            x < BOARD_SIZE && y < BOARD_SIZE,
            "cell coordinates must be within 0..8"
        );
        Self { x, y }
    }

    /// Checked constructor for coordinates that may be off the board.
    pub fn try_new(x: i32, y: i32) -> ChessResult<Self> {
        let size = i32::from(BOARD_SIZE);
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Ok(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(ChessErrors::OutOfBounds { x, y })
        }
    }

    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Bit index in a `y * 8 + x` occupancy bitboard.
    #[inline]
    pub const fn index(self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }

    /// The cell `(dx, dy)` away, or `None` when that leaves the board.
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Self::try_new(
            i32::from(self.x) + i32::from(dx),
            i32::from(self.y) + i32::from(dy),
        )
        .ok()
    }

    /// Whether `board` currently holds a piece on this cell.
    #[inline]
    pub fn is_occupied<B: BoardView + ?Sized>(self, board: &B) -> bool {
        board.is_occupied(self)
    }

    /// Iterate every cell, row by row from the top-left corner.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Cell { x, y }))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&cell_to_algebraic(*self))
    }
}
