//! Board state and the occupancy query used by move rules.
//!
//! `ChessBoard` owns every square. Move rules only need to know whether a cell
//! is occupied, so they are written against the [`BoardView`] trait, which is
//! also implemented for a plain [`Occupancy`] bitboard.

use std::ops::Index;

use crate::game_state::chess_types::{Cell, Piece};

/// Read-only occupancy query consumed by move rules.
pub trait BoardView {
    /// Whether `cell` currently holds a piece of either color.
    fn is_occupied(&self, cell: Cell) -> bool;
}

impl<B: BoardView + ?Sized> BoardView for &B {
    #[inline]
    fn is_occupied(&self, cell: Cell) -> bool {
        (**self).is_occupied(cell)
    }
}

/// Occupancy bitboard, bit `y * 8 + x` set for every occupied cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Occupancy(pub u64);

impl Occupancy {
    #[inline]
    pub fn with(self, cell: Cell) -> Self {
        Occupancy(self.0 | (1u64 << cell.index()))
    }

    pub fn from_cells<I: IntoIterator<Item = Cell>>(cells: I) -> Self {
        cells.into_iter().fold(Occupancy::default(), Occupancy::with)
    }
}

impl BoardView for Occupancy {
    #[inline]
    fn is_occupied(&self, cell: Cell) -> bool {
        self.0 & (1u64 << cell.index()) != 0
    }
}

/// 8x8 grid of squares, indexed `[x][y]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChessBoard {
    squares: [[Option<Piece>; 8]; 8],
}

impl ChessBoard {
    /// A board with no pieces on it.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.squares[cell.x() as usize][cell.y() as usize]
    }

    /// Put `piece` on `cell`, returning whatever was there before.
    pub fn place(&mut self, cell: Cell, piece: Piece) -> Option<Piece> {
        self.squares[cell.x() as usize][cell.y() as usize].replace(piece)
    }

    pub fn remove(&mut self, cell: Cell) -> Option<Piece> {
        self.squares[cell.x() as usize][cell.y() as usize].take()
    }

    /// Move whatever stands on `from` to `to`, returning the captured piece.
    ///
    /// No legality checks are made here; validate with the piece's rule first.
    pub fn move_piece(&mut self, from: Cell, to: Cell) -> Option<Piece> {
        match self.remove(from) {
            Some(piece) => self.place(to, piece),
            None => None,
        }
    }

    /// Occupied cells with their pieces, row by row from the top.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        Cell::all().filter_map(move |cell| self.piece_at(cell).map(|piece| (cell, piece)))
    }

    /// Snapshot of the current occupancy as a bitboard.
    pub fn occupancy(&self) -> Occupancy {
        Occupancy::from_cells(self.pieces().map(|(cell, _)| cell))
    }
}

impl BoardView for ChessBoard {
    #[inline]
    fn is_occupied(&self, cell: Cell) -> bool {
        self.piece_at(cell).is_some()
    }
}

impl Index<Cell> for ChessBoard {
    type Output = Option<Piece>;

    fn index(&self, cell: Cell) -> &Self::Output {
        &self.squares[cell.x() as usize][cell.y() as usize]
    }
}
