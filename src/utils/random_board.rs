//! Seeded random boards for property tests and benchmarks.

use rand::Rng;

use crate::game_state::chess_board::{ChessBoard, Occupancy};
use crate::game_state::chess_types::{Cell, Color, Piece, PieceKind};

const KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

/// Each cell is occupied independently with probability `density` (clamped to `0..=1`).
pub fn random_occupancy<R: Rng>(rng: &mut R, density: f64) -> Occupancy {
    let density = density.clamp(0.0, 1.0);
    Occupancy::from_cells(Cell::all().filter(|_| rng.random_bool(density)))
}

/// Like [`random_occupancy`] but fills the occupied cells with random pieces.
pub fn random_board<R: Rng>(rng: &mut R, density: f64) -> ChessBoard {
    let density = density.clamp(0.0, 1.0);
    let mut board = ChessBoard::new_empty();
    for cell in Cell::all() {
        if rng.random_bool(density) {
            let color = if rng.random_bool(0.5) {
                Color::Light
            } else {
                Color::Dark
            };
            let kind = KINDS[rng.random_range(0..KINDS.len())];
            board.place(cell, Piece::new(color, kind));
        }
    }
    board
}
