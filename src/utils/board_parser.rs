//! FEN-to-ChessBoard parser.
//!
//! Only the piece placement field is read. Side to move, castling rights and
//! clocks belong to the surrounding game and are ignored when present.

use tracing::debug;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_types::{Cell, Piece};

/// Build a board from a FEN string or from its placement field alone.
pub fn parse_board(fen: &str) -> ChessResult<ChessBoard> {
    let placement = fen
        .split_whitespace()
        .next()
        .ok_or_else(|| ChessErrors::InvalidBoardLayout("empty layout".to_owned()))?;

    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(ChessErrors::InvalidBoardLayout(format!(
            "expected 8 ranks, found {}",
            rows.len()
        )));
    }

    let mut board = ChessBoard::new_empty();

    // FEN lists rank 8 first, which is row 0 on the console board.
    for (y, row) in rows.iter().enumerate() {
        let mut x = 0usize;

        for ch in row.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidBoardLayout(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                x += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)?;
            if x >= 8 {
                return Err(ChessErrors::InvalidBoardLayout(format!(
                    "rank {} has too many files",
                    8 - y
                )));
            }

            board.place(Cell::new(x as u8, y as u8), piece);
            x += 1;
        }

        if x != 8 {
            return Err(ChessErrors::InvalidBoardLayout(format!(
                "rank {} does not sum to 8 files",
                8 - y
            )));
        }
    }

    debug!(placement, pieces = board.pieces().count(), "parsed board layout");
    Ok(board)
}

/// Inverse of [`parse_board`]: the placement field for `board`.
pub fn board_to_placement(board: &ChessBoard) -> String {
    let mut out = String::new();

    for y in 0..8u8 {
        let mut empty = 0u32;
        for x in 0..8u8 {
            match board.piece_at(Cell::new(x, y)) {
                Some(piece) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        if y < 7 {
            out.push('/');
        }
    }

    out
}
