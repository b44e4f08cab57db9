//! Conversions between cells and algebraic square names.
//!
//! Files `a..h` map to `x = 0..7`. Ranks are printed top-down on the console,
//! so rank `8` is `y = 0` and rank `1` is `y = 7`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Cell;

/// Convert algebraic notation (for example: "e4") to a cell.
pub fn algebraic_to_cell(square: &str) -> ChessResult<Cell> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    Ok(Cell::new(file - b'a', b'8' - rank))
}

/// Convert a cell to algebraic notation (for example: "e4").
pub fn cell_to_algebraic(cell: Cell) -> String {
    let file_char = char::from(b'a' + cell.x());
    let rank_char = char::from(b'8' - cell.y());
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_cell, cell_to_algebraic};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::Cell;

    #[test]
    fn corners_map_to_console_coordinates() {
        assert_eq!(algebraic_to_cell("a8").expect("a8 should parse"), Cell::new(0, 0));
        assert_eq!(algebraic_to_cell("h1").expect("h1 should parse"), Cell::new(7, 7));
        assert_eq!(algebraic_to_cell("E4").expect("upper-case file is accepted"), Cell::new(4, 4));
        assert_eq!(cell_to_algebraic(Cell::new(3, 4)), "d4");
        assert_eq!(Cell::new(2, 7).to_string(), "c1");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        for bad in ["", "e", "e44", "i1", "a0", "a9", "44"] {
            assert_eq!(
                algebraic_to_cell(bad),
                Err(ChessErrors::InvalidAlgebraic(bad.to_owned()))
            );
        }
    }
}
