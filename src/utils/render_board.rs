//! Terminal-oriented board renderer.
//!
//! Pieces are printed with their FEN letters, empty cells as `·`, and cells
//! passed in `highlighted` as `*` (used to show where a piece may go).

use crate::game_state::chess_board::ChessBoard;
use crate::game_state::chess_types::Cell;

/// Render the board to a string for terminal output, rank 8 at the top.
pub fn render_board(board: &ChessBoard, highlighted: &[Cell]) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for y in 0..8u8 {
        let rank = char::from(b'8' - y);
        out.push(rank);
        out.push(' ');

        for x in 0..8u8 {
            let cell = Cell::new(x, y);
            let symbol = if highlighted.contains(&cell) {
                '*'
            } else {
                board.piece_at(cell).map_or('·', |piece| piece.fen_char())
            };
            out.push(symbol);

            if x < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::chess_types::Cell;
    use crate::utils::board_parser::parse_board;

    #[test]
    fn render_marks_pieces_and_highlights() {
        let board = parse_board("8/8/8/8/3B4/8/8/k7").expect("layout should parse");
        let rendered = render_board(&board, &[Cell::new(4, 3)]);

        println!("\n{rendered}");

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[4], "5 · · · · * · · · 5");
        assert_eq!(lines[5], "4 · · · B · · · · 4");
        assert_eq!(lines[8], "1 k · · · · · · · 1");
    }
}
