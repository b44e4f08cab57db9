//! Crate root module declarations for the console chess move rules.
//!
//! Exposes the board model, the sliding-piece move rules (bishop, rook,
//! queen), per-piece dispatch, and the text utilities used by the console
//! front end and by tests.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod pieces {
    pub mod chess_piece;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_parser;
    pub mod random_board;
    pub mod render_board;
}
