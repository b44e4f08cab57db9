//! Console front end for the sliding-piece move rules.
//!
//! Usage:
//! `console_chess --from c1`
//! `console_chess --fen "8/8/8/8/3B4/8/8/8" --from d4 --to g7`
//!
//! The board comes from `--fen`, then `CONSOLE_CHESS_FEN`, then the standard
//! starting position. Log filtering follows `RUST_LOG` (default `info`).

use console_chess::chess_errors::ChessResult;
use console_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use console_chess::game_state::chess_types::Cell;
use console_chess::pieces::chess_piece::ChessPiece;
use console_chess::utils::algebraic::algebraic_to_cell;
use console_chess::utils::board_parser::parse_board;
use console_chess::utils::render_board::render_board;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn parse_arg(flag: &str) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn board_fen() -> String {
    parse_arg("--fen")
        .or_else(|| std::env::var("CONSOLE_CHESS_FEN").ok())
        .unwrap_or_else(|| STARTING_POSITION_FEN.to_owned())
}

fn run() -> ChessResult<()> {
    let fen = board_fen();
    let board = parse_board(&fen)?;
    info!(%fen, "loaded board");

    let Some(from_name) = parse_arg("--from") else {
        println!("{}", render_board(&board, &[]));
        return Ok(());
    };

    let from = algebraic_to_cell(&from_name)?;
    let piece = ChessPiece::on(&board, from)?;
    let moves: Vec<Cell> = piece.get_valid_moves(from, &board).collect();

    println!("{}", render_board(&board, &moves));
    let listed: Vec<String> = moves.iter().map(Cell::to_string).collect();
    println!("{} on {from}: {}", piece.to_char(), listed.join(" "));

    if let Some(to_name) = parse_arg("--to") {
        let to = algebraic_to_cell(&to_name)?;
        let valid = piece.validate_move(from, to, &board);
        if valid && board.piece_at(to).map(|p| p.color) == Some(piece.color()) {
            warn!(%to, "path is clear but the target holds a piece of the same color");
        }
        println!("{from} -> {to}: {}", if valid { "valid" } else { "invalid" });
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
