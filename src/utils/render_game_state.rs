//! Plain-text board renderer for terminals, logs, and test failures.

use std::fmt::Write;

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Board;

/// Render the board with row and column indices.
///
/// Row 0 is printed first, so Player2 sits at the top and Player1 at the
/// bottom. Empty cells print as `[ ]`.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("=== MINI CHESS BOARD ===\n");
    out.push_str("    ");
    for col in 0..BOARD_SIZE {
        let _ = write!(out, " {col}  ");
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let _ = write!(out, " {row}  ");
        for col in 0..BOARD_SIZE {
            match board.piece_at_coords(row as i32, col as i32) {
                Some(piece) => {
                    let _ = write!(out, "[{}] ", piece.symbol());
                }
                None => out.push_str("[ ] "),
            }
        }
        out.push('\n');
    }

    out.push_str("=========================");
    out
}
