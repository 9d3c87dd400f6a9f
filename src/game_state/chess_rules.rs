//! Fixed rule constants for the 5x5 variant.
//!
//! Board dimensions, the starting layout, and the bounded search depth range
//! live here so construction and engines agree on the same literals.

use crate::game_state::chess_types::{PieceKind, Player};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 5;

/// Deepest search an engine may be configured with.
pub const MAX_SEARCH_DEPTH: u8 = 5;

/// Starting layout as `(kind, owner, row, col)`.
pub const STARTING_LAYOUT: [(PieceKind, Player, usize, usize); 6] = [
    (PieceKind::Leader, Player::Player1, 4, 2),
    (PieceKind::Soldier, Player::Player1, 3, 1),
    (PieceKind::Soldier, Player::Player1, 3, 3),
    (PieceKind::Leader, Player::Player2, 0, 2),
    (PieceKind::Soldier, Player::Player2, 1, 1),
    (PieceKind::Soldier, Player::Player2, 1, 3),
];
