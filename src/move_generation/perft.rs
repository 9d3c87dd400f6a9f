//! Move-tree node counting for validating generation and apply/undo.
//!
//! A position where a Leader is gone is terminal and has no children.

use crate::game_state::chess_types::{Board, PieceKind, Player};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub leader_captures: u64,
    pub checks: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.leader_captures += rhs.leader_captures;
        self.checks += rhs.checks;
    }
}

/// Leaf node count of the legal move tree `depth` plies deep, `player` to
/// move first.
pub fn perft(board: &mut Board, player: Player, depth: u8) -> u64 {
    perft_counts(board, player, depth).nodes
}

pub fn perft_counts(board: &mut Board, player: Player, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in board.get_all_legal_moves(player) {
        let Some(mut child) = board.scoped_move(mv) else {
            continue;
        };

        if depth == 1 {
            total.nodes += 1;
            if let Some(captured) = child.captured() {
                total.captures += 1;
                if captured.kind() == PieceKind::Leader {
                    total.leader_captures += 1;
                }
            }
            if child.is_leader_in_check(player.opposite()) {
                total.checks += 1;
            }
            continue;
        }

        if child.check_winner().is_some() {
            continue;
        }
        total.merge(perft_counts(&mut child, player.opposite(), depth - 1));
    }

    total
}
