//! One-ply heuristic for scoring a single candidate move.
//!
//! Cheaper than a search: it looks at the capture, whether the move gives
//! check, simple positional drift, and whether the landing square can be
//! retaken at once. Used by the greedy engine.

use crate::game_state::chess_types::{Board, Move, PieceKind, Player, Square};
use crate::search::board_scoring::EvaluationWeights;

/// Returned for a move that does not start on one of `player`'s pieces.
pub const INVALID_MOVE_SCORE: f64 = -1_000_000.0;

const CAPTURE_MULTIPLIER: f64 = 10.0;
const GIVES_CHECK_BONUS: f64 = 5.0;
const CENTRALIZATION_WEIGHT: f64 = 0.2;
const SOLDIER_ADVANCE_WEIGHT: f64 = 0.5;
const LEADER_RECAPTURE_PENALTY: f64 = 100.0;
const SOLDIER_RECAPTURE_PENALTY: f64 = 8.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleMoveScorer {
    pub weights: EvaluationWeights,
}

impl SimpleMoveScorer {
    /// Scores `mv` for `player`; higher is better. The board is left exactly
    /// as it was.
    pub fn score_move(&self, board: &mut Board, player: Player, mv: Move) -> f64 {
        let (Some(from), Some(to)) = (mv.from_square(), mv.to_square()) else {
            return INVALID_MOVE_SCORE;
        };
        let Some(piece) = board.piece_at(from).copied() else {
            return INVALID_MOVE_SCORE;
        };
        if piece.owner() != player {
            return INVALID_MOVE_SCORE;
        }

        let opponent = player.opposite();
        let Some(mut after) = board.scoped_move(mv) else {
            return INVALID_MOVE_SCORE;
        };

        let mut score = 0.0;

        if let Some(captured) = after.captured() {
            score += self.weights.piece_value(captured.kind()) * CAPTURE_MULTIPLIER;
        }

        if after.is_leader_in_check(opponent) {
            score += GIVES_CHECK_BONUS;
        }

        score += (center_distance(from) - center_distance(to)) * CENTRALIZATION_WEIGHT;

        if piece.kind() == PieceKind::Soldier {
            let advanced = (to.row() as i32 - from.row() as i32) * player.forward();
            score += advanced as f64 * SOLDIER_ADVANCE_WEIGHT;
        }

        if can_be_recaptured(&mut after, opponent, to) {
            score -= match piece.kind() {
                PieceKind::Leader => LEADER_RECAPTURE_PENALTY,
                PieceKind::Soldier => SOLDIER_RECAPTURE_PENALTY,
            };
        }

        score
    }
}

/// [`SimpleMoveScorer`] with default piece values.
pub fn evaluate_move_simple(board: &mut Board, player: Player, mv: Move) -> f64 {
    SimpleMoveScorer::default().score_move(board, player, mv)
}

fn center_distance(square: Square) -> f64 {
    ((square.row() as i32 - 2).abs() + (square.col() as i32 - 2).abs()) as f64
}

/// True iff `opponent` has a capture on `target` that does not expose its
/// own Leader.
fn can_be_recaptured(board: &mut Board, opponent: Player, target: Square) -> bool {
    let attackers: Vec<Square> = board
        .pieces_of(opponent)
        .filter(|piece| piece.can_reach(target))
        .map(|piece| piece.position())
        .collect();

    attackers.into_iter().any(|from| {
        board
            .scoped_move(Move::between(from, target))
            .is_some_and(|after| !after.is_leader_in_check(opponent))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn foreign_or_empty_source_is_invalid() {
        let mut board = Board::new();
        assert_eq!(
            evaluate_move_simple(&mut board, Player::Player2, Move::new(3, 1, 2, 1)),
            INVALID_MOVE_SCORE
        );
        assert_eq!(
            evaluate_move_simple(&mut board, Player::Player1, Move::new(2, 2, 1, 2)),
            INVALID_MOVE_SCORE
        );
    }

    #[test]
    fn soldier_step_into_a_soldier_trade_is_penalized() {
        let mut board = Board::new();
        // (3,1) -> (2,1): one step closer to the centre, one row forward,
        // and the Player2 soldier on (1,1) can take it back.
        let score = evaluate_move_simple(&mut board, Player::Player1, Move::new(3, 1, 2, 1));
        assert!((score - (0.2 + 0.5 - 8.0)).abs() < 1e-9, "{score}");
        assert_eq!(board, Board::new());
    }

    #[test]
    fn capture_outweighs_quiet_moves_and_recapture_is_penalized() {
        let mut board = Board::new();
        assert!(board.move_piece(3, 1, 2, 1));
        let before = board.clone();

        let capture = evaluate_move_simple(&mut board, Player::Player2, Move::new(1, 1, 2, 1));
        // 10 * 10 for the soldier, +0.5 advance, centralization (2 -> 1).
        assert!((capture - (100.0 + 0.5 + 0.2)).abs() < 1e-9, "{capture}");
        assert_eq!(board, before);

        // Leader stepping next to the enemy Leader can be taken back.
        let mut exposed = Board::from_pieces([
            Piece::new(PieceKind::Leader, Player::Player1, sq(2, 2)),
            Piece::new(PieceKind::Leader, Player::Player2, sq(0, 2)),
        ])
        .unwrap();
        let risky = evaluate_move_simple(&mut exposed, Player::Player1, Move::new(2, 2, 1, 2));
        assert!(risky < -90.0, "{risky}");
    }
}
