//! Pluggable static evaluation.
//!
//! Search delegates leaf scoring to [`BoardScorer`] so heuristics can be
//! swapped without touching the search code. Scores are from the point of
//! view of the `perspective` player; higher is better for that player.

use crate::game_state::chess_types::{Board, PieceKind, Player};

/// Tunable weights for [`StandardScorer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationWeights {
    pub leader_value: f64,
    pub soldier_value: f64,
    /// Per legal move of difference in mobility.
    pub mobility_weight: f64,
    /// Awarded when the opponent is in check, charged when we are.
    pub check_bonus: f64,
    /// Magnitude of the terminal sentinel once a Leader is gone.
    pub win_score: f64,
}

impl Default for EvaluationWeights {
    fn default() -> Self {
        Self {
            leader_value: 100.0,
            soldier_value: 10.0,
            mobility_weight: 0.1,
            check_bonus: 5.0,
            win_score: 10_000.0,
        }
    }
}

impl EvaluationWeights {
    #[inline]
    pub const fn piece_value(&self, kind: PieceKind) -> f64 {
        match kind {
            PieceKind::Leader => self.leader_value,
            PieceKind::Soldier => self.soldier_value,
        }
    }
}

pub trait BoardScorer {
    /// Takes `&mut Board` because mobility is measured by simulating moves;
    /// the board is returned unchanged.
    fn score(&self, board: &mut Board, perspective: Player) -> f64;

    /// Score magnitude reserved for decided games.
    fn win_score(&self) -> f64;
}

/// Material, mobility and check pressure.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer {
    pub weights: EvaluationWeights,
}

impl StandardScorer {
    pub const fn new(weights: EvaluationWeights) -> Self {
        Self { weights }
    }

    fn material(&self, board: &Board, player: Player) -> f64 {
        board
            .pieces_of(player)
            .map(|piece| self.weights.piece_value(piece.kind()))
            .sum()
    }
}

impl BoardScorer for StandardScorer {
    fn score(&self, board: &mut Board, perspective: Player) -> f64 {
        let opponent = perspective.opposite();
        if board.leader_square(perspective).is_none() {
            return -self.weights.win_score;
        }
        if board.leader_square(opponent).is_none() {
            return self.weights.win_score;
        }

        let material = self.material(board, perspective) - self.material(board, opponent);

        let own_moves = board.get_all_legal_moves(perspective).len() as f64;
        let their_moves = board.get_all_legal_moves(opponent).len() as f64;
        let mobility = (own_moves - their_moves) * self.weights.mobility_weight;

        let mut pressure = 0.0;
        if board.is_leader_in_check(opponent) {
            pressure += self.weights.check_bonus;
        }
        if board.is_leader_in_check(perspective) {
            pressure -= self.weights.check_bonus;
        }

        material + mobility + pressure
    }

    fn win_score(&self) -> f64 {
        self.weights.win_score
    }
}

/// [`StandardScorer`] with default weights.
pub fn evaluate(board: &mut Board, perspective: Player) -> f64 {
    StandardScorer::default().score(board, perspective)
}
