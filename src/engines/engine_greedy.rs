//! Greedy one-ply engine built on the single-move heuristic.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::{Board, Player};
use crate::search::move_scoring::SimpleMoveScorer;

/// One-ply engine: plays the move with the best [`SimpleMoveScorer`] score,
/// breaking near-ties at random.
pub struct GreedyEngine {
    rng: StdRng,
    scorer: SimpleMoveScorer,
    tie_epsilon: f64,
}

impl GreedyEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            scorer: SimpleMoveScorer::default(),
            tie_epsilon: 1e-9,
        }
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "MiniChess Greedy"
    }

    fn choose_move(&mut self, board: &mut Board, player: Player) -> EngineOutput {
        let legal_moves = board.get_all_legal_moves(player);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string greedy_engine legal_moves {}",
            legal_moves.len()
        ));
        if legal_moves.is_empty() {
            return out;
        }

        let scored: Vec<_> = legal_moves
            .into_iter()
            .map(|mv| (mv, self.scorer.score_move(board, player, mv)))
            .collect();
        let best_value = scored
            .iter()
            .map(|&(_, score)| score)
            .fold(f64::NEG_INFINITY, f64::max);
        let best_moves: Vec<_> = scored
            .into_iter()
            .filter(|&(_, score)| score >= best_value - self.tie_epsilon)
            .map(|(mv, _)| mv)
            .collect();

        out.info_lines.push(format!(
            "info string greedy_engine score {:.2} ties {}",
            best_value,
            best_moves.len()
        ));
        out.best_move = best_moves.choose(&mut self.rng).copied();
        out
    }
}
