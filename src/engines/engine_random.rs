//! Uniform random-move engine.
//!
//! The weakest difficulty and a baseline opponent for the match harness.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::{Board, Player};

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "MiniChess Random"
    }

    fn choose_move(&mut self, board: &mut Board, player: Player) -> EngineOutput {
        let legal_moves = board.get_all_legal_moves(player);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        out.best_move = legal_moves.choose(&mut self.rng).copied();
        out
    }
}
