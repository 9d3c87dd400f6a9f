//! Computer player driven by alpha-beta search.
//!
//! `AIPlayer` owns a single seedable generator used for everything random
//! it does: move shuffling inside the search, epsilon tie-breaks at the
//! root, and the depth-0 random fallback. Two players built from the same
//! seed make the same choices on the same positions.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::EngineError;
use crate::game_state::chess_rules::MAX_SEARCH_DEPTH;
use crate::game_state::chess_types::{AppliedMove, Board, Move, Player};
use crate::search::alpha_beta::{choose_best_move, SearchConfig, SearchStats};
use crate::search::board_scoring::{EvaluationWeights, StandardScorer};

pub struct AIPlayer {
    rng: StdRng,
    config: SearchConfig,
    scorer: StandardScorer,
    last_stats: SearchStats,
}

impl AIPlayer {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Non-reproducible player seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            config: SearchConfig::default(),
            scorer: StandardScorer::default(),
            last_stats: SearchStats::default(),
        }
    }

    pub fn with_search_depth(mut self, depth: i32) -> Self {
        self.set_search_depth(depth);
        self
    }

    pub fn with_weights(mut self, weights: EvaluationWeights) -> Self {
        self.scorer = StandardScorer::new(weights);
        self
    }

    /// Clamps into `0..=MAX_SEARCH_DEPTH`.
    pub fn set_search_depth(&mut self, depth: i32) {
        self.config.depth = depth.clamp(0, MAX_SEARCH_DEPTH as i32) as u8;
    }

    pub fn search_depth(&self) -> u8 {
        self.config.depth
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Counters from the most recent search.
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    pub fn choose_random_move(&mut self, board: &mut Board, player: Player) -> Option<Move> {
        board.get_all_legal_moves(player).choose(&mut self.rng).copied()
    }

    pub fn choose_best_move(&mut self, board: &mut Board, player: Player) -> Option<Move> {
        let result = choose_best_move(board, player, &self.config, &self.scorer, &mut self.rng);
        self.last_stats = result.stats;
        result.best_move
    }

    /// Plays a random legal move. False when none exists.
    pub fn make_random_move(&mut self, board: &mut Board, player: Player) -> bool {
        match self.choose_random_move(board, player) {
            Some(mv) => board.move_piece(mv.from_row, mv.from_col, mv.to_row, mv.to_col),
            None => false,
        }
    }

    /// Plays the searched move. False when no legal move exists.
    pub fn make_best_move(&mut self, board: &mut Board, player: Player) -> bool {
        match self.choose_best_move(board, player) {
            Some(mv) => board.move_piece(mv.from_row, mv.from_col, mv.to_row, mv.to_col),
            None => false,
        }
    }

    /// Plays the searched move without re-validation and hands back the
    /// record needed to take it back.
    pub fn make_best_move_silently(
        &mut self,
        board: &mut Board,
        player: Player,
    ) -> Option<AppliedMove> {
        let mv = self.choose_best_move(board, player)?;
        board.apply_move_silently(mv)
    }
}

impl Engine for AIPlayer {
    fn name(&self) -> &str {
        "MiniChess AlphaBeta"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), EngineError> {
        let invalid = || EngineError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        if name.eq_ignore_ascii_case("SearchDepth") {
            let depth = value.trim().parse::<i32>().map_err(|_| invalid())?;
            self.set_search_depth(depth);
            return Ok(());
        }
        if name.eq_ignore_ascii_case("TieEpsilon") {
            let epsilon = value.trim().parse::<f64>().map_err(|_| invalid())?;
            if !epsilon.is_finite() || epsilon < 0.0 {
                return Err(invalid());
            }
            self.config.tie_epsilon = epsilon;
            return Ok(());
        }
        Err(EngineError::UnknownOption {
            name: name.to_owned(),
        })
    }

    fn choose_move(&mut self, board: &mut Board, player: Player) -> EngineOutput {
        let result = choose_best_move(board, player, &self.config, &self.scorer, &mut self.rng);
        self.last_stats = result.stats;
        debug!(
            "alpha-beta depth {} chose {:?} score {:.3}",
            self.config.clamped_depth(),
            result.best_move,
            result.best_score
        );

        let mut out = EngineOutput {
            best_move: result.best_move,
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} score {:.3} nodes {} cutoffs {}",
            self.config.clamped_depth(),
            result.best_score,
            result.stats.nodes,
            result.stats.cutoffs
        ));
        out.info_lines.push(format!(
            "info string alpha_beta root_moves {} tied {}",
            result.root_scores.len(),
            result.tied_moves
        ));
        out
    }
}
