//! Minimax search with alpha-beta pruning over in-place apply/undo.
//!
//! Every child position is entered through [`Board::scoped_move`], so the
//! board is back in its pre-search state when a call returns, including
//! after a cutoff breaks out of the move loop. Scores are always from the
//! root player's perspective: the root player maximizes, the opponent
//! minimizes.

use log::trace;
use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::chess_rules::MAX_SEARCH_DEPTH;
use crate::game_state::chess_types::{Board, Move, Player};
use crate::search::board_scoring::BoardScorer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Plies searched, counting the root move. Clamped to
    /// `0..=MAX_SEARCH_DEPTH`; 0 picks uniformly at random.
    pub depth: u8,
    /// Root moves scoring within this distance of the best are treated as
    /// equally good.
    pub tie_epsilon: f64,
    /// Shuffle move order at inner nodes to vary equal-valued lines.
    pub shuffle_moves: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            tie_epsilon: 1e-9,
            shuffle_moves: true,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    #[inline]
    pub fn clamped_depth(&self) -> u8 {
        self.depth.min(MAX_SEARCH_DEPTH)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: f64,
    /// Root moves within epsilon of the best score.
    pub tied_moves: usize,
    pub root_scores: Vec<(Move, f64)>,
    pub stats: SearchStats,
}

/// Recursive searcher bound to one scorer, one root player and an optional
/// generator for move shuffling.
pub struct AlphaBeta<'a, S: BoardScorer, R: Rng> {
    scorer: &'a S,
    root_player: Player,
    rng: Option<&'a mut R>,
    stats: SearchStats,
}

impl<'a, S: BoardScorer, R: Rng> AlphaBeta<'a, S, R> {
    pub fn new(scorer: &'a S, root_player: Player) -> Self {
        Self {
            scorer,
            root_player,
            rng: None,
            stats: SearchStats::default(),
        }
    }

    pub fn with_shuffle(mut self, rng: &'a mut R) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Value of a node where `side_to_move` has no legal move. A
    /// checkmated side counts as a decided game; otherwise the position is
    /// scored statically.
    fn no_move_value(&mut self, board: &mut Board, side_to_move: Player) -> f64 {
        self.stats.leaves += 1;
        if board.is_leader_in_check(side_to_move) {
            let win = self.scorer.win_score();
            return if side_to_move == self.root_player { -win } else { win };
        }
        self.scorer.score(board, self.root_player)
    }

    /// Alpha-beta value of `board` with `side_to_move` to play.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        side_to_move: Player,
    ) -> f64 {
        self.stats.nodes += 1;

        if depth == 0 || board.check_winner().is_some() {
            self.stats.leaves += 1;
            return self.scorer.score(board, self.root_player);
        }

        let mut moves = board.get_all_legal_moves(side_to_move);
        if moves.is_empty() {
            return self.no_move_value(board, side_to_move);
        }

        if let Some(rng) = self.rng.as_deref_mut() {
            moves.shuffle(rng);
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for mv in moves {
            let Some(mut child) = board.scoped_move(mv) else {
                continue;
            };
            let value = self.search(
                &mut child,
                depth - 1,
                alpha,
                beta,
                !maximizing,
                side_to_move.opposite(),
            );

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Same tree walk as [`AlphaBeta::search`] without pruning or shuffling.
    /// Reference for checking that pruning never changes a value.
    pub fn search_unpruned(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        side_to_move: Player,
    ) -> f64 {
        self.stats.nodes += 1;

        if depth == 0 || board.check_winner().is_some() {
            self.stats.leaves += 1;
            return self.scorer.score(board, self.root_player);
        }

        let moves = board.get_all_legal_moves(side_to_move);
        if moves.is_empty() {
            return self.no_move_value(board, side_to_move);
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for mv in moves {
            let Some(mut child) = board.scoped_move(mv) else {
                continue;
            };
            let value =
                self.search_unpruned(&mut child, depth - 1, !maximizing, side_to_move.opposite());
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }
}

/// Picks a move for `player`, choosing uniformly among the root moves whose
/// score is within `config.tie_epsilon` of the best. Depth 0 picks among all
/// legal moves. Returns no move when `player` has none.
pub fn choose_best_move<S: BoardScorer, R: Rng>(
    board: &mut Board,
    player: Player,
    config: &SearchConfig,
    scorer: &S,
    rng: &mut R,
) -> SearchResult {
    let root_moves = board.get_all_legal_moves(player);
    if root_moves.is_empty() {
        return SearchResult::default();
    }

    let depth = config.clamped_depth();
    if depth == 0 {
        return SearchResult {
            best_move: root_moves.choose(rng).copied(),
            tied_moves: root_moves.len(),
            ..SearchResult::default()
        };
    }

    let mut root_scores = Vec::with_capacity(root_moves.len());
    let stats = {
        let mut searcher = AlphaBeta::new(scorer, player);
        if config.shuffle_moves {
            searcher = searcher.with_shuffle(rng);
        }
        for mv in root_moves {
            let Some(mut child) = board.scoped_move(mv) else {
                continue;
            };
            let score = searcher.search(
                &mut child,
                depth - 1,
                f64::NEG_INFINITY,
                f64::INFINITY,
                false,
                player.opposite(),
            );
            root_scores.push((mv, score));
        }
        searcher.stats()
    };

    let best_score = root_scores
        .iter()
        .map(|&(_, score)| score)
        .fold(f64::NEG_INFINITY, f64::max);
    let tied: Vec<Move> = root_scores
        .iter()
        .filter(|&&(_, score)| score >= best_score - config.tie_epsilon)
        .map(|&(mv, _)| mv)
        .collect();

    trace!(
        "search depth {} nodes {} leaves {} cutoffs {} best {:.3} ties {}",
        depth,
        stats.nodes,
        stats.leaves,
        stats.cutoffs,
        best_score,
        tied.len()
    );

    SearchResult {
        best_move: tied.choose(rng).copied(),
        best_score,
        tied_moves: tied.len(),
        root_scores,
        stats,
    }
}
