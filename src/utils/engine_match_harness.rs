//! Head-to-head engine match harness.
//!
//! Runs two `Engine` implementations against each other on a fresh board
//! with Player1 moving first, and aggregates results over a seeded series.

use std::time::Instant;

use chrono::Local;
use log::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::MatchError;
use crate::game_state::chess_types::{Board, GameStatus, Move, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Player1WinLeaderCapture,
    Player2WinLeaderCapture,
    Player1WinCheckmate,
    Player2WinCheckmate,
    DrawStalemate,
    DrawNoLegalMove,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            MatchOutcome::Player1WinLeaderCapture | MatchOutcome::Player1WinCheckmate => {
                Some(Player::Player1)
            }
            MatchOutcome::Player2WinLeaderCapture | MatchOutcome::Player2WinCheckmate => {
                Some(Player::Player2)
            }
            MatchOutcome::DrawStalemate
            | MatchOutcome::DrawNoLegalMove
            | MatchOutcome::DrawMaxPlies => None,
        }
    }

    fn leader_capture(winner: Player) -> Self {
        match winner {
            Player::Player1 => MatchOutcome::Player1WinLeaderCapture,
            Player::Player2 => MatchOutcome::Player2WinLeaderCapture,
        }
    }

    fn checkmate(winner: Player) -> Self {
        match winner {
            Player::Player1 => MatchOutcome::Player1WinCheckmate,
            Player::Player2 => MatchOutcome::Player2WinCheckmate,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Print each engine's `info_lines` as moves are chosen and keep them
    /// in [`MatchResult::engine_info`].
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub played_moves: Vec<Move>,
    pub player1_move_count: u32,
    pub player2_move_count: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    /// Engine diagnostics, prefixed with the side that produced them.
    /// Empty unless the match ran verbose.
    pub engine_info: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 50,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<MatchOutcome>,
    pub total_plies: u32,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "[{}] games={} player1_wins={} player2_wins={} draws={} avg_plies={:.1} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.avg_plies(),
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }

    pub fn avg_plies(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            f64::from(self.total_plies) / f64::from(self.games)
        }
    }
}

/// Play one game from the starting position.
///
/// `engine_p1` moves first. After every move the board is checked for a
/// captured Leader, then for checkmate or stalemate of the side to move
/// next.
pub fn play_engine_match(
    engine_p1: &mut dyn Engine,
    engine_p2: &mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchResult, MatchError> {
    play_engine_match_from_board(Board::new(), engine_p1, engine_p2, Player::Player1, config)
}

/// Play one game from a caller-provided board with `to_move` moving first.
pub fn play_engine_match_from_board(
    mut board: Board,
    engine_p1: &mut dyn Engine,
    engine_p2: &mut dyn Engine,
    to_move: Player,
    config: &MatchConfig,
) -> Result<MatchResult, MatchError> {
    let mut mover = to_move;
    let mut played_moves = Vec::new();
    let mut move_count = [0u32; 2];
    let mut total_time_ns = [0u128; 2];
    let mut engine_info = Vec::new();

    let outcome = 'game: {
        for _ in 0..config.max_plies {
            let started = Instant::now();
            let out = match mover {
                Player::Player1 => engine_p1.choose_move(&mut board, mover),
                Player::Player2 => engine_p2.choose_move(&mut board, mover),
            };
            let elapsed_ns = started.elapsed().as_nanos();

            if config.verbose {
                for line in out.info_lines {
                    let line = format!("[{mover}] {line}");
                    println!("{line}");
                    engine_info.push(line);
                }
            }

            let Some(mv) = out.best_move else {
                debug!("{} has no legal move", mover);
                break 'game MatchOutcome::DrawNoLegalMove;
            };
            if !board.is_legal_move(mover, mv)
                || !board.move_piece(mv.from_row, mv.from_col, mv.to_row, mv.to_col)
            {
                let engine = match mover {
                    Player::Player1 => engine_p1.name(),
                    Player::Player2 => engine_p2.name(),
                };
                return Err(MatchError::IllegalEngineMove {
                    engine: engine.to_owned(),
                    player: mover,
                    mv,
                });
            }

            let slot = mover.index();
            move_count[slot] = move_count[slot].saturating_add(1);
            total_time_ns[slot] = total_time_ns[slot].saturating_add(elapsed_ns);
            played_moves.push(mv);

            if let Some(winner) = board.check_winner() {
                break 'game MatchOutcome::leader_capture(winner);
            }
            match board.check_status(mover) {
                GameStatus::Checkmate => break 'game MatchOutcome::checkmate(mover),
                GameStatus::Draw => break 'game MatchOutcome::DrawStalemate,
                GameStatus::Check | GameStatus::None => {}
            }

            mover = mover.opposite();
        }
        MatchOutcome::DrawMaxPlies
    };

    Ok(MatchResult {
        outcome,
        final_board: board,
        played_moves,
        player1_move_count: move_count[Player::Player1.index()],
        player2_move_count: move_count[Player::Player2.index()],
        player1_total_time_ns: total_time_ns[Player::Player1.index()],
        player2_total_time_ns: total_time_ns[Player::Player2.index()],
        engine_info,
    })
}

/// Play a series of games and aggregate win/draw statistics.
///
/// Each factory receives a per-game seed derived from `base_seed`, so a
/// series is reproducible when the engines seed from it.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, MatchError>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let per_game = MatchConfig {
        verbose: config.verbose || config.per_game.verbose,
        ..config.per_game.clone()
    };

    for i in 0..config.games {
        let seed = config.base_seed.wrapping_add(2 * u64::from(i));
        let mut player1 = player1_factory(seed);
        let mut player2 = player2_factory(seed.wrapping_add(1));
        if config.verbose {
            println!(
                "[series] game {}/{} seed={} player1={} player2={}",
                i + 1,
                config.games,
                seed,
                player1.name(),
                player2.name()
            );
        }

        let result = play_engine_match(player1.as_mut(), player2.as_mut(), &per_game)?;

        stats.player1_moves = stats.player1_moves.saturating_add(result.player1_move_count);
        stats.player2_moves = stats.player2_moves.saturating_add(result.player2_move_count);
        stats.player1_total_time_ns = stats
            .player1_total_time_ns
            .saturating_add(result.player1_total_time_ns);
        stats.player2_total_time_ns = stats
            .player2_total_time_ns
            .saturating_add(result.player2_total_time_ns);
        stats.total_plies = stats
            .total_plies
            .saturating_add(result.played_moves.len() as u32);

        match result.outcome.winner() {
            Some(Player::Player1) => stats.player1_wins += 1,
            Some(Player::Player2) => stats.player2_wins += 1,
            None => stats.draws += 1,
        }
        stats.outcomes.push(result.outcome);

        info!(
            "game {}/{} {:?} after {} plies",
            i + 1,
            config.games,
            result.outcome,
            result.played_moves.len()
        );
        if config.verbose {
            println!("{}", result.final_board);
            println!(
                "[series] game {}/{} result={:?} p1_wins={} p2_wins={} draws={}\n",
                i + 1,
                config.games,
                result.outcome,
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}
