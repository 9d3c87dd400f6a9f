//! AI-vs-AI simulation series runner.
//!
//! Run with:
//! `cargo run --release --bin simulation_runner`
//! `cargo run --release --bin simulation_runner -- --games 200 --p1-depth 3 --seed 42`
//! `RUST_LOG=info cargo run --release --bin simulation_runner -- --verbose`

use clap::Parser;
use log::info;

use mini_chess::engines::ai_player::AIPlayer;
use mini_chess::engines::engine_trait::Engine;
use mini_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

#[derive(Parser, Debug)]
#[command(name = "simulation_runner", about = "Play a series of AI-vs-AI mini chess games")]
struct Args {
    /// Number of games to play.
    #[arg(long, default_value_t = 50)]
    games: u16,

    /// Search depth for Player1 (clamped to 0..=5).
    #[arg(long, default_value_t = 2)]
    p1_depth: i32,

    /// Search depth for Player2 (clamped to 0..=5).
    #[arg(long, default_value_t = 2)]
    p2_depth: i32,

    /// Base seed; drawn from entropy when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Plies per game before it is scored a draw.
    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Print every final board and per-game result.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let base_seed = args.seed.unwrap_or_else(rand::random);
    info!(
        "running {} games, depths {} vs {}, base seed {}",
        args.games, args.p1_depth, args.p2_depth, base_seed
    );

    let p1_depth = args.p1_depth;
    let p2_depth = args.p2_depth;
    let player1 =
        move |seed| Box::new(AIPlayer::new(seed).with_search_depth(p1_depth)) as Box<dyn Engine>;
    let player2 =
        move |seed| Box::new(AIPlayer::new(seed).with_search_depth(p2_depth)) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        &MatchSeriesConfig {
            games: args.games,
            base_seed,
            per_game: MatchConfig {
                max_plies: args.max_plies,
                verbose: args.verbose,
            },
            verbose: args.verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
