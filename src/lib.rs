//! Crate root module declarations for the mini chess engine.
//!
//! Exposes the 5x5 rules core (board, movement, legality, status), the
//! alpha-beta search, the engines built on it, and utility helpers so
//! binaries, tests, and benches can import stable module paths.

pub mod game_state {
    pub mod applied_move;
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod snapshot;
}

pub mod moves {
    pub mod leader_moves;
    pub mod reach_masks;
    pub mod soldier_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod move_scoring;
}

pub mod engines {
    pub mod ai_player;
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod render_game_state;
}

pub mod errors;
