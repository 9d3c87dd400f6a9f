//! Error types used across the engine.
//!
//! Move rejection is an expected outcome on the board boundary, so the
//! boolean board API is a thin wrapper over these results. Every rejection
//! is decided before the board is touched.

use thiserror::Error;

use crate::game_state::chess_types::{Move, PieceKind, Player, Square};

/// Why a requested move was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("move out of bounds: ({from_row},{from_col}) -> ({to_row},{to_col})")]
    OutOfBounds {
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    },

    #[error("no piece at {square}")]
    NoPieceAtSource { square: Square },

    #[error("{player} cannot capture its own piece at {square}")]
    OwnPieceAtDestination { player: Player, square: Square },

    #[error("invalid move for {kind:?} from {from} to {to}")]
    IllegalForPiece {
        kind: PieceKind,
        from: Square,
        to: Square,
    },

    #[error("move would leave {player}'s Leader in check")]
    LeavesLeaderInCheck { player: Player },
}

pub type MoveResult<T> = Result<T, MoveError>;

/// Reconstruction of a board from serialized state failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("piece placed off the board at ({row},{col})")]
    SquareOutOfRange { row: i32, col: i32 },

    #[error("more than one piece placed on {square}")]
    SquareOccupiedTwice { square: Square },
}

/// Engine configuration failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown engine option '{name}'")]
    UnknownOption { name: String },

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidOptionValue { name: String, value: String },
}

/// An engine misbehaved during a harness game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("{engine} returned illegal move {mv} for {player}")]
    IllegalEngineMove {
        engine: String,
        player: Player,
        mv: Move,
    },
}
