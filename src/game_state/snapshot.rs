//! Serializable board state for storage and transport layers.
//!
//! A snapshot carries only kind, owner and position per occupied square.
//! Reconstruction validates coordinates and occupancy before building a
//! board, so an accepted snapshot always yields a consistent one.

use serde::{Deserialize, Serialize};

use crate::errors::SnapshotError;
use crate::game_state::chess_types::{Board, Piece, PieceKind, Player, Square};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub kind: PieceKind,
    pub owner: Player,
    pub row: i32,
    pub col: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub pieces: Vec<PlacedPiece>,
}

impl Board {
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            pieces: self
                .pieces()
                .map(|piece| PlacedPiece {
                    kind: piece.kind(),
                    owner: piece.owner(),
                    row: piece.position().row() as i32,
                    col: piece.position().col() as i32,
                })
                .collect(),
        }
    }

    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Board, SnapshotError> {
        let pieces = snapshot
            .pieces
            .iter()
            .map(|placed| {
                Square::new(placed.row, placed.col)
                    .map(|square| Piece::new(placed.kind, placed.owner, square))
                    .ok_or(SnapshotError::SquareOutOfRange {
                        row: placed.row,
                        col: placed.col,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Board::from_pieces(pieces)
    }
}
