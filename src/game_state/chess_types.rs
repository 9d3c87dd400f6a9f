//! Value types shared by the board, move generation, and engines.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use crate::game_state::applied_move::AppliedMove;
pub use crate::game_state::board::Board;

use crate::errors::SnapshotError;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::moves::leader_moves::leader_can_reach;
use crate::moves::soldier_moves::soldier_can_reach;

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Player1, Player::Player2];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Row delta of one step toward the enemy side.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Player::Player1 => -1,
            Player::Player2 => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Player1 => write!(f, "Player1"),
            Player::Player2 => write!(f, "Player2"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Leader,
    Soldier,
}

impl PieceKind {
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Leader => 'L',
            PieceKind::Soldier => 'S',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Leader => "Leader",
            PieceKind::Soldier => "Soldier",
        }
    }
}

/// An on-board coordinate. Construction goes through [`Square::new`], so a
/// `Square` value is always in range, including when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSquare", into = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Returns `None` when either coordinate falls outside `0..BOARD_SIZE`.
    #[inline]
    pub fn new(row: i32, col: i32) -> Option<Self> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index in `0..BOARD_SIZE * BOARD_SIZE`.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= BOARD_SIZE * BOARD_SIZE {
            return None;
        }
        Some(Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        })
    }

    /// Every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

#[derive(Serialize, Deserialize)]
struct RawSquare {
    row: i32,
    col: i32,
}

impl TryFrom<RawSquare> for Square {
    type Error = SnapshotError;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::new(raw.row, raw.col).ok_or(SnapshotError::SquareOutOfRange {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl From<Square> for RawSquare {
    fn from(square: Square) -> Self {
        RawSquare {
            row: square.row as i32,
            col: square.col as i32,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A piece on the board. Its owner and kind are fixed at creation; the
/// position is rewritten only by [`Board`] when the piece moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceKind,
    owner: Player,
    position: Square,
}

impl Piece {
    pub const fn new(kind: PieceKind, owner: Player, position: Square) -> Self {
        Self {
            kind,
            owner,
            position,
        }
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn owner(&self) -> Player {
        self.owner
    }

    #[inline]
    pub const fn position(&self) -> Square {
        self.position
    }

    #[inline]
    pub(crate) fn set_position(&mut self, position: Square) {
        self.position = position;
    }

    /// Board symbol: uppercase for Player1, lowercase for Player2.
    pub fn symbol(&self) -> char {
        match self.owner {
            Player::Player1 => self.kind.symbol(),
            Player::Player2 => self.kind.symbol().to_ascii_lowercase(),
        }
    }

    /// Movement shape test from the current position. Board content is not
    /// consulted and a Leader accepts its own square.
    #[inline]
    pub fn can_move(&self, target_row: i32, target_col: i32) -> bool {
        match self.kind {
            PieceKind::Leader => leader_can_reach(self.position, target_row, target_col),
            PieceKind::Soldier => {
                soldier_can_reach(self.owner, self.position, target_row, target_col)
            }
        }
    }

    #[inline]
    pub fn can_reach(&self, target: Square) -> bool {
        self.can_move(target.row() as i32, target.col() as i32)
    }
}

/// Candidate relocation, not yet checked against any board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from_row: i32,
    pub from_col: i32,
    pub to_row: i32,
    pub to_col: i32,
}

impl Move {
    pub const fn new(from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    pub fn between(from: Square, to: Square) -> Self {
        Self::new(
            from.row() as i32,
            from.col() as i32,
            to.row() as i32,
            to.col() as i32,
        )
    }

    #[inline]
    pub fn from_square(&self) -> Option<Square> {
        Square::new(self.from_row, self.from_col)
    }

    #[inline]
    pub fn to_square(&self) -> Option<Square> {
        Square::new(self.to_row, self.to_col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.from_row, self.from_col, self.to_row, self.to_col
        )
    }
}

/// Position classification relative to the side about to move. Always
/// recomputed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    None,
    Check,
    Checkmate,
    Draw,
}
