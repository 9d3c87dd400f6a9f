//! Reversible record of one silently applied move.

use crate::game_state::chess_types::{Piece, Square};

/// Everything needed to restore the board to its state before a move.
///
/// Not `Clone`: each record is consumed by exactly one undo.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an applied move must be undone to restore the board"]
pub struct AppliedMove {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) captured: Option<Piece>,
}

impl AppliedMove {
    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    /// The piece that stood on the destination before the move.
    #[inline]
    pub fn captured(&self) -> Option<&Piece> {
        self.captured.as_ref()
    }
}
