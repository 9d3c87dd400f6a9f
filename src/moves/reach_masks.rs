//! Reach-mask dispatch and iteration over the 25-bit square masks.

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::moves::leader_moves::leader_reach;
use crate::moves::soldier_moves::soldier_reach;

/// Destinations a piece's shape allows from where it stands, excluding its
/// own square.
#[inline]
pub fn piece_reach(piece: &Piece) -> u32 {
    match piece.kind() {
        PieceKind::Leader => leader_reach(piece.position()),
        PieceKind::Soldier => soldier_reach(piece.owner(), piece.position()),
    }
}

#[inline]
pub const fn square_bit(square: Square) -> u32 {
    1u32 << square.index()
}

/// Squares of a mask in ascending (row-major) order.
pub fn squares_in(mask: u32) -> impl Iterator<Item = Square> {
    let mut remaining = mask;
    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        let idx = remaining.trailing_zeros() as usize;
        remaining &= remaining - 1;
        Square::from_index(idx)
    })
}
