//! Soldier reach: exactly one square straight toward the enemy side.
//!
//! Capturing and non-capturing steps share this single shape; there is no
//! diagonal capture in this variant.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::{Player, Square};
use crate::moves::leader_moves::bit_if_valid;

const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

pub const PLAYER1_SOLDIER_REACH: [u32; CELLS] = generate_soldier_reach(-1);
pub const PLAYER2_SOLDIER_REACH: [u32; CELLS] = generate_soldier_reach(1);

#[inline]
pub fn soldier_can_reach(owner: Player, from: Square, target_row: i32, target_col: i32) -> bool {
    target_row == from.row() as i32 + owner.forward() && target_col == from.col() as i32
}

#[inline]
pub const fn soldier_reach(owner: Player, from: Square) -> u32 {
    let idx = from.row() * BOARD_SIZE + from.col();
    match owner {
        Player::Player1 => PLAYER1_SOLDIER_REACH[idx],
        Player::Player2 => PLAYER2_SOLDIER_REACH[idx],
    }
}

const fn generate_soldier_reach(forward: i32) -> [u32; CELLS] {
    let mut table = [0u32; CELLS];
    let mut sq = 0usize;

    while sq < CELLS {
        let row = (sq / BOARD_SIZE) as i32;
        let col = (sq % BOARD_SIZE) as i32;
        table[sq] = bit_if_valid(row + forward, col);
        sq += 1;
    }

    table
}
