//! Leader reach: one square in any direction.
//!
//! The predicate answers the shape question for arbitrary (possibly
//! off-board) targets; the table lists on-board targets as a 25-bit mask in
//! row-major bit order so generators can walk destinations in scan order.

use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Square;

const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

pub const LEADER_REACH: [u32; CELLS] = generate_leader_reach();

/// True iff `|drow| <= 1` and `|dcol| <= 1`, including zero displacement.
#[inline]
pub fn leader_can_reach(from: Square, target_row: i32, target_col: i32) -> bool {
    target_row.abs_diff(from.row() as i32) <= 1 && target_col.abs_diff(from.col() as i32) <= 1
}

/// On-board neighbours of `from`, excluding `from` itself.
#[inline]
pub const fn leader_reach(from: Square) -> u32 {
    LEADER_REACH[from.row() * BOARD_SIZE + from.col()]
}

const fn generate_leader_reach() -> [u32; CELLS] {
    let mut table = [0u32; CELLS];
    let mut sq = 0usize;

    while sq < CELLS {
        let row = (sq / BOARD_SIZE) as i32;
        let col = (sq % BOARD_SIZE) as i32;
        let mut reach = 0u32;

        let mut d_row = -1;
        while d_row <= 1 {
            let mut d_col = -1;
            while d_col <= 1 {
                if d_row != 0 || d_col != 0 {
                    reach |= bit_if_valid(row + d_row, col + d_col);
                }
                d_col += 1;
            }
            d_row += 1;
        }

        table[sq] = reach;
        sq += 1;
    }

    table
}

pub(crate) const fn bit_if_valid(row: i32, col: i32) -> u32 {
    let size = BOARD_SIZE as i32;
    if row < 0 || row >= size || col < 0 || col >= size {
        return 0;
    }
    1u32 << (row as usize * BOARD_SIZE + col as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn corner_leader_has_three_targets() {
        assert_eq!(leader_reach(sq(0, 0)).count_ones(), 3);
        assert_eq!(leader_reach(sq(4, 4)).count_ones(), 3);
        assert_eq!(leader_reach(sq(2, 2)).count_ones(), 8);
        assert_eq!(leader_reach(sq(0, 2)).count_ones(), 5);
    }

    #[test]
    fn predicate_matches_chebyshev_distance() {
        for from in Square::all() {
            for r in -1..=5 {
                for c in -1..=5 {
                    let expected = (r - from.row() as i32)
                        .abs()
                        .max((c - from.col() as i32).abs())
                        <= 1;
                    assert_eq!(leader_can_reach(from, r, c), expected);
                }
            }
        }
    }

    #[test]
    fn table_agrees_with_predicate_except_self() {
        for from in Square::all() {
            for to in Square::all() {
                let in_table = leader_reach(from) & (1 << (to.row() * BOARD_SIZE + to.col())) != 0;
                let by_predicate = from != to && leader_can_reach(from, to.row() as i32, to.col() as i32);
                assert_eq!(in_table, by_predicate, "{from} -> {to}");
            }
        }
    }

    #[test]
    fn extreme_targets_are_out_of_reach() {
        for from in Square::all() {
            for extreme in [i32::MIN, i32::MIN + 1, i32::MAX] {
                assert!(!leader_can_reach(from, extreme, from.col() as i32));
                assert!(!leader_can_reach(from, from.row() as i32, extreme));
                assert!(!leader_can_reach(from, extreme, extreme));
            }
        }
    }

    #[test]
    fn leader_accepts_its_own_square() {
        assert!(leader_can_reach(sq(3, 3), 3, 3));
    }
}
