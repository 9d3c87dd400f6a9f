//! The 5x5 grid and its piece bookkeeping.
//!
//! `Board` owns every square. A piece's stored position always equals the
//! cell that holds it: only the mutation paths in `move_generation` move
//! pieces, and they rewrite both together. Legality, status detection and
//! apply/undo are implemented in `move_generation` as further `impl Board`
//! blocks.

use std::fmt;

use crate::errors::SnapshotError;
use crate::game_state::chess_rules::{BOARD_SIZE, STARTING_LAYOUT};
use crate::game_state::chess_types::{Piece, PieceKind, Player, Square};
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board with the fixed starting layout.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (kind, owner, row, col) in STARTING_LAYOUT {
            board.cells[row][col] = Square::new(row as i32, col as i32)
                .map(|square| Piece::new(kind, owner, square));
        }
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board holding exactly `pieces`, each at its own position.
    pub fn from_pieces<I>(pieces: I) -> Result<Self, SnapshotError>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut board = Self::empty();
        for piece in pieces {
            let square = piece.position();
            let cell = board.cell_mut(square);
            if cell.is_some() {
                return Err(SnapshotError::SquareOccupiedTwice { square });
            }
            *cell = Some(piece);
        }
        Ok(board)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.cells[square.row()][square.col()].as_ref()
    }

    /// Occupant lookup by raw coordinates; `None` for empty or off-board.
    pub fn piece_at_coords(&self, row: i32, col: i32) -> Option<&Piece> {
        Square::new(row, col).and_then(|square| self.piece_at(square))
    }

    /// Display symbol of the occupant, for presentation layers.
    pub fn symbol_at(&self, row: i32, col: i32) -> Option<char> {
        self.piece_at_coords(row, col).map(Piece::symbol)
    }

    /// All pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten().flatten()
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.owner() == player)
    }

    pub fn count_pieces(&self, player: Player, kind: PieceKind) -> usize {
        self.pieces_of(player)
            .filter(|piece| piece.kind() == kind)
            .count()
    }

    /// Square of `player`'s Leader, or `None` once it has been captured.
    pub fn leader_square(&self, player: Player) -> Option<Square> {
        self.pieces_of(player)
            .find(|piece| piece.kind() == PieceKind::Leader)
            .map(Piece::position)
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.cells[square.row()][square.col()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn start_position_has_three_pieces_per_side() {
        let board = Board::new();
        for player in Player::ALL {
            assert_eq!(board.pieces_of(player).count(), 3);
            assert_eq!(board.count_pieces(player, PieceKind::Leader), 1);
            assert_eq!(board.count_pieces(player, PieceKind::Soldier), 2);
        }
        assert_eq!(board.leader_square(Player::Player1), Some(sq(4, 2)));
        assert_eq!(board.leader_square(Player::Player2), Some(sq(0, 2)));
        for (row, col) in [(3, 1), (3, 3)] {
            let piece = board.piece_at(sq(row, col)).unwrap();
            assert_eq!(piece.kind(), PieceKind::Soldier);
            assert_eq!(piece.owner(), Player::Player1);
        }
        for (row, col) in [(1, 1), (1, 3)] {
            let piece = board.piece_at(sq(row, col)).unwrap();
            assert_eq!(piece.kind(), PieceKind::Soldier);
            assert_eq!(piece.owner(), Player::Player2);
        }
    }

    #[test]
    fn stored_positions_match_cells() {
        let board = Board::new();
        for square in Square::all() {
            if let Some(piece) = board.piece_at(square) {
                assert_eq!(piece.position(), square);
            }
        }
    }

    #[test]
    fn from_pieces_rejects_stacked_pieces() {
        let pieces = [
            Piece::new(PieceKind::Leader, Player::Player1, sq(2, 2)),
            Piece::new(PieceKind::Soldier, Player::Player2, sq(2, 2)),
        ];
        assert_eq!(
            Board::from_pieces(pieces),
            Err(SnapshotError::SquareOccupiedTwice { square: sq(2, 2) })
        );
    }

    #[test]
    fn symbol_lookup_handles_empty_and_off_board() {
        let board = Board::new();
        assert_eq!(board.symbol_at(4, 2), Some('L'));
        assert_eq!(board.symbol_at(1, 3), Some('s'));
        assert_eq!(board.symbol_at(2, 2), None);
        assert_eq!(board.symbol_at(-1, 7), None);
    }
}
