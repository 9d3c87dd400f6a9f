//! Move execution on the board.
//!
//! Two paths exist. `try_move_piece`/`move_piece` validate a request in full
//! before mutating anything. `apply_move_silently`/`undo_move_silently` skip
//! validation and are meant for search and simulation, where each apply is
//! paired with exactly one undo in LIFO order. `scoped_move` packages that
//! pairing in a guard that undoes on drop.

use std::ops::{Deref, DerefMut};

use log::debug;

use crate::errors::{MoveError, MoveResult};
use crate::game_state::chess_types::{AppliedMove, Board, Move, Piece, Player, Square};

impl Board {
    /// Piece-level validation shared by the checked move paths. Checks run
    /// in order: coordinates on the board, a piece on the source, no own
    /// piece on the destination, and the piece's movement shape.
    fn validate_move(&self, mv: Move) -> MoveResult<(Square, Square, Piece)> {
        let (Some(from), Some(to)) = (mv.from_square(), mv.to_square()) else {
            return Err(MoveError::OutOfBounds {
                from_row: mv.from_row,
                from_col: mv.from_col,
                to_row: mv.to_row,
                to_col: mv.to_col,
            });
        };

        let piece = *self
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource { square: from })?;

        if let Some(target) = self.piece_at(to) {
            if target.owner() == piece.owner() {
                return Err(MoveError::OwnPieceAtDestination {
                    player: piece.owner(),
                    square: to,
                });
            }
        }

        if !piece.can_reach(to) {
            return Err(MoveError::IllegalForPiece {
                kind: piece.kind(),
                from,
                to,
            });
        }

        Ok((from, to, piece))
    }

    /// Validates and executes a move, returning the captured piece if any.
    /// Self-check is not considered here; see [`Board::try_legal_move`].
    pub fn try_move_piece(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> MoveResult<Option<Piece>> {
        let (from, to, piece) = self.validate_move(Move::new(from_row, from_col, to_row, to_col))?;
        Ok(self.execute_validated(from, to, piece))
    }

    /// Boolean form of [`Board::try_move_piece`]; a rejected move leaves the
    /// board untouched.
    pub fn move_piece(&mut self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        match self.try_move_piece(from_row, from_col, to_row, to_col) {
            Ok(_) => true,
            Err(err) => {
                debug!("move rejected: {err}");
                false
            }
        }
    }

    /// Like [`Board::try_move_piece`] but also refuses moves that leave the
    /// mover's own Leader in check.
    pub fn try_legal_move(&mut self, mv: Move) -> MoveResult<Option<Piece>> {
        let (from, to, piece) = self.validate_move(mv)?;
        let player = piece.owner();
        let exposes_leader = self
            .scoped_move(mv)
            .is_some_and(|after| after.is_leader_in_check(player));
        if exposes_leader {
            return Err(MoveError::LeavesLeaderInCheck { player });
        }
        Ok(self.execute_validated(from, to, piece))
    }

    fn execute_validated(&mut self, from: Square, to: Square, piece: Piece) -> Option<Piece> {
        let captured = self
            .apply_move_silently(Move::between(from, to))
            .and_then(|applied| applied.captured);
        if let Some(victim) = captured {
            debug!(
                "{} captured {}'s {} at {}",
                piece.owner(),
                victim.owner(),
                victim.kind().name(),
                to
            );
        }
        debug!("{} moved {} {} -> {}", piece.owner(), piece.kind().name(), from, to);
        captured
    }

    /// Executes `mv` without any rule checks. Returns `None`, leaving the
    /// board unchanged, when a coordinate is off the board or the source is
    /// empty.
    pub fn apply_move_silently(&mut self, mv: Move) -> Option<AppliedMove> {
        let from = mv.from_square()?;
        let to = mv.to_square()?;
        let mut piece = self.cell_mut(from).take()?;
        piece.set_position(to);
        let captured = self.cell_mut(to).replace(piece);
        Some(AppliedMove { from, to, captured })
    }

    /// Exact inverse of the [`Board::apply_move_silently`] call that produced
    /// `applied`. Must be called in reverse order of application.
    pub fn undo_move_silently(&mut self, applied: AppliedMove) {
        let moved = self.cell_mut(applied.to).take();
        debug_assert!(moved.is_some(), "undo of {:?} found an empty destination", applied);
        *self.cell_mut(applied.to) = applied.captured;
        if let Some(mut piece) = moved {
            piece.set_position(applied.from);
            *self.cell_mut(applied.from) = Some(piece);
        }
    }

    /// Applies `mv` silently and returns a guard that undoes it when dropped.
    pub fn scoped_move(&mut self, mv: Move) -> Option<ScopedMove<'_>> {
        let applied = self.apply_move_silently(mv)?;
        Some(ScopedMove {
            board: self,
            applied: Some(applied),
        })
    }
}

/// A silently applied move that is undone when the guard goes out of scope,
/// including on early `break` or `?` exits.
pub struct ScopedMove<'a> {
    board: &'a mut Board,
    applied: Option<AppliedMove>,
}

impl ScopedMove<'_> {
    pub fn captured(&self) -> Option<&Piece> {
        self.applied.as_ref().and_then(AppliedMove::captured)
    }

    pub fn mover(&self) -> Option<Player> {
        self.applied
            .as_ref()
            .and_then(|applied| self.board.piece_at(applied.to))
            .map(Piece::owner)
    }
}

impl Deref for ScopedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        if let Some(applied) = self.applied.take() {
            self.board.undo_move_silently(applied);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn forward_soldier_step_moves_the_piece() {
        let mut board = Board::new();
        assert!(board.move_piece(3, 1, 2, 1));
        assert!(board.piece_at(sq(3, 1)).is_none());
        let moved = board.piece_at(sq(2, 1)).unwrap();
        assert_eq!(moved.kind(), PieceKind::Soldier);
        assert_eq!(moved.owner(), Player::Player1);
        assert_eq!(moved.position(), sq(2, 1));
    }

    #[test]
    fn rejections_report_the_first_failing_check() {
        let mut board = Board::new();
        let before = board.clone();

        assert!(matches!(
            board.try_move_piece(0, 0, 5, 5),
            Err(MoveError::OutOfBounds { .. })
        ));
        assert!(matches!(
            board.try_move_piece(2, 2, 1, 2),
            Err(MoveError::NoPieceAtSource { .. })
        ));
        assert!(matches!(
            board.try_move_piece(4, 2, 3, 1),
            Err(MoveError::OwnPieceAtDestination { .. })
        ));
        assert!(matches!(
            board.try_move_piece(3, 1, 2, 2),
            Err(MoveError::IllegalForPiece { .. })
        ));
        assert!(matches!(
            board.try_move_piece(3, 1, 4, 1),
            Err(MoveError::IllegalForPiece { .. })
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn leader_cannot_stay_in_place() {
        let mut board = Board::new();
        assert!(matches!(
            board.try_move_piece(4, 2, 4, 2),
            Err(MoveError::OwnPieceAtDestination { .. })
        ));
    }

    #[test]
    fn legal_move_refuses_walking_into_check() {
        let mut board = Board::from_pieces([
            Piece::new(PieceKind::Leader, Player::Player1, sq(4, 2)),
            Piece::new(PieceKind::Leader, Player::Player2, sq(0, 2)),
            Piece::new(PieceKind::Soldier, Player::Player2, sq(2, 1)),
        ])
        .unwrap();
        let before = board.clone();

        // (3,1) is attacked by the Player2 soldier on (2,1).
        assert_eq!(
            board.try_legal_move(Move::new(4, 2, 3, 1)),
            Err(MoveError::LeavesLeaderInCheck {
                player: Player::Player1
            })
        );
        assert_eq!(board, before);

        // The same request passes the piece-level checks.
        assert!(board.move_piece(4, 2, 3, 1));
    }

    #[test]
    fn silent_apply_and_undo_restore_capture() {
        let mut board = Board::new();
        assert!(board.move_piece(3, 1, 2, 1));
        let before = board.clone();

        let applied = board.apply_move_silently(Move::new(1, 1, 2, 1)).unwrap();
        assert_eq!(applied.captured().map(Piece::owner), Some(Player::Player1));
        assert_eq!(board.count_pieces(Player::Player1, PieceKind::Soldier), 1);

        board.undo_move_silently(applied);
        assert_eq!(board, before);
        assert_eq!(board.piece_at(sq(1, 1)).unwrap().position(), sq(1, 1));
    }

    #[test]
    fn silent_apply_from_empty_square_is_refused() {
        let mut board = Board::new();
        assert!(board.apply_move_silently(Move::new(2, 2, 1, 2)).is_none());
        assert!(board.apply_move_silently(Move::new(4, 2, 5, 2)).is_none());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn scoped_move_undoes_on_drop() {
        let mut board = Board::new();
        {
            let guard = board.scoped_move(Move::new(4, 2, 3, 2)).unwrap();
            assert!(guard.piece_at(sq(4, 2)).is_none());
            assert_eq!(guard.mover(), Some(Player::Player1));
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn nested_scoped_moves_unwind_in_order() {
        let mut board = Board::new();
        {
            let mut outer = board.scoped_move(Move::new(3, 1, 2, 1)).unwrap();
            {
                let inner = outer.scoped_move(Move::new(1, 1, 2, 1)).unwrap();
                assert_eq!(inner.captured().map(Piece::owner), Some(Player::Player1));
            }
            assert_eq!(outer.piece_at(sq(2, 1)).unwrap().owner(), Player::Player1);
        }
        assert_eq!(board, Board::new());
    }
}
