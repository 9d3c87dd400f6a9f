//! Engine abstraction shared by every move-selection policy.
//!
//! Drivers and the match harness talk to engines only through this trait:
//! pick a move for a player, optionally apply it, and tune runtime options
//! by name.

use log::debug;

use crate::errors::EngineError;
use crate::game_state::chess_types::{Board, Move, Player};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn set_option(&mut self, name: &str, _value: &str) -> Result<(), EngineError> {
        Err(EngineError::UnknownOption {
            name: name.to_owned(),
        })
    }

    /// Chooses a move for `player`. `best_move` is `None` only when
    /// `player` has no legal move. The board is returned unchanged.
    fn choose_move(&mut self, board: &mut Board, player: Player) -> EngineOutput;

    /// Chooses a move and plays it through [`Board::move_piece`]. Returns
    /// false when no legal move exists.
    fn make_move(&mut self, board: &mut Board, player: Player) -> bool {
        let output = self.choose_move(board, player);
        let Some(mv) = output.best_move else {
            debug!("{} has no legal move for {}", self.name(), player);
            return false;
        };
        debug!("{} plays {} for {}", self.name(), mv, player);
        board.move_piece(mv.from_row, mv.from_col, mv.to_row, mv.to_col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::chess_types::{Piece, PieceKind, Square};

    #[test]
    fn make_move_plays_the_chosen_move() {
        let mut engine = RandomEngine::new(21);
        let mut board = Board::new();
        assert!(engine.make_move(&mut board, Player::Player2));
        assert_ne!(board, Board::new());
        assert_eq!(board.pieces_of(Player::Player2).count(), 3);
    }

    #[test]
    fn make_move_reports_false_without_a_legal_move() {
        // Player2's Leader on (0,0) is boxed in but not attacked.
        let mut board = Board::from_pieces([
            Piece::new(PieceKind::Leader, Player::Player2, Square::new(0, 0).unwrap()),
            Piece::new(PieceKind::Leader, Player::Player1, Square::new(2, 1).unwrap()),
            Piece::new(PieceKind::Soldier, Player::Player1, Square::new(1, 1).unwrap()),
        ])
        .unwrap();
        let before = board.clone();

        let mut engine = RandomEngine::new(0);
        assert!(!engine.make_move(&mut board, Player::Player2));
        assert_eq!(board, before);
    }
}
