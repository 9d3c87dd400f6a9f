//! Check, winner and status detection.
//!
//! Attack tests reuse each piece's movement predicate directly; with no
//! sliding pieces there is nothing to block.

use crate::game_state::chess_types::{Board, GameStatus, PieceKind, Player, Square};

impl Board {
    /// True iff some piece of `attacker` could move onto `square`.
    pub fn is_square_attacked(&self, square: Square, attacker: Player) -> bool {
        self.pieces_of(attacker).any(|piece| piece.can_reach(square))
    }

    /// True iff `player`'s Leader stands on a square an opposing piece can
    /// reach. A captured Leader is never in check.
    pub fn is_leader_in_check(&self, player: Player) -> bool {
        let Some(leader) = self.leader_square(player) else {
            return false;
        };
        self.is_square_attacked(leader, player.opposite())
    }

    /// Winner by Leader capture, scanning the board directly. Checked before
    /// any status query each turn.
    pub fn check_winner(&self) -> Option<Player> {
        let mut has_leader = [false; 2];
        for piece in self.pieces() {
            if piece.kind() == PieceKind::Leader {
                has_leader[piece.owner().index()] = true;
            }
        }

        if !has_leader[Player::Player1.index()] {
            return Some(Player::Player2);
        }
        if !has_leader[Player::Player2.index()] {
            return Some(Player::Player1);
        }
        None
    }

    /// Status of the opponent of `for_player`, i.e. of the side that moves
    /// next after `for_player` has moved.
    pub fn check_status(&mut self, for_player: Player) -> GameStatus {
        let opponent = for_player.opposite();
        let in_check = self.is_leader_in_check(opponent);
        let has_moves = self.has_any_legal_move(opponent);

        match (in_check, has_moves) {
            (true, false) => GameStatus::Checkmate,
            (false, false) => GameStatus::Draw,
            (true, true) => GameStatus::Check,
            (false, true) => GameStatus::None,
        }
    }
}
