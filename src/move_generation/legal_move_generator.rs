//! Legal move generation.
//!
//! Candidates come from each piece's reach mask minus squares held by the
//! mover's own pieces; each candidate is then simulated in place and kept
//! only if the mover's Leader is not in check afterwards. Output order is
//! row-major by source, then row-major by destination.

use crate::game_state::chess_types::{Board, Move, Player};
use crate::moves::reach_masks::{piece_reach, square_bit, squares_in};

impl Board {
    /// Bit mask of the squares held by `player`.
    pub fn occupancy(&self, player: Player) -> u32 {
        self.pieces_of(player)
            .fold(0, |mask, piece| mask | square_bit(piece.position()))
    }

    /// Moves the pieces' shapes allow onto empty or enemy squares, before
    /// the self-check filter.
    pub fn candidate_moves(&self, player: Player) -> Vec<Move> {
        let own = self.occupancy(player);
        let mut out = Vec::with_capacity(16);
        for piece in self.pieces_of(player) {
            let from = piece.position();
            for to in squares_in(piece_reach(piece) & !own) {
                out.push(Move::between(from, to));
            }
        }
        out
    }

    pub fn get_all_legal_moves(&mut self, player: Player) -> Vec<Move> {
        let candidates = self.candidate_moves(player);
        let mut legal = Vec::with_capacity(candidates.len());
        for mv in candidates {
            if !self.leaves_leader_in_check(player, mv) {
                legal.push(mv);
            }
        }
        legal
    }

    pub fn has_any_legal_move(&mut self, player: Player) -> bool {
        self.candidate_moves(player)
            .into_iter()
            .any(|mv| !self.leaves_leader_in_check(player, mv))
    }

    /// True iff `mv` would appear in `get_all_legal_moves(player)`.
    pub fn is_legal_move(&mut self, player: Player, mv: Move) -> bool {
        let (Some(from), Some(to)) = (mv.from_square(), mv.to_square()) else {
            return false;
        };
        let Some(piece) = self.piece_at(from) else {
            return false;
        };
        if piece.owner() != player {
            return false;
        }
        let allowed = piece_reach(piece) & !self.occupancy(player);
        allowed & square_bit(to) != 0 && !self.leaves_leader_in_check(player, mv)
    }

    fn leaves_leader_in_check(&mut self, player: Player, mv: Move) -> bool {
        self.scoped_move(mv)
            .map_or(true, |after| after.is_leader_in_check(player))
    }
}
