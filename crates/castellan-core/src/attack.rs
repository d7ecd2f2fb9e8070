//! Attack detection by generating the attacker's pseudo-legal moves.

use crate::color::Color;
use crate::game_state::GameState;
use crate::square::Square;

impl GameState {
    /// Return `true` if the opponent of the side to move could move onto `sq`.
    pub fn square_under_attack(&self, sq: Square) -> bool {
        self.is_attacked_by(sq, self.side_to_move.flip())
    }

    /// Return `true` if any pseudo-legal move of `attacker` ends on `sq`.
    ///
    /// Castling is never part of the attacker's list. Pawns only reach
    /// diagonal squares that hold a piece (or the en passant target), so an
    /// empty square next to a pawn does not count as attacked.
    pub fn is_attacked_by(&self, sq: Square, attacker: Color) -> bool {
        self.pseudo_legal_moves_for(attacker)
            .iter()
            .any(|mv| mv.to() == sq)
    }

    /// Return `true` if the side to move has its king attacked.
    pub fn in_check(&self) -> bool {
        self.square_under_attack(self.king_square(self.side_to_move))
    }
}
