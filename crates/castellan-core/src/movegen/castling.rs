//! Castling candidates.

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::game_state::GameState;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Column of both kings at the start.
const KING_HOME_COL: u8 = 4;

impl GameState {
    /// Append castling candidates for the side to move.
    ///
    /// Nothing is produced unless the king stands on its home square, is not
    /// attacked, and has no enemy pawn directly in front of it. The pawn test
    /// is a positional shortcut, not a full check-after-move validation; the
    /// legality filter still vets each candidate afterwards.
    pub(crate) fn castle_moves(&self, moves: &mut Vec<Move>) {
        let us = self.side_to_move;
        let king_sq = self.king_square(us);

        if king_sq != Square::new(us.home_row(), KING_HOME_COL) {
            return;
        }
        if !CastleSide::ALL.iter().any(|&side| self.castling.has(us, side)) {
            return;
        }
        if self.square_under_attack(king_sq) {
            return;
        }
        let enemy_pawn = Piece::new(PieceKind::Pawn, us.flip());
        if let Some(ahead) = king_sq.offset(us.pawn_direction(), 0)
            && self.board.holds(ahead, enemy_pawn)
        {
            return;
        }

        for side in CastleSide::ALL {
            if self.castling.has(us, side)
                && let Some(mv) = self.castle_move(king_sq, side)
            {
                moves.push(mv);
            }
        }
    }

    /// King-side needs f and g empty; queen-side needs d, c and b empty.
    /// Either way the rook must be home and the two squares the king
    /// crosses must not be attacked.
    fn castle_move(&self, king_sq: Square, side: CastleSide) -> Option<Move> {
        let us = self.side_to_move;
        let (step, gap): (i8, i8) = match side {
            CastleSide::KingSide => (1, 2),
            CastleSide::QueenSide => (-1, 3),
        };

        for i in 1..=gap {
            if !self.board.is_empty(king_sq.offset(0, step * i)?) {
                return None;
            }
        }

        let rook_sq = Square::new(king_sq.row(), side.rook_home_col());
        if !self.board.holds(rook_sq, Piece::new(PieceKind::Rook, us)) {
            return None;
        }

        for i in 1..=2 {
            if self.square_under_attack(king_sq.offset(0, step * i)?) {
                return None;
            }
        }

        let to = king_sq.offset(0, 2 * step)?;
        Some(Move::castle(king_sq, to, &self.board))
    }
}
