//! Move execution and reversal via make/undo on the game state.

use tracing::trace;

use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::game_state::GameState;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Rook origin and destination for a castling move, from the king's move.
fn castle_rook_squares(mv: Move) -> (Square, Square) {
    let row = mv.to().row();
    let col = mv.to().col();
    if col > mv.from().col() {
        (Square::new(row, col + 1), Square::new(row, col - 1))
    } else {
        (Square::new(row, col - 2), Square::new(row, col + 1))
    }
}

/// The castling side whose rook starts on `sq` for `color`, if any.
fn rook_home_side(sq: Square, color: Color) -> Option<CastleSide> {
    if sq.row() != color.home_row() {
        return None;
    }
    CastleSide::from_rook_col(sq.col())
}

/// Rights left after `mv`: a king move drops both of its side's rights, a
/// rook leaving its home square drops that side's right, and a rook
/// captured on its home square drops its owner's right.
fn revoke_castling(mut rights: CastleRights, mv: Move) -> CastleRights {
    if let Some(piece) = mv.piece_moved() {
        match piece.kind() {
            PieceKind::King => rights = rights.remove_color(piece.color()),
            PieceKind::Rook => {
                if let Some(side) = rook_home_side(mv.from(), piece.color()) {
                    rights = rights.remove_side(piece.color(), side);
                }
            }
            _ => {}
        }
    }

    if let Some(victim) = mv.piece_captured()
        && victim.is(PieceKind::Rook)
        && let Some(side) = rook_home_side(mv.to(), victim.color())
    {
        rights = rights.remove_side(victim.color(), side);
    }

    rights
}

/// Square of the pawn removed by an en passant capture: the mover's row,
/// the destination's column.
#[inline]
fn en_passant_victim_square(mv: Move) -> Square {
    Square::new(mv.from().row(), mv.to().col())
}

impl GameState {
    /// Apply a move in place.
    ///
    /// The move is trusted to come from [`valid_moves`](GameState::valid_moves)
    /// (or to compare equal to one). A move whose origin was empty when it
    /// was built is ignored.
    pub fn make_move(&mut self, mv: Move) {
        let Some(piece) = mv.piece_moved() else {
            trace!(mv = %mv.coordinates(), "ignoring move from an empty square");
            return;
        };
        let us = piece.color();
        let (from, to) = (mv.from(), mv.to());

        self.board.set(from, None);
        self.board.set(to, Some(piece));
        self.move_log.push(mv);
        self.side_to_move = self.side_to_move.flip();

        if piece.is(PieceKind::King) {
            self.king_squares[us.index()] = to;
        }

        match mv.kind() {
            MoveKind::Normal => {}
            MoveKind::Promotion => {
                self.board.set(to, Some(Piece::new(PieceKind::PROMOTION, us)));
            }
            MoveKind::EnPassant => {
                self.board.set(en_passant_victim_square(mv), None);
            }
            MoveKind::Castle => {
                let (rook_from, rook_to) = castle_rook_squares(mv);
                let rook = self.board.get(rook_from);
                self.board.set(rook_from, None);
                self.board.set(rook_to, rook);
            }
        }

        // Only a double advance leaves a target; every other move clears it.
        self.en_passant = if mv.is_double_pawn_push() {
            Some(Square::new((from.row() + to.row()) / 2, from.col()))
        } else {
            None
        };

        self.castling = revoke_castling(self.castling, mv);
        self.castling_log.push(self.castling);
        self.en_passant_log.push(self.en_passant);
    }

    /// Revert the last move. Does nothing when no move has been played.
    ///
    /// Also clears the checkmate and stalemate flags, which describe a
    /// position that no longer exists. The draw flag is left alone.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            trace!("undo with an empty move log ignored");
            return;
        };
        let (from, to) = (mv.from(), mv.to());

        self.board.set(from, mv.piece_moved());
        self.board.set(to, mv.piece_captured());
        self.side_to_move = self.side_to_move.flip();

        if let Some(piece) = mv.piece_moved()
            && piece.is(PieceKind::King)
        {
            self.king_squares[piece.color().index()] = from;
        }

        if mv.is_en_passant() {
            self.board.set(to, None);
            self.board.set(en_passant_victim_square(mv), mv.piece_captured());
        }

        // After an en passant capture this restores the target on the
        // capture square; after a double advance it drops the target that
        // advance created.
        self.en_passant_log.pop();
        self.en_passant = self.en_passant_log.last().copied().flatten();

        self.castling_log.pop();
        if let Some(&rights) = self.castling_log.last() {
            self.castling = rights;
        }

        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(mv);
            let rook = self.board.get(rook_to);
            self.board.set(rook_to, None);
            self.board.set(rook_from, rook);
        }

        self.checkmate = false;
        self.stalemate = false;
    }
}
