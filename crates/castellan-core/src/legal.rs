//! Legal move filtering and terminal-state classification.

use tracing::{debug, trace};

use crate::chess_move::Move;
use crate::game_state::GameState;
use crate::material::MaterialCount;
use crate::square::Square;

impl GameState {
    /// Generate every legal move for the side to move.
    ///
    /// Each pseudo-legal candidate (castling included) is played and taken
    /// back; a candidate is dropped when it leaves the mover's king
    /// attacked. The position is identical afterwards, but the checkmate,
    /// stalemate and draw flags are updated from the result.
    pub fn valid_moves(&mut self) -> Vec<Move> {
        let mut moves = self.pseudo_legal_moves();
        self.castle_moves(&mut moves);
        moves.retain(|&mv| !self.exposes_king(mv));
        self.classify(&moves);
        moves
    }

    /// Legal moves that start on `sq`.
    pub fn moves_from(&mut self, sq: Square) -> Vec<Move> {
        let mut moves = self.valid_moves();
        moves.retain(|mv| mv.from() == sq);
        moves
    }

    /// Play `mv`, test the mover's king, and take it back.
    fn exposes_king(&mut self, mv: Move) -> bool {
        let mover = self.side_to_move;
        self.make_move(mv);
        let exposed = self.is_attacked_by(self.king_square(mover), self.side_to_move);
        self.undo_move();
        if exposed {
            trace!(mv = %mv.coordinates(), "rejected: leaves king attacked");
        }
        exposed
    }

    /// Set the terminal flags for the legal list just generated.
    ///
    /// Mate and stalemate only ever get set here; undo clears them. The
    /// material draw is evaluated on its own and never cleared.
    fn classify(&mut self, moves: &[Move]) {
        if moves.is_empty() {
            if self.in_check() {
                self.checkmate = true;
                debug!(loser = self.side_to_move.name(), "checkmate");
            } else {
                self.stalemate = true;
                debug!(side = self.side_to_move.name(), "stalemate");
            }
        }

        if MaterialCount::of(&self.board).is_insufficient() && !self.draw {
            self.draw = true;
            debug!("draw by insufficient material");
        }
    }
}
