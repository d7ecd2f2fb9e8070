//! Pseudo-legal move generation.
//!
//! Moves produced here obey each piece's movement rule but may leave the
//! mover's own king attacked. The legality filter in [`crate::legal`] removes
//! those; generating without that check is what lets the attack detector
//! reuse this code without recursing.

mod castling;
mod leapers;
mod pawns;
mod sliders;

use crate::chess_move::Move;
use crate::color::Color;
use crate::game_state::GameState;
use crate::piece_kind::PieceKind;

use self::leapers::{KING_OFFSETS, KNIGHT_OFFSETS, gen_leaper};
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS, gen_slider};

impl GameState {
    /// Every pseudo-legal move for the side to move, castling excluded.
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        self.pseudo_legal_moves_for(self.side_to_move)
    }

    /// Every pseudo-legal move `color` could make if it were its turn,
    /// castling excluded.
    pub(crate) fn pseudo_legal_moves_for(&self, color: Color) -> Vec<Move> {
        let board = &self.board;
        // The en passant target only ever belongs to the side to move.
        let en_passant = self.en_passant.filter(|_| color == self.side_to_move);
        let mut moves = Vec::with_capacity(48);

        for (from, piece) in board.pieces().filter(|&(_, piece)| piece.color() == color) {
            match piece.kind() {
                PieceKind::Pawn => gen_pawn(board, from, color, en_passant, &mut moves),
                PieceKind::Knight => gen_leaper(board, from, color, &KNIGHT_OFFSETS, &mut moves),
                PieceKind::Bishop => gen_slider(board, from, color, &BISHOP_DIRECTIONS, &mut moves),
                PieceKind::Rook => gen_slider(board, from, color, &ROOK_DIRECTIONS, &mut moves),
                PieceKind::Queen => gen_slider(board, from, color, &QUEEN_DIRECTIONS, &mut moves),
                PieceKind::King => gen_leaper(board, from, color, &KING_OFFSETS, &mut moves),
            }
        }

        moves
    }
}
