//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

/// Generate advances and captures for the pawn on `from`.
///
/// Advances need empty squares; the double advance is only available from
/// the start row. Diagonal steps need an enemy piece, or must land on the
/// current en passant target.
pub(super) fn gen_pawn(
    board: &Board,
    from: Square,
    us: Color,
    en_passant: Option<Square>,
    moves: &mut Vec<Move>,
) {
    let dir = us.pawn_direction();

    if let Some(one) = from.offset(dir, 0)
        && board.is_empty(one)
    {
        moves.push(Move::new(from, one, board));

        if from.row() == us.pawn_start_row()
            && let Some(two) = one.offset(dir, 0)
            && board.is_empty(two)
        {
            moves.push(Move::new(from, two, board));
        }
    }

    for dc in [-1, 1] {
        let Some(to) = from.offset(dir, dc) else {
            continue;
        };
        match board.color_on(to) {
            Some(color) if color != us => moves.push(Move::new(from, to, board)),
            None if en_passant == Some(to) => moves.push(Move::en_passant(from, to, board)),
            _ => {}
        }
    }
}
