//! Sliding piece generation: rooks, bishops and queens.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(super) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Walk each ray one step at a time. A ray ends at the board edge, after the
/// first enemy piece (included) or before the first friendly piece (excluded).
pub(super) fn gen_slider(
    board: &Board,
    from: Square,
    us: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(dr, dc) in directions {
        let mut cursor = from.offset(dr, dc);
        while let Some(to) = cursor {
            match board.color_on(to) {
                None => moves.push(Move::new(from, to, board)),
                Some(color) if color != us => {
                    moves.push(Move::new(from, to, board));
                    break;
                }
                Some(_) => break,
            }
            cursor = to.offset(dr, dc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS, gen_slider};
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn rook_on_empty_board() {
        let board = Board::empty();
        let mut moves = Vec::new();
        gen_slider(&board, Square::D4, Color::White, &ROOK_DIRECTIONS, &mut moves);
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn queen_in_corner() {
        let board = Board::empty();
        let mut moves = Vec::new();
        gen_slider(&board, Square::A1, Color::Black, &QUEEN_DIRECTIONS, &mut moves);
        assert_eq!(moves.len(), 21);
    }

    #[test]
    fn ray_stops_at_pieces() {
        let mut board = Board::empty();
        board.set(Square::C1, Some(Piece::WHITE_BISHOP));
        board.set(Square::E3, Some(Piece::BLACK_PAWN));
        board.set(Square::B2, Some(Piece::WHITE_PAWN));
        let mut moves = Vec::new();
        gen_slider(&board, Square::C1, Color::White, &BISHOP_DIRECTIONS, &mut moves);
        let targets: Vec<Square> = moves.iter().map(|mv| mv.to()).collect();
        assert_eq!(targets, vec![Square::D2, Square::E3]);
        assert_eq!(moves[1].piece_captured(), Some(Piece::BLACK_PAWN));
    }
}
