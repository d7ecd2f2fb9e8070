//! Insufficient-material draw detection.

use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;

/// Per-color piece counts for every kind except kings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaterialCount {
    counts: [[u8; PieceKind::COUNT]; Color::COUNT],
}

impl MaterialCount {
    /// Count the pieces on `board`.
    pub fn of(board: &Board) -> MaterialCount {
        let mut material = MaterialCount::default();
        for (_, piece) in board.pieces() {
            if !piece.is(PieceKind::King) {
                material.counts[piece.color().index()][piece.kind().index()] += 1;
            }
        }
        material
    }

    /// Number of `kind` pieces held by `color`.
    #[inline]
    pub fn count(&self, color: Color, kind: PieceKind) -> u8 {
        self.counts[color.index()][kind.index()]
    }

    /// All non-king pieces on the board.
    pub fn total(&self) -> u32 {
        self.counts.iter().flatten().map(|&n| u32::from(n)).sum()
    }

    /// Return `true` for the fixed set of drawn endings: bare kings, a king
    /// and one minor piece against a king, and with exactly two minors on
    /// the board, a bishop against an opposing knight or two knights of
    /// one color.
    pub fn is_insufficient(&self) -> bool {
        use Color::{Black, White};
        use PieceKind::{Bishop, Knight};

        match self.total() {
            0 => true,
            1 => Color::ALL
                .iter()
                .any(|&c| PieceKind::ALL.iter().any(|&k| k.is_minor() && self.count(c, k) == 1)),
            2 => {
                (self.count(Black, Bishop) == 1 && self.count(White, Knight) == 1)
                    || (self.count(White, Bishop) == 1 && self.count(Black, Knight) == 1)
                    || self.count(Black, Knight) == 2
                    || self.count(White, Knight) == 2
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MaterialCount;
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    fn kings_and(extra: &[(Square, Piece)]) -> MaterialCount {
        let mut board = Board::empty();
        board.set(Square::E1, Some(Piece::WHITE_KING));
        board.set(Square::E8, Some(Piece::BLACK_KING));
        for &(sq, piece) in extra {
            board.set(sq, Some(piece));
        }
        MaterialCount::of(&board)
    }

    #[test]
    fn starting_position_counts() {
        let material = MaterialCount::of(&Board::starting_position());
        assert_eq!(material.total(), 30);
        assert_eq!(material.count(Color::White, PieceKind::Pawn), 8);
        assert_eq!(material.count(Color::Black, PieceKind::Knight), 2);
        assert!(!material.is_insufficient());
    }

    #[test]
    fn bare_kings() {
        assert!(kings_and(&[]).is_insufficient());
    }

    #[test]
    fn single_minor() {
        assert!(kings_and(&[(Square::C3, Piece::WHITE_KNIGHT)]).is_insufficient());
        assert!(kings_and(&[(Square::C6, Piece::BLACK_BISHOP)]).is_insufficient());
    }

    #[test]
    fn single_major_or_pawn_is_enough() {
        assert!(!kings_and(&[(Square::A1, Piece::WHITE_ROOK)]).is_insufficient());
        assert!(!kings_and(&[(Square::D5, Piece::BLACK_QUEEN)]).is_insufficient());
        assert!(!kings_and(&[(Square::A2, Piece::WHITE_PAWN)]).is_insufficient());
    }

    #[test]
    fn two_minor_pairs() {
        assert!(
            kings_and(&[(Square::C3, Piece::WHITE_KNIGHT), (Square::C6, Piece::BLACK_BISHOP)])
                .is_insufficient()
        );
        assert!(
            kings_and(&[(Square::C3, Piece::WHITE_BISHOP), (Square::C6, Piece::BLACK_KNIGHT)])
                .is_insufficient()
        );
        assert!(
            kings_and(&[(Square::C3, Piece::WHITE_KNIGHT), (Square::D3, Piece::WHITE_KNIGHT)])
                .is_insufficient()
        );
        assert!(
            kings_and(&[(Square::C6, Piece::BLACK_KNIGHT), (Square::D6, Piece::BLACK_KNIGHT)])
                .is_insufficient()
        );
    }

    #[test]
    fn other_two_piece_sets_are_not_drawn() {
        assert!(
            !kings_and(&[(Square::C3, Piece::WHITE_BISHOP), (Square::D3, Piece::WHITE_BISHOP)])
                .is_insufficient()
        );
        assert!(
            !kings_and(&[(Square::C3, Piece::WHITE_BISHOP), (Square::C6, Piece::BLACK_BISHOP)])
                .is_insufficient()
        );
        assert!(
            !kings_and(&[(Square::C3, Piece::WHITE_KNIGHT), (Square::C6, Piece::BLACK_KNIGHT)])
                .is_insufficient()
        );
        assert!(
            !kings_and(&[(Square::C3, Piece::WHITE_BISHOP), (Square::D3, Piece::WHITE_KNIGHT)])
                .is_insufficient()
        );
    }
}
