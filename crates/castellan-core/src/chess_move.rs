//! Move descriptor: one state transition, captured against the board it was built on.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The category of a chess move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Promotion,
    EnPassant,
    Castle,
}

/// A move from one square to another.
///
/// The moved and captured pieces are read from the board when the move is
/// built. Two moves are equal when their origin and destination match,
/// whatever their flags: a coordinate pair picked by a user can be looked
/// up in the legal-move list without knowing how the move is special.
#[derive(Clone, Copy)]
pub struct Move {
    from: Square,
    to: Square,
    moved: Option<Piece>,
    captured: Option<Piece>,
    kind: MoveKind,
}

impl Move {
    /// Build a move from two squares against the current board.
    ///
    /// The squares are trusted to be on the board. Promotion is inferred
    /// when a pawn reaches its far row.
    pub fn new(from: Square, to: Square, board: &Board) -> Move {
        let moved = board.get(from);
        let promotes = moved.is_some_and(|piece| {
            piece.is(PieceKind::Pawn) && to.row() == piece.color().promotion_row()
        });
        Move {
            from,
            to,
            moved,
            captured: board.get(to),
            kind: if promotes { MoveKind::Promotion } else { MoveKind::Normal },
        }
    }

    /// Build an en passant capture. The captured piece is the opponent's
    /// pawn even though the destination square is empty.
    pub fn en_passant(from: Square, to: Square, board: &Board) -> Move {
        let moved = board.get(from);
        let victim = moved.map(|piece| Piece::new(PieceKind::Pawn, piece.color().flip()));
        Move {
            from,
            to,
            moved,
            captured: victim,
            kind: MoveKind::EnPassant,
        }
    }

    /// Build a castling move from the king's origin and destination.
    pub fn castle(from: Square, to: Square, board: &Board) -> Move {
        Move {
            kind: MoveKind::Castle,
            ..Move::new(from, to, board)
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// The piece on the origin square when the move was built.
    #[inline]
    pub const fn piece_moved(self) -> Option<Piece> {
        self.moved
    }

    /// The piece this move removes, if any.
    #[inline]
    pub const fn piece_captured(self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Packed identity of the origin and destination squares.
    #[inline]
    pub const fn id(self) -> u16 {
        (self.from.index() as u16) << 6 | self.to.index() as u16
    }

    #[inline]
    pub fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_pawn_promotion(self) -> bool {
        self.kind == MoveKind::Promotion
    }

    #[inline]
    pub fn is_en_passant(self) -> bool {
        self.kind == MoveKind::EnPassant
    }

    #[inline]
    pub fn is_castle(self) -> bool {
        self.kind == MoveKind::Castle
    }

    /// Return `true` if the moved piece is of the given kind.
    #[inline]
    pub fn moves(self, kind: PieceKind) -> bool {
        self.moved.is_some_and(|piece| piece.is(kind))
    }

    /// Color of the moving side, if the origin was occupied.
    #[inline]
    pub fn color(self) -> Option<Color> {
        self.moved.map(Piece::color)
    }

    /// Return `true` for a pawn advancing two rows.
    pub fn is_double_pawn_push(self) -> bool {
        self.moves(PieceKind::Pawn) && self.from.row().abs_diff(self.to.row()) == 2
    }

    /// Coordinate form, e.g. `e2e4`.
    pub fn coordinates(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

/// Short notation: piece letter, `x` on captures, destination square.
///
/// Castling prints `O-O` / `O-O-O`. Pawns print without a letter and use
/// their origin file on captures. There are no check suffixes and no
/// disambiguation.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_castle() {
            return if self.to.col() > self.from.col() {
                write!(f, "O-O")
            } else {
                write!(f, "O-O-O")
            };
        }

        match self.moved {
            Some(piece) if piece.is(PieceKind::Pawn) => {
                if self.is_capture() {
                    write!(f, "{}x{}", self.from.file_char(), self.to)
                } else {
                    write!(f, "{}", self.to)
                }
            }
            Some(piece) => {
                let capture = if self.is_capture() { "x" } else { "" };
                write!(f, "{}{}{}", piece.kind().letter(), capture, self.to)
            }
            None => write!(f, "{}", self.coordinates()),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?})", self.coordinates(), self.kind)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{Move, MoveKind};
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn reads_pieces_from_board() {
        let board = Board::starting_position();
        let mv = Move::new(Square::E2, Square::E4, &board);
        assert_eq!(mv.from(), Square::E2);
        assert_eq!(mv.to(), Square::E4);
        assert_eq!(mv.piece_moved(), Some(Piece::WHITE_PAWN));
        assert_eq!(mv.piece_captured(), None);
        assert_eq!(mv.kind(), MoveKind::Normal);
        assert!(mv.is_double_pawn_push());
    }

    #[test]
    fn promotion_inferred_on_far_row() {
        let mut board = Board::empty();
        board.set(Square::B7, Some(Piece::WHITE_PAWN));
        board.set(Square::C8, Some(Piece::BLACK_ROOK));
        board.set(Square::G2, Some(Piece::BLACK_PAWN));
        assert!(Move::new(Square::B7, Square::B8, &board).is_pawn_promotion());
        let capture = Move::new(Square::B7, Square::C8, &board);
        assert!(capture.is_pawn_promotion());
        assert_eq!(capture.piece_captured(), Some(Piece::BLACK_ROOK));
        assert!(Move::new(Square::G2, Square::G1, &board).is_pawn_promotion());
        assert!(!Move::new(Square::G2, Square::G3, &board).is_pawn_promotion());
    }

    #[test]
    fn en_passant_captures_opponent_pawn() {
        let mut board = Board::empty();
        board.set(Square::E5, Some(Piece::WHITE_PAWN));
        board.set(Square::D5, Some(Piece::BLACK_PAWN));
        let mv = Move::en_passant(Square::E5, Square::D6, &board);
        assert!(mv.is_en_passant());
        assert!(board.is_empty(Square::D6));
        assert_eq!(mv.piece_captured(), Some(Piece::BLACK_PAWN));
    }

    #[test]
    fn equality_ignores_flags() {
        let board = Board::starting_position();
        let plain = Move::new(Square::E1, Square::G1, &board);
        let castle = Move::castle(Square::E1, Square::G1, &board);
        assert_eq!(plain, castle);
        assert_ne!(plain, Move::new(Square::E1, Square::C1, &board));

        let mut set = HashSet::new();
        set.insert(plain);
        set.insert(castle);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn identity_is_unique_per_pair() {
        let board = Board::empty();
        let mut ids = HashSet::new();
        for from in Square::all() {
            for to in Square::all() {
                assert!(ids.insert(Move::new(from, to, &board).id()));
            }
        }
    }

    #[test]
    fn notation() {
        let mut board = Board::starting_position();
        assert_eq!(format!("{}", Move::new(Square::E2, Square::E4, &board)), "e4");
        assert_eq!(format!("{}", Move::new(Square::G1, Square::F3, &board)), "Nf3");

        board.set(Square::D5, Some(Piece::BLACK_PAWN));
        board.set(Square::E4, Some(Piece::WHITE_PAWN));
        board.set(Square::F3, Some(Piece::WHITE_KNIGHT));
        assert_eq!(format!("{}", Move::new(Square::E4, Square::D5, &board)), "exd5");
        assert_eq!(format!("{}", Move::new(Square::F3, Square::D5, &board)), "Nxd5");
        assert_eq!(format!("{}", Move::castle(Square::E1, Square::G1, &board)), "O-O");
        assert_eq!(format!("{}", Move::castle(Square::E8, Square::C8, &board)), "O-O-O");
    }

    #[test]
    fn debug_shows_coordinates() {
        let board = Board::starting_position();
        let mv = Move::new(Square::D2, Square::D4, &board);
        assert_eq!(format!("{:?}", mv), "Move(d2d4 kind=Normal)");
        assert_eq!(mv.coordinates(), "d2d4");
    }
}
