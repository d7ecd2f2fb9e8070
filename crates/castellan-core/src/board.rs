//! The 8x8 piece grid.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-row piece order from the a-file to the h-file.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement: an 8x8 grid of optional pieces, row 0 = rank 8.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board { grid: [[None; 8]; 8] }
    }

    /// Return the standard starting layout.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            let home = color.home_row();
            let pawns = color.pawn_start_row();
            for col in 0u8..8 {
                board.set(Square::new(home, col), Some(Piece::new(BACK_ROW[col as usize], color)));
                board.set(Square::new(pawns, col), Some(Piece::new(PieceKind::Pawn, color)));
            }
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row() as usize][sq.col() as usize]
    }

    /// Place a piece on (or clear) the given square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.grid[sq.row() as usize][sq.col() as usize] = piece;
    }

    /// Return `true` if the given square is empty.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(Piece::color)
    }

    /// Return `true` if `sq` holds exactly `piece`.
    #[inline]
    pub fn holds(&self, sq: Square, piece: Piece) -> bool {
        self.get(sq) == Some(piece)
    }

    /// Iterate over occupied squares in grid order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Borrow the raw rows, row 0 first, for drawing.
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.grid
    }

    /// Find the single king of `color`, or report how many there are.
    pub fn find_king(&self, color: Color) -> Result<Square, BoardError> {
        let king = Piece::new(PieceKind::King, color);
        let mut found = self.pieces().filter(|&(_, piece)| piece == king).map(|(sq, _)| sq);
        match (found.next(), found.count()) {
            (Some(sq), 0) => Ok(sq),
            (first, rest) => Err(BoardError::InvalidKingCount {
                color: color.name(),
                count: usize::from(first.is_some()) + rest,
            }),
        }
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            self.find_king(color)?;
        }

        let pawn_on_back_row = self.pieces().any(|(sq, piece)| {
            piece.is(PieceKind::Pawn) && (sq.row() == 0 || sq.row() == 7)
        });
        if pawn_on_back_row {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{}\n)", self.pretty())
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.0.rows().iter().enumerate() {
            write!(f, "{}  ", 8 - row)?;
            for (col, cell) in cells.iter().enumerate() {
                let c = cell.map_or('.', Piece::diagram_char);
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
