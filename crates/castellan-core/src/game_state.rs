//! Game state: the board plus everything make/undo has to carry.

use std::fmt;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::square::Square;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move has no legal move and is in check.
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    /// The side to move has no legal move and is not in check.
    Stalemate,
    /// Neither side has enough material to mate.
    InsufficientMaterial,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "{} wins by checkmate", winner.name()),
            Outcome::Stalemate => write!(f, "stalemate"),
            Outcome::InsufficientMaterial => write!(f, "draw by insufficient material"),
        }
    }
}

/// A game in progress, mutated in place by [`make_move`](GameState::make_move)
/// and [`undo_move`](GameState::undo_move).
///
/// The move log, castling-rights log and en passant log move together: the
/// two snapshot logs always hold one more entry than the move log, the extra
/// entry being the snapshot taken when the state was created.
///
/// Nothing here is synchronized. A search that explores variations should
/// work on its own clone.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    /// King square per color, indexed by [`Color::index()`].
    pub(crate) king_squares: [Square; Color::COUNT],
    pub(crate) en_passant: Option<Square>,
    pub(crate) castling: CastleRights,
    pub(crate) move_log: Vec<Move>,
    pub(crate) castling_log: Vec<CastleRights>,
    pub(crate) en_passant_log: Vec<Option<Square>>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
    pub(crate) draw: bool,
}

impl GameState {
    /// Start a new game from the standard position, White to move.
    pub fn new() -> GameState {
        GameState::with_parts(
            Board::starting_position(),
            Color::White,
            [Square::E1, Square::E8],
            CastleRights::ALL,
        )
    }

    /// Start from a hand-placed board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if either side does not have exactly one king
    /// or a pawn stands on the first or eighth rank.
    pub fn from_board(
        board: Board,
        side_to_move: Color,
        castling: CastleRights,
    ) -> Result<GameState, BoardError> {
        board.validate()?;
        let kings = [board.find_king(Color::White)?, board.find_king(Color::Black)?];
        Ok(GameState::with_parts(board, side_to_move, kings, castling))
    }

    fn with_parts(
        board: Board,
        side_to_move: Color,
        king_squares: [Square; Color::COUNT],
        castling: CastleRights,
    ) -> GameState {
        GameState {
            board,
            side_to_move,
            king_squares,
            en_passant: None,
            castling,
            move_log: Vec::new(),
            castling_log: vec![castling],
            en_passant_log: vec![None],
            checkmate: false,
            stalemate: false,
            draw: false,
        }
    }

    /// Throw the game away and start again from the standard position.
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    /// Cached king location for `color`.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Square a pawn may capture onto en passant this move, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Moves played so far, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Castling rights after each move, starting with the initial rights.
    #[inline]
    pub fn castling_log(&self) -> &[CastleRights] {
        &self.castling_log
    }

    /// En passant target after each move, starting with the initial target.
    #[inline]
    pub fn en_passant_log(&self) -> &[Option<Square>] {
        &self.en_passant_log
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// Insufficient-material draw. Once set it stays set until [`reset`](GameState::reset).
    #[inline]
    pub fn is_draw(&self) -> bool {
        self.draw
    }

    /// Terminal result from the flags set by the last
    /// [`valid_moves`](GameState::valid_moves) call.
    ///
    /// Stalemate is reported before a material draw, and a material draw
    /// before checkmate.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.stalemate {
            Some(Outcome::Stalemate)
        } else if self.draw {
            Some(Outcome::InsufficientMaterial)
        } else if self.checkmate {
            Some(Outcome::Checkmate {
                winner: self.side_to_move.flip(),
            })
        } else {
            None
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
