//! Core chess rules: board representation, move generation, make/undo and
//! terminal-state detection.

mod attack;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod game_state;
mod legal;
mod make_move;
mod material;
mod movegen;
pub mod notation;
pub mod perft;
mod piece;
mod piece_kind;
mod square;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::{BoardError, SquareError};
pub use game_state::{GameState, Outcome};
pub use material::MaterialCount;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
