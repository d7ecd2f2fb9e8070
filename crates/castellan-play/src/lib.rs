//! Text-mode play for castellan: command parsing and the game session loop.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, SessionOption};
pub use error::PlayError;
pub use session::{Flow, Session, SessionConfig};
