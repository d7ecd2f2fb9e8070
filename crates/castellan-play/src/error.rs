//! Session errors.

use castellan_core::SquareError;

/// Errors that can occur while reading and running session commands.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// The first word of the line is not a command or a square.
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// The unrecognized word.
        command: String,
    },

    /// A command was given without an argument it needs.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command that was cut short.
        command: &'static str,
    },

    /// A coordinate could not be parsed.
    #[error(transparent)]
    InvalidSquare(#[from] SquareError),

    /// `set` named an option the session does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as typed.
        name: String,
    },

    /// `set` was given a value other than on/off.
    #[error("invalid value for {name}: {value} (expected on or off)")]
    InvalidOptionValue {
        /// The option being set.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
