//! Session command parsing.

use castellan_core::Square;

use crate::error::PlayError;

/// A session setting changed with `set <name> <on|off>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Redraw the board after each move.
    ShowBoard(bool),
    /// List legal moves after each move.
    ShowMoves(bool),
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `e2e4` or `e2 e4` -- pick both squares at once.
    Move { from: Square, to: Square },
    /// `e2` -- select a square, or complete a pick started earlier.
    Select(Square),
    /// `undo` -- take back the last move.
    Undo,
    /// `reset` -- start a new game.
    Reset,
    /// `board` -- print the board.
    Board,
    /// `log` -- print the move transcript.
    Log,
    /// `moves` -- list the legal moves.
    Moves,
    /// `set <name> <on|off>` -- change a session option.
    Set(SessionOption),
    /// `help` -- list the commands.
    Help,
    /// `quit` -- end the session.
    Quit,
    /// Blank line.
    Empty,
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, PlayError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return Ok(Command::Empty);
    };

    match first {
        "undo" => Ok(Command::Undo),
        "reset" => Ok(Command::Reset),
        "board" => Ok(Command::Board),
        "log" => Ok(Command::Log),
        "moves" => Ok(Command::Moves),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "set" => parse_set(&tokens[1..]),
        _ => parse_squares(&tokens),
    }
}

/// Parse `set` arguments: an option name and `on`/`off`.
fn parse_set(tokens: &[&str]) -> Result<Command, PlayError> {
    let name = tokens
        .first()
        .ok_or(PlayError::MissingArgument { command: "set" })?;
    let value = tokens.get(1);

    let option = match *name {
        "board" => SessionOption::ShowBoard(parse_switch("board", value)?),
        "moves" => SessionOption::ShowMoves(parse_switch("moves", value)?),
        other => {
            return Err(PlayError::UnknownOption {
                name: other.to_string(),
            });
        }
    };
    Ok(Command::Set(option))
}

fn parse_switch(name: &'static str, token: Option<&&str>) -> Result<bool, PlayError> {
    let value = token.ok_or(PlayError::MissingArgument { command: "set" })?;
    match *value {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        other => Err(PlayError::InvalidOptionValue {
            name,
            value: other.to_string(),
        }),
    }
}

/// Parse `e2`, `e2e4` or `e2 e4`.
fn parse_squares(tokens: &[&str]) -> Result<Command, PlayError> {
    let first = tokens[0];
    if !looks_like_square(first) {
        return Err(PlayError::UnknownCommand {
            command: first.to_string(),
        });
    }

    match (first.len(), &tokens[1..]) {
        (2, []) => Ok(Command::Select(first.parse()?)),
        (2, [second]) => Ok(Command::Move {
            from: first.parse()?,
            to: second.parse()?,
        }),
        (4, []) => {
            let (from, to) = first.split_at(2);
            Ok(Command::Move {
                from: from.parse()?,
                to: to.parse()?,
            })
        }
        _ => Err(PlayError::UnknownCommand {
            command: first.to_string(),
        }),
    }
}

/// A letter followed by a digit, possibly with a second square glued on.
/// Bad coordinates that pass this check are reported as invalid squares.
fn looks_like_square(token: &str) -> bool {
    let bytes = token.as_bytes();
    matches!(bytes.len(), 2 | 4) && bytes[0].is_ascii_alphabetic() && bytes[1].is_ascii_digit()
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
commands:
  e2e4 | e2 e4   play a move
  e2             select a square (again to clear, another square to move)
  undo           take back the last move
  reset          start a new game
  board          print the board
  log            print the move list
  moves          list legal moves
  set board on|off
  set moves on|off
  help           show this text
  quit           leave";
