//! Line-driven game session: reads commands, applies them to a
//! [`GameState`], and reports back in plain text.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use castellan_core::{GameState, Move, Square, notation};

use crate::command::{Command, HELP, SessionOption, parse_command};
use crate::error::PlayError;

/// Display knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Redraw the board after each change.
    pub show_board: bool,
    /// List legal moves after each change.
    pub show_moves: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            show_moves: false,
        }
    }
}

/// Whether the session keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One game played through text commands.
///
/// The legal-move list is regenerated after every move, undo and reset, and
/// picked squares are matched against it by identity. Output goes to `out`.
pub struct Session<W: Write> {
    state: GameState,
    legal: Vec<Move>,
    selected: Option<Square>,
    config: SessionConfig,
    out: W,
}

impl<W: Write> Session<W> {
    /// Create a session on a new game with the default configuration.
    pub fn new(out: W) -> Self {
        Self::with_config(out, SessionConfig::default())
    }

    pub fn with_config(out: W, config: SessionConfig) -> Self {
        let mut state = GameState::new();
        let legal = state.valid_moves();
        Self {
            state,
            legal,
            selected: None,
            config,
            out,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Legal moves for the position on the board.
    pub fn legal_moves(&self) -> &[Move] {
        &self.legal
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Consume the session and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Malformed commands are reported and skipped; only I/O failures end
    /// the session early.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), PlayError> {
        info!("castellan session started");
        self.report_position()?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(cmd) => {
                    if self.execute(cmd)? == Flow::Quit {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(self.out, "error: {e}")?;
                }
            }
        }

        info!(moves = self.state.move_log().len(), "castellan session ended");
        Ok(())
    }

    /// Run one parsed command.
    pub fn execute(&mut self, cmd: Command) -> Result<Flow, PlayError> {
        match cmd {
            Command::Move { from, to } => self.pick(from, to, false)?,
            Command::Select(sq) => self.handle_select(sq)?,
            Command::Undo => self.handle_undo()?,
            Command::Reset => self.handle_reset()?,
            Command::Board => writeln!(self.out, "{}", self.state.board().pretty())?,
            Command::Log => self.handle_log()?,
            Command::Moves => self.list_moves()?,
            Command::Set(option) => self.handle_set(option)?,
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Empty => {}
        }
        Ok(Flow::Continue)
    }

    fn handle_select(&mut self, sq: Square) -> Result<(), PlayError> {
        if self.refuse_if_over()? {
            return Ok(());
        }

        match self.selected {
            Some(current) if current == sq => {
                self.selected = None;
                writeln!(self.out, "selection cleared")?;
            }
            Some(from) => self.pick(from, sq, true)?,
            None => {
                self.selected = Some(sq);
                let mut targets: Vec<Square> = self
                    .legal
                    .iter()
                    .filter(|mv| mv.from() == sq)
                    .map(|mv| mv.to())
                    .collect();
                targets.sort();
                if targets.is_empty() {
                    writeln!(self.out, "{sq}: no legal moves")?;
                } else {
                    let listed: Vec<String> = targets.iter().map(Square::to_string).collect();
                    writeln!(self.out, "{sq}: {}", listed.join(" "))?;
                }
            }
        }
        Ok(())
    }

    /// Try the move `from`-`to`. When the pick came from two selections an
    /// illegal pick leaves `to` selected.
    fn pick(&mut self, from: Square, to: Square, reselect: bool) -> Result<(), PlayError> {
        if self.refuse_if_over()? {
            return Ok(());
        }

        let picked = Move::new(from, to, self.state.board());
        let Some(mv) = self.legal.iter().copied().find(|mv| *mv == picked) else {
            debug!(mv = %picked.coordinates(), "illegal pick");
            self.selected = reselect.then_some(to);
            writeln!(self.out, "illegal move: {}", picked.coordinates())?;
            return Ok(());
        };

        let mover = self.state.side_to_move();
        self.state.make_move(mv);
        self.selected = None;
        writeln!(self.out, "{} played {mv}", mover.name())?;
        self.after_change()
    }

    fn handle_undo(&mut self) -> Result<(), PlayError> {
        let Some(last) = self.state.move_log().last().copied() else {
            writeln!(self.out, "nothing to undo")?;
            return Ok(());
        };
        self.state.undo_move();
        self.selected = None;
        writeln!(self.out, "took back {last}")?;
        self.after_change()
    }

    fn handle_reset(&mut self) -> Result<(), PlayError> {
        self.state.reset();
        self.selected = None;
        writeln!(self.out, "new game")?;
        self.after_change()
    }

    fn handle_log(&mut self) -> Result<(), PlayError> {
        if self.state.move_log().is_empty() {
            writeln!(self.out, "no moves yet")?;
        } else {
            writeln!(self.out, "{}", notation::transcript(self.state.move_log()))?;
        }
        Ok(())
    }

    fn handle_set(&mut self, option: SessionOption) -> Result<(), PlayError> {
        let (name, value) = match option {
            SessionOption::ShowBoard(on) => {
                self.config.show_board = on;
                ("board", on)
            }
            SessionOption::ShowMoves(on) => {
                self.config.show_moves = on;
                ("moves", on)
            }
        };
        debug!(option = name, value, "session option changed");
        writeln!(self.out, "{name} {}", if value { "on" } else { "off" })?;
        Ok(())
    }

    fn list_moves(&mut self) -> Result<(), PlayError> {
        let mut coords: Vec<String> = self.legal.iter().map(|mv| mv.coordinates()).collect();
        coords.sort();
        writeln!(self.out, "{} legal moves: {}", coords.len(), coords.join(" "))?;
        Ok(())
    }

    /// Regenerate the legal list and report the new position.
    fn after_change(&mut self) -> Result<(), PlayError> {
        self.legal = self.state.valid_moves();
        if let Some(outcome) = self.state.outcome() {
            info!(%outcome, "game over");
        }
        self.report_position()
    }

    fn report_position(&mut self) -> Result<(), PlayError> {
        if self.config.show_board {
            writeln!(self.out, "{}", self.state.board().pretty())?;
        }
        if self.config.show_moves {
            self.list_moves()?;
        }

        if let Some(outcome) = self.state.outcome() {
            writeln!(self.out, "game over: {outcome}")?;
        } else if self.state.in_check() {
            writeln!(self.out, "{} to move, in check", self.state.side_to_move().name())?;
        } else {
            writeln!(self.out, "{} to move", self.state.side_to_move().name())?;
        }
        Ok(())
    }

    /// Print the result and return `true` when the game has ended.
    fn refuse_if_over(&mut self) -> Result<bool, PlayError> {
        match self.state.outcome() {
            Some(outcome) => {
                writeln!(self.out, "game over: {outcome}; undo or reset to continue")?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use castellan_core::{Color, Outcome, Piece, Square};

    use super::*;

    fn run_script(script: &str) -> (Session<Vec<u8>>, String) {
        let mut session = Session::new(Vec::new());
        session.run(script.as_bytes()).unwrap();
        let output = String::from_utf8(session.out.clone()).unwrap();
        (session, output)
    }

    #[test]
    fn start_prints_board_and_side() {
        let (_, output) = run_script("");
        assert!(output.starts_with("8  r n b q k b n r"));
        assert!(output.contains("white to move"));
    }

    #[test]
    fn glued_and_spaced_moves() {
        let (session, output) = run_script("e2e4\ne7 e5\n");
        assert_eq!(session.state().move_log().len(), 2);
        assert!(output.contains("white played e4"));
        assert!(output.contains("black played e5"));
        assert_eq!(session.state().board().get(Square::E5), Some(Piece::BLACK_PAWN));
    }

    #[test]
    fn illegal_move_is_reported() {
        let (session, output) = run_script("e2e5\n");
        assert!(output.contains("illegal move: e2e5"));
        assert!(session.state().move_log().is_empty());
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn selection_flow() {
        let mut session = Session::new(Vec::new());
        session.execute(Command::Select(Square::G1)).unwrap();
        assert_eq!(session.selected(), Some(Square::G1));
        session.execute(Command::Select(Square::G1)).unwrap();
        assert_eq!(session.selected(), None);

        session.execute(Command::Select(Square::E2)).unwrap();
        session.execute(Command::Select(Square::E5)).unwrap();
        assert_eq!(session.selected(), Some(Square::E5));
        assert!(session.state().move_log().is_empty());

        session.execute(Command::Select(Square::E5)).unwrap();
        session.execute(Command::Select(Square::G1)).unwrap();
        session.execute(Command::Select(Square::F3)).unwrap();
        assert_eq!(session.selected(), None);
        assert_eq!(session.state().board().get(Square::F3), Some(Piece::WHITE_KNIGHT));

        let output = String::from_utf8(session.into_inner()).unwrap();
        assert!(output.contains("g1: f3 h3"));
        assert!(output.contains("selection cleared"));
        assert!(output.contains("illegal move: e2e5"));
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let (session, output) = run_script("f2f3\ne7e5\ng2g4\nd8h4\na7a6\n");
        assert_eq!(
            session.state().outcome(),
            Some(Outcome::Checkmate { winner: Color::Black })
        );
        assert!(session.legal_moves().is_empty());
        assert!(output.contains("game over: black wins by checkmate"));
        assert!(output.contains("undo or reset to continue"));
        assert_eq!(session.state().move_log().len(), 4);
    }

    #[test]
    fn undo_reopens_finished_game() {
        let (session, output) = run_script("f2f3\ne7e5\ng2g4\nd8h4\nundo\nd8g5\n");
        assert!(output.contains("took back Qh4"));
        assert_eq!(session.state().outcome(), None);
        assert_eq!(session.state().board().get(Square::G5), Some(Piece::BLACK_QUEEN));
    }

    #[test]
    fn undo_on_new_game() {
        let (session, output) = run_script("undo\n");
        assert!(output.contains("nothing to undo"));
        assert!(session.state().move_log().is_empty());
        assert_eq!(session.legal_moves().len(), 20);
    }

    #[test]
    fn reset_starts_over() {
        let (session, output) = run_script("e2e4\nreset\n");
        assert!(output.contains("new game"));
        assert!(session.state().move_log().is_empty());
        assert!(session.state().white_to_move());
    }

    #[test]
    fn log_prints_transcript() {
        let (_, output) = run_script("log\ne2e4\ne7e5\ng1f3\nlog\n");
        assert!(output.contains("no moves yet"));
        assert!(output.contains("1. e4 e5 2. Nf3"));
    }

    #[test]
    fn set_changes_config() {
        let (session, output) = run_script("set board off\nset moves on\ne2e4\n");
        assert_eq!(
            session.config(),
            SessionConfig { show_board: false, show_moves: true }
        );
        assert!(output.contains("board off"));
        assert!(output.contains("20 legal moves"));
        // Only the opening diagram is drawn.
        assert_eq!(output.matches("a b c d e f g h").count(), 1);
    }

    #[test]
    fn parse_errors_do_not_stop_the_session() {
        let (session, output) = run_script("fly\nz9\ne2e4\n");
        assert!(output.contains("error: unknown command: fly"));
        assert!(output.contains("error: invalid square: \"z9\""));
        assert_eq!(session.state().move_log().len(), 1);
    }

    #[test]
    fn quit_stops_reading() {
        let (session, _) = run_script("e2e4\nquit\ne7e5\n");
        assert_eq!(session.state().move_log().len(), 1);
    }

    #[test]
    fn check_is_announced() {
        let (_, output) = run_script("e2e4\nf7f6\nd1h5\n");
        assert!(output.contains("black to move, in check"));
    }
}
