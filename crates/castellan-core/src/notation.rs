//! Move-log transcripts in short notation.

use std::fmt::Write;

use crate::chess_move::Move;

/// Format a move log as numbered pairs, e.g. `1. e4 e5 2. Nf3`.
///
/// The first move in the log is taken to be White's. Each move uses the
/// [`Display`](std::fmt::Display) notation of [`Move`].
pub fn transcript(log: &[Move]) -> String {
    let mut out = String::new();
    for (number, pair) in log.chunks(2).enumerate() {
        if number > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}. {}", number + 1, pair[0]);
        if let Some(reply) = pair.get(1) {
            let _ = write!(out, " {reply}");
        }
    }
    out
}
