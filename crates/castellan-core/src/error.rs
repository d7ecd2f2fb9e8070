//! Error types for square parsing and board validation.

/// Errors from parsing a square coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// The text is not a file letter `a`-`h` followed by a rank digit `1`-`8`.
    #[error("invalid square: \"{input}\"")]
    InvalidAlgebraic {
        /// The rejected text.
        input: String,
    },
}

/// Errors from structural validation of a hand-placed [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: &'static str,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}
