//! Error types for session configuration and board interaction.

use std::fmt;

/// Problems detected while building a [`crate::config::SessionConfig`] or a fixed board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No target words were supplied.
    EmptyWordList,

    /// The board must be at least one cell wide.
    InvalidGridSize(usize),

    /// A blank line or empty string was given as a target word.
    EmptyWord,

    /// The word contains something other than ASCII letters.
    InvalidWord(String),

    /// The word cannot fit on the board in any direction.
    WordTooLong {
        word: String,
        len: usize,
        grid_size: usize,
    },

    /// The same word appears twice in the list.
    DuplicateWord(String),

    /// The placement retry budget must allow at least one attempt.
    InvalidMaxAttempts,

    /// A fixed board is not square or holds a non-letter.
    InvalidGrid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWordList => write!(f, "the word list is empty"),
            Self::InvalidGridSize(size) => write!(f, "invalid grid size {size}"),
            Self::EmptyWord => write!(f, "the word list contains an empty word"),
            Self::InvalidWord(word) => {
                write!(f, "'{word}' contains characters other than letters")
            }
            Self::WordTooLong {
                word,
                len,
                grid_size,
            } => write!(
                f,
                "'{word}' has {len} letters and does not fit in a {grid_size}x{grid_size} grid"
            ),
            Self::DuplicateWord(word) => write!(f, "'{word}' appears more than once"),
            Self::InvalidMaxAttempts => write!(f, "placement needs at least one attempt"),
            Self::InvalidGrid(reason) => write!(f, "invalid grid: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised while a session is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A click landed outside the board. The session is left untouched.
    OutOfBounds { row: usize, col: usize, size: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { row, col, size } => write!(
                f,
                "cell ({row}, {col}) is outside the {size}x{size} grid"
            ),
        }
    }
}

impl std::error::Error for SessionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_too_long_message() {
        let err = ConfigError::WordTooLong {
            word: "TYPESCRIPT".to_string(),
            len: 10,
            grid_size: 8,
        };
        assert_eq!(
            err.to_string(),
            "'TYPESCRIPT' has 10 letters and does not fit in a 8x8 grid"
        );
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = SessionError::OutOfBounds {
            row: 4,
            col: 0,
            size: 4,
        };
        assert_eq!(err.to_string(), "cell (4, 0) is outside the 4x4 grid");
    }
}
