//! Session configuration: the target words, board size, and random source.

use crate::error::ConfigError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

pub const DEFAULT_GRID_SIZE: usize = 10;
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Everything needed to start a new game.
///
/// Built through [`SessionConfig::new`], which guarantees every word is a
/// non-empty uppercase ASCII string no longer than the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    words: Vec<String>,
    grid_size: usize,
    max_attempts: usize,
    seed: Option<u64>,
}

impl SessionConfig {
    /// Normalise and validate a word list for a `grid_size x grid_size` board.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the list is empty, the size is zero, or any
    /// word is blank, non-alphabetic, duplicated, or longer than the board.
    pub fn new<S: AsRef<str>>(words: &[S], grid_size: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            words: normalize_words(words, grid_size)?,
            grid_size,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        })
    }

    /// Make generation reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Change the per-word placement budget.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMaxAttempts`] for a budget of zero.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Result<Self, ConfigError> {
        if max_attempts == 0 {
            return Err(ConfigError::InvalidMaxAttempts);
        }
        self.max_attempts = max_attempts;
        Ok(self)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Random source for a run of games: seeded when a seed is configured,
    /// otherwise drawn from OS entropy.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Trim and uppercase every word, then check it against a
/// `grid_size x grid_size` board. Shared by every way of starting a session.
pub(crate) fn normalize_words<S: AsRef<str>>(
    words: &[S],
    grid_size: usize,
) -> Result<Vec<String>, ConfigError> {
    if grid_size == 0 {
        return Err(ConfigError::InvalidGridSize(grid_size));
    }
    if words.is_empty() {
        return Err(ConfigError::EmptyWordList);
    }

    let mut seen = HashSet::new();
    let mut normalized = Vec::with_capacity(words.len());
    for word in words {
        let word = word.as_ref().trim().to_uppercase();
        if word.is_empty() {
            return Err(ConfigError::EmptyWord);
        }
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidWord(word));
        }
        let len = word.len();
        if len > grid_size {
            return Err(ConfigError::WordTooLong {
                word,
                len,
                grid_size,
            });
        }
        if !seen.insert(word.clone()) {
            return Err(ConfigError::DuplicateWord(word));
        }
        normalized.push(word);
    }
    Ok(normalized)
}
