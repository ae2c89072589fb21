//! Selection engine: turns pairs of cell clicks into word guesses.
//!
//! # State Machine
//! - `NoSelection`: a click on a cell that is not found selects it and moves to
//!   `OneSelected`.
//! - `OneSelected(start)`: the next click is the end cell. The selection is
//!   cleared, the straight line from start to end is read forward and backward
//!   and compared with the words not found yet. The engine always returns to
//!   `NoSelection`.
//!
//! Clicks on found cells are ignored in both states. End points that do not
//! share a row, a column, or a 45° diagonal are rejected without a match.

use crate::config::{SessionConfig, normalize_words};
use crate::error::{ConfigError, SessionError};
use crate::generator::{self, Placement, Puzzle};
use crate::grid::{Grid, Position};
use crate::{debug_log, info_log};
use rand::Rng;

/// Explicit selection state of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    NoSelection,
    OneSelected(Position),
}

/// What a single click did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The cell is already found; nothing changed.
    Ignored,

    /// The cell was recorded as the start of a selection.
    Started(Position),

    /// The line spelled a pending word, forward or backward.
    Matched { word: String, path: Vec<Position> },

    /// The line did not spell any pending word.
    Missed { candidate: String },

    /// The two cells are not on a common row, column, or diagonal.
    NotALine { start: Position, end: Position },
}

/// Where the target words of a session ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PuzzleReport<'a> {
    pub placements: &'a [Placement],
    pub unplaced: &'a [String],
}

impl PuzzleReport<'_> {
    /// True when every target word is somewhere on the board.
    #[must_use]
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// One game: a board, its target words, and the words found so far.
#[derive(Clone, Debug)]
pub struct Session {
    grid: Grid,
    words: Vec<String>,
    found: Vec<String>,
    selection: Selection,
    placements: Vec<Placement>,
    unplaced: Vec<String>,
}

impl Session {
    /// Generate a fresh board for `config`.
    pub fn new<R: Rng>(config: &SessionConfig, rng: &mut R) -> Self {
        let puzzle = generator::generate(
            config.words(),
            config.grid_size(),
            config.max_attempts(),
            rng,
        );
        Self::from_puzzle(config.words().to_vec(), puzzle)
    }

    /// Start a session on a known board. Words go through the same
    /// normalisation as [`SessionConfig::new`] and are then located on the
    /// board so the placement report stays meaningful.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the list is empty or any word is blank,
    /// non-alphabetic, duplicated, or longer than the board.
    pub fn from_grid<S: AsRef<str>>(words: &[S], grid: Grid) -> Result<Self, ConfigError> {
        let words = normalize_words(words, grid.size())?;
        let mut placements = Vec::new();
        let mut unplaced = Vec::new();
        for word in &words {
            match generator::locate(&grid, word) {
                Some(placement) => placements.push(placement),
                None => unplaced.push(word.clone()),
            }
        }
        Ok(Self::from_puzzle(
            words,
            Puzzle {
                grid,
                placements,
                unplaced,
            },
        ))
    }

    fn from_puzzle(words: Vec<String>, puzzle: Puzzle) -> Self {
        Self {
            grid: puzzle.grid,
            words,
            found: Vec::new(),
            selection: Selection::NoSelection,
            placements: puzzle.placements,
            unplaced: puzzle.unplaced,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// All target words, in list order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words found so far, in the order they were found.
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    #[must_use]
    pub fn pending_words(&self) -> Vec<&str> {
        self.words
            .iter()
            .filter(|word| !self.found.contains(word))
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn is_found(&self, word: &str) -> bool {
        self.found.iter().any(|w| w == word)
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Words that made it onto the board and where.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Words that could not be placed and therefore cannot be found.
    #[must_use]
    pub fn unplaced_words(&self) -> &[String] {
        &self.unplaced
    }

    #[must_use]
    pub fn puzzle_report(&self) -> PuzzleReport<'_> {
        PuzzleReport {
            placements: &self.placements,
            unplaced: &self.unplaced,
        }
    }

    /// True once every target word has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.words.len()
    }

    /// Feed one click to the state machine.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::OutOfBounds`] for coordinates outside the board;
    /// the session is not modified in that case.
    pub fn click(&mut self, row: usize, col: usize) -> Result<ClickOutcome, SessionError> {
        let size = self.grid.size();
        let pos = Position::new(row, col);
        if !self.grid.contains(pos) {
            return Err(SessionError::OutOfBounds { row, col, size });
        }

        if self.grid.is_found(pos) {
            debug_log!("click() - {pos} is already found, ignoring");
            return Ok(ClickOutcome::Ignored);
        }

        let outcome = match self.selection {
            Selection::NoSelection => {
                self.grid.set_selected(pos, true);
                self.selection = Selection::OneSelected(pos);
                debug_log!("click() - selection started at {pos}");
                ClickOutcome::Started(pos)
            }
            Selection::OneSelected(start) => {
                self.grid.clear_selection();
                self.selection = Selection::NoSelection;
                self.resolve(start, pos)
            }
        };
        Ok(outcome)
    }

    fn resolve(&mut self, start: Position, end: Position) -> ClickOutcome {
        let Some(path) = line_between(start, end) else {
            debug_log!("resolve() - {start} and {end} are not on a line");
            return ClickOutcome::NotALine { start, end };
        };

        let candidate: String = path.iter().filter_map(|pos| self.grid.letter(*pos)).collect();
        let reversed: String = candidate.chars().rev().collect();

        let matched = self
            .words
            .iter()
            .filter(|word| !self.found.contains(word))
            .find(|word| **word == candidate || **word == reversed)
            .cloned();

        match matched {
            Some(word) => {
                for pos in &path {
                    self.grid.set_found(*pos);
                }
                self.found.push(word.clone());
                info_log!(
                    "Found '{word}' ({}/{} words)",
                    self.found.len(),
                    self.words.len()
                );
                ClickOutcome::Matched { word, path }
            }
            None => {
                debug_log!("resolve() - '{candidate}' does not match a pending word");
                ClickOutcome::Missed { candidate }
            }
        }
    }
}

/// Cells on the straight line from `start` to `end`, both included.
///
/// The step is the sign of the row and column deltas, so any of the eight
/// compass directions works. Returns `None` unless the two cells share a row,
/// a column, or a 45° diagonal.
#[must_use]
pub fn line_between(start: Position, end: Position) -> Option<Vec<Position>> {
    let d_row = signed_delta(start.row, end.row)?;
    let d_col = signed_delta(start.col, end.col)?;
    if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
        return None;
    }

    let (dr, dc) = (d_row.signum(), d_col.signum());
    let steps = d_row.unsigned_abs().max(d_col.unsigned_abs());
    (0..=steps).map(|i| start.offset(dr, dc, i)).collect()
}

fn signed_delta(from: usize, to: usize) -> Option<isize> {
    let from = isize::try_from(from).ok()?;
    let to = isize::try_from(to).ok()?;
    to.checked_sub(from)
}
