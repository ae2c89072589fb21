//! Random puzzle generation.
//!
//! Each word gets a fixed number of attempts at a random direction and origin.
//! A placement is accepted when every letter stays on the board and lands on a
//! cell that is either empty or already holds the same letter, so words may
//! cross. Words that run out of attempts are skipped and reported in
//! [`Puzzle::unplaced`]. Remaining blanks are filled with random letters.

use crate::grid::{Direction, Grid, Position};
use crate::info_log;
use log::{debug, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Where a word ended up on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub start: Position,
    pub direction: Direction,
}

impl Placement {
    /// Cells covered by the word, first letter first.
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        let (dr, dc) = self.direction.delta();
        (0..self.word.chars().count())
            .filter_map(|i| self.start.offset(dr, dc, i))
            .collect()
    }
}

/// A generated board plus a report of what was placed.
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub grid: Grid,
    pub placements: Vec<Placement>,
    pub unplaced: Vec<String>,
}

impl Puzzle {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Generate a `grid_size x grid_size` board hiding `words`.
///
/// `max_attempts` is the per-word retry budget. The word slice is not modified.
pub fn generate<R: Rng>(
    words: &[String],
    grid_size: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Puzzle {
    let mut grid = Grid::new(grid_size);
    let mut placements = Vec::with_capacity(words.len());
    let mut unplaced = Vec::new();

    for word in words {
        match place_word(&mut grid, word, max_attempts, rng) {
            Some(placement) => placements.push(placement),
            None => {
                warn!("Could not place '{word}' after {max_attempts} attempts");
                unplaced.push(word.clone());
            }
        }
    }

    fill_blanks(&mut grid, rng);
    info_log!(
        "Generated {grid_size}x{grid_size} grid: {} placed, {} skipped",
        placements.len(),
        unplaced.len()
    );

    Puzzle {
        grid,
        placements,
        unplaced,
    }
}

fn place_word<R: Rng>(
    grid: &mut Grid,
    word: &str,
    max_attempts: usize,
    rng: &mut R,
) -> Option<Placement> {
    let size = grid.size();
    if size == 0 {
        return None;
    }
    let letters: Vec<char> = word.chars().collect();

    for attempt in 0..max_attempts {
        let direction = *Direction::ALL.choose(rng)?;
        let start = Position::new(rng.random_range(0..size), rng.random_range(0..size));

        if let Some(path) = fits(grid, &letters, start, direction) {
            for (pos, &letter) in path.iter().zip(&letters) {
                grid.place_letter(*pos, letter);
            }
            debug!("Placed '{word}' at {start} going {direction} (attempt {attempt})");
            return Some(Placement {
                word: word.to_string(),
                start,
                direction,
            });
        }
    }
    None
}

/// Cells the word would occupy, or `None` if it leaves the board or clashes.
fn fits(
    grid: &Grid,
    letters: &[char],
    start: Position,
    direction: Direction,
) -> Option<Vec<Position>> {
    let (dr, dc) = direction.delta();
    let mut path = Vec::with_capacity(letters.len());
    for (i, &letter) in letters.iter().enumerate() {
        let pos = start.offset(dr, dc, i).filter(|pos| grid.contains(*pos))?;
        if grid.letter(pos).is_some_and(|existing| existing != letter) {
            return None;
        }
        path.push(pos);
    }
    Some(path)
}

fn fill_blanks<R: Rng>(grid: &mut Grid, rng: &mut R) {
    let blanks: Vec<Position> = grid
        .positions()
        .filter(|pos| grid.letter(*pos).is_none())
        .collect();
    for pos in blanks {
        let letter = char::from(rng.random_range(b'A'..=b'Z'));
        grid.place_letter(pos, letter);
    }
}

/// Search the board for `word` along the placement directions.
///
/// Useful for boards that were not produced by [`generate`].
#[must_use]
pub fn locate(grid: &Grid, word: &str) -> Option<Placement> {
    let len = word.chars().count();
    if len == 0 {
        return None;
    }
    grid.positions().find_map(|start| {
        Direction::ALL.into_iter().find_map(|direction| {
            (grid.read_line(start, direction, len).as_deref() == Some(word)).then(|| Placement {
                word: word.to_string(),
                start,
                direction,
            })
        })
    })
}
