//! Board data model shared by the generator and the selection engine.
//!
//! A [`Grid`] is a fixed `size x size` square of [`Cell`]s. Letters are written
//! once by the generator; the `selected` and `found` flags are the only state
//! that changes while a session is played.

use crate::error::ConfigError;
use std::fmt;

/// One square of the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    letter: Option<char>,
    selected: bool,
    found: bool,
}

impl Cell {
    /// The uppercase letter held by the cell, `None` until generation fills it.
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Found cells belong to a matched word and no longer react to clicks.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.found
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letter.is_none()
    }
}

/// Row/column coordinate on the board, zero based.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Move `steps` times by `(dr, dc)`. Returns `None` when the result would be negative.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize, steps: usize) -> Option<Self> {
        let steps = isize::try_from(steps).ok()?;
        let row = self.row.checked_add_signed(dr.checked_mul(steps)?)?;
        let col = self.col.checked_add_signed(dc.checked_mul(steps)?)?;
        Some(Self { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four orientations used to place words.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    UpRight,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::UpRight,
    ];

    /// Unit step as `(row delta, column delta)`.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::DownRight => (1, 1),
            Self::UpRight => (-1, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Right => "right",
            Self::Down => "down",
            Self::DownRight => "down-right",
            Self::UpRight => "up-right",
        };
        f.write_str(name)
    }
}

/// Square letter board. Its dimensions never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// An empty `size x size` board with no letters and no flags set.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Cell::default(); size]; size],
        }
    }

    /// Build a fully lettered board from rows of text, e.g. `["AB", "CD"]`.
    ///
    /// Letters are uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidGrid`] when the rows do not form a non-empty
    /// square or contain anything other than ASCII letters.
    pub fn from_letters<S: AsRef<str>>(rows: &[S]) -> Result<Self, ConfigError> {
        let size = rows.len();
        if size == 0 {
            return Err(ConfigError::InvalidGrid("no rows".to_string()));
        }
        let mut grid = Self::new(size);
        for (r, line) in rows.iter().enumerate() {
            let letters: Vec<char> = line.as_ref().trim().chars().collect();
            if letters.len() != size {
                return Err(ConfigError::InvalidGrid(format!(
                    "row {r} has {} letters, expected {size}",
                    letters.len()
                )));
            }
            for (c, letter) in letters.into_iter().enumerate() {
                if !letter.is_ascii_alphabetic() {
                    return Err(ConfigError::InvalidGrid(format!(
                        "'{letter}' at ({r}, {c}) is not a letter"
                    )));
                }
                grid.place_letter(Position::new(r, c), letter.to_ascii_uppercase());
            }
        }
        Ok(grid)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(pos.row)?.get(pos.col)
    }

    #[must_use]
    pub fn letter(&self, pos: Position) -> Option<char> {
        self.get(pos).and_then(Cell::letter)
    }

    #[must_use]
    pub fn is_found(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_found)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Every position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Position::new(row, col)))
    }

    /// True once every cell holds a letter.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Read `len` letters from `start` walking along `direction`.
    ///
    /// Returns `None` if the run leaves the board or crosses an empty cell.
    #[must_use]
    pub fn read_line(&self, start: Position, direction: Direction, len: usize) -> Option<String> {
        let (dr, dc) = direction.delta();
        (0..len)
            .map(|i| start.offset(dr, dc, i).and_then(|pos| self.letter(pos)))
            .collect()
    }

    pub(crate) fn place_letter(&mut self, pos: Position, letter: char) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.letter = Some(letter);
        }
    }

    pub(crate) fn set_selected(&mut self, pos: Position, selected: bool) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.selected = selected;
        }
    }

    pub(crate) fn set_found(&mut self, pos: Position) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.found = true;
            cell.selected = false;
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.selected = false;
        }
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.cells.get_mut(pos.row)?.get_mut(pos.col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|cell| cell.letter.unwrap_or('.')).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
