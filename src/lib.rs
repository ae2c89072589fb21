// Library interface for word-search
// This allows integration tests to access internal modules

pub mod cli;
pub mod config;
pub mod error;
pub mod game_state;
pub mod generator;
pub mod grid;
pub mod logging;
pub mod selection;
pub mod tui;
pub mod wordlist;

// Re-export commonly used items for easier testing
pub use config::{DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, SessionConfig};
pub use error::{ConfigError, SessionError};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use generator::{Placement, Puzzle, generate, locate};
pub use grid::{Cell, Direction, Grid, Position};
pub use selection::{ClickOutcome, PuzzleReport, Selection, Session, line_between};
pub use wordlist::{EMBEDDED_WORDLIST, load_wordlist_from_file, load_wordlist_from_str};
