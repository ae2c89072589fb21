use crate::config::DEFAULT_GRID_SIZE;
use crate::error::SessionError;
use crate::game_state::{GameInterface, UserAction, describe_outcome};
use crate::grid::Position;
use crate::selection::{ClickOutcome, Session};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Word search puzzle for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list file
    #[arg(short = 'i', long = "input")]
    pub wordlist_path: Option<String>,

    /// Width and height of the board
    #[arg(short = 's', long = "size", default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Seed for reproducible boards
    #[arg(long)]
    pub seed: Option<u64>,

    /// Line-oriented mode instead of the full-screen interface
    #[arg(long)]
    pub plain: bool,

    /// Where to write the log (defaults to the user cache directory)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum ClickInput {
    Valid(Position),
    Invalid,
    Exit,
    NewGame,
}

/// Parse `row col` (or `row,col`), zero based.
fn parse_position(input: &str) -> Option<Position> {
    let mut parts = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Position::new(row, col))
}

/// Read one command. End of input is treated as `exit`.
pub fn read_click<R: BufRead>(reader: &mut R) -> ClickInput {
    println!("\nEnter a cell as 'row col' (or 'next' for a new board, 'exit' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return ClickInput::Exit,
        Ok(_) => {}
    }
    let input = input.trim().to_uppercase();

    match input.as_str() {
        "EXIT" | "QUIT" => ClickInput::Exit,
        "NEXT" | "NEW" => ClickInput::NewGame,
        _ => match parse_position(&input) {
            Some(pos) => ClickInput::Valid(pos),
            None => {
                println!("Invalid input. Enter two numbers, e.g. '3 4'.");
                ClickInput::Invalid
            }
        },
    }
}

/// Text rendering of the board. Found letters are lowercase and the selected
/// start cell is bracketed.
#[must_use]
pub fn render_board(session: &Session) -> String {
    let grid = session.grid();
    let mut out = String::from("    ");
    for col in 0..grid.size() {
        out.push_str(&format!("{col:^3}"));
    }
    out.push('\n');

    for (r, row) in grid.rows().enumerate() {
        out.push_str(&format!("{r:>3} "));
        for cell in row {
            let letter = cell.letter().unwrap_or('.');
            let rendered = if cell.is_found() {
                format!(" {} ", letter.to_ascii_lowercase())
            } else if cell.is_selected() {
                format!("[{letter}]")
            } else {
                format!(" {letter} ")
            };
            out.push_str(&rendered);
        }
        out.push('\n');
    }
    out
}

#[must_use]
pub fn render_word_list(session: &Session) -> String {
    let words: Vec<String> = session
        .words()
        .iter()
        .map(|word| {
            if session.is_found(word) {
                format!("{word} (found)")
            } else {
                word.clone()
            }
        })
        .collect();
    format!(
        "Words ({}/{} found): {}",
        session.found_words().len(),
        session.words().len(),
        words.join(", ")
    )
}

pub fn display_board(session: &Session) {
    print!("{}", render_board(session));
    println!("{}", render_word_list(session));
}

pub fn display_outcome(outcome: &ClickOutcome) {
    println!("{}", describe_outcome(outcome));
}

pub fn display_error(error: &SessionError) {
    println!("Invalid cell: {error}");
}

pub fn display_victory(word_count: usize) {
    println!("Congratulations! You found all {word_count} words!");
}

pub fn display_new_game_message(session: &Session) {
    let size = session.grid().size();
    println!(
        "New {size}x{size} board with {} words.",
        session.words().len()
    );
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_board(&mut self, session: &Session) {
        display_board(session);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_click(&mut self.reader) {
            ClickInput::Valid(pos) => Some(UserAction::Click(pos)),
            ClickInput::Exit => Some(UserAction::Exit),
            ClickInput::NewGame => Some(UserAction::NewGame),
            ClickInput::Invalid => None,
        }
    }

    fn display_outcome(&mut self, outcome: &ClickOutcome) {
        display_outcome(outcome);
    }

    fn display_error(&mut self, error: &SessionError) {
        display_error(error);
    }

    fn display_victory(&mut self, word_count: usize) {
        display_victory(word_count);
    }

    fn display_new_game_message(&mut self, session: &Session) {
        display_new_game_message(session);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use std::io::Cursor;

    fn sample_session() -> Session {
        let grid = Grid::from_letters(&["ABC", "DEF", "GHI"]).unwrap();
        Session::from_grid(&["ABC", "AEI"], grid).unwrap()
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["word-search"]);
        assert_eq!(cli.wordlist_path, None);
        assert_eq!(cli.grid_size, DEFAULT_GRID_SIZE);
        assert_eq!(cli.seed, None);
        assert!(!cli.plain);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_cli_with_options() {
        let cli = Cli::parse_from([
            "word-search",
            "-i",
            "words.txt",
            "--size",
            "12",
            "--seed",
            "7",
            "--plain",
        ]);
        assert_eq!(cli.wordlist_path.as_deref(), Some("words.txt"));
        assert_eq!(cli.grid_size, 12);
        assert_eq!(cli.seed, Some(7));
        assert!(cli.plain);
    }

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position("3 4"), Some(Position::new(3, 4)));
        assert_eq!(parse_position("3,4"), Some(Position::new(3, 4)));
        assert_eq!(parse_position("  0 ,  9 "), Some(Position::new(0, 9)));
        assert_eq!(parse_position("3"), None);
        assert_eq!(parse_position("3 4 5"), None);
        assert_eq!(parse_position("-1 2"), None);
        assert_eq!(parse_position("a b"), None);
    }

    #[test]
    fn test_read_click_commands() {
        let mut reader = Cursor::new("next\nEXIT\n1 2\nbogus\n");
        assert!(matches!(read_click(&mut reader), ClickInput::NewGame));
        assert!(matches!(read_click(&mut reader), ClickInput::Exit));
        assert!(matches!(
            read_click(&mut reader),
            ClickInput::Valid(Position { row: 1, col: 2 })
        ));
        assert!(matches!(read_click(&mut reader), ClickInput::Invalid));
    }

    #[test]
    fn test_read_click_eof_exits() {
        let mut reader = Cursor::new("");
        assert!(matches!(read_click(&mut reader), ClickInput::Exit));
    }

    #[test]
    fn test_render_board_marks_state() {
        let mut session = sample_session();
        session.click(0, 0).unwrap();
        session.click(0, 2).unwrap();
        session.click(2, 2).unwrap();
        let board = render_board(&session);
        let lines: Vec<&str> = board.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "     0  1  2 ");
        assert_eq!(lines[1], "  0  a  b  c ");
        assert_eq!(lines[3], "  2  G  H [I]");
    }

    #[test]
    fn test_render_word_list() {
        let mut session = sample_session();
        session.click(2, 2).unwrap();
        session.click(0, 0).unwrap();
        assert_eq!(
            render_word_list(&session),
            "Words (1/2 found): ABC, AEI (found)"
        );
    }

    #[test]
    fn test_cli_interface_reads_actions() {
        let mut interface = CliInterface::new(Cursor::new("0 1\n?\nnext\n"));
        assert_eq!(
            interface.read_action(),
            Some(UserAction::Click(Position::new(0, 1)))
        );
        assert_eq!(interface.read_action(), None);
        assert_eq!(interface.read_action(), Some(UserAction::NewGame));
        assert_eq!(interface.read_action(), Some(UserAction::Exit));
    }
}
