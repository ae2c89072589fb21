//! TUI (Terminal User Interface) module for Word Search
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Architecture
//! - `TuiInterface`: renders a snapshot of the session and turns key presses and
//!   mouse clicks into [`UserAction`]s for the game loop.
//!
//! # Input
//! - Arrow keys or `hjkl` move the cursor, ENTER/SPACE clicks the cell under it.
//! - A left mouse click on a letter clicks that cell directly.
//! - `n` starts a new board, ESC or `q` quits.

use crate::error::SessionError;
use crate::game_state::{GameInterface, UserAction, describe_outcome};
use crate::grid::{Grid, Position};
use crate::selection::{ClickOutcome, Session};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const CELL_WIDTH: u16 = 3;
const BOARD_LEFT_PADDING: u16 = 1;
const WORD_PANEL_MIN_WIDTH: u16 = 24;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const FOUND_WORD_STYLE: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::CROSSED_OUT);

#[derive(Clone, Copy, PartialEq, Debug)]
enum CellState {
    Plain,
    Selected,
    Found,
}

impl CellState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Plain => (Color::Reset, Color::White),
            Self::Selected => (Color::Yellow, Color::Black),
            Self::Found => (Color::Green, Color::Black),
        }
    }
}

/// What the UI needs from a session to redraw without holding on to it.
#[derive(Debug)]
struct BoardSnapshot {
    grid: Grid,
    words: Vec<(String, bool)>,
}

impl BoardSnapshot {
    fn from_session(session: &Session) -> Self {
        Self {
            grid: session.grid().clone(),
            words: session
                .words()
                .iter()
                .map(|word| (word.clone(), session.is_found(word)))
                .collect(),
        }
    }
}

#[derive(Debug, PartialEq)]
enum TuiState {
    Playing,
    /// All words found - message stored in interface.message
    GameOver,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    board: Option<&'a BoardSnapshot>,
    cursor: Position,
    state: &'a TuiState,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    board: Option<BoardSnapshot>,
    board_area: Rect,
    cursor: Position,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        info_log!("Terminal setup complete: alternate screen, mouse capture, cursor hidden");
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            board: None,
            board_area: Rect::default(),
            cursor: Position::default(),
            state: TuiState::Playing,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            cursor::Show
        )?;
        Ok(())
    }

    /// Draw the current UI state to the terminal and remember where the board landed.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            board: self.board.as_ref(),
            cursor: self.cursor,
            state: &self.state,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        let mut board_area = Rect::default();
        self.terminal.draw(|f| {
            board_area = Self::render_static(f, &ctx);
        })?;
        self.board_area = board_area;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    /// Render the complete UI layout. Returns the inner area of the board.
    fn render_static(f: &mut Frame, ctx: &RenderContext) -> Rect {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(8),    // Board and word list
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);

        let board_width = ctx
            .board
            .map_or(0, |board| board_width(board.grid.size()));
        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(board_width),
                Constraint::Min(WORD_PANEL_MIN_WIDTH),
            ])
            .split(chunks[1]);

        let board_area = Self::render_board(f, middle[0], ctx.board, ctx.cursor, ctx.state);
        Self::render_words(f, middle[1], ctx.board, ctx.message, ctx.error_message);
        Self::render_status(f, chunks[2], ctx.status);
        Self::render_instructions(f, chunks[3], ctx.state);
        board_area
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORD SEARCH")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(
        f: &mut Frame,
        area: Rect,
        board: Option<&BoardSnapshot>,
        cursor: Position,
        state: &TuiState,
    ) -> Rect {
        let block = Block::default().title("Grid").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(board) = board else {
            return inner;
        };

        let show_cursor = *state == TuiState::Playing;
        let lines: Vec<Line> = board
            .grid
            .rows()
            .enumerate()
            .map(|(r, row)| {
                let mut spans = vec![Span::raw(" ".repeat(BOARD_LEFT_PADDING.into()))];
                for (c, cell) in row.iter().enumerate() {
                    let cell_state = if cell.is_found() {
                        CellState::Found
                    } else if cell.is_selected() {
                        CellState::Selected
                    } else {
                        CellState::Plain
                    };
                    let (bg_color, fg_color) = cell_state.colors();
                    let mut style = Style::default().fg(fg_color).bg(bg_color);
                    if show_cursor && cursor == Position::new(r, c) {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    }
                    let letter = cell.letter().unwrap_or(' ');
                    spans.push(Span::styled(format!(" {letter} "), style));
                }
                Line::from(spans)
            })
            .collect();

        f.render_widget(Paragraph::new(lines), inner);
        inner
    }

    fn render_words(
        f: &mut Frame,
        area: Rect,
        board: Option<&BoardSnapshot>,
        message: &str,
        error_message: &str,
    ) {
        let mut lines = Vec::new();

        if let Some(board) = board {
            let found = board.words.iter().filter(|(_, found)| *found).count();
            lines.push(Line::from(vec![Span::styled(
                format!("Find these words ({found}/{}):", board.words.len()),
                HEADER_STYLE,
            )]));
            for (word, found) in &board.words {
                if *found {
                    lines.push(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(word.clone(), FOUND_WORD_STYLE),
                    ]));
                } else {
                    lines.push(Line::from(format!("  {word}")));
                }
            }
            lines.push(Line::from(""));
        }

        if !message.is_empty() {
            lines.push(Line::from(vec![Span::styled(message, MESSAGE_STYLE)]));
        }

        if !error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Words").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::Playing => {
                "Arrows/hjkl: Move | ENTER/SPACE or mouse: Select start/end | N: New board | ESC: Quit"
            }
            TuiState::GameOver => "N: New board | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let style = if status_text.starts_with("Found") {
            SUCCESS_STYLE
        } else {
            HEADER_STYLE
        };
        let paragraph = Paragraph::new(status_text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn grid_size(&self) -> usize {
        self.board.as_ref().map_or(0, |board| board.grid.size())
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let event = event::read()?;
        match event {
            Event::Mouse(mouse) => Ok(self.handle_mouse_input(mouse)),
            Event::FocusGained | Event::FocusLost | Event::Paste(_) | Event::Resize(_, _) => {
                debug_log!("handle_input() - Ignoring event: {:?}", event);
                Ok(None)
            }
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }
                debug_log!(
                    "handle_input() - Key event received: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(match self.state {
                    TuiState::Playing => self.handle_playing_input(key),
                    TuiState::GameOver => Self::handle_game_over_input(key),
                })
            }
        }
    }

    fn handle_playing_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        if Self::has_modifier_keys(&key) {
            return None;
        }
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => {
                info_log!("handle_playing_input() - Quit requested");
                Some(UserAction::Exit)
            }
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Enter | KeyCode::Char(' ') => Some(UserAction::Click(self.cursor)),
            code => {
                if let Some(cursor) = move_cursor(self.cursor, code, self.grid_size()) {
                    self.cursor = cursor;
                }
                None
            }
        }
    }

    fn handle_mouse_input(&mut self, mouse: MouseEvent) -> Option<UserAction> {
        if self.state != TuiState::Playing
            || mouse.kind != MouseEventKind::Down(MouseButton::Left)
        {
            return None;
        }
        let pos = cell_at(self.board_area, self.grid_size(), mouse.column, mouse.row)?;
        debug_log!("handle_mouse_input() - Click on {pos}");
        self.cursor = pos;
        Some(UserAction::Click(pos))
    }

    fn handle_game_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(UserAction::Exit),
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }
}

/// Columns needed to show a board of `size` cells, borders included.
#[allow(clippy::cast_possible_truncation)]
fn board_width(size: usize) -> u16 {
    (size as u16)
        .saturating_mul(CELL_WIDTH)
        .saturating_add(BOARD_LEFT_PADDING * 2 + 2)
}

/// Map a terminal coordinate inside the board area to a cell.
fn cell_at(area: Rect, size: usize, column: u16, row: u16) -> Option<Position> {
    let x = column.checked_sub(area.x + BOARD_LEFT_PADDING)?;
    let y = row.checked_sub(area.y)?;
    if y >= area.height {
        return None;
    }
    let pos = Position::new(usize::from(y), usize::from(x / CELL_WIDTH));
    (pos.row < size && pos.col < size).then_some(pos)
}

/// New cursor position for a movement key, clamped to the board.
fn move_cursor(cursor: Position, code: KeyCode, size: usize) -> Option<Position> {
    let last = size.checked_sub(1)?;
    let moved = match code {
        KeyCode::Up | KeyCode::Char('k') => Position::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down | KeyCode::Char('j') => Position::new((cursor.row + 1).min(last), cursor.col),
        KeyCode::Left | KeyCode::Char('h') => Position::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Position::new(cursor.row, (cursor.col + 1).min(last)),
        KeyCode::Home => Position::new(cursor.row, 0),
        KeyCode::End => Position::new(cursor.row, last),
        _ => return None,
    };
    Some(moved)
}

impl GameInterface for TuiInterface {
    fn display_board(&mut self, session: &Session) {
        self.board = Some(BoardSnapshot::from_session(session));
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    self.error_message.clear();
                    return Some(action);
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_outcome(&mut self, outcome: &ClickOutcome) {
        self.status = describe_outcome(outcome);
        self.draw_or_log();
    }

    fn display_error(&mut self, error: &SessionError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_victory(&mut self, word_count: usize) {
        self.state = TuiState::GameOver;
        self.message = format!("Congratulations! You found all {word_count} words!");
        self.status = "Game Over - Press N for a new board".to_string();
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self, session: &Session) {
        self.state = TuiState::Playing;
        self.cursor = Position::default();
        let size = session.grid().size();
        self.message = format!(
            "New {size}x{size} board with {} words.",
            session.words().len()
        );
        self.error_message.clear();
        self.status = "Select the first letter of a word".to_string();
        self.board = Some(BoardSnapshot::from_session(session));
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
