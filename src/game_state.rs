use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::grid::Position;
use crate::selection::{ClickOutcome, Session};
use crate::{debug_log, info_log};
use log::warn;

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Click(Position),
    NewGame,
    Exit,
}

/// Presentation layer driven by [`game_loop`].
///
/// Implementations render the board and collect clicks; all game rules live in
/// [`Session`].
pub trait GameInterface {
    fn display_board(&mut self, session: &Session);

    /// Block until the player does something. `None` means the input was not
    /// understood and the loop should ask again.
    fn read_action(&mut self) -> Option<UserAction>;

    fn display_outcome(&mut self, outcome: &ClickOutcome);
    fn display_error(&mut self, error: &SessionError);
    fn display_victory(&mut self, word_count: usize);
    fn display_new_game_message(&mut self, session: &Session);
    fn display_exit_message(&mut self);
}

/// Play games with `config` until the player exits. Returns the last session.
pub fn game_loop<I: GameInterface + ?Sized>(config: &SessionConfig, interface: &mut I) -> Session {
    let mut rng = config.rng();
    let mut session = start_session(config, &mut rng, interface);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        debug_log!("game_loop() - action: {:?}", action);

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => {
                session = start_session(config, &mut rng, interface);
            }
            UserAction::Click(pos) => {
                let was_complete = session.is_complete();
                match session.click(pos.row, pos.col) {
                    Ok(outcome) => interface.display_outcome(&outcome),
                    Err(e) => {
                        warn!("Rejected click: {e}");
                        interface.display_error(&e);
                    }
                }
                interface.display_board(&session);
                if !was_complete && session.is_complete() {
                    info_log!("All {} words found", session.words().len());
                    interface.display_victory(session.words().len());
                }
            }
        }
    }
    session
}

fn start_session<I: GameInterface + ?Sized>(
    config: &SessionConfig,
    rng: &mut rand::rngs::StdRng,
    interface: &mut I,
) -> Session {
    let session = Session::new(config, rng);
    if !session.unplaced_words().is_empty() {
        warn!(
            "Unplaced words on this board: {}",
            session.unplaced_words().join(", ")
        );
    }
    interface.display_new_game_message(&session);
    interface.display_board(&session);
    session
}

/// One-line description of a click result, shared by the front ends.
#[must_use]
pub fn describe_outcome(outcome: &ClickOutcome) -> String {
    match outcome {
        ClickOutcome::Ignored => "That cell is already part of a found word.".to_string(),
        ClickOutcome::Started(pos) => format!("Start cell {pos} selected, now pick the end cell."),
        ClickOutcome::Matched { word, .. } => format!("Found {word}!"),
        ClickOutcome::Missed { candidate } => format!("'{candidate}' is not on the list."),
        ClickOutcome::NotALine { start, end } => {
            format!("{start} and {end} are not on a straight line.")
        }
    }
}
