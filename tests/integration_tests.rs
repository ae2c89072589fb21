// Integration tests for the word-search application
// These tests verify that all modules work together correctly

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;
use word_search::cli::CliInterface;
use word_search::*;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| (*w).to_string()).collect()
}

/// Board with "AB" across the top-left corner, as in the reference scenarios.
fn ab_session() -> Session {
    let grid = Grid::from_letters(&["ABXY", "QRST", "MNOP", "EFGH"]).unwrap();
    Session::from_grid(&["AB"], grid).unwrap()
}

#[test]
fn test_click_start_then_end_finds_word() {
    let mut session = ab_session();
    session.click(0, 0).unwrap();
    session.click(0, 1).unwrap();

    assert_eq!(session.found_words(), &["AB".to_string()]);
    assert!(session.grid().is_found(Position::new(0, 0)));
    assert!(session.grid().is_found(Position::new(0, 1)));
    assert!(session.is_complete());
}

#[test]
fn test_click_end_then_start_finds_word() {
    let mut session = ab_session();
    session.click(0, 1).unwrap();
    session.click(0, 0).unwrap();

    assert_eq!(session.found_words(), &["AB".to_string()]);
}

#[test]
fn test_same_cell_twice_finds_nothing() {
    let mut session = ab_session();
    session.click(0, 0).unwrap();
    let outcome = session.click(0, 0).unwrap();

    assert_eq!(
        outcome,
        ClickOutcome::Missed {
            candidate: "A".to_string()
        }
    );
    assert!(session.found_words().is_empty());
    assert_eq!(session.selection(), Selection::NoSelection);
}

#[test]
fn test_found_state_survives_any_clicks() {
    let mut session = ab_session();
    session.click(0, 0).unwrap();
    session.click(0, 1).unwrap();

    for row in 0..4 {
        for col in 0..4 {
            session.click(row, col).unwrap();
            session.click(3 - row, 3 - col).unwrap();
        }
    }

    assert_eq!(session.found_words(), &["AB".to_string()]);
    assert!(session.grid().is_found(Position::new(0, 0)));
    assert!(session.grid().is_found(Position::new(0, 1)));
}

#[test]
fn test_generated_boards_hide_every_placed_word() {
    let list = load_wordlist_from_str(EMBEDDED_WORDLIST);
    let config = SessionConfig::new(&list, DEFAULT_GRID_SIZE).unwrap();

    for seed in 0..25 {
        let mut rng = StdRng::seed_from_u64(seed);
        let session = Session::new(&config, &mut rng);
        let grid = session.grid();

        assert!(grid.is_filled(), "seed {seed}");
        assert!(
            grid.rows()
                .flatten()
                .all(|cell| cell.letter().is_some_and(|c| c.is_ascii_uppercase())),
            "seed {seed}"
        );
        assert_eq!(
            session.placements().len() + session.unplaced_words().len(),
            list.len()
        );
        for placement in session.placements() {
            assert!(
                locate(grid, &placement.word).is_some(),
                "seed {seed}: {} missing",
                placement.word
            );
        }
    }
}

#[test]
fn test_every_placed_word_can_be_found_both_ways() {
    let config = SessionConfig::new(&["REACT", "VITE", "HOOK", "STATE", "PROPS"], 10)
        .unwrap()
        .with_seed(17);

    for reverse in [false, true] {
        let mut session = Session::new(&config, &mut config.rng());
        let placements = session.placements().to_vec();
        for placement in &placements {
            let cells = placement.positions();
            let (mut first, mut last) = (cells[0], cells[cells.len() - 1]);
            if reverse {
                std::mem::swap(&mut first, &mut last);
            }
            // Crossing words may share an end cell that is already locked.
            if session.grid().is_found(first) || session.grid().is_found(last) {
                continue;
            }
            session.click(first.row, first.col).unwrap();
            let outcome = session.click(last.row, last.col).unwrap();
            assert!(
                matches!(outcome, ClickOutcome::Matched { .. }),
                "{placement:?} gave {outcome:?}"
            );
        }
        assert!(!session.found_words().is_empty());
        let mut found = session.found_words().to_vec();
        found.sort();
        found.dedup();
        assert_eq!(found.len(), session.found_words().len());
    }
}

#[test]
fn test_win_condition_after_all_words() {
    let grid = Grid::from_letters(&["XBXX", "CATX", "XDXX", "DOGX"]).unwrap();
    let mut session = Session::from_grid(&["CAT", "BAD", "DOG"], grid).unwrap();
    assert!(session.unplaced_words().is_empty());

    // BAD crosses CAT on the shared 'A' and is selected bottom to top.
    for (start, end) in [((1, 0), (1, 2)), ((2, 1), (0, 1)), ((3, 2), (3, 0))] {
        assert!(!session.is_complete());
        session.click(start.0, start.1).unwrap();
        let outcome = session.click(end.0, end.1).unwrap();
        assert!(matches!(outcome, ClickOutcome::Matched { .. }), "{outcome:?}");
    }

    assert!(session.is_complete());
    assert_eq!(session.found_words().len(), session.words().len());
    assert_eq!(session.found_words(), &words(&["CAT", "BAD", "DOG"]));
    assert!(session.pending_words().is_empty());
}

#[test]
fn test_found_end_cell_cannot_close_a_selection() {
    let grid = Grid::from_letters(&["CATX", "XOXX", "XXWX", "XXXX"]).unwrap();
    let mut session = Session::from_grid(&["CAT", "COW"], grid).unwrap();
    session.click(0, 0).unwrap();
    session.click(0, 2).unwrap();

    // COW shares its 'C' with CAT, which is now locked.
    session.click(2, 2).unwrap();
    assert_eq!(session.click(0, 0).unwrap(), ClickOutcome::Ignored);
    assert_eq!(session.selection(), Selection::OneSelected(Position::new(2, 2)));
    assert_eq!(session.pending_words(), vec!["COW"]);
}

#[test]
fn test_plain_game_session_from_script() {
    let config = SessionConfig::new(&["AB"], 4).unwrap().with_seed(5);
    let preview = Session::new(&config, &mut config.rng());
    let cells = preview.placements()[0].positions();

    let input = format!(
        "9 9\nnonsense\n{} {}\n{},{}\nexit\n",
        cells[1].row, cells[1].col, cells[0].row, cells[0].col
    );
    let mut interface = CliInterface::new(Cursor::new(input));
    let session = game_loop(&config, &mut interface);

    assert!(session.is_complete());
    assert_eq!(session.found_words(), &["AB".to_string()]);
}

#[test]
fn test_plain_game_new_board_command() {
    let config = SessionConfig::new(&["VITE", "HOOK"], 6).unwrap().with_seed(8);
    let first = Session::new(&config, &mut config.rng());
    let cells = first.placements()[0].positions();

    // Find a word, then ask for a new board: progress starts over.
    let input = format!(
        "{} {}\n{} {}\nnext\n",
        cells[0].row,
        cells[0].col,
        cells[cells.len() - 1].row,
        cells[cells.len() - 1].col
    );
    let mut interface = CliInterface::new(Cursor::new(input));
    let session = game_loop(&config, &mut interface);

    assert!(session.found_words().is_empty());
    assert_eq!(session.grid().size(), 6);
}

#[test]
fn test_custom_wordlist_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("word_search_custom_wordlist.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "apple").unwrap();
        writeln!(file, "  grape ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "lemon").unwrap();
    }

    let list = load_wordlist_from_file(&path).unwrap();
    assert_eq!(list, words(&["APPLE", "GRAPE", "LEMON"]));

    let config = SessionConfig::new(&list, 7).unwrap().with_seed(1);
    let session = Session::new(&config, &mut config.rng());
    assert_eq!(session.words(), list.as_slice());
    assert_eq!(session.grid().size(), 7);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_oversized_word_rejected_before_generation() {
    let list = load_wordlist_from_str(EMBEDDED_WORDLIST);
    let err = SessionConfig::new(&list, 8).unwrap_err();
    assert!(matches!(err, ConfigError::WordTooLong { grid_size: 8, .. }));
}

#[test]
fn test_generate_is_pure_for_a_seed() {
    let list = words(&["COMPILER", "CONTEXT", "PROPS"]);
    let a = generate(&list, 9, DEFAULT_MAX_ATTEMPTS, &mut StdRng::seed_from_u64(77));
    let b = generate(&list, 9, DEFAULT_MAX_ATTEMPTS, &mut StdRng::seed_from_u64(77));
    assert_eq!(a.grid, b.grid);
    assert_eq!(a.unplaced, b.unplaced);
    assert_eq!(list, words(&["COMPILER", "CONTEXT", "PROPS"]));
}
