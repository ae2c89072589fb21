use log::{error, info};
use std::io;
use std::process::ExitCode;
use word_search::cli::{CliInterface, parse_cli};
use word_search::logging::{get_log_path, init_logging};
use word_search::tui::TuiInterface;
use word_search::{
    EMBEDDED_WORDLIST, SessionConfig, game_loop, load_wordlist_from_file, load_wordlist_from_str,
};

fn main() -> ExitCode {
    let cli = parse_cli();

    if let Some(path) = cli.log_file.clone().or_else(get_log_path)
        && let Err(e) = init_logging(&path)
    {
        eprintln!("Logging disabled, cannot open '{}': {e}", path.display());
    }

    let words = match &cli.wordlist_path {
        Some(path) => match load_wordlist_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word list from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => load_wordlist_from_str(EMBEDDED_WORDLIST),
    };

    let config = match SessionConfig::new(&words, cli.grid_size) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            eprintln!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config = match cli.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    };
    info!(
        "Starting with {} words on a {}x{} grid",
        config.words().len(),
        config.grid_size(),
        config.grid_size()
    );

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&config, &mut interface);
        return ExitCode::SUCCESS;
    }

    match TuiInterface::new() {
        Ok(mut interface) => {
            game_loop(&config, &mut interface);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to start terminal UI: {e}");
            eprintln!("Failed to start terminal UI: {e}. Try --plain.");
            ExitCode::FAILURE
        }
    }
}
