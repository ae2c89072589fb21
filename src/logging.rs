// Conditional logging macros - only active in debug builds

use chrono::Local;
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const LOG_FILE_NAME: &str = "word-search.log";

/// Default log location under the user cache directory.
#[must_use]
pub fn get_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("word-search").join(LOG_FILE_NAME))
}

/// Send `log` records to `path`, appending. The filter comes from `RUST_LOG`
/// and defaults to `info`.
///
/// The terminal UI owns stdout/stderr, so records never go to the console.
pub fn init_logging(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_file_name() {
        if let Some(path) = get_log_path() {
            assert!(path.ends_with("word-search/word-search.log"));
        }
    }

    #[test]
    fn test_init_logging_creates_file() {
        let dir = std::env::temp_dir().join("word_search_logging_test");
        let path = dir.join("nested").join(LOG_FILE_NAME);
        let _ = fs::remove_dir_all(&dir);
        // A second logger in the same test binary fails to install, the file
        // is still created first.
        let _ = init_logging(&path);
        assert!(path.exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
