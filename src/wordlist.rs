use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Target words of the default game.
pub const EMBEDDED_WORDLIST: &str = include_str!("resources/words.txt");

fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_uppercase();
    (!word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())).then_some(word)
}

/// Parse a newline-delimited word list, skipping blanks and non-alphabetic lines.
pub fn load_wordlist_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize).collect()
}

pub fn load_wordlist_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_wordlist() {
        let words = load_wordlist_from_str(EMBEDDED_WORDLIST);
        assert_eq!(words.len(), 10);
        assert_eq!(words[0], "REACT");
        assert!(words.contains(&"TYPESCRIPT".to_string()));
    }

    #[test]
    fn test_load_skips_noise() {
        let words = load_wordlist_from_str("  vite \n\nhook2\nstate\n# comment\n");
        assert_eq!(words, vec!["VITE".to_string(), "STATE".to_string()]);
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = std::env::temp_dir().join("word_search_missing_wordlist.txt");
        let _ = std::fs::remove_file(&path);
        assert!(load_wordlist_from_file(&path).is_err());
    }
}
