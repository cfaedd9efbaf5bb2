//! `word_list` — dictionary-line normalization and streaming reads
//!
//! The dictionary source is a line-oriented text file, one candidate word per
//! line. Lines are normalized before use:
//! - surrounding whitespace is trimmed and the word is lowercased;
//! - anything that then fails `^[a-z]+$` (digits, punctuation, inner spaces,
//!   accented characters, empty lines) is skipped silently.
//!
//! A skipped line is recovered-from locally and never surfaced to the caller;
//! the only reportable failure in this module is an unreadable file.
//!
//! The file reader hands back a line iterator rather than a materialized
//! list: the dictionary may be orders of magnitude larger than the handful
//! of puzzle-relevant words, and the index keeps only those.

use fancy_regex::Regex;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

/// Matches a normalized candidate word: ASCII lowercase letters only.
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]+$").unwrap());

/// Normalize one raw dictionary line.
///
/// Returns the trimmed, lowercased word, or `None` if the line is not a
/// plain ASCII word after normalization.
#[must_use]
pub fn normalize_line(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    if matches!(WORD_RE.is_match(&word), Ok(true)) {
        Some(word)
    } else {
        None
    }
}

/// Open a word-list file as a buffered line iterator.
///
/// # Errors
///
/// Will return an `Error` if the file at `path` cannot be opened; the error
/// message names the path.
pub fn open_lines<P: AsRef<Path>>(path: P) -> io::Result<io::Lines<BufReader<File>>> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("failed to read word list from '{}': {}", path_ref.display(), e),
        )
    })?;
    Ok(BufReader::new(file).lines())
}
