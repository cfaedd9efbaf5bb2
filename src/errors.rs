//! Error types for puzzle-table parsing with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (P001-P003) for documentation lookup:
//!
//! - P001: `EmptyTable` (Puzzle table has no solution rows)
//! - P002: `InvalidSymbolName` (Symbol name contains disallowed characters)
//! - P003: `TooManySymbols` (More distinct symbols than letters)
//!
//! Malformed *dictionary* lines are not an error at all: word-list
//! normalization silently skips them (see [`crate::word_list`]).

use std::io;

/// Custom error type for puzzle-table parsing
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("puzzle table has no solution rows")]
    EmptyTable,

    #[error("invalid symbol name \"{name}\"")]
    InvalidSymbolName { name: String },

    #[error("puzzle uses {count} distinct symbols but only 26 letters are available")]
    TooManySymbols { count: usize },
}

impl From<PuzzleError> for io::Error {
    fn from(pe: PuzzleError) -> Self {
        // String version is the least fragile (no Send/Sync bounds issues)
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::EmptyTable => "P001",
            PuzzleError::InvalidSymbolName { .. } => "P002",
            PuzzleError::TooManySymbols { .. } => "P003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::EmptyTable => "Puzzle table has no solution rows",
            PuzzleError::InvalidSymbolName { .. } => "Symbol name contains disallowed characters",
            PuzzleError::TooManySymbols { .. } => "More distinct symbols than letters",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            PuzzleError::EmptyTable => "Every non-comment, non-blank line of a puzzle table is one solution row. The parsed input contained none, so there is nothing to solve.",
            PuzzleError::InvalidSymbolName { .. } => "Symbol names are whitespace-separated tokens of lowercase letters, digits and underscores. Anything else is rejected rather than guessed at.",
            PuzzleError::TooManySymbols { .. } => "Assignments map each symbol to a distinct letter of the 26-letter alphabet, so a table may use at most 26 distinct symbols.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::EmptyTable => Some("Add at least one row of symbol names, e.g. 'club star grapes seven seven'"),
            PuzzleError::InvalidSymbolName { .. } => Some("Use names like 'club' or 'lucky_7' (lowercase a-z, 0-9 and '_')"),
            PuzzleError::TooManySymbols { .. } => Some("Reduce the table to at most 26 distinct symbols"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
