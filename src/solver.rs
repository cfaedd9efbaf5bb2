//! The backtracking search over symbol-to-letter assignments.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] with two variants:
//!
//! - S001: `PuzzleFailure` (Puzzle table parsing failed (wraps [`PuzzleError`]))
//! - S002: `MissingOrderType` (Dictionary index lacks a required word shape)
//!
//! Each error has a `code()`, optional `help()`, and `display_detailed()`
//! method. Finding zero solutions is *not* an error: the run completes with
//! [`SolveStatus::Exhausted`] and an empty solution list.
//!
//! # Examples
//!
//! ```
//! use reelwords::dictionary::DictionaryIndex;
//! use reelwords::puzzle::Puzzle;
//! use reelwords::solver::{self, SolveOptions};
//!
//! // one reel row with the radar/level repeat structure
//! let puzzle: Puzzle = "sun moon ring moon sun".parse()?;
//! let index = DictionaryIndex::build(&puzzle, ["radar", "level", "crown"]);
//!
//! let result = solver::solve(&puzzle, &index, &SolveOptions::default())?;
//! assert_eq!(result.solutions.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::assignment::Assignment;
use crate::dictionary::DictionaryIndex;
use crate::errors::PuzzleError;
use crate::puzzle::{Puzzle, Symbol};
use crate::trie::Trie;
use std::time::{Duration, Instant};

/// Status of a solver run.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveStatus {
    /// Every reachable assignment was visited. Zero solutions is still a
    /// successful exhaustion.
    Exhausted,

    /// The optional wall-clock budget expired mid-search. Contains the
    /// elapsed time; solutions found before expiry are kept.
    TimedOut { elapsed: Duration },
}

/// Successful solver run (even if the budget cut it short).
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Full, dictionary-valid assignments in discovery order.
    pub solutions: Vec<Assignment>,
    /// Whether the search space was fully enumerated.
    pub status: SolveStatus,
}

/// Knobs for a solver run. The default runs exhaustively with no clock.
#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Wall-clock budget; `None` means search to exhaustion.
    pub time_budget: Option<Duration>,
}

/// Unified error type for the solver pipeline.
///
/// Consolidates puzzle parsing and index-configuration failures so callers
/// only handle a single `Result<_, SolverError>`.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// Failure during parsing of the puzzle table.
    ///
    /// These originate from [`PuzzleError`], which we box to keep the error
    /// type size stable.
    #[error("puzzle failure: {0}")]
    PuzzleFailure(#[from] Box<PuzzleError>),

    /// A puzzle row needs a word shape the dictionary index was not built
    /// with. The index registers every shape of the puzzle it is built
    /// from, so this can only mean index and puzzle got out of sync. Fatal;
    /// raised before the search starts.
    #[error("dictionary index has no bucket for word shape {order_type}")]
    MissingOrderType { order_type: String },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::PuzzleFailure(_) => "S001",
            SolverError::MissingOrderType { .. } => "S002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::PuzzleFailure(_) => "Puzzle table parsing failed",
            SolverError::MissingOrderType { .. } => "Dictionary index lacks a required word shape",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::PuzzleFailure(_) => "The puzzle table could not be parsed. This wraps an underlying PuzzleError (see Puzzle Table Errors for specific codes).",
            SolverError::MissingOrderType { .. } => "Every solver run validates that the dictionary index holds a bucket for each puzzle row's repeat structure before searching. A missing bucket means the index was built against a different puzzle.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::MissingOrderType { .. } => {
                Some("Rebuild the dictionary index from the same puzzle you are solving")
            }
            SolverError::PuzzleFailure(_) => None, // PuzzleError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::PuzzleFailure(pe) => {
                // delegate to PuzzleError's detailed display
                format!("{}\n  caused by: {}", self.code(), pe.display_detailed())
            }
            SolverError::MissingOrderType { .. } => crate::errors::format_error_with_code_and_help(
                &self.to_string(),
                self.code(),
                self.help(),
            ),
        }
    }
}

/// Simple helper to enforce an optional wall-clock limit.
///
/// With no limit it never expires and costs one branch per check.
struct TimeBudget {
    start: Instant,
    limit: Option<Duration>,
}

impl TimeBudget {
    fn new(limit: Option<Duration>) -> Self {
        Self { start: Instant::now(), limit }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn expired(&self) -> bool {
        self.limit.is_some_and(|limit| self.start.elapsed() >= limit)
    }
}

/// One puzzle row with its trie resolved up front, so the hot path never
/// touches the index map again.
struct RowCx<'a> {
    symbols: &'a [Symbol],
    trie: &'a Trie,
}

struct SearchCx<'a> {
    puzzle: &'a Puzzle,
    rows: Vec<RowCx<'a>>,
    budget: TimeBudget,
}

/// Pruning predicate: every row must still have *some* dictionary word
/// consistent with the bindings made so far. On a fully bound row the fuzzy
/// query degenerates to exact membership.
fn is_possible(a: &Assignment, cx: &SearchCx) -> bool {
    cx.rows
        .iter()
        .all(|row| row.trie.fuzzy_contains(&a.mask(row.symbols)))
}

/// Acceptance predicate for full assignments: every row's substituted word
/// is literally in its shape's dictionary bucket.
fn is_correct(a: &Assignment, cx: &SearchCx) -> bool {
    cx.rows.iter().all(|row| {
        a.word(row.symbols)
            .is_some_and(|word| row.trie.contains(&word))
    })
}

/// Depth-first, exhaustive descent. Every solution reachable from `a` is
/// reported before returning; there is no early exit besides the budget.
fn search<F: FnMut(&Assignment)>(a: &Assignment, cx: &SearchCx, on_solution: &mut F) {
    if cx.budget.expired() {
        return;
    }

    if a.is_full(cx.puzzle) {
        if is_correct(a, cx) {
            log::debug!("solution {a}");
            on_solution(a);
        }
        // full assignments have no children regardless
        return;
    }

    for child in a.children(cx.puzzle) {
        if is_possible(&child, cx) {
            search(&child, cx, on_solution);
        }
    }
}

/// Run the search, streaming each full, correct assignment to `on_solution`
/// in discovery order.
///
/// Discovery order is deterministic: symbols are bound most-frequent-first
/// and letters tried 'a' through 'z'.
///
/// # Errors
///
/// Returns [`SolverError::MissingOrderType`] if `index` lacks a bucket for
/// any puzzle row's shape. This is checked before the first search step.
pub fn solve_with<F>(
    puzzle: &Puzzle,
    index: &DictionaryIndex,
    options: &SolveOptions,
    mut on_solution: F,
) -> Result<SolveStatus, SolverError>
where
    F: FnMut(&Assignment),
{
    // resolve every row's trie up front; a miss aborts before searching
    let mut rows = Vec::with_capacity(puzzle.solutions().len());
    for (row, ot) in puzzle.solutions().iter().zip(puzzle.order_types()) {
        let trie = index
            .trie_for(ot)
            .ok_or_else(|| SolverError::MissingOrderType { order_type: ot.to_string() })?;
        rows.push(RowCx { symbols: row, trie });
    }

    let cx = SearchCx {
        puzzle,
        rows,
        budget: TimeBudget::new(options.time_budget),
    };

    search(&Assignment::default(), &cx, &mut on_solution);

    if cx.budget.expired() {
        Ok(SolveStatus::TimedOut { elapsed: cx.budget.elapsed() })
    } else {
        Ok(SolveStatus::Exhausted)
    }
}

/// Run the search and collect every solution.
///
/// # Errors
///
/// Same as [`solve_with`].
pub fn solve(
    puzzle: &Puzzle,
    index: &DictionaryIndex,
    options: &SolveOptions,
) -> Result<SolveResult, SolverError> {
    let mut solutions = Vec::new();
    let status = solve_with(puzzle, index, options, |a| solutions.push(a.clone()))?;
    Ok(SolveResult { solutions, status })
}
