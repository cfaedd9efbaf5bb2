use std::process::ExitCode;
use clap::Parser;
use std::time::{Duration, Instant};

use reelwords::assignment::Assignment;
use reelwords::dictionary::DictionaryIndex;
use reelwords::puzzle::Puzzle;
use reelwords::solver;
use reelwords::solver::{SolveOptions, SolveStatus, SolverError};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Reel-symbol substitution puzzle solver
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// Path to the word list (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Path to a puzzle table (one row of symbol names per line);
    /// defaults to the built-in reel table
    #[arg(short, long)]
    puzzle: Option<String>,

    /// Wall-clock budget for the search, in seconds (exhaustive when omitted)
    #[arg(short = 't', long)]
    time_budget: Option<u64>,
}

/// Entry point of the reelwords CLI solver.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with a failure code.
fn main() -> ExitCode {

    // Set up logging
    let debug_enabled = std::env::var("REELWORDS_DEBUG").is_ok();
    reelwords::log::init_logger(debug_enabled);

    log::info!("Starting reelwords solver");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a SolverError
        if let Some(solver_err) = e.downcast_ref::<SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the reelwords CLI solver.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the puzzle table (built-in unless `--puzzle` names a file).
/// 3. Stream the word list into the order-type-keyed dictionary index.
/// 4. Run the exhaustive search, printing each solution on stdout.
/// 5. Print performance metrics (timings, counts) on stderr.
///
/// Returns `Ok(())` on success — including the perfectly normal case of a
/// completed search with zero solutions — or an error (e.g., unreadable
/// word list, malformed puzzle table) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the puzzle table
    let table = match &cli.puzzle {
        Some(path) => std::fs::read_to_string(path)?,
        None => Puzzle::BUILTIN_TABLE.to_string(),
    };
    let puzzle = table.parse::<Puzzle>().map_err(SolverError::from)?;
    log::info!(
        "puzzle has {} solution rows over {} distinct symbols",
        puzzle.solutions().len(),
        puzzle.symbol_count()
    );

    // 2. Build the dictionary index from the word list, keeping only words
    //    whose repeat structure some puzzle row shares
    let t_index = Instant::now();
    let index = DictionaryIndex::load_from_path(&puzzle, &cli.word_list)?;
    let index_secs = t_index.elapsed().as_secs_f64();

    // 3. Run the search
    let options = SolveOptions {
        time_budget: cli.time_budget.map(Duration::from_secs),
    };
    let t_solve = Instant::now();
    let result = solver::solve(&puzzle, &index, &options)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // 4. Print each solution on stdout
    for assignment in &result.solutions {
        println!("{}", format_solution(assignment, &puzzle));
    }

    match result.status {
        SolveStatus::TimedOut { elapsed } => {
            eprintln!(
                "⚠️  Timed out after {:.1}s; some solutions may not have been found",
                elapsed.as_secs_f64()
            );
        }
        SolveStatus::Exhausted => {
            eprintln!(
                "✓ Search space exhausted ({} solution{})",
                result.solutions.len(),
                if result.solutions.len() == 1 { "" } else { "s" }
            );
        }
    }

    // 5. Print diagnostics (index size, timings) to stderr
    eprintln!(
        "Indexed {} words in {:.3}s; searched in {:.3}s.",
        index.word_count(),
        index_secs,
        solve_secs
    );

    Ok(())
}

/// Render one found assignment: the symbol-to-letter table followed by every
/// puzzle row and the word it spells.
fn format_solution(assignment: &Assignment, puzzle: &Puzzle) -> String {
    let mut out = format!("Found solution: {assignment}\n");
    for (sym, letter) in assignment.iter(puzzle) {
        out.push_str(&format!("  {:<10} => {letter}\n", puzzle.name(sym)));
    }
    for row in puzzle.solutions() {
        let word = assignment.word(row).unwrap_or_else(|| "?".repeat(row.len()));
        out.push_str(&format!("  {:<45} => {word}\n", puzzle.row_names(row)));
    }
    out
}
