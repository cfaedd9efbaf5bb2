//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `PuzzleError` and `SolverError` implementations via
//! their `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use reelwords::errors::PuzzleError;
use reelwords::solver::SolverError;

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($errors:expr) => {
        for error in $errors {
            let code = error.code();
            let description = error.description();
            let details = error.details();
            let help = error.help();

            println!("### {}: {}\n", code, description);
            println!("**Details:** {}\n", details);

            if let Some(help_text) = help {
                println!("**How to fix:**");
                println!("```");
                println!("{}", help_text);
                println!("```\n");
            }

            println!("**Example error message:**");
            println!("```");
            println!("{}", error);
            println!("```\n");

            println!("**Detailed format:**");
            println!("```");
            println!("{}", error.display_detailed());
            println!("```\n");

            println!("---\n");
        }
    };
}

/// Helper to create all `PuzzleError` variants for documentation
fn all_puzzle_error_variants() -> Vec<PuzzleError> {
    vec![
        PuzzleError::EmptyTable,
        PuzzleError::InvalidSymbolName { name: "Star!".to_string() },
        PuzzleError::TooManySymbols { count: 27 },
    ]
}

/// Helper to create all `SolverError` variants for documentation
fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::PuzzleFailure(Box::new(PuzzleError::EmptyTable)),
        SolverError::MissingOrderType { order_type: "0.1.2.1.0".to_string() },
    ]
}

fn main() {
    println!("# Error Code Reference\n");
    println!("Generated from the error enums; do not edit by hand.\n");

    println!("## Puzzle Table Errors (P0xx)\n");
    generate_error_docs!(all_puzzle_error_variants());

    println!("## Solver Errors (S0xx)\n");
    generate_error_docs!(all_solver_error_variants());
}
