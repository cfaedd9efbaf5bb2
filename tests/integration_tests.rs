//! Integration tests for the reelwords solver.
//!
//! These tests run the complete pipeline — puzzle parsing, dictionary
//! indexing, and the exhaustive assignment search — against small inline
//! dictionaries and the fixture word list.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use reelwords::dictionary::DictionaryIndex;
use reelwords::puzzle::Puzzle;
use reelwords::solver::{solve, SolveOptions, SolveStatus, SolverError};

/// Path to the fixture word list (mixed casing, whitespace, and junk lines)
fn fixture_path() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/mini_words.txt").to_string()
}

/// Helper: the substituted word of the first puzzle row, per solution
fn first_row_words(puzzle: &Puzzle, result: &reelwords::solver::SolveResult) -> Vec<String> {
    result
        .solutions
        .iter()
        .filter_map(|a| a.word(&puzzle.solutions()[0]))
        .collect()
}

mod single_row_puzzles {
    use super::*;

    #[test]
    fn test_radar_level_scenario() {
        // one row with repeat structure 0.1.2.1.0; radar and level share it
        let puzzle: Puzzle = "sun moon ring moon sun".parse().unwrap();
        let index = DictionaryIndex::build(&puzzle, ["radar", "level"]);
        let result = solve(&puzzle, &index, &SolveOptions::default()).unwrap();

        assert_eq!(result.status, SolveStatus::Exhausted);
        assert_eq!(first_row_words(&puzzle, &result), ["level", "radar"]);

        // no duplicate letters within any reported assignment
        for a in &result.solutions {
            let letters: HashSet<char> = puzzle.symbols().filter_map(|s| a.get(s)).collect();
            assert_eq!(letters.len(), puzzle.symbol_count());
        }
    }

    #[test]
    fn test_fixture_word_list_streams_and_normalizes() {
        let puzzle: Puzzle = "sun moon ring moon sun".parse().unwrap();
        let index = DictionaryIndex::load_from_path(&puzzle, fixture_path()).unwrap();

        let result = solve(&puzzle, &index, &SolveOptions::default()).unwrap();
        // RADAR and "  civic" normalize in; "ra dar", "lev3l", "don't" stay out
        assert_eq!(
            first_row_words(&puzzle, &result),
            ["civic", "kayak", "level", "radar", "rotor", "stats", "tenet"]
        );
    }

    #[test]
    fn test_missing_word_list_is_an_error() {
        let puzzle: Puzzle = "sun moon ring moon sun".parse().unwrap();
        let err = DictionaryIndex::load_from_path(&puzzle, "no/such/words.txt").unwrap_err();
        assert!(err.to_string().contains("no/such/words.txt"));
    }

    #[test]
    fn test_empty_dictionary_reports_zero_solutions_normally() {
        let puzzle: Puzzle = "sun moon ring moon sun".parse().unwrap();
        let index = DictionaryIndex::build(&puzzle, std::iter::empty::<&str>());
        let result = solve(&puzzle, &index, &SolveOptions::default()).unwrap();

        assert!(result.solutions.is_empty());
        assert_eq!(result.status, SolveStatus::Exhausted);
    }
}

mod full_reel_table {
    use super::*;

    /// The known injective mapping used to seed the dictionary: the i-th
    /// symbol (in first-appearance order) gets the i-th letter.
    fn planted_mapping(puzzle: &Puzzle) -> HashMap<reelwords::puzzle::Symbol, char> {
        puzzle
            .symbols()
            .enumerate()
            .map(|(i, sym)| (sym, (b'a' + i as u8) as char))
            .collect()
    }

    /// Build a dictionary that contains, under [`planted_mapping`], the
    /// exact word every builtin row spells — plus structurally irrelevant
    /// noise.
    fn planted_dictionary(puzzle: &Puzzle) -> Vec<String> {
        let mapping = planted_mapping(puzzle);
        let mut words: Vec<String> = puzzle
            .solutions()
            .iter()
            .map(|row| row.iter().map(|sym| mapping[sym]).collect())
            .collect();
        // noise whose repeat structures no row shares
        words.extend(["zz", "qqqqq", "abcabc"].map(String::from));
        words
    }

    #[test]
    fn test_builtin_puzzle_finds_planted_assignment() {
        let puzzle: Puzzle = Puzzle::BUILTIN_TABLE.parse().unwrap();
        let words = planted_dictionary(&puzzle);
        let planted: HashSet<String> = words.iter().take(10).cloned().collect();

        let index = DictionaryIndex::build(&puzzle, &words);
        let result = solve(&puzzle, &index, &SolveOptions::default()).unwrap();
        assert_eq!(result.status, SolveStatus::Exhausted);

        // the planted mapping must be among the solutions
        let mapping = planted_mapping(&puzzle);
        let found_planted = result
            .solutions
            .iter()
            .any(|a| puzzle.symbols().all(|sym| a.get(sym) == Some(mapping[&sym])));
        assert!(found_planted, "planted assignment was not enumerated");

        for a in &result.solutions {
            // full and injective
            assert!(a.is_full(&puzzle));
            let letters: HashSet<char> = puzzle.symbols().filter_map(|s| a.get(s)).collect();
            assert_eq!(letters.len(), puzzle.symbol_count());

            // every row's substituted word really is in the dictionary
            for row in puzzle.solutions() {
                let word = a.word(row).expect("full assignment substitutes every row");
                assert!(planted.contains(&word), "reported word '{word}' is not in the dictionary");
            }
        }
    }

    #[test]
    fn test_search_is_deterministic_across_runs() {
        let puzzle: Puzzle = Puzzle::BUILTIN_TABLE.parse().unwrap();
        let words = planted_dictionary(&puzzle);
        let index = DictionaryIndex::build(&puzzle, &words);

        let first = solve(&puzzle, &index, &SolveOptions::default()).unwrap();
        let second = solve(&puzzle, &index, &SolveOptions::default()).unwrap();
        assert_eq!(first.solutions, second.solutions);
    }

    #[test]
    fn test_zero_time_budget_times_out_cleanly() {
        let puzzle: Puzzle = Puzzle::BUILTIN_TABLE.parse().unwrap();
        let words = planted_dictionary(&puzzle);
        let index = DictionaryIndex::build(&puzzle, &words);

        let options = SolveOptions { time_budget: Some(Duration::ZERO) };
        let result = solve(&puzzle, &index, &options).unwrap();
        assert!(matches!(result.status, SolveStatus::TimedOut { .. }));
        assert!(result.solutions.is_empty());
    }
}

mod configuration {
    use super::*;

    #[test]
    fn test_index_built_for_other_puzzle_is_rejected_before_search() {
        let indexed: Puzzle = "sun moon ring moon sun".parse().unwrap();
        let index = DictionaryIndex::build(&indexed, ["radar"]);

        let other: Puzzle = "club star grapes seven seven".parse().unwrap();
        let err = solve(&other, &index, &SolveOptions::default()).unwrap_err();

        assert!(matches!(err, SolverError::MissingOrderType { .. }));
        assert_eq!(err.code(), "S002");
        assert!(err.display_detailed().contains("S002"));
    }

    #[test]
    fn test_malformed_puzzle_surfaces_detailed_error() {
        let err = "".parse::<Puzzle>().map_err(SolverError::from).unwrap_err();
        assert_eq!(err.code(), "S001");
        let detailed = err.display_detailed();
        assert!(detailed.contains("caused by"));
        assert!(detailed.contains("P001"));
    }
}
