//! The puzzle model: reel symbols, the fixed solution table, and the derived
//! assignment order.
//!
//! A puzzle is a table of "solutions" — rows of symbol names, one row per
//! reel spin that is known to spell a dictionary word. Parsing interns each
//! distinct name into a small [`Symbol`] id, precomputes every row's
//! [`OrderType`] once (the rows are static, so the signature cache is built
//! eagerly rather than memoized per lookup), and fixes the search's
//! assignment order: most frequent symbol first, ties by first appearance.

use crate::errors::PuzzleError;
use crate::letters::ALPHABET_SIZE;
use crate::pattern::OrderType;
use fancy_regex::Regex;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

/// Matches a well-formed symbol name.
static SYMBOL_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").unwrap());

/// An opaque reel icon, interned to a dense index.
///
/// Ids are assigned in first-appearance order while parsing the table, which
/// is also the tie-break order for assignment frequency ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Slot index for array-backed symbol maps.
    #[inline]
    #[must_use]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Interned symbol names.
///
/// The solver is single-threaded and symbol ids are dense, so this is a
/// plain vector-plus-map table rather than a shared-pointer cache.
#[derive(Debug, Clone, Default)]
struct SymbolTable {
    names: Vec<String>,
    by_name: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// Intern a name, returning the existing id on a repeat sighting.
    fn intern(&mut self, name: &str) -> Symbol {
        if let Some(&sym) = self.by_name.get(name) {
            return sym;
        }
        let sym = Symbol(self.names.len() as u8);
        self.names.push(name.to_string());
        self.by_name.insert(name.to_string(), sym);
        sym
    }

    fn len(&self) -> usize {
        self.names.len()
    }
}

/// The fixed puzzle: solution rows over a closed symbol set, plus everything
/// derived from them that the search consults on every node.
#[derive(Debug, Clone)]
pub struct Puzzle {
    symbols: SymbolTable,
    solutions: Vec<Vec<Symbol>>,
    /// Precomputed `OrderType` per solution row, parallel to `solutions`.
    order_types: Vec<OrderType>,
    /// Distinct symbols, most frequent first, ties by first appearance.
    by_frequency: Vec<Symbol>,
}

impl Puzzle {
    /// The reel table this crate was written to solve, as transcribed from
    /// the machine. Rows are reported as-is; the solver never second-guesses
    /// the table.
    pub const BUILTIN_TABLE: &'static str = "\
club star grapes seven seven
cherry crown spade heart star
# Stupid freaking DVD puzzle,
club horseshoe grapes bar star
bell cherry club seven grapes
horseshoe dollar club diamond bar
cherry diamond cherry club star
bar horseshoe spade grapes club
crown diamond cherry club heart
spade crown club grapes bell
seven club star diamond bar
";

    fn new(symbols: SymbolTable, solutions: Vec<Vec<Symbol>>) -> Self {
        let order_types = solutions
            .iter()
            .map(|row| OrderType::of(row.iter().copied()))
            .collect();

        let mut counts = vec![0usize; symbols.len()];
        for row in &solutions {
            for sym in row {
                counts[sym.index()] += 1;
            }
        }
        // stable sort: equal counts keep id (first-appearance) order
        let mut by_frequency: Vec<Symbol> =
            (0..symbols.len()).map(|i| Symbol(i as u8)).collect();
        by_frequency.sort_by_key(|sym| Reverse(counts[sym.index()]));

        Self { symbols, solutions, order_types, by_frequency }
    }

    /// The solution rows, in table order.
    #[must_use]
    pub fn solutions(&self) -> &[Vec<Symbol>] {
        &self.solutions
    }

    /// Precomputed repeat-structure signatures, parallel to [`solutions`](Self::solutions).
    #[must_use]
    pub fn order_types(&self) -> &[OrderType] {
        &self.order_types
    }

    /// Distinct symbols in assignment order: descending occurrence count,
    /// ties broken by first appearance in the table. Binding the most
    /// constrained symbols first maximizes early pruning.
    #[must_use]
    pub fn symbols_by_frequency(&self) -> &[Symbol] {
        &self.by_frequency
    }

    /// All symbols in first-appearance (id) order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.symbols.len()).map(|i| Symbol(i as u8))
    }

    /// Number of distinct symbols in the table.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// The display name a symbol was interned from.
    #[must_use]
    pub fn name(&self, sym: Symbol) -> &str {
        &self.symbols.names[sym.index()]
    }

    /// One solution row rendered as its symbol names, space-separated.
    #[must_use]
    pub fn row_names(&self, row: &[Symbol]) -> String {
        row.iter().map(|&sym| self.name(sym)).collect::<Vec<_>>().join(" ")
    }
}

/// Parse a puzzle table from text.
///
/// One solution per line, symbol names separated by whitespace. Anything
/// from `#` to end of line is a comment; blank lines are ignored.
impl FromStr for Puzzle {
    type Err = Box<PuzzleError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut symbols = SymbolTable::default();
        let mut solutions = Vec::new();

        for raw_line in s.lines() {
            let line = match raw_line.split_once('#') {
                Some((head, _)) => head,
                None => raw_line,
            }
            .trim();
            if line.is_empty() {
                continue;
            }

            let mut row = Vec::new();
            for name in line.split_whitespace() {
                if !matches!(SYMBOL_NAME_RE.is_match(name), Ok(true)) {
                    return Err(Box::new(PuzzleError::InvalidSymbolName {
                        name: name.to_string(),
                    }));
                }
                row.push(symbols.intern(name));
            }
            solutions.push(row);
        }

        if solutions.is_empty() {
            return Err(Box::new(PuzzleError::EmptyTable));
        }
        if symbols.len() > ALPHABET_SIZE {
            return Err(Box::new(PuzzleError::TooManySymbols { count: symbols.len() }));
        }

        Ok(Puzzle::new(symbols, solutions))
    }
}
