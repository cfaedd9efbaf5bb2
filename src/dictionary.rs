//! `dictionary` — the order-type-keyed word index
//!
//! The index groups one [`Trie`] per repeat-structure signature the puzzle
//! actually needs. Building it is the dominant cost-reduction step of the
//! whole system: any dictionary word whose signature no puzzle row shares is
//! discarded on sight, so the unrestricted word list never has to fit in
//! memory.
//!
//! Every signature the puzzle requires gets a trie at build time, even if no
//! dictionary word matches it — an empty bucket prunes the search to zero
//! solutions, which is a valid outcome. Asking for a signature the index was
//! never built for is different: it means the index and the puzzle disagree,
//! and the solver surfaces that as a configuration error before searching.

use crate::pattern::OrderType;
use crate::puzzle::Puzzle;
use crate::trie::Trie;
use crate::word_list;
use std::collections::HashMap;
use std::io;
use std::path::Path;

/// Read-only mapping from [`OrderType`] to the trie of dictionary words
/// sharing that signature. Built once, before the search starts.
#[derive(Debug)]
pub struct DictionaryIndex {
    tries: HashMap<OrderType, Trie>,
}

impl DictionaryIndex {
    /// Empty index with one (empty) trie per signature `puzzle` requires.
    fn new_for(puzzle: &Puzzle) -> Self {
        let tries = puzzle
            .order_types()
            .iter()
            .map(|ot| (ot.clone(), Trie::new()))
            .collect();
        Self { tries }
    }

    /// Normalize one raw line and index it if its signature is required.
    /// Returns true iff the word was kept.
    fn add_line(&mut self, raw: &str) -> bool {
        let Some(word) = word_list::normalize_line(raw) else {
            return false;
        };
        match self.tries.get_mut(&OrderType::of_word(&word)) {
            Some(trie) => {
                trie.insert(&word);
                true
            }
            None => false,
        }
    }

    /// Build from an in-memory sequence of raw dictionary lines.
    ///
    /// Lines that fail normalization, and words whose signature no puzzle
    /// row shares, are skipped.
    pub fn build<I, S>(puzzle: &Puzzle, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::new_for(puzzle);
        let mut seen = 0usize;
        for raw in lines {
            index.add_line(raw.as_ref());
            seen += 1;
        }
        log::info!(
            "indexed {} of {} dictionary lines across {} word shapes",
            index.word_count(),
            seen,
            index.tries.len()
        );
        index
    }

    /// Build by streaming a word-list file line by line.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if the file cannot be opened or a line cannot
    /// be read. Malformed lines are not errors; they are skipped.
    pub fn load_from_path<P: AsRef<Path>>(puzzle: &Puzzle, path: P) -> io::Result<Self> {
        let mut index = Self::new_for(puzzle);
        let mut seen = 0usize;
        for line in word_list::open_lines(path)? {
            index.add_line(&line?);
            seen += 1;
        }
        log::info!(
            "indexed {} of {} dictionary lines across {} word shapes",
            index.word_count(),
            seen,
            index.tries.len()
        );
        Ok(index)
    }

    /// The trie holding every indexed word with signature `ot`, or `None`
    /// if this index was built without it — a configuration error the
    /// caller must surface, since an index built from the same puzzle
    /// registers all of its signatures up front.
    #[must_use]
    pub fn trie_for(&self, ot: &OrderType) -> Option<&Trie> {
        self.tries.get(ot)
    }

    /// Total words retained across all tries.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.tries.values().map(Trie::len).sum()
    }
}
