//! Prefix tree over lowercase words with exact and wildcard membership.
//!
//! The fuzzy query is the search engine's pruning primitive: a wildcard
//! position descends only the child edges that actually exist, so the
//! branching factor is bounded by the live fan-out of the tree rather than
//! the full alphabet.

use crate::letters::{letter_index, MaskCell, ALPHABET_SIZE};

/// Uses array-based child storage instead of a `HashMap` since edges are
/// limited to 'a'-'z'.
#[derive(Debug)]
struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    /// A complete word ends at this node.
    terminal: bool,
}

impl Default for TrieNode {
    fn default() -> Self {
        Self {
            children: [const { None }; ALPHABET_SIZE],
            terminal: false,
        }
    }
}

impl TrieNode {
    fn child(&self, c: char) -> Option<&TrieNode> {
        self.children[letter_index(c)].as_deref()
    }

    /// Fuzzy descent. A concrete cell follows its single edge if present;
    /// a wildcard tries every live edge; an exhausted mask succeeds only on
    /// a terminal node. Absence of an edge is an ordinary `false`, not an
    /// error.
    fn matches(&self, mask: &[MaskCell]) -> bool {
        match mask.split_first() {
            None => self.terminal,
            Some((MaskCell::Letter(c), rest)) => {
                self.child(*c).is_some_and(|child| child.matches(rest))
            }
            Some((MaskCell::Any, rest)) => {
                self.children.iter().flatten().any(|child| child.matches(rest))
            }
        }
    }
}

/// Prefix tree over letter sequences; each node optionally marks "a complete
/// word ends here". Owned by the dictionary index and never mutated after
/// construction.
///
/// Words must already be normalized to lowercase a-z (see
/// [`crate::word_list::normalize_line`]); feeding anything else panics.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word, marking its terminal node. Inserting a word twice is a
    /// no-op.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children[letter_index(c)]
                .get_or_insert_with(Box::default)
                .as_mut();
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// Exact membership: every letter present in order, ending on a terminal
    /// node.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.chars() {
            match node.child(c) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
    }

    /// Fuzzy membership: true iff some inserted word matches every concrete
    /// cell exactly and has any letter at each wildcard cell.
    #[must_use]
    pub fn fuzzy_contains(&self, mask: &[MaskCell]) -> bool {
        self.root.matches(mask)
    }

    /// Number of distinct words inserted.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
