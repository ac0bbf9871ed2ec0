//! Error type for structural queries against the trie.

use std::error::Error;
use std::fmt;

/// Errors returned by structural queries against sequences absent from the
/// trie.
///
/// Only the two path-walking queries ([`SequenceTrie::sequence_edges`] and
/// [`SequenceTrie::shortest_unique_prefix`]) can fail; insertion, membership
/// testing and iteration are total.
///
/// [`SequenceTrie::sequence_edges`]: crate::SequenceTrie::sequence_edges
/// [`SequenceTrie::shortest_unique_prefix`]: crate::SequenceTrie::shortest_unique_prefix
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrieError {
    /// The queried sequence is not a member of the trie.
    NotFound,
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrieError::NotFound => write!(f, "sequence is not contained in this trie"),
        }
    }
}

impl Error for TrieError {}
