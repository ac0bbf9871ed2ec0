//! The public set API over the trie.

use crate::error::TrieError;

use super::iter::{Iter, SequenceEdges};
use super::node::{TrieEdge, TrieNode};

/// A set of sequences stored as a compressed trie (radix tree).
///
/// Generic over the element type `E: Ord + Clone`: `Ord` keys the sorted
/// per-node edge vectors and `Clone` lets compressed edge labels store
/// copies of elements. Sequences are passed as slices; the empty sequence is
/// a valid, distinct member.
///
/// Insertion is idempotent for duplicates and never fails. There is no
/// removal; the whole structure is discarded as a unit.
#[derive(Debug, Clone)]
pub struct SequenceTrie<E> {
    root: TrieNode<E>,
}

impl<E> SequenceTrie<E> {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    /// Returns the number of distinct sequences stored in the trie.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns true if the trie stores no sequences.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Removes every stored sequence.
    pub fn clear(&mut self) {
        self.root.clear();
    }

    /// Read-only access to the root node for structural inspection.
    pub fn root(&self) -> &TrieNode<E> {
        &self.root
    }

    /// Lazily enumerates every stored sequence exactly once, in pre-order
    /// (a node's own sequence before its descendants, children in sorted
    /// element order). Each call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(&self.root)
    }
}

impl<E: Ord> SequenceTrie<E> {
    /// Returns true if `sequence` was inserted into the trie.
    ///
    /// A single linear walk over the query, independent of trie size.
    pub fn contains(&self, sequence: &[E]) -> bool {
        self.root.contains(sequence)
    }

    /// Iterates, in root-to-terminal order, over every edge on the path
    /// realizing `sequence`.
    ///
    /// Concatenating `(element,) + sub_sequence` over the yielded edges
    /// reconstructs `sequence` exactly.
    ///
    /// # Errors
    ///
    /// [`TrieError::NotFound`] if `sequence` is not a member.
    pub fn sequence_edges<'a, 'q>(
        &'a self,
        sequence: &'q [E],
    ) -> Result<SequenceEdges<'a, 'q, E>, TrieError> {
        if !self.contains(sequence) {
            return Err(TrieError::NotFound);
        }
        Ok(SequenceEdges::new(&self.root, sequence))
    }
}

impl<E: Ord + Clone> SequenceTrie<E> {
    /// Creates a trie holding the given sequences, inserted in order.
    ///
    /// Duplicates are idempotent; the observable set never depends on
    /// insertion order.
    pub fn from_sequences<I, S>(sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[E]>,
    {
        let mut trie = Self::new();
        for sequence in sequences {
            trie.insert(sequence.as_ref());
        }
        trie
    }

    /// Inserts `sequence` into the trie.
    ///
    /// Inserting a sequence that is already present leaves the set
    /// unchanged. The empty sequence is stored via the root's terminal flag
    /// alone. Never fails.
    pub fn insert(&mut self, sequence: &[E]) {
        #[cfg(feature = "tracing")]
        tracing::trace!(sequence_len = sequence.len(), "inserting sequence");

        self.root.insert(sequence);
    }

    /// Computes the shortest prefix of `sequence` that distinguishes it from
    /// every other stored sequence.
    ///
    /// For a singleton trie the answer is the empty sequence. Otherwise the
    /// prefix is assembled from the edge path: each edge contributes its
    /// `element`, and its full `sub_sequence` as well unless it is the final
    /// edge and its child is a true leaf. When the final child still has
    /// outgoing edges, `sequence` is a strict prefix of some longer stored
    /// sequence and its full compressed suffix is required to tell the two
    /// apart.
    ///
    /// # Errors
    ///
    /// [`TrieError::NotFound`] if `sequence` is not a member.
    pub fn shortest_unique_prefix(&self, sequence: &[E]) -> Result<Vec<E>, TrieError> {
        let edges: Vec<&TrieEdge<E>> = self.sequence_edges(sequence)?.collect();
        if self.len() == 1 {
            return Ok(Vec::new());
        }

        let total = edges.len();
        let mut prefix = Vec::new();
        for (index, edge) in edges.into_iter().enumerate() {
            prefix.push(edge.element.clone());
            if index + 1 < total || !edge.child.is_leaf() {
                prefix.extend(edge.sub_sequence.iter().cloned());
            }
        }
        Ok(prefix)
    }
}

impl<E> Default for SequenceTrie<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ord + Clone> FromIterator<Vec<E>> for SequenceTrie<E> {
    fn from_iter<I: IntoIterator<Item = Vec<E>>>(iter: I) -> Self {
        Self::from_sequences(iter)
    }
}

impl<E: Ord + Clone> Extend<Vec<E>> for SequenceTrie<E> {
    fn extend<I: IntoIterator<Item = Vec<E>>>(&mut self, iter: I) {
        for sequence in iter {
            self.insert(&sequence);
        }
    }
}

impl<'a, E: Clone> IntoIterator for &'a SequenceTrie<E> {
    type Item = Vec<E>;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
