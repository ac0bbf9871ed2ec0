//! Iterators over the trie.

use super::node::{TrieEdge, TrieNode};

/// Pre-order iterator over every sequence stored in the trie.
///
/// Yields each stored sequence exactly once as an owned `Vec<E>`, rebuilding
/// it from the edge labels along the way: a terminal node is yielded before
/// its children, and children are visited in sorted element order, so the
/// order is deterministic. Yields `Vec<E>`.
pub struct Iter<'a, E> {
    /// Stack of `(node, position, label_len)` frames. Position 0 means the
    /// node's own terminal flag has not been checked yet; position `k >= 1`
    /// means the next edge to descend is `k - 1`. `label_len` is how many
    /// elements this frame contributed to `buf`.
    stack: Vec<(&'a TrieNode<E>, usize, usize)>,
    /// Elements accumulated along the current root-to-node path.
    buf: Vec<E>,
}

impl<'a, E> Iter<'a, E> {
    pub(crate) fn new(root: &'a TrieNode<E>) -> Self {
        Self {
            stack: vec![(root, 0, 0)],
            buf: Vec::new(),
        }
    }
}

impl<'a, E: Clone> Iterator for Iter<'a, E> {
    type Item = Vec<E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let last = self.stack.len().checked_sub(1)?;
            let (node, position, label_len) = self.stack[last];

            if position == 0 {
                // Yield the node's own sequence before descending.
                self.stack[last].1 += 1;
                if node.is_terminal() {
                    return Some(self.buf.clone());
                }
                continue;
            }

            let edge_index = position - 1;
            if let Some(edge) = node.edges().get(edge_index) {
                // Descend; the next visit of this frame takes the next edge.
                self.stack[last].1 += 1;
                self.buf.push(edge.element.clone());
                self.buf.extend(edge.sub_sequence.iter().cloned());
                self.stack
                    .push((&edge.child, 0, 1 + edge.sub_sequence.len()));
            } else {
                // Done with this subtree; drop its contribution to the path.
                self.stack.pop();
                self.buf.truncate(self.buf.len() - label_len);
            }
        }
    }
}

/// Iterator over the edges traversed from the root to the terminal node
/// realizing a particular stored sequence.
///
/// Constructed by [`SequenceTrie::sequence_edges`], which verifies
/// membership first; concatenating `(element,) + sub_sequence` over the
/// yielded edges, in order, reconstructs the queried sequence exactly.
///
/// [`SequenceTrie::sequence_edges`]: crate::SequenceTrie::sequence_edges
pub struct SequenceEdges<'a, 'q, E> {
    node: &'a TrieNode<E>,
    remaining: &'q [E],
}

impl<'a, 'q, E> SequenceEdges<'a, 'q, E> {
    pub(crate) fn new(root: &'a TrieNode<E>, sequence: &'q [E]) -> Self {
        Self {
            node: root,
            remaining: sequence,
        }
    }
}

impl<'a, 'q, E: Ord> Iterator for SequenceEdges<'a, 'q, E> {
    type Item = &'a TrieEdge<E>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node;
        let head = self.remaining.first()?;

        // Membership was verified on construction, so the walk cannot fall
        // off the tree.
        let edge = node
            .edge(head)
            .expect("edge path diverged from a verified member sequence");
        debug_assert!(self.remaining[1..].starts_with(&edge.sub_sequence));

        self.remaining = &self.remaining[1 + edge.sub_sequence.len()..];
        self.node = &edge.child;
        Some(edge)
    }
}
