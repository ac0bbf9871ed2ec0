//! Nodes and compressed edges of the trie.
//!
//! Each node keeps its outgoing edges in a `Vec` sorted by the edge's first
//! element and searched by binary search. Edges exclusively own their child
//! node, so the whole structure is a singly rooted owning tree.

/// A compressed edge: one distinguishing element plus the run of elements
/// collapsed into it by path compression.
#[derive(Debug, Clone)]
pub struct TrieEdge<E> {
    /// The single distinguishing first element of this edge. Doubles as the
    /// sort key in the parent's edge vector.
    pub element: E,
    /// Zero or more additional elements compressed into this edge. No node
    /// exists for the intermediate single-child positions this run spans.
    pub sub_sequence: Box<[E]>,
    /// The child node, exclusively owned by this edge.
    pub child: TrieNode<E>,
}

/// A position in the trie reachable by some prefix of the stored sequences.
///
/// The public surface is read-only; all mutation goes through the owning
/// [`SequenceTrie`](crate::SequenceTrie).
#[derive(Debug, Clone)]
pub struct TrieNode<E> {
    /// True iff the sequence ending exactly at this node was inserted.
    terminal: bool,
    /// Number of distinct sequences stored at or below this node.
    count: usize,
    /// Outgoing edges, sorted by `element`. At most one edge per distinct
    /// first element.
    edges: Vec<TrieEdge<E>>,
}

impl<E> TrieNode<E> {
    pub(crate) fn new() -> Self {
        Self {
            terminal: false,
            count: 0,
            edges: Vec::new(),
        }
    }

    /// A fresh terminal node with no outgoing edges.
    fn leaf() -> Self {
        Self {
            terminal: true,
            count: 1,
            edges: Vec::new(),
        }
    }

    /// Returns true iff the sequence ending exactly at this node was
    /// inserted.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Returns the number of distinct sequences stored in this node's
    /// subtree, including the node itself if it is terminal.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no sequence is stored in this node's subtree.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true if this node has no outgoing edges.
    pub fn is_leaf(&self) -> bool {
        self.edges.is_empty()
    }

    /// The outgoing edges of this node, sorted by their first element.
    pub fn edges(&self) -> &[TrieEdge<E>] {
        &self.edges
    }

    pub(crate) fn clear(&mut self) {
        self.terminal = false;
        self.count = 0;
        self.edges.clear();
    }

    /// `count == terminal + sum of child counts`, restored after every
    /// structural change.
    fn refresh_count(&mut self) {
        self.count = usize::from(self.terminal)
            + self.edges.iter().map(|edge| edge.child.count).sum::<usize>();
    }
}

impl<E: Ord> TrieNode<E> {
    fn edge_position(&self, element: &E) -> Result<usize, usize> {
        self.edges
            .binary_search_by(|edge| edge.element.cmp(element))
    }

    /// Returns the outgoing edge whose first element is `element`, if any.
    pub fn edge(&self, element: &E) -> Option<&TrieEdge<E>> {
        self.edge_position(element)
            .ok()
            .map(|pos| &self.edges[pos])
    }

    /// Walks the trie from this node, matching `sequence` element-wise
    /// against compressed edges. A single linear walk; never fails.
    pub(crate) fn contains(&self, sequence: &[E]) -> bool {
        let mut node = self;
        let mut remaining = sequence;

        loop {
            let head = match remaining.first() {
                Some(head) => head,
                None => return node.terminal,
            };
            let edge = match node.edge(head) {
                Some(edge) => edge,
                None => return false,
            };

            let rest = &remaining[1..];
            let label = &edge.sub_sequence;
            if rest.len() < label.len() || rest[..label.len()] != label[..] {
                return false;
            }

            remaining = &rest[label.len()..];
            node = &edge.child;
        }
    }
}

impl<E: Ord + Clone> TrieNode<E> {
    /// Inserts `sequence` into the subtree rooted at this node.
    ///
    /// The empty sequence only flips this node's terminal flag; it can never
    /// be represented by an edge. Otherwise the first element selects an
    /// outgoing edge: with no match the whole remainder becomes one new
    /// compressed edge to a terminal leaf; with a match whose label is a
    /// prefix of the remainder we descend past it; otherwise the edge is
    /// split at the divergence point and the old subtree is re-parented by
    /// moving it, never by copying.
    pub(crate) fn insert(&mut self, sequence: &[E]) {
        if sequence.is_empty() {
            self.terminal = true;
        } else {
            let head = &sequence[0];
            let rest = &sequence[1..];

            match self.edge_position(head) {
                Err(pos) => {
                    self.edges.insert(
                        pos,
                        TrieEdge {
                            element: head.clone(),
                            sub_sequence: Box::from(rest),
                            child: TrieNode::leaf(),
                        },
                    );
                }
                Ok(pos) => {
                    let common = common_prefix_len(&self.edges[pos].sub_sequence, rest);
                    if common == self.edges[pos].sub_sequence.len() {
                        // Label is a prefix of the remainder: descend.
                        self.edges[pos].child.insert(&rest[common..]);
                    } else {
                        // Split at the divergence point. The old child
                        // subtree moves under a fresh intermediate node,
                        // structurally unchanged.
                        let TrieEdge {
                            element,
                            sub_sequence,
                            child,
                        } = self.edges.remove(pos);

                        let mut mid = TrieNode::new();
                        mid.graft(
                            sub_sequence[common].clone(),
                            &sub_sequence[common + 1..],
                            child,
                        );
                        mid.insert(&rest[common..]);

                        self.edges.insert(
                            pos,
                            TrieEdge {
                                element,
                                sub_sequence: Box::from(&sub_sequence[..common]),
                                child: mid,
                            },
                        );
                    }
                }
            }
        }

        self.refresh_count();
    }

    /// Re-parents an existing subtree under this node, keyed by `element`
    /// with the given compressed label. Ownership of the subtree moves; its
    /// structure does not change.
    fn graft(&mut self, element: E, sub_sequence: &[E], child: TrieNode<E>) {
        let pos = match self.edge_position(&element) {
            Err(pos) => pos,
            Ok(_) => unreachable!("re-parented subtree collides with an existing edge"),
        };
        self.edges.insert(
            pos,
            TrieEdge {
                element,
                sub_sequence: Box::from(sub_sequence),
                child,
            },
        );
        self.refresh_count();
    }
}

/// Length of the longest common prefix of two element slices.
pub(crate) fn common_prefix_len<E: PartialEq>(a: &[E], b: &[E]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}
