//! # `seqtrie` - Compressed Sequence Trie
//!
//! A generic compressed trie (radix tree) over arbitrary finite sequences of
//! ordered elements - not just characters or bytes. The trie stores a set of
//! sequences and supports membership testing, lazy enumeration of all stored
//! sequences, traversal of the edge path realizing a given sequence, and
//! computation of the shortest prefix that uniquely identifies a sequence
//! among everything else in the set.
//!
//! ## Structure
//!
//! Unbranching runs of elements are collapsed into single edges (path
//! compression): every edge carries one distinguishing `element` plus a
//! compressed `sub_sequence` of zero or more further elements. Insertion
//! splits an edge at the divergence point when a new sequence departs in the
//! middle of a compressed run, re-parenting the existing subtree by moving
//! ownership rather than copying it.
//!
//! Ownership is strictly hierarchical: each node owns its outgoing edges and
//! each edge exclusively owns its child node. There are no parent pointers,
//! no shared subtrees and no cycles, so dropping the trie is a plain
//! recursive drop.
//!
//! ## Example
//!
//! ```rust
//! use seqtrie::SequenceTrie;
//!
//! let mut trie = SequenceTrie::new();
//! trie.insert(&[1, 9]);
//! trie.insert(&[2, 9]);
//!
//! assert!(trie.contains(&[1, 9]));
//! assert!(!trie.contains(&[1]));
//! assert_eq!(trie.len(), 2);
//!
//! // One leading element is enough to tell the two sequences apart.
//! assert_eq!(trie.shortest_unique_prefix(&[1, 9]).unwrap(), vec![1]);
//! assert_eq!(trie.shortest_unique_prefix(&[2, 9]).unwrap(), vec![2]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod trie;

pub use error::TrieError;
pub use trie::iter::{Iter, SequenceEdges};
pub use trie::{SequenceTrie, TrieEdge, TrieNode};
