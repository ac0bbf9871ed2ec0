//! Compressed sequence trie implementation.
//!
//! A radix trie over generic element sequences. Unbranching element runs are
//! compressed into single edges; each node keeps its outgoing edges in a
//! vector sorted by the edge's first element, searched by binary search.

pub mod iter;
pub mod node;
pub mod set;

pub use node::{TrieEdge, TrieNode};
pub use set::SequenceTrie;
