//! Model-based property tests against std collections.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use seqtrie::SequenceTrie;

#[derive(Debug, Clone)]
enum Operation {
    Insert(Vec<u8>),
    Contains(Vec<u8>),
}

/// Short sequences over a tiny alphabet so that splits, shared prefixes and
/// duplicate inserts actually happen.
fn sequence_strategy() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0u8..4, 0..6)
}

proptest! {
    #[test]
    fn test_trie_matches_std_set(ops in proptest::collection::vec(
        prop_oneof![
            sequence_strategy().prop_map(Operation::Insert),
            sequence_strategy().prop_map(Operation::Contains),
        ],
        1..100
    )) {
        let mut model = HashSet::new();
        let mut trie = SequenceTrie::new();

        for op in ops {
            match op {
                Operation::Insert(sequence) => {
                    model.insert(sequence.clone());
                    trie.insert(&sequence);
                }
                Operation::Contains(sequence) => {
                    prop_assert_eq!(
                        trie.contains(&sequence),
                        model.contains(&sequence),
                        "membership mismatch for {:?}", sequence
                    );
                }
            }
        }

        // Final consistency sweep.
        prop_assert_eq!(trie.len(), model.len());
        let enumerated: HashSet<Vec<u8>> = trie.iter().collect();
        prop_assert_eq!(&enumerated, &model);

        for sequence in &model {
            let mut rebuilt = Vec::new();
            for edge in trie.sequence_edges(sequence).unwrap() {
                rebuilt.push(edge.element);
                rebuilt.extend_from_slice(&edge.sub_sequence);
            }
            prop_assert_eq!(&rebuilt, sequence);

            let prefix = trie.shortest_unique_prefix(sequence).unwrap();
            prop_assert!(sequence.starts_with(&prefix));
            if model.len() == 1 {
                prop_assert!(prefix.is_empty());
            }
        }
    }

    #[test]
    fn test_insertion_order_independence(
        (sequences, shuffled) in proptest::collection::vec(sequence_strategy(), 0..12)
            .prop_flat_map(|sequences| {
                let reordered = Just(sequences.clone()).prop_shuffle();
                (Just(sequences), reordered)
            })
    ) {
        let first = SequenceTrie::from_sequences(&sequences);
        let second = SequenceTrie::from_sequences(&shuffled);

        prop_assert_eq!(first.len(), second.len());
        let first_set: BTreeSet<Vec<u8>> = first.iter().collect();
        let second_set: BTreeSet<Vec<u8>> = second.iter().collect();
        prop_assert_eq!(first_set, second_set);
    }

    #[test]
    fn test_negative_membership_of_mutations(
        sequences in proptest::collection::vec(sequence_strategy(), 1..10)
    ) {
        let model: HashSet<Vec<u8>> = sequences.iter().cloned().collect();
        let trie = SequenceTrie::from_sequences(&sequences);

        for sequence in &sequences {
            if sequence.is_empty() {
                continue;
            }

            let mut extended = sequence.clone();
            extended.push(*sequence.last().unwrap());
            let mut prepended = vec![sequence[0]];
            prepended.extend_from_slice(sequence);
            let mutations = [
                extended,
                prepended,
                sequence[..sequence.len() - 1].to_vec(),
                sequence[1..].to_vec(),
            ];

            for mutation in mutations {
                if !model.contains(&mutation) {
                    prop_assert!(
                        !trie.contains(&mutation),
                        "non-member {:?} reported present", mutation
                    );
                }
            }
        }
    }

    #[test]
    fn test_iteration_is_deterministic(
        sequences in proptest::collection::vec(sequence_strategy(), 0..12)
    ) {
        let trie = SequenceTrie::from_sequences(&sequences);

        // Fresh traversals over an unchanged trie yield the same order.
        let first: Vec<Vec<u8>> = trie.iter().collect();
        let second: Vec<Vec<u8>> = trie.iter().collect();
        prop_assert_eq!(first, second);
    }
}
