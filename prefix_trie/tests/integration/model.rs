/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Check tries against the standard ordered collections.
#![cfg(not(miri))]
// Disabled when testing with Miri,
// as proptest accesses the file system, which is not supported Miri.

use crate::utils::assert_invariants;
use prefix_trie::{DataTrie, Trie};
use std::collections::{BTreeMap, BTreeSet};

#[derive(proptest_derive::Arbitrary, Debug)]
/// Enum representing operations that can be performed on a trie.
/// Used for in the proptests below.
///
/// Keys are drawn from a five-letter alphabet, so that they
/// often share prefixes.
enum TrieOperation<Data> {
    Insert(
        #[proptest(strategy = "proptest::collection::vec(97..102u8, 0..6)")] Vec<u8>,
        Data,
    ),
    Remove(#[proptest(strategy = "proptest::collection::vec(97..102u8, 0..6)")] Vec<u8>),
}

/// The number of nodes needed to store `keys`: one per distinct
/// non-empty prefix, plus the root.
fn expected_n_nodes<'a>(keys: impl IntoIterator<Item = &'a Vec<u8>>) -> usize {
    let prefixes = keys
        .into_iter()
        .flat_map(|key| (1..=key.len()).map(move |len| &key[..len]))
        .collect::<BTreeSet<_>>();
    1 + prefixes.len()
}

proptest::proptest! {
    #[test]
    /// Check whether the trie behaves like a [`BTreeSet<Vec<u8>>`]
    /// when inserting and removing strings, and whether removals
    /// prune every node that is no longer needed.
    fn behaves_like_a_btree_set(ops: Vec<TrieOperation<()>>) {
        let mut trie = Trie::<u8>::new();
        let mut btreeset = BTreeSet::new();

        for op in ops {
            match op {
                TrieOperation::Insert(k, ()) => {
                    let inserted = trie.insert(&k).is_some();
                    assert_eq!(inserted, !k.is_empty());
                    if inserted {
                        btreeset.insert(k);
                    }
                }
                TrieOperation::Remove(k) => {
                    let removed = trie.remove(&k).is_some();
                    assert_eq!(removed, btreeset.remove(&k), "Removal of {k:?} disagrees");
                }
            }
            assert_invariants(trie.root());
            assert_eq!(trie.len(), btreeset.len());
        }

        let mut trie_entries = trie.strings();
        trie_entries.sort();
        let set_entries = btreeset.iter().cloned().collect::<Vec<_>>();
        assert_eq!(trie_entries, set_entries, "Trie and BTreeSet should report the same strings");
        assert_eq!(trie.n_nodes(), expected_n_nodes(&btreeset));
        for key in &btreeset {
            assert!(trie.contains(key));
        }
    }

    #[test]
    /// Check whether the trie behaves like a [`BTreeMap<Vec<u8>, _>`]
    /// when inserting payloads and removing strings.
    fn behaves_like_a_btree_map(ops: Vec<TrieOperation<i32>>) {
        let mut trie = DataTrie::<u8, i32>::new();
        let mut btreemap = BTreeMap::new();

        for op in ops {
            match op {
                TrieOperation::Insert(k, v) => {
                    if trie.insert_with_data(&k, v).is_some() {
                        btreemap.insert(k, v);
                    }
                }
                TrieOperation::Remove(k) => {
                    let removed = trie.remove(&k).is_some();
                    assert_eq!(removed, btreemap.remove(&k).is_some());
                }
            }
            assert_invariants(trie.root());
        }

        let trie_entries = trie
            .iter()
            .map(|(key, node)| (key, *node.data()))
            .collect::<Vec<_>>();
        let map_entries = btreemap.iter().map(|(key, data)| (key.clone(), *data)).collect::<Vec<_>>();
        assert_eq!(trie_entries, map_entries, "Trie and BTreeMap should report the same entries");
        assert_eq!(trie.len(), btreemap.len());
        assert_eq!(trie.n_nodes(), expected_n_nodes(btreemap.keys()));
    }

    #[test]
    /// A clone has the same content as the original, and
    /// doesn't change when the original does.
    fn clones_are_independent(ops: Vec<TrieOperation<i32>>) {
        let mut trie = DataTrie::<u8, i32>::new();
        let mut removals = Vec::new();
        for op in ops {
            match op {
                TrieOperation::Insert(k, v) => {
                    trie.insert_with_data(&k, v);
                }
                TrieOperation::Remove(k) => removals.push(k),
            }
        }

        let clone = trie.clone();
        assert_invariants(clone.root());
        assert_eq!(&clone, &trie);

        let before = clone.iter().map(|(key, node)| (key, *node.data())).collect::<Vec<_>>();
        for k in removals {
            trie.remove(&k);
        }
        let after = clone.iter().map(|(key, node)| (key, *node.data())).collect::<Vec<_>>();
        assert_eq!(before, after);
    }
}
