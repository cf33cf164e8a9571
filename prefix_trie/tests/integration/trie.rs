/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use crate::utils::{
    NON_EXISTENT_DATA, TEST_DATA, assert_invariants, populate, populated, sorted_strings,
    sorted_test_data,
};
use pretty_assertions::assert_eq;
use prefix_trie::{Trie, TrieError, TrieNode};
use rstest::rstest;

/// Forwards to `insta::assert_debug_snapshot!`,
/// but is disabled in Miri, as snapshot testing
/// involves file I/O, which is not supported in Miri.
macro_rules! assert_debug_snapshot {
    ($($arg:tt)*) => {
        #[cfg(not(miri))]
        insta::assert_debug_snapshot!($($arg)*);
    };
}

#[test]
fn test_counters_on_empty_tries() {
    let trie = Trie::<u8>::new();
    assert_eq!(trie.n_nodes(), 1);
    assert_eq!(trie.len(), 0);
    assert!(trie.is_empty());
    assert_eq!(trie.root().n_children(), 0);
    assert!(!trie.root().is_terminal());
    assert!(trie.strings().is_empty());
}

#[test]
fn test_insert() {
    let mut trie = populated();
    assert_eq!(trie.len(), TEST_DATA.len());

    // New strings are added, and can be found straight away.
    for s in NON_EXISTENT_DATA {
        let inserted: *const TrieNode<u8> = trie.insert_str(s).unwrap();
        let found = trie.find_str(s).unwrap();
        assert!(std::ptr::eq(inserted, found), "`{s}` wasn't found at its node");
    }
    assert_eq!(trie.len(), TEST_DATA.len() + NON_EXISTENT_DATA.len());

    // Inserting them again returns the very same nodes.
    for s in NON_EXISTENT_DATA {
        let first: *const TrieNode<u8> = trie.find_str(s).unwrap();
        let second = trie.insert_str(s).unwrap();
        assert!(std::ptr::eq(first, second), "`{s}` was inserted twice");
    }
    assert_eq!(trie.len(), TEST_DATA.len() + NON_EXISTENT_DATA.len());
    assert_invariants(trie.root());
}

#[test]
fn test_insert_is_idempotent() {
    let mut trie = populated();
    let n_nodes = trie.n_nodes();
    let counts = |trie: &Trie| {
        ["t", "te", "i", "in"].map(|prefix| {
            let mut node = trie.root();
            for symbol in prefix.bytes() {
                node = node.child(symbol).unwrap();
            }
            node.n_children()
        })
    };
    let before = counts(&trie);

    let node = trie.insert(b"ted").unwrap();
    assert_eq!(node.n_children(), 0);
    assert!(node.is_terminal());

    assert_eq!(counts(&trie), before);
    assert_eq!(trie.n_nodes(), n_nodes);
    assert_eq!(trie.len(), TEST_DATA.len());
}

#[test]
fn test_empty_key() {
    let mut trie = populated();
    assert!(trie.insert(b"").is_none());
    assert_eq!(trie.try_insert(b""), Err(TrieError::EmptyKey));
    assert!(trie.find(b"").is_none());
    assert!(!trie.contains(b""));
    assert!(trie.remove(b"").is_none());
    assert_eq!(trie.len(), TEST_DATA.len());
}

#[test]
fn test_find() {
    let trie = populated();

    for s in TEST_DATA {
        let node = trie.find_str(s).unwrap();
        assert!(node.is_terminal());
        assert_eq!(node.symbol(), *s.as_bytes().last().unwrap());
    }
    for s in NON_EXISTENT_DATA {
        assert!(trie.find_str(s).is_none(), "`{s}` shouldn't be stored");
    }
    assert!(trie.find_str("\0").is_none());
}

#[rstest]
#[case::inner_node("te", TrieError::NotTerminal)]
#[case::past_a_leaf("tene", TrieError::NoPath { matched: 3 })]
#[case::no_path_from_root("kyle", TrieError::NoPath { matched: 0 })]
#[case::case_sensitive("TEA", TrieError::NoPath { matched: 0 })]
#[case::diverges_midway("tx", TrieError::NoPath { matched: 1 })]
#[case::empty("", TrieError::EmptyKey)]
fn test_failure_reasons(#[case] key: &str, #[case] expected: TrieError) {
    let mut trie = populated();
    let snapshot = trie.clone();

    assert_eq!(trie.try_find(key.as_bytes()).unwrap_err(), expected);
    assert_eq!(trie.try_remove(key.as_bytes()).unwrap_err(), expected);

    // Failed removals leave the trie untouched.
    assert_eq!(trie, snapshot);
    assert_eq!(trie.n_nodes(), snapshot.n_nodes());
}

#[test]
fn test_contains() {
    let trie = populated();
    for s in TEST_DATA {
        assert!(trie.contains_str(s));
    }
    for s in NON_EXISTENT_DATA {
        assert!(!trie.contains_str(s));
    }
}

#[test]
fn test_remove() {
    let mut trie = populated();
    for s in NON_EXISTENT_DATA {
        assert!(trie.insert_str(s).is_some());
    }

    // Remove the initial data.
    for s in TEST_DATA {
        assert!(trie.remove_str(s).is_some(), "`{s}` should be removable");
        assert!(trie.find_str(s).is_none(), "`{s}` is still stored");
        assert_invariants(trie.root());
    }

    // Only the new data is left.
    for s in NON_EXISTENT_DATA {
        assert!(trie.find_str(s).is_some(), "`{s}` should still be stored");
    }
    assert_eq!(trie.len(), NON_EXISTENT_DATA.len());

    // Empty the trie.
    let mut last_trim_point: Option<*const TrieNode<u8>> = None;
    for s in NON_EXISTENT_DATA {
        last_trim_point = trie.remove_str(s).map(|node| node as *const _);
    }

    // Pruning went all the way back to the root.
    assert!(std::ptr::eq(last_trim_point.unwrap(), trie.root()));
    assert_eq!(trie.root().n_children(), 0);
    assert_eq!(trie.n_nodes(), 1);
    assert!(trie.is_empty());
}

#[test]
fn test_remove_twice() {
    let mut trie = populated();
    assert!(trie.remove(b"tea").is_some());
    assert_eq!(trie.try_remove(b"tea").unwrap_err(), TrieError::NoPath { matched: 2 });
    assert_eq!(trie.len(), TEST_DATA.len() - 1);
}

#[test]
fn test_remove_all_prunes_to_the_root() {
    let mut trie = populated();
    for s in TEST_DATA {
        trie.remove_str(s);
    }
    assert_eq!(trie.root().n_children(), 0);
    assert_eq!(trie.n_nodes(), 1);
    assert!(trie.strings().is_empty());
}

#[test]
fn test_num_children() {
    let mut trie = populated();

    let in_node: *const TrieNode<u8> = trie.find(b"in").unwrap();
    assert_eq!(trie.find(b"in").unwrap().n_children(), 1);

    let new_node = trie.insert(b"into").unwrap();
    assert_eq!(new_node.n_children(), 0);
    assert_eq!(trie.find(b"in").unwrap().n_children(), 2);

    let trim_point = trie.remove(b"inn").unwrap();
    assert!(std::ptr::eq(trim_point, in_node));
    assert_eq!(trim_point.n_children(), 1);
    assert!(trim_point.child(b't').is_some());

    trie.insert(b"intone");
    assert_eq!(trie.find(b"in").unwrap().n_children(), 1);
    assert_invariants(trie.root());
}

#[test]
fn test_remove_keeps_branching_nodes() {
    let mut trie = Trie::<u8>::new();
    for s in ["to", "tea", "ten", "i", "in"] {
        trie.insert_str(s);
    }
    assert_debug_snapshot!(trie, @r###"
    (root)
      ↳i = ()
        ↳n = ()
      ↳t
        ↳e
          ↳a = ()
          ↳n = ()
        ↳o = ()
    "###);

    // `te` branches, so it survives.
    let trim_point = trie.remove(b"tea").unwrap();
    assert_eq!(trim_point.symbol(), b'e');
    assert_eq!(trim_point.n_children(), 1);
    assert_debug_snapshot!(trie, @r###"
    (root)
      ↳i = ()
        ↳n = ()
      ↳t
        ↳e
          ↳n = ()
        ↳o = ()
    "###);

    // `te` doesn't lead to any string anymore, pruning stops at `t`.
    let trim_point = trie.remove(b"ten").unwrap();
    assert_eq!(trim_point.symbol(), b't');
    assert_eq!(trim_point.n_children(), 1);
    assert_debug_snapshot!(trie, @r###"
    (root)
      ↳i = ()
        ↳n = ()
      ↳t
        ↳o = ()
    "###);

    // `i` is a string end with children: only its flag is cleared.
    let trim_point: *const TrieNode<u8> = trie.remove(b"i").unwrap();
    assert!(std::ptr::eq(trim_point, trie.root()));
    assert_debug_snapshot!(trie, @r###"
    (root)
      ↳i
        ↳n = ()
      ↳t
        ↳o = ()
    "###);

    // Now `i` can go too.
    trie.remove(b"in");
    assert_debug_snapshot!(trie, @r###"
    (root)
      ↳t
        ↳o = ()
    "###);
    assert_eq!(trie.n_nodes(), 3);
    assert_eq!(trie.len(), 1);
}

#[test]
fn test_get_all_strings() {
    let trie = populated();
    let strings = trie.strings();
    assert_eq!(strings.len(), TEST_DATA.len());
    assert_eq!(sorted_strings(strings), sorted_test_data());
}

#[test]
fn test_get_all_strings_is_order_independent() {
    let mut reversed = Trie::<u8>::new();
    for s in TEST_DATA.iter().rev() {
        reversed.insert_str(s);
    }
    assert_eq!(reversed, populated());
    assert_eq!(sorted_strings(reversed.strings()), sorted_test_data());
}

#[test]
fn test_get_all_strings_with_nodes() {
    let trie = populated();
    let strings_with_nodes = trie.strings_with_nodes();

    let strings = strings_with_nodes
        .iter()
        .map(|(key, _)| key.clone())
        .collect::<Vec<_>>();
    assert_eq!(sorted_strings(strings), sorted_test_data());

    for (key, node) in strings_with_nodes {
        let expected = trie.find(&key).unwrap();
        assert!(std::ptr::eq(expected, node));
    }
}

#[test]
/// Verify that the cloned trie is an independent copy.
fn test_trie_clone() {
    let mut t1 = populated();
    let t2 = t1.clone();
    assert_eq!(t1, t2);
    assert_invariants(t2.root());

    t1.remove(b"A");
    assert_eq!(t1.strings().len() + 1, t2.strings().len());
    assert!(t2.contains(b"A"));
    assert_ne!(t1, t2);

    // Moving out of a trie leaves an empty one behind.
    let mut t3 = populated();
    let t4 = std::mem::take(&mut t3);
    assert!(t3.strings().is_empty());
    assert_eq!(t3.n_nodes(), 1);
    assert_eq!(t4.strings().len(), TEST_DATA.len());

    let mut t5 = t4.clone();
    t5.clear();
    assert!(t5.is_empty());
    assert_eq!(t4.len(), TEST_DATA.len());
}

#[test]
fn test_clone_sub_trie_rebuilds_counters() {
    let trie = populated();
    let t = trie.root().child(b't').unwrap();
    let copy = t.clone_sub_trie();

    assert_eq!(copy.symbol(), b't');
    assert_eq!(copy.n_children(), 2);
    assert_eq!(copy.n_descendants(), t.n_descendants());
    assert_invariants(&copy);
    // Keys are relative to the copied node.
    assert_eq!(sorted_strings(copy.strings()), vec!["ea", "ed", "en", "o"]);
}

#[test]
#[cfg(not(miri))]
/// A key yields one node per symbol, so long keys build deep tries.
/// None of the operations may recurse once per level.
fn test_long_keys() {
    let key = "ab".repeat(50_000);
    let mut trie = Trie::<char>::new();
    assert!(trie.insert_str(&key).is_some());
    assert!(trie.insert_str(&key[..10]).is_some());
    assert!(trie.contains_str(&key));
    assert_eq!(trie.n_nodes(), key.len() + 1);

    let copy = trie.clone();
    assert_eq!(copy, trie);
    assert_eq!(copy.n_nodes(), trie.n_nodes());
    assert_eq!(copy.iter().count(), 2);

    // Pruning stops at the end of the shorter key.
    let trim_point = trie.remove_str(&key).unwrap();
    assert_eq!(trim_point.symbol(), 'b');
    assert_eq!(trim_point.n_children(), 0);
    assert_eq!(trie.n_nodes(), 11);
    assert_ne!(copy, trie);

    // The copy still holds the whole chain, until it's dropped.
    assert!(copy.contains_str(&key));
    drop(copy);
    assert!(trie.contains_str(&key[..10]));

    // Byte tries, whose nodes reserve a slot per symbol.
    let mut bytes = Trie::<u8>::new();
    let key = vec![b'x'; 10_000];
    bytes.insert(&key);
    let copy = bytes.clone();
    assert_eq!(copy, bytes);
    let trim_point: *const TrieNode<u8> = bytes.remove(&key).unwrap();
    assert!(std::ptr::eq(trim_point, bytes.root()));
    assert_eq!(bytes.n_nodes(), 1);
    drop(copy);
}

#[test]
fn test_from_iterator() {
    let trie: Trie = TEST_DATA.iter().map(|s| s.as_bytes().to_vec()).collect();
    assert_eq!(trie, populated());
    assert_eq!(trie.len(), TEST_DATA.len());
}

#[test]
fn test_populate_helper_counts() {
    let mut trie = Trie::<u8>::new();
    populate(&mut trie);
    // `A`, `t`, `to`, `te`, `tea`, `ted`, `ten`, `i`, `in`, `inn`, `a`, `an`, `and`, and the root.
    assert_eq!(trie.n_nodes(), 14);
}
