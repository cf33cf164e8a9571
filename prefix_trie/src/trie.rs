/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use crate::{error::TrieError, iter::Iter, node::TrieNode, symbol::Symbol};
use std::fmt;

/// A trie storing sequences of symbols, without payloads.
///
/// Keys are `&[u8]` unless a different [`Symbol`] is picked.
pub type Trie<S = u8> = BasicTrie<S, ()>;

/// A trie storing sequences of [`Symbol`]s, each with a node carrying a `D` payload.
///
/// The trie owns its root for its whole lifetime. Every operation is forwarded to
/// the corresponding [`TrieNode`] algorithm, invoked on the root.
///
/// Nodes returned by its methods are borrowed from the trie: they can be inspected
/// until the next mutation.
pub struct BasicTrie<S: Symbol, D> {
    /// The root node of the trie. Its symbol carries no meaning.
    root: TrieNode<S, D>,
    /// The number of strings stored in this trie.
    n_strings: usize,
}

impl<S: Symbol, D: Default> Default for BasicTrie<S, D> {
    fn default() -> Self {
        Self {
            root: TrieNode::default(),
            n_strings: 0,
        }
    }
}

impl<S: Symbol, D: Default> BasicTrie<S, D> {
    /// Create a new (empty) trie.
    ///
    /// # Allocations
    ///
    /// The root node is allocated straight away.
    pub fn new() -> Self {
        Default::default()
    }

    /// Store `key`, returning the node that terminates it.
    ///
    /// Storing a key twice returns the same node both times.
    /// Returns `None` if `key` is empty.
    pub fn insert(&mut self, key: &[S]) -> Option<&TrieNode<S, D>> {
        self.try_insert(key).ok()
    }

    /// Convenience version of [`Self::insert`], for string keys.
    pub fn insert_str(&mut self, key: &str) -> Option<&TrieNode<S, D>> {
        self.insert(&S::from_str_lossy(key))
    }

    /// Like [`Self::insert`], but reports why no node was returned.
    pub fn try_insert(&mut self, key: &[S]) -> Result<&TrieNode<S, D>, TrieError> {
        self.insert_mut(key).map(|node| &*node)
    }

    /// Store `key`, returning a mutable reference to the node that terminates it.
    pub(crate) fn insert_mut(&mut self, key: &[S]) -> Result<&mut TrieNode<S, D>, TrieError> {
        let (node, is_new) = self.root.insert_entry(key)?;
        if is_new {
            self.n_strings += 1;
        }
        Ok(node)
    }

    /// Empty the trie.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl<S: Symbol, D> BasicTrie<S, D> {
    /// Remove `key` from the trie.
    ///
    /// Returns the trim point: the deepest node on the path to `key` that
    /// is still needed by another string once `key` is gone
    /// (the root, if there's none).
    /// Returns `None`, leaving the trie untouched, if `key` isn't stored.
    pub fn remove(&mut self, key: &[S]) -> Option<&TrieNode<S, D>> {
        self.try_remove(key).ok()
    }

    /// Convenience version of [`Self::remove`], for string keys.
    pub fn remove_str(&mut self, key: &str) -> Option<&TrieNode<S, D>> {
        self.remove(&S::from_str_lossy(key))
    }

    /// Like [`Self::remove`], but reports why nothing was removed.
    pub fn try_remove(&mut self, key: &[S]) -> Result<&TrieNode<S, D>, TrieError> {
        let trim_point = self.root.try_remove(key)?;
        self.n_strings -= 1;
        Ok(trim_point)
    }

    /// Get a reference to the node that terminates `key`.
    ///
    /// Returns `None` if `key` isn't stored.
    pub fn find(&self, key: &[S]) -> Option<&TrieNode<S, D>> {
        self.root.find(key)
    }

    /// Convenience version of [`Self::find`], for string keys.
    pub fn find_str(&self, key: &str) -> Option<&TrieNode<S, D>> {
        self.find(&S::from_str_lossy(key))
    }

    /// Like [`Self::find`], but reports why no node was found.
    pub fn try_find(&self, key: &[S]) -> Result<&TrieNode<S, D>, TrieError> {
        self.root.try_find(key)
    }

    pub(crate) fn find_mut(&mut self, key: &[S]) -> Option<&mut TrieNode<S, D>> {
        self.root.find_mut(key)
    }

    /// `true` if `key` is stored in the trie.
    pub fn contains(&self, key: &[S]) -> bool {
        self.root.contains(key)
    }

    /// Convenience version of [`Self::contains`], for string keys.
    pub fn contains_str(&self, key: &str) -> bool {
        self.contains(&S::from_str_lossy(key))
    }

    /// All the strings stored in the trie.
    ///
    /// The order is unspecified.
    pub fn strings(&self) -> Vec<Vec<S>> {
        self.root.strings()
    }

    /// All the strings stored in the trie, paired with their terminal nodes.
    ///
    /// The order is unspecified.
    pub fn strings_with_nodes(&self) -> Vec<(Vec<S>, &TrieNode<S, D>)> {
        self.root.strings_with_nodes()
    }

    /// Iterate over the stored strings and their terminal nodes, in depth-first pre-order.
    pub fn iter(&self) -> Iter<'_, S, D> {
        self.root.iter()
    }

    /// The root node. It is never terminal.
    pub fn root(&self) -> &TrieNode<S, D> {
        &self.root
    }

    /// The number of strings stored in this trie.
    pub fn len(&self) -> usize {
        self.n_strings
    }

    /// `true` if no string is stored in this trie.
    pub fn is_empty(&self) -> bool {
        self.n_strings == 0
    }

    /// Compute the number of nodes in the trie, root included.
    pub fn n_nodes(&self) -> usize {
        1 + self.root.n_descendants()
    }
}

/// Deep copy: the two tries don't share any node.
impl<S: Symbol, D: Clone> Clone for BasicTrie<S, D> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone_sub_trie(),
            n_strings: self.n_strings,
        }
    }
}

impl<S: Symbol, D: PartialEq> PartialEq for BasicTrie<S, D> {
    fn eq(&self, other: &Self) -> bool {
        self.n_strings == other.n_strings && self.root == other.root
    }
}

impl<S: Symbol, D: Eq> Eq for BasicTrie<S, D> {}

impl<S: Symbol, D: fmt::Debug> fmt::Debug for BasicTrie<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_subtree(f, "(root)")
    }
}

impl<'tm, S: Symbol, D> IntoIterator for &'tm BasicTrie<S, D> {
    type Item = (Vec<S>, &'tm TrieNode<S, D>);
    type IntoIter = Iter<'tm, S, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Symbol, D: Default> FromIterator<Vec<S>> for BasicTrie<S, D> {
    fn from_iter<I: IntoIterator<Item = Vec<S>>>(iter: I) -> Self {
        let mut trie = Self::new();
        for key in iter {
            trie.insert(&key);
        }
        trie
    }
}
