/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use crate::{error::TrieError, iter::Iter, node::TrieNode, symbol::Symbol, trie::BasicTrie};
use std::fmt;

/// A trie that associates a payload of type `D` with every stored string.
///
/// The payload lives on the terminal node of the string, and is
/// (re)set on every insertion, overwriting the previous one.
#[derive(Clone, PartialEq, Eq)]
pub struct DataTrie<S: Symbol, D> {
    inner: BasicTrie<S, D>,
}

impl<S: Symbol, D: Default> Default for DataTrie<S, D> {
    fn default() -> Self {
        Self {
            inner: BasicTrie::new(),
        }
    }
}

impl<S: Symbol, D: Default> DataTrie<S, D> {
    /// Create a new (empty) trie.
    pub fn new() -> Self {
        Default::default()
    }

    /// Store `key` with the default payload, returning the node that terminates it.
    ///
    /// If `key` was already stored, its payload is reset to the default.
    /// Returns `None` if `key` is empty.
    pub fn insert(&mut self, key: &[S]) -> Option<&TrieNode<S, D>> {
        self.insert_with_data(key, D::default())
    }

    /// Convenience version of [`Self::insert`], for string keys.
    pub fn insert_str(&mut self, key: &str) -> Option<&TrieNode<S, D>> {
        self.insert(&S::from_str_lossy(key))
    }

    /// Store `key` with `data` as its payload, returning the node that terminates it.
    ///
    /// If `key` was already stored, its payload is replaced by `data`.
    /// Returns `None` if `key` is empty.
    pub fn insert_with_data(&mut self, key: &[S], data: D) -> Option<&TrieNode<S, D>> {
        self.try_insert_with_data(key, data).ok()
    }

    /// Convenience version of [`Self::insert_with_data`], for string keys.
    pub fn insert_str_with_data(&mut self, key: &str, data: D) -> Option<&TrieNode<S, D>> {
        self.insert_with_data(&S::from_str_lossy(key), data)
    }

    /// Like [`Self::insert_with_data`], but reports why no node was returned.
    pub fn try_insert_with_data(
        &mut self,
        key: &[S],
        data: D,
    ) -> Result<&TrieNode<S, D>, TrieError> {
        let node = self.inner.insert_mut(key)?;
        node.set_data(data);
        Ok(&*node)
    }

    /// Empty the trie.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<S: Symbol, D> DataTrie<S, D> {
    /// The payload associated with `key`, if it is stored.
    pub fn get(&self, key: &[S]) -> Option<&D> {
        self.inner.find(key).map(TrieNode::data)
    }

    /// Mutable access to the payload associated with `key`, if it is stored.
    pub fn get_mut(&mut self, key: &[S]) -> Option<&mut D> {
        self.inner.find_mut(key).map(TrieNode::data_mut)
    }

    /// Remove `key` from the trie, returning the trim point.
    ///
    /// See [`BasicTrie::remove`].
    pub fn remove(&mut self, key: &[S]) -> Option<&TrieNode<S, D>> {
        self.inner.remove(key)
    }

    /// Convenience version of [`Self::remove`], for string keys.
    pub fn remove_str(&mut self, key: &str) -> Option<&TrieNode<S, D>> {
        self.inner.remove_str(key)
    }

    /// Like [`Self::remove`], but reports why nothing was removed.
    pub fn try_remove(&mut self, key: &[S]) -> Result<&TrieNode<S, D>, TrieError> {
        self.inner.try_remove(key)
    }

    /// Get a reference to the node that terminates `key`.
    pub fn find(&self, key: &[S]) -> Option<&TrieNode<S, D>> {
        self.inner.find(key)
    }

    /// Convenience version of [`Self::find`], for string keys.
    pub fn find_str(&self, key: &str) -> Option<&TrieNode<S, D>> {
        self.inner.find_str(key)
    }

    /// Like [`Self::find`], but reports why no node was found.
    pub fn try_find(&self, key: &[S]) -> Result<&TrieNode<S, D>, TrieError> {
        self.inner.try_find(key)
    }

    /// `true` if `key` is stored in the trie.
    pub fn contains(&self, key: &[S]) -> bool {
        self.inner.contains(key)
    }

    /// Convenience version of [`Self::contains`], for string keys.
    pub fn contains_str(&self, key: &str) -> bool {
        self.inner.contains_str(key)
    }

    /// All the strings stored in the trie. The order is unspecified.
    pub fn strings(&self) -> Vec<Vec<S>> {
        self.inner.strings()
    }

    /// All the strings stored in the trie, paired with their terminal nodes.
    /// The order is unspecified.
    pub fn strings_with_nodes(&self) -> Vec<(Vec<S>, &TrieNode<S, D>)> {
        self.inner.strings_with_nodes()
    }

    /// Iterate over the stored strings and their terminal nodes, in depth-first pre-order.
    pub fn iter(&self) -> Iter<'_, S, D> {
        self.inner.iter()
    }

    /// The root node. It is never terminal.
    pub fn root(&self) -> &TrieNode<S, D> {
        self.inner.root()
    }

    /// The number of strings stored in this trie.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// `true` if no string is stored in this trie.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Compute the number of nodes in the trie, root included.
    pub fn n_nodes(&self) -> usize {
        self.inner.n_nodes()
    }
}

impl<S: Symbol, D: fmt::Debug> fmt::Debug for DataTrie<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl<'tm, S: Symbol, D> IntoIterator for &'tm DataTrie<S, D> {
    type Item = (Vec<S>, &'tm TrieNode<S, D>);
    type IntoIter = Iter<'tm, S, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Symbol, D: Default> FromIterator<(Vec<S>, D)> for DataTrie<S, D> {
    fn from_iter<I: IntoIterator<Item = (Vec<S>, D)>>(iter: I) -> Self {
        let mut trie = Self::new();
        for (key, data) in iter {
            trie.insert_with_data(&key, data);
        }
        trie
    }
}
