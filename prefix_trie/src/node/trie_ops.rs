/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Trie operations.
use super::TrieNode;
use crate::{error::TrieError, iter::Iter, symbol::Symbol};

/// Where the pruning triggered by a removal stops.
#[derive(Debug, Clone, Copy)]
struct TrimPoint<S> {
    /// Number of key symbols between the root and the deepest node that
    /// must survive the removal.
    depth: usize,
    /// The symbol of that node's child on the way to the removed string.
    next: S,
}

impl<S: Symbol, D> TrieNode<S, D> {
    /// Get a reference to the node that terminates `key`.
    ///
    /// Returns `None` if `key` isn't stored below this node.
    pub fn find(&self, key: &[S]) -> Option<&Self> {
        self.try_find(key).ok()
    }

    /// Like [`Self::find`], but reports why no node was found.
    pub fn try_find(&self, key: &[S]) -> Result<&Self, TrieError> {
        if key.is_empty() {
            return Err(TrieError::EmptyKey);
        }
        let node = self.walk(key)?;
        if node.is_terminal {
            Ok(node)
        } else {
            Err(TrieError::NotTerminal)
        }
    }

    /// Get a mutable reference to the node that terminates `key`.
    pub fn find_mut(&mut self, key: &[S]) -> Option<&mut Self> {
        self.try_find_mut(key).ok()
    }

    /// Like [`Self::find_mut`], but reports why no node was found.
    pub fn try_find_mut(&mut self, key: &[S]) -> Result<&mut Self, TrieError> {
        if key.is_empty() {
            return Err(TrieError::EmptyKey);
        }
        let node = self.walk_mut(key)?;
        if node.is_terminal {
            Ok(node)
        } else {
            Err(TrieError::NotTerminal)
        }
    }

    /// `true` if `key` is stored below this node.
    pub fn contains(&self, key: &[S]) -> bool {
        self.find(key).is_some()
    }

    /// Store `key` below this node, returning the node that terminates it.
    ///
    /// Missing nodes along the path are created with the default payload.
    /// Inserting a key that is already stored returns the existing node, untouched.
    ///
    /// Returns `None` if `key` is empty.
    pub fn insert(&mut self, key: &[S]) -> Option<&mut Self>
    where
        D: Default,
    {
        self.try_insert(key).ok()
    }

    /// Like [`Self::insert`], but reports why no node was returned.
    pub fn try_insert(&mut self, key: &[S]) -> Result<&mut Self, TrieError>
    where
        D: Default,
    {
        self.insert_entry(key).map(|(node, _)| node)
    }

    /// Store `key` below this node.
    ///
    /// The returned flag is `true` if `key` wasn't stored before.
    pub(crate) fn insert_entry(&mut self, key: &[S]) -> Result<(&mut Self, bool), TrieError>
    where
        D: Default,
    {
        if key.is_empty() {
            return Err(TrieError::EmptyKey);
        }
        let mut current = self;
        for &symbol in key {
            current = current.child_or_insert(symbol);
        }
        let is_new = !current.is_terminal;
        current.is_terminal = true;
        Ok((current, is_new))
    }

    /// Remove `key` from the strings stored below this node.
    ///
    /// Nodes that were only needed by `key` are dropped. The deepest node
    /// that survives on the path to `key` (the trim point) is returned.
    ///
    /// Returns `None`, leaving the trie untouched, if `key` isn't stored.
    pub fn remove(&mut self, key: &[S]) -> Option<&Self> {
        self.try_remove(key).ok()
    }

    /// Like [`Self::remove`], but reports why nothing was removed.
    pub fn try_remove(&mut self, key: &[S]) -> Result<&Self, TrieError> {
        // Nothing is mutated until we know the key is stored.
        let trim_point = self.find_trim_point(key)?;
        let (trim_path, rest) = key.split_at(trim_point.depth);

        let trim_node = self.walk_mut(trim_path)?;
        let target = trim_node.walk_mut(rest)?;
        target.is_terminal = false;
        if target.n_children == 0 {
            trim_node.remove_child(trim_point.next);
            tracing::debug!(
                trim_depth = trim_point.depth,
                pruned = rest.len(),
                "Pruned nodes left without strings"
            );
        }
        Ok(&*trim_node)
    }

    /// Locate the node where the pruning triggered by removing `key` must stop.
    ///
    /// The trim point starts at this node, paired with the first symbol of `key`.
    /// Every node on the path except the last one becomes the trim point if it is
    /// needed by another string, i.e. it is terminal or it branches.
    /// The trim point is always paired with the _next_ symbol of the key,
    /// the one leading from it towards the removed string.
    ///
    /// Remove `inn` from a trie containing `in` (terminal), `inn` and `into`:
    ///
    /// ```text
    /// (root)
    ///   ↳i
    ///     ↳n = ()     <- trim point, paired with `n`
    ///       ↳n = ()   <- removed
    ///       ↳t
    ///         ↳o = ()
    /// ```
    ///
    /// Fails if `key` isn't stored below this node.
    fn find_trim_point(&self, key: &[S]) -> Result<TrimPoint<S>, TrieError> {
        let Some((&first, _)) = key.split_first() else {
            return Err(TrieError::EmptyKey);
        };
        let mut trim_point = TrimPoint {
            depth: 0,
            next: first,
        };

        let mut current = self;
        for (depth, pair) in key.windows(2).enumerate() {
            let [symbol, next] = [pair[0], pair[1]];
            current = current
                .child(symbol)
                .ok_or(TrieError::NoPath { matched: depth })?;
            if current.is_terminal || current.n_children > 1 {
                trim_point = TrimPoint {
                    depth: depth + 1,
                    next,
                };
            }
        }

        // `key` is not empty, so the last symbol is always there.
        let last = key.len() - 1;
        let target = current
            .child(key[last])
            .ok_or(TrieError::NoPath { matched: last })?;
        if target.is_terminal {
            Ok(trim_point)
        } else {
            tracing::trace!(key_len = key.len(), "Key to be removed isn't stored");
            Err(TrieError::NotTerminal)
        }
    }

    /// Follow `path` from this node, ignoring terminal flags.
    fn walk(&self, path: &[S]) -> Result<&Self, TrieError> {
        let mut current = self;
        for (matched, &symbol) in path.iter().enumerate() {
            let child = current.child(symbol).ok_or(TrieError::NoPath { matched })?;
            debug_assert!(child.symbol == symbol);
            current = child;
        }
        Ok(current)
    }

    /// Mutable counterpart of [`Self::walk`].
    fn walk_mut(&mut self, path: &[S]) -> Result<&mut Self, TrieError> {
        let mut current = self;
        for (matched, &symbol) in path.iter().enumerate() {
            current = current
                .child_mut(symbol)
                .ok_or(TrieError::NoPath { matched })?;
        }
        Ok(current)
    }

    /// Iterate over the strings stored below this node, paired with their
    /// terminal nodes, in depth-first pre-order.
    ///
    /// Keys are relative to this node: its own symbol isn't part of them.
    pub fn iter(&self) -> Iter<'_, S, D> {
        Iter::new(self)
    }

    /// Collect all the strings stored below this node.
    pub fn strings(&self) -> Vec<Vec<S>> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Collect all the strings stored below this node, paired with their terminal nodes.
    pub fn strings_with_nodes(&self) -> Vec<(Vec<S>, &Self)> {
        self.iter().collect()
    }

    /// Deep copy of the subtree rooted at this node.
    ///
    /// Child counters are rebuilt while attaching the copied children,
    /// rather than copied over.
    pub fn clone_sub_trie(&self) -> Self
    where
        D: Clone,
    {
        let mut root = self.copy_without_children();
        // One entry per level below `root` that is still being copied.
        let mut copies: Vec<Self> = Vec::new();
        // The source children left to copy, one entry per level from `root` down.
        let mut pending = vec![self.children()];

        while let Some(children) = pending.last_mut() {
            if let Some((_, child)) = children.next() {
                copies.push(child.copy_without_children());
                pending.push(child.children());
                continue;
            }
            pending.pop();
            if let Some(copy) = copies.pop() {
                copies
                    .last_mut()
                    .unwrap_or(&mut root)
                    .add_child(Box::new(copy));
            }
        }
        root
    }

    fn copy_without_children(&self) -> Self
    where
        D: Clone,
    {
        let mut copy = Self::with_data(self.symbol, self.data.clone());
        copy.is_terminal = self.is_terminal;
        copy
    }
}
