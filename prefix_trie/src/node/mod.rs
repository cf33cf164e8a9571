/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use crate::{children::ChildTable, symbol::Symbol};

mod trait_impls;
mod trie_ops;

/// A node in a [`BasicTrie`](crate::BasicTrie).
///
/// Each node stores:
///
/// - The symbol labelling the edge from its parent (see [`Self::symbol`])
/// - Whether the path from the root to this node spells a stored string
///   (see [`Self::is_terminal`])
/// - Its children, one per symbol at most (see [`Self::children`]), and how many
///   of them there are (see [`Self::n_children`])
/// - A payload (see [`Self::data`]); payload-free tries use `()`
///
/// The root of a trie is labelled with `S::default()`, which carries no meaning.
pub struct TrieNode<S: Symbol, D = ()> {
    symbol: S,
    is_terminal: bool,
    /// # Invariant
    ///
    /// Always equal to the number of occupied slots in `children`.
    n_children: usize,
    children: S::Children<Box<TrieNode<S, D>>>,
    data: D,
}

/// Constructors.
impl<S: Symbol, D> TrieNode<S, D> {
    /// Create a non-terminal node without children, carrying the default payload.
    pub fn new(symbol: S) -> Self
    where
        D: Default,
    {
        Self::with_data(symbol, D::default())
    }

    /// Create a non-terminal node without children, carrying `data`.
    pub fn with_data(symbol: S, data: D) -> Self {
        Self {
            symbol,
            is_terminal: false,
            n_children: 0,
            children: Default::default(),
            data,
        }
    }
}

/// Accessors.
impl<S: Symbol, D> TrieNode<S, D> {
    /// The symbol labelling the edge from the parent to this node.
    #[inline]
    pub fn symbol(&self) -> S {
        self.symbol
    }

    /// `true` if the path from the root to this node is a stored string.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// The number of children of this node.
    ///
    /// The count is maintained on every attach and detach,
    /// it is never recomputed.
    #[inline]
    pub fn n_children(&self) -> usize {
        self.n_children
    }

    /// The child reached through `symbol`, if any.
    #[inline]
    pub fn child(&self, symbol: S) -> Option<&Self> {
        self.children.get(symbol).map(|child| &**child)
    }

    #[inline]
    pub(crate) fn child_mut(&mut self, symbol: S) -> Option<&mut Self> {
        self.children.get_mut(symbol).map(|child| &mut **child)
    }

    /// Iterate over the children of this node, in ascending slot order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (S, &Self)> {
        self.children.iter().map(|(symbol, child)| (symbol, &**child))
    }

    /// The payload attached to this node.
    ///
    /// It is only meaningful for terminal nodes: interior nodes hold
    /// whatever they were created with, or what was left behind by
    /// a removal.
    #[inline]
    pub fn data(&self) -> &D {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    /// Replace the payload attached to this node.
    #[inline]
    pub fn set_data(&mut self, data: D) {
        self.data = data;
    }

    /// The number of nodes below this one.
    pub fn n_descendants(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            for (_, child) in node.children() {
                count += 1;
                stack.push(child);
            }
        }
        count
    }
}

/// Child bookkeeping.
///
/// These are the only places where `children` is mutated,
/// so `n_children` can't drift.
impl<S: Symbol, D> TrieNode<S, D> {
    /// Attach `child` to this node, in the slot for its own symbol.
    fn add_child(&mut self, child: Box<Self>) {
        let displaced = self.children.insert(child.symbol, child);
        if displaced.is_none() {
            self.n_children += 1;
        }
    }

    /// The child reached through `symbol`, attaching a new one if missing.
    fn child_or_insert(&mut self, symbol: S) -> &mut Self
    where
        D: Default,
    {
        let (child, is_new) = self
            .children
            .get_or_insert_with(symbol, || Box::new(Self::new(symbol)));
        if is_new {
            self.n_children += 1;
        }
        child
    }

    /// Detach (and drop) the child reached through `symbol`,
    /// together with its whole subtree.
    fn remove_child(&mut self, symbol: S) -> Option<Box<Self>> {
        let removed = self.children.remove(symbol);
        if removed.is_some() {
            self.n_children -= 1;
        }
        removed
    }
}

/// Subtrees are freed level by level, so that dropping a long chain of
/// nodes doesn't recurse once per symbol.
impl<S: Symbol, D> Drop for TrieNode<S, D> {
    fn drop(&mut self) {
        if self.n_children == 0 {
            return;
        }
        let mut stack = self.children.drain();
        while let Some(mut child) = stack.pop() {
            if child.n_children > 0 {
                stack.extend(child.children.drain());
                child.n_children = 0;
            }
            // `child` is dropped here, without any children left.
        }
    }
}
