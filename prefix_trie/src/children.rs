/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Storage for the children of a [`TrieNode`](crate::TrieNode).
//!
//! A child table maps a symbol to the (unique) child reached through it.
//! Tables don't keep track of how many children they hold: the owning node
//! maintains that counter itself, and is the only one allowed to mutate
//! its table.
use crate::symbol::{DenseSymbol, Symbol};
use std::{
    collections::{BTreeMap, btree_map::Entry},
    marker::PhantomData,
};

/// Operations a node needs from the container holding its children.
pub trait ChildTable<S, N>: Default {
    /// The child reached through `symbol`, if any.
    fn get(&self, symbol: S) -> Option<&N>;

    /// Mutable access to the child reached through `symbol`, if any.
    fn get_mut(&mut self, symbol: S) -> Option<&mut N>;

    /// The child reached through `symbol`, creating it with `f` if the slot is empty.
    ///
    /// The returned flag is `true` if `f` was invoked.
    fn get_or_insert_with<F>(&mut self, symbol: S, f: F) -> (&mut N, bool)
    where
        F: FnOnce() -> N;

    /// Store `child` in the slot for `symbol`, returning the child it displaced.
    fn insert(&mut self, symbol: S, child: N) -> Option<N>;

    /// Empty the slot for `symbol`, returning its previous content.
    fn remove(&mut self, symbol: S) -> Option<N>;

    /// Empty every slot, handing back the children they held.
    fn drain(&mut self) -> Vec<N>;

    /// Iterate over the occupied slots, in ascending slot order.
    fn iter<'a>(&'a self) -> impl DoubleEndedIterator<Item = (S, &'a N)>
    where
        N: 'a;
}

/// One slot per possible symbol value, indexed directly by the symbol.
///
/// Child lookups are O(1), at the cost of [`DenseSymbol::ALPHABET_SIZE`]
/// pointer-sized slots per node.
pub struct DenseChildren<S, N> {
    slots: Box<[Option<N>]>,
    _symbol: PhantomData<S>,
}

impl<S: DenseSymbol, N> Default for DenseChildren<S, N> {
    fn default() -> Self {
        Self {
            slots: std::iter::repeat_with(|| None)
                .take(S::ALPHABET_SIZE)
                .collect(),
            _symbol: PhantomData,
        }
    }
}

impl<S: DenseSymbol, N> ChildTable<S, N> for DenseChildren<S, N> {
    #[inline]
    fn get(&self, symbol: S) -> Option<&N> {
        self.slots[symbol.to_index()].as_ref()
    }

    #[inline]
    fn get_mut(&mut self, symbol: S) -> Option<&mut N> {
        self.slots[symbol.to_index()].as_mut()
    }

    fn get_or_insert_with<F>(&mut self, symbol: S, f: F) -> (&mut N, bool)
    where
        F: FnOnce() -> N,
    {
        let slot = &mut self.slots[symbol.to_index()];
        let is_new = slot.is_none();
        (slot.get_or_insert_with(f), is_new)
    }

    fn insert(&mut self, symbol: S, child: N) -> Option<N> {
        self.slots[symbol.to_index()].replace(child)
    }

    fn remove(&mut self, symbol: S) -> Option<N> {
        self.slots[symbol.to_index()].take()
    }

    fn drain(&mut self) -> Vec<N> {
        self.slots.iter_mut().filter_map(Option::take).collect()
    }

    fn iter<'a>(&'a self) -> impl DoubleEndedIterator<Item = (S, &'a N)>
    where
        N: 'a,
    {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|child| (S::from_index(index), child)))
    }
}

/// Children kept in an ordered map, for alphabets too wide to
/// reserve a slot per value (e.g. UTF-16 code units or `char`s).
pub struct SparseChildren<S, N>(BTreeMap<S, N>);

impl<S, N> Default for SparseChildren<S, N> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<S: Symbol, N> ChildTable<S, N> for SparseChildren<S, N> {
    fn get(&self, symbol: S) -> Option<&N> {
        self.0.get(&symbol)
    }

    fn get_mut(&mut self, symbol: S) -> Option<&mut N> {
        self.0.get_mut(&symbol)
    }

    fn get_or_insert_with<F>(&mut self, symbol: S, f: F) -> (&mut N, bool)
    where
        F: FnOnce() -> N,
    {
        match self.0.entry(symbol) {
            Entry::Occupied(entry) => (entry.into_mut(), false),
            Entry::Vacant(entry) => (entry.insert(f()), true),
        }
    }

    fn insert(&mut self, symbol: S, child: N) -> Option<N> {
        self.0.insert(symbol, child)
    }

    fn remove(&mut self, symbol: S) -> Option<N> {
        self.0.remove(&symbol)
    }

    fn drain(&mut self) -> Vec<N> {
        std::mem::take(&mut self.0).into_values().collect()
    }

    fn iter<'a>(&'a self) -> impl DoubleEndedIterator<Item = (S, &'a N)>
    where
        N: 'a,
    {
        self.0.iter().map(|(symbol, child)| (*symbol, child))
    }
}
