/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Alphabets that can label the edges of a [`TrieNode`](crate::TrieNode).
use crate::children::{ChildTable, DenseChildren, SparseChildren};
use std::fmt;

/// An element of a fixed, finite alphabet.
///
/// Every symbol type picks the storage used for the children of a node
/// through [`Symbol::Children`]: byte-sized alphabets address a dense array
/// of slots, wider alphabets fall back to an ordered sparse map.
///
/// The root of a trie is labelled with [`Default::default`], the alphabet's
/// zero value, which never contributes to a stored string.
pub trait Symbol: Copy + Ord + Default + fmt::Debug + 'static {
    /// The child table used by nodes labelled with this alphabet.
    type Children<N>: ChildTable<Self, N>;

    /// Convert a string into a sequence of symbols.
    fn from_str_lossy(s: &str) -> Vec<Self>;

    /// Convert a sequence of symbols back into a `String`,
    /// replacing anything that isn't valid with `�` along the way.
    fn to_string_lossy(symbols: &[Self]) -> String;
}

/// A [`Symbol`] whose alphabet is small enough to give every node
/// one child slot per possible value.
pub trait DenseSymbol: Symbol {
    /// Number of distinct values in the alphabet.
    const ALPHABET_SIZE: usize;

    /// The slot reserved for this symbol, in `0..ALPHABET_SIZE`.
    fn to_index(self) -> usize;

    /// The symbol stored at `index`.
    ///
    /// `index` must be in `0..ALPHABET_SIZE`.
    fn from_index(index: usize) -> Self;
}

impl Symbol for u8 {
    type Children<N> = DenseChildren<u8, N>;

    fn from_str_lossy(s: &str) -> Vec<Self> {
        s.as_bytes().to_vec()
    }

    fn to_string_lossy(symbols: &[Self]) -> String {
        String::from_utf8_lossy(symbols).into_owned()
    }
}

impl DenseSymbol for u8 {
    const ALPHABET_SIZE: usize = 1 << u8::BITS;

    #[inline]
    fn to_index(self) -> usize {
        self as usize
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::ALPHABET_SIZE);
        index as u8
    }
}

/// Signed bytes, i.e. what C calls `char` on most platforms.
impl Symbol for i8 {
    type Children<N> = DenseChildren<i8, N>;

    fn from_str_lossy(s: &str) -> Vec<Self> {
        s.bytes().map(|b| b as i8).collect()
    }

    fn to_string_lossy(symbols: &[Self]) -> String {
        let bytes = symbols.iter().map(|&c| c as u8).collect::<Vec<_>>();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl DenseSymbol for i8 {
    const ALPHABET_SIZE: usize = 1 << i8::BITS;

    #[inline]
    fn to_index(self) -> usize {
        self as u8 as usize
    }

    #[inline]
    fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::ALPHABET_SIZE);
        index as u8 as i8
    }
}

/// UTF-16 code units.
impl Symbol for u16 {
    type Children<N> = SparseChildren<u16, N>;

    fn from_str_lossy(s: &str) -> Vec<Self> {
        s.encode_utf16().collect()
    }

    fn to_string_lossy(symbols: &[Self]) -> String {
        String::from_utf16_lossy(symbols)
    }
}

/// Unicode scalar values, stored as raw integers.
impl Symbol for u32 {
    type Children<N> = SparseChildren<u32, N>;

    fn from_str_lossy(s: &str) -> Vec<Self> {
        s.chars().map(u32::from).collect()
    }

    fn to_string_lossy(symbols: &[Self]) -> String {
        symbols
            .iter()
            .map(|&c| char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

impl Symbol for char {
    type Children<N> = SparseChildren<char, N>;

    fn from_str_lossy(s: &str) -> Vec<Self> {
        s.chars().collect()
    }

    fn to_string_lossy(symbols: &[Self]) -> String {
        symbols.iter().collect()
    }
}
