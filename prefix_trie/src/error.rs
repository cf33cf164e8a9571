/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

/// The reason a trie operation didn't produce a node.
///
/// None of these are fatal: they are the negative answers of lookups,
/// and the no-op outcomes of insertions and removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    /// The key doesn't contain any symbol.
    #[error("the key is empty")]
    EmptyKey,
    /// The walk from the root stopped at the symbol with index `matched`,
    /// since there is no child for it.
    #[error("no child for the symbol at index {matched} of the key")]
    NoPath { matched: usize },
    /// The whole key can be walked, but it isn't a stored string.
    #[error("the key is a prefix of stored strings, but isn't stored itself")]
    NotTerminal,
}
