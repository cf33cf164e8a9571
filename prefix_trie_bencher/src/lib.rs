/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Supporting types and functions for benchmarking trie operations.
pub use bencher::OperationBencher;

pub mod bencher;
pub mod corpus;

// Convenient alias for the trie type that is being benchmarked.
pub type ByteTrie = prefix_trie::Trie<u8>;
