/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! A prefix tree storing sequences of symbols, with one node per symbol.
//!
//! Every node owns one child slot per symbol of the alphabet (see [`Symbol`])
//! and keeps count of its occupied slots, so that removing a string can
//! prune the nodes it no longer needs without scanning.
//!
//! ```
//! use prefix_trie::{DataTrie, Trie};
//!
//! let mut trie: Trie = Trie::new();
//! trie.insert(b"in");
//! trie.insert(b"inn");
//! trie.insert(b"into");
//! assert!(trie.contains(b"inn"));
//! assert!(!trie.contains(b"int"));
//!
//! // Removing `inn` stops pruning at `in`, which is still stored.
//! let trim_point = trie.remove(b"inn").unwrap();
//! assert_eq!(trim_point.n_children(), 1);
//!
//! let mut ages: DataTrie<u8, u32> = DataTrie::new();
//! ages.insert_str_with_data("kyle", 30);
//! assert_eq!(ages.find_str("kyle").map(|node| *node.data()), Some(30));
//! ```
#![forbid(unsafe_code)]

pub mod children;
mod data_trie;
mod error;
pub mod iter;
mod node;
pub mod symbol;
mod trie;

pub use data_trie::DataTrie;
pub use error::TrieError;
pub use node::TrieNode;
pub use symbol::{DenseSymbol, Symbol};
pub use trie::{BasicTrie, Trie};
