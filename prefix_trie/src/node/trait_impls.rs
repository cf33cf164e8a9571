/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Implementation of various standard traits for [`TrieNode`].
use super::TrieNode;
use crate::symbol::Symbol;
use std::fmt;

impl<S: Symbol, D: fmt::Debug> TrieNode<S, D> {
    /// Render the subtree rooted at this node, one node per line.
    ///
    /// The first line starts with `head`; descendants are indented by two
    /// spaces per level and introduced by their symbol. Terminal nodes are
    /// followed by their payload.
    pub(crate) fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, head: &str) -> fmt::Result {
        let mut stack = vec![(self, 0)];

        while let Some((next, depth)) = stack.pop() {
            if depth == 0 {
                f.write_str(head)?;
            } else {
                let whitespace = "  ".repeat(depth);
                let symbol = S::to_string_lossy(&[next.symbol]);
                write!(f, "{whitespace}↳{symbol}")?;
            }
            if next.is_terminal {
                write!(f, " = {:?}", next.data)?;
            }
            writeln!(f)?;

            for (_, child) in next.children().rev() {
                stack.push((child, depth + 1));
            }
        }
        Ok(())
    }
}

impl<S: Symbol, D: fmt::Debug> fmt::Debug for TrieNode<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = format!("↳{}", S::to_string_lossy(&[self.symbol]));
        self.fmt_subtree(f, &head)
    }
}

/// Two subtrees are equal if they store the same strings with the same payloads.
///
/// Payloads left behind on interior nodes are ignored.
impl<S: Symbol, D: PartialEq> PartialEq for TrieNode<S, D> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.symbol != b.symbol
                || a.is_terminal != b.is_terminal
                || (a.is_terminal && a.data != b.data)
                || a.n_children != b.n_children
            {
                return false;
            }
            for ((a_symbol, a_child), (b_symbol, b_child)) in a.children().zip(b.children()) {
                if a_symbol != b_symbol {
                    return false;
                }
                stack.push((a_child, b_child));
            }
        }
        true
    }
}

impl<S: Symbol, D: Eq> Eq for TrieNode<S, D> {}

impl<S: Symbol, D: Clone> Clone for TrieNode<S, D> {
    fn clone(&self) -> Self {
        self.clone_sub_trie()
    }
}

/// A root node: labelled with the alphabet's zero value, no children.
impl<S: Symbol, D: Default> Default for TrieNode<S, D> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
