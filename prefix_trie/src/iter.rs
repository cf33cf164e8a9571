/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use crate::{node::TrieNode, symbol::Symbol};

/// Iterates over the strings stored in a trie, paired with their terminal nodes,
/// in depth-first pre-order.
///
/// Children are visited in ascending slot order, which is lexicographical order
/// for byte alphabets.
///
/// Invoke [`BasicTrie::iter`](crate::BasicTrie::iter) or [`TrieNode::iter`]
/// to create an instance of this iterator.
pub struct Iter<'tm, S: Symbol, D> {
    /// Stack of nodes and whether they have been visited.
    stack: Vec<(&'tm TrieNode<S, D>, bool)>,
    /// Concatenation of the symbols of the current node and its ancestors,
    /// i.e. the key of the current node.
    key: Vec<S>,
}

impl<'tm, S: Symbol, D> Iter<'tm, S, D> {
    /// Creates a new iterator over the strings stored below `root`.
    ///
    /// The symbol of `root` itself is not part of the yielded keys.
    pub(crate) fn new(root: &'tm TrieNode<S, D>) -> Self {
        Self {
            stack: root.children().rev().map(|(_, child)| (child, false)).collect(),
            key: Vec::new(),
        }
    }

    /// The current key, obtained by concatenating the symbols of the nodes
    /// between the root and the current node.
    pub fn key(&self) -> &[S] {
        &self.key
    }

    /// Advance this iterator to the next terminal node, and set the
    /// key to the one matching that node.
    fn advance(&mut self) -> Option<&'tm TrieNode<S, D>> {
        loop {
            let (node, was_visited) = self.stack.pop()?;

            if was_visited {
                self.key.pop();
                continue;
            }

            self.stack.push((node, true));
            self.key.push(node.symbol());
            for (_, child) in node.children().rev() {
                self.stack.push((child, false));
            }

            if node.is_terminal() {
                return Some(node);
            }
        }
    }
}

impl<'tm, S: Symbol, D> Iterator for Iter<'tm, S, D> {
    type Item = (Vec<S>, &'tm TrieNode<S, D>);

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(|node| (self.key.clone(), node))
    }
}
