//! Node type for the [`Automaton`]'s internal arena.
//!
//! The graph defined by these nodes is a trie with failure links layered on top. Edges between
//! nodes are defined by characters (Unicode scalar values), and traversal through the graph is
//! done through those characters.
//!
//! Nodes never own each other. Every reference between nodes (child edges, failure links, and
//! output links) is an index into the arena owned by the `Automaton`, with the root always stored
//! at index [`ROOT`].
//!
//! [`Automaton`]: crate::Automaton

use hashbrown::HashMap;

/// Arena index of the root node.
pub(crate) const ROOT: usize = 0;

/// A single state within the automaton.
#[derive(Debug, Default)]
pub(crate) struct Node {
    /// All child nodes, keyed by character edges.
    children: HashMap<char, usize>,
    /// Target of the failure link.
    ///
    /// This is the node for the longest proper suffix of this node's prefix that is also present
    /// in the trie. The root links to itself.
    pub(crate) fail: usize,
    /// Nearest node along the failure chain (excluding this node) that ends a pattern.
    ///
    /// `ROOT` when no such node exists, since the root never ends a pattern.
    pub(crate) output: usize,
    /// Length in characters of the pattern ending at this node, if any.
    pattern_len: Option<usize>,
}

impl Node {
    /// Creates a new node with no children, linking back to the root.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached by `c`, if that edge exists.
    #[inline]
    pub(crate) fn child(&self, c: char) -> Option<usize> {
        self.children.get(&c).copied()
    }

    /// Iterates over all `(character, child)` edges.
    ///
    /// The order is unspecified.
    #[inline]
    pub(crate) fn children(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.children.iter().map(|(c, index)| (*c, *index))
    }

    #[inline]
    pub(crate) fn add_child(&mut self, c: char, index: usize) {
        self.children.insert(c, index);
    }

    #[inline]
    pub(crate) fn is_pattern_end(&self) -> bool {
        self.pattern_len.is_some()
    }

    /// Character count of the pattern ending here, if any.
    #[inline]
    pub(crate) fn pattern_len(&self) -> Option<usize> {
        self.pattern_len
    }

    /// Mark this node as ending a pattern of `len` characters.
    ///
    /// Marking the same node twice overwrites the length with the same value, since every path to
    /// a node spells the same word.
    #[inline]
    pub(crate) fn mark_pattern_end(&mut self, len: usize) {
        self.pattern_len = Some(len);
    }
}
