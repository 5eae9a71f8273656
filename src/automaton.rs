//! The immutable Aho-Corasick automaton.

use crate::{
    builder::AutomatonBuilder,
    node::{Node, ROOT},
    scanner::Occurrences,
};

/// A finished multi-pattern automaton.
///
/// An `Automaton` is produced by [`AutomatonBuilder::build()`] and cannot be modified afterwards.
/// Since it holds no interior mutability, it is `Send + Sync` and any number of scans can run
/// against it at the same time.
///
/// # Example
/// ```
/// use sensitive_filter::{Automaton, Occurrence};
///
/// let automaton = Automaton::builder().words(&["he", "she", "hers"]).build();
///
/// assert_eq!(
///     automaton.scan("ushers").collect::<Vec<_>>(),
///     vec![Occurrence::new(1, 3), Occurrence::new(2, 3), Occurrence::new(2, 5)],
/// );
/// ```
#[derive(Debug)]
pub struct Automaton {
    nodes: Box<[Node]>,
    patterns: usize,
}

impl Automaton {
    pub(crate) fn new(nodes: Box<[Node]>, patterns: usize) -> Self {
        Self { nodes, patterns }
    }

    /// Shorthand for [`AutomatonBuilder::new()`].
    #[inline]
    #[must_use]
    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder::new()
    }

    /// An automaton with no patterns. Scanning it never reports an occurrence.
    #[must_use]
    pub fn empty() -> Self {
        AutomatonBuilder::new().build()
    }

    /// Number of distinct patterns.
    #[inline]
    pub fn pattern_count(&self) -> usize {
        self.patterns
    }

    /// Number of nodes in the arena, including the root.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the automaton contains no patterns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns == 0
    }

    /// Lazily reports every pattern occurrence within `text`.
    ///
    /// See [`Occurrences`] for the reporting order.
    #[inline]
    pub fn scan<'a>(&'a self, text: &'a str) -> Occurrences<'a> {
        Occurrences::new(self, text)
    }

    #[inline]
    pub(crate) fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// The state reached from `state` on input `c`.
    ///
    /// Falls back along failure links until a node with an edge for `c` is found. If even the
    /// root has no such edge, the automaton stays at the root.
    pub(crate) fn next_state(&self, mut state: usize, c: char) -> usize {
        loop {
            let node = &self.nodes[state];
            if let Some(child) = node.child(c) {
                return child;
            }
            if state == ROOT {
                return ROOT;
            }
            state = node.fail;
        }
    }
}

impl Default for Automaton {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::{node::ROOT, Automaton};

    #[test]
    fn empty() {
        let automaton = Automaton::empty();

        assert!(automaton.is_empty());
        assert_eq!(automaton.pattern_count(), 0);
        assert_eq!(automaton.node_count(), 1);
    }

    #[test]
    fn counts() {
        let automaton = Automaton::builder().words(&["foo", "foobar", "foo"]).build();

        assert!(!automaton.is_empty());
        assert_eq!(automaton.pattern_count(), 2);
        assert_eq!(automaton.node_count(), 7);
    }

    #[test]
    fn next_state_follows_failure_links() {
        let automaton = Automaton::builder().words(&["ab", "bc"]).build();

        let a = automaton.next_state(ROOT, 'a');
        let ab = automaton.next_state(a, 'b');
        let bc = automaton.next_state(ab, 'c');

        assert_ne!(a, ROOT);
        assert_eq!(automaton.node(ab).pattern_len(), Some(2));
        assert_eq!(automaton.node(bc).pattern_len(), Some(2));
        assert_eq!(automaton.next_state(bc, 'x'), ROOT);
    }

    #[test]
    fn next_state_unknown_character_at_root() {
        let automaton = Automaton::builder().word("foo").build();

        assert_eq!(automaton.next_state(ROOT, 'x'), ROOT);
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Automaton>();
    }
}
