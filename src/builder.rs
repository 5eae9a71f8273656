//! Construction of an [`Automaton`].
//!
//! Building happens in two phases. First, every word is inserted into a trie stored in a flat
//! node arena. Then, once all words are present, [`AutomatonBuilder::build()`] computes the
//! failure links in breadth-first order and moves the arena into an immutable `Automaton`,
//! leaving the builder empty. Failure links are therefore computed exactly once per arena, after
//! every insertion, and before any scan.

use crate::{
    automaton::Automaton,
    node::{Node, ROOT},
};
use std::collections::VecDeque;
use tracing::debug;

/// A builder for an [`Automaton`].
///
/// # Example
/// ```
/// use sensitive_filter::AutomatonBuilder;
///
/// let automaton = AutomatonBuilder::new().words(&["foo", "bar"]).build();
///
/// assert_eq!(automaton.pattern_count(), 2);
/// ```
#[derive(Debug)]
pub struct AutomatonBuilder {
    nodes: Vec<Node>,
    patterns: usize,
}

impl AutomatonBuilder {
    /// Creates a builder containing only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            patterns: 0,
        }
    }

    /// Inserts a single word into the trie.
    ///
    /// Returns `false` if `word` is empty. Empty words are rejected so that the root never marks
    /// the end of a pattern; accepting one would report a zero-length occurrence after every
    /// character scanned.
    ///
    /// Inserting the same word twice is allowed and has no further effect.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            debug!("rejected empty pattern");
            return false;
        }

        let mut index = ROOT;
        let mut len = 0;
        for c in word.chars() {
            index = match self.nodes[index].child(c) {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[index].add_child(c, child);
                    child
                }
            };
            len += 1;
        }

        let node = &mut self.nodes[index];
        if !node.is_pattern_end() {
            self.patterns += 1;
        }
        node.mark_pattern_end(len);
        true
    }

    /// Adds a word to be matched.
    #[inline]
    pub fn word<S>(&mut self, word: &S) -> &mut Self
    where
        S: AsRef<str> + ?Sized,
    {
        self.insert(word.as_ref());
        self
    }

    /// Adds words to be matched.
    #[inline]
    pub fn words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
        self
    }

    /// Computes failure links and output links for every node.
    ///
    /// Nodes are visited breadth-first, so a node's own failure link is always known before any
    /// of its children are processed. The order in which siblings are visited does not matter:
    /// each child's link depends only on its own edge character and its parent's failure chain.
    fn build_failure_links(&mut self) {
        let mut queue = VecDeque::new();

        let depth_one = self.nodes[ROOT].children().collect::<Vec<_>>();
        for (_, child) in depth_one {
            self.nodes[child].fail = ROOT;
            self.nodes[child].output = ROOT;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            let edges = self.nodes[current].children().collect::<Vec<_>>();
            for (c, child) in edges {
                let mut fail = self.nodes[current].fail;
                let target = loop {
                    if let Some(next) = self.nodes[fail].child(c) {
                        break next;
                    }
                    if fail == ROOT {
                        break ROOT;
                    }
                    fail = self.nodes[fail].fail;
                };

                let output = if self.nodes[target].is_pattern_end() {
                    target
                } else {
                    self.nodes[target].output
                };
                let node = &mut self.nodes[child];
                node.fail = target;
                node.output = output;
                queue.push_back(child);
            }
        }
    }

    /// Finishes construction, returning the immutable [`Automaton`].
    #[must_use]
    pub fn build(&mut self) -> Automaton {
        self.build_failure_links();

        let nodes = std::mem::replace(&mut self.nodes, vec![Node::new()]);
        let patterns = std::mem::take(&mut self.patterns);
        debug!(patterns, nodes = nodes.len(), "automaton built");

        Automaton::new(nodes.into_boxed_slice(), patterns)
    }
}

impl Default for AutomatonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{builder::AutomatonBuilder, node::ROOT};

    /// Follow the trie from the root along `word`.
    fn search(builder: &AutomatonBuilder, word: &str) -> Option<usize> {
        word.chars()
            .try_fold(ROOT, |index, c| builder.nodes[index].child(c))
    }

    #[test]
    fn insert() {
        let mut builder = AutomatonBuilder::new();

        assert!(builder.insert("foo"));

        let node = search(&builder, "foo").unwrap();
        assert_eq!(builder.nodes[node].pattern_len(), Some(3));
        assert!(!builder.nodes[search(&builder, "fo").unwrap()].is_pattern_end());
        assert_eq!(builder.patterns, 1);
    }

    #[test]
    fn insert_counts_characters_not_bytes() {
        let mut builder = AutomatonBuilder::new();
        builder.insert("测试");

        let node = search(&builder, "测试").unwrap();
        assert_eq!(builder.nodes[node].pattern_len(), Some(2));
    }

    #[test]
    fn insert_shares_prefixes() {
        let mut builder = AutomatonBuilder::new();
        builder.words(&["foo", "foobar", "fob"]);

        // root + f, o, o, b, a, r + b
        assert_eq!(builder.nodes.len(), 8);
        assert_eq!(builder.patterns, 3);
    }

    #[test]
    fn insert_twice_is_idempotent() {
        let mut builder = AutomatonBuilder::new();
        builder.word("foo").word("foo");

        assert_eq!(builder.nodes.len(), 4);
        assert_eq!(builder.patterns, 1);
        let node = search(&builder, "foo").unwrap();
        assert_eq!(builder.nodes[node].pattern_len(), Some(3));
    }

    #[test]
    fn insert_empty_is_rejected() {
        let mut builder = AutomatonBuilder::new();

        assert!(!builder.insert(""));
        assert!(!builder.nodes[ROOT].is_pattern_end());
        assert_eq!(builder.patterns, 0);
    }

    #[test]
    fn failure_links() {
        let mut builder = AutomatonBuilder::new();
        builder.words(&["he", "she", "his", "hers"]);
        builder.build_failure_links();

        let sh = search(&builder, "sh").unwrap();
        let she = search(&builder, "she").unwrap();
        let h = search(&builder, "h").unwrap();
        let he = search(&builder, "he").unwrap();
        let her = search(&builder, "her").unwrap();
        let hers = search(&builder, "hers").unwrap();
        let s = search(&builder, "s").unwrap();

        assert_eq!(builder.nodes[ROOT].fail, ROOT);
        assert_eq!(builder.nodes[h].fail, ROOT);
        assert_eq!(builder.nodes[sh].fail, h);
        assert_eq!(builder.nodes[she].fail, he);
        assert_eq!(builder.nodes[her].fail, ROOT);
        assert_eq!(builder.nodes[hers].fail, s);
    }

    #[test]
    fn output_links_skip_non_matching_nodes() {
        let mut builder = AutomatonBuilder::new();
        builder.words(&["a", "bca"]);
        builder.build_failure_links();

        let a = search(&builder, "a").unwrap();
        let bc = search(&builder, "bc").unwrap();
        let bca = search(&builder, "bca").unwrap();

        assert_eq!(builder.nodes[bca].fail, a);
        assert_eq!(builder.nodes[bca].output, a);
        assert_eq!(builder.nodes[bc].output, ROOT);
        assert_eq!(builder.nodes[a].output, ROOT);
    }

    #[test]
    fn output_links_chain_through_failure_links() {
        let mut builder = AutomatonBuilder::new();
        builder.words(&["c", "abcd", "bc"]);
        builder.build_failure_links();

        // "abc" is not a pattern end. Its failure link is "bc" which is, and the output of "bc"
        // is "c".
        let abc = search(&builder, "abc").unwrap();
        let bc = search(&builder, "bc").unwrap();
        let c = search(&builder, "c").unwrap();

        assert_eq!(builder.nodes[abc].fail, bc);
        assert_eq!(builder.nodes[abc].output, bc);
        assert_eq!(builder.nodes[bc].output, c);
    }

    #[test]
    fn build_resets_builder() {
        let mut builder = AutomatonBuilder::new();
        builder.word("foo");

        let automaton = builder.build();

        assert_eq!(automaton.pattern_count(), 1);
        assert_eq!(builder.nodes.len(), 1);
        assert_eq!(builder.patterns, 0);
    }
}
