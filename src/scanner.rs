//! Scanning of text against an [`Automaton`].
//!
//! [`Occurrences`] walks the input one character at a time, keeping a single automaton state. After
//! each transition it reports every pattern ending at the current character: the pattern at the
//! current state (if any), followed by the patterns reachable through output links. Nested and
//! overlapping occurrences are therefore all reported, not only the longest.
//!
//! [`Automaton`]: crate::Automaton

use crate::{automaton::Automaton, node::ROOT, span::Occurrence};
use core::{iter::Enumerate, str::Chars};
use tracing::trace;

/// An iterator over every pattern occurrence within a string.
///
/// Created by [`Automaton::scan()`]. Occurrences are yielded in order of their end index. Those
/// sharing an end index are yielded longest first.
///
/// The iterator visits each character once, doing amortized constant work per character plus
/// constant work per occurrence reported.
#[derive(Clone, Debug)]
pub struct Occurrences<'a> {
    automaton: &'a Automaton,
    chars: Enumerate<Chars<'a>>,
    state: usize,
    /// Pending output walk: the end index of the current character and the next node to inspect.
    pending: Option<(usize, usize)>,
}

impl<'a> Occurrences<'a> {
    pub(crate) fn new(automaton: &'a Automaton, text: &'a str) -> Self {
        Self {
            automaton,
            chars: text.chars().enumerate(),
            state: ROOT,
            pending: None,
        }
    }
}

impl Iterator for Occurrences<'_> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((end, index)) = self.pending.take() {
                if index != ROOT {
                    let node = self.automaton.node(index);
                    if node.output != ROOT {
                        self.pending = Some((end, node.output));
                    }
                    if let Some(len) = node.pattern_len() {
                        let occurrence = Occurrence::new(end + 1 - len, end);
                        trace!(start = occurrence.start(), end, "occurrence");
                        return Some(occurrence);
                    }
                    continue;
                }
            }

            let (i, c) = self.chars.next()?;
            self.state = self.automaton.next_state(self.state, c);
            self.pending = Some((i, self.state));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Any number of patterns can end on a single character.
        (0, None)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Automaton, Occurrence};

    fn scan(words: &[&str], text: &str) -> Vec<Occurrence> {
        Automaton::builder().words(words).build().scan(text).collect()
    }

    #[test]
    fn single_word() {
        assert_eq!(scan(&["foo"], "foo"), vec![Occurrence::new(0, 2)]);
    }

    #[test]
    fn no_match() {
        assert_eq!(scan(&["foo"], "fo of oof"), vec![]);
    }

    #[test]
    fn empty_text() {
        assert_eq!(scan(&["foo"], ""), vec![]);
    }

    #[test]
    fn empty_automaton() {
        assert_eq!(scan(&[], "anything at all"), vec![]);
    }

    #[test]
    fn multiple_occurrences() {
        assert_eq!(
            scan(&["ab"], "abxab"),
            vec![Occurrence::new(0, 1), Occurrence::new(3, 4)]
        );
    }

    #[test]
    fn overlapping_occurrences() {
        assert_eq!(
            scan(&["aa"], "aaaa"),
            vec![
                Occurrence::new(0, 1),
                Occurrence::new(1, 2),
                Occurrence::new(2, 3)
            ]
        );
    }

    #[test]
    fn nested_occurrences_same_end() {
        assert_eq!(
            scan(&["c", "bc", "abc"], "abc"),
            vec![
                Occurrence::new(0, 2),
                Occurrence::new(1, 2),
                Occurrence::new(2, 2)
            ]
        );
    }

    #[test]
    fn nested_occurrence_inside_longer_word() {
        assert_eq!(
            scan(&["foobar", "oba"], "foobar"),
            vec![Occurrence::new(2, 4), Occurrence::new(0, 5)]
        );
    }

    #[test]
    fn classic_example() {
        assert_eq!(
            scan(&["he", "she", "his", "hers"], "ahishers"),
            vec![
                Occurrence::new(1, 3),
                Occurrence::new(3, 5),
                Occurrence::new(4, 5),
                Occurrence::new(4, 7),
            ]
        );
    }

    #[test]
    fn failure_after_partial_match() {
        // "abd" fails at 'd' and must fall back to match "bd" without rescanning.
        assert_eq!(
            scan(&["abc", "bd"], "abd"),
            vec![Occurrence::new(1, 2)]
        );
    }

    #[test]
    fn unicode_indices_are_characters() {
        assert_eq!(
            scan(&["测试"], "这是一个测试文本"),
            vec![Occurrence::new(4, 5)]
        );
    }

    #[test]
    fn lazy() {
        let automaton = Automaton::builder().word("a").build();
        let mut occurrences = automaton.scan("aaa");

        assert_eq!(occurrences.next(), Some(Occurrence::new(0, 0)));
        assert_eq!(occurrences.next(), Some(Occurrence::new(1, 1)));
        assert_eq!(occurrences.next(), Some(Occurrence::new(2, 2)));
        assert_eq!(occurrences.next(), None);
    }
}
