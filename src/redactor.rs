//! Redaction of sensitive occurrences, reconciled against whitelist spans.
//!
//! Two independent occurrence sets exist over the same text: the sensitive occurrences, which are
//! candidates for redaction, and the whitelist spans, which only ever suppress redaction. A
//! [`Redactor`] combines them, overwriting every character of each unsuppressed sensitive
//! occurrence with a placeholder.
//!
//! # Suppression rule
//! A sensitive occurrence is suppressed when its **end** index falls inside some whitelist span.
//! Only the end index is checked, not the full range. This means a whitelist span starting
//! partway through a sensitive word does suppress it, while one ending partway through a
//! sensitive word does not, even if the rest of the word is covered:
//!
//! ```
//! use sensitive_filter::Engine;
//!
//! let engine = Engine::builder().words(&["bad"]).whitelist(&["xba", "adx"]).build();
//!
//! // "xba" covers the start of "bad" but not its end, so "bad" is redacted.
//! assert_eq!(engine.filter("xbad"), "x~~~");
//! // "adx" covers the end of "bad", so "bad" is kept.
//! assert_eq!(engine.filter("badx"), "badx");
//! ```

use crate::span::{Occurrence, Span};
use nested_containment_list::NestedContainmentList;
use std::{borrow::Cow, fmt};
use tracing::trace;

/// The placeholder written over redacted characters unless configured otherwise.
pub const DEFAULT_PLACEHOLDER: char = '~';

/// Whitelist spans found within a single text.
///
/// Spans are stored in a `NestedContainmentList`, so looking up whether an index is covered costs
/// a logarithmic search instead of a walk over every span.
pub struct WhitelistSpans {
    spans: NestedContainmentList<Span, usize>,
}

impl WhitelistSpans {
    /// No spans. Nothing is ever suppressed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            spans: NestedContainmentList::new(),
        }
    }

    /// Number of spans stored, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns `true` if any span covers `index`.
    pub fn covers(&self, index: usize) -> bool {
        if self.is_empty() {
            return false;
        }
        let query = index..=index;
        let covered = self.spans.overlapping(&query).next().is_some();
        covered
    }

    /// Returns `true` if redaction of `occurrence` is suppressed.
    ///
    /// Only the end index of `occurrence` is checked. A span covering its start but not its end
    /// does not suppress it.
    #[inline]
    pub fn suppresses(&self, occurrence: &Occurrence) -> bool {
        self.covers(occurrence.end())
    }
}

impl fmt::Debug for WhitelistSpans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhitelistSpans")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl Default for WhitelistSpans {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Span> for WhitelistSpans {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Span>,
    {
        // Collecting sorts the spans first, which `insert` alone does not.
        Self {
            spans: iter.into_iter().collect(),
        }
    }
}

/// Overwrites sensitive occurrences with a placeholder character.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Redactor {
    placeholder: char,
}

impl Redactor {
    #[inline]
    #[must_use]
    pub const fn new(placeholder: char) -> Self {
        Self { placeholder }
    }

    #[inline]
    pub const fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Redact every occurrence in `occurrences` not suppressed by `whitelist`.
    ///
    /// If nothing was overwritten, `text` is returned as-is without allocating.
    ///
    /// Occurrences must have been found within `text`. Indices beyond the end of `text` are
    /// ignored.
    ///
    /// # Example
    /// ```
    /// use sensitive_filter::{Occurrence, Redactor, WhitelistSpans};
    ///
    /// let redactor = Redactor::default();
    ///
    /// assert_eq!(
    ///     redactor.redact("foo bar", [Occurrence::new(4, 6)], &WhitelistSpans::new()),
    ///     "foo ~~~",
    /// );
    /// ```
    pub fn redact<'a, I>(
        &self,
        text: &'a str,
        occurrences: I,
        whitelist: &WhitelistSpans,
    ) -> Cow<'a, str>
    where
        I: IntoIterator<Item = Occurrence>,
    {
        let len = text.chars().count();
        let mut chars: Option<Vec<char>> = None;
        for occurrence in occurrences {
            if whitelist.suppresses(&occurrence) {
                trace!(
                    start = occurrence.start(),
                    end = occurrence.end(),
                    "suppressed by whitelist"
                );
                continue;
            }
            if occurrence.start() >= len {
                continue;
            }
            let end = occurrence.end().min(len - 1);
            let chars = chars.get_or_insert_with(|| text.chars().collect());
            trace!(start = occurrence.start(), end, "redacted");
            for c in &mut chars[occurrence.start()..=end] {
                *c = self.placeholder;
            }
        }

        match chars {
            Some(chars) => Cow::Owned(chars.into_iter().collect()),
            None => Cow::Borrowed(text),
        }
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER)
    }
}
