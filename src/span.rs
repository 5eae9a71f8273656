use core::ops::{Bound, RangeBounds};

/// A matched pattern's location within scanned text.
///
/// Both `start` and `end` are inclusive character (not byte) indices, so a pattern of `n`
/// characters produces an occurrence with `end - start + 1 == n`. An occurrence always covers at
/// least one character.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Occurrence {
    start: usize,
    end: usize,
}

/// A whitelist occurrence, used only to suppress redaction.
pub type Span = Occurrence;

impl Occurrence {
    /// Creates a new occurrence spanning `start..=end`.
    ///
    /// # Panics
    /// Panics if `start > end`.
    #[inline]
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        assert!(
            start <= end,
            "occurrence start {} is after its end {}",
            start,
            end
        );
        Self { start, end }
    }

    /// Index of the first character covered.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Index of the last character covered.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of characters covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always `false`; occurrences cover at least one character.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns `true` if `index` lies within `start..=end`.
    #[inline]
    pub fn contains_index(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }
}

/// Both bounds are inclusive, allowing occurrences to be stored in a `NestedContainmentList`.
impl RangeBounds<usize> for Occurrence {
    #[inline]
    fn start_bound(&self) -> Bound<&usize> {
        Bound::Included(&self.start)
    }

    #[inline]
    fn end_bound(&self) -> Bound<&usize> {
        Bound::Included(&self.end)
    }
}
