//! Word-list input.
//!
//! A word list is UTF-8 text holding one pattern per line, read in order. Line terminators (`\n`
//! and `\r\n`) are never part of a pattern, and blank lines are skipped rather than inserted as
//! empty patterns. Further clean-up is controlled by [`LineFlags`].

use crate::error::LoadError;
use bitflags::bitflags;
use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};
use tracing::debug;

const BYTE_ORDER_MARK: char = '\u{feff}';

bitflags! {
    /// Flags controlling how each line of a word list becomes a pattern.
    pub struct LineFlags: u8 {
        /// Remove a UTF-8 byte-order mark from the start of the first line.
        const STRIP_BOM = 0b0000_0001;
        /// Trim leading and trailing whitespace from every line.
        ///
        /// Whitespace inside a line is always kept, as whitelist phrases commonly contain spaces.
        const TRIM_WHITESPACE = 0b0000_0010;
    }
}

impl Default for LineFlags {
    fn default() -> Self {
        Self::STRIP_BOM
    }
}

/// Turn a single line into a pattern.
///
/// Returns `None` if nothing remains of the line.
fn pattern(line: &str, first: bool, flags: LineFlags) -> Option<&str> {
    let mut line = line;
    if first && flags.contains(LineFlags::STRIP_BOM) {
        line = line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line);
    }
    if flags.contains(LineFlags::TRIM_WHITESPACE) {
        line = line.trim();
    }
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

/// Parse an in-memory word list.
///
/// # Example
/// ```
/// use sensitive_filter::word_list::{self, LineFlags};
///
/// let words = word_list::parse("foo\r\n\nbar baz\n", LineFlags::default()).collect::<Vec<_>>();
///
/// assert_eq!(words, vec!["foo", "bar baz"]);
/// ```
pub fn parse(text: &str, flags: LineFlags) -> impl Iterator<Item = &str> {
    text.lines()
        .enumerate()
        .filter_map(move |(i, line)| pattern(line, i == 0, flags))
}

/// Read a word list from `reader`.
///
/// On failure, returns the 1-based number of the line that could not be read. Invalid UTF-8 is
/// reported this way as well.
fn read<R>(reader: R, flags: LineFlags) -> Result<(Vec<String>, usize), (usize, io::Error)>
where
    R: BufRead,
{
    let mut words = Vec::new();
    let mut skipped = 0;
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|error| (i + 1, error))?;
        match pattern(&line, i == 0, flags) {
            Some(word) => words.push(word.to_owned()),
            None => skipped += 1,
        }
    }
    Ok((words, skipped))
}

/// Load a word list from the file at `path`.
///
/// # Errors
/// Returns a [`LoadError`] if the file cannot be opened or read.
pub fn load<P>(path: P, flags: LineFlags) -> Result<Vec<String>, LoadError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_owned(),
        source,
    })?;
    let (words, skipped) =
        read(BufReader::new(file), flags).map_err(|(line, source)| LoadError::Read {
            path: path.to_owned(),
            line,
            source,
        })?;

    debug!(path = %path.display(), words = words.len(), skipped, "loaded word list");
    Ok(words)
}
