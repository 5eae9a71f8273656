//! The [`Engine`], composing a sensitive automaton with a whitelist automaton.

use crate::{
    automaton::Automaton,
    builder::AutomatonBuilder,
    error::LoadError,
    redactor::{Redactor, WhitelistSpans, DEFAULT_PLACEHOLDER},
    span::Occurrence,
    word_list::{self, LineFlags},
};
use std::{borrow::Cow, path::Path};
use tracing::debug;

/// A sensitive-word filter.
///
/// An `Engine` holds two automatons: one matching sensitive words and one matching whitelist
/// phrases. Filtering redacts every sensitive occurrence whose end is not covered by a whitelist
/// occurrence. An empty whitelist never suppresses anything.
///
/// Engines are immutable once built, so a single `Engine` may be shared between any number of
/// threads filtering concurrently.
///
/// # Example
/// ```
/// use sensitive_filter::Engine;
///
/// let engine = Engine::builder().words(&["bad"]).whitelist(&["good bad"]).build();
///
/// assert_eq!(engine.filter("this is good bad end"), "this is good bad end");
/// assert_eq!(engine.filter("bad alone"), "~~~ alone");
/// ```
#[derive(Debug)]
pub struct Engine {
    sensitive: Automaton,
    whitelist: Automaton,
    redactor: Redactor,
}

impl Engine {
    /// Creates an engine from already-built automatons, redacting with `'~'`.
    #[must_use]
    pub fn new(sensitive: Automaton, whitelist: Automaton) -> Self {
        Self {
            sensitive,
            whitelist,
            redactor: Redactor::default(),
        }
    }

    /// Shorthand for [`EngineBuilder::new()`].
    #[inline]
    #[must_use]
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    /// Builds an engine from word lists stored in files, one word per line.
    ///
    /// # Errors
    /// Returns a [`LoadError`] if either file cannot be opened or read.
    pub fn load<P, Q>(sensitive: P, whitelist: Q, flags: LineFlags) -> Result<Self, LoadError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let sensitive = word_list::load(sensitive, flags)?;
        let whitelist = word_list::load(whitelist, flags)?;
        Ok(build_engine(sensitive, whitelist))
    }

    #[inline]
    pub fn sensitive(&self) -> &Automaton {
        &self.sensitive
    }

    #[inline]
    pub fn whitelist(&self) -> &Automaton {
        &self.whitelist
    }

    #[inline]
    pub fn placeholder(&self) -> char {
        self.redactor.placeholder()
    }

    /// Find the whitelist spans within `text`.
    ///
    /// Skips scanning altogether when the whitelist is empty.
    pub fn whitelist_spans(&self, text: &str) -> WhitelistSpans {
        if self.whitelist.is_empty() {
            WhitelistSpans::new()
        } else {
            self.whitelist.scan(text).collect()
        }
    }

    /// Find every sensitive occurrence in `text` that filtering would redact.
    ///
    /// # Example
    /// ```
    /// use sensitive_filter::{Engine, Occurrence};
    ///
    /// let engine = Engine::builder().words(&["foo"]).whitelist(&["foobar"]).build();
    ///
    /// assert_eq!(engine.find("foo foobar"), vec![Occurrence::new(0, 2)]);
    /// ```
    pub fn find(&self, text: &str) -> Vec<Occurrence> {
        let whitelist = self.whitelist_spans(text);
        self.sensitive
            .scan(text)
            .filter(|occurrence| !whitelist.suppresses(occurrence))
            .collect()
    }

    /// Check whether filtering `text` would redact anything.
    pub fn check(&self, text: &str) -> bool {
        let whitelist = self.whitelist_spans(text);
        self.sensitive
            .scan(text)
            .any(|occurrence| !whitelist.suppresses(&occurrence))
    }

    /// Redact every sensitive word within `text`.
    ///
    /// This never fails. If nothing is redacted, `text` is returned borrowed.
    ///
    /// # Example
    /// ```
    /// use sensitive_filter::Engine;
    ///
    /// let engine = Engine::builder().words(&["测试"]).build();
    ///
    /// assert_eq!(engine.filter("这是一个测试文本"), "这是一个~~文本");
    /// ```
    pub fn filter<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let whitelist = self.whitelist_spans(text);
        let filtered = self
            .redactor
            .redact(text, self.sensitive.scan(text), &whitelist);
        debug!(
            chars = text.chars().count(),
            whitelist_spans = whitelist.len(),
            changed = matches!(filtered, Cow::Owned(_)),
            "filtered text"
        );
        filtered
    }
}

/// Build an [`Engine`] from in-memory word lists.
///
/// Empty words are skipped. An empty whitelist disables suppression.
pub fn build_engine<I, J, S, T>(sensitive: I, whitelist: J) -> Engine
where
    I: IntoIterator<Item = S>,
    J: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    Engine::builder().words(sensitive).whitelist(whitelist).build()
}

/// A builder for an [`Engine`].
#[derive(Debug)]
pub struct EngineBuilder {
    sensitive: AutomatonBuilder,
    whitelist: AutomatonBuilder,
    placeholder: char,
}

impl EngineBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sensitive: AutomatonBuilder::new(),
            whitelist: AutomatonBuilder::new(),
            placeholder: DEFAULT_PLACEHOLDER,
        }
    }

    /// Adds a sensitive word.
    #[inline]
    pub fn word<S>(&mut self, word: &S) -> &mut Self
    where
        S: AsRef<str> + ?Sized,
    {
        self.sensitive.word(word);
        self
    }

    /// Adds sensitive words.
    #[inline]
    pub fn words<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sensitive.words(words);
        self
    }

    /// Adds a whitelist phrase.
    #[inline]
    pub fn whitelist_phrase<S>(&mut self, phrase: &S) -> &mut Self
    where
        S: AsRef<str> + ?Sized,
    {
        self.whitelist.word(phrase);
        self
    }

    /// Adds whitelist phrases.
    #[inline]
    pub fn whitelist<I, S>(&mut self, phrases: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.whitelist.words(phrases);
        self
    }

    /// Sets the character written over redacted characters. Defaults to `'~'`.
    #[inline]
    pub fn placeholder(&mut self, placeholder: char) -> &mut Self {
        self.placeholder = placeholder;
        self
    }

    /// Builds both automatons, returning the finished [`Engine`].
    #[must_use]
    pub fn build(&mut self) -> Engine {
        let engine = Engine {
            sensitive: self.sensitive.build(),
            whitelist: self.whitelist.build(),
            redactor: Redactor::new(self.placeholder),
        };
        debug!(
            sensitive = engine.sensitive.pattern_count(),
            whitelist = engine.whitelist.pattern_count(),
            "engine built"
        );
        engine
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
