//! A sensitive-word filter with whitelist suppression.
//!
//! Text is filtered by redacting every occurrence of a configured sensitive word, except where
//! the occurrence ends inside a phrase from a separate whitelist. Matching is done with an
//! [Aho-Corasick automaton](Automaton), reporting every occurrence (including overlapping and
//! nested ones) in a single pass over the text. All indices are in characters (Unicode scalar
//! values), never bytes.
//!
//! # Example
//! ```
//! use sensitive_filter::Engine;
//!
//! let engine = Engine::builder()
//!     .words(&["bad", "测试"])
//!     .whitelist(&["good bad"])
//!     .build();
//!
//! assert_eq!(engine.filter("bad, good bad"), "~~~, good bad");
//! assert_eq!(engine.filter("这是一个测试文本"), "这是一个~~文本");
//! ```
//!
//! # Loading word lists
//! Word lists are plain UTF-8 files holding one word per line. Blank lines are skipped.
//!
//! ```no_run
//! use sensitive_filter::{word_list::LineFlags, Engine};
//!
//! let engine = Engine::load("sensitive_words.txt", "white.txt", LineFlags::default())?;
//! # Ok::<(), sensitive_filter::LoadError>(())
//! ```
//!
//! # Concurrency
//! An [`Engine`] is immutable once built. It can be wrapped in an `Arc` and shared between
//! threads without locking.

#![warn(missing_debug_implementations)]

mod automaton;
mod builder;
mod engine;
mod error;
mod node;
mod redactor;
mod scanner;
mod span;
mod validate;
pub mod word_list;

pub use automaton::Automaton;
pub use builder::AutomatonBuilder;
pub use engine::{build_engine, Engine, EngineBuilder};
pub use error::{LoadError, ValidationError};
pub use redactor::{Redactor, WhitelistSpans, DEFAULT_PLACEHOLDER};
pub use scanner::Occurrences;
pub use span::{Occurrence, Span};
pub use validate::{validate, MAX_INPUT_CHARS};
pub use word_list::LineFlags;
