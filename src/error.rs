use std::{io, path::PathBuf};
use thiserror::Error;

/// A word list could not be retrieved.
///
/// This only occurs while building an [`Engine`](crate::Engine) and is not recoverable: a
/// filter missing its word lists must not serve.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open word list {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read word list {} at line {line}: {source}", path.display())]
    Read {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Caller-supplied text was rejected before filtering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing text to filter")]
    MissingText,

    #[error("text is {length} characters long, exceeding the limit of {limit}")]
    TooLong { length: usize, limit: usize },
}
