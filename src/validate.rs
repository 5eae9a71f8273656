use crate::error::ValidationError;

/// The default maximum length, in characters, of text accepted for filtering.
pub const MAX_INPUT_CHARS: usize = 3000;

/// Check caller-supplied text before it is filtered.
///
/// Absent and empty text are both rejected as missing. Text longer than `limit` characters (not
/// bytes) is rejected as too long.
///
/// # Example
/// ```
/// use sensitive_filter::{validate, ValidationError, MAX_INPUT_CHARS};
///
/// assert_eq!(validate(Some("foo"), MAX_INPUT_CHARS), Ok("foo"));
/// assert_eq!(validate(None, MAX_INPUT_CHARS), Err(ValidationError::MissingText));
/// ```
pub fn validate(text: Option<&str>, limit: usize) -> Result<&str, ValidationError> {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return Err(ValidationError::MissingText),
    };

    let length = text.chars().count();
    if length > limit {
        return Err(ValidationError::TooLong { length, limit });
    }

    Ok(text)
}
