//! Normalization of free-text query parameters.

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Upper-cases the first letter of a word and lower-cases the rest.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Capitalizes every whitespace-separated word and collapses runs of
/// whitespace to a single space.
pub fn capitalize_words(input: &str) -> String {
    input
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Some(trimmed)` for a present, non-blank parameter.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Required parameter: absent or blank is a 400.
pub fn require_field(field: &str, value: Option<String>) -> Result<String, AppError> {
    non_blank(value).ok_or_else(|| {
        AppError::bad_request(
            ErrorCode::MissingField,
            format!("Missing required field '{field}'."),
        )
    })
}

/// Rejects values longer than the column allows.
pub fn check_len(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::unprocessable(
            ErrorCode::Unprocessable,
            format!("Field '{field}' must be at most {max} characters."),
        ));
    }
    Ok(())
}
