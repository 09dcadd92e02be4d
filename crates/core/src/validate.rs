//! Domain validation for showcase submissions.
//!
//! These checks mirror the database constraints so invalid input is rejected
//! with a 400 before a round-trip, and so the client crate can share the
//! same rules.

use crate::error::CoreError;

/// Lowest selectable star rating.
pub const RATING_MIN: i32 = 1;
/// Highest selectable star rating.
pub const RATING_MAX: i32 = 5;

/// Validate that a rating is within the five-star range.
pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be between {RATING_MIN} and {RATING_MAX}"
        )));
    }
    Ok(())
}

/// Validate that prompt text is present and non-empty after trimming.
pub fn validate_prompt_text(prompt_text: &str) -> Result<(), CoreError> {
    if prompt_text.trim().is_empty() {
        return Err(CoreError::Validation("Prompt text is required".into()));
    }
    Ok(())
}

/// Normalize an optional free-text field: blank or whitespace-only input
/// becomes `None`, which serializes as an explicit JSON `null`.
pub fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
