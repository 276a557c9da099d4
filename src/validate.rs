//! Review validation: raw form text in, `Review` or rejection out.
//!
//! Pure functions, no I/O. The check order is fixed: blank fields are
//! reported before the rating is ever parsed.

use thiserror::Error;

use crate::types::{Rating, Review};

/// Why a submission was rejected. Both cases are user-correctable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// At least one input is empty or whitespace-only.
    #[error("Fill in all fields")]
    MissingField,
    /// Rating text is not an integer, or is outside [1, 5].
    #[error("Rating must be 1 to 5")]
    InvalidRating,
}

/// Raw text as typed into the entry form.
#[derive(Debug, Clone, Copy)]
pub struct ReviewInput<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub rating: &'a str,
    pub comment: &'a str,
}

/// Validate raw input and build a `Review`.
///
/// Field text is kept exactly as typed; only the emptiness check
/// looks through whitespace.
pub fn validate(input: ReviewInput<'_>) -> Result<Review, ValidationError> {
    let fields = [input.title, input.author, input.rating, input.comment];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(ValidationError::MissingField);
    }

    let rating = parse_rating(input.rating)?;

    Ok(Review {
        title: input.title.to_string(),
        author: input.author.to_string(),
        rating,
        comment: input.comment.to_string(),
    })
}

/// Parse rating text as an integer in [1, 5].
fn parse_rating(text: &str) -> Result<Rating, ValidationError> {
    text.parse::<i32>()
        .ok()
        .and_then(Rating::new)
        .ok_or(ValidationError::InvalidRating)
}

// ============================================================================
// TESTS
// ============================================================================
