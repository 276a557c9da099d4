//! Domain types for book-review.
//!
//! A `Review` can only hold a validated `Rating`, so the store never
//! contains an out-of-range record.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============================================================================
// PRIMITIVES
// ============================================================================

/// Star rating in the closed range [1, 5].
///
/// Constructed only through [`Rating::new`], which rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Returns the rating if `value` lies within [1, 5].
    pub fn new(value: i32) -> Option<Self> {
        if (i32::from(Self::MIN)..=i32::from(Self::MAX)).contains(&value) {
            u8::try_from(value).ok().map(Rating)
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(i32::from(value))
            .ok_or_else(|| format!("rating {} outside {}..={}", value, Self::MIN, Self::MAX))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// STRUCTS
// ============================================================================

/// A single submitted book review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub title: String,
    pub author: String,
    pub rating: Rating,
    pub comment: String,
}

/// In-memory, append-only review list for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewStore {
    reviews: Vec<Review>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a review. Always succeeds.
    pub fn append(&mut self, review: Review) {
        self.reviews.push(review);
    }

    /// All reviews in insertion order.
    pub fn all(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Sum of every stored rating.
    pub fn rating_sum(&self) -> u64 {
        self.reviews.iter().map(|r| u64::from(r.rating.get())).sum()
    }

    /// Arithmetic mean of all ratings, or 0.0 for an empty store.
    pub fn average_rating(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        self.rating_sum() as f64 / self.reviews.len() as f64
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for the end-of-session summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Runtime knobs for one interactive session.
#[derive(Debug)]
pub struct SessionConfig {
    /// How long a validation notice stays on screen.
    pub notice_duration: Duration,
    /// Print the session's reviews after the terminal is restored.
    pub summary: Option<OutputFormat>,
    /// Write tracing output to this file (None = logging off).
    pub log_file: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            notice_duration: Duration::from_millis(2000),
            summary: None,
            log_file: None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
