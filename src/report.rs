//! Session summary formatting.
//!
//! Pure functions — (ReviewStore, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::types::{OutputFormat, Review, ReviewStore};

/// Format the average rating to two decimals, rounding half up.
///
/// Works on the exact integer sum so ties like 9/8 = 1.125 always
/// round to "1.13" rather than depending on binary float representation.
pub fn format_average(store: &ReviewStore) -> String {
    let count = store.len() as u64;
    if count == 0 {
        return "0.00".to_string();
    }
    // floor(sum * 100 / count + 1/2)
    let hundredths = (store.rating_sum() * 200 + count) / (2 * count);
    format!("{}.{:02}", hundredths / 100, hundredths % 100)
}

/// Format the session's reviews for output.
///
/// Pure function: takes data, returns formatted string.
pub fn format_report(store: &ReviewStore, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(store),
        OutputFormat::Json => format_json(store),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(store: &ReviewStore) -> String {
    let mut out = String::new();

    if !store.is_empty() {
        out.push_str("=== Reviews ===\n");
        for review in store.all() {
            out.push_str(&format!("{}\n", review.title));
            out.push_str(&format!("  Author: {}\n", review.author));
            out.push_str(&format!("  Rating: {}\n", review.rating));
            out.push_str(&format!("  Comment: {}\n", review.comment));
        }
        out.push('\n');
    }

    out.push_str("=== Summary ===\n");
    out.push_str(&format!("Reviews: {}\n", store.len()));
    out.push_str(&format!("Average Rating: {}\n", format_average(store)));

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[derive(Serialize)]
struct JsonSummary<'a> {
    reviews: &'a [Review],
    count: usize,
    average_rating: f64,
}

fn format_json(store: &ReviewStore) -> String {
    let summary = JsonSummary {
        reviews: store.all(),
        count: store.len(),
        average_rating: store.average_rating(),
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => json + "\n",
        Err(e) => format!("{{\"error\": \"{}\"}}\n", e),
    }
}

// ============================================================================
// TESTS
// ============================================================================
