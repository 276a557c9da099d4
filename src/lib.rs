//! book-review: record book reviews and track their average rating.

pub mod logging;
pub mod report;
pub mod tui;
pub mod types;
pub mod validate;
