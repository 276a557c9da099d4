//! TUI color semantics and style constants.
//!
//! Pure data — consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Cyan: interactive elements (buttons, focused input, key hints)
//! - Yellow: notices and ratings
//! - Dim: de-emphasized (comments, empty-state text)
//! - Bold: important (review titles, average)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Notice / attention needed — yellow.
pub const STYLE_WARNING: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Action button ("Add to Book Review", "Save").
pub const STYLE_BUTTON: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Secondary action button ("Back").
pub const STYLE_BUTTON_ALT: Style = Style::new().fg(Color::Black).bg(Color::Magenta);

/// Border of the focused input.
pub const STYLE_FOCUSED: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Border of an unfocused input or review card.
pub const STYLE_BORDER: Style = Style::new().fg(Color::DarkGray);

/// Rating value on a card.
pub const STYLE_RATING: Style = Style::new().fg(Color::Yellow);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_styles_have_expected_colors() {
        assert_eq!(STYLE_WARNING.fg, Some(Color::Yellow));
        assert_eq!(STYLE_INTERACTIVE.fg, Some(Color::Cyan));
        assert_eq!(STYLE_DIM.fg, Some(Color::DarkGray));
    }

    #[test]
    fn important_style_is_bold() {
        assert!(STYLE_IMPORTANT.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn buttons_are_distinguishable() {
        assert_ne!(STYLE_BUTTON.bg, STYLE_BUTTON_ALT.bg);
    }
}
