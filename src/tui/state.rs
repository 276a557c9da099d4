//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. The transition function
//! (`update`) and the rendering layer (`view`) both program against them.
//!
//! Screen variants carry only per-screen transient state (scroll offset,
//! form buffers). Shared data (the review store) lives in App.

use std::time::Duration;

use crate::types::{Review, ReviewStore};

use super::form::EntryForm;
use super::notice::Toast;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Owns the review store, the current screen and the visible notice.
/// The effects layer reads this to know what to render.
#[derive(Debug)]
pub struct App {
    /// Current screen — carries per-screen scroll/form state.
    pub screen: Screen,

    /// Reviews submitted this session.
    pub store: ReviewStore,

    /// Validation notice, shown until it expires.
    pub toast: Toast,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Review cards and the running average.
    ListView {
        /// Index of the first visible card.
        scroll: usize,
    },

    /// Form for a new review.
    EntryView(EntryForm),
}

/// Default screen is the list (used as placeholder during transitions).
impl Default for Screen {
    fn default() -> Self {
        Screen::list()
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions.
/// The transition function decides what each Action means per Screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the entry form (list screen).
    AddReview,
    /// Scroll the card list up by one card.
    ScrollUp,
    /// Scroll the card list down by one card.
    ScrollDown,
    /// Type a character into the focused field.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Focus the next form field.
    NextField,
    /// Focus the previous form field.
    PrevField,
    /// Validate and submit the form.
    Save,
    /// Leave the form without saving.
    Back,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// Follows the Elm/TEA pattern: pure code describes WHAT should happen,
/// the caller applies it to App.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
    /// Change shared state outside the screen.
    Effect(Effect),
}

/// Mutation of shared state requested by a pure transition.
#[derive(Debug, PartialEq)]
pub enum Effect {
    /// Append a validated review and return to the list.
    SaveReview(Review),
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Empty store, list screen, no notice.
    pub fn new(notice_duration: Duration) -> Self {
        App {
            screen: Screen::list(),
            store: ReviewStore::new(),
            toast: Toast::new(notice_duration),
            should_quit: false,
        }
    }
}

impl Screen {
    /// List scrolled to the top.
    pub fn list() -> Self {
        Screen::ListView { scroll: 0 }
    }

    /// Blank form focused on the title.
    pub fn entry() -> Self {
        Screen::EntryView(EntryForm::default())
    }

    /// Whether printable keys should be treated as text input.
    pub fn accepts_text(&self) -> bool {
        matches!(self, Screen::EntryView(_))
    }
}

// ============================================================================
// TESTS
// ============================================================================
