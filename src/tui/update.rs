//! Pure state transitions: (Screen, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Each screen defines which actions it accepts. Unhandled actions
//! return the current screen unchanged (no-op).

use tracing::{debug, info};

use crate::types::ReviewStore;
use crate::validate::validate;

use super::form::EntryForm;
use super::notice::Notifier;
use super::state::{Action, App, Effect, Screen, Transition};

/// Pure state transition function.
///
/// Given the current screen, an action and a read-only view of the
/// store, produces the next transition. Rejected saves are reported
/// through `notifier`; nothing else is written.
pub fn update<N: Notifier>(
    screen: Screen,
    action: &Action,
    store: &ReviewStore,
    notifier: &mut N,
) -> Transition {
    match screen {
        Screen::ListView { scroll } => update_list(scroll, action, store),
        Screen::EntryView(form) => update_entry(form, action, notifier),
    }
}

/// Apply an action to the app: run `update`, then fold the transition
/// back into App. The event loop and tests both drive the app this way.
pub fn dispatch(app: &mut App, action: &Action) {
    let screen = std::mem::take(&mut app.screen);
    let transition = update(screen, action, &app.store, &mut app.toast);

    match transition {
        Transition::Screen(new_screen) => {
            app.screen = new_screen;
        }
        Transition::Quit => {
            app.should_quit = true;
        }
        Transition::Effect(effect) => apply_effect(app, effect),
    }
}

fn apply_effect(app: &mut App, effect: Effect) {
    match effect {
        Effect::SaveReview(review) => {
            info!(title = %review.title, rating = %review.rating, "review saved");
            app.store.append(review);
            app.screen = Screen::list();
        }
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// List: open the form, scroll the cards, quit.
fn update_list(scroll: usize, action: &Action, store: &ReviewStore) -> Transition {
    let len = store.len();

    match action {
        Action::AddReview => {
            debug!("opening entry form");
            Transition::Screen(Screen::entry())
        }
        Action::ScrollUp => Transition::Screen(Screen::ListView {
            scroll: scroll.saturating_sub(1),
        }),
        Action::ScrollDown => {
            let new_scroll = if len == 0 { 0 } else { (scroll + 1).min(len - 1) };
            Transition::Screen(Screen::ListView { scroll: new_scroll })
        }
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::ListView { scroll }),
    }
}

/// Entry: edit buffers, save through validation, or go back.
fn update_entry<N: Notifier>(mut form: EntryForm, action: &Action, notifier: &mut N) -> Transition {
    match action {
        Action::Input(c) => form.insert_char(*c),
        Action::Backspace => form.backspace(),
        Action::NextField => form.focus_next(),
        Action::PrevField => form.focus_prev(),
        Action::Save => {
            return match validate(form.as_input()) {
                Ok(review) => Transition::Effect(Effect::SaveReview(review)),
                Err(err) => {
                    debug!(reason = %err, "review rejected");
                    notifier.notify(&err.to_string());
                    Transition::Screen(Screen::EntryView(form))
                }
            };
        }
        Action::Back => {
            debug!("entry form discarded");
            return Transition::Screen(Screen::list());
        }
        Action::Quit => return Transition::Quit,
        _ => {}
    }
    Transition::Screen(Screen::EntryView(form))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::form::Field;
    use crate::report::format_average;
    use crate::types::{Rating, Review};
    use std::time::Duration;

    fn filled(title: &str, author: &str, rating: &str, comment: &str) -> Screen {
        Screen::EntryView(EntryForm {
            title: title.into(),
            author: author.into(),
            rating: rating.into(),
            comment: comment.into(),
            focus: Field::Comment,
        })
    }

    fn store_with(n: usize) -> ReviewStore {
        let mut store = ReviewStore::new();
        for i in 0..n {
            store.append(Review {
                title: format!("Book {}", i),
                author: "Anon".into(),
                rating: Rating::new(3).unwrap(),
                comment: "ok".into(),
            });
        }
        store
    }

    fn new_app() -> App {
        App::new(Duration::from_secs(60))
    }

    /// Open the form, type each field, and press save.
    fn submit(app: &mut App, fields: [&str; 4]) {
        dispatch(app, &Action::AddReview);
        for (i, text) in fields.iter().enumerate() {
            if i > 0 {
                dispatch(app, &Action::NextField);
            }
            for c in text.chars() {
                dispatch(app, &Action::Input(c));
            }
        }
        dispatch(app, &Action::Save);
    }

    // -- ListView --

    #[test]
    fn list_add_opens_blank_form() {
        let mut seen = Vec::new();
        let result = update(Screen::list(), &Action::AddReview, &store_with(0), &mut seen);
        assert_eq!(result, Transition::Screen(Screen::entry()));
        assert!(seen.is_empty());
    }

    #[test]
    fn list_quit() {
        let mut seen = Vec::new();
        assert_eq!(
            update(Screen::list(), &Action::Quit, &store_with(0), &mut seen),
            Transition::Quit
        );
    }

    #[test]
    fn list_scroll_down_clamps_at_last_card() {
        let mut seen = Vec::new();
        let store = store_with(3);
        let result = update(Screen::ListView { scroll: 2 }, &Action::ScrollDown, &store, &mut seen);
        assert_eq!(result, Transition::Screen(Screen::ListView { scroll: 2 }));
    }

    #[test]
    fn list_scroll_down_on_empty_stays_at_top() {
        let mut seen = Vec::new();
        let result = update(Screen::list(), &Action::ScrollDown, &store_with(0), &mut seen);
        assert_eq!(result, Transition::Screen(Screen::list()));
    }

    #[test]
    fn list_scroll_up_at_top_stays() {
        let mut seen = Vec::new();
        let result = update(Screen::list(), &Action::ScrollUp, &store_with(3), &mut seen);
        assert_eq!(result, Transition::Screen(Screen::list()));
    }

    #[test]
    fn list_ignores_text_actions() {
        let mut seen = Vec::new();
        let result = update(Screen::ListView { scroll: 1 }, &Action::Save, &store_with(3), &mut seen);
        assert_eq!(result, Transition::Screen(Screen::ListView { scroll: 1 }));
    }

    // -- EntryView --

    #[test]
    fn entry_save_valid_emits_review() {
        let mut seen = Vec::new();
        let result = update(
            filled("Dune", "Herbert", "5", "Great"),
            &Action::Save,
            &store_with(0),
            &mut seen,
        );
        assert_eq!(
            result,
            Transition::Effect(Effect::SaveReview(Review {
                title: "Dune".into(),
                author: "Herbert".into(),
                rating: Rating::new(5).unwrap(),
                comment: "Great".into(),
            }))
        );
        assert!(seen.is_empty());
    }

    #[test]
    fn entry_save_blank_field_keeps_form_and_notifies() {
        let mut seen = Vec::new();
        let screen = filled("Dune", "", "5", "Great");
        let result = update(screen.clone(), &Action::Save, &store_with(0), &mut seen);
        assert_eq!(result, Transition::Screen(screen));
        assert_eq!(seen, vec!["Fill in all fields"]);
    }

    #[test]
    fn entry_save_bad_rating_keeps_form_and_notifies() {
        for rating in ["0", "6", "abc"] {
            let mut seen = Vec::new();
            let screen = filled("Dune", "Herbert", rating, "Great");
            let result = update(screen.clone(), &Action::Save, &store_with(0), &mut seen);
            assert_eq!(result, Transition::Screen(screen));
            assert_eq!(seen, vec!["Rating must be 1 to 5"]);
        }
    }

    #[test]
    fn entry_save_empty_rating_is_missing_field() {
        let mut seen = Vec::new();
        update(filled("Dune", "Herbert", "", "Great"), &Action::Save, &store_with(0), &mut seen);
        assert_eq!(seen, vec!["Fill in all fields"]);
    }

    #[test]
    fn entry_back_discards_input() {
        let mut seen = Vec::new();
        let result = update(filled("Du", "", "9", ""), &Action::Back, &store_with(0), &mut seen);
        assert_eq!(result, Transition::Screen(Screen::list()));
        assert!(seen.is_empty());
    }

    #[test]
    fn entry_typing_edits_focused_field() {
        let mut seen = Vec::new();
        let result = update(Screen::entry(), &Action::Input('x'), &store_with(0), &mut seen);
        match result {
            Transition::Screen(Screen::EntryView(form)) => assert_eq!(form.title, "x"),
            other => panic!("Expected EntryView, got {:?}", other),
        }
    }

    #[test]
    fn entry_ignores_list_actions() {
        let mut seen = Vec::new();
        let screen = filled("a", "b", "1", "c");
        let result = update(screen.clone(), &Action::AddReview, &store_with(0), &mut seen);
        assert_eq!(result, Transition::Screen(screen));
    }

    // -- dispatch --

    #[test]
    fn dispatch_valid_submission_appends_and_returns_to_list() {
        let mut app = new_app();
        submit(&mut app, ["Dune", "Herbert", "5", "Great"]);
        assert_eq!(app.screen, Screen::list());
        assert_eq!(
            app.store.all(),
            &[Review {
                title: "Dune".into(),
                author: "Herbert".into(),
                rating: Rating::new(5).unwrap(),
                comment: "Great".into(),
            }]
        );
        assert_eq!(app.toast.message(), None);
    }

    #[test]
    fn dispatch_rejection_leaves_store_and_screen() {
        let mut app = new_app();
        submit(&mut app, ["Dune", "Herbert", "6", "Great"]);
        assert!(app.store.is_empty());
        assert!(app.screen.accepts_text());
        assert_eq!(app.toast.message(), Some("Rating must be 1 to 5"));
    }

    #[test]
    fn dispatch_fix_and_resubmit_after_rejection() {
        let mut app = new_app();
        submit(&mut app, ["Dune", "Herbert", "6", "Great"]);
        // Focus is on Comment; step back to Rating and correct it.
        dispatch(&mut app, &Action::PrevField);
        dispatch(&mut app, &Action::Backspace);
        dispatch(&mut app, &Action::Input('4'));
        dispatch(&mut app, &Action::Save);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.all()[0].rating.get(), 4);
        assert_eq!(app.screen, Screen::list());
    }

    #[test]
    fn dispatch_back_never_appends() {
        let mut app = new_app();
        dispatch(&mut app, &Action::AddReview);
        for c in "Half typed".chars() {
            dispatch(&mut app, &Action::Input(c));
        }
        dispatch(&mut app, &Action::Back);
        assert_eq!(app.screen, Screen::list());
        assert!(app.store.is_empty());
    }

    #[test]
    fn dispatch_quit_sets_flag() {
        let mut app = new_app();
        dispatch(&mut app, &Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn store_length_counts_only_successful_submissions() {
        let mut app = new_app();
        let attempts: [([&str; 4], bool); 6] = [
            (["A", "B", "3", "ok"], true),
            (["", "B", "3", "ok"], false),
            (["A", "B", "0", "ok"], false),
            (["C", "D", "5", "nice"], true),
            (["C", "D", "abc", "nice"], false),
            (["E", "F", "1", "meh"], true),
        ];
        let mut expected = 0;
        for (fields, ok) in attempts {
            submit(&mut app, fields);
            if ok {
                expected += 1;
            } else {
                dispatch(&mut app, &Action::Back);
            }
            assert_eq!(app.store.len(), expected);
        }
    }

    #[test]
    fn end_to_end_two_reviews_average_four() {
        let mut app = new_app();
        assert_eq!(format_average(&app.store), "0.00");

        submit(&mut app, ["A", "B", "3", "ok"]);
        submit(&mut app, ["C", "D", "5", "nice"]);

        assert_eq!(format_average(&app.store), "4.00");
        let titles: Vec<_> = app.store.all().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(app.screen, Screen::list());
    }
}
