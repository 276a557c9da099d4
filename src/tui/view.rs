//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches based on the current Screen variant. Widget-building
//! functions are pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::report::format_average;
use crate::types::{Review, ReviewStore};

use super::form::{EntryForm, Field};
use super::notice::Toast;
use super::state::{App, Screen};
use super::theme;

/// Rows taken by one review card: four text lines plus borders.
const CARD_HEIGHT: u16 = 6;

/// Rows taken by one bordered input.
const INPUT_HEIGHT: u16 = 3;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar, content, notice line, help
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // notice
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(&app.screen), chunks[0]);
    frame.render_widget(render_notice(&app.toast), chunks[2]);
    frame.render_widget(render_help(&app.screen), chunks[3]);

    let content_area = chunks[1];

    match &app.screen {
        Screen::ListView { scroll } => {
            render_list(&app.store, *scroll, frame, content_area);
        }
        Screen::EntryView(form) => {
            render_entry(form, frame, content_area);
        }
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(screen: &Screen) -> Paragraph<'static> {
    let title_text = match screen {
        Screen::ListView { .. } => "Welcome to the Best Book Review App!",
        Screen::EntryView(_) => "Add Book Review",
    };

    Paragraph::new(Line::from(Span::styled(title_text, theme::STYLE_TITLE)))
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::ListView { .. } => "[a] add review  [j/k] scroll  [q] quit",
        Screen::EntryView(_) => "[Tab] next field  [Enter] save  [Esc] back  ^C quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

fn render_notice(toast: &Toast) -> Paragraph<'_> {
    match toast.message() {
        Some(message) => Paragraph::new(Span::styled(message, theme::STYLE_WARNING)),
        None => Paragraph::new(""),
    }
}

// ============================================================================
// SCREEN: LIST
// ============================================================================

fn render_list(store: &ReviewStore, scroll: usize, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // add button
        Constraint::Length(1),
        Constraint::Length(1), // average
        Constraint::Length(1),
        Constraint::Min(0), // cards
    ])
    .split(area);

    let button = Line::from(vec![
        Span::styled("[a] ", theme::STYLE_INTERACTIVE),
        Span::styled(" Add to Book Review ", theme::STYLE_BUTTON),
    ]);
    frame.render_widget(Paragraph::new(button), chunks[0]);

    let count = store.len();
    let average = Line::from(vec![
        Span::raw("Average Rating: "),
        Span::styled(format_average(store), theme::STYLE_IMPORTANT),
        Span::styled(
            format!("   ({} review{})", count, if count == 1 { "" } else { "s" }),
            theme::STYLE_DIM,
        ),
    ]);
    frame.render_widget(Paragraph::new(average), chunks[2]);

    render_cards(store.all(), scroll, frame, chunks[4]);
}

/// Stack cards from `scroll` downward until the area runs out.
fn render_cards(reviews: &[Review], scroll: usize, frame: &mut Frame, area: Rect) {
    if reviews.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No reviews yet. Press [a] to add one.",
            theme::STYLE_DIM,
        ));
        frame.render_widget(empty, area);
        return;
    }

    let mut y = area.y;
    for review in reviews.iter().skip(scroll) {
        if y + CARD_HEIGHT > area.bottom() {
            break;
        }
        let card_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height: CARD_HEIGHT,
        };
        frame.render_widget(review_card(review), card_area);
        y += CARD_HEIGHT;
    }
}

fn review_card(review: &Review) -> Paragraph<'_> {
    let lines = vec![
        Line::from(Span::styled(review.title.as_str(), theme::STYLE_IMPORTANT)),
        Line::from(format!("Author: {}", review.author)),
        Line::from(vec![
            Span::raw("Rating: "),
            Span::styled(review.rating.to_string(), theme::STYLE_RATING),
        ]),
        Line::from(Span::styled(
            format!("Comment: {}", review.comment),
            theme::STYLE_DIM,
        )),
    ];

    Paragraph::new(lines).block(Block::bordered().border_style(theme::STYLE_BORDER))
}

// ============================================================================
// SCREEN: ENTRY
// ============================================================================

fn render_entry(form: &EntryForm, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1), // buttons
        Constraint::Min(0),
    ])
    .split(area);

    for (field, input_area) in Field::ALL.iter().zip(chunks.iter()) {
        render_input(form, *field, frame, *input_area);
    }

    let buttons = Line::from(vec![
        Span::styled(" Save ", theme::STYLE_BUTTON),
        Span::raw("  "),
        Span::styled(" Back ", theme::STYLE_BUTTON_ALT),
    ]);
    frame.render_widget(Paragraph::new(buttons), chunks[5]);
}

/// One labeled input. The focused one gets a highlighted border and
/// the terminal cursor; long text scrolls so its end stays visible.
fn render_input(form: &EntryForm, field: Field, frame: &mut Frame, area: Rect) {
    let focused = form.focus == field;
    let border_style = if focused {
        theme::STYLE_FOCUSED
    } else {
        theme::STYLE_BORDER
    };
    let block = Block::bordered().title(field.label()).border_style(border_style);
    let inner = block.inner(area);

    let value = form.value(field);
    let text_width = u16::try_from(Line::from(value).width()).unwrap_or(u16::MAX);
    let offset = text_width.saturating_sub(inner.width.saturating_sub(1));

    let input = Paragraph::new(value).block(block).scroll((0, offset));
    frame.render_widget(input, area);

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(Position::new(inner.x + text_width - offset, inner.y));
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::notice::Notifier;
    use crate::types::Rating;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn make_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(width, height);
        Terminal::new(backend).unwrap()
    }

    fn draw(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = make_terminal(width, height);
        terminal
            .draw(|frame| render(app, frame))
            .expect("render should not panic");
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    fn row_of(rows: &[String], needle: &str) -> usize {
        rows.iter()
            .position(|row| row.contains(needle))
            .unwrap_or_else(|| panic!("{:?} not rendered", needle))
    }

    fn app_with(reviews: &[(&str, &str, i32, &str)]) -> App {
        let mut app = App::new(Duration::from_secs(60));
        for &(title, author, rating, comment) in reviews {
            app.store.append(Review {
                title: title.into(),
                author: author.into(),
                rating: Rating::new(rating).unwrap(),
                comment: comment.into(),
            });
        }
        app
    }

    #[test]
    fn empty_list_shows_title_button_and_zero_average() {
        let rows = draw(&app_with(&[]), 60, 20);
        assert!(contains(&rows, "Welcome to the Best Book Review App!"));
        assert!(contains(&rows, "Add to Book Review"));
        assert!(contains(&rows, "Average Rating: 0.00"));
        assert!(contains(&rows, "No reviews yet"));
    }

    #[test]
    fn list_shows_cards_in_insertion_order() {
        let app = app_with(&[("Alpha", "Bea", 3, "ok"), ("Gamma", "Dee", 5, "nice")]);
        let rows = draw(&app, 60, 24);
        assert!(contains(&rows, "Average Rating: 4.00"));
        assert!(contains(&rows, "Author: Bea"));
        assert!(contains(&rows, "Rating: 5"));
        assert!(contains(&rows, "Comment: nice"));
        assert!(row_of(&rows, "Alpha") < row_of(&rows, "Gamma"));
    }

    #[test]
    fn list_scroll_hides_earlier_cards() {
        let mut app = app_with(&[("Alpha", "Bea", 3, "ok"), ("Gamma", "Dee", 5, "nice")]);
        app.screen = Screen::ListView { scroll: 1 };
        let rows = draw(&app, 60, 24);
        assert!(!contains(&rows, "Alpha"));
        assert!(contains(&rows, "Gamma"));
    }

    #[test]
    fn list_renders_in_tiny_terminal() {
        let app = app_with(&[("Alpha", "Bea", 3, "ok")]);
        draw(&app, 10, 4);
    }

    #[test]
    fn entry_shows_labels_and_buttons() {
        let mut app = app_with(&[]);
        app.screen = Screen::entry();
        let rows = draw(&app, 60, 24);
        assert!(contains(&rows, "Add Book Review"));
        for field in Field::ALL {
            assert!(contains(&rows, field.label()), "missing {}", field.label());
        }
        assert!(contains(&rows, " Save "));
        assert!(contains(&rows, " Back "));
    }

    #[test]
    fn entry_shows_typed_text() {
        let mut app = app_with(&[]);
        app.screen = Screen::EntryView(EntryForm {
            title: "Dune".into(),
            rating: "5".into(),
            ..Default::default()
        });
        let rows = draw(&app, 60, 24);
        assert!(contains(&rows, "Dune"));
    }

    #[test]
    fn long_input_scrolls_to_keep_end_visible() {
        let mut app = app_with(&[]);
        let long = format!("{}END", "x".repeat(80));
        app.screen = Screen::EntryView(EntryForm {
            comment: long,
            focus: Field::Comment,
            ..Default::default()
        });
        let rows = draw(&app, 40, 24);
        assert!(contains(&rows, "END"));
    }

    #[test]
    fn notice_is_rendered() {
        let mut app = app_with(&[]);
        app.screen = Screen::entry();
        app.toast.notify("Fill in all fields");
        let rows = draw(&app, 60, 24);
        assert!(contains(&rows, "Fill in all fields"));
    }
}
