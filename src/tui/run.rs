//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Single thread: the loop renders, polls for one terminal event with a
//! short timeout, and applies it. The timeout tick expires notices.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use crate::types::{ReviewStore, SessionConfig};

use super::state::{Action, App, Screen};
use super::update::dispatch;
use super::view::render;

/// How long to wait for input before re-checking notice expiry.
const TICK: Duration = Duration::from_millis(100);

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// The form captures printable keys as text, so the mapping depends
/// on which screen is active. Returns None for unmapped keys.
pub fn map_key(key: KeyEvent, screen: &Screen) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C always quits
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if screen.accepts_text() {
        map_entry_key(key, ctrl)
    } else {
        map_list_key(key)
    }
}

fn map_list_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('a') | KeyCode::Enter => Some(Action::AddReview),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollDown),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

fn map_entry_key(key: KeyEvent, ctrl: bool) -> Option<Action> {
    match key.code {
        KeyCode::Char('s') if ctrl => Some(Action::Save),
        KeyCode::Enter => Some(Action::Save),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Tab | KeyCode::Down => Some(Action::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::PrevField),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) if !ctrl => Some(Action::Input(c)),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI until the user quits, returning the session's reviews.
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// even when the loop fails.
pub fn run(config: &SessionConfig) -> io::Result<ReviewStore> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(config.notice_duration);

    info!("session started");
    let result = event_loop(&mut terminal, &mut app);
    restore_terminal()?;
    result?;
    info!(reviews = app.store.len(), "session ended");

    Ok(app.store)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Ignore release/repeat reports on terminals that send them
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = map_key(key, &app.screen) {
                    dispatch(app, &action);
                }
            }
            // Resize and other events just trigger a redraw
        }

        app.toast.expire(Instant::now());
    }
}

// ============================================================================
// TESTS
// ============================================================================
