//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::PomoError;
use crate::tui::app::App;

/// Key help shown in the status bar.
pub const HELP: &str = "s:start | p:pause | r:reset | +/-:duration | c:clear streak | q:quit";

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or resume the timer.
    Start,
    /// Pause the timer.
    Pause,
    /// Reset the current mode.
    Reset,
    /// Lengthen the current mode by a minute.
    Increase,
    /// Shorten the current mode by a minute.
    Decrease,
    /// Clear the streak counter.
    ClearStreak,
}

/// Handle terminal events, blocking at most `timeout`.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<Option<Action>, PomoError> {
    if !event::poll(timeout).map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))? {
        return Ok(None);
    }

    let Event::Key(key) =
        event::read().map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('s' | ' ') | KeyCode::Enter => Some(Action::Start),
        KeyCode::Char('p') => Some(Action::Pause),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('+' | '=') | KeyCode::Up => Some(Action::Increase),
        KeyCode::Char('-') | KeyCode::Down => Some(Action::Decrease),
        KeyCode::Char('c') => Some(Action::ClearStreak),
        KeyCode::Char('?') => {
            app.status = Some(HELP.to_string());
            None
        }
        _ => None,
    };

    Ok(action)
}
