//! Event handling for the workout player.

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::RepflowError;
use crate::tui::app::Player;

/// Action to take after handling an event.
pub enum Action {
    /// Pause or resume the countdown.
    TogglePause,
    /// Move on to the next step (via rest).
    Advance,
    /// Restart the current exercise or rest.
    Restart,
    /// Ask for exit confirmation.
    RequestExit,
    /// Exit confirmed.
    ConfirmExit,
    /// Exit canceled.
    CancelExit,
    /// Show key help.
    Help,
}

/// Handle terminal events.
///
/// Blocks up to the player's poll timeout so the one-second clock stays
/// responsive. Returns an action to take, or None.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(player: &Player) -> Result<Option<Action>, RepflowError> {
    if !event::poll(player.poll_timeout())
        .map_err(|e| RepflowError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let Event::Key(key) =
        event::read().map_err(|e| RepflowError::Terminal(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    // Handle Ctrl+C: immediate exit, no confirmation
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::ConfirmExit));
    }

    // Exit confirmation prompt swallows everything else
    if player.confirming_exit {
        return Ok(match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Action::ConfirmExit),
            KeyCode::Char('n' | 'q') | KeyCode::Esc => Some(Action::CancelExit),
            _ => None,
        });
    }

    Ok(match key.code {
        KeyCode::Char(' ') => Some(Action::TogglePause),
        KeyCode::Char('n') | KeyCode::Right => Some(Action::Advance),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::RequestExit),
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    })
}
