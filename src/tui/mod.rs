//! Terminal workout player.
//!
//! Interactive full-screen player that drives the session engine with a
//! one-second wall clock and maps keys to session operations. Built with
//! ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{Player, PlayerOutcome};

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::RepflowError;
use crate::session::WorkoutStep;

/// Run the workout player over the given queue.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or the player
/// loop fails.
pub fn run(queue: Vec<WorkoutStep>, config: &Config) -> Result<PlayerOutcome, RepflowError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| RepflowError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| RepflowError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| RepflowError::Terminal(format!("Failed to create terminal: {e}")))?;

    let result = run_player(&mut terminal, queue, config);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main player loop.
fn run_player<B: Backend>(
    terminal: &mut Terminal<B>,
    queue: Vec<WorkoutStep>,
    config: &Config,
) -> Result<PlayerOutcome, RepflowError> {
    let mut player = Player::new(queue, config)?;

    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, &player))
            .map_err(|e| RepflowError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(&player)? {
            match action {
                event::Action::TogglePause => player.toggle_pause(),
                event::Action::Advance => player.advance()?,
                event::Action::Restart => player.restart()?,
                event::Action::RequestExit => player.request_exit(),
                event::Action::ConfirmExit => player.confirm_exit(),
                event::Action::CancelExit => player.cancel_exit(),
                event::Action::Help => player.show_help(),
            }
        }

        // Advance the one-second clock
        player.on_clock()?;

        if player.should_quit {
            break;
        }
    }

    Ok(player.outcome())
}
