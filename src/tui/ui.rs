//! UI rendering for the workout player.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::session::{format_hhmmss, Phase};
use crate::tui::app::Player;

/// Render the player UI.
pub fn render(frame: &mut Frame<'_>, player: &Player) {
    // Layout: header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, player, chunks[0]);
    render_body(frame, player, chunks[1]);
    render_status_bar(frame, player, chunks[2]);

    if player.confirming_exit {
        render_exit_confirm(frame, chunks[1]);
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, player: &Player, area: Rect) {
    let engine = player.engine();

    let title = match engine.phase() {
        Phase::Completed => " Workout ".to_string(),
        _ => format!(
            " Workout — step {} of {} ",
            player.step_number(),
            player.steps_total()
        ),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the body for the current phase.
fn render_body(frame: &mut Frame<'_>, player: &Player, area: Rect) {
    let engine = player.engine();

    let mut lines: Vec<Line<'_>> = vec![Line::from("")];

    match engine.phase() {
        Phase::Exercise => {
            let title = engine
                .current_step()
                .map_or_else(String::new, |step| step.title());
            lines.push(Line::from(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));

            if engine.countdown_active() || engine.seconds_remaining() > 0 {
                lines.push(clock_line(engine.seconds_remaining()));
            } else if let Some(step) = engine.current_step() {
                let reps = step
                    .reps
                    .map_or_else(|| "--".to_string(), |r| r.to_string());
                let time = step
                    .time_minutes
                    .map_or_else(|| "--".to_string(), |t| format!("{t} min"));
                lines.push(Line::from(format!(
                    "Reps: {}    Sets: {}    Time: {}",
                    reps, step.total_sets, time
                )));
            }
        }
        Phase::Rest => {
            lines.push(Line::from(Span::styled(
                "💤 Rest Period",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(clock_line(engine.seconds_remaining()));
        }
        Phase::Completed => {
            lines.push(Line::from(Span::styled(
                "🎉 Congratulations! You completed your workout! 💪",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        Phase::Idle => {}
    }

    if engine.is_paused() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "⏸ PAUSED",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(body, area);
}

/// A big-ish countdown clock line.
fn clock_line(seconds: u32) -> Line<'static> {
    Line::from(Span::styled(
        format_hhmmss(seconds),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, player: &Player, area: Rect) {
    let text = player.status.clone().unwrap_or_else(|| {
        "space:pause | n:next | r:restart | q:quit | ?:help".to_string()
    });

    let status = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Render the exit confirmation prompt over the body.
fn render_exit_confirm(frame: &mut Frame<'_>, area: Rect) {
    let width = 44.min(area.width);
    let height = 3.min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let prompt = Paragraph::new("Exit the workout? (y/n)")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(prompt, popup);
}
