//! UI rendering for the TUI.

use chrono::Duration;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::timer::{format_duration, format_mmss, status_label, Mode};
use crate::tui::app::App;
use crate::tui::event::HELP;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Countdown
            Constraint::Length(3), // Progress
            Constraint::Length(4), // Stats
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_stats(frame, app, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

const fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Work => Color::Red,
        Mode::ShortBreak => Color::Green,
        Mode::LongBreak => Color::Blue,
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mode = app.timer.mode();
    let title = format!(" {mode}  ·  {} ", status_label(mode, app.timer.is_running()));

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(mode_color(mode))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(mode_color(mode))),
        );

    frame.render_widget(header, area);
}

/// Render the remaining time.
fn render_countdown(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let countdown = Paragraph::new(format_mmss(app.timer.remaining_seconds()))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(countdown, area);
}

/// Render the progress gauge.
fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let ratio = app.timer.elapsed_fraction().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(mode_color(app.timer.mode())))
        .ratio(ratio);

    frame.render_widget(gauge, area);
}

/// Render counters and configured durations.
#[allow(clippy::cast_possible_wrap)]
fn render_stats(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.timer.state();
    let config = app.timer.config();

    let lines = vec![
        Line::from(vec![
            Span::styled("Completed ", Style::default().fg(Color::DarkGray)),
            Span::raw(state.completed_work_sessions.to_string()),
            Span::styled("   Streak ", Style::default().fg(Color::DarkGray)),
            Span::raw(state.current_streak.to_string()),
            Span::styled("   Focused ", Style::default().fg(Color::DarkGray)),
            Span::raw(format_duration(Duration::seconds(
                state.focused_seconds as i64,
            ))),
        ]),
        Line::from(Span::styled(
            format!(
                "Work {}m · Short {}m · Long {}m · Long break every {}",
                config.work_minutes,
                config.short_break_minutes,
                config.long_break_minutes,
                config.long_break_interval
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let stats = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));

    frame.render_widget(stats, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerConfig;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_idle_timer() {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new(TimerConfig::default());
        app.reset();

        terminal.draw(|frame| render(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("25:00"));
        assert!(text.contains("Ready"));
        assert!(text.contains("Work"));
    }
}
