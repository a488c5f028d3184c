//! Layout components (form area, status bar)

use crate::app::App;
use crate::state::{Form, SubmissionPhase, DEPARTMENTS_FIELD, SUBMIT_BUTTON};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into main content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Submission phase indicator
    let (dot, color) = match app.state.last_outcome {
        Some(SubmissionPhase::Success) => (" ● ", Color::Green),
        Some(SubmissionPhase::OtherFailure) => (" ● ", Color::Red),
        Some(SubmissionPhase::Rejected) => (" ● ", Color::Yellow),
        _ => (" ○ ", Color::Gray),
    };
    spans.push(Span::styled(dot, Style::default().fg(color)));

    let phase = match (app.state.phase, app.state.last_outcome) {
        (SubmissionPhase::Idle, Some(outcome)) => outcome.label(),
        (phase, _) => phase.label(),
    };
    spans.push(Span::styled(
        format!("{phase}  "),
        Style::default().fg(Color::White),
    ));

    let hints = get_field_hints(app.state.form.active_field());
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the focused field
fn get_field_hints(active_field: usize) -> String {
    let common = format!("Tab:next  {}:submit  Esc:dismiss", crate::platform::SUBMIT_SHORTCUT);
    match active_field {
        DEPARTMENTS_FIELD => format!("←/→:choose  Space:toggle  Bksp:remove  {common}"),
        SUBMIT_BUTTON => format!("Enter:submit  {common}"),
        _ => common,
    }
}
