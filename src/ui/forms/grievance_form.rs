//! Grievance form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{
    truncate_tag, Department, Form, GrievanceForm, COMPLAINT_FIELD, SUBJECT_FIELD,
};
use crate::ui::components::{centered_button_area, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SUBMIT_LABEL: &str = "Submit";

/// Draw the grievance form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(" What's bothering you? ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Subject
            Constraint::Length(4),             // Related departments
            Constraint::Min(6),                // Complaint
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .margin(1)
        .split(area);

    draw_field(
        frame,
        chunks[0],
        &form.subject,
        "What's your issue?",
        form.active_field() == SUBJECT_FIELD,
    );

    draw_department_picker(frame, chunks[1], form);

    draw_field(
        frame,
        chunks[2],
        &form.complaint,
        "Write about your complaint here...",
        form.active_field() == COMPLAINT_FIELD,
    );

    render_button(
        frame,
        centered_button_area(chunks[3], SUBMIT_LABEL),
        SUBMIT_LABEL,
        form.is_submit_active(),
        !app.is_submitting(),
    );
}

/// Draw selected department chips above the option row
fn draw_department_picker(frame: &mut Frame, area: Rect, form: &GrievanceForm) {
    let is_active = form.is_departments_active();
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let selected = form.selected_departments();
    let chips = if selected.is_empty() {
        Line::from(Span::styled("Ex: PAT", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(chip_spans(selected))
    };

    let mut options = Vec::new();
    for (idx, dept) in Department::ALL.iter().enumerate() {
        let checked = selected.iter().any(|t| t == dept.label());
        let mark = if checked { "[x]" } else { "[ ]" };
        let mut style = Style::default().fg(Color::Gray);
        if is_active && idx == form.tag_cursor {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        options.push(Span::styled(format!("{mark} {}", dept.label()), style));
        options.push(Span::raw("  "));
    }

    let block = Block::default()
        .title(" Related Departments ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(vec![chips, Line::from(options)]).block(block),
        area,
    );
}

/// Chip spans for the selected tags, labels truncated for display
fn chip_spans(tags: &[String]) -> Vec<Span<'static>> {
    let chip_style = Style::default().fg(Color::Black).bg(Color::Gray);
    let mut spans = Vec::new();
    for tag in tags {
        spans.push(Span::styled(format!(" {} ", truncate_tag(tag)), chip_style));
        spans.push(Span::raw(" "));
    }
    spans
}
