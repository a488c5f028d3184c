//! Alert banner overlay

use crate::state::AlertState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Banner height in rows (top border + content + bottom border)
const BANNER_HEIGHT: u16 = 3;

/// Dismiss hint appended after the message
const DISMISS_HINT: &str = "  Esc ✕";

/// Compute the banner rectangle: centered horizontally, pinned to the top
pub fn banner_area(area: Rect, message: &str) -> Rect {
    let content_width = (message.chars().count() + DISMISS_HINT.chars().count()) as u16;
    let width = (content_width + 4).min(area.width); // 2 borders + 2 padding
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y,
        width,
        height: BANNER_HEIGHT.min(area.height),
    }
}

/// Render the alert banner over the top of `area`; hidden alerts draw nothing
pub fn render_alert_banner(frame: &mut Frame, area: Rect, alert: &AlertState) {
    if !alert.is_visible() {
        return;
    }

    let color = if alert.is_success {
        Color::Green
    } else {
        Color::Red
    };
    let banner = banner_area(area, &alert.message);

    frame.render_widget(Clear, banner);

    let content = Line::from(vec![
        Span::styled(
            format!(" {}", alert.message),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(DISMISS_HINT, Style::default().fg(Color::Gray)),
    ]);

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(color)),
    );
    frame.render_widget(paragraph, banner);
}
