//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (main_area, status_area) = layout::create_layout(area);

    forms::draw_grievance_form(frame, main_area, app);

    layout::draw_status_bar(frame, status_area, app);

    // Banner overlays the top of the form
    components::render_alert_banner(frame, main_area, &app.state.alert);
}
