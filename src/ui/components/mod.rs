//! Reusable UI components

mod alert_banner;
mod button;

pub use alert_banner::render_alert_banner;
pub use button::{centered_button_area, render_button, BUTTON_HEIGHT};
