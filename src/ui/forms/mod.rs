//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `grievance_form`: The grievance submission form

mod field_renderer;
mod grievance_form;

pub use grievance_form::draw as draw_grievance_form;
