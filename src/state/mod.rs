//! Application state module

mod alert;
mod app_state;
mod department;
mod forms;

pub use alert::*;
pub use app_state::*;
pub use department::*;
pub use forms::*;
