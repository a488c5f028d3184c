//! Platform-specific configuration

/// Submit shortcut display for the status bar.
/// Terminals on every platform deliver Ctrl+S, so it is not remapped on macOS.
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
