//! Alert banner state and its auto-dismiss timer

use std::time::{Duration, Instant};

/// Default display time per message character
pub const DEFAULT_MILLIS_PER_CHAR: u64 = 100;

/// Transient banner shown above the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertState {
    /// Banner text (empty means hidden)
    pub message: String,
    /// Success styling when true, failure styling otherwise
    pub is_success: bool,
}

impl AlertState {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_success: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.message.is_empty()
    }

    pub fn clear(&mut self) {
        self.message.clear();
        self.is_success = false;
    }
}

/// One-shot deadline that clears the alert.
///
/// Arming always replaces the previous deadline, so a stale timer from an
/// earlier alert can never clear a newer one.
#[derive(Debug, Clone)]
pub struct AlertTimer {
    millis_per_char: u64,
    deadline: Option<Instant>,
}

impl AlertTimer {
    pub fn new(millis_per_char: u64) -> Self {
        Self {
            millis_per_char,
            deadline: None,
        }
    }

    /// How long a message stays on screen
    pub fn duration_for(&self, message: &str) -> Duration {
        let chars = message.chars().count() as u64;
        Duration::from_millis(chars.saturating_mul(self.millis_per_char))
    }

    /// Arm the timer for `message`, cancelling any pending deadline
    pub fn arm(&mut self, message: &str, now: Instant) {
        self.deadline = Some(now + self.duration_for(message));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true once when the deadline has passed, disarming the timer
    pub fn fire_if_expired(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for AlertTimer {
    fn default() -> Self {
        Self::new(DEFAULT_MILLIS_PER_CHAR)
    }
}
