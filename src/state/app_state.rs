//! Application state definitions

use super::alert::{AlertState, AlertTimer};
use super::forms::GrievanceForm;
use std::time::Instant;

/// Where the current submission attempt is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Rejected,
    Accepted,
    Submitting,
    AuthRetry,
    Success,
    OtherFailure,
}

impl SubmissionPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Ready",
            Self::Validating => "Validating",
            Self::Rejected => "Rejected",
            Self::Accepted => "Accepted",
            Self::Submitting => "Submitting",
            Self::AuthRetry => "Refreshing session",
            Self::Success => "Registered",
            Self::OtherFailure => "Not submitted",
        }
    }

    /// Phases that always fall back to `Idle` once handled
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Success | Self::OtherFailure)
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: GrievanceForm,
    pub alert: AlertState,
    pub alert_timer: AlertTimer,
    pub phase: SubmissionPhase,
    /// Phase the last attempt finished in, shown in the status bar
    pub last_outcome: Option<SubmissionPhase>,
}

impl AppState {
    pub fn new(millis_per_char: u64) -> Self {
        Self {
            alert_timer: AlertTimer::new(millis_per_char),
            ..Default::default()
        }
    }

    /// Show an alert and (re)arm its auto-dismiss deadline
    pub fn show_alert(&mut self, alert: AlertState, now: Instant) {
        if alert.is_visible() {
            self.alert_timer.arm(&alert.message, now);
        } else {
            self.alert_timer.cancel();
        }
        self.alert = alert;
    }

    /// Manual dismissal: hide immediately and drop the pending deadline
    pub fn dismiss_alert(&mut self) {
        self.alert.clear();
        self.alert_timer.cancel();
    }

    /// Advance time-driven state; returns true if anything changed
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.alert_timer.fire_if_expired(now) {
            self.alert.clear();
            return true;
        }
        false
    }

    /// Record a phase transition
    pub fn set_phase(&mut self, phase: SubmissionPhase) {
        tracing::debug!("Submission phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        if phase.is_terminal() {
            self.last_outcome = Some(phase);
            self.phase = SubmissionPhase::Idle;
        }
    }
}
