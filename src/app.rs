//! Application state and core logic

use crate::api::{
    FileSession, GrievanceClient, HttpTokenRefresher, SubmissionController, SubmitOutcome,
    REGISTERED_MESSAGE,
};
use crate::config::TuiConfig;
use crate::state::{
    AlertState, AppState, Form, SubmissionPhase, ValidationOutcome, COMPLAINT_FIELD,
    DEPARTMENTS_FIELD, SUBJECT_FIELD, SUBMIT_BUTTON,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver};

/// Messages from the background submission task
enum SubmitEvent {
    Phase(SubmissionPhase),
    Finished(SubmitOutcome),
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Sends validated grievances to the API
    controller: Arc<SubmissionController>,
    /// Progress of the submission in flight
    in_flight: Option<UnboundedReceiver<SubmitEvent>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App wired to the configured API and session file
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let session_path = match &config.session_file {
            Some(path) => path.clone(),
            None => FileSession::default_path()?,
        };
        let session = Arc::new(FileSession::new(session_path));
        let timeout = config.request_timeout();

        let api = GrievanceClient::new(&config.api_base_url(), timeout)?;
        tracing::info!("Submitting grievances to {}", api.endpoint());
        let tokens = HttpTokenRefresher::new(config.refresh_url(), session.clone(), timeout)?;

        let controller = SubmissionController::new(Box::new(api), Box::new(tokens), session);
        Ok(Self::with_controller(
            controller,
            config.alert_millis_per_char(),
        ))
    }

    /// Create an App around an existing controller
    pub fn with_controller(controller: SubmissionController, millis_per_char: u64) -> Self {
        Self {
            state: AppState::new(millis_per_char),
            controller: Arc::new(controller),
            in_flight: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a grievance is currently being sent
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Advance timers and apply submission progress; returns true if a
    /// redraw is needed
    pub fn tick(&mut self) -> bool {
        let expired = self.state.tick(Instant::now());
        let progressed = self.poll_submission();
        expired || progressed
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.quit = true,
                KeyCode::Char('s') => self.submit(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.state.dismiss_alert(),
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            _ => match self.state.form.active_field() {
                SUBJECT_FIELD | COMPLAINT_FIELD => self.handle_text_key(key),
                DEPARTMENTS_FIELD => self.handle_departments_key(key),
                SUBMIT_BUTTON => {
                    if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.submit();
                    }
                }
                _ => {}
            },
        }
        Ok(())
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        let is_multiline = self.state.form.complaint.is_multiline
            && self.state.form.active_field() == COMPLAINT_FIELD;
        let Some(field) = self.state.form.get_active_field_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => field.push_char(c),
            KeyCode::Backspace => field.pop_char(),
            // Enter in the complaint adds a newline, elsewhere it advances
            KeyCode::Enter if is_multiline => field.push_char('\n'),
            KeyCode::Enter => self.state.form.next_field(),
            _ => {}
        }
    }

    fn handle_departments_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => form.prev_department(),
            KeyCode::Right | KeyCode::Char('l') => form.next_department(),
            KeyCode::Char(' ') | KeyCode::Enter => form.toggle_highlighted_department(),
            KeyCode::Backspace => form.related_departments.pop_char(),
            _ => {}
        }
    }

    /// Validate the form and, on the rising edge of validity, start sending it
    pub fn submit(&mut self) {
        if self.is_submitting() {
            tracing::debug!("Submission already in flight, ignoring");
            return;
        }
        self.state.set_phase(SubmissionPhase::Validating);

        match self.state.form.validate() {
            ValidationOutcome::Rejected(alert) => {
                self.state.show_alert(alert, Instant::now());
                self.state.set_phase(SubmissionPhase::Rejected);
            }
            ValidationOutcome::Unchanged => {
                tracing::debug!("Form already valid, not resubmitting");
                self.state.set_phase(SubmissionPhase::Idle);
            }
            ValidationOutcome::Accepted => {
                self.state.set_phase(SubmissionPhase::Accepted);
                self.send_grievance();
            }
        }
    }

    /// Run the controller on a background task, streaming its phases back
    fn send_grievance(&mut self) {
        let draft = self.state.form.draft();
        let controller = Arc::clone(&self.controller);
        let (events, receiver) = mpsc::unbounded_channel();
        self.in_flight = Some(receiver);

        tokio::spawn(async move {
            let progress = events.clone();
            let outcome = controller
                .submit(&draft, move |phase| {
                    let _ = progress.send(SubmitEvent::Phase(phase));
                })
                .await;
            let _ = events.send(SubmitEvent::Finished(outcome));
        });
    }

    /// Apply queued submission events; returns true if any arrived
    fn poll_submission(&mut self) -> bool {
        let Some(events) = self.in_flight.as_mut() else {
            return false;
        };

        let mut changed = false;
        loop {
            match events.try_recv() {
                Ok(SubmitEvent::Phase(phase)) => {
                    self.state.set_phase(phase);
                    changed = true;
                }
                Ok(SubmitEvent::Finished(outcome)) => {
                    self.in_flight = None;
                    self.finish_submission(outcome);
                    return true;
                }
                Err(TryRecvError::Empty) => return changed,
                Err(TryRecvError::Disconnected) => {
                    tracing::error!("Submission task stopped without an outcome");
                    self.in_flight = None;
                    self.fail_submission();
                    return true;
                }
            }
        }
    }

    fn finish_submission(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Registered => {
                self.state
                    .show_alert(AlertState::success(REGISTERED_MESSAGE), Instant::now());
                self.state.form.reset();
                self.state.set_phase(SubmissionPhase::Success);
            }
            // Failures stay out of the banner; the log has the details
            SubmitOutcome::Failed(err) => {
                tracing::debug!("Submission failed: {err}");
                self.fail_submission();
            }
            SubmitOutcome::Unauthorised { refreshed } => {
                tracing::debug!("Submission unauthorised (token refreshed: {refreshed})");
                self.fail_submission();
            }
            SubmitOutcome::EmptyReply => {
                tracing::debug!("Submission ended with an empty reply");
                self.fail_submission();
            }
        }
    }

    fn fail_submission(&mut self) {
        self.state.form.mark_invalid();
        self.state.set_phase(SubmissionPhase::OtherFailure);
    }
}
