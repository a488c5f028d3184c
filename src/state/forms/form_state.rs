//! Grievance form state, navigation and validation

use super::field::FormField;
use crate::state::alert::AlertState;
use crate::state::department::{Department, ANY_DEPARTMENT};

/// Alert shown when a required field is missing
pub const FILL_ALL_FIELDS: &str = "Please fill all the fields";

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
}

/// Result of running the validator over the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Accepted and `is_valid` rose from false to true: submit now
    Accepted,
    /// Accepted, but the form was already valid so nothing new fires
    Unchanged,
    /// Rejected with the alert to display
    Rejected(AlertState),
}

/// Snapshot of the user-entered grievance, taken after validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrievanceDraft {
    pub subject: String,
    pub complaint: String,
    pub related_departments: Vec<String>,
}

// Field indices, in on-screen order
pub const SUBJECT_FIELD: usize = 0;
pub const DEPARTMENTS_FIELD: usize = 1;
pub const COMPLAINT_FIELD: usize = 2;
pub const SUBMIT_BUTTON: usize = 3;

/// The grievance submission form
#[derive(Debug, Clone)]
pub struct GrievanceForm {
    pub subject: FormField,
    pub related_departments: FormField,
    pub complaint: FormField,
    pub active_field_index: usize,
    /// Highlighted entry in the department picker
    pub tag_cursor: usize,
    is_valid: bool,
}

impl GrievanceForm {
    pub fn new() -> Self {
        Self {
            subject: FormField::text("subject", "Subject", false),
            related_departments: FormField::tags("related_departments", "Related Departments"),
            complaint: FormField::text("complaint", "Describe your Issue", true),
            active_field_index: SUBJECT_FIELD,
            tag_cursor: 0,
            is_valid: false,
        }
    }

    #[cfg(test)]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns true if the submit button is focused
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON
    }

    pub fn is_departments_active(&self) -> bool {
        self.active_field_index == DEPARTMENTS_FIELD
    }

    pub fn selected_departments(&self) -> &[String] {
        self.related_departments.as_tags()
    }

    /// Department under the picker cursor
    pub fn highlighted_department(&self) -> Department {
        Department::ALL[self.tag_cursor % Department::ALL.len()]
    }

    /// Move the picker cursor right (wraps around)
    pub fn next_department(&mut self) {
        self.tag_cursor = (self.tag_cursor + 1) % Department::ALL.len();
    }

    /// Move the picker cursor left (wraps around)
    pub fn prev_department(&mut self) {
        if self.tag_cursor == 0 {
            self.tag_cursor = Department::ALL.len() - 1;
        } else {
            self.tag_cursor -= 1;
        }
    }

    /// Select the highlighted department, or deselect it if already chosen.
    ///
    /// Choosing a real department drops the "any" placeholder left behind by
    /// an earlier submission attempt.
    pub fn toggle_highlighted_department(&mut self) {
        let label = self.highlighted_department().label();
        if let Some(tags) = self.related_departments.tags_mut() {
            if let Some(pos) = tags.iter().position(|t| t == label) {
                tags.remove(pos);
            } else {
                tags.retain(|t| t != ANY_DEPARTMENT);
                tags.push(label.to_string());
            }
        }
    }

    /// Run the validator.
    ///
    /// On acceptance an empty department list becomes `["any"]` and
    /// `is_valid` is raised. Only the false -> true edge reports `Accepted`.
    pub fn validate(&mut self) -> ValidationOutcome {
        if let Some(missing) = [&self.subject, &self.complaint]
            .into_iter()
            .find(|field| field.is_empty())
        {
            tracing::debug!("Validation rejected: {} is empty", missing.name);
            return ValidationOutcome::Rejected(AlertState::failure(FILL_ALL_FIELDS));
        }

        if let Some(tags) = self.related_departments.tags_mut() {
            if tags.is_empty() {
                tags.push(ANY_DEPARTMENT.to_string());
            }
        }

        if self.is_valid {
            ValidationOutcome::Unchanged
        } else {
            self.is_valid = true;
            ValidationOutcome::Accepted
        }
    }

    /// Lower the valid flag without touching field contents
    pub fn mark_invalid(&mut self) {
        self.is_valid = false;
    }

    /// Snapshot the current values for submission
    pub fn draft(&self) -> GrievanceDraft {
        GrievanceDraft {
            subject: self.subject.as_text().to_string(),
            complaint: self.complaint.as_text().to_string(),
            related_departments: self.related_departments.as_tags().to_vec(),
        }
    }

    /// Clear every field and lower the valid flag
    pub fn reset(&mut self) {
        self.subject.clear();
        self.complaint.clear();
        self.related_departments.clear();
        self.is_valid = false;
        self.active_field_index = SUBJECT_FIELD;
        self.tag_cursor = 0;
    }
}

impl Default for GrievanceForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for GrievanceForm {
    fn field_count(&self) -> usize {
        4 // subject, departments, complaint, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            SUBJECT_FIELD => Some(&mut self.subject),
            DEPARTMENTS_FIELD => Some(&mut self.related_departments),
            COMPLAINT_FIELD => Some(&mut self.complaint),
            _ => None,
        }
    }
}
