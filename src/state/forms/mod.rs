//! Form domain layer
//!
//! Type-safe field values plus the grievance form with its validator.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{
    Form, GrievanceDraft, GrievanceForm, ValidationOutcome, COMPLAINT_FIELD, DEPARTMENTS_FIELD,
    SUBJECT_FIELD, SUBMIT_BUTTON,
};

#[cfg(test)]
pub use form_state::FILL_ALL_FIELDS;
