//! Ephemeral state of one survey form.

use crate::features::submissions::validation::FormErrors;

/// Errors currently shown next to fields, plus the in-flight guard
#[allow(dead_code)]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub errors: FormErrors,
    pub is_submitting: bool,
}

/// What the form should do after a submit attempt
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted; navigate to the landing page
    Redirect(String),
    /// Rejected locally; nothing was sent
    Invalid(FormErrors),
    /// Sending failed; show a blocking alert with this message
    Failed(String),
    /// A previous submit is still in flight
    Busy,
}

#[allow(dead_code)]
impl FormState {
    /// Start a submit attempt. Returns false while another one is in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_submitting {
            return false;
        }
        self.is_submitting = true;
        self.errors = FormErrors::default();
        true
    }

    /// Validation failed: show the errors and release the guard
    pub fn reject(&mut self, errors: FormErrors) {
        self.errors = errors;
        self.is_submitting = false;
    }

    /// The network round-trip finished, successfully or not
    pub fn settle(&mut self) {
        self.is_submitting = false;
    }
}
