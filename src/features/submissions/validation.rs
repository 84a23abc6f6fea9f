//! Field-level gate run before a submission is forwarded.
//!
//! Rules are declared on [`SubmitSurveyDto`] with `validator` attributes; this
//! module folds the resulting `ValidationErrors` into an ordered map of field
//! to user-facing message.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use validator::{Validate, ValidationError};

use crate::features::submissions::dtos::SubmitSurveyDto;
use crate::shared::constants::{
    DETAILED_REASON_MIN_CHARS, DETAILED_REASON_TOO_SHORT_MESSAGE, INVALID_EMAIL_MESSAGE,
    NO_REASON_SELECTED_MESSAGE, OCCUPATION_MIN_CHARS, OCCUPATION_TOO_SHORT_MESSAGE,
};
use crate::shared::validation::{trimmed_len, EMAIL_REGEX};

/// Form fields that can carry a validation error, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Occupation,
    InterestReasons,
    DetailedReason,
    Email,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Occupation => "occupation",
            FormField::InterestReasons => "interest_reasons",
            FormField::DetailedReason => "detailed_reason",
            FormField::Email => "email",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "occupation" => Some(FormField::Occupation),
            "interest_reasons" => Some(FormField::InterestReasons),
            "detailed_reason" => Some(FormField::DetailedReason),
            "email" => Some(FormField::Email),
            _ => None,
        }
    }
}

/// Field name to error message. Empty means the submission may proceed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, String>);

#[allow(dead_code)]
impl FormErrors {
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }

    /// Message of the first field in display order
    pub fn first_message(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }

    pub fn into_field_map(self) -> BTreeMap<String, String> {
        self.0
            .into_iter()
            .map(|(field, message)| (field.as_str().to_string(), message))
            .collect()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field.as_str(), message))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

/// Check every field of a submission. Pure; never touches the network.
pub fn validate(form: &SubmitSurveyDto) -> FormErrors {
    let mut errors = FormErrors::default();

    if let Err(e) = form.validate() {
        for (field, field_errors) in e.field_errors() {
            let Some(field) = FormField::from_name(&field) else {
                continue;
            };
            let message = field_errors
                .first()
                .and_then(|err| err.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {}", field.as_str()));
            errors.insert(field, message);
        }
    }

    errors
}

fn too_short(message: &'static str) -> ValidationError {
    ValidationError::new("too_short").with_message(Cow::Borrowed(message))
}

pub(crate) fn validate_occupation(value: &str) -> Result<(), ValidationError> {
    if trimmed_len(value) < OCCUPATION_MIN_CHARS {
        return Err(too_short(OCCUPATION_TOO_SHORT_MESSAGE));
    }
    Ok(())
}

pub(crate) fn validate_interest_reasons(value: &[String]) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("none_selected")
            .with_message(Cow::Borrowed(NO_REASON_SELECTED_MESSAGE)));
    }
    Ok(())
}

pub(crate) fn validate_detailed_reason(value: &str) -> Result<(), ValidationError> {
    if trimmed_len(value) < DETAILED_REASON_MIN_CHARS {
        return Err(too_short(DETAILED_REASON_TOO_SHORT_MESSAGE));
    }
    Ok(())
}

/// Empty means "not supplied" and passes
pub(crate) fn validate_optional_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || EMAIL_REGEX.is_match(value) {
        return Ok(());
    }
    Err(ValidationError::new("invalid_format").with_message(Cow::Borrowed(INVALID_EMAIL_MESSAGE)))
}
