//! Step and field validation
//!
//! Checks annotate the [`ProjectForm`] in place: a failing field gets an
//! inline error, a passing one has its error cleared. Step-level problems
//! that are not tied to a field (the project type group) come back as a
//! notice for the caller to surface as a transient notification.

use super::field::FieldId;
use super::form_state::ProjectForm;
use once_cell::sync::Lazy;
use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PROJECT_TYPE_MESSAGE: &str = "Please select a project type";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Fields that must be filled in before leaving the details step
pub const REQUIRED_DETAILS: [FieldId; 4] = [
    FieldId::ProjectName,
    FieldId::ClientName,
    FieldId::ClientEmail,
    FieldId::ProjectDescription,
];

/// Outcome of validating one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepCheck {
    Passed,
    Failed { notice: Option<&'static str> },
}

impl StepCheck {
    pub fn passed(self) -> bool {
        matches!(self, StepCheck::Passed)
    }
}

/// Syntactic sanity check: `local@domain.tld`, no whitespace or extra `@`.
pub fn validate_email_format(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a single step, annotating every field it checks.
///
/// Steps past the details step define no required fields.
pub fn validate_step(form: &mut ProjectForm, step: usize) -> StepCheck {
    match step {
        1 => {
            if form.project_type.is_some() {
                StepCheck::Passed
            } else {
                StepCheck::Failed {
                    notice: Some(PROJECT_TYPE_MESSAGE),
                }
            }
        }
        2 => {
            let mut valid = true;
            for id in REQUIRED_DETAILS {
                valid &= check_required(form, id);
            }
            if valid {
                StepCheck::Passed
            } else {
                StepCheck::Failed { notice: None }
            }
        }
        _ => StepCheck::Passed,
    }
}

/// Batch check for one required field. Returns whether it passed.
fn check_required(form: &mut ProjectForm, id: FieldId) -> bool {
    let field = form.field_mut(id);
    if field.is_blank() {
        field.set_error(REQUIRED_MESSAGE);
        false
    } else if id == FieldId::ClientEmail && !validate_email_format(field.as_text()) {
        field.set_error(EMAIL_MESSAGE);
        false
    } else {
        field.clear_error();
        true
    }
}

/// Real-time check run when a field loses focus.
///
/// The email field only complains about a non-empty malformed address;
/// any required field complains when left blank.
pub fn validate_on_blur(form: &mut ProjectForm, id: FieldId) {
    let field = form.field_mut(id);
    let blank = field.is_blank();

    if id == FieldId::ClientEmail && !blank && !validate_email_format(field.as_text()) {
        field.set_error(EMAIL_MESSAGE);
    } else if field.required && blank {
        field.set_error(REQUIRED_MESSAGE);
    } else {
        field.clear_error();
    }
}
