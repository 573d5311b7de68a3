//! Submission lifecycle and the intended backend payload

use super::forms::{FieldId, ProjectForm};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Simulated network latency before the success view appears
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Editing,
    /// Submit control disabled until the delay elapses
    Submitting { started_at: Instant },
    /// Terminal: the form has been swapped for the success view
    Succeeded,
}

impl SubmissionPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionPhase::Submitting { .. })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, SubmissionPhase::Succeeded)
    }

    /// Label for the submit control
    pub fn submit_label(&self) -> &'static str {
        match self {
            SubmissionPhase::Submitting { .. } => "⟳ Submitting...",
            _ => "Submit Project",
        }
    }
}

/// Why a submit attempt was blocked. Display text is user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please fill in all required fields correctly")]
    StepInvalid { step: usize },

    #[error("Please agree to the terms and conditions")]
    TermsNotAccepted,

    #[error("Submission already in progress")]
    AlreadySubmitting,

    #[error("Project already submitted")]
    Finished,
}

impl SubmitError {
    /// Guard errors are silent; only input problems are shown to the user
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            SubmitError::StepInvalid { .. } | SubmitError::TermsNotAccepted
        )
    }
}

/// Flat record a future backend integration would receive as the JSON body
/// of `POST /api/submit-project`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSubmission {
    pub project_type: Option<String>,
    pub project_name: String,
    pub client_name: String,
    pub client_email: String,
    pub company_name: String,
    pub phone_number: String,
    pub project_description: String,
    pub timeline: String,
    pub budget: String,
    pub additional_info: String,
    pub how_found: String,
    /// ISO-8601 timestamp, millisecond precision, `Z` suffix
    pub submitted_at: String,
}

impl ProjectSubmission {
    /// Collect the current form values
    pub fn collect(form: &ProjectForm, submitted_at: DateTime<Utc>) -> Self {
        let value = |id: FieldId| form.value(id).to_string();
        Self {
            project_type: form.project_type.map(|t| t.value().to_string()),
            project_name: value(FieldId::ProjectName),
            client_name: value(FieldId::ClientName),
            client_email: value(FieldId::ClientEmail),
            company_name: value(FieldId::CompanyName),
            phone_number: value(FieldId::PhoneNumber),
            project_description: value(FieldId::ProjectDescription),
            timeline: value(FieldId::Timeline),
            budget: value(FieldId::Budget),
            additional_info: value(FieldId::AdditionalInfo),
            how_found: value(FieldId::HowFound),
            submitted_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::ProjectType;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_phase_is_editing() {
        let phase = SubmissionPhase::default();
        assert_eq!(phase, SubmissionPhase::Editing);
        assert!(!phase.is_submitting());
        assert!(!phase.is_finished());
        assert_eq!(phase.submit_label(), "Submit Project");
    }

    #[test]
    fn test_submitting_label() {
        let phase = SubmissionPhase::Submitting {
            started_at: Instant::now(),
        };
        assert!(phase.submit_label().contains("Submitting"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SubmitError::StepInvalid { step: 2 }.to_string(),
            "Please fill in all required fields correctly"
        );
        assert_eq!(
            SubmitError::TermsNotAccepted.to_string(),
            "Please agree to the terms and conditions"
        );
        assert!(!SubmitError::AlreadySubmitting.is_user_facing());
        assert!(!SubmitError::Finished.is_user_facing());
    }

    #[test]
    fn test_payload_shape() {
        let mut form = ProjectForm::new();
        form.select_project_type(ProjectType::MobileApp);
        form.field_mut(FieldId::ProjectName).set_text("Atlas");
        form.field_mut(FieldId::ClientEmail).set_text("ops@atlas.io");
        form.field_mut(FieldId::Budget).select_next();

        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 30, 0).unwrap();
        let payload = ProjectSubmission::collect(&form, at);
        let json: serde_json::Value =
            serde_json::from_str(&payload.to_json().unwrap()).unwrap();

        assert_eq!(json["projectType"], "mobile-app");
        assert_eq!(json["projectName"], "Atlas");
        assert_eq!(json["clientEmail"], "ops@atlas.io");
        assert_eq!(json["budget"], "Under $5k");
        assert_eq!(json["timeline"], "");
        assert_eq!(json["submittedAt"], "2026-03-01T12:30:00.000Z");

        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 12);
        assert!(json.get("howFound").is_some());
        assert!(json.get("additionalInfo").is_some());
    }

    #[test]
    fn test_missing_type_serializes_as_null() {
        let payload = ProjectSubmission::collect(&ProjectForm::new(), Utc::now());
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["projectType"].is_null());
    }
}
