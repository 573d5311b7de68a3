//! Form session: the step controller and submission flow
//!
//! A [`FormSession`] owns every piece of form state. All transitions go
//! through its methods; the front end only reads it back to render.

use super::forms::validator::{self, StepCheck};
use super::forms::{FieldId, ProjectForm, ProjectType};
use super::notification::NotificationQueue;
use super::staging::{parse_drop_payload, FileStager};
use super::submission::{ProjectSubmission, SubmissionPhase, SubmitError, DEFAULT_SUBMIT_DELAY};
use chrono::Utc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Number of steps in the form
pub const TOTAL_STEPS: usize = 3;

/// Static description of one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    pub number: usize,
    pub id: &'static str,
    pub title: &'static str,
    pub fields: &'static [FieldId],
}

pub static STEPS: [StepDefinition; TOTAL_STEPS] = [
    StepDefinition {
        number: 1,
        id: "step1",
        title: "Project Type",
        fields: &[],
    },
    StepDefinition {
        number: 2,
        id: "step2",
        title: "Project Details",
        fields: &[
            FieldId::ProjectName,
            FieldId::ClientName,
            FieldId::ClientEmail,
            FieldId::CompanyName,
            FieldId::PhoneNumber,
            FieldId::ProjectDescription,
        ],
    },
    StepDefinition {
        number: 3,
        id: "step3",
        title: "Final Details",
        fields: &[
            FieldId::Timeline,
            FieldId::Budget,
            FieldId::AdditionalInfo,
            FieldId::HowFound,
        ],
    },
];

/// Visual state of a step indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Upcoming,
    Active,
    Completed,
}

/// Timings a session is created with
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub submit_delay: Duration,
    pub notification_ttl: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            submit_delay: DEFAULT_SUBMIT_DELAY,
            notification_ttl: super::notification::DEFAULT_TTL,
        }
    }
}

/// The whole form: current step, field values, staged files,
/// notifications and submission phase.
#[derive(Debug)]
pub struct FormSession {
    current_step: usize,
    pub form: ProjectForm,
    pub stager: FileStager,
    pub notifications: NotificationQueue,
    phase: SubmissionPhase,
    submit_delay: Duration,
    /// Set by every step change; the front end scrolls to the top and
    /// consumes it with [`FormSession::take_scroll_request`].
    scroll_requested: bool,
}

impl FormSession {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            current_step: 1,
            form: ProjectForm::new(),
            stager: FileStager::new(),
            notifications: NotificationQueue::new(options.notification_ttl),
            phase: SubmissionPhase::Editing,
            submit_delay: options.submit_delay,
            scroll_requested: false,
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn step(&self) -> &'static StepDefinition {
        &STEPS[self.current_step - 1]
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Whether step `n`'s view is the visible one
    pub fn is_step_active(&self, n: usize) -> bool {
        n == self.current_step
    }

    pub fn indicator_state(&self, n: usize) -> IndicatorState {
        use std::cmp::Ordering;
        match n.cmp(&self.current_step) {
            Ordering::Less => IndicatorState::Completed,
            Ordering::Equal => IndicatorState::Active,
            Ordering::Greater => IndicatorState::Upcoming,
        }
    }

    pub fn indicators(&self) -> impl Iterator<Item = (&'static StepDefinition, IndicatorState)> + '_ {
        STEPS.iter().map(|s| (s, self.indicator_state(s.number)))
    }

    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_requested)
    }

    // Step controller

    /// Unconditional transition. Targets outside `1..=TOTAL_STEPS` are
    /// clamped into range.
    pub fn go_to_step(&mut self, target: usize) {
        if self.is_finished() {
            return;
        }
        let target = target.clamp(1, TOTAL_STEPS);
        if target != self.current_step {
            tracing::debug!(from = self.current_step, to = target, "Step change");
        }
        self.current_step = target;
        self.scroll_requested = true;
    }

    /// Advance to `target` only if the current step validates.
    pub fn next_step(&mut self, target: usize, now: Instant) -> bool {
        if self.is_finished() || !self.validate_step(self.current_step, now) {
            return false;
        }
        self.go_to_step(target);
        true
    }

    /// Backward navigation is never blocked by validation.
    pub fn prev_step(&mut self, target: usize) {
        self.go_to_step(target);
    }

    /// Indicator click: only completed or earlier steps are reachable.
    pub fn click_indicator(&mut self, n: usize) -> bool {
        if self.is_finished() {
            return false;
        }
        if n < self.current_step || self.indicator_state(n) == IndicatorState::Completed {
            self.go_to_step(n);
            true
        } else {
            false
        }
    }

    // Validation

    /// Validate one step, surfacing its notice (if any) as a notification.
    pub fn validate_step(&mut self, step: usize, now: Instant) -> bool {
        match validator::validate_step(&mut self.form, step) {
            StepCheck::Passed => true,
            StepCheck::Failed { notice } => {
                if let Some(message) = notice {
                    self.notifications.push_error(message, now);
                }
                false
            }
        }
    }

    /// Fail-fast check of every step in order. The first failing step
    /// becomes the current one.
    pub fn validate_all(&mut self, now: Instant) -> Result<(), SubmitError> {
        for step in 1..=TOTAL_STEPS {
            if !self.validate_step(step, now) {
                self.go_to_step(step);
                return Err(SubmitError::StepInvalid { step });
            }
        }
        Ok(())
    }

    /// Real-time check when a field loses focus
    pub fn blur_field(&mut self, id: FieldId) {
        if !self.is_finished() {
            validator::validate_on_blur(&mut self.form, id);
        }
    }

    pub fn select_project_type(&mut self, project_type: ProjectType) {
        if !self.is_finished() {
            self.form.select_project_type(project_type);
        }
    }

    // Files

    /// Stage every path in a drop payload or browse entry. Rejections are
    /// reported as notifications. Returns how many files were staged.
    pub fn stage_input(&mut self, text: &str, now: Instant) -> usize {
        self.stager.highlighted = false;
        if self.is_finished() {
            return 0;
        }
        let paths = parse_drop_payload(text);
        let before = self.stager.len();
        for err in self.stager.stage_paths(&paths) {
            if matches!(err, super::staging::StagingError::Unreadable { .. }) {
                tracing::warn!(error = %err, "Could not stage file");
            }
            self.notifications.push_error(err.to_string(), now);
        }
        self.stager.len() - before
    }

    pub fn remove_file(&mut self, id: Uuid) -> bool {
        self.stager.remove(id)
    }

    // Submission

    /// Start the simulated submission.
    pub fn submit(&mut self, now: Instant) -> Result<(), SubmitError> {
        let result = self.try_submit(now);
        if let Err(err) = &result {
            if err.is_user_facing() {
                self.notifications.push_error(err.to_string(), now);
            }
        }
        result
    }

    fn try_submit(&mut self, now: Instant) -> Result<(), SubmitError> {
        match self.phase {
            SubmissionPhase::Submitting { .. } => return Err(SubmitError::AlreadySubmitting),
            SubmissionPhase::Succeeded => return Err(SubmitError::Finished),
            SubmissionPhase::Editing => {}
        }

        self.validate_all(now)?;
        if !self.form.agree_terms {
            return Err(SubmitError::TermsNotAccepted);
        }

        tracing::info!(
            project = self.form.value(FieldId::ProjectName),
            files = self.stager.len(),
            "Submitting project"
        );
        self.phase = SubmissionPhase::Submitting { started_at: now };
        Ok(())
    }

    /// Advance timers. Returns true on the tick that completes submission.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.notifications.prune(now);

        let SubmissionPhase::Submitting { started_at } = self.phase else {
            return false;
        };
        if now.saturating_duration_since(started_at) < self.submit_delay {
            return false;
        }

        self.phase = SubmissionPhase::Succeeded;
        let payload = self.payload();
        match payload.to_json() {
            Ok(json) => tracing::debug!(%json, "Collected submission payload (not sent)"),
            Err(err) => tracing::warn!(error = %err, "Could not serialize submission payload"),
        }
        tracing::info!("Project submitted");
        true
    }

    /// Payload the form would send to a backend
    pub fn payload(&self) -> ProjectSubmission {
        ProjectSubmission::collect(&self.form, Utc::now())
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::validator::{EMAIL_MESSAGE, PROJECT_TYPE_MESSAGE};
    use std::io::Write;

    fn fill_details(session: &mut FormSession) {
        let form = &mut session.form;
        form.field_mut(FieldId::ProjectName).set_text("Relaunch");
        form.field_mut(FieldId::ClientName).set_text("Ada");
        form.field_mut(FieldId::ClientEmail).set_text("ada@example.com");
        form.field_mut(FieldId::ProjectDescription).set_text("New site");
    }

    fn ready_session() -> FormSession {
        let mut session = FormSession::default();
        session.select_project_type(ProjectType::Website);
        fill_details(&mut session);
        session.form.agree_terms = true;
        session
    }

    mod step_controller {
        use super::*;

        #[test]
        fn test_starts_on_first_step() {
            let session = FormSession::default();
            assert_eq!(session.current_step(), 1);
            assert_eq!(session.step().id, "step1");
            assert_eq!(session.indicator_state(1), IndicatorState::Active);
            assert_eq!(session.indicator_state(2), IndicatorState::Upcoming);
        }

        #[test]
        fn test_go_to_step_sets_exactly_one_active() {
            let mut session = FormSession::default();
            for start in 1..=TOTAL_STEPS {
                for target in 1..=TOTAL_STEPS {
                    session.go_to_step(start);
                    session.go_to_step(target);
                    assert_eq!(session.current_step(), target);
                    let active = (1..=TOTAL_STEPS)
                        .filter(|n| session.is_step_active(*n))
                        .count();
                    assert_eq!(active, 1);
                }
            }
        }

        #[test]
        fn test_go_to_step_is_idempotent() {
            let mut session = FormSession::default();
            session.go_to_step(2);
            session.go_to_step(2);
            assert_eq!(session.current_step(), 2);
            assert_eq!(session.indicator_state(1), IndicatorState::Completed);
            assert_eq!(session.indicator_state(2), IndicatorState::Active);
            assert_eq!(session.indicator_state(3), IndicatorState::Upcoming);
        }

        #[test]
        fn test_go_to_step_clamps_out_of_range() {
            let mut session = FormSession::default();
            session.go_to_step(0);
            assert_eq!(session.current_step(), 1);
            session.go_to_step(9);
            assert_eq!(session.current_step(), TOTAL_STEPS);
        }

        #[test]
        fn test_go_to_step_requests_scroll() {
            let mut session = FormSession::default();
            assert!(!session.take_scroll_request());
            session.go_to_step(2);
            assert!(session.take_scroll_request());
            assert!(!session.take_scroll_request());
        }

        #[test]
        fn test_next_step_blocked_without_project_type() {
            let now = Instant::now();
            let mut session = FormSession::default();
            assert!(!session.next_step(2, now));
            assert_eq!(session.current_step(), 1);
            assert_eq!(session.notifications.latest(), Some(PROJECT_TYPE_MESSAGE));
        }

        #[test]
        fn test_next_step_advances_when_valid() {
            let now = Instant::now();
            let mut session = FormSession::default();
            session.select_project_type(ProjectType::Branding);
            assert!(session.next_step(2, now));
            assert_eq!(session.current_step(), 2);
            assert!(session.notifications.is_empty());
        }

        #[test]
        fn test_next_step_blocked_on_invalid_email() {
            let now = Instant::now();
            let mut session = ready_session();
            session.go_to_step(2);
            session
                .form
                .field_mut(FieldId::ClientEmail)
                .set_text("not-an-email");
            assert!(!session.next_step(3, now));
            assert_eq!(session.current_step(), 2);
            assert_eq!(
                session.form.field(FieldId::ClientEmail).error(),
                Some(EMAIL_MESSAGE)
            );
        }

        #[test]
        fn test_prev_step_ignores_validation() {
            let mut session = FormSession::default();
            session.go_to_step(3);
            session.prev_step(2);
            assert_eq!(session.current_step(), 2);
            assert!(session.form.is_error_free());
        }

        #[test]
        fn test_indicator_click_only_goes_back() {
            let mut session = FormSession::default();
            session.go_to_step(2);

            assert!(!session.click_indicator(3));
            assert_eq!(session.current_step(), 2);
            assert!(!session.click_indicator(2));

            assert!(session.click_indicator(1));
            assert_eq!(session.current_step(), 1);
        }
    }

    mod submission {
        use super::*;

        #[test]
        fn test_validate_all_jumps_to_first_failing_step() {
            let now = Instant::now();
            let mut session = FormSession::default();
            session.select_project_type(ProjectType::Website);
            session.go_to_step(3);

            assert_eq!(
                session.validate_all(now),
                Err(SubmitError::StepInvalid { step: 2 })
            );
            assert_eq!(session.current_step(), 2);
        }

        #[test]
        fn test_validate_all_stops_at_first_failure() {
            let now = Instant::now();
            let mut session = FormSession::default();
            session.go_to_step(3);

            assert_eq!(
                session.validate_all(now),
                Err(SubmitError::StepInvalid { step: 1 })
            );
            assert_eq!(session.current_step(), 1);
            // step two was never checked, so its fields carry no errors
            assert!(session.form.is_error_free());
        }

        #[test]
        fn test_submit_with_invalid_form_notifies() {
            let now = Instant::now();
            let mut session = FormSession::default();
            session.select_project_type(ProjectType::Website);
            assert!(session.submit(now).is_err());
            assert_eq!(
                session.notifications.latest(),
                Some("Please fill in all required fields correctly")
            );
            assert_eq!(session.phase(), SubmissionPhase::Editing);
        }

        #[test]
        fn test_submit_requires_terms() {
            let now = Instant::now();
            let mut session = ready_session();
            session.form.agree_terms = false;
            assert_eq!(session.submit(now), Err(SubmitError::TermsNotAccepted));
            assert_eq!(
                session.notifications.latest(),
                Some("Please agree to the terms and conditions")
            );
        }

        #[test]
        fn test_submit_completes_after_delay() {
            let start = Instant::now();
            let mut session = ready_session();
            session.go_to_step(3);

            assert!(session.submit(start).is_ok());
            assert!(session.phase().is_submitting());

            assert!(!session.tick(start + Duration::from_millis(1000)));
            assert!(session.phase().is_submitting());

            assert!(session.tick(start + DEFAULT_SUBMIT_DELAY));
            assert!(session.is_finished());
            assert!(!session.tick(start + Duration::from_secs(5)));
        }

        #[test]
        fn test_double_submit_is_guarded() {
            let now = Instant::now();
            let mut session = ready_session();
            session.submit(now).unwrap();
            assert_eq!(session.submit(now), Err(SubmitError::AlreadySubmitting));
            assert!(session.notifications.is_empty());
        }

        #[test]
        fn test_finished_session_ignores_input() {
            let now = Instant::now();
            let mut session = ready_session();
            session.go_to_step(3);
            session.submit(now).unwrap();
            session.tick(now + DEFAULT_SUBMIT_DELAY);

            session.go_to_step(1);
            assert_eq!(session.current_step(), 3);
            assert!(!session.click_indicator(1));
            assert_eq!(session.submit(now), Err(SubmitError::Finished));
        }

        #[test]
        fn test_custom_delay() {
            let start = Instant::now();
            let mut session = FormSession::new(SessionOptions {
                submit_delay: Duration::from_millis(10),
                ..SessionOptions::default()
            });
            session.select_project_type(ProjectType::Website);
            fill_details(&mut session);
            session.form.agree_terms = true;
            session.submit(start).unwrap();
            assert!(session.tick(start + Duration::from_millis(10)));
        }
    }

    mod files {
        use super::*;

        #[test]
        fn test_stage_input_reports_rejections() {
            let now = Instant::now();
            let dir = tempfile::tempdir().unwrap();
            let good = dir.path().join("mock.png");
            let bad = dir.path().join("setup.exe");
            std::fs::File::create(&good)
                .unwrap()
                .write_all(b"png")
                .unwrap();
            std::fs::File::create(&bad).unwrap();

            let mut session = FormSession::default();
            session.stager.highlighted = true;
            let payload = format!("{} {}", good.display(), bad.display());
            assert_eq!(session.stage_input(&payload, now), 1);

            assert!(!session.stager.highlighted);
            assert_eq!(session.stager.files()[0].name, "mock.png");
            assert_eq!(
                session.notifications.latest(),
                Some("File type not supported for setup.exe")
            );
        }

        #[test]
        fn test_remove_file() {
            let now = Instant::now();
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("brief.pdf");
            std::fs::File::create(&path).unwrap();

            let mut session = FormSession::default();
            session.stage_input(&path.display().to_string(), now);
            let id = session.stager.files()[0].id;
            assert!(session.remove_file(id));
            assert!(session.stager.is_empty());
            assert_eq!(session.current_step(), 1);
        }
    }
}
