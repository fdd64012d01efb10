//! Edit-session state machine for the profile screen.
//!
//! The session owns the lock flag, the pending avatar replacement, and the
//! validation errors from the last submit attempt. It is exclusively owned
//! by the active screen instance and never persisted.

use crate::profile::ProfileForm;
use crate::validate::{self, ValidationErrors};

/// The two states of the edit session. The screen opens read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockState {
    #[default]
    Locked,
    Unlocked,
}

/// A validated, avatar-merged payload ready for the submission pipeline.
///
/// Produced only by [`EditSession::begin_submit`]; constructing one implies
/// the validation gate passed and the lock has already re-engaged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub form: ProfileForm,
    pub generation: u64,
}

/// Why a submit attempt never reached the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// The session is read-only; mutation and submission are disabled.
    Locked,
    /// The validation gate failed; the per-field errors are on the session.
    Invalid,
}

#[derive(Debug, Default)]
pub struct EditSession {
    lock: LockState,
    pending_avatar: Option<String>,
    errors: ValidationErrors,
    avatar_ticket: u64,
    submit_generation: u64,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> LockState {
        self.lock
    }

    pub fn is_locked(&self) -> bool {
        self.lock == LockState::Locked
    }

    /// The only lock transition. Fired by the explicit Edit action and,
    /// internally, when a submission is initiated.
    pub fn toggle_lock(&mut self) {
        self.lock = match self.lock {
            LockState::Locked => LockState::Unlocked,
            LockState::Unlocked => LockState::Locked,
        };
    }

    /// The locally encoded avatar awaiting submission, which takes
    /// precedence over the remote avatar until the session resets.
    pub fn pending_avatar(&self) -> Option<&str> {
        self.pending_avatar.as_deref()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Issues a ticket for an in-flight avatar encode. When encodes overlap,
    /// the newest ticket wins and stale resolutions are dropped.
    pub fn issue_avatar_ticket(&mut self) -> u64 {
        self.avatar_ticket += 1;
        self.avatar_ticket
    }

    /// Stores an encoded avatar, visible immediately and independent of the
    /// submit lifecycle. No-op while locked (the upload control is not
    /// reachable then) or when a newer encode has been started since.
    pub fn attach_avatar(&mut self, ticket: u64, encoded: String) {
        if self.is_locked() {
            tracing::debug!("ignoring avatar attach while locked");
            return;
        }
        if ticket != self.avatar_ticket {
            tracing::debug!(ticket, current = self.avatar_ticket, "dropping stale avatar encode");
            return;
        }
        self.pending_avatar = Some(encoded);
    }

    /// Runs the validation gate and, on pass, re-engages the lock and hands
    /// back the merged payload for the pipeline.
    ///
    /// The lock re-engages the moment the user confirms submit, not when the
    /// remote call completes. A failed gate stores the per-field errors,
    /// leaves the lock as-is, and the pipeline is never invoked.
    ///
    /// Avatar precedence: pending avatar, else the remote avatar already on
    /// the form, else empty.
    pub fn begin_submit(&mut self, values: &ProfileForm) -> Result<SubmitRequest, SubmitBlocked> {
        if self.is_locked() {
            return Err(SubmitBlocked::Locked);
        }

        let errors = validate::validate(values);
        if !errors.is_empty() {
            self.errors = errors;
            return Err(SubmitBlocked::Invalid);
        }
        self.errors = ValidationErrors::default();

        let effective_avatar = self
            .pending_avatar
            .clone()
            .or_else(|| values.avatar.clone())
            .unwrap_or_default();

        let mut form = values.clone();
        form.avatar = Some(effective_avatar);

        self.lock = LockState::Locked;
        self.submit_generation += 1;

        Ok(SubmitRequest {
            form,
            generation: self.submit_generation,
        })
    }

    /// True when an outcome belongs to the most recent submission; stale
    /// outcomes from superseded submits should be dropped.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.submit_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileField;
    use crate::validate::REQUIRED_MESSAGE;

    fn valid_form() -> ProfileForm {
        ProfileForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: String::new(),
            phone_number: String::new(),
            about: "Engineer".to_string(),
            job_title: "Countess".to_string(),
            avatar: None,
        }
    }

    #[test]
    fn session_opens_locked() {
        let session = EditSession::new();
        assert!(session.is_locked());
        assert_eq!(session.pending_avatar(), None);
        assert!(session.errors().is_empty());
    }

    #[test]
    fn toggle_lock_twice_returns_to_original_state() {
        let mut session = EditSession::new();
        session.toggle_lock();
        assert_eq!(session.lock(), LockState::Unlocked);
        session.toggle_lock();
        assert_eq!(session.lock(), LockState::Locked);
    }

    #[test]
    fn attach_avatar_is_a_noop_while_locked() {
        let mut session = EditSession::new();
        let ticket = session.issue_avatar_ticket();
        session.attach_avatar(ticket, "data:image/png;base64,AAAA".to_string());
        assert_eq!(session.pending_avatar(), None);
    }

    #[test]
    fn attach_avatar_stores_the_encoded_image() {
        let mut session = EditSession::new();
        session.toggle_lock();
        let ticket = session.issue_avatar_ticket();
        session.attach_avatar(ticket, "data:image/png;base64,AAAA".to_string());
        assert_eq!(session.pending_avatar(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn newer_avatar_ticket_wins_over_stale_resolution() {
        let mut session = EditSession::new();
        session.toggle_lock();
        let first = session.issue_avatar_ticket();
        let second = session.issue_avatar_ticket();
        // The second selection resolves first.
        session.attach_avatar(second, "newer".to_string());
        // The superseded read resolves late and must not clobber.
        session.attach_avatar(first, "older".to_string());
        assert_eq!(session.pending_avatar(), Some("newer"));
    }

    #[test]
    fn begin_submit_rejects_while_locked() {
        let mut session = EditSession::new();
        assert_eq!(
            session.begin_submit(&valid_form()),
            Err(SubmitBlocked::Locked)
        );
    }

    #[test]
    fn failed_gate_stores_errors_and_keeps_session_unlocked() {
        let mut session = EditSession::new();
        session.toggle_lock();

        let mut form = valid_form();
        form.first_name.clear();

        assert!(session.begin_submit(&form).is_err());
        assert_eq!(
            session.errors().message(ProfileField::FirstName),
            Some(REQUIRED_MESSAGE)
        );
        assert!(!session.is_locked());
    }

    #[test]
    fn passing_gate_relocks_eagerly_and_clears_errors() {
        let mut session = EditSession::new();
        session.toggle_lock();

        let mut incomplete = valid_form();
        incomplete.about.clear();
        assert!(session.begin_submit(&incomplete).is_err());
        assert!(!session.errors().is_empty());

        let request = session.begin_submit(&valid_form()).expect("gate passes");
        assert!(session.is_locked());
        assert!(session.errors().is_empty());
        assert!(session.is_current(request.generation));
    }

    #[test]
    fn pending_avatar_takes_precedence_over_remote() {
        let mut session = EditSession::new();
        session.toggle_lock();
        let ticket = session.issue_avatar_ticket();
        session.attach_avatar(ticket, "data:image/png;base64,NEW".to_string());

        let mut form = valid_form();
        form.avatar = Some("https://cdn.example.com/old.png".to_string());

        let request = session.begin_submit(&form).unwrap();
        assert_eq!(
            request.form.avatar.as_deref(),
            Some("data:image/png;base64,NEW")
        );
    }

    #[test]
    fn remote_avatar_used_when_no_pending_replacement() {
        let mut session = EditSession::new();
        session.toggle_lock();

        let mut form = valid_form();
        form.avatar = Some("https://cdn.example.com/old.png".to_string());
        let request = session.begin_submit(&form).unwrap();
        assert_eq!(
            request.form.avatar.as_deref(),
            Some("https://cdn.example.com/old.png")
        );

        session.toggle_lock();
        form.avatar = None;
        let request = session.begin_submit(&form).unwrap();
        assert_eq!(request.form.avatar.as_deref(), Some(""));
    }

    #[test]
    fn pending_avatar_survives_submit_until_session_resets() {
        let mut session = EditSession::new();
        session.toggle_lock();
        let ticket = session.issue_avatar_ticket();
        session.attach_avatar(ticket, "data:image/png;base64,NEW".to_string());

        session.begin_submit(&valid_form()).unwrap();
        assert_eq!(
            session.pending_avatar(),
            Some("data:image/png;base64,NEW")
        );
    }

    #[test]
    fn stale_submit_generation_is_detected() {
        let mut session = EditSession::new();
        session.toggle_lock();
        let first = session.begin_submit(&valid_form()).unwrap();

        session.toggle_lock();
        let second = session.begin_submit(&valid_form()).unwrap();

        assert!(!session.is_current(first.generation));
        assert!(session.is_current(second.generation));
    }
}
