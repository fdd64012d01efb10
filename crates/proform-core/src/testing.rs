//! Hand-rolled test doubles for the service and notifier seams.

use crate::notify::Notifier;
use crate::profile::ProfileForm;
use crate::remote::{ProfileService, RemoteError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

enum UpdateBehavior {
    /// Echo the submitted form back, as a well-behaved server would.
    Echo,
    /// Answer with a fixed server-side copy.
    Fixed(ProfileForm),
    /// Reject with a remote error.
    Fail,
}

/// A profile service that counts calls and answers from canned data.
pub struct CountingService {
    fetch_response: ProfileForm,
    update_behavior: UpdateBehavior,
    fetch_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl CountingService {
    pub fn succeeding() -> Self {
        Self {
            fetch_response: ProfileForm::default(),
            update_behavior: UpdateBehavior::Echo,
            fetch_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            update_behavior: UpdateBehavior::Fail,
            ..Self::succeeding()
        }
    }

    pub fn returning(server_copy: ProfileForm) -> Self {
        Self {
            update_behavior: UpdateBehavior::Fixed(server_copy),
            ..Self::succeeding()
        }
    }

    pub fn with_profile(mut self, profile: ProfileForm) -> Self {
        self.fetch_response = profile;
        self
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileService for CountingService {
    async fn fetch_profile(&self) -> Result<ProfileForm, RemoteError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.fetch_response.clone())
    }

    async fn update_profile(&self, form: &ProfileForm) -> Result<ProfileForm, RemoteError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        match &self.update_behavior {
            UpdateBehavior::Echo => Ok(form.clone()),
            UpdateBehavior::Fixed(copy) => Ok(copy.clone()),
            UpdateBehavior::Fail => Err(RemoteError::Status(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            )),
        }
    }
}

/// Records the notification sequence a submission produced.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<&'static str>>,
}

impl RecordingNotifier {
    pub fn sequence(&self) -> Vec<&'static str> {
        self.events.lock().expect("notifier lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_pending(&self) {
        self.events.lock().expect("notifier lock").push("pending");
    }

    fn notify_success(&self) {
        self.events.lock().expect("notifier lock").push("success");
    }

    fn notify_failure(&self) {
        self.events.lock().expect("notifier lock").push("failure");
    }
}
