//! Submission pipeline: one remote update per submit, wrapped in a
//! pending -> success/failure notification sequence.
//!
//! The lock has already re-engaged by the time this runs (the session does
//! that eagerly when the gate passes), so a failed update leaves the form
//! read-only; the user unlocks and resubmits explicitly. No retries.

use crate::notify::Notifier;
use crate::remote::{ProfileService, RemoteError};
use crate::session::SubmitRequest;
use crate::ProfileForm;

/// Terminal result of one submission attempt, tagged with the submit
/// generation so stale outcomes can be dropped.
#[derive(Debug)]
pub struct SubmitOutcome {
    pub generation: u64,
    pub result: Result<ProfileForm, RemoteError>,
}

impl SubmitOutcome {
    pub fn updated(&self) -> Option<&ProfileForm> {
        self.result.as_ref().ok()
    }
}

/// Runs one submission. The notifier sees pending immediately and exactly
/// one terminal notification once the remote call settles. The underlying
/// error detail goes to the log, never to the user-facing copy.
pub async fn submit<S, N>(service: &S, notifier: &N, request: SubmitRequest) -> SubmitOutcome
where
    S: ProfileService + ?Sized,
    N: Notifier + ?Sized,
{
    notifier.notify_pending();
    tracing::debug!(generation = request.generation, "submitting profile update");

    let result = service.update_profile(&request.form).await;

    match &result {
        Ok(_) => {
            tracing::info!(generation = request.generation, "profile update succeeded");
            notifier.notify_success();
        }
        Err(err) => {
            tracing::warn!(generation = request.generation, error = %err, "profile update failed");
            notifier.notify_failure();
        }
    }

    SubmitOutcome {
        generation: request.generation,
        result,
    }
}
