//! Notification capability for submission feedback. Injected into the
//! pipeline so tests can observe the pending/terminal sequence without a
//! real UI.

pub const PENDING_COPY: &str = "Updating...";
pub const SUCCESS_COPY: &str = "Update successful!";
pub const FAILURE_COPY: &str = "Unable to update, try again.";
pub const AVATAR_READ_FAILURE_COPY: &str = "Could not read that image file.";

/// Receives exactly one `notify_pending` and then exactly one of
/// `notify_success`/`notify_failure` per submission.
pub trait Notifier: Send + Sync {
    fn notify_pending(&self);
    fn notify_success(&self);
    fn notify_failure(&self);
}
