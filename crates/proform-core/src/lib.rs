//! # Proform Core Library
//!
//! This crate provides the core functionality for the Proform profile
//! settings screen. It contains the edit-session state machine, field
//! validation, avatar encoding, and the submission pipeline, independent
//! of any specific user interface.
//!
//! ## Modules
//!
//! - `profile`: the editable profile entity and field enumeration
//! - `validate`: the submit-time validation gate
//! - `session`: lock/unlock state, pending avatar, submit generations
//! - `avatar`: image file to inline `data:` URL encoding
//! - `pipeline`: one remote update per submit with notification phases
//! - `remote`: the profile service collaborator
//! - `notify`: the injected notification capability
//! - `settings`: application configuration management
//! - `theme`: UI theming system

pub mod avatar;
pub mod notify;
pub mod pipeline;
pub mod profile;
pub mod remote;
pub mod session;
pub mod settings;
pub mod theme;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;

pub use profile::{ProfileField, ProfileForm};
pub use session::{EditSession, LockState, SubmitBlocked, SubmitRequest};
