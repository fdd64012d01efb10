//! UI module for the Proform terminal screen.
//!
//! Presentation only: every widget here projects core state (the edit
//! session, the form, the toast) without owning any of it.

pub mod app;
pub mod footer;
pub mod form;
pub mod header;
