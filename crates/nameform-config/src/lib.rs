//! Configuration types and loaders for nameform.
//!
//! This crate owns the on-disk configuration schema so the app and tests
//! share one source of truth for defaults and validation.

pub mod form;

pub use form::{FormConfig, FormSection, SnapshotSection, UiSection};
