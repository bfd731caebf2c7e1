//! TUI rendering layer for nameform.
//!
//! Provides the form layout, shell chrome, input row, and message list.
//! All rendering uses [`ratatui`]; this crate owns the visual presentation
//! while [`nameform_core`] owns the state.

pub mod input;
pub mod layout;
pub mod messages;
pub mod shell;
