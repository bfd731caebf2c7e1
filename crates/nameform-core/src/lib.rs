//! Core infrastructure for the nameform screen.
//!
//! This crate owns everything that is not drawing: the form screen with its
//! deferred message appends, the lifecycle snapshot store, the event bus the
//! app loop runs on, the text input field, and the logging subsystem.

pub mod bus;
pub mod event;
pub mod input;
pub mod logging;
pub mod render;
pub mod screen;
pub mod snapshot;
pub mod state;
pub mod timer;
