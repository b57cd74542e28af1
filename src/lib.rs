//! Assignment-tracking simulation.
//!
//! Models students, assignments and notification-on-status-change, using
//! tokio timers to simulate asynchronous grading workflows. Assignments
//! flow through released → working → submitted → passed/failed, with a
//! class-list-driven final-reminder escalation. Status transitions are
//! observed through the [`notify::Notify`] capability, injected at
//! construction.
//!
//! Nothing here persists or talks to a network; the only external surface
//! is the notification stream.

pub mod cli;
pub mod config;
pub mod error;
pub mod notify;
pub mod report;
pub mod tracking;
pub mod ui;

pub use error::GradeflowError;
