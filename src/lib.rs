//! # Astroday
//!
//! Console organizer for an astronaut's daily schedule. One in-memory store
//! holds the day's tasks, rejects time-overlapping insertions, and supports
//! removal, editing, and completion keyed by case-insensitive description.
//!
//! ## Architecture Overview
//!
//! The system consists of a small library plus a CLI binary:
//!
//! - **[`schedule`]**: task model, input validation, the conflict-checked
//!   store, and the conflict-notification sink abstraction
//! - **[`cli`]**: argument parsing, configuration discovery, and the
//!   interactive menu loop
//! - **[`logging`]**: tracing setup with an optional append-only file log
//! - **[`env`]**: path constants and helpers
//!
//! ## Conflict policy
//!
//! Task intervals are closed: two tasks that merely touch at a boundary
//! minute (one ending 08:00, the next starting 08:00) are considered
//! conflicting. Rejected insertions notify registered sinks synchronously,
//! in registration order, and leave the store unchanged.
//!
//! ## Quick Start
//!
//! ```rust
//! use astroday::schedule::{ScheduleError, Task, TaskStore};
//!
//! fn main() -> Result<(), ScheduleError> {
//!     let mut store = TaskStore::new();
//!     store.add_task(Task::from_input("Exercise", "07:00", "08:00", "High")?)?;
//!     store.add_task(Task::from_input("Crew Report", "08:01", "09:00", "Medium")?)?;
//!
//!     for task in store.tasks_by_start() {
//!         println!("{task}");
//!     }
//!     Ok(())
//! }
//! ```

/// Task model, validation, and the conflict-checked store.
pub mod schedule;

/// CLI argument parsing, configuration discovery, and the interactive menu.
pub mod cli;

/// Environment constants and path utilities.
pub mod env;

/// Tracing initialization with optional append-only file log.
pub mod logging;

// Re-export the main schedule types
pub use schedule::{ConflictSink, ConsoleSink, Priority, ScheduleError, Task, TaskStore};
