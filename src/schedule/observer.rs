//! Conflict notification sinks
//!
//! A sink is a registered callback the store invokes when an insertion is
//! rejected. Invocation is synchronous and in registration order; by the
//! time sinks run the task has already been rejected, so a sink cannot
//! influence the outcome.

/// Callback notified once per rejected insertion with a formatted message
/// naming the conflicting task.
pub trait ConflictSink {
    fn on_conflict(&self, message: &str);
}

/// Prints conflict messages to stdout for the interactive session.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConflictSink for ConsoleSink {
    fn on_conflict(&self, message: &str) {
        println!("Error: {message}");
    }
}
