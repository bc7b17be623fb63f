//! Task data model and input validation
//!
//! Tasks are built from raw console input through [`Task::from_input`], which
//! parses the time and priority strings and rejects malformed values before
//! a task can ever reach the store.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced by task construction and store operations.
///
/// Every failure is recoverable at the caller boundary: construction failures
/// keep the task out of the store, conflict and not-found failures leave the
/// store unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid time '{input}': use HH:mm between 00:00 and 23:59")]
    InvalidTimeFormat { input: String },

    #[error(
        "end time {} must be after start time {}",
        .end.format("%H:%M"),
        .start.format("%H:%M")
    )]
    InvalidTimeRange { start: NaiveTime, end: NaiveTime },

    #[error("invalid priority '{input}': use High, Medium, or Low")]
    InvalidPriority { input: String },

    #[error("task conflicts with existing task \"{existing}\"")]
    Conflict { existing: String },

    #[error("no task found matching \"{description}\"")]
    NotFound { description: String },
}

/// Task priority, orthogonal to scheduling and conflict logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Get the display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl FromStr for Priority {
    type Err = ScheduleError;

    /// Parse a priority token, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ScheduleError::InvalidPriority {
                input: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parse a time-of-day string in strict `HH:mm` form (zero-padded, 24-hour).
///
/// Exactly two digits, a colon, two digits. Anything else — including
/// unpadded hours like `7:00` or trailing seconds — is rejected.
pub fn parse_time(input: &str) -> Result<NaiveTime, ScheduleError> {
    let s = input.trim();
    let malformed = || ScheduleError::InvalidTimeFormat {
        input: s.to_string(),
    };

    let (hours, minutes) = s.split_once(':').ok_or_else(malformed)?;
    if hours.len() != 2
        || minutes.len() != 2
        || !hours.bytes().all(|b| b.is_ascii_digit())
        || !minutes.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }

    let hour: u32 = hours.parse().map_err(|_| malformed())?;
    let minute: u32 = minutes.parse().map_err(|_| malformed())?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(malformed)
}

/// A single scheduled task for the day.
///
/// Construction goes through [`Task::new`] or [`Task::from_input`], so every
/// task in existence satisfies `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub description: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a task from already-parsed times, enforcing the time-range
    /// invariant.
    pub fn new(
        description: impl Into<String>,
        start: NaiveTime,
        end: NaiveTime,
        priority: Priority,
    ) -> Result<Self, ScheduleError> {
        if end <= start {
            return Err(ScheduleError::InvalidTimeRange { start, end });
        }
        Ok(Self {
            description: description.into(),
            start,
            end,
            priority,
            completed: false,
        })
    }

    /// Build a task from raw console input, validating every field.
    ///
    /// Times must be strict `HH:mm`; the priority token is matched ignoring
    /// case. The description is trimmed but otherwise taken verbatim.
    pub fn from_input(
        description: &str,
        start: &str,
        end: &str,
        priority: &str,
    ) -> Result<Self, ScheduleError> {
        let start = parse_time(start)?;
        let end = parse_time(end)?;
        let priority: Priority = priority.parse()?;
        Self::new(description.trim(), start, end, priority)
    }

    /// Two tasks conflict when their intervals overlap. Intervals are closed:
    /// tasks that merely touch at a boundary instant count as overlapping.
    /// This is the chosen boundary policy, not an off-by-one.
    pub fn overlaps(&self, other: &Task) -> bool {
        !(self.end < other.start || self.start > other.end)
    }

    /// Case-insensitive exact match on the description.
    pub fn matches_description(&self, description: &str) -> bool {
        self.description.eq_ignore_ascii_case(description.trim())
    }

    /// Mark the task completed. One-way; there is no un-complete.
    pub fn complete(&mut self) {
        self.completed = true;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {} [{}]",
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.description,
            self.priority
        )?;
        if self.completed {
            write!(f, " (Completed)")?;
        }
        Ok(())
    }
}
