//! Transition history tracking.
//!
//! Provides immutable tracking of machine transitions over time. Records
//! carry state names rather than state values, so a log stays
//! serializable even though hooks are not.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single successful transition.
///
/// Records are immutable values naming a move from one state to another
/// at a specific point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// Name of the state being transitioned from
    pub from: String,
    /// Name of the state being transitioned to
    pub to: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of transitions.
///
/// The log is immutable - `record` returns a new log with the record
/// appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use turnstile::core::{TransitionLog, TransitionRecord};
/// use chrono::Utc;
///
/// let log = TransitionLog::new();
///
/// let log = log.record(TransitionRecord {
///     from: "red".to_string(),
///     to: "green".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.get_path(), vec!["red", "green"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    ///
    /// The existing log is not mutated.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of state names traversed.
    ///
    /// Returns names in order: the first record's origin, then the
    /// destination of each record. Empty for an empty log.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Total duration from first to last recorded transition.
    ///
    /// `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All records, in order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }
}
