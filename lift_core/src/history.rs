//! Workout history log.
//!
//! Append-only and newest first: a new entry is always inserted at the
//! head, and entries are never mutated or reordered afterwards.

use crate::{Document, Error, Result, WorkoutEntry};
use chrono::NaiveDate;
use serde::Deserialize;

/// Caller-supplied fields for a new history entry; everything is optional
#[derive(Clone, Debug, Default, Deserialize)]
pub struct WorkoutDraft {
    /// Defaults to the day of insertion
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub program: Option<String>,
    /// Opaque per-exercise performance records, stored verbatim
    #[serde(default)]
    pub exercises: Vec<serde_json::Value>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Signed on the way in so a negative value can be rejected
    #[serde(default)]
    pub duration_seconds: Option<i64>,
}

/// Append a workout entry at the head of the history
///
/// Defaults are applied per field; a negative duration is rejected before
/// anything is appended. Returns the stored entry.
pub fn log_workout(doc: &mut Document, draft: WorkoutDraft) -> Result<WorkoutEntry> {
    let duration = draft.duration_seconds.unwrap_or(0);
    if duration < 0 {
        return Err(Error::InvalidArgument(format!(
            "duration_seconds must be non-negative, got {}",
            duration
        )));
    }

    let entry = WorkoutEntry {
        date: draft
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive()),
        program: draft.program.unwrap_or_default(),
        exercises: draft.exercises,
        notes: draft.notes.unwrap_or_default(),
        duration_seconds: duration as u64,
    };

    doc.history.insert(0, entry.clone());
    tracing::info!(
        "Logged workout on {} ({} entries total)",
        entry.date,
        doc.history.len()
    );
    Ok(entry)
}

/// All history entries, newest first
pub fn list_history(doc: &Document) -> &[WorkoutEntry] {
    &doc.history
}
