//! Operation surface over the document store.
//!
//! Every operation is one load → mutate → save cycle against the injected
//! store: the document is loaded fresh, exactly one mutation is applied,
//! and the full document is written back. Read-only operations skip the
//! save. Validation runs before mutation, so a failed operation leaves
//! the stored document exactly as it was.
//!
//! There is no coordination between overlapping cycles; with two
//! concurrent writers the later save wins. Accepted for a single-user
//! tool (see `store`).

use crate::history::WorkoutDraft;
use crate::registry::NewExercise;
use crate::store::DocumentStore;
use crate::{history, progression, registry, Document, Result, WorkoutEntry};

/// The tracker: the full operation surface consumed by transport layers
pub struct Tracker<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> Tracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The full current document
    pub fn load_document(&self) -> Result<Document> {
        self.store.load()
    }

    /// Add the document's default increment to an exercise's working weight
    ///
    /// Returns the new weight.
    pub fn increment_weight(&self, name: &str) -> Result<f64> {
        let mut doc = self.store.load()?;
        let delta = doc.weight_increment;
        let exercise = registry::get_exercise_mut(&mut doc, name)?;
        let weight = progression::increment(exercise, delta);
        self.store.save(&doc)?;
        Ok(weight)
    }

    /// Subtract the document's default increment, clamping at zero
    ///
    /// Returns the new weight.
    pub fn decrement_weight(&self, name: &str) -> Result<f64> {
        let mut doc = self.store.load()?;
        let delta = doc.weight_increment;
        let exercise = registry::get_exercise_mut(&mut doc, name)?;
        let weight = progression::decrement(exercise, delta);
        self.store.save(&doc)?;
        Ok(weight)
    }

    /// Overwrite an exercise's working weight
    ///
    /// Returns the new weight.
    pub fn set_weight(&self, name: &str, value: f64) -> Result<f64> {
        let mut doc = self.store.load()?;
        let exercise = registry::get_exercise_mut(&mut doc, name)?;
        let weight = progression::set_weight(exercise, value)?;
        self.store.save(&doc)?;
        Ok(weight)
    }

    /// Append a workout entry to the history
    ///
    /// Returns the stored entry with defaults applied.
    pub fn log_workout(&self, draft: WorkoutDraft) -> Result<WorkoutEntry> {
        let mut doc = self.store.load()?;
        let entry = history::log_workout(&mut doc, draft)?;
        self.store.save(&doc)?;
        Ok(entry)
    }

    /// All history entries, newest first
    pub fn list_history(&self) -> Result<Vec<WorkoutEntry>> {
        let doc = self.store.load()?;
        Ok(history::list_history(&doc).to_vec())
    }

    /// Add a new exercise, optionally appending it to a program
    ///
    /// Returns the canonical name.
    pub fn add_exercise(&self, spec: NewExercise) -> Result<String> {
        let mut doc = self.store.load()?;
        let name = registry::add_exercise(&mut doc, spec)?;
        self.store.save(&doc)?;
        Ok(name)
    }

    /// Remove an exercise and every program reference to it
    pub fn remove_exercise(&self, name: &str) -> Result<()> {
        let mut doc = self.store.load()?;
        registry::remove_exercise(&mut doc, name)?;
        self.store.save(&doc)?;
        Ok(())
    }
}
