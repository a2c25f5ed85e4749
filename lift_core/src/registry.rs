//! Exercise registry: add, look up, and remove exercises.
//!
//! Exercise names are the canonical identifiers. Removal cascades into
//! every program's reference list so that no program ever names an
//! exercise that no longer exists.

use crate::{Document, Error, Exercise, Result};
use serde::Deserialize;

/// Request body for adding an exercise, with per-field defaults
#[derive(Clone, Debug, Deserialize)]
pub struct NewExercise {
    pub name: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default = "default_sets")]
    pub sets: u32,
    #[serde(default = "default_reps")]
    pub reps: u32,
    /// Program to append the new exercise to, if any
    #[serde(default)]
    pub program: Option<String>,
}

fn default_weight() -> f64 {
    45.0
}

fn default_sets() -> u32 {
    3
}

fn default_reps() -> u32 {
    5
}

impl NewExercise {
    /// New exercise with the default bar weight and 3x5 scheme
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight: default_weight(),
            sets: default_sets(),
            reps: default_reps(),
            program: None,
        }
    }
}

/// Look up an exercise by name
pub fn get_exercise<'a>(doc: &'a Document, name: &str) -> Result<&'a Exercise> {
    doc.exercises
        .get(name)
        .ok_or_else(|| Error::NotFound(format!("exercise '{}'", name)))
}

/// Look up an exercise by name for mutation
pub fn get_exercise_mut<'a>(doc: &'a mut Document, name: &str) -> Result<&'a mut Exercise> {
    doc.exercises
        .get_mut(name)
        .ok_or_else(|| Error::NotFound(format!("exercise '{}'", name)))
}

/// Add a new exercise, optionally appending it to a program
///
/// The name is trimmed; an empty name is rejected and a duplicate name is
/// a conflict. An unknown program id is a silent no-op (the exercise is
/// still added), logged at warn so the condition is observable.
///
/// Returns the canonical (trimmed) name.
pub fn add_exercise(doc: &mut Document, spec: NewExercise) -> Result<String> {
    let name = spec.name.trim().to_string();
    if name.is_empty() {
        return Err(Error::InvalidArgument("exercise name is required".into()));
    }
    if doc.exercises.contains_key(&name) {
        return Err(Error::Conflict(format!("exercise '{}' already exists", name)));
    }

    doc.exercises.insert(
        name.clone(),
        Exercise {
            current_weight: spec.weight,
            default_sets: spec.sets,
            default_reps: spec.reps,
        },
    );

    if let Some(program_id) = spec.program {
        match doc.programs.get_mut(&program_id) {
            Some(program) => {
                program.exercises.push(name.clone());
                tracing::debug!("Added '{}' to program '{}'", name, program_id);
            }
            None => {
                tracing::warn!(
                    "Unknown program '{}' while adding '{}'; exercise added unattached",
                    program_id,
                    name
                );
            }
        }
    }

    tracing::info!("Added exercise '{}'", name);
    Ok(name)
}

/// Remove an exercise and every program reference to it
///
/// This is the one mutation that touches two entities: the exercise entry
/// and the reference lists of all programs, updated within the same
/// document so the referential invariant holds at save time.
pub fn remove_exercise(doc: &mut Document, name: &str) -> Result<()> {
    if doc.exercises.remove(name).is_none() {
        return Err(Error::NotFound(format!("exercise '{}'", name)));
    }

    for program in doc.programs.values_mut() {
        program.exercises.retain(|n| n != name);
    }

    tracing::info!("Removed exercise '{}'", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_with_defaults() {
        let mut doc = Document::default();

        let name = add_exercise(&mut doc, NewExercise::named("Curls")).unwrap();
        assert_eq!(name, "Curls");

        let exercise = get_exercise(&doc, "Curls").unwrap();
        assert_eq!(exercise.current_weight, 45.0);
        assert_eq!(exercise.default_sets, 3);
        assert_eq!(exercise.default_reps, 5);
    }

    #[test]
    fn test_add_trims_name() {
        let mut doc = Document::default();

        let name = add_exercise(&mut doc, NewExercise::named("  Dips  ")).unwrap();
        assert_eq!(name, "Dips");
        assert!(doc.exercises.contains_key("Dips"));
    }

    #[test]
    fn test_add_empty_name_rejected() {
        let mut doc = Document::default();

        let result = add_exercise(&mut doc, NewExercise::named("   "));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_add_duplicate_rejected_and_original_untouched() {
        let mut doc = Document::default();

        let mut first = NewExercise::named("Curls");
        first.weight = 30.0;
        add_exercise(&mut doc, first).unwrap();

        let mut second = NewExercise::named("Curls");
        second.weight = 90.0;
        let result = add_exercise(&mut doc, second);

        assert!(matches!(result, Err(Error::Conflict(_))));
        assert_eq!(doc.exercises["Curls"].current_weight, 30.0);
    }

    #[test]
    fn test_add_appends_to_program() {
        let mut doc = Document::default();

        let mut spec = NewExercise::named("Curls");
        spec.weight = 30.0;
        spec.program = Some("main".into());
        add_exercise(&mut doc, spec).unwrap();

        assert_eq!(doc.programs["main"].exercises.last().unwrap(), "Curls");
    }

    #[test]
    fn test_add_unknown_program_is_noop() {
        let mut doc = Document::default();

        let mut spec = NewExercise::named("Curls");
        spec.program = Some("upper_body".into());
        add_exercise(&mut doc, spec).unwrap();

        // Exercise added, no program touched
        assert!(doc.exercises.contains_key("Curls"));
        assert!(!doc.programs["main"].exercises.contains(&"Curls".to_string()));
    }

    #[test]
    fn test_remove_cascades_into_programs() {
        let mut doc = Document::default();
        assert!(doc.programs["main"]
            .exercises
            .contains(&"Deadlift".to_string()));

        remove_exercise(&mut doc, "Deadlift").unwrap();

        assert!(!doc.exercises.contains_key("Deadlift"));
        assert!(!doc.programs["main"]
            .exercises
            .contains(&"Deadlift".to_string()));
        // Other members untouched
        assert_eq!(doc.programs["main"].exercises.len(), 4);
        assert!(doc.validate().is_empty());
    }

    #[test]
    fn test_remove_missing_is_not_found() {
        let mut doc = Document::default();

        let result = remove_exercise(&mut doc, "Zercher Squat");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_add_then_remove_roundtrip() {
        let mut doc = Document::default();

        let mut spec = NewExercise::named("Curls");
        spec.weight = 30.0;
        spec.program = Some("main".into());
        add_exercise(&mut doc, spec).unwrap();
        remove_exercise(&mut doc, "Curls").unwrap();

        assert!(!doc.exercises.contains_key("Curls"));
        assert!(!doc.programs["main"].exercises.contains(&"Curls".to_string()));
    }
}
