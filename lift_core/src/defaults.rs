//! Default document and document validation.
//!
//! This module provides the seed document used when the backing store is
//! empty, plus the consistency checks that every stored document must pass.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Cached seed document - built once and cloned per load
static DEFAULT_DOCUMENT: Lazy<Document> = Lazy::new(build_default_document);

/// Get a reference to the cached seed document
pub fn get_default_document() -> &'static Document {
    &DEFAULT_DOCUMENT
}

/// Builds the seed document: one full-body program over five barbell lifts
pub fn build_default_document() -> Document {
    let mut programs = BTreeMap::new();
    let mut exercises = BTreeMap::new();

    programs.insert(
        "main".into(),
        Program {
            name: "Full Workout".into(),
            exercises: vec![
                "Front Squats".into(),
                "Bench Press".into(),
                "Deadlift".into(),
                "Bent Over Row".into(),
                "Overhead Press".into(),
            ],
        },
    );

    let seed = [
        ("Front Squats", 120.0, 3, 5),
        ("Bench Press", 165.0, 5, 5),
        ("Deadlift", 205.0, 2, 5),
        ("Bent Over Row", 115.0, 3, 5),
        ("Overhead Press", 100.0, 3, 5),
    ];
    for (name, weight, sets, reps) in seed {
        exercises.insert(
            name.into(),
            Exercise {
                current_weight: weight,
                default_sets: sets,
                default_reps: reps,
            },
        );
    }

    Document {
        programs,
        exercises,
        warmup: WarmupConfig {
            percentages: vec![50, 70],
            reps: 5,
        },
        weight_increment: 5.0,
        history: Vec::new(),
    }
}

impl Default for Document {
    fn default() -> Self {
        get_default_document().clone()
    }
}

impl Document {
    /// Validate the document for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, exercise) in &self.exercises {
            if name.trim().is_empty() {
                errors.push("Exercise has empty name".to_string());
            }
            if !exercise.current_weight.is_finite() || exercise.current_weight < 0.0 {
                errors.push(format!(
                    "Exercise '{}' has invalid weight {}",
                    name, exercise.current_weight
                ));
            }
            if exercise.default_sets == 0 {
                errors.push(format!("Exercise '{}' has zero sets", name));
            }
            if exercise.default_reps == 0 {
                errors.push(format!("Exercise '{}' has zero reps", name));
            }
        }

        for (id, program) in &self.programs {
            if id.trim().is_empty() {
                errors.push("Program has empty id".to_string());
            }
            if program.name.is_empty() {
                errors.push(format!("Program '{}' has empty name", id));
            }

            // Every reference must resolve to a registered exercise
            for exercise_name in &program.exercises {
                if !self.exercises.contains_key(exercise_name) {
                    errors.push(format!(
                        "Program '{}' references non-existent exercise '{}'",
                        id, exercise_name
                    ));
                }
            }
        }

        if !self.weight_increment.is_finite() || self.weight_increment <= 0.0 {
            errors.push(format!(
                "weight_increment must be positive, got {}",
                self.weight_increment
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_document_shape() {
        let doc = Document::default();
        assert_eq!(doc.exercises.len(), 5);
        assert_eq!(doc.programs.len(), 1);
        assert_eq!(doc.exercises["Bench Press"].current_weight, 165.0);
        assert_eq!(doc.programs["main"].exercises.len(), 5);
        assert_eq!(doc.warmup.percentages, vec![50, 70]);
        assert_eq!(doc.weight_increment, 5.0);
        assert!(doc.history.is_empty());
    }

    #[test]
    fn test_default_document_validates() {
        let errors = Document::default().validate();
        assert!(
            errors.is_empty(),
            "Seed document has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_all_program_references_resolve() {
        let doc = Document::default();
        for program in doc.programs.values() {
            for name in &program.exercises {
                assert!(
                    doc.exercises.contains_key(name),
                    "Exercise {} referenced but not found",
                    name
                );
            }
        }
    }

    #[test]
    fn test_dangling_reference_detected() {
        let mut doc = Document::default();
        doc.programs
            .get_mut("main")
            .unwrap()
            .exercises
            .push("Zercher Squat".into());

        let errors = doc.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Zercher Squat"));
    }

    #[test]
    fn test_negative_weight_detected() {
        let mut doc = Document::default();
        doc.exercises.get_mut("Deadlift").unwrap().current_weight = -5.0;

        let errors = doc.validate();
        assert!(errors.iter().any(|e| e.contains("Deadlift")));
    }
}
