//! Program registry lookups.
//!
//! Read-mostly in the current surface: programs come from the seed
//! document or get members appended via the exercise registry. Reference
//! cleanup on exercise removal lives in `registry`, so create/delete/
//! rename operations can be added here later without breaking it.

use crate::{Document, Error, Result};

/// Whether a program with this id exists
pub fn program_exists(doc: &Document, id: &str) -> bool {
    doc.programs.contains_key(id)
}

/// The ordered exercise names of a program
pub fn list_exercises<'a>(doc: &'a Document, id: &str) -> Result<&'a [String]> {
    doc.programs
        .get(id)
        .map(|p| p.exercises.as_slice())
        .ok_or_else(|| Error::NotFound(format!("program '{}'", id)))
}
