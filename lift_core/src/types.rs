//! Core domain types for the strength program tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - The persisted Document (the single root aggregate)
//! - Exercises and their training parameters
//! - Programs (ordered collections of exercise references)
//! - Workout history entries
//!
//! The serde field spelling here is a compatibility surface: documents
//! written by earlier versions of the tool must keep parsing, so the
//! top-level keys are `programs`, `exercises`, `warmup`,
//! `weight_increment`, and `history`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Exercise and Program Types
// ============================================================================

/// A named strength movement with its current training parameters.
///
/// Identity is the exercise's key in `Document::exercises`; there is no
/// separate numeric id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub current_weight: f64,
    pub default_sets: u32,
    pub default_reps: u32,
}

/// A named, ordered collection of exercise references.
///
/// References are weak back-references: a program names exercises but does
/// not own them. Every name listed here must exist as a key in
/// `Document::exercises`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Program {
    pub name: String,
    pub exercises: Vec<String>,
}

/// Warm-up scheme: percentages of the working weight, each done for `reps`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WarmupConfig {
    pub percentages: Vec<u32>,
    pub reps: u32,
}

// ============================================================================
// History Types
// ============================================================================

/// An immutable record of one completed workout session.
///
/// `exercises` is an opaque sequence of per-exercise performance records,
/// echoed back verbatim from whatever the caller logged.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutEntry {
    pub date: NaiveDate,
    pub program: String,
    pub exercises: Vec<serde_json::Value>,
    pub notes: String,
    pub duration_seconds: u64,
}

// ============================================================================
// Document Type
// ============================================================================

/// The single root aggregate, persisted wholesale by the document store.
///
/// Every operation loads a full Document, applies one mutation, and saves
/// the full Document back. There is no partial persistence.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub programs: BTreeMap<String, Program>,
    pub exercises: BTreeMap<String, Exercise>,
    pub warmup: WarmupConfig,
    #[serde(default = "default_weight_increment")]
    pub weight_increment: f64,
    #[serde(default)]
    pub history: Vec<WorkoutEntry>,
}

fn default_weight_increment() -> f64 {
    5.0
}
