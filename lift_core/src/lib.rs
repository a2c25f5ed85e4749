#![forbid(unsafe_code)]

//! Core domain model and business logic for the Liftlog strength tracker.
//!
//! This crate provides:
//! - Domain types (document, exercises, programs, history entries)
//! - Document persistence (locked, atomic JSON file store)
//! - Exercise and program registries
//! - Weight progression logic
//! - The workout history log
//! - The operation surface consumed by transport layers

pub mod types;
pub mod error;
pub mod defaults;
pub mod config;
pub mod logging;
pub mod store;
pub mod registry;
pub mod programs;
pub mod progression;
pub mod history;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use defaults::build_default_document;
pub use config::Config;
pub use store::{DocumentStore, FileStore, MemoryStore};
pub use registry::NewExercise;
pub use history::WorkoutDraft;
pub use engine::Tracker;
