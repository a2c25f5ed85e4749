//! Document persistence with file locking.
//!
//! The store is injectable: the core only sees the `DocumentStore` trait,
//! so tests and embedders can substitute an in-memory document.
//!
//! Note on concurrency: the file locks serialize individual reads and
//! writes, not whole load-mutate-save cycles. Two overlapping operations
//! can still race and the later save wins (lost update). Accepted for a
//! single-user tool.

use crate::{Document, Error, Result};
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

/// Backing store for the document, loaded and saved as an atomic unit
pub trait DocumentStore {
    /// Load the full document, supplying the default when the store is empty
    fn load(&self) -> Result<Document>;

    /// Persist the full document, replacing whatever was stored before
    fn save(&self, doc: &Document) -> Result<()>;
}

/// JSON-file-backed store with locking and atomic replace
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for FileStore {
    /// Load the document from the backing file with shared locking
    ///
    /// Returns the default document if the file doesn't exist or is empty.
    /// A file that exists but cannot be read or parsed is fatal: the store
    /// never repairs or silently resets user data.
    fn load(&self) -> Result<Document> {
        if !self.path.exists() {
            tracing::info!("No document at {:?}, using default", self.path);
            return Ok(Document::default());
        }

        let file = File::open(&self.path)?;

        // Shared lock for reading
        file.lock_shared()?;

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        let read_result = reader.read_to_string(&mut contents);
        file.unlock()?;
        read_result?;

        if contents.trim().is_empty() {
            tracing::info!("Empty document at {:?}, using default", self.path);
            return Ok(Document::default());
        }

        let doc: Document = serde_json::from_str(&contents)
            .map_err(|e| Error::Store(format!("corrupt document {:?}: {}", self.path, e)))?;

        let errors = doc.validate();
        if !errors.is_empty() {
            return Err(Error::Store(format!(
                "corrupt document {:?}: {}",
                self.path,
                errors.join("; ")
            )));
        }

        tracing::debug!("Loaded document from {:?}", self.path);
        Ok(doc)
    }

    /// Save the document with exclusive locking
    ///
    /// Atomically writes by:
    /// 1. Writing to a temp file in the same directory
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    fn save(&self, doc: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = NamedTempFile::new_in(self.path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "document path missing parent")
        })?)?;

        // Exclusive lock on the temp file to serialize concurrent writers
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            // Pretty JSON, matching the files earlier versions wrote
            let contents = serde_json::to_string_pretty(doc)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        // Atomically replace the old document
        temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved document to {:?}", self.path);
        Ok(())
    }
}

/// In-memory store for tests and embedding
#[derive(Default)]
pub struct MemoryStore {
    doc: Mutex<Option<Document>>,
}

impl MemoryStore {
    /// Create an empty store (first load yields the default document)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a document
    pub fn with_document(doc: Document) -> Self {
        Self {
            doc: Mutex::new(Some(doc)),
        }
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Document> {
        let guard = self
            .doc
            .lock()
            .map_err(|_| Error::Store("memory store poisoned".into()))?;
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, doc: &Document) -> Result<()> {
        let mut guard = self
            .doc
            .lock()
            .map_err(|_| Error::Store("memory store poisoned".into()))?;
        *guard = Some(doc.clone());
        Ok(())
    }
}
