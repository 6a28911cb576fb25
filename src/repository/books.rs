//! Books repository: the flat-file catalog store.
//!
//! The store is one JSON file holding the full record sequence. It is read
//! in full at load time and fully rewritten on every save; there is no
//! append log and no partial update. Non-ASCII text is written verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{
    error::{AppError, AppResult},
    models::Book,
};

#[derive(Debug, Clone)]
pub struct BooksRepository {
    path: PathBuf,
}

impl BooksRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Read the full record sequence from the store.
    ///
    /// An absent store is an empty catalog, not an error. A store that cannot
    /// be read or whose content is not a record sequence fails the whole load;
    /// there is no partial load.
    pub fn load_all(&self) -> AppResult<Vec<Book>> {
        if !self.path.exists() {
            tracing::debug!("Store {} does not exist yet, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let raw = fs::read_to_string(&self.path).map_err(AppError::StorageRead)?;
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(&raw).map_err(AppError::CorruptStore)?;

        entries.into_iter().map(Book::from_value).collect()
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Replace the store content with the given record sequence.
    pub fn save_all(&self, books: &[Book]) -> AppResult<()> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        books.serialize(&mut serializer).map_err(AppError::Encode)?;

        fs::write(&self.path, buf).map_err(AppError::StorageWrite)?;
        tracing::debug!("Wrote {} record(s) to {}", books.len(), self.path.display());
        Ok(())
    }
}
