//! Repository layer for storage operations

pub mod books;

use crate::config::StorageConfig;

/// Main repository struct holding the storage backends
#[derive(Debug, Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository for the configured store
    pub fn new(storage: &StorageConfig) -> Self {
        Self {
            books: books::BooksRepository::new(&storage.path),
        }
    }
}
