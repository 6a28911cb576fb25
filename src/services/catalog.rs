//! Catalog management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookStatus, NewBook},
    repository::Repository,
};

/// Outcome of removing a book by id.
///
/// A missing id is an expected, reportable condition, so it travels as an
/// ordinary value and not on the error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Book),
    NotFound,
}

/// Outcome of a lending-status change request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    Updated(Book),
    InvalidStatus,
    NotFound,
}

/// The in-memory catalog and its synchronization with the backing store.
///
/// The store is the durable state; the in-memory sequence is a cache of it
/// valid for one run. Every mutating operation ends with a full rewrite of
/// the store.
#[derive(Debug)]
pub struct CatalogService {
    repository: Repository,
    books: Vec<Book>,
}

impl CatalogService {
    /// Create the service, loading the catalog from the backing store.
    pub fn new(repository: Repository) -> AppResult<Self> {
        let mut service = Self {
            repository,
            books: Vec::new(),
        };
        service.load()?;
        Ok(service)
    }

    /// Replace the in-memory sequence with the store content.
    pub fn load(&mut self) -> AppResult<()> {
        self.books = self.repository.books.load_all()?;
        Ok(())
    }

    /// Persist the full in-memory sequence to the store.
    pub fn save(&self) -> AppResult<()> {
        self.repository.books.save_all(&self.books)
    }

    /// Add a new book with status "available" and persist it.
    pub fn add(&mut self, new: NewBook) -> AppResult<Book> {
        new.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        // Next id is the current count + 1; ids can repeat once books have
        // been removed. Callers relying on the numbering expect exactly this.
        let id = self.books.len() as u32 + 1;
        let book = Book {
            id,
            title: new.title,
            author: new.author,
            year: new.year,
            status: BookStatus::default(),
        };
        self.books.push(book.clone());
        self.save()?;

        tracing::info!("Book '{}' added with id {}", book.title, book.id);
        Ok(book)
    }

    /// Remove the first book whose id matches and persist the change.
    pub fn remove(&mut self, id: u32) -> AppResult<RemoveOutcome> {
        match self.books.iter().position(|b| b.id == id) {
            Some(index) => {
                let removed = self.books.remove(index);
                self.save()?;
                tracing::info!("Book with id {} removed", id);
                Ok(RemoveOutcome::Removed(removed))
            }
            None => Ok(RemoveOutcome::NotFound),
        }
    }

    /// Search by title, author or publication year.
    ///
    /// Title and author match on a case-insensitive substring; the year
    /// matches when the query equals its decimal form. Read-only.
    pub fn search(&self, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&needle)
                    || b.author.to_lowercase().contains(&needle)
                    || query == b.year.to_string()
            })
            .collect()
    }

    /// All books, in insertion order. Read-only.
    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    /// Change the lending status of the first book whose id matches.
    ///
    /// The new status arrives as its raw label so an out-of-domain value is
    /// representable; it is reported as `InvalidStatus` with no mutation and
    /// no save.
    pub fn change_status(&mut self, id: u32, new_status: &str) -> AppResult<StatusOutcome> {
        let Some(book) = self.books.iter_mut().find(|b| b.id == id) else {
            return Ok(StatusOutcome::NotFound);
        };
        let Some(status) = BookStatus::from_label(new_status) else {
            return Ok(StatusOutcome::InvalidStatus);
        };

        book.status = status;
        let updated = book.clone();
        self.save()?;

        tracing::info!("Book with id {} is now {}", id, status);
        Ok(StatusOutcome::Updated(updated))
    }
}
