//! Book (catalog entry) model and related types.
//!
//! Persistence uses the plain JSON representation with the five fixed keys
//! `id`, `title`, `author`, `year`, `status`. Decoding requires all five;
//! a missing or mistyped key is a malformed record, never silently defaulted.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::enums::BookStatus;
use crate::error::{AppError, AppResult};

/// One catalogued book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub status: BookStatus,
}

impl Book {
    /// Build a book from one stored entry.
    pub fn from_value(value: serde_json::Value) -> AppResult<Self> {
        serde_json::from_value(value).map_err(AppError::MalformedRecord)
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Title: '{}', Author: '{}', Year: {}, Status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

/// Input shape for adding a book to the catalog
#[derive(Debug, Clone, Validate)]
pub struct NewBook {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    pub year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        let book = Book::from_value(json!({
            "id": 1,
            "title": "Dune",
            "author": "Herbert",
            "year": 1965,
            "status": "available"
        }))
        .unwrap();
        assert_eq!(book.id, 1);
        assert_eq!(book.status, BookStatus::Available);
    }

    #[test]
    fn test_from_value_missing_key() {
        let result = Book::from_value(json!({
            "id": 1,
            "title": "Dune",
            "author": "Herbert",
            "year": 1965
        }));
        assert!(matches!(result, Err(AppError::MalformedRecord(_))));
    }

    #[test]
    fn test_from_value_bad_status() {
        let result = Book::from_value(json!({
            "id": 1,
            "title": "Dune",
            "author": "Herbert",
            "year": 1965,
            "status": "lost"
        }));
        assert!(matches!(result, Err(AppError::MalformedRecord(_))));
    }

    #[test]
    fn test_display() {
        let book = Book {
            id: 2,
            title: "Foundation".to_string(),
            author: "Asimov".to_string(),
            year: 1951,
            status: BookStatus::CheckedOut,
        };
        assert_eq!(
            book.to_string(),
            "ID: 2, Title: 'Foundation', Author: 'Asimov', Year: 1951, Status: checked out"
        );
    }

    #[test]
    fn test_new_book_validation() {
        let ok = NewBook {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            year: 1965,
        };
        assert!(ok.validate().is_ok());

        let empty_title = NewBook {
            title: String::new(),
            author: "Herbert".to_string(),
            year: 1965,
        };
        assert!(empty_title.validate().is_err());
    }
}
