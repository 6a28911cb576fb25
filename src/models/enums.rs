//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BookStatus
// ---------------------------------------------------------------------------

/// Lending status of a catalogued book.
///
/// The store serializes the two values as `"available"` and `"checked out"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    #[serde(rename = "available")]
    Available,
    #[serde(rename = "checked out")]
    CheckedOut,
}

impl BookStatus {
    /// Return the store label for this status
    pub fn as_label(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::CheckedOut => "checked out",
        }
    }

    /// Parse a store label. Anything outside the two-valued domain is `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "available" => Some(BookStatus::Available),
            "checked out" => Some(BookStatus::CheckedOut),
            _ => None,
        }
    }
}

impl Default for BookStatus {
    fn default() -> Self {
        BookStatus::Available
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(BookStatus::Available.as_label(), "available");
        assert_eq!(BookStatus::CheckedOut.as_label(), "checked out");
        assert_eq!(BookStatus::from_label("available"), Some(BookStatus::Available));
        assert_eq!(BookStatus::from_label("checked out"), Some(BookStatus::CheckedOut));
        assert_eq!(BookStatus::from_label("archived"), None);
        assert_eq!(BookStatus::from_label("Available"), None);
    }

    #[test]
    fn test_status_default() {
        assert_eq!(BookStatus::default(), BookStatus::Available);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&BookStatus::CheckedOut).unwrap();
        assert_eq!(json, "\"checked out\"");
        let parsed: BookStatus = serde_json::from_str("\"available\"").unwrap();
        assert_eq!(parsed, BookStatus::Available);
    }
}
