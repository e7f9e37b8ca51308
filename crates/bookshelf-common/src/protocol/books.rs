//! Catalog record types.
//!
//! These are the entities exchanged with the book catalog service. Field
//! names are part of the wire contract: the service speaks the same JSON
//! shapes.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Catalog identifier, unique per book
    pub id: i32,
    pub title: String,
    pub author: String,
}

impl Book {
    pub fn new(id: i32, title: impl Into<String>, author: impl Into<String>) -> Self {
        Book {
            id,
            title: title.into(),
            author: author.into(),
        }
    }
}

/// The full catalog as returned by the `list` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookList {
    pub books: Vec<Book>,
}

impl BookList {
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// Zero-field acknowledgment record.
///
/// The service answers `delete` with an empty message; this is its typed
/// counterpart. Serializes to `{}`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Empty {}
