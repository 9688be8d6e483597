use serde::{Deserialize, Serialize};

/// Lending state of a book.
///
/// The two labels produced by [`BookStatus::label`] are the canonical status
/// strings of the catalog; every display surface must use them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    /// On the shelf, free to borrow
    Available,
    /// Held by exactly one user (a matching loan row exists)
    Borrowed,
}

impl BookStatus {
    /// Canonical display label for this status
    pub fn label(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Borrowed => "Borrowed",
        }
    }
}

impl From<bool> for BookStatus {
    fn from(is_borrowed: bool) -> Self {
        if is_borrowed {
            BookStatus::Borrowed
        } else {
            BookStatus::Available
        }
    }
}

/// Book - one catalog entry, keyed by ISBN
///
/// A Book is a detached copy of a row in the store. The `is_borrowed` flag
/// only changes through successful borrow/return operations on the store;
/// nothing else may flip it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Natural primary key, immutable once added
    pub isbn: String,

    /// Human-readable title
    pub title: String,

    /// Author as a single display string
    pub author: String,

    /// Whether the book is currently out on loan
    pub is_borrowed: bool,
}

impl Book {
    /// Create a new Book in the Available state
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            is_borrowed: false,
        }
    }

    /// Lending status derived from the borrowed flag
    pub fn status(&self) -> BookStatus {
        BookStatus::from(self.is_borrowed)
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, ISBN: {}, Status: {}",
            self.title,
            self.author,
            self.isbn,
            self.status().label()
        )
    }
}
