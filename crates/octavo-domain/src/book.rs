//! Book leaf entry

use serde::Serialize;

use crate::error::DomainError;
use crate::item::check_common;

/// A book with an ISBN and page count.
///
/// All fields are validated at construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    title: String,
    author: String,
    year: i32,
    isbn: String,
    pages: u32,
}

impl Book {
    /// Create a book. Fails on a blank title or author, or a negative
    /// year. A negative page count is clamped to zero; the ISBN may be
    /// empty.
    pub fn new(
        title: &str,
        author: &str,
        year: i32,
        isbn: &str,
        pages: i32,
    ) -> Result<Self, DomainError> {
        check_common(title, author, year)?;
        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            isbn: isbn.to_string(),
            pages: pages.max(0) as u32,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The ISBN, possibly empty.
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Total page count.
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Formatted description, e.g. `Book: Clean Code by Robert C. Martin (2008)`.
    pub fn summary(&self) -> String {
        format!("Book: {} by {} ({})", self.title, self.author, self.year)
    }
}
