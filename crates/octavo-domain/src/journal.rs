//! Journal leaf entry

use serde::Serialize;

use crate::error::DomainError;
use crate::item::check_common;

/// An academic or scientific journal issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Journal {
    title: String,
    author: String,
    year: i32,
    issue: String,
}

impl Journal {
    /// Create a journal entry. The issue identifier (e.g. "Vol. 10, No. 2")
    /// may be empty.
    pub fn new(title: &str, author: &str, year: i32, issue: &str) -> Result<Self, DomainError> {
        check_common(title, author, year)?;
        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            issue: issue.to_string(),
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

    /// The issue identifier, possibly empty.
    pub fn issue(&self) -> &str {
        &self.issue
    }

    /// Formatted description, e.g. `Journal: Nature [Vol. 1] (2023)`.
    pub fn summary(&self) -> String {
        format!("Journal: {} [{}] ({})", self.title, self.issue, self.year)
    }
}
