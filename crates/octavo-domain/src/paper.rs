//! Paper leaf entry

use serde::Serialize;

use crate::error::DomainError;
use crate::item::check_common;

/// A research paper or academic article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paper {
    title: String,
    author: String,
    year: i32,
    doi: String,
    venue: String,
}

impl Paper {
    /// Create a paper. DOI and venue may be empty.
    pub fn new(
        title: &str,
        author: &str,
        year: i32,
        doi: &str,
        venue: &str,
    ) -> Result<Self, DomainError> {
        check_common(title, author, year)?;
        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            doi: doi.to_string(),
            venue: venue.to_string(),
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

    /// The Digital Object Identifier, possibly empty.
    pub fn doi(&self) -> &str {
        &self.doi
    }

    /// The publication venue (conference or journal name), possibly empty.
    pub fn venue(&self) -> &str {
        &self.venue
    }

    /// Formatted description. The venue is included when present:
    /// `Paper @ NeurIPS: Attention Is All You Need (2017)`, otherwise
    /// `Paper: Attention Is All You Need (2017)`.
    pub fn summary(&self) -> String {
        if self.venue.trim().is_empty() {
            format!("Paper: {} ({})", self.title, self.year)
        } else {
            format!("Paper @ {}: {} ({})", self.venue, self.title, self.year)
        }
    }
}
