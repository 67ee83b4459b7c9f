//! The closed set of catalog entries

use std::fmt;

use serde::Serialize;

use crate::book::Book;
use crate::collection::Collection;
use crate::error::DomainError;
use crate::journal::Journal;
use crate::paper::Paper;

/// Discriminant for the item variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Kind {
    Book,
    Journal,
    Paper,
    Collection,
}

/// Any cataloged entry: a leaf (book, journal, paper) or a nested collection.
///
/// All variants share a validated title, author and year, fixed at
/// construction. "Leaf" is structural: anything that is not a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Item {
    Book(Book),
    Journal(Journal),
    Paper(Paper),
    Collection(Collection),
}

impl Item {
    /// The title of the entry.
    pub fn title(&self) -> &str {
        match self {
            Item::Book(book) => book.title(),
            Item::Journal(journal) => journal.title(),
            Item::Paper(paper) => paper.title(),
            Item::Collection(collection) => collection.title(),
        }
    }

    /// The author or main contributor of the entry.
    pub fn author(&self) -> &str {
        match self {
            Item::Book(book) => book.author(),
            Item::Journal(journal) => journal.author(),
            Item::Paper(paper) => paper.author(),
            Item::Collection(collection) => collection.author(),
        }
    }

    /// The publication (or creation) year of the entry.
    pub fn year(&self) -> i32 {
        match self {
            Item::Book(book) => book.year(),
            Item::Journal(journal) => journal.year(),
            Item::Paper(paper) => paper.year(),
            Item::Collection(collection) => collection.year(),
        }
    }

    /// Variant-specific human-readable description.
    pub fn summary(&self) -> String {
        match self {
            Item::Book(book) => book.summary(),
            Item::Journal(journal) => journal.summary(),
            Item::Paper(paper) => paper.summary(),
            Item::Collection(collection) => collection.summary(),
        }
    }

    /// Which variant this entry is.
    pub fn kind(&self) -> Kind {
        match self {
            Item::Book(_) => Kind::Book,
            Item::Journal(_) => Kind::Journal,
            Item::Paper(_) => Kind::Paper,
            Item::Collection(_) => Kind::Collection,
        }
    }

    /// Whether this entry is a leaf, i.e. not a collection.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Item::Collection(_))
    }

    /// The book behind this entry, if it is one.
    pub fn as_book(&self) -> Option<&Book> {
        match self {
            Item::Book(book) => Some(book),
            _ => None,
        }
    }

    /// The journal behind this entry, if it is one.
    pub fn as_journal(&self) -> Option<&Journal> {
        match self {
            Item::Journal(journal) => Some(journal),
            _ => None,
        }
    }

    /// The paper behind this entry, if it is one.
    pub fn as_paper(&self) -> Option<&Paper> {
        match self {
            Item::Paper(paper) => Some(paper),
            _ => None,
        }
    }

    /// The collection behind this entry, if it is one.
    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Item::Collection(collection) => Some(collection),
            _ => None,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl From<Book> for Item {
    fn from(book: Book) -> Self {
        Item::Book(book)
    }
}

impl From<Journal> for Item {
    fn from(journal: Journal) -> Self {
        Item::Journal(journal)
    }
}

impl From<Paper> for Item {
    fn from(paper: Paper) -> Self {
        Item::Paper(paper)
    }
}

impl From<Collection> for Item {
    fn from(collection: Collection) -> Self {
        Item::Collection(collection)
    }
}

/// Shared constructor validation for every variant: title and author must
/// not be blank, the year must be non-negative.
pub(crate) fn check_common(title: &str, author: &str, year: i32) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::InvalidArgument(
            "title is required and must not be blank".to_string(),
        ));
    }
    if author.trim().is_empty() {
        return Err(DomainError::InvalidArgument(
            "author is required and must not be blank".to_string(),
        ));
    }
    if year < 0 {
        return Err(DomainError::InvalidArgument(format!(
            "year must be >= 0, got {}",
            year
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_accessors() {
        let item = Item::from(Book::new("Clean Code", "Robert C. Martin", 2008, "9780132350884", 464).unwrap());
        assert_eq!(item.title(), "Clean Code");
        assert_eq!(item.author(), "Robert C. Martin");
        assert_eq!(item.year(), 2008);
        assert_eq!(item.kind(), Kind::Book);
        assert!(item.is_leaf());
    }

    #[test]
    fn display_is_summary() {
        let item = Item::from(Paper::new("Attention Is All You Need", "Vaswani et al.", 2017, "10.5555/3295222.3295349", "NeurIPS").unwrap());
        assert_eq!(item.to_string(), item.summary());
    }

    #[test]
    fn variant_accessors() {
        let item = Item::from(Journal::new("Nature", "Springer", 2023, "Vol. 1").unwrap());
        assert!(item.as_journal().is_some());
        assert!(item.as_book().is_none());
        assert!(item.as_paper().is_none());
        assert!(item.as_collection().is_none());
    }

    #[test]
    fn collections_are_not_leaves() {
        let item = Item::from(Collection::new("Readings", "me", 2024).unwrap());
        assert!(!item.is_leaf());
        assert_eq!(item.kind(), Kind::Collection);
    }
}
