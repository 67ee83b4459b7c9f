//! Composite collection of catalog entries

use serde::Serialize;

use crate::book::Book;
use crate::error::DomainError;
use crate::item::{check_common, Item};
use crate::iter::{Aggregate, DepthFirstIter, LevelIter};
use crate::journal::Journal;
use crate::paper::Paper;

/// An ordered, nestable grouping of items.
///
/// Children are owned by value and keep their insertion order. Nesting a
/// collection moves it into its parent, so the structure is always a tree
/// and every traversal terminates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    title: String,
    author: String,
    year: i32,
    items: Vec<Item>,
}

impl Collection {
    /// Create an empty collection. The same field validation applies as
    /// for leaf entries.
    pub fn new(title: &str, author: &str, year: i32) -> Result<Self, DomainError> {
        check_common(title, author, year)?;
        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            year,
            items: Vec::new(),
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

    /// Append an item as the last direct child. Never fails.
    pub fn add_item(&mut self, item: impl Into<Item>) {
        self.items.push(item.into());
    }

    /// Direct children in insertion order, without descending into nested
    /// collections.
    pub fn items_at_current_level(&self) -> &[Item] {
        &self.items
    }

    /// Direct child count.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection has no direct children.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The direct child at `index`.
    pub fn item_at(&self, index: usize) -> Result<&Item, DomainError> {
        self.items.get(index).ok_or(DomainError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Every leaf under this collection, in pre-order left-to-right
    /// encounter order. Nested collections never appear in the result.
    ///
    /// The list is recomputed on every call; callers needing repeated
    /// access should hold on to the result.
    pub fn leaves(&self) -> Vec<&Item> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Item>) {
        for item in &self.items {
            match item {
                Item::Collection(sub) => sub.collect_leaves(out),
                leaf => out.push(leaf),
            }
        }
    }

    /// Number of leaves under this collection. Always equals
    /// `leaves().len()` for the same tree state.
    pub fn count_leaves(&self) -> usize {
        self.items
            .iter()
            .map(|item| match item {
                Item::Collection(sub) => sub.count_leaves(),
                _ => 1,
            })
            .sum()
    }

    /// Books among the direct children.
    pub fn books_at_current_level(&self) -> Vec<&Book> {
        self.items.iter().filter_map(Item::as_book).collect()
    }

    /// Journals among the direct children.
    pub fn journals_at_current_level(&self) -> Vec<&Journal> {
        self.items.iter().filter_map(Item::as_journal).collect()
    }

    /// Papers among the direct children.
    pub fn papers_at_current_level(&self) -> Vec<&Paper> {
        self.items.iter().filter_map(Item::as_paper).collect()
    }

    /// Collections among the direct children.
    pub fn direct_subcollections(&self) -> Vec<&Collection> {
        self.items.iter().filter_map(Item::as_collection).collect()
    }

    /// Every book in the whole hierarchy, in leaf encounter order.
    pub fn all_books(&self) -> Vec<&Book> {
        self.leaves().into_iter().filter_map(Item::as_book).collect()
    }

    /// Every journal in the whole hierarchy, in leaf encounter order.
    pub fn all_journals(&self) -> Vec<&Journal> {
        self.leaves()
            .into_iter()
            .filter_map(Item::as_journal)
            .collect()
    }

    /// Every paper in the whole hierarchy, in leaf encounter order.
    pub fn all_papers(&self) -> Vec<&Paper> {
        self.leaves()
            .into_iter()
            .filter_map(Item::as_paper)
            .collect()
    }

    /// Every nested collection in the whole hierarchy, in pre-order.
    pub fn all_subcollections(&self) -> Vec<&Collection> {
        let mut subcollections = Vec::new();
        self.collect_subcollections(&mut subcollections);
        subcollections
    }

    fn collect_subcollections<'a>(&'a self, out: &mut Vec<&'a Collection>) {
        for item in &self.items {
            if let Item::Collection(sub) = item {
                out.push(sub);
                sub.collect_subcollections(out);
            }
        }
    }

    /// The first direct child collection with the given title, for
    /// mutation through the owning parent.
    pub fn find_subcollection_mut(&mut self, title: &str) -> Option<&mut Collection> {
        self.items.iter_mut().find_map(|item| match item {
            Item::Collection(sub) if sub.title() == title => Some(sub),
            _ => None,
        })
    }

    /// Formatted description with the direct child count, e.g.
    /// `Collection: Readings by me (2024), 3 item(s)`.
    pub fn summary(&self) -> String {
        format!(
            "Collection: {} by {} ({}), {} item(s)",
            self.title,
            self.author,
            self.year,
            self.items.len()
        )
    }

    /// Lazy depth-first iterator over the leaves of this subtree.
    pub fn depth_first(&self) -> DepthFirstIter<'_> {
        DepthFirstIter::new(self)
    }
}

impl Aggregate for Collection {
    fn iter(&self) -> LevelIter<'_> {
        LevelIter::new(self)
    }

    fn item_at(&self, index: usize) -> Result<&Item, DomainError> {
        Collection::item_at(self, index)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Item;
    type IntoIter = LevelIter<'a>;

    fn into_iter(self) -> LevelIter<'a> {
        Aggregate::iter(self)
    }
}
