//! Shared tree builders for the traversal tests.

use octavo_domain::{Book, Collection, Journal, Paper};

pub fn book(title: &str, author: &str, year: i32) -> Book {
    Book::new(title, author, year, "", 0).unwrap()
}

pub fn journal(title: &str, issue: &str) -> Journal {
    Journal::new(title, "Editorial Board", 2020, issue).unwrap()
}

pub fn paper(title: &str, venue: &str) -> Paper {
    Paper::new(title, "Authors", 2021, "", venue).unwrap()
}

/// The reference scenario: root "R" holding book "B1" and a nested
/// collection "Sub" holding only paper "P1".
pub fn reference_catalog() -> Collection {
    let mut sub = Collection::new("Sub", "curator", 2024).unwrap();
    sub.add_item(paper("P1", ""));

    let mut root = Collection::new("R", "curator", 2024).unwrap();
    root.add_item(book("B1", "Writer", 2008));
    root.add_item(sub);
    root
}

/// A wider tree mixing all leaf kinds, empty subtrees and three levels of
/// nesting. Leaf encounter order: B1, J1, P1, P2, B2, J2.
pub fn mixed_catalog() -> Collection {
    let mut inner = Collection::new("Inner", "curator", 2024).unwrap();
    inner.add_item(paper("P1", "ICSE"));
    inner.add_item(paper("P2", ""));

    let mut middle = Collection::new("Middle", "curator", 2024).unwrap();
    middle.add_item(journal("J1", "Vol. 2"));
    middle.add_item(inner);
    middle.add_item(book("B2", "Writer", 1999));

    let mut root = Collection::new("Root", "curator", 2024).unwrap();
    root.add_item(book("B1", "Writer", 2008));
    root.add_item(Collection::new("Unused", "curator", 2024).unwrap());
    root.add_item(middle);
    root.add_item(journal("J2", ""));
    root
}
