//! End-to-end service tests
//!
//! Drives the factory, the named root registry and the shielding layer
//! together over a nested catalog.

use octavo_core::{DefaultFactory, EntryType, ItemFactory, LibraryService, Params};

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn seeded_service() -> LibraryService {
    let mut service = LibraryService::default();
    service.create_root("library", "master").unwrap();
    service
        .add_item(
            "library",
            &[],
            EntryType::Book,
            &params(&[
                ("title", "Clean Code"),
                ("author", "Robert C. Martin"),
                ("year", "2008"),
                ("isbn", "9780132350884"),
                ("pages", "464"),
            ]),
        )
        .unwrap();
    service
        .add_collection("library", &[], "ML", "master", 2024)
        .unwrap();
    service
        .add_item(
            "library",
            &["ML"],
            EntryType::Paper,
            &params(&[
                ("title", "Attention Is All You Need"),
                ("author", "Vaswani et al."),
                ("year", "2017"),
                ("venue", "NeurIPS"),
            ]),
        )
        .unwrap();
    service
}

#[test]
fn nested_catalog_reads_back_in_order() {
    let service = seeded_service();

    // shallow view: the book, then the nested collection
    let level = service.items_at_current_level("library").unwrap();
    assert_eq!(level.len(), 2);
    assert_eq!(level[0].title(), "Clean Code");
    assert_eq!(level[1].title(), "ML");

    // deep view: leaves only, encounter order
    assert_eq!(
        service.leaf_summaries("library").unwrap(),
        vec![
            "Book: Clean Code by Robert C. Martin (2008)",
            "Paper @ NeurIPS: Attention Is All You Need (2017)",
        ]
    );
    assert_eq!(service.count_leaves("library").unwrap(), 2);
}

#[test]
fn lazy_iteration_matches_eager_listing() {
    let service = seeded_service();

    let eager = service.leaf_summaries("library").unwrap();
    let lazy: Vec<String> = service
        .iter_leaves("library")
        .unwrap()
        .map(|item| item.summary())
        .collect();
    assert_eq!(eager, lazy);
}

#[test]
fn deeply_nested_paths() {
    let mut service = seeded_service();
    service
        .add_collection("library", &["ML"], "Transformers", "master", 2024)
        .unwrap();
    service
        .add_item(
            "library",
            &["ML", "Transformers"],
            EntryType::Paper,
            &params(&[("title", "BERT"), ("author", "Devlin et al."), ("year", "2019")]),
        )
        .unwrap();

    assert_eq!(service.count_leaves("library").unwrap(), 3);
    let summaries = service.leaf_summaries("library").unwrap();
    assert_eq!(summaries.last().unwrap(), "Paper: BERT (2019)");
}

#[test]
fn independent_roots_do_not_mix() {
    let mut service = seeded_service();
    service.create_root("archive", "curator").unwrap();
    service
        .add_item(
            "archive",
            &[],
            EntryType::Journal,
            &params(&[("title", "Annalen der Physik"), ("author", "Wiley"), ("year", "1905")]),
        )
        .unwrap();

    assert_eq!(service.count_leaves("library").unwrap(), 2);
    assert_eq!(service.count_leaves("archive").unwrap(), 1);
}

#[test]
fn failures_leave_the_catalog_untouched() {
    let mut service = seeded_service();

    let before = service.leaf_summaries("library").unwrap();
    let err = service
        .add_item(
            "library",
            &[],
            EntryType::Book,
            &params(&[("title", "Broken"), ("author", "A"), ("year", "-1")]),
        )
        .unwrap_err();
    assert_eq!(
        err.user_message(),
        "Invalid input. Please check the provided fields."
    );
    assert_eq!(service.leaf_summaries("library").unwrap(), before);
}

#[test]
fn factory_can_be_used_standalone() {
    let factory = DefaultFactory::new();
    let item = factory
        .create(
            EntryType::Journal,
            &params(&[
                ("title", "ACM Transactions on Software Engineering"),
                ("author", "ACM"),
                ("year", "2023"),
                ("issue", "Vol. 42, No. 3"),
            ]),
        )
        .unwrap();
    assert_eq!(
        item.summary(),
        "Journal: ACM Transactions on Software Engineering [Vol. 42, No. 3] (2023)"
    );
}
