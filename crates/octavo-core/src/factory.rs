//! Item construction from tagged parameter maps
//!
//! Callers hand over an entry kind plus a string field map; the factory
//! validates the fields and builds the typed item. The factory is a plain
//! value injected into the service, not process-wide state.

use std::collections::HashMap;
use std::fmt;

use octavo_domain::{Book, DomainError, Item, Journal, Paper};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind tag for factory-constructed leaf entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Book,
    Journal,
    Paper,
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryType::Book => "book",
            EntryType::Journal => "journal",
            EntryType::Paper => "paper",
        };
        f.write_str(name)
    }
}

/// Errors from factory construction.
#[derive(Debug, Error)]
pub enum FactoryError {
    #[error("missing required parameter: {0}")]
    MissingField(&'static str),

    #[error("value of {field} must be a non-negative integer, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Field map for factory input. Unknown keys are ignored.
pub type Params = HashMap<String, String>;

/// Validated construction of catalog items.
pub trait ItemFactory {
    /// Build an item of the given kind from the field map.
    fn create(&self, kind: EntryType, params: &Params) -> Result<Item, FactoryError>;
}

/// Default factory: `title` and `author` are required, `year` defaults to
/// 0, kind-specific fields (`isbn`, `pages`, `issue`, `doi`, `venue`)
/// default to empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultFactory;

impl DefaultFactory {
    pub fn new() -> Self {
        Self
    }
}

fn required<'a>(params: &'a Params, key: &'static str) -> Result<&'a str, FactoryError> {
    match params.get(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(FactoryError::MissingField(key)),
    }
}

fn optional<'a>(params: &'a Params, key: &str) -> &'a str {
    params.get(key).map(String::as_str).unwrap_or("")
}

fn non_negative(params: &Params, key: &'static str) -> Result<i32, FactoryError> {
    let raw = params.get(key).map(String::as_str).unwrap_or("0");
    match raw.trim().parse::<i32>() {
        Ok(value) if value >= 0 => Ok(value),
        _ => Err(FactoryError::InvalidNumber {
            field: key,
            value: raw.to_string(),
        }),
    }
}

impl ItemFactory for DefaultFactory {
    fn create(&self, kind: EntryType, params: &Params) -> Result<Item, FactoryError> {
        let title = required(params, "title")?;
        let author = required(params, "author")?;
        let year = non_negative(params, "year")?;

        let item = match kind {
            EntryType::Book => Book::new(
                title,
                author,
                year,
                optional(params, "isbn"),
                non_negative(params, "pages")?,
            )?
            .into(),
            EntryType::Journal => {
                Journal::new(title, author, year, optional(params, "issue"))?.into()
            }
            EntryType::Paper => Paper::new(
                title,
                author,
                year,
                optional(params, "doi"),
                optional(params, "venue"),
            )?
            .into(),
        };
        Ok(item)
    }
}
