//! Library orchestration service
//!
//! Owns named root collections and forwards catalog operations to the
//! domain, logging along the way. Every fallible operation returns the
//! shielded error type; internal detail never crosses this boundary.

use std::collections::HashMap;

use chrono::{Datelike, Utc};
use octavo_domain::{Collection, DepthFirstIter, Item};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::CatalogError;
use crate::factory::{DefaultFactory, EntryType, ItemFactory, Params};
use crate::shield::{shield, ShieldedError};

/// A named root collection registered with the service.
#[derive(Debug)]
pub struct Shelf {
    id: String,
    root: Collection,
}

impl Shelf {
    fn new(root: Collection) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            root,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn root(&self) -> &Collection {
        &self.root
    }
}

/// Application-level service orchestrating catalog operations.
pub struct LibraryService {
    factory: Box<dyn ItemFactory>,
    shelves: HashMap<String, Shelf>,
}

impl LibraryService {
    /// Create a service around an injected factory.
    pub fn new(factory: Box<dyn ItemFactory>) -> Self {
        Self {
            factory,
            shelves: HashMap::new(),
        }
    }

    /// Register a named root collection curated by `curator`, stamped
    /// with the current year. Returns the shelf id.
    pub fn create_root(&mut self, name: &str, curator: &str) -> Result<String, ShieldedError> {
        match self.try_create_root(name, curator) {
            Ok(id) => {
                info!(root = name, id = %id, "root collection registered");
                Ok(id)
            }
            Err(err) => {
                warn!(root = name, error = %err, "failed to register root collection");
                Err(shield(err))
            }
        }
    }

    fn try_create_root(&mut self, name: &str, curator: &str) -> Result<String, CatalogError> {
        if self.shelves.contains_key(name) {
            return Err(CatalogError::DuplicateRoot {
                name: name.to_string(),
            });
        }
        let root = Collection::new(name, curator, Utc::now().year())?;
        let shelf = Shelf::new(root);
        let id = shelf.id.clone();
        self.shelves.insert(name.to_string(), shelf);
        Ok(id)
    }

    /// Create an item via the factory and append it under `root`, inside
    /// the nested collection addressed by `path` (an empty path targets
    /// the root itself). Returns the new item's summary.
    pub fn add_item(
        &mut self,
        root: &str,
        path: &[&str],
        kind: EntryType,
        params: &Params,
    ) -> Result<String, ShieldedError> {
        match self.try_add_item(root, path, kind, params) {
            Ok(summary) => {
                info!(root, kind = %kind, item = %summary, "item added");
                Ok(summary)
            }
            Err(err) => {
                warn!(root, kind = %kind, error = %err, "failed to add item");
                Err(shield(err))
            }
        }
    }

    fn try_add_item(
        &mut self,
        root: &str,
        path: &[&str],
        kind: EntryType,
        params: &Params,
    ) -> Result<String, CatalogError> {
        let item = self.factory.create(kind, params)?;
        let summary = item.summary();
        let target = self.collection_at_mut(root, path)?;
        target.add_item(item);
        Ok(summary)
    }

    /// Nest a new empty collection under `root` at `path`.
    pub fn add_collection(
        &mut self,
        root: &str,
        path: &[&str],
        title: &str,
        curator: &str,
        year: i32,
    ) -> Result<(), ShieldedError> {
        match self.try_add_collection(root, path, title, curator, year) {
            Ok(()) => {
                info!(root, collection = title, "collection added");
                Ok(())
            }
            Err(err) => {
                warn!(root, collection = title, error = %err, "failed to add collection");
                Err(shield(err))
            }
        }
    }

    fn try_add_collection(
        &mut self,
        root: &str,
        path: &[&str],
        title: &str,
        curator: &str,
        year: i32,
    ) -> Result<(), CatalogError> {
        let sub = Collection::new(title, curator, year)?;
        let target = self.collection_at_mut(root, path)?;
        target.add_item(sub);
        Ok(())
    }

    /// Direct children of the named root, in insertion order.
    pub fn items_at_current_level(&self, root: &str) -> Result<&[Item], ShieldedError> {
        self.root(root)
            .map(Collection::items_at_current_level)
            .map_err(shield)
    }

    /// Every leaf under the named root, in depth-first encounter order.
    pub fn leaves(&self, root: &str) -> Result<Vec<&Item>, ShieldedError> {
        self.root(root).map(Collection::leaves).map_err(shield)
    }

    /// Summaries of every leaf under the named root.
    pub fn leaf_summaries(&self, root: &str) -> Result<Vec<String>, ShieldedError> {
        Ok(self
            .leaves(root)?
            .into_iter()
            .map(|item| item.summary())
            .collect())
    }

    /// Number of leaves under the named root.
    pub fn count_leaves(&self, root: &str) -> Result<usize, ShieldedError> {
        self.root(root).map(Collection::count_leaves).map_err(shield)
    }

    /// Lazy depth-first iterator over the leaves of the named root.
    pub fn iter_leaves(&self, root: &str) -> Result<DepthFirstIter<'_>, ShieldedError> {
        self.root(root).map(Collection::depth_first).map_err(shield)
    }

    /// The registered shelf for `name`, if any.
    pub fn shelf(&self, name: &str) -> Option<&Shelf> {
        self.shelves.get(name)
    }

    /// Names of every registered root collection.
    pub fn roots(&self) -> Vec<&str> {
        self.shelves.keys().map(String::as_str).collect()
    }

    fn root(&self, name: &str) -> Result<&Collection, CatalogError> {
        self.shelves
            .get(name)
            .map(|shelf| &shelf.root)
            .ok_or_else(|| CatalogError::UnknownRoot {
                name: name.to_string(),
            })
    }

    /// Walk `path` from the named root, one direct subcollection title
    /// per segment.
    fn collection_at_mut(
        &mut self,
        root: &str,
        path: &[&str],
    ) -> Result<&mut Collection, CatalogError> {
        let shelf = self
            .shelves
            .get_mut(root)
            .ok_or_else(|| CatalogError::UnknownRoot {
                name: root.to_string(),
            })?;
        let mut current = &mut shelf.root;
        for title in path {
            let parent = current.title().to_string();
            current = current.find_subcollection_mut(title).ok_or_else(|| {
                CatalogError::UnknownCollection {
                    parent,
                    title: title.to_string(),
                }
            })?;
        }
        Ok(current)
    }
}

impl Default for LibraryService {
    fn default() -> Self {
        Self::new(Box::new(DefaultFactory::new()))
    }
}
