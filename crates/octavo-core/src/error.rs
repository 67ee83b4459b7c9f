//! Internal error type for the orchestration layer

use octavo_domain::DomainError;
use thiserror::Error;

use crate::factory::FactoryError;

/// Failures inside the orchestration layer.
///
/// These carry technical detail for logs; `shield` maps them to
/// user-facing messages before they leave the service.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] FactoryError),

    #[error("unknown root collection: {name}")]
    UnknownRoot { name: String },

    #[error("root collection already registered: {name}")]
    DuplicateRoot { name: String },

    #[error("no collection named {title:?} under {parent:?}")]
    UnknownCollection { parent: String, title: String },

    #[error(transparent)]
    Domain(#[from] DomainError),
}
