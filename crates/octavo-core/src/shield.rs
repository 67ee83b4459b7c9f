//! Error shielding
//!
//! Maps internal failures to messages safe to put in front of a user,
//! keeping the technical cause attached for logs. Classifiers are applied
//! in order; the first match wins, with a generic fallback for anything
//! unrecognized.

use octavo_domain::DomainError;
use thiserror::Error;
use tracing::error;

use crate::error::CatalogError;

/// User-facing error: a safe message up front, the technical cause kept
/// behind it for diagnostics.
#[derive(Debug, Error)]
#[error("{user_message}")]
pub struct ShieldedError {
    user_message: String,
    #[source]
    cause: CatalogError,
}

impl ShieldedError {
    /// The message safe to display to an end user.
    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    /// The internal cause, for logging and debugging.
    pub fn cause(&self) -> &CatalogError {
        &self.cause
    }
}

type Classifier = fn(&CatalogError) -> Option<String>;

/// Tried in order; more specific classifiers come first.
const CLASSIFIERS: &[Classifier] = &[invalid_input, missing_target];

fn invalid_input(cause: &CatalogError) -> Option<String> {
    match cause {
        CatalogError::InvalidInput(_) | CatalogError::Domain(DomainError::InvalidArgument(_)) => {
            Some("Invalid input. Please check the provided fields.".to_string())
        }
        _ => None,
    }
}

fn missing_target(cause: &CatalogError) -> Option<String> {
    match cause {
        CatalogError::UnknownRoot { name } => Some(format!("No library named {:?}.", name)),
        CatalogError::UnknownCollection { title, .. } => {
            Some(format!("No collection named {:?}.", title))
        }
        CatalogError::DuplicateRoot { name } => {
            Some(format!("A library named {:?} already exists.", name))
        }
        _ => None,
    }
}

/// Translate an internal error into its user-facing form.
pub fn shield(cause: CatalogError) -> ShieldedError {
    let user_message = CLASSIFIERS
        .iter()
        .find_map(|classify| classify(&cause))
        .unwrap_or_else(|| {
            error!(error = %cause, "unclassified internal error");
            "Unexpected error, please try again later.".to_string()
        });
    ShieldedError {
        user_message,
        cause,
    }
}
