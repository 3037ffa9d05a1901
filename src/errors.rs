/*!
 * Error types for the trstore application.
 *
 * This module contains the typed errors surfaced by the translation
 * repository, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors surfaced by the translation repository
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Requested identifier has no persisted record
    #[error("Translation with id \"{0}\" does not exist")]
    NotFound(i64),

    /// The backing store rejected a save
    #[error("Could not save the translation: {0}")]
    SaveFailed(String),

    /// The backing store rejected a delete
    #[error("Could not delete the translation: {0}")]
    DeleteFailed(String),

    /// A load or serialization failure outside the three contract errors
    #[error("Storage error: {0}")]
    Storage(String),
}

// Utility conversions for error propagation out of the database layer
impl From<anyhow::Error> for TranslationError {
    fn from(error: anyhow::Error) -> Self {
        Self::Storage(error.to_string())
    }
}

impl From<serde_json::Error> for TranslationError {
    fn from(error: serde_json::Error) -> Self {
        Self::Storage(error.to_string())
    }
}
