/*!
 * Database module for persistent storage of translation records.
 *
 * This module provides SQLite-based persistence for:
 * - Translation records with an open-ended field mapping
 * - Schema initialization and versioning
 */

pub mod schema;
pub mod connection;
pub mod resource;
pub mod models;

// Re-export main types
pub use connection::DatabaseConnection;
pub use models::TranslationRecord;
pub use resource::TranslationResource;
