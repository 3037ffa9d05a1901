/*!
 * # trstore - Translation Record Store
 *
 * A Rust library and CLI for storing and retrieving translation records in
 * SQLite, scoped per storefront.
 *
 * ## Features
 *
 * - Create, read, update and delete translation records
 * - Open-ended field mapping: any field may be sent and returned
 * - Store-scope defaulting from the caller's active store context
 * - JSON in/out for the create/update/get surface
 * - Versioned SQLite schema with an in-memory mode for tests
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `database`: SQLite persistence:
 *   - `database::connection`: Connection handling and async access
 *   - `database::schema`: Schema initialization and versioning
 *   - `database::models`: The translation record model
 *   - `database::resource`: The backing resource performing reads/writes
 * - `repository`: The translation record gateway
 * - `store_context`: Store scope resolution
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod database;
pub mod errors;
pub mod repository;
pub mod store_context;

// Re-export main types for easier usage
pub use app_config::Config;
pub use database::{DatabaseConnection, TranslationRecord, TranslationResource};
pub use errors::TranslationError;
pub use repository::TranslationRepository;
pub use store_context::{FixedStoreContext, StoreContext};
