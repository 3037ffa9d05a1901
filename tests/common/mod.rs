/*!
 * Common test utilities for the trstore test suite
 */

use std::sync::Arc;

use anyhow::Result;
use tempfile::TempDir;

use trstore::{FixedStoreContext, TranslationRepository};

// Re-export the mock store context module
pub mod mock_context;

/// Store scope used by test repositories unless a test supplies its own
pub const TEST_STORE_ID: i64 = 1;

/// Initialize logging for tests; safe to call from every test
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates an in-memory repository with the default test store context
pub fn create_test_repository() -> TranslationRepository {
    TranslationRepository::new_in_memory(Arc::new(FixedStoreContext::new(TEST_STORE_ID)))
        .expect("Failed to create in-memory repository")
}

/// Creates an in-memory repository with a specific store context
pub fn create_test_repository_with_store(store_id: i64) -> TranslationRepository {
    TranslationRepository::new_in_memory(Arc::new(FixedStoreContext::new(store_id)))
        .expect("Failed to create in-memory repository")
}

/// A sample JSON payload for create tests
pub fn sample_payload() -> &'static str {
    r#"{"original": "Hello", "translated": "Bonjour", "locale": "fr_FR"}"#
}
