/*!
 * Mock store context for tests that need to observe scope resolution
 */

use std::sync::atomic::{AtomicUsize, Ordering};

use trstore::StoreContext;

/// Store context that records how often it was consulted
#[derive(Debug, Default)]
pub struct MockStoreContext {
    store_id: i64,
    calls: AtomicUsize,
}

impl MockStoreContext {
    pub fn new(store_id: i64) -> Self {
        Self {
            store_id,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times the current store id was requested
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StoreContext for MockStoreContext {
    fn current_store_id(&self) -> i64 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.store_id
    }
}
