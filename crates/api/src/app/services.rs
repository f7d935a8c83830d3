//! Store wiring: pick the key-value backend from the environment.

use std::sync::Arc;

use stockroom_store::{InventoryStore, MemoryInventoryStore};

/// The store handle shared by all request handlers.
///
/// Constructed once at startup and injected via `Extension`; no process-wide
/// singleton, so tests can wire their own backend.
pub type SharedStore = Arc<dyn InventoryStore>;

/// Build the store from environment variables.
///
/// `USE_REDIS=true` selects the Redis backend (`REDIS_URL`, default
/// `redis://localhost:6379`); anything else gets the in-memory store.
pub fn build_store() -> SharedStore {
    let use_redis = std::env::var("USE_REDIS")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_redis {
        #[cfg(feature = "redis")]
        {
            let redis_url = std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string());
            match stockroom_store::RedisInventoryStore::new(&redis_url) {
                Ok(store) => {
                    tracing::info!(redis_url = %redis_url, "using redis inventory store");
                    return Arc::new(store);
                }
                Err(e) => {
                    tracing::warn!("failed to open redis store ({e}), falling back to in-memory");
                }
            }
        }
        #[cfg(not(feature = "redis"))]
        {
            tracing::warn!("USE_REDIS=true but redis feature not enabled, falling back to in-memory");
        }
    }

    tracing::info!("using in-memory inventory store");
    Arc::new(MemoryInventoryStore::new())
}
