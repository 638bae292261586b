use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::ServerConfig;
use marquee_store::MovieStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The movie catalog store (file-backed in production, in-memory in tests).
    pub store: Arc<dyn MovieStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Process-wide lock serializing every read-modify-write cycle of the
    /// mutating handlers, so concurrent writes cannot lose updates. Readers
    /// do not take it; the store's atomic replace keeps reads consistent.
    pub write_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn MovieStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}
