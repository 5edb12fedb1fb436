use std::path::PathBuf;
use std::sync::Arc;

use crate::config::ServerConfig;

/// Handed to every handler through `State<AppState>`; clones share the pool
/// and configuration.
#[derive(Clone)]
pub struct AppState {
    pub pool: agora_db::DbPool,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Absolute location of a stored document from its `stored_path`.
    pub fn document_path(&self, stored_path: &str) -> PathBuf {
        self.config.document_storage_dir.join(stored_path)
    }
}
