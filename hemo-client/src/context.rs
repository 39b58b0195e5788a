//! Application context
//!
//! Built once at startup and handed to callers instead of process-wide
//! singletons.

use crate::config::ClientConfig;
use crate::error::ApiResult;
use crate::http::ApiClient;
use crate::session::SessionCache;
use crate::storage::{FileStore, SessionStore};
use std::sync::Arc;

#[derive(Debug)]
pub struct AppContext {
    pub api: Arc<ApiClient>,
    pub session: SessionCache,
}

impl AppContext {
    /// File-backed session under `config.storage_dir`
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        Self::with_store(config, Arc::new(FileStore::new(&config.storage_dir)))
    }

    pub fn with_store(config: &ClientConfig, store: Arc<dyn SessionStore>) -> ApiResult<Self> {
        let api = Arc::new(ApiClient::new(config, store.clone())?);
        let session = SessionCache::new(api.clone(), store);
        tracing::debug!(base_url = %config.base_url, "Client context ready");
        Ok(Self { api, session })
    }
}
