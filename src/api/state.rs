// src/api/state.rs
use reqwest::Client;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::providers::CompletionProvider;
use crate::providers::openrouter::OpenRouterProvider;

/// Shared per-process state. Constructed once at startup and cloned into
/// each worker; the pool and provider are safe for concurrent use across
/// independent requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db_pool: SqlitePool,
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(config: AppConfig, db_pool: SqlitePool) -> Self {
        let provider = OpenRouterProvider::new(Client::new(), config.provider.clone());
        Self {
            config: Arc::new(config),
            db_pool,
            provider: Arc::new(provider),
        }
    }

    /// Like `new`, but with an injected provider. Used by tests to swap in
    /// a stub.
    pub fn with_provider(
        config: AppConfig,
        db_pool: SqlitePool,
        provider: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            db_pool,
            provider,
        }
    }
}
