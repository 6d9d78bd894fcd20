use std::sync::Arc;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::llm::orchestrator::Sleeper;
use crate::llm::schema::Schemas;
use crate::llm::CompletionTransport;
use crate::persona::catalog::PersonaCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The persona catalog and compiled schemas are built once at startup and
/// shared read-only; the cache and LLM transport sit behind trait objects so
/// tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<dyn CacheStore>,
    pub llm: Arc<dyn CompletionTransport>,
    pub sleeper: Arc<dyn Sleeper>,
    pub catalog: Arc<PersonaCatalog>,
    pub schemas: Arc<Schemas>,
    pub config: Config,
}
