use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::ranking::embedding::Embedder;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable embedding backend. Default: `SentenceEmbedder` (fastembed,
    /// all-MiniLM-L6-v2). Loaded once at startup, read-only afterwards.
    pub embedder: Arc<dyn Embedder>,
    pub llm: LlmClient,
}
