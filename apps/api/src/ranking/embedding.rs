//! Sentence embeddings: pluggable, trait-based backend behind `AppState`.
//!
//! Default: `SentenceEmbedder` (fastembed, all-MiniLM-L6-v2). The model is
//! loaded once at startup and only read afterwards, so a single handle is
//! shared across concurrent requests. Inference is CPU-bound and runs on the
//! blocking pool.

use std::sync::Arc;

use async_trait::async_trait;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use thiserror::Error;

/// The sentence-embedding model used for all similarity scoring.
/// Hardcoded; both texts must always come from the same model.
pub const MODEL_NAME: &str = "all-MiniLM-L6-v2";

/// Output dimension of all-MiniLM-L6-v2.
pub const EMBEDDING_DIM: usize = 384;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("text cannot be empty")]
    EmptyInput,

    #[error("embedding backend error: {0}")]
    Backend(String),
}

/// The embedding trait. Implement this to swap backends without touching the
/// ranking handler.
///
/// Carried in `AppState` as `Arc<dyn Embedder>`.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embeds a single text into a fixed-dimension vector.
    /// Empty or whitespace-only input fails before reaching the model.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError>;
}

/// Rejects input the model should never see.
pub fn validate_input(text: &str) -> Result<(), EmbedError> {
    if text.trim().is_empty() {
        return Err(EmbedError::EmptyInput);
    }
    Ok(())
}

/// In-process fastembed backend.
pub struct SentenceEmbedder {
    model: Arc<TextEmbedding>,
}

impl SentenceEmbedder {
    /// Loads the model. Downloads weights on first run; blocking, so call it
    /// during startup, not per request.
    pub fn new() -> anyhow::Result<Self> {
        let model = TextEmbedding::try_new(InitOptions {
            model_name: EmbeddingModel::AllMiniLML6V2,
            show_download_progress: false,
            ..Default::default()
        })?;
        Ok(Self {
            model: Arc::new(model),
        })
    }
}

#[async_trait]
impl Embedder for SentenceEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        validate_input(text)?;

        let model = Arc::clone(&self.model);
        let text = text.to_string();

        let mut vectors = tokio::task::spawn_blocking(move || model.embed(vec![text], None))
            .await
            .map_err(|e| EmbedError::Backend(e.to_string()))?
            .map_err(|e| EmbedError::Backend(e.to_string()))?;

        let vector = vectors
            .pop()
            .ok_or_else(|| EmbedError::Backend("model returned no vectors".to_string()))?;
        debug_assert_eq!(vector.len(), EMBEDDING_DIM);
        Ok(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(validate_input(""), Err(EmbedError::EmptyInput)));
    }

    #[test]
    fn test_whitespace_only_input_rejected() {
        assert!(matches!(
            validate_input("  \n\t  "),
            Err(EmbedError::EmptyInput)
        ));
    }

    #[test]
    fn test_nonempty_input_accepted() {
        assert!(validate_input("Senior Rust engineer, 5 years").is_ok());
    }
}
