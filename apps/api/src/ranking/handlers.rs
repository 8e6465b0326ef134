//! Axum route handler for the ranking endpoint.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::ranking::embedding::EmbedError;
use crate::ranking::extract::extract_text;
use crate::ranking::similarity::{cosine_similarity, round4};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub similarity_score: f64,
    pub llm_analysis: String,
}

/// POST /rank
///
/// Multipart form with two PDF parts: `resume` and `job_description`.
/// Sequential pipeline: extract → embed → score → analyze. An analyzer
/// failure degrades into an error string; it never aborts the response.
pub async fn handle_rank(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<RankResponse>, AppError> {
    let mut resume_bytes: Option<Bytes> = None;
    let mut jd_bytes: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                resume_bytes = Some(read_part(field, "resume").await?);
            }
            Some("job_description") => {
                jd_bytes = Some(read_part(field, "job_description").await?);
            }
            // Unknown parts are ignored, matching the gateway's pass-through.
            _ => {}
        }
    }

    let resume_bytes =
        resume_bytes.ok_or_else(|| AppError::Validation("missing file part 'resume'".to_string()))?;
    let jd_bytes = jd_bytes
        .ok_or_else(|| AppError::Validation("missing file part 'job_description'".to_string()))?;

    info!("Extracting text from PDFs");
    let resume_text = extract_in_blocking(resume_bytes).await?;
    let jd_text = extract_in_blocking(jd_bytes).await?;

    if resume_text.is_empty() || jd_text.is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from PDF files".to_string(),
        ));
    }

    info!("Generating embeddings");
    let resume_embedding = state
        .embedder
        .embed(&resume_text)
        .await
        .map_err(embed_error)?;
    let jd_embedding = state.embedder.embed(&jd_text).await.map_err(embed_error)?;

    info!("Calculating similarity");
    let similarity_score = round4(cosine_similarity(&resume_embedding, &jd_embedding));

    info!("Generating LLM analysis");
    let llm_analysis = match state.llm.analyze(&resume_text, &jd_text).await {
        Ok(text) => text,
        Err(e) => {
            error!("Error generating LLM analysis: {e}");
            format!("Error generating analysis: {e}")
        }
    };

    Ok(Json(RankResponse {
        similarity_score,
        llm_analysis,
    }))
}

async fn read_part(field: axum::extract::multipart::Field<'_>, name: &str) -> Result<Bytes, AppError> {
    field
        .bytes()
        .await
        .map_err(|e| AppError::Validation(format!("could not read file part '{name}': {e}")))
}

/// PDF parsing is CPU-bound; keep it off the async runtime.
async fn extract_in_blocking(bytes: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || extract_text(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?
        .map_err(|e| AppError::Extraction(e.to_string()))
}

fn embed_error(e: EmbedError) -> AppError {
    match e {
        EmbedError::EmptyInput => AppError::Validation(e.to_string()),
        EmbedError::Backend(msg) => AppError::Embedding(msg),
    }
}
