//! HTTP client for the API gateway: auth endpoints plus the ranking upload.

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

const REGISTER_ENDPOINT: &str = "/auth/register";
const LOGIN_ENDPOINT: &str = "/auth/login";
const RANK_ENDPOINT: &str = "/resume/rank";
const HEALTH_ENDPOINT: &str = "/health";

const AUTH_TIMEOUT_SECS: u64 = 10;
const HEALTH_TIMEOUT_SECS: u64 = 3;
// Ranking waits on PDF extraction, the embedding model, and the LLM upstream.
const RANK_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Ranking result. The gateway contract is snake_case only.
#[derive(Debug, Serialize, Deserialize)]
pub struct RankResponse {
    pub similarity_score: f64,
    pub llm_analysis: String,
}

pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(RANK_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthResponse> {
        self.auth_request(
            REGISTER_ENDPOINT,
            &serde_json::json!({ "name": name, "email": email, "password": password }),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        self.auth_request(
            LOGIN_ENDPOINT,
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    async fn auth_request(&self, endpoint: &str, body: &serde_json::Value) -> Result<AuthResponse> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Calling gateway: POST {url}");

        let response = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(AUTH_TIMEOUT_SECS))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to reach gateway at {url}"))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .context("Failed to read gateway response")?;

        if !status.is_success() {
            bail!("Gateway returned {status}: {body_text}");
        }

        serde_json::from_str(&body_text)
            .with_context(|| format!("Unexpected auth response: {body_text}"))
    }

    /// Uploads both PDFs to the gateway's ranking route with a bearer token.
    pub async fn rank(
        &self,
        token: &str,
        resume: &Path,
        job_description: &Path,
    ) -> Result<RankResponse> {
        let url = format!("{}{}", self.base_url, RANK_ENDPOINT);
        debug!("Calling gateway: POST {url}");

        let form = Form::new()
            .part("resume", pdf_part(resume).await?)
            .part("job_description", pdf_part(job_description).await?);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("Failed to reach gateway at {url}"))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            bail!("Invalid or expired token. Log in again with `ranker-cli login`.");
        }

        let body_text = response
            .text()
            .await
            .context("Failed to read gateway response")?;

        if !status.is_success() {
            bail!("Ranking failed ({status}): {body_text}");
        }

        serde_json::from_str(&body_text)
            .with_context(|| format!("Unexpected rank response: {body_text}"))
    }

    pub async fn health(&self) -> Result<()> {
        let url = format!("{}{}", self.base_url, HEALTH_ENDPOINT);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(HEALTH_TIMEOUT_SECS))
            .send()
            .await
            .with_context(|| format!("Failed to reach gateway at {url}"))?;

        if !response.status().is_success() {
            bail!("Gateway health check returned {}", response.status());
        }

        Ok(())
    }
}

async fn pdf_part(path: &Path) -> Result<Part> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.pdf")
        .to_string();

    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str("application/pdf")
        .context("Failed to create multipart part")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_response_parses_snake_case() {
        let json = r#"{"similarity_score": 0.8734, "llm_analysis": "Good fit."}"#;
        let response: RankResponse = serde_json::from_str(json).unwrap();
        assert!((response.similarity_score - 0.8734).abs() < f64::EPSILON);
        assert_eq!(response.llm_analysis, "Good fit.");
    }

    #[test]
    fn test_rank_response_rejects_camel_case() {
        // The casing mismatch the old stack papered over is fixed at the
        // source; camelCase responses are a contract violation.
        let json = r#"{"similarityScore": 0.5, "llmAnalysis": "x"}"#;
        assert!(serde_json::from_str::<RankResponse>(json).is_err());
    }

    #[test]
    fn test_auth_response_parses_token() {
        let json = r#"{"token": "jwt-token", "refreshToken": "other", "email": "a@b.c"}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "jwt-token");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = GatewayClient::new("http://localhost:8080/".to_string()).unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
