//! Rendering of ranking results for the terminal.

use std::path::Path;

use anyhow::{Context, Result};

use crate::api::RankResponse;

/// Formats the score as a percentage with the analysis below it.
pub fn render_report(response: &RankResponse) -> String {
    format!(
        "Similarity score: {:.2}%\n\nAnalysis:\n{}",
        response.similarity_score * 100.0,
        response.llm_analysis
    )
}

/// Writes the raw response JSON to a file (pretty-printed).
pub fn write_json(path: &Path, response: &RankResponse) -> Result<()> {
    let json = serde_json::to_string_pretty(response).context("Failed to serialize results")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_formats_score_as_percentage() {
        let response = RankResponse {
            similarity_score: 0.8734,
            llm_analysis: "Strong backend profile.".to_string(),
        };
        let report = render_report(&response);
        assert!(report.contains("87.34%"));
        assert!(report.contains("Strong backend profile."));
    }

    #[test]
    fn test_report_handles_degraded_analysis() {
        let response = RankResponse {
            similarity_score: 0.5,
            llm_analysis: "Error generating analysis: no API credential configured".to_string(),
        };
        let report = render_report(&response);
        assert!(report.contains("50.00%"));
        assert!(report.contains("Error generating analysis"));
    }
}
