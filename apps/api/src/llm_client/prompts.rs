// All LLM prompt constants for the ranking service.

/// HR critique prompt template. Replace `{job_description}` and `{resume}`
/// before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"As an HR professional, analyze the following resume against the job description.

Job Description:
{job_description}

Resume:
{resume}

Please provide a comprehensive HR-style analysis including:
1. Overall match assessment
2. Key strengths
3. Potential gaps or concerns
4. Recommendations

Be professional and constructive in your analysis."#;

/// Builds the analysis prompt from the extracted texts.
pub fn build_analysis_prompt(resume_text: &str, jd_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_description}", jd_text)
        .replace("{resume}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_both_texts() {
        let prompt = build_analysis_prompt("10 years of Rust", "Looking for a Rust engineer");
        assert!(prompt.contains("10 years of Rust"));
        assert!(prompt.contains("Looking for a Rust engineer"));
    }

    #[test]
    fn test_prompt_places_jd_before_resume() {
        let prompt = build_analysis_prompt("RESUME_MARKER", "JD_MARKER");
        let jd_pos = prompt.find("JD_MARKER").unwrap();
        let resume_pos = prompt.find("RESUME_MARKER").unwrap();
        assert!(jd_pos < resume_pos);
    }

    #[test]
    fn test_no_placeholders_left_behind() {
        let prompt = build_analysis_prompt("resume", "jd");
        assert!(!prompt.contains("{job_description}"));
        assert!(!prompt.contains("{resume}"));
    }
}
