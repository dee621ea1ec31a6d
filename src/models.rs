use serde::{Deserialize, Serialize};

/// Incoming body for `POST /score-resume`.
///
/// Absent fields deserialize to empty strings so that "missing" and "empty"
/// hit the same validation branch in the handler.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub jobdesc: String,
}

/// Structured resume-to-job-description match assessment.
///
/// This is the exact response shape for `POST /score-resume`. Deserialization
/// drops any field outside this shape, which scrubs the `realismFlags`
/// artifact the model sometimes appends to its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    /// Final ATS score, 0-100.
    #[serde(deserialize_with = "score_in_range")]
    pub score: u8,
    /// Clear, job-relevant strengths.
    pub strengths: Vec<String>,
    /// Gaps or mismatches in the resume.
    pub weaknesses: Vec<String>,
    /// Specific changes that would increase the score.
    pub suggestions: Vec<String>,
    /// Important skills from the job description found in the resume.
    pub matched_skills: Vec<String>,
    /// Key skills missing or weakly represented.
    pub missing_skills: Vec<String>,
}

/// Rejects scores outside the declared 0-100 range. An out-of-range value
/// from the model is a parse failure and ends in the fallback report.
fn score_in_range<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let score = u8::deserialize(deserializer)?;
    if score > 100 {
        return Err(serde::de::Error::custom(format!(
            "score {} outside range 0-100",
            score
        )));
    }
    Ok(score)
}

impl ScoreReport {
    /// The zeroed report returned whenever the completion call or its parsing
    /// fails. Callers always get a renderable object, never a broken state.
    pub fn fallback() -> Self {
        Self {
            score: 0,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            suggestions: Vec::new(),
            matched_skills: Vec::new(),
            missing_skills: Vec::new(),
        }
    }
}
