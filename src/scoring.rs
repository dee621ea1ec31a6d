use crate::completion_client::CompletionClient;
use crate::errors::ScoreError;
use crate::models::ScoreReport;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Fixed scoring rubric sent to the model. `{resume}` and `{jobdesc}` are
/// substituted verbatim; the literal braces in the JSON example survive the
/// substitution untouched.
const PROMPT_TEMPLATE: &str = r#"
You are a highly advanced resume screening AI modeled on Jobscan.io.

Compare the following resume and job description and score it using these exact weights:
- 40% Hard Skills Match (tech stacks, APIs, tools)
- 20% Experience Alignment (relevant past roles, project relevance, years of exp)
- 15% Education Relevance (degrees, coursework)
- 10% Soft Skills and Collaboration (communication, leadership, team work)
- 10% Formatting & Structure (length, ATS-friendly layout, clarity)
- 5% Relevance to Work Location & Authorization (remote/hybrid match)

Return a JSON object with:
{
  "score": Final ATS score as int 0-100
  "strengths": List of clear, job-relevant strengths
  "weaknesses": Gaps or mismatches in resume
  "suggestions": Specific changes to increase score
  "matchedSkills": List of important matched skills from JD
  "missingSkills": List of key skills missing or weakly represented
}

Resume:
{resume}

Job Description:
{jobdesc}
"#;

/// How many characters of the raw completion land in the diagnostic log.
const RAW_PREVIEW_CHARS: usize = 300;

static JSON_BLOCK_RE: OnceLock<Regex> = OnceLock::new();

/// Builds the scoring prompt by substituting both inputs into the rubric
/// template.
pub fn build_prompt(resume: &str, jobdesc: &str) -> String {
    PROMPT_TEMPLATE
        .replace("{resume}", resume)
        .replace("{jobdesc}", jobdesc)
}

/// Re-appends the closing brace consumed by the `}` stop sequence.
pub fn repair_stop_truncation(text: &str) -> String {
    format!("{}}}", text)
}

/// Extracts the scoring object from completion text.
///
/// The full text is tried as JSON first. Only when that fails does the greedy
/// first-`{`-to-last-`}` span extraction run as a salvage path for prose-wrapped
/// output. Known hazard of the salvage path: a bare `}` inside a string value
/// of surrounding prose can widen the span past the real object and fail the
/// parse; such responses fall through to the zeroed report.
pub fn extract_json_object(text: &str) -> Result<Value, ScoreError> {
    if let Ok(value) = serde_json::from_str::<Value>(text.trim()) {
        if value.is_object() {
            return Ok(value);
        }
    }

    let re = JSON_BLOCK_RE.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("valid literal regex"));
    let span = re
        .find(text)
        .ok_or_else(|| ScoreError::Parse("No JSON object found in completion text".to_string()))?;

    serde_json::from_str(span.as_str())
        .map_err(|e| ScoreError::Parse(format!("Extracted block is not valid JSON: {}", e)))
}

/// Deserializes an extracted JSON value into a `ScoreReport`.
///
/// Fields outside the declared shape are dropped (this is where the model's
/// stray `realismFlags` field disappears); a missing required field is a
/// parse failure and ends in the fallback report.
pub fn parse_report(value: Value) -> Result<ScoreReport, ScoreError> {
    serde_json::from_value(value)
        .map_err(|e| ScoreError::Parse(format!("Completion object missing required fields: {}", e)))
}

/// Scoring gateway: builds the prompt, invokes the completion API once, and
/// parses the structured report. Holds the process-wide completion client.
#[derive(Clone)]
pub struct ScoringService {
    client: CompletionClient,
}

impl ScoringService {
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }

    /// Scores `resume` against `jobdesc`.
    ///
    /// Remote-call and parse failures are fully absorbed here: the caller
    /// always receives a well-formed report, zeroed on failure. The failure
    /// kind is logged before it is discarded.
    pub async fn score(&self, resume: &str, jobdesc: &str) -> ScoreReport {
        match self.try_score(resume, jobdesc).await {
            Ok(report) => report,
            Err(err) => {
                match &err {
                    ScoreError::Remote(msg) => {
                        tracing::error!("Completion call failed, returning fallback: {}", msg)
                    }
                    ScoreError::Parse(msg) => {
                        tracing::error!("Completion output unusable, returning fallback: {}", msg)
                    }
                }
                ScoreReport::fallback()
            }
        }
    }

    async fn try_score(&self, resume: &str, jobdesc: &str) -> Result<ScoreReport, ScoreError> {
        let prompt = build_prompt(resume, jobdesc);
        let raw = self.client.complete(&prompt).await?;

        // The stop sequence ate the final brace before the text reached us.
        let text = repair_stop_truncation(&raw);
        tracing::debug!("Completion raw: {}", preview(&text, RAW_PREVIEW_CHARS));

        let value = extract_json_object(&text)?;
        parse_report(value)
    }
}

/// Char-boundary-safe truncated view of the raw completion for logs.
fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
