//! Suggestion Client: AI-written resume content on top of `LlmClient`.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::errors::AppError;
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    BulletPoints,
    Summary,
    JobDescription,
    SkillsOptimization,
}

impl SuggestionKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bullet_points" => Some(SuggestionKind::BulletPoints),
            "summary" => Some(SuggestionKind::Summary),
            "job_description" => Some(SuggestionKind::JobDescription),
            "skills_optimization" => Some(SuggestionKind::SkillsOptimization),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestionContext {
    pub position: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub experience: Option<String>,
    pub skills: Vec<String>,
    pub job_description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    pub kind: SuggestionKind,
    pub context: SuggestionContext,
    pub existing_content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimized_content: Option<String>,
    pub confidence: f32,
}

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("OPENAI_API_KEY is not configured")]
    ServiceUnavailable,

    #[error("generation failed: {0}")]
    GenerationFailed(String),
}

impl From<SuggestionError> for AppError {
    fn from(err: SuggestionError) -> Self {
        let message = err.to_string();
        match err {
            SuggestionError::ServiceUnavailable => AppError::ServiceUnavailable(message),
            SuggestionError::GenerationFailed(msg) => AppError::Llm(msg),
        }
    }
}

/// `None` inside means no API key was configured; every call then fails with
/// `ServiceUnavailable` instead of reaching the network.
#[derive(Clone)]
pub struct SuggestionClient {
    llm: Option<LlmClient>,
}

impl SuggestionClient {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn generate(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SuggestionResponse, SuggestionError> {
        let llm = self.llm.as_ref().ok_or(SuggestionError::ServiceUnavailable)?;
        let prompt = prompts::build_prompt(request);
        let content = llm
            .complete(prompts::SYSTEM_PROMPT, &prompt)
            .await
            .map_err(|e| {
                error!("suggestion request ({:?}) failed: {e}", request.kind);
                SuggestionError::GenerationFailed(e.to_string())
            })?;
        let response = parse_response(&content, request.kind);
        info!(
            "generated {} {:?} suggestion(s)",
            response.suggestions.len(),
            request.kind
        );
        Ok(response)
    }

    /// Suggestions for tailoring `resume_text` to a job posting.
    pub async fn optimize_for_job(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<Vec<String>, SuggestionError> {
        let request = SuggestionRequest {
            kind: SuggestionKind::JobDescription,
            context: SuggestionContext {
                job_description: Some(job_description.to_string()),
                ..Default::default()
            },
            existing_content: Some(resume_text.to_string()),
        };
        Ok(self.generate(&request).await?.suggestions)
    }
}

const BULLET_MARKERS: &[char] = &['•', '-', '*'];

/// Turns raw completion text into suggestions for `kind`.
pub fn parse_response(content: &str, kind: SuggestionKind) -> SuggestionResponse {
    let lines = content.lines().map(str::trim).filter(|l| !l.is_empty());
    match kind {
        SuggestionKind::BulletPoints => SuggestionResponse {
            suggestions: lines
                .filter(|l| l.contains(BULLET_MARKERS))
                .map(|l| l.trim_start_matches(BULLET_MARKERS).trim())
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
            optimized_content: None,
            confidence: 0.8,
        },
        SuggestionKind::Summary => {
            let text = content.trim().to_string();
            SuggestionResponse {
                suggestions: vec![text.clone()],
                optimized_content: Some(text),
                confidence: 0.85,
            }
        }
        SuggestionKind::JobDescription | SuggestionKind::SkillsOptimization => SuggestionResponse {
            suggestions: lines
                .filter(|l| l.chars().count() > 10)
                .map(str::to_string)
                .collect(),
            optimized_content: None,
            confidence: 0.75,
        },
    }
}
