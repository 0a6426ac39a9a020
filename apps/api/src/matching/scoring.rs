//! Keyword job-match scoring: a resume against a posting's required skills.
//!
//! Per required skill (deduplicated case-insensitively):
//! - listed skill with the same name → strength 1.0
//! - mentioned as whole words in the resume's plain text → strength 0.6
//! - otherwise → 0.0, reported missing
//!
//! `match_score = round(mean strength × 100)`.

use std::collections::HashSet;

use serde::Serialize;

use crate::errors::AppError;
use crate::models::resume::ResumeData;

const EXACT: f32 = 1.0;
const MENTIONED: f32 = 0.6;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchReport {
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Trimmed, non-empty skills with case-insensitive duplicates removed.
/// The first spelling wins.
pub fn dedupe_skills(skills: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && seen.insert(s.to_lowercase()))
        .map(str::to_string)
        .collect()
}

pub fn score_job_match(
    resume: &ResumeData,
    required_skills: &[String],
) -> Result<JobMatchReport, AppError> {
    let required = dedupe_skills(required_skills);
    if required.is_empty() {
        return Err(AppError::Validation(
            "requiredSkills must name at least one skill".to_string(),
        ));
    }

    let listed: HashSet<String> = resume
        .skills
        .iter()
        .map(|s| s.name.trim().to_lowercase())
        .collect();
    let text = tokenize(&resume.plain_text());

    let mut matched_skills = Vec::new();
    let mut missing_skills = Vec::new();
    let mut total = 0.0_f32;

    for skill in &required {
        let needle = skill.to_lowercase();
        let strength = if listed.contains(&needle) {
            EXACT
        } else if mentions(&text, &tokenize(&needle)) {
            MENTIONED
        } else {
            0.0
        };
        total += strength;
        if strength > 0.0 {
            matched_skills.push(skill.clone());
        } else {
            missing_skills.push(skill.clone());
        }
    }

    let match_score = ((total / required.len() as f32) * 100.0).round() as u32;
    let recommendations = build_recommendations(match_score, &missing_skills);

    Ok(JobMatchReport {
        match_score,
        matched_skills,
        missing_skills,
        recommendations,
    })
}

/// Lowercased words. `+`, `#` and inner dots stay part of a word so that
/// "C++", "C#" and "Node.js" survive; sentence punctuation does not.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#' | '.')))
        .map(|word| word.trim_matches('.'))
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// True when `phrase` appears as a contiguous run of whole words in `words`.
fn mentions(words: &[String], phrase: &[String]) -> bool {
    !phrase.is_empty() && words.windows(phrase.len()).any(|window| window == phrase)
}

fn build_recommendations(score: u32, missing: &[String]) -> Vec<String> {
    let band = if score >= 80 {
        "Strong match. Your resume covers the key requirements for this role.".to_string()
    } else if score >= 60 {
        format!("Moderate match ({score}/100). Tailor your summary and experience toward the missing skills.")
    } else {
        format!("Low match ({score}/100). Significant gaps remain; consider whether this role fits your current profile.")
    };

    let mut out = vec![band];
    out.extend(
        missing
            .iter()
            .take(3)
            .map(|skill| format!("Add evidence of {skill} to your experience or skills section.")),
    );
    out
}
