use super::{SuggestionKind, SuggestionRequest};

pub const SYSTEM_PROMPT: &str = "You are a professional resume writer and career coach. \
Provide helpful, specific, and actionable suggestions for resume content.";

fn or_default<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
}

fn skills_list(skills: &[String]) -> String {
    if skills.is_empty() {
        "none listed".to_string()
    } else {
        skills.join(", ")
    }
}

fn improve_clause(label: &str, existing: &Option<String>) -> String {
    match existing.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => format!("\nImprove {label}: {text}"),
        _ => String::new(),
    }
}

/// Builds the user prompt for a suggestion request.
pub fn build_prompt(request: &SuggestionRequest) -> String {
    let ctx = &request.context;
    let position = or_default(&ctx.position, "professional");
    let industry = or_default(&ctx.industry, "their industry");
    match request.kind {
        SuggestionKind::BulletPoints => format!(
            "Generate 3-5 professional bullet points for a {position} role at {company}.\n\
             Focus on achievements, quantifiable results, and relevant skills.\n\
             Industry: {industry}\n\
             Experience level: {experience}{improve}",
            company = or_default(&ctx.company, "a company"),
            experience = or_default(&ctx.experience, "not specified"),
            improve = improve_clause("these existing bullet points", &request.existing_content),
        ),
        SuggestionKind::Summary => format!(
            "Write a compelling professional summary for a {position} with {experience} experience in {industry}.\n\
             Skills: {skills}\n\
             Keep it concise (2-3 sentences) and highlight key strengths.{improve}",
            experience = or_default(&ctx.experience, "relevant"),
            skills = skills_list(&ctx.skills),
            improve = improve_clause("this existing summary", &request.existing_content),
        ),
        SuggestionKind::JobDescription => {
            let mut prompt = format!(
                "Analyze this job description and suggest how to optimize a resume for this role:\n{}\n\
                 Provide specific keywords and skills to emphasize.",
                or_default(&ctx.job_description, "(no job description provided)")
            );
            if let Some(resume) = request.existing_content.as_deref().filter(|r| !r.trim().is_empty()) {
                prompt.push_str(&format!("\nCurrent resume:\n{}", resume.trim()));
            }
            prompt
        }
        SuggestionKind::SkillsOptimization => format!(
            "Suggest relevant technical and soft skills for a {position} role in {industry}.\n\
             Current skills: {skills}\n\
             Recommend additional skills that would strengthen the profile.",
            skills = skills_list(&ctx.skills),
        ),
    }
}
