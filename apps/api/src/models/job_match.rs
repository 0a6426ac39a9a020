use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Internship,
    Remote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationStatus {
    #[default]
    NotApplied,
    Applied,
    Interviewing,
    Rejected,
    Offered,
}

// Text column <-> enum. The stored spelling is the serde spelling.
macro_rules! text_enum {
    ($ty:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $text,)+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($text => Some($ty::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

text_enum!(JobType {
    FullTime => "full-time",
    PartTime => "part-time",
    Contract => "contract",
    Internship => "internship",
    Remote => "remote",
});

text_enum!(ExperienceLevel {
    Entry => "entry",
    Mid => "mid",
    Senior => "senior",
    Executive => "executive",
});

text_enum!(ApplicationStatus {
    NotApplied => "not-applied",
    Applied => "applied",
    Interviewing => "interviewing",
    Rejected => "rejected",
    Offered => "offered",
});

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

/// Body of `POST /api/v1/resumes/:id/job-match`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchRequest {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub location: String,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    pub salary_range: Option<SalaryRange>,
    pub job_url: Option<String>,
    pub notes: Option<String>,
}

impl JobMatchRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("jobTitle", &self.job_title),
            ("company", &self.company),
            ("jobDescription", &self.job_description),
            ("location", &self.location),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }
        if self.required_skills.iter().all(|s| s.trim().is_empty()) {
            return Err(AppError::Validation(
                "requiredSkills must name at least one skill".to_string(),
            ));
        }
        if let Some(range) = &self.salary_range {
            if range.min < 0.0 || range.max < range.min {
                return Err(AppError::Validation(
                    "salaryRange must satisfy 0 <= min <= max".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// A persisted keyword-fit report of one resume against one job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub id: Uuid,
    pub user_id: Uuid,
    pub resume_id: Uuid,
    pub job_title: String,
    pub company: String,
    pub job_description: String,
    pub required_skills: Vec<String>,
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
    pub location: String,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    pub application_status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub application_status: ApplicationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> JobMatchRequest {
        serde_json::from_value(json!({
            "jobTitle": "Backend Engineer",
            "company": "Acme",
            "jobDescription": "Own the billing services.",
            "requiredSkills": ["Rust", "SQL"],
            "location": "Berlin",
            "jobType": "full-time",
            "experienceLevel": "senior"
        }))
        .unwrap()
    }

    #[test]
    fn test_text_enum_roundtrips_serde_spelling() {
        assert_eq!(JobType::PartTime.as_str(), "part-time");
        assert_eq!(JobType::parse("part-time"), Some(JobType::PartTime));
        assert_eq!(ApplicationStatus::parse("not-applied"), Some(ApplicationStatus::NotApplied));
        assert_eq!(ExperienceLevel::parse("principal"), None);
        assert_eq!(
            serde_json::to_value(ApplicationStatus::NotApplied).unwrap(),
            json!(ApplicationStatus::NotApplied.as_str())
        );
    }

    #[test]
    fn test_request_validates() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_request_requires_job_description() {
        let mut r = request();
        r.job_description = "   ".to_string();
        assert!(matches!(r.validate(), Err(AppError::Validation(m)) if m == "jobDescription is required"));
    }

    #[test]
    fn test_missing_text_field_reads_as_blank() {
        let r: JobMatchRequest = serde_json::from_value(json!({
            "company": "Acme",
            "jobDescription": "Own the billing services.",
            "requiredSkills": ["Rust"],
            "location": "Berlin",
            "jobType": "full-time",
            "experienceLevel": "senior"
        }))
        .unwrap();
        assert!(matches!(r.validate(), Err(AppError::Validation(m)) if m == "jobTitle is required"));
    }

    #[test]
    fn test_request_requires_skills() {
        let mut r = request();
        r.required_skills = vec!["  ".to_string()];
        assert!(matches!(r.validate(), Err(AppError::Validation(m)) if m.contains("requiredSkills")));
    }

    #[test]
    fn test_request_rejects_inverted_salary() {
        let mut r = request();
        r.salary_range = Some(SalaryRange {
            min: 90_000.0,
            max: 50_000.0,
            currency: default_currency(),
        });
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_salary_currency_defaults_to_usd() {
        let range: SalaryRange = serde_json::from_value(json!({"min": 1.0, "max": 2.0})).unwrap();
        assert_eq!(range.currency, "USD");
    }
}
