use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::registry::{self, DEFAULT_TEMPLATE_ID};
use crate::errors::AppError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// "YYYY-MM"
    pub start_date: String,
    /// "YYYY-MM"; ignored while `current` is set.
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: String,
    pub degree: String,
    pub school: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Width of the skill bar, in percent.
    pub fn width_percent(self) -> u8 {
        match self {
            SkillLevel::Beginner => 25,
            SkillLevel::Intermediate => 50,
            SkillLevel::Advanced => 75,
            SkillLevel::Expert => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntry {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    /// Empty when the credential does not expire.
    pub expiration_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The working document assembled by the builder wizard.
/// `ResumeData::default()` is the empty document a new builder session starts from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
}

impl ResumeData {
    pub fn has_summary(&self) -> bool {
        !self.personal_info.summary.trim().is_empty()
    }

    // A section counts as empty when the list is empty or the wizard left
    // its first row blank.
    pub fn has_experience(&self) -> bool {
        self.experience
            .first()
            .is_some_and(|e| !e.title.trim().is_empty())
    }

    pub fn has_education(&self) -> bool {
        self.education
            .first()
            .is_some_and(|e| !e.degree.trim().is_empty())
    }

    pub fn has_skills(&self) -> bool {
        self.skills.first().is_some_and(|s| !s.name.trim().is_empty())
    }

    pub fn has_projects(&self) -> bool {
        self.projects.first().is_some_and(|p| !p.name.trim().is_empty())
    }

    pub fn has_certifications(&self) -> bool {
        self.certifications
            .first()
            .is_some_and(|c| !c.name.trim().is_empty())
    }

    /// Clears `end_date` on ongoing positions.
    pub fn normalize(&mut self) {
        for entry in self.experience.iter_mut().filter(|e| e.current) {
            entry.end_date.clear();
        }
    }

    /// Flattens the document into plain text for keyword matching and AI prompts.
    pub fn plain_text(&self) -> String {
        let info = &self.personal_info;
        let mut out = format!("{} {}\n", info.first_name, info.last_name);
        if self.has_summary() {
            out.push_str(&format!("{}\n", info.summary.trim()));
        }
        for exp in &self.experience {
            out.push_str(&format!(
                "{} at {} ({})\n{}\n",
                exp.title, exp.company, exp.location, exp.description
            ));
        }
        for edu in &self.education {
            out.push_str(&format!("{} - {}\n", edu.degree, edu.school));
        }
        if !self.skills.is_empty() {
            let names: Vec<&str> = self.skills.iter().map(|s| s.name.as_str()).collect();
            out.push_str(&format!("Skills: {}\n", names.join(", ")));
        }
        for project in &self.projects {
            out.push_str(&format!("{}\n{}\n", project.name, project.description));
            if !project.technologies.is_empty() {
                out.push_str(&format!("Technologies: {}\n", project.technologies.join(", ")));
            }
        }
        for cert in &self.certifications {
            out.push_str(&format!("{} - {}\n", cert.name, cert.issuer));
        }
        out
    }
}

impl PersonalInfo {
    /// Checks the fields a persisted resume must carry.
    pub fn validate(&self) -> Result<(), AppError> {
        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("summary", &self.summary),
        ];
        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| *field)
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "personalInfo is missing required fields: {}",
                missing.join(", ")
            )));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(AppError::Validation(
                "personalInfo.email must be a valid email address".to_string(),
            ));
        }
        if !is_valid_phone(&self.phone) {
            return Err(AppError::Validation(
                "personalInfo.phone must be a valid phone number".to_string(),
            ));
        }
        Ok(())
    }
}

/// `local@host.tld`, no whitespace, exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}

/// Optional leading `+`, then 1–16 digits not starting with 0.
/// Spaces, dashes and parentheses are ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();
    let digits = digits.strip_prefix('+').unwrap_or(digits.as_str());
    let mut chars = digits.chars();
    match chars.next() {
        Some(first) if ('1'..='9').contains(&first) => {
            digits.len() <= 16 && chars.all(|c| c.is_ascii_digit())
        }
        _ => false,
    }
}

/// Raw create/update body. Every field is optional here so that a missing
/// `title` or `personalInfo` surfaces as a validation error naming the field.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumePayload {
    pub title: Option<String>,
    pub personal_info: Option<PersonalInfo>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
    pub certifications: Vec<CertificationEntry>,
    pub template_id: Option<String>,
    pub is_public: bool,
}

/// A resume that passed validation and is ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewResume {
    pub title: String,
    pub template_id: String,
    pub is_public: bool,
    pub data: ResumeData,
}

impl TryFrom<ResumePayload> for NewResume {
    type Error = AppError;

    fn try_from(payload: ResumePayload) -> Result<Self, Self::Error> {
        let title = payload
            .title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::Validation("title is required".to_string()))?;
        let personal_info = payload
            .personal_info
            .ok_or_else(|| AppError::Validation("personalInfo is required".to_string()))?;
        personal_info.validate()?;

        let template_id = payload
            .template_id
            .unwrap_or_else(|| DEFAULT_TEMPLATE_ID.to_string());
        if registry::get_by_id(&template_id).is_none() {
            return Err(AppError::Validation(format!(
                "templateId '{template_id}' does not name a known template"
            )));
        }

        let mut data = ResumeData {
            personal_info,
            experience: payload.experience,
            education: payload.education,
            skills: payload.skills,
            projects: payload.projects,
            certifications: payload.certifications,
        };
        data.normalize();

        Ok(NewResume {
            title,
            template_id,
            is_public: payload.is_public,
            data,
        })
    }
}

/// Persisted resume, owned by exactly one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResume {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub template_id: String,
    pub is_public: bool,
    #[serde(flatten)]
    pub data: ResumeData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_info() -> PersonalInfo {
        PersonalInfo {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 (20) 7946-0958".to_string(),
            address: String::new(),
            summary: "Analyst of engines.".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_skill_level_widths() {
        assert_eq!(SkillLevel::Beginner.width_percent(), 25);
        assert_eq!(SkillLevel::Intermediate.width_percent(), 50);
        assert_eq!(SkillLevel::Advanced.width_percent(), 75);
        assert_eq!(SkillLevel::Expert.width_percent(), 100);
    }

    #[test]
    fn test_skill_deserializes_level_and_defaults_missing() {
        let skill: SkillEntry =
            serde_json::from_value(json!({"id": "1", "name": "SQL", "level": "advanced"})).unwrap();
        assert_eq!(skill.level, SkillLevel::Advanced);
        assert_eq!(skill.level.width_percent(), 75);

        let skill: SkillEntry = serde_json::from_value(json!({"name": "Go"})).unwrap();
        assert_eq!(skill.level, SkillLevel::Intermediate);
    }

    #[test]
    fn test_resume_data_uses_camel_case() {
        let data: ResumeData = serde_json::from_value(json!({
            "personalInfo": {"firstName": "Ada", "lastName": "Lovelace"},
            "experience": [{"title": "Analyst", "startDate": "2020-01", "current": true}]
        }))
        .unwrap();
        assert_eq!(data.personal_info.first_name, "Ada");
        assert_eq!(data.experience[0].start_date, "2020-01");
        assert!(data.education.is_empty());
    }

    #[test]
    fn test_section_presence_checks_first_entry() {
        let mut data = ResumeData::default();
        assert!(!data.has_experience());
        data.experience.push(ExperienceEntry::default());
        assert!(!data.has_experience(), "blank first row counts as empty");
        data.experience[0].title = "Engineer".to_string();
        assert!(data.has_experience());

        data.personal_info.summary = "   ".to_string();
        assert!(!data.has_summary());
    }

    #[test]
    fn test_normalize_clears_end_date_for_current_roles() {
        let mut data = ResumeData {
            experience: vec![
                ExperienceEntry {
                    current: true,
                    end_date: "2024-01".to_string(),
                    ..Default::default()
                },
                ExperienceEntry {
                    current: false,
                    end_date: "2019-06".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        data.normalize();
        assert_eq!(data.experience[0].end_date, "");
        assert_eq!(data.experience[1].end_date, "2019-06");
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@.co"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("5551234567"));
        assert!(!is_valid_phone("0123456"));
        assert!(!is_valid_phone("call me"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_personal_info_names_missing_fields() {
        let info = PersonalInfo {
            first_name: "Ada".to_string(),
            ..Default::default()
        };
        match info.validate() {
            Err(AppError::Validation(msg)) => {
                assert!(msg.contains("lastName"));
                assert!(msg.contains("email"));
                assert!(!msg.contains("firstName"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_new_resume_requires_title() {
        let payload = ResumePayload {
            personal_info: Some(valid_info()),
            ..Default::default()
        };
        let err = NewResume::try_from(payload).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("title")));
    }

    #[test]
    fn test_new_resume_requires_personal_info() {
        let payload = ResumePayload {
            title: Some("My CV".to_string()),
            ..Default::default()
        };
        let err = NewResume::try_from(payload).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m.contains("personalInfo")));
    }

    #[test]
    fn test_new_resume_rejects_unknown_template() {
        let payload = ResumePayload {
            title: Some("My CV".to_string()),
            personal_info: Some(valid_info()),
            template_id: Some("does-not-exist".to_string()),
            ..Default::default()
        };
        assert!(NewResume::try_from(payload).is_err());
    }

    #[test]
    fn test_new_resume_defaults_template_and_normalizes() {
        let payload = ResumePayload {
            title: Some("  My CV ".to_string()),
            personal_info: Some(valid_info()),
            experience: vec![ExperienceEntry {
                title: "Engineer".to_string(),
                current: true,
                end_date: "2022-02".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let resume = NewResume::try_from(payload).unwrap();
        assert_eq!(resume.title, "My CV");
        assert_eq!(resume.template_id, DEFAULT_TEMPLATE_ID);
        assert_eq!(resume.data.experience[0].end_date, "");
    }

    #[test]
    fn test_plain_text_includes_skills_and_roles() {
        let data = ResumeData {
            personal_info: valid_info(),
            experience: vec![ExperienceEntry {
                title: "Engineer".to_string(),
                company: "Babbage & Co".to_string(),
                description: "Built the analytical engine in Rust".to_string(),
                ..Default::default()
            }],
            skills: vec![SkillEntry {
                name: "SQL".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let text = data.plain_text();
        assert!(text.contains("Engineer at Babbage & Co"));
        assert!(text.contains("Skills: SQL"));
    }

    #[test]
    fn test_plain_text_includes_projects_and_certifications() {
        let data = ResumeData {
            personal_info: valid_info(),
            projects: vec![ProjectEntry {
                name: "Difference Engine".to_string(),
                description: "Mechanical tabulator".to_string(),
                technologies: vec!["Brass".to_string(), "Kubernetes".to_string()],
                ..Default::default()
            }],
            certifications: vec![CertificationEntry {
                name: "Certified Analyst".to_string(),
                issuer: "Royal Society".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let text = data.plain_text();
        assert!(text.contains("Difference Engine"));
        assert!(text.contains("Technologies: Brass, Kubernetes"));
        assert!(text.contains("Certified Analyst - Royal Society"));
        assert!(data.has_projects());
        assert!(data.has_certifications());
    }

    #[test]
    fn test_optional_links_and_sections_deserialize() {
        let data: ResumeData = serde_json::from_value(json!({
            "personalInfo": {
                "firstName": "Ada",
                "linkedIn": "https://linkedin.com/in/ada",
                "website": "https://ada.dev"
            },
            "projects": [{"name": "Notes", "technologies": ["Rust"], "github": "https://github.com/ada/notes"}],
            "certifications": [{"name": "CKA", "issuer": "CNCF", "credentialId": "X-1"}]
        }))
        .unwrap();
        assert_eq!(data.personal_info.linked_in.as_deref(), Some("https://linkedin.com/in/ada"));
        assert_eq!(data.personal_info.website.as_deref(), Some("https://ada.dev"));
        assert_eq!(data.projects[0].github.as_deref(), Some("https://github.com/ada/notes"));
        assert_eq!(data.certifications[0].credential_id.as_deref(), Some("X-1"));

        let empty: ResumeData = serde_json::from_value(json!({})).unwrap();
        assert!(empty.projects.is_empty());
        assert!(!empty.has_certifications());
        let value = serde_json::to_value(&empty).unwrap();
        assert!(value["personalInfo"].get("linkedIn").is_none());
    }
}
