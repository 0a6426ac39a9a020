//! In-memory stores and token helpers for handler and router tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use crate::auth::{Claims, TokenVerifier};
use crate::catalog::seed_templates;
use crate::catalog::store::{duplicate_name, TemplateStore};
use crate::errors::AppError;
use crate::matching::store::JobMatchStore;
use crate::matching::NewJobMatch;
use crate::models::job_match::{ApplicationStatus, JobMatch};
use crate::models::resume::{NewResume, StoredResume};
use crate::models::template::{NewTemplate, TemplatePatch, TemplateRecord};
use crate::resumes::store::ResumeStore;
use crate::state::AppState;
use crate::suggestions::SuggestionClient;

pub const TEST_SECRET: &str = "test-secret";

pub fn mint_token(user_id: Uuid, is_admin: bool) -> String {
    let claims = Claims {
        user_id,
        email: format!("{user_id}@example.com"),
        is_admin,
        exp: (Utc::now().timestamp() + 3600) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

/// App state backed by empty in-memory stores and an unconfigured AI client.
pub fn test_state() -> AppState {
    AppState {
        resumes: Arc::new(MemoryResumeStore::default()),
        templates: Arc::new(MemoryTemplateStore::default()),
        job_matches: Arc::new(MemoryJobMatchStore::default()),
        suggestions: SuggestionClient::new(None),
        auth: TokenVerifier::new(TEST_SECRET),
    }
}

#[derive(Default)]
pub struct MemoryResumeStore {
    rows: Mutex<Vec<StoredResume>>,
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn create(&self, owner: Uuid, resume: NewResume) -> Result<StoredResume, AppError> {
        let now = Utc::now();
        let stored = StoredResume {
            id: Uuid::new_v4(),
            user_id: owner,
            title: resume.title,
            template_id: resume.template_id,
            is_public: resume.is_public,
            data: resume.data,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<StoredResume>, AppError> {
        let mut out: Vec<StoredResume> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == owner)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(out)
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Option<StoredResume>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id && r.user_id == owner)
            .cloned())
    }

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        resume: NewResume,
    ) -> Result<Option<StoredResume>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|r| r.id == id && r.user_id == owner) else {
            return Ok(None);
        };
        row.title = resume.title;
        row.template_id = resume.template_id;
        row.is_public = resume.is_public;
        row.data = resume.data;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.id == id && r.user_id == owner));
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct MemoryTemplateStore {
    rows: Mutex<Vec<TemplateRecord>>,
}

fn record_from(template: NewTemplate) -> TemplateRecord {
    let now = Utc::now();
    TemplateRecord {
        id: Uuid::new_v4(),
        name: template.name,
        description: template.description,
        category: template.category,
        preview_image: template.preview_image,
        html_template: Some(template.html_template),
        css_styles: Some(template.css_styles),
        is_active: template.is_active,
        is_premium: template.is_premium,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl TemplateStore for MemoryTemplateStore {
    async fn list(
        &self,
        category: Option<&str>,
        include_content: bool,
    ) -> Result<Vec<TemplateRecord>, AppError> {
        let mut out: Vec<TemplateRecord> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.is_active && category.map_or(true, |c| t.category == c))
            .cloned()
            .collect();
        out.sort_by(|a, b| {
            a.is_premium
                .cmp(&b.is_premium)
                .then_with(|| a.name.cmp(&b.name))
        });
        if !include_content {
            out = out.into_iter().map(TemplateRecord::without_content).collect();
        }
        Ok(out)
    }

    async fn get(&self, id: Uuid) -> Result<Option<TemplateRecord>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, template: NewTemplate) -> Result<TemplateRecord, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|t| t.name == template.name) {
            return Err(duplicate_name(&template.name));
        }
        let record = record_from(template);
        rows.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: TemplatePatch,
    ) -> Result<Option<TemplateRecord>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(name) = &patch.name {
            if rows.iter().any(|t| t.id != id && &t.name == name) {
                return Err(duplicate_name(name));
            }
        }
        let Some(row) = rows.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        patch.apply(row);
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.id != id);
        Ok(rows.len() < before)
    }

    async fn seed(&self) -> Result<Vec<TemplateRecord>, AppError> {
        let seeded: Vec<TemplateRecord> = seed_templates().into_iter().map(record_from).collect();
        *self.rows.lock().unwrap() = seeded.clone();
        Ok(seeded)
    }
}

#[derive(Default)]
pub struct MemoryJobMatchStore {
    rows: Mutex<Vec<JobMatch>>,
}

#[async_trait]
impl JobMatchStore for MemoryJobMatchStore {
    async fn insert(&self, job_match: NewJobMatch) -> Result<JobMatch, AppError> {
        let now = Utc::now();
        let NewJobMatch {
            user_id,
            resume_id,
            request,
            report,
        } = job_match;
        let stored = JobMatch {
            id: Uuid::new_v4(),
            user_id,
            resume_id,
            job_title: request.job_title,
            company: request.company,
            job_description: request.job_description,
            required_skills: request.required_skills,
            match_score: report.match_score,
            matched_skills: report.matched_skills,
            missing_skills: report.missing_skills,
            recommendations: report.recommendations,
            location: request.location,
            job_type: request.job_type,
            experience_level: request.experience_level,
            application_status: ApplicationStatus::default(),
            salary_range: request.salary_range,
            job_url: request.job_url,
            notes: request.notes,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<JobMatch>, AppError> {
        let mut out: Vec<JobMatch> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.user_id == owner)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        Ok(out)
    }

    async fn update_status(
        &self,
        owner: Uuid,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<JobMatch>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|m| m.id == id && m.user_id == owner) else {
            return Ok(None);
        };
        row.application_status = status;
        row.updated_at = Utc::now();
        Ok(Some(row.clone()))
    }
}
