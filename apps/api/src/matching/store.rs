use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::NewJobMatch;
use crate::models::job_match::{
    ApplicationStatus, ExperienceLevel, JobMatch, JobType, SalaryRange,
};

#[async_trait]
pub trait JobMatchStore: Send + Sync {
    async fn insert(&self, job_match: NewJobMatch) -> Result<JobMatch, AppError>;

    /// Best score first.
    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<JobMatch>, AppError>;

    async fn update_status(
        &self,
        owner: Uuid,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<JobMatch>, AppError>;
}

#[derive(Debug, FromRow)]
struct JobMatchRow {
    id: Uuid,
    user_id: Uuid,
    resume_id: Uuid,
    job_title: String,
    company: String,
    job_description: String,
    required_skills: Vec<String>,
    match_score: i32,
    matched_skills: Vec<String>,
    missing_skills: Vec<String>,
    recommendations: Vec<String>,
    location: String,
    job_type: String,
    experience_level: String,
    application_status: String,
    salary_range: Option<Json<SalaryRange>>,
    job_url: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn unknown(column: &str, value: &str) -> AppError {
    AppError::Internal(anyhow!("job_matches.{column} holds unknown value '{value}'"))
}

impl TryFrom<JobMatchRow> for JobMatch {
    type Error = AppError;

    fn try_from(row: JobMatchRow) -> Result<Self, Self::Error> {
        Ok(JobMatch {
            job_type: JobType::parse(&row.job_type)
                .ok_or_else(|| unknown("job_type", &row.job_type))?,
            experience_level: ExperienceLevel::parse(&row.experience_level)
                .ok_or_else(|| unknown("experience_level", &row.experience_level))?,
            application_status: ApplicationStatus::parse(&row.application_status)
                .ok_or_else(|| unknown("application_status", &row.application_status))?,
            id: row.id,
            user_id: row.user_id,
            resume_id: row.resume_id,
            job_title: row.job_title,
            company: row.company,
            job_description: row.job_description,
            required_skills: row.required_skills,
            match_score: row.match_score.clamp(0, 100) as u32,
            matched_skills: row.matched_skills,
            missing_skills: row.missing_skills,
            recommendations: row.recommendations,
            location: row.location,
            salary_range: row.salary_range.map(|j| j.0),
            job_url: row.job_url,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const COLUMNS: &str = "id, user_id, resume_id, job_title, company, job_description, \
                       required_skills, match_score, matched_skills, missing_skills, \
                       recommendations, location, job_type, experience_level, \
                       application_status, salary_range, job_url, notes, created_at, updated_at";

pub struct PgJobMatchStore {
    pool: PgPool,
}

impl PgJobMatchStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobMatchStore for PgJobMatchStore {
    async fn insert(&self, job_match: NewJobMatch) -> Result<JobMatch, AppError> {
        let NewJobMatch {
            user_id,
            resume_id,
            request,
            report,
        } = job_match;

        let row: JobMatchRow = sqlx::query_as(&format!(
            "INSERT INTO job_matches \
                 (user_id, resume_id, job_title, company, job_description, required_skills, \
                  match_score, matched_skills, missing_skills, recommendations, location, \
                  job_type, experience_level, salary_range, job_url, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
             RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(resume_id)
        .bind(request.job_title.trim())
        .bind(request.company.trim())
        .bind(&request.job_description)
        .bind(&request.required_skills)
        .bind(report.match_score as i32)
        .bind(&report.matched_skills)
        .bind(&report.missing_skills)
        .bind(&report.recommendations)
        .bind(request.location.trim())
        .bind(request.job_type.as_str())
        .bind(request.experience_level.as_str())
        .bind(request.salary_range.as_ref().map(Json))
        .bind(&request.job_url)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Stored job match {} (score {}) for resume {resume_id}",
            row.id, row.match_score
        );
        row.try_into()
    }

    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<JobMatch>, AppError> {
        let rows: Vec<JobMatchRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM job_matches WHERE user_id = $1 \
             ORDER BY match_score DESC, created_at DESC"
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(JobMatch::try_from).collect()
    }

    async fn update_status(
        &self,
        owner: Uuid,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<Option<JobMatch>, AppError> {
        let row: Option<JobMatchRow> = sqlx::query_as(&format!(
            "UPDATE job_matches SET application_status = $3, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(owner)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;
        row.map(JobMatch::try_from).transpose()
    }
}
