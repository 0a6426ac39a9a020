//! Resume Store: owner-scoped persistence of resume documents.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{NewResume, ResumeData, StoredResume};

/// Every method is scoped by `owner`; another account's resume behaves as
/// if it did not exist.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn create(&self, owner: Uuid, resume: NewResume) -> Result<StoredResume, AppError>;

    /// Newest `updated_at` first.
    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<StoredResume>, AppError>;

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Option<StoredResume>, AppError>;

    /// Full content replace. `None` when the resume does not exist for `owner`.
    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        resume: NewResume,
    ) -> Result<Option<StoredResume>, AppError>;

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<bool, AppError>;
}

#[derive(Debug, FromRow)]
struct ResumeRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    template_id: String,
    is_public: bool,
    content: Json<ResumeData>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ResumeRow> for StoredResume {
    fn from(row: ResumeRow) -> Self {
        StoredResume {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            template_id: row.template_id,
            is_public: row.is_public,
            data: row.content.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const COLUMNS: &str =
    "id, user_id, title, template_id, is_public, content, created_at, updated_at";

pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn create(&self, owner: Uuid, resume: NewResume) -> Result<StoredResume, AppError> {
        let row: ResumeRow = sqlx::query_as(&format!(
            "INSERT INTO resumes (user_id, title, template_id, is_public, content) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        ))
        .bind(owner)
        .bind(&resume.title)
        .bind(&resume.template_id)
        .bind(resume.is_public)
        .bind(Json(&resume.data))
        .fetch_one(&self.pool)
        .await?;

        info!("Created resume {} for user {owner}", row.id);
        Ok(row.into())
    }

    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<StoredResume>, AppError> {
        let rows: Vec<ResumeRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM resumes WHERE user_id = $1 ORDER BY updated_at DESC"
        ))
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(StoredResume::from).collect())
    }

    async fn get(&self, owner: Uuid, id: Uuid) -> Result<Option<StoredResume>, AppError> {
        let row: Option<ResumeRow> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM resumes WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(StoredResume::from))
    }

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        resume: NewResume,
    ) -> Result<Option<StoredResume>, AppError> {
        let row: Option<ResumeRow> = sqlx::query_as(&format!(
            "UPDATE resumes \
             SET title = $3, template_id = $4, is_public = $5, content = $6, updated_at = NOW() \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(owner)
        .bind(&resume.title)
        .bind(&resume.template_id)
        .bind(resume.is_public)
        .bind(Json(&resume.data))
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(StoredResume::from))
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
