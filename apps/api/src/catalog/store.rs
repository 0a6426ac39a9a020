//! Template Store: persisted template records behind a trait, so handlers can
//! be exercised against an in-memory implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::catalog::seed_templates;
use crate::errors::AppError;
use crate::models::template::{NewTemplate, TemplatePatch, TemplateRecord};

#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Active records, premium last, then by name.
    async fn list(
        &self,
        category: Option<&str>,
        include_content: bool,
    ) -> Result<Vec<TemplateRecord>, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<TemplateRecord>, AppError>;

    async fn create(&self, template: NewTemplate) -> Result<TemplateRecord, AppError>;

    /// Merges `patch` into the record. `None` when no record has `id`.
    async fn update(&self, id: Uuid, patch: TemplatePatch)
        -> Result<Option<TemplateRecord>, AppError>;

    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Replaces every record with the registry seed set.
    async fn seed(&self) -> Result<Vec<TemplateRecord>, AppError>;
}

const COLUMNS: &str = "id, name, description, category, preview_image, html_template, \
                       css_styles, is_active, is_premium, created_at, updated_at";

pub(crate) fn duplicate_name(name: &str) -> AppError {
    AppError::Conflict(format!("A template named '{name}' already exists"))
}

fn map_write_error(e: sqlx::Error, name: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => duplicate_name(name),
        _ => AppError::Database(e),
    }
}

pub struct PgTemplateStore {
    pool: PgPool,
}

impl PgTemplateStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TemplateStore for PgTemplateStore {
    async fn list(
        &self,
        category: Option<&str>,
        include_content: bool,
    ) -> Result<Vec<TemplateRecord>, AppError> {
        let rows: Vec<TemplateRecord> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM templates \
             WHERE is_active = TRUE AND ($1::TEXT IS NULL OR category = $1) \
             ORDER BY is_premium ASC, name ASC"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(if include_content {
            rows
        } else {
            rows.into_iter().map(TemplateRecord::without_content).collect()
        })
    }

    async fn get(&self, id: Uuid) -> Result<Option<TemplateRecord>, AppError> {
        let row = sqlx::query_as(&format!("SELECT {COLUMNS} FROM templates WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, template: NewTemplate) -> Result<TemplateRecord, AppError> {
        let row: TemplateRecord = sqlx::query_as(&format!(
            "INSERT INTO templates \
                 (name, description, category, preview_image, html_template, css_styles, is_active, is_premium) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        ))
        .bind(&template.name)
        .bind(&template.description)
        .bind(&template.category)
        .bind(&template.preview_image)
        .bind(&template.html_template)
        .bind(&template.css_styles)
        .bind(template.is_active)
        .bind(template.is_premium)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &template.name))?;

        info!("Created template {} ({})", row.name, row.id);
        Ok(row)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: TemplatePatch,
    ) -> Result<Option<TemplateRecord>, AppError> {
        let mut tx = self.pool.begin().await?;

        let existing: Option<TemplateRecord> = sqlx::query_as(&format!(
            "SELECT {COLUMNS} FROM templates WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some(mut record) = existing else {
            return Ok(None);
        };
        patch.apply(&mut record);

        let row: TemplateRecord = sqlx::query_as(&format!(
            "UPDATE templates SET \
                 name = $2, description = $3, category = $4, preview_image = $5, \
                 html_template = $6, css_styles = $7, is_active = $8, is_premium = $9, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&record.name)
        .bind(&record.description)
        .bind(&record.category)
        .bind(&record.preview_image)
        .bind(record.html_template.as_deref().unwrap_or_default())
        .bind(record.css_styles.as_deref().unwrap_or_default())
        .bind(record.is_active)
        .bind(record.is_premium)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, &record.name))?;

        tx.commit().await?;
        Ok(Some(row))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn seed(&self) -> Result<Vec<TemplateRecord>, AppError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM templates").execute(&mut *tx).await?;

        let mut rows = Vec::new();
        for template in seed_templates() {
            let row: TemplateRecord = sqlx::query_as(&format!(
                "INSERT INTO templates \
                     (name, description, category, preview_image, html_template, css_styles, is_active, is_premium) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
                 RETURNING {COLUMNS}"
            ))
            .bind(&template.name)
            .bind(&template.description)
            .bind(&template.category)
            .bind(&template.preview_image)
            .bind(&template.html_template)
            .bind(&template.css_styles)
            .bind(template.is_active)
            .bind(template.is_premium)
            .fetch_one(&mut *tx)
            .await?;
            rows.push(row);
        }

        tx.commit().await?;
        info!("Seeded {} templates", rows.len());
        Ok(rows)
    }
}
