use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::catalog::registry::{self, TemplateFilter};
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::models::template::{NewTemplate, TemplateDescriptor, TemplatePatch, TemplateRecord};
use crate::state::AppState;

#[derive(Serialize)]
pub struct CatalogResponse {
    pub success: bool,
    pub templates: Vec<&'static TemplateDescriptor>,
}

#[derive(Serialize)]
pub struct DescriptorResponse {
    pub success: bool,
    pub template: &'static TemplateDescriptor,
}

/// GET /api/v1/catalog
pub async fn handle_list_catalog(
    AppQuery(filter): AppQuery<TemplateFilter>,
) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        success: true,
        templates: registry::list_templates(&filter),
    })
}

/// GET /api/v1/catalog/:id
pub async fn handle_get_catalog_entry(
    AppPath(id): AppPath<String>,
) -> Result<Json<DescriptorResponse>, AppError> {
    let template = registry::get_by_id(&id)
        .ok_or_else(|| AppError::NotFound(format!("Template {id} not found")))?;
    Ok(Json(DescriptorResponse {
        success: true,
        template,
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateListQuery {
    pub category: Option<String>,
    pub include_content: bool,
}

#[derive(Serialize)]
pub struct TemplateListResponse {
    pub success: bool,
    pub templates: Vec<TemplateRecord>,
}

#[derive(Serialize)]
pub struct TemplateResponse {
    pub success: bool,
    pub template: TemplateRecord,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// GET /api/v1/templates
pub async fn handle_list_templates(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<TemplateListQuery>,
) -> Result<Json<TemplateListResponse>, AppError> {
    let category = query
        .category
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty() && c != "all");
    let templates = state
        .templates
        .list(category.as_deref(), query.include_content)
        .await?;
    Ok(Json(TemplateListResponse {
        success: true,
        templates,
    }))
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<TemplateResponse>, AppError> {
    let template = state
        .templates
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Template {id} not found")))?;
    Ok(Json(TemplateResponse {
        success: true,
        template,
    }))
}

/// POST /api/v1/templates
pub async fn handle_create_template(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(mut req): AppJson<NewTemplate>,
) -> Result<(StatusCode, Json<TemplateResponse>), AppError> {
    user.require_admin()?;
    req.validate()?;
    let template = state.templates.create(req).await?;
    Ok((
        StatusCode::CREATED,
        Json(TemplateResponse {
            success: true,
            template,
        }),
    ))
}

/// PUT /api/v1/templates/:id
pub async fn handle_update_template(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(mut patch): AppJson<TemplatePatch>,
) -> Result<Json<TemplateResponse>, AppError> {
    user.require_admin()?;
    patch.validate()?;
    let template = state
        .templates
        .update(id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Template {id} not found")))?;
    Ok(Json(TemplateResponse {
        success: true,
        template,
    }))
}

/// DELETE /api/v1/templates/:id
pub async fn handle_delete_template(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    user.require_admin()?;
    if !state.templates.delete(id).await? {
        return Err(AppError::NotFound(format!("Template {id} not found")));
    }
    Ok(Json(MessageResponse {
        success: true,
        message: "Template deleted successfully".to_string(),
    }))
}

/// POST /api/v1/templates/seed
pub async fn handle_seed_templates(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<TemplateListResponse>, AppError> {
    user.require_admin()?;
    let templates = state.templates.seed().await?;
    tracing::info!("{} reseeded {} templates", user.email, templates.len());
    Ok(Json(TemplateListResponse {
        success: true,
        templates,
    }))
}
