use axum::{
    extract::State,
    http::{header, HeaderName, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::catalog::registry;
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath};
use crate::models::resume::{NewResume, ResumePayload, StoredResume};
use crate::render::handlers::HTML_CONTENT_TYPE;
use crate::render::{export_file_name, render_document};
use crate::state::AppState;

/// Suggested file name for the PDF an external rasterizer produces from the page.
pub const EXPORT_FILENAME_HEADER: &str = "x-export-filename";

#[derive(Serialize)]
pub struct ResumeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub resume: StoredResume,
}

#[derive(Serialize)]
pub struct ResumeListResponse {
    pub success: bool,
    pub resumes: Vec<StoredResume>,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub message: String,
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Resume {id} not found"))
}

async fn load(state: &AppState, owner: Uuid, id: Uuid) -> Result<StoredResume, AppError> {
    state.resumes.get(owner, id).await?.ok_or_else(|| not_found(id))
}

/// POST /api/v1/resumes
pub async fn handle_create_resume(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(payload): AppJson<ResumePayload>,
) -> Result<(StatusCode, Json<ResumeResponse>), AppError> {
    let resume = NewResume::try_from(payload)?;
    let resume = state.resumes.create(user.id, resume).await?;
    Ok((
        StatusCode::CREATED,
        Json(ResumeResponse {
            success: true,
            message: Some("Resume created successfully".to_string()),
            resume,
        }),
    ))
}

/// GET /api/v1/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = state.resumes.list_by_owner(user.id).await?;
    Ok(Json(ResumeListResponse {
        success: true,
        resumes,
    }))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ResumeResponse>, AppError> {
    let resume = load(&state, user.id, id).await?;
    Ok(Json(ResumeResponse {
        success: true,
        message: None,
        resume,
    }))
}

/// PUT /api/v1/resumes/:id
pub async fn handle_update_resume(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<ResumePayload>,
) -> Result<Json<ResumeResponse>, AppError> {
    let resume = NewResume::try_from(payload)?;
    let resume = state
        .resumes
        .update(user.id, id, resume)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ResumeResponse {
        success: true,
        message: Some("Resume updated successfully".to_string()),
        resume,
    }))
}

/// DELETE /api/v1/resumes/:id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<DeletedResponse>, AppError> {
    if !state.resumes.delete(user.id, id).await? {
        return Err(not_found(id));
    }
    Ok(Json(DeletedResponse {
        success: true,
        message: "Resume deleted successfully".to_string(),
    }))
}

/// GET /api/v1/resumes/:id/render
/// Print-ready HTML of a stored resume in its own template.
pub async fn handle_render_resume(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let resume = load(&state, user.id, id).await?;
    // Ids are checked on write; a template retired since then renders with the default.
    let descriptor =
        registry::get_by_id(&resume.template_id).unwrap_or_else(registry::default_template);
    let html = render_document(descriptor, &resume.data);
    Ok((
        [
            (header::CONTENT_TYPE, HTML_CONTENT_TYPE.to_string()),
            (
                HeaderName::from_static(EXPORT_FILENAME_HEADER),
                export_file_name(&resume.data),
            ),
        ],
        html,
    ))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizeRequest {
    pub job_description: String,
}

#[derive(Serialize)]
pub struct OptimizeResponse {
    pub success: bool,
    pub suggestions: Vec<String>,
}

/// POST /api/v1/resumes/:id/optimize
pub async fn handle_optimize_resume(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(req): AppJson<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation("jobDescription is required".to_string()));
    }
    let resume = load(&state, user.id, id).await?;
    let suggestions = state
        .suggestions
        .optimize_for_job(&resume.data.plain_text(), &req.job_description)
        .await?;
    Ok(Json(OptimizeResponse {
        success: true,
        suggestions,
    }))
}
