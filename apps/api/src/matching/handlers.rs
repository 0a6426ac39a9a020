use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath};
use crate::matching::scoring::{dedupe_skills, score_job_match};
use crate::matching::NewJobMatch;
use crate::models::job_match::{JobMatch, JobMatchRequest, StatusUpdate};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchResponse {
    pub success: bool,
    pub job_match: JobMatch,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatchListResponse {
    pub success: bool,
    pub job_matches: Vec<JobMatch>,
}

/// POST /api/v1/resumes/:id/job-match
pub async fn handle_create_job_match(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(resume_id): AppPath<Uuid>,
    AppJson(mut req): AppJson<JobMatchRequest>,
) -> Result<(StatusCode, Json<JobMatchResponse>), AppError> {
    req.validate()?;
    let resume = state
        .resumes
        .get(user.id, resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    req.required_skills = dedupe_skills(&req.required_skills);
    let report = score_job_match(&resume.data, &req.required_skills)?;
    let job_match = state
        .job_matches
        .insert(NewJobMatch {
            user_id: user.id,
            resume_id,
            request: req,
            report,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(JobMatchResponse {
            success: true,
            job_match,
        }),
    ))
}

/// GET /api/v1/job-matches
pub async fn handle_list_job_matches(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<JobMatchListResponse>, AppError> {
    let job_matches = state.job_matches.list_by_owner(user.id).await?;
    Ok(Json(JobMatchListResponse {
        success: true,
        job_matches,
    }))
}

/// PATCH /api/v1/job-matches/:id/status
pub async fn handle_update_job_match_status(
    State(state): State<AppState>,
    user: AuthUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(update): AppJson<StatusUpdate>,
) -> Result<Json<JobMatchResponse>, AppError> {
    let job_match = state
        .job_matches
        .update_status(user.id, id, update.application_status)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job match {id} not found")))?;
    Ok(Json(JobMatchResponse {
        success: true,
        job_match,
    }))
}
