pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::render::handlers as render;
use crate::resumes::handlers as resumes;
use crate::state::AppState;
use crate::suggestions::handlers as suggestions;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resumes
        .route(
            "/api/v1/resumes",
            post(resumes::handle_create_resume).get(resumes::handle_list_resumes),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resumes::handle_get_resume)
                .put(resumes::handle_update_resume)
                .delete(resumes::handle_delete_resume),
        )
        .route("/api/v1/resumes/:id/render", get(resumes::handle_render_resume))
        .route("/api/v1/resumes/:id/optimize", post(resumes::handle_optimize_resume))
        // Job matching
        .route(
            "/api/v1/resumes/:id/job-match",
            post(matching::handle_create_job_match),
        )
        .route("/api/v1/job-matches", get(matching::handle_list_job_matches))
        .route(
            "/api/v1/job-matches/:id/status",
            patch(matching::handle_update_job_match_status),
        )
        // Templates
        .route(
            "/api/v1/templates",
            get(catalog::handle_list_templates).post(catalog::handle_create_template),
        )
        .route("/api/v1/templates/seed", post(catalog::handle_seed_templates))
        .route(
            "/api/v1/templates/:id",
            get(catalog::handle_get_template)
                .put(catalog::handle_update_template)
                .delete(catalog::handle_delete_template),
        )
        .route("/api/v1/catalog", get(catalog::handle_list_catalog))
        .route("/api/v1/catalog/:id", get(catalog::handle_get_catalog_entry))
        // Rendering and AI
        .route("/api/v1/render", post(render::handle_render_preview))
        .route("/api/v1/ai/suggestions", post(suggestions::handle_suggestions))
        .with_state(state)
}
