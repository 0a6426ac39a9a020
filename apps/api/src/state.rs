use std::sync::Arc;

use crate::auth::TokenVerifier;
use crate::catalog::store::TemplateStore;
use crate::matching::store::JobMatchStore;
use crate::resumes::store::ResumeStore;
use crate::suggestions::SuggestionClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Stores are trait objects so tests can swap in in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    pub resumes: Arc<dyn ResumeStore>,
    pub templates: Arc<dyn TemplateStore>,
    pub job_matches: Arc<dyn JobMatchStore>,
    pub suggestions: SuggestionClient,
    pub auth: TokenVerifier,
}
