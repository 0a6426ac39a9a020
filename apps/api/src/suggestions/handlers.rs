use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;
use crate::suggestions::{SuggestionContext, SuggestionKind, SuggestionRequest, SuggestionResponse};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestionBody {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub context: Option<SuggestionContext>,
    pub existing_content: Option<String>,
}

impl TryFrom<SuggestionBody> for SuggestionRequest {
    type Error = AppError;

    fn try_from(body: SuggestionBody) -> Result<Self, Self::Error> {
        let (Some(kind), Some(context)) = (body.kind, body.context) else {
            return Err(AppError::Validation(
                "Request type and context are required".to_string(),
            ));
        };
        let kind = SuggestionKind::parse(&kind).ok_or_else(|| {
            AppError::Validation(format!(
                "type must be one of: bullet_points, summary, job_description, skills_optimization (got '{kind}')"
            ))
        })?;
        Ok(SuggestionRequest {
            kind,
            context,
            existing_content: body.existing_content,
        })
    }
}

#[derive(Serialize)]
pub struct SuggestionsEnvelope {
    pub success: bool,
    pub suggestions: SuggestionResponse,
}

/// POST /api/v1/ai/suggestions
pub async fn handle_suggestions(
    State(state): State<AppState>,
    user: AuthUser,
    AppJson(body): AppJson<SuggestionBody>,
) -> Result<Json<SuggestionsEnvelope>, AppError> {
    let request = SuggestionRequest::try_from(body)?;
    tracing::debug!("suggestion request {:?} from {}", request.kind, user.id);
    let suggestions = state.suggestions.generate(&request).await?;
    Ok(Json(SuggestionsEnvelope {
        success: true,
        suggestions,
    }))
}
