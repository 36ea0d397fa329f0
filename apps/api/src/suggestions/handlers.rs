//! Axum route handlers for the project suggestion API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;
use crate::suggestions::scorer::{generate_suggestions, ProjectSuggestion};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub skills: Option<Vec<String>>,
    pub research_interests: Option<Vec<String>>,
}

/// POST /api/v1/suggestions
///
/// Ranks catalog project templates against the caller's skills and research
/// interests. Returns at most `MAX_SUGGESTIONS` entries.
pub async fn handle_generate_suggestions(
    State(state): State<AppState>,
    payload: Result<Json<SuggestionRequest>, JsonRejection>,
) -> Result<Json<Vec<ProjectSuggestion>>, AppError> {
    let Json(request) =
        payload.map_err(|e| AppError::InvalidInput(format!("Invalid request body: {e}")))?;

    let (Some(skills), Some(interests)) = (request.skills, request.research_interests) else {
        return Err(AppError::InvalidInput("Missing required data".to_string()));
    };

    let suggestions = generate_suggestions(&skills, &interests, state.config.max_suggestions);
    info!(
        skills = skills.len(),
        interests = interests.len(),
        suggestions = suggestions.len(),
        "suggestions generated"
    );

    Ok(Json(suggestions))
}
