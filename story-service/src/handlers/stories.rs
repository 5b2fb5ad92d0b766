//! Story generation handler.

use axum::{Json, extract::State};
use service_core::error::AppError;

use crate::dtos::StoryRequest;
use crate::models::Story;
use crate::services::metrics::record_story;
use crate::startup::AppState;
use crate::utils::ValidatedJson;

/// Create a story from a theme/genre/length triple.
///
/// Validation runs in the extractor; by the time this body executes the
/// theme is known to be at least 3 characters after trimming.
pub async fn create_story(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<StoryRequest>,
) -> Result<Json<Story>, AppError> {
    let theme = payload.theme.trim();

    tracing::info!(
        theme = %theme,
        genre = %payload.genre,
        length = %payload.length,
        "Generating story"
    );

    let story = state
        .generator
        .generate(theme, &payload.genre, &payload.length)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Story generation failed");
            record_story(&payload.genre, "error");
            AppError::GenerationError(e.into())
        })?;

    record_story(&payload.genre, "ok");

    Ok(Json(story))
}
