//! Handlers for the community showcase (`/api/showcase`).

use architect_core::error::CoreError;
use architect_core::types::DbId;
use architect_core::validate::{normalize_optional, validate_prompt_text, validate_rating};
use architect_db::models::submission::{CreateSubmission, ShowcaseSubmission};
use architect_db::repositories::SubmissionRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /api/showcase`. Wire names are camelCase to match
/// the form payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub user_id: DbId,
    pub prompt_text: String,
    pub rating: i32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tool_used: Option<String>,
}

/// POST /api/showcase
///
/// Create a showcase entry for the authenticated user. The body's `userId`
/// must match the token subject; the field is kept on the wire for
/// compatibility, not trusted on its own.
pub async fn submit(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmitRequest>,
) -> AppResult<(StatusCode, Json<ShowcaseSubmission>)> {
    if input.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Submission userId does not match the authenticated user".into(),
        )));
    }

    validate_prompt_text(&input.prompt_text)?;
    validate_rating(input.rating)?;

    // Blank optional fields are stored as NULL even if a client sent "".
    let submission = CreateSubmission {
        user_id: auth.user_id,
        prompt_text: input.prompt_text.trim().to_string(),
        rating: input.rating,
        image_url: input.image_url.as_deref().and_then(normalize_optional),
        tool_used: input.tool_used.as_deref().and_then(normalize_optional),
    };

    let created = SubmissionRepo::create(&state.pool, &submission).await?;

    tracing::info!(
        submission_id = created.id,
        user_id = auth.user_id,
        "Showcase submission created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/showcase
///
/// Public listing of showcase entries, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ShowcaseSubmission>>> {
    let entries = SubmissionRepo::list(&state.pool).await?;
    Ok(Json(entries))
}
