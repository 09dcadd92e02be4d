//! Handlers for the tool catalogs (`/api/tools/image`, `/api/tools/video`).

use architect_db::models::tool::{Tool, ToolCategory};
use architect_db::repositories::ToolRepo;
use axum::extract::State;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/tools/image
///
/// Full image tool catalog, sorted ascending by name. No parameters.
pub async fn list_image_tools(State(state): State<AppState>) -> AppResult<Json<Vec<Tool>>> {
    list_catalog(&state, ToolCategory::Image).await
}

/// GET /api/tools/video
///
/// Full video tool catalog, sorted ascending by name. No parameters.
pub async fn list_video_tools(State(state): State<AppState>) -> AppResult<Json<Vec<Tool>>> {
    list_catalog(&state, ToolCategory::Video).await
}

/// Shared catalog read. Any storage failure collapses to a generic
/// category-specific 500; there is no retry and no partial result.
async fn list_catalog(state: &AppState, category: ToolCategory) -> AppResult<Json<Vec<Tool>>> {
    let tools = ToolRepo::list(&state.pool, category).await.map_err(|e| {
        tracing::error!(error = %e, category = category.label(), "Error fetching tools");
        AppError::CatalogUnavailable(category.label())
    })?;
    Ok(Json(tools))
}
