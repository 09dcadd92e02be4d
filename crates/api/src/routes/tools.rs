//! Route definitions for the tool catalogs.

use axum::routing::get;
use axum::Router;

use crate::handlers::tools;
use crate::state::AppState;

/// Routes mounted at `/tools`.
///
/// ```text
/// GET /image  -> list_image_tools
/// GET /video  -> list_video_tools
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/image", get(tools::list_image_tools))
        .route("/video", get(tools::list_video_tools))
}
