//! Route definitions for the community showcase.

use axum::routing::get;
use axum::Router;

use crate::handlers::showcase;
use crate::state::AppState;

/// Routes mounted at `/showcase`.
///
/// ```text
/// GET  /  -> list (public)
/// POST /  -> submit (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(showcase::list).post(showcase::submit))
}
