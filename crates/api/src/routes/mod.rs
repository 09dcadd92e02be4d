pub mod auth;
pub mod health;
pub mod showcase;
pub mod tools;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tools/image   image catalog (public)
/// /tools/video   video catalog (public)
///
/// /signup        create account (public)
/// /login         establish session (public)
///
/// /showcase      GET listing (public), POST submission (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tools", tools::router())
        .merge(auth::router())
        .nest("/showcase", showcase::router())
}
