/**
 * Router Configuration
 *
 * Creates the Axum router that combines the board routes, the JSON API,
 * static file serving and the 404 fallback.
 */

use std::path::Path;

use axum::{
    http::StatusCode,
    routing::get,
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::forum::{
    get_post, index, reply_via_form, reply_via_query, reply_without_id_via_form,
    reply_without_id_via_query,
};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the post store
/// * `static_dir` - Directory served under `/static`
///
/// # Route Details
///
/// - `GET /` - Rendered tree
/// - `GET /reply/{id}?content=...` - Reply, then `302` to `/`
/// - `POST /reply/{id}` - Reply from a form, then `302` to `/`
/// - `GET /api/posts/{id}` - JSON snapshot
/// - `GET /static/*` - Static assets
///
/// The reply route captures the whole rest of the path, so `/reply/` and
/// `/reply/1/extra` answer `400 invalid id` instead of falling through to 404.
/// Anything else answers `404 Not Found`.
pub fn create_router(app_state: AppState, static_dir: &Path) -> Router<()> {
    let router = Router::new()
        .route("/", get(index))
        .route(
            "/reply/",
            get(reply_without_id_via_query).post(reply_without_id_via_form),
        )
        .route("/reply/{*id}", get(reply_via_query).post(reply_via_form))
        .route("/api/posts/{id}", get(get_post));

    // Add static file serving
    let router = router.nest_service("/static", ServeDir::new(static_dir));

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
