/**
 * Board Handlers
 *
 * The request façade over `PostStore`. Handlers parse the identifier out of
 * the path, call `find_post` and then `insert_reply`, and render views from
 * the root. They never reach into the tree directly.
 *
 * # Routes
 *
 * - `GET /` - Render the whole tree
 * - `GET /reply/{id}?content=...` - Insert a reply, then redirect to `/`
 * - `POST /reply/{id}` - Same, with `content` as a form field
 * - `GET /api/posts/{id}?depth=N` - JSON snapshot of a post and its replies
 *
 * Everything after `/reply/` is the identifier, so `/reply/` and
 * `/reply/1/extra` reach the handlers and are rejected as malformed.
 */

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Form, Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::backend::error::BackendError;
use crate::backend::forum::templates::IndexTemplate;
use crate::forum::{Post, PostId, PostSnapshot, PostStore};
use crate::shared::SharedError;

/// Reply levels included by the JSON route when `depth` is not given
pub const DEFAULT_SNAPSHOT_DEPTH: usize = 8;

/// Upper bound on the `depth` a client may ask for
pub const MAX_SNAPSHOT_DEPTH: usize = 64;

/// Reply content, from the query string or a form body
#[derive(Debug, Default, Deserialize)]
pub struct ReplyForm {
    /// Missing content is treated as an empty reply
    #[serde(default)]
    pub content: String,
}

/// Query parameters for the JSON route
#[derive(Debug, Default, Deserialize)]
pub struct SnapshotQuery {
    pub depth: Option<usize>,
}

/// Render the index page
pub async fn index(State(store): State<Arc<PostStore>>) -> Result<Html<String>, BackendError> {
    let template = IndexTemplate {
        entries: store.thread(&store.root()),
    };
    Ok(Html(template.render()?))
}

/// Insert a reply with content from the query string
pub async fn reply_via_query(
    State(store): State<Arc<PostStore>>,
    Path(raw_id): Path<String>,
    Query(form): Query<ReplyForm>,
) -> Result<Response, BackendError> {
    reply(&store, &raw_id, form.content)
}

/// Insert a reply with content from a submitted form
pub async fn reply_via_form(
    State(store): State<Arc<PostStore>>,
    Path(raw_id): Path<String>,
    Form(form): Form<ReplyForm>,
) -> Result<Response, BackendError> {
    reply(&store, &raw_id, form.content)
}

/// `GET /reply/` with nothing after the slash
pub async fn reply_without_id_via_query(
    State(store): State<Arc<PostStore>>,
    Query(form): Query<ReplyForm>,
) -> Result<Response, BackendError> {
    reply(&store, "", form.content)
}

/// `POST /reply/` with nothing after the slash
pub async fn reply_without_id_via_form(
    State(store): State<Arc<PostStore>>,
    Form(form): Form<ReplyForm>,
) -> Result<Response, BackendError> {
    reply(&store, "", form.content)
}

/// JSON snapshot of a post and its replies
pub async fn get_post(
    State(store): State<Arc<PostStore>>,
    Path(raw_id): Path<String>,
    Query(query): Query<SnapshotQuery>,
) -> Result<Json<PostSnapshot>, BackendError> {
    let post = lookup(&store, &raw_id)?;
    let depth = query
        .depth
        .unwrap_or(DEFAULT_SNAPSHOT_DEPTH)
        .min(MAX_SNAPSHOT_DEPTH);
    Ok(Json(store.snapshot(&post, depth)))
}

fn reply(store: &PostStore, raw_id: &str, content: String) -> Result<Response, BackendError> {
    let parent = lookup(store, raw_id)?;
    let id = store.insert_reply(&parent, content);
    tracing::info!(%id, parent = %parent.id(), "Reply added");
    Ok(redirect_to_index())
}

/// Parse `raw_id` and find the matching post
fn lookup(store: &PostStore, raw_id: &str) -> Result<Arc<Post>, BackendError> {
    let id: PostId = raw_id.parse()?;
    store
        .find_post(id)
        .ok_or_else(|| SharedError::not_found(id).into())
}

/// `302 Found` back to the index so the browser re-renders the tree
fn redirect_to_index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}
