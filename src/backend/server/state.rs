/**
 * Application State Management
 *
 * `AppState` is the single state container handed to the Axum router. It is
 * built once at startup and cloned into every handler; the clones share one
 * `PostStore` through an `Arc`.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets handlers take just the store:
 *
 * ```rust
 * use std::sync::Arc;
 * use axum::extract::State;
 * use threadboard::forum::PostStore;
 *
 * async fn handler(State(store): State<Arc<PostStore>>) -> String {
 *     store.root().content().to_string()
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::forum::PostStore;

/// Application state shared by all request handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// The discussion tree
    ///
    /// Lookups and rendering read it without locking; inserts go through the
    /// store's own mutation lock.
    pub store: Arc<PostStore>,
}

impl AppState {
    pub fn new(store: PostStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Implement FromRef for the post store
///
/// This allows Axum handlers to extract `Arc<PostStore>` directly from
/// `AppState` using `State(Arc<PostStore>)`.
impl FromRef<AppState> for Arc<PostStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}
