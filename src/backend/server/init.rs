/**
 * Server Initialization
 *
 * Builds the post store, seeds it, and wires it into the router.
 *
 * # Initialization Process
 *
 * 1. Create the store with the configured root content
 * 2. Insert each configured seed reply under the root, in order
 * 3. Wrap the store in `AppState`
 * 4. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::state::AppState;
use crate::forum::PostStore;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_app(config: &AppConfig) -> Router<()> {
    tracing::info!("Initializing threadboard server");

    let app_state = create_state(config);
    let app = create_router(app_state, &config.static_dir);

    tracing::info!("Router configured");
    app
}

/// Build the seeded application state
///
/// Exposed separately so callers can keep a handle on the store while the
/// router owns a clone of the state.
pub fn create_state(config: &AppConfig) -> AppState {
    let store = PostStore::new(config.root_content.clone());
    let root = store.root();
    for content in &config.seed_replies {
        store.insert_reply(&root, content.as_str());
    }
    tracing::info!("Post store seeded with {} posts", store.len());

    AppState::new(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forum::PostId;

    #[test]
    fn test_default_state_matches_boot_scenario() {
        let state = create_state(&AppConfig::default());
        let root = state.store.root();
        assert_eq!(root.content(), "Welcome to the forum!");
        assert_eq!(root.reply_ids(), vec![PostId::new(1)]);
        assert_eq!(state.store.find_post(PostId::new(1)).unwrap().content(), "first");
        assert_eq!(state.store.next_id(), PostId::new(2));
    }

    #[test]
    fn test_seed_replies_keep_order() {
        let config = AppConfig::builder()
            .seed_replies(["a", "b", "c"])
            .build()
            .unwrap();
        let state = create_state(&config);
        let contents: Vec<String> = state
            .store
            .root()
            .reply_ids()
            .into_iter()
            .filter_map(|id| state.store.find_post(id))
            .map(|p| p.content().to_string())
            .collect();
        assert_eq!(contents, vec!["a", "b", "c"]);
    }
}
