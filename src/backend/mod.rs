//! Backend Module
//!
//! The HTTP façade of the board, compiled only with the `ssr` feature. It
//! parses requests, calls into [`PostStore`](crate::forum::PostStore) and
//! renders the tree; the tree itself lives in [`crate::forum`].
//!
//! # Architecture
//!
//! - **`server`** - Configuration loading, application state, startup
//! - **`routes`** - Router assembly
//! - **`forum`** - Board handlers and askama views
//! - **`error`** - Backend error types and their HTTP responses
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - threadboard-server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── forum/          - Board handlers and templates
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds an `Arc<PostStore>` cloned into every handler. There is no
//! outer lock around the store: inserts are serialized inside it, and reads
//! go straight to the append-only reply lists.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. A malformed identifier becomes
//! `400`, an unknown one `404`; neither changes the tree.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Board handlers and views
pub mod forum;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::{create_app, AppState};
pub use error::BackendError;
