//! Threadboard - Main Library
//!
//! Threadboard is a minimal threaded discussion board: one root post that
//! accumulates nested replies, kept in memory and served over HTTP.
//!
//! # Module Structure
//!
//! - **`forum`** - The post tree
//!   - `PostStore` with lookup and insert
//!   - Identifier allocation and the append-only reply lists
//!   - Flattened and nested views for rendering
//!
//! - **`shared`** - Types used by both layers
//!   - Error types
//!   - Application configuration
//!
//! - **`backend`** - HTTP façade (only compiled with `ssr` feature)
//!   - Axum router, handlers and askama views
//!   - Application state and startup
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the `backend` module and the
//!   `threadboard-server` binary. Without it the crate is just the in-memory
//!   tree.
//!
//! # Usage
//!
//! ```rust,no_run
//! use threadboard::backend::server::init::create_app;
//! use threadboard::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let app = create_app(&config);
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()?).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The store is shared across handlers as `Arc<PostStore>`. Inserts are
//! serialized by the store's mutation lock; lookups and rendering read through
//! append-only reply lists without taking it.

/// The in-memory post tree
pub mod forum;

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
