//! Forum Core
//!
//! The in-memory discussion tree: a single root post with nested replies.
//! This module has no I/O and no HTTP knowledge; the backend façade drives it
//! through two calls, [`PostStore::find_post`] and [`PostStore::insert_reply`].
//!
//! # Module Structure
//!
//! ```text
//! forum/
//! ├── mod.rs          - Module exports and documentation
//! ├── append_only.rs  - Append-only sequence shared by readers and writers
//! ├── allocator.rs    - Strictly increasing identifier allocation
//! ├── post.rs         - PostId and Post node types
//! ├── store.rs        - PostStore: arena, mutation lock, lookup and insert
//! └── view.rs         - Flattened and nested read-only views for rendering
//! ```
//!
//! # Concurrency
//!
//! Inserts are serialized by one store-wide mutation lock. Lookups and views
//! never take that lock; they read through append-only sequences and may lag
//! behind an insert that is still in progress.
//!
//! # Example
//!
//! ```rust
//! use threadboard::forum::{PostId, PostStore};
//!
//! let store = PostStore::default();
//! let root = store.root();
//! let first = store.insert_reply(&root, "first");
//! assert_eq!(first, PostId::new(1));
//!
//! let post = store.find_post(first).expect("just inserted");
//! assert_eq!(post.content(), "first");
//! assert!(store.find_post(PostId::new(99)).is_none());
//! ```

/// Append-only sequence
pub mod append_only;

/// Identifier allocation
pub mod allocator;

/// Post node types
pub mod post;

/// The post store
pub mod store;

/// Rendering views over the tree
pub mod view;

pub use allocator::IdAllocator;
pub use append_only::AppendOnlyVec;
pub use post::{Post, PostId};
pub use store::{PostStore, DEFAULT_ROOT_CONTENT};
pub use view::{PostSnapshot, ThreadEntry};
