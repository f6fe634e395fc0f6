//! Board Backend Module
//!
//! HTTP handlers and views for the discussion board.
//!
//! - **`handlers`** - Index, reply and JSON snapshot handlers
//! - **`templates`** - Askama views

/// Board request handlers
pub mod handlers;

/// Askama templates
pub mod templates;

pub use handlers::{
    get_post, index, reply_via_form, reply_via_query, reply_without_id_via_form,
    reply_without_id_via_query,
};
