//! Askama templates for the board views

use askama::Template;

use crate::forum::ThreadEntry;

/// Index page: the whole tree from the root
///
/// Entries arrive in pre-order with a depth, and `post.html` indents each one
/// by its depth, so the template never has to recurse.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub entries: Vec<ThreadEntry>,
}
