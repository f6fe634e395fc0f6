//! Post Types
//!
//! A post is one node of the discussion tree. Its `id` and `content` are fixed
//! when it is created; the only thing that changes afterwards is its list of
//! replies, which grows by appending child identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::forum::append_only::AppendOnlyVec;
use crate::shared::SharedError;

/// Identifier of a post
///
/// Identifiers are non-negative 32-bit integers. `PostId::ROOT` (`0`) belongs
/// to the root post; every other identifier comes from the store's allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(u32);

impl PostId {
    /// Identifier of the root post
    pub const ROOT: PostId = PostId(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// Position of this post in the store's arena
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PostId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl FromStr for PostId {
    type Err = SharedError;

    /// Parse a base-10 identifier such as the trailing segment of `/reply/42`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>()
            .map(PostId)
            .map_err(|e| SharedError::invalid_id(s, e.to_string()))
    }
}

/// A node in the discussion tree
///
/// Posts are shared as `Arc<Post>` handles. A handle obtained from
/// [`PostStore::find_post`](crate::forum::PostStore::find_post) stays valid for
/// the life of the store and can be passed back to
/// [`PostStore::insert_reply`](crate::forum::PostStore::insert_reply).
#[derive(Debug)]
pub struct Post {
    id: PostId,
    content: String,
    replies: AppendOnlyVec<PostId>,
}

impl Post {
    pub(crate) fn new(id: PostId, content: String) -> Self {
        Self {
            id,
            content,
            replies: AppendOnlyVec::new(),
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Identifiers of the direct replies, in insertion order
    pub fn reply_ids(&self) -> Vec<PostId> {
        self.replies.snapshot()
    }

    pub fn reply_count(&self) -> usize {
        self.replies.len()
    }

    pub(crate) fn append_reply(&self, id: PostId) {
        self.replies.push(id);
    }
}
