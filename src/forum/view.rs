//! Read-only views of the tree for rendering.
//!
//! Both views are built without the mutation lock, the same way `find_post`
//! walks the tree, and reflect whatever replies were published at the moment
//! each reply list was read.

use serde::Serialize;

use crate::forum::post::{Post, PostId};
use crate::forum::store::PostStore;

/// One post in a pre-order listing of a thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadEntry {
    pub id: PostId,
    pub content: String,
    /// Distance from the post the listing started at
    pub depth: usize,
}

/// Nested, owned copy of a post and the replies below it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSnapshot {
    pub id: PostId,
    pub content: String,
    /// Number of direct replies, even when `replies` was cut off by depth
    pub reply_count: usize,
    pub replies: Vec<PostSnapshot>,
}

impl PostStore {
    /// Flatten the subtree under `start` in display order
    ///
    /// Each reply follows its parent, and siblings keep insertion order, so
    /// indenting entries by `depth` reproduces the nested thread.
    pub fn thread(&self, start: &Post) -> Vec<ThreadEntry> {
        let mut entries = Vec::new();
        let mut stack = vec![(start.id(), 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let Some(post) = self.resolve(id) else {
                continue;
            };
            for child in post.reply_ids().into_iter().rev() {
                stack.push((child, depth + 1));
            }
            entries.push(ThreadEntry {
                id,
                content: post.content().to_string(),
                depth,
            });
        }
        entries
    }

    /// Copy `post` and up to `max_depth` levels of replies into owned values
    ///
    /// Posts at the depth limit are returned with an empty `replies` list but
    /// an accurate `reply_count`, which keeps the recursion bounded however long
    /// a reply chain grows.
    pub fn snapshot(&self, post: &Post, max_depth: usize) -> PostSnapshot {
        let reply_ids = post.reply_ids();
        let replies = if max_depth == 0 {
            Vec::new()
        } else {
            reply_ids
                .iter()
                .filter_map(|id| self.resolve(*id))
                .map(|child| self.snapshot(&child, max_depth - 1))
                .collect()
        };
        PostSnapshot {
            id: post.id(),
            content: post.content().to_string(),
            reply_count: reply_ids.len(),
            replies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_store() -> PostStore {
        let store = PostStore::default();
        let root = store.root();
        let first = store.insert_reply(&root, "first");
        store.insert_reply(&root, "second");
        if let Some(first) = store.find_post(first) {
            store.insert_reply(&first, "nested");
        }
        store
    }

    #[test]
    fn test_thread_is_pre_order_with_depth() {
        let store = sample_store();
        let listing: Vec<(u32, String, usize)> = store
            .thread(&store.root())
            .into_iter()
            .map(|e| (e.id.value(), e.content, e.depth))
            .collect();
        let expected: [(u32, &str, usize); 4] = [
            (0, "Welcome to the forum!", 0),
            (1, "first", 1),
            (3, "nested", 2),
            (2, "second", 1),
        ];
        let expected: Vec<(u32, String, usize)> = expected
            .iter()
            .map(|&(id, content, depth)| (id, content.to_string(), depth))
            .collect();
        assert_eq!(listing, expected);
    }

    #[test]
    fn test_thread_of_subtree() {
        let store = sample_store();
        let first = store.find_post(PostId::new(1)).unwrap();
        let listing = store.thread(&first);
        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].depth, 0);
        assert_eq!(listing[1].content, "nested");
        assert_eq!(listing[1].depth, 1);
    }

    #[test]
    fn test_snapshot_serializes_nested_replies() {
        let store = sample_store();
        let first = store.find_post(PostId::new(1)).unwrap();
        let json = serde_json::to_value(store.snapshot(&first, 4)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "content": "first",
                "reply_count": 1,
                "replies": [{ "id": 3, "content": "nested", "reply_count": 0, "replies": [] }]
            })
        );
    }

    #[test]
    fn test_snapshot_stops_at_depth_limit() {
        let store = sample_store();
        let snap = store.snapshot(&store.root(), 1);
        assert_eq!(snap.reply_count, 2);
        assert_eq!(snap.replies.len(), 2);
        assert_eq!(snap.replies[0].content, "first");
        assert_eq!(snap.replies[0].reply_count, 1);
        assert!(snap.replies[0].replies.is_empty());

        let bare = store.snapshot(&store.root(), 0);
        assert_eq!(bare.reply_count, 2);
        assert!(bare.replies.is_empty());
    }
}
