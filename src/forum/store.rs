/**
 * Post Store
 *
 * Owns the discussion tree, the identifier allocator, and the mutation lock.
 *
 * # Representation
 *
 * Posts live in a flat arena indexed by identifier. Each post keeps the
 * identifiers of its replies, not the replies themselves, so ownership is a
 * single table and there are no parent/child reference cycles. The root sits
 * at index 0 and every allocated identifier `n` sits at index `n`.
 *
 * # Concurrency
 *
 * - `insert_reply` holds the mutation lock for the whole of allocate + publish,
 *   so only one insert runs at a time and no identifier is handed out twice.
 * - `find_post` never takes the mutation lock. It walks the tree through
 *   append-only sequences, so it may run alongside an insert and simply not see
 *   the reply being added yet.
 *
 * A reply is pushed into the arena before its identifier is pushed into the
 * parent's reply list. A reader that can see an identifier can therefore always
 * resolve it to a fully built post.
 */

use std::sync::Arc;

use parking_lot::Mutex;

use crate::forum::allocator::IdAllocator;
use crate::forum::append_only::AppendOnlyVec;
use crate::forum::post::{Post, PostId};

/// Content of the root post when none is configured
pub const DEFAULT_ROOT_CONTENT: &str = "Welcome to the forum!";

/// In-memory tree of posts shared by every request handler
#[derive(Debug)]
pub struct PostStore {
    arena: AppendOnlyVec<Arc<Post>>,
    /// The mutation lock. Guarding the allocator with it means an identifier
    /// can only be drawn while inserts are serialized.
    allocator: Mutex<IdAllocator>,
}

impl PostStore {
    /// Create a store holding only the root post
    pub fn new(root_content: impl Into<String>) -> Self {
        let arena = AppendOnlyVec::new();
        arena.push(Arc::new(Post::new(PostId::ROOT, root_content.into())));
        Self {
            arena,
            allocator: Mutex::new(IdAllocator::new()),
        }
    }

    /// Handle to the root post
    pub fn root(&self) -> Arc<Post> {
        // Index 0 is filled in `new` and the arena never shrinks.
        self.arena
            .get(PostId::ROOT.index())
            .unwrap_or_else(|| unreachable!("post store constructed without a root"))
    }

    /// Depth-first search for the post with `id`
    ///
    /// Visits posts in pre-order starting at the root, following each reply list
    /// in insertion order, and returns the first match. By the uniqueness of
    /// identifiers that is the only match.
    ///
    /// Runs without the mutation lock. Replies appended while the search is in
    /// progress may or may not be visited.
    ///
    /// # Returns
    ///
    /// - `Some(post)` if a post with `id` is reachable from the root
    /// - `None` if no such post has been inserted
    pub fn find_post(&self, id: PostId) -> Option<Arc<Post>> {
        let mut stack = vec![self.root()];
        while let Some(post) = stack.pop() {
            if post.id() == id {
                return Some(post);
            }
            // Push in reverse so the first reply is visited first.
            for child in post.reply_ids().into_iter().rev() {
                if let Some(child) = self.resolve(child) {
                    stack.push(child);
                }
            }
        }
        None
    }

    /// Append a reply with `content` under `parent`
    ///
    /// `parent` must be a handle obtained from this store. Any content is
    /// accepted, including the empty string.
    ///
    /// # Returns
    ///
    /// The identifier assigned to the new reply.
    pub fn insert_reply(&self, parent: &Post, content: impl Into<String>) -> PostId {
        let mut allocator = self.allocator.lock();
        debug_assert!(
            self.resolve(parent.id())
                .is_some_and(|p| std::ptr::eq(Arc::as_ptr(&p), parent)),
            "parent {} does not belong to this store",
            parent.id()
        );

        let id = allocator.allocate();
        let index = self.arena.push(Arc::new(Post::new(id, content.into())));
        debug_assert_eq!(index, id.index());
        parent.append_reply(id);
        drop(allocator);

        tracing::debug!(%id, parent = %parent.id(), "inserted reply");
        id
    }

    /// Number of posts in the tree, root included
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Always false: the root is present from construction.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// The identifier the next insert will receive
    pub fn next_id(&self) -> PostId {
        self.allocator.lock().peek()
    }

    /// Look up a post by its arena slot
    ///
    /// Only used for identifiers read out of a reply list, which are always
    /// published in the arena first.
    pub(crate) fn resolve(&self, id: PostId) -> Option<Arc<Post>> {
        self.arena.get(id.index())
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_CONTENT)
    }
}
