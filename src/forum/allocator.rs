//! Identifier allocation for new posts.
//!
//! The allocator has no synchronization of its own. The store keeps it inside
//! its mutation lock, so holding the lock is the only way to reach it.

use crate::forum::post::PostId;

/// Issues strictly increasing post identifiers, starting at 1
#[derive(Debug)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Hand out the next identifier and advance by one
    ///
    /// # Panics
    ///
    /// Panics once the 32-bit identifier space is exhausted rather than wrap
    /// around and reissue an identifier.
    pub fn allocate(&mut self) -> PostId {
        let id = PostId::new(self.next);
        self.next = self
            .next
            .checked_add(1)
            .unwrap_or_else(|| panic!("post identifier space exhausted after {id}"));
        id
    }

    /// The identifier the next call to `allocate` will return
    pub fn peek(&self) -> PostId {
        PostId::new(self.next)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_after_root() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.peek(), PostId::new(1));
        assert_eq!(alloc.allocate(), PostId::new(1));
        assert_eq!(alloc.allocate(), PostId::new(2));
        assert_eq!(alloc.peek(), PostId::new(3));
    }

    proptest! {
        #[test]
        fn test_strictly_increasing(count in 1usize..500) {
            let mut alloc = IdAllocator::new();
            let mut last = PostId::ROOT;
            for _ in 0..count {
                let id = alloc.allocate();
                prop_assert!(id > last);
                last = id;
            }
            prop_assert_eq!(last.value() as usize, count);
        }
    }
}
