/**
 * Append-Only Sequence
 *
 * A growable sequence that only ever gains trailing elements. Once an element
 * is published it is never replaced, removed, or reordered, so readers can take
 * a snapshot at any moment and see either the state before an append or the
 * state after it, never something in between.
 *
 * # Synchronization
 *
 * Each sequence carries its own short-lived `parking_lot::RwLock`. Writers hold
 * the write guard only for the duration of a single `Vec::push`; readers hold the
 * read guard only long enough to copy out what they need. This guard is unrelated
 * to the store-wide mutation lock, which readers never touch.
 */

use parking_lot::RwLock;

/// Sequence that supports `push` and reads, but no removal or mutation
#[derive(Debug)]
pub struct AppendOnlyVec<T> {
    items: RwLock<Vec<T>>,
}

impl<T> AppendOnlyVec<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Append an element and return the index it was published at
    pub fn push(&self, item: T) -> usize {
        let mut items = self.items.write();
        items.push(item);
        items.len() - 1
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl<T: Clone> AppendOnlyVec<T> {
    /// Clone the element at `index`, if it has been published
    pub fn get(&self, index: usize) -> Option<T> {
        self.items.read().get(index).cloned()
    }

    /// Copy out every element published so far
    ///
    /// The returned vector is detached from the sequence: later appends are not
    /// reflected in it, and holding it blocks nobody.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.read().clone()
    }
}

impl<T> Default for AppendOnlyVec<T> {
    fn default() -> Self {
        Self::new()
    }
}
