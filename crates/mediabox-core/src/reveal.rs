//! Debounced scroll reveal.
//!
//! Every intersection change of a content block cancels the block's
//! pending reveal. Only a block that stays in view until its timer fires
//! is revealed, so quick in/out toggling near the viewport edge does
//! nothing.

use std::collections::HashMap;

/// Pending reveal timers, one per content block.
///
/// `T` is a timer handle that cancels its timer when dropped.
#[derive(Debug)]
pub struct RevealTimers<T> {
    pending: HashMap<usize, T>,
}

impl<T> RevealTimers<T> {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    /// Record an intersection change of block `index`.
    ///
    /// The block's pending timer is dropped. If the block is now
    /// intersecting, `schedule` starts a fresh one.
    pub fn update(&mut self, index: usize, intersecting: bool, schedule: impl FnOnce() -> T) {
        self.pending.remove(&index);
        if intersecting {
            self.pending.insert(index, schedule());
        }
    }

    pub fn is_pending(&self, index: usize) -> bool {
        self.pending.contains_key(&index)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl<T> Default for RevealTimers<T> {
    fn default() -> Self {
        Self::new()
    }
}
