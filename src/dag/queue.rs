// src/dag/queue.rs

//! FIFO holding area for tasks not yet confirmed ready.

use std::collections::{HashMap, VecDeque};

use crate::types::TaskId;

/// Pending queue of task ids.
///
/// Keeps an occurrence count per id next to the FIFO so that `contains`
/// does not scan the queue. Duplicate ids are allowed and counted.
#[derive(Debug, Clone, Default)]
pub struct PendingQueue {
    items: VecDeque<TaskId>,
    counts: HashMap<TaskId, usize>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the back.
    pub fn enqueue(&mut self, id: TaskId) {
        *self.counts.entry(id.clone()).or_insert(0) += 1;
        self.items.push_back(id);
    }

    /// Remove from the front.
    pub fn dequeue(&mut self) -> Option<TaskId> {
        let id = self.items.pop_front()?;
        if let Some(count) = self.counts.get_mut(&id) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&id);
            }
        }
        Some(id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.counts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Queued ids, front first.
    pub fn iter(&self) -> impl Iterator<Item = &TaskId> {
        self.items.iter()
    }
}

impl Extend<TaskId> for PendingQueue {
    fn extend<I: IntoIterator<Item = TaskId>>(&mut self, iter: I) {
        for id in iter {
            self.enqueue(id);
        }
    }
}
