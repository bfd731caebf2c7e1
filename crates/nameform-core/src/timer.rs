use std::collections::BTreeMap;
use std::time::Instant;

/// One-shot deferred tasks keyed by the instant they come due.
///
/// Nothing here sleeps or spawns: the owner calls
/// [`pop_due`](DeferredQueue::pop_due) from its loop with the current time
/// and receives every task whose deadline has passed. Tasks come out ordered
/// by due instant, and tasks sharing an instant come out in the order they
/// were scheduled.
pub struct DeferredQueue<T> {
    tasks: BTreeMap<(Instant, u64), T>,
    next_seq: u64,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DeferredQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `task` to come due at `due`.
    pub fn schedule(&mut self, due: Instant, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.insert((due, seq), task);
    }

    /// Remove and return every task due at or before `now`, earliest first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<T> {
        let mut due = Vec::new();
        while let Some(entry) = self.tasks.first_entry() {
            if entry.key().0 > now {
                break;
            }
            due.push(entry.remove());
        }
        due
    }

    /// The earliest deadline still pending, if any.
    pub fn next_due(&self) -> Option<Instant> {
        self.tasks.keys().next().map(|&(due, _)| due)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Drop all pending tasks and return how many there were.
    pub fn clear(&mut self) -> usize {
        let dropped = self.tasks.len();
        self.tasks.clear();
        dropped
    }
}
