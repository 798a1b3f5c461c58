// SPDX-License-Identifier: MPL-2.0
//! Cancellable actions scheduled against virtual time.
//!
//! Simulated latencies (search results, form processing, redirects) are
//! queued here and released by [`Deferred::take_due`] when a tick reaches
//! their deadline. Nothing sleeps; tests drive time by passing instants.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Handle of a scheduled action, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeferredId(u64);

impl DeferredId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug)]
struct Entry<T> {
    id: DeferredId,
    due: Instant,
    action: T,
}

/// Queue of actions waiting for their deadline.
#[derive(Debug)]
pub struct Deferred<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Deferred<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to become due `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, action: T) -> DeferredId {
        let id = DeferredId::next();
        self.entries.push(Entry {
            id,
            due: now + delay,
            action,
        });
        id
    }

    /// Cancels a pending action. Returns the action if it was still queued.
    pub fn cancel(&mut self, id: DeferredId) -> Option<T> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index).action)
    }

    /// Removes and returns every action due at `now`, earliest deadline first.
    ///
    /// Actions sharing a deadline keep their scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.due <= now);
        self.entries = pending;

        due.sort_by_key(|entry| entry.due);
        due.into_iter().map(|entry| entry.action).collect()
    }

    #[must_use]
    pub fn contains(&self, id: DeferredId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: fn(u64) -> Duration = Duration::from_millis;

    #[test]
    fn nothing_is_due_before_deadline() {
        let start = Instant::now();
        let mut queue = Deferred::new();
        queue.schedule(start, MS(1500), "search");

        assert!(queue.take_due(start + MS(1499)).is_empty());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.take_due(start + MS(1500)), vec!["search"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn due_actions_come_out_in_deadline_order() {
        let start = Instant::now();
        let mut queue = Deferred::new();
        queue.schedule(start, MS(2000), "submit");
        queue.schedule(start, MS(1000), "logout");
        queue.schedule(start, MS(1000), "second-logout");

        assert_eq!(
            queue.take_due(start + MS(5000)),
            vec!["logout", "second-logout", "submit"]
        );
    }

    #[test]
    fn cancelled_action_never_fires() {
        let start = Instant::now();
        let mut queue = Deferred::new();
        let id = queue.schedule(start, MS(2000), "submit");
        queue.schedule(start, MS(3000), "other");

        assert_eq!(queue.cancel(id), Some("submit"));
        assert!(!queue.contains(id));
        assert_eq!(queue.cancel(id), None);
        assert_eq!(queue.take_due(start + MS(5000)), vec!["other"]);
    }

    #[test]
    fn ids_are_unique() {
        let start = Instant::now();
        let mut queue = Deferred::new();
        let a = queue.schedule(start, MS(1), ());
        let b = queue.schedule(start, MS(1), ());
        assert_ne!(a, b);
    }
}
