//! `EventQueue` — the single global time-ordered queue.
//!
//! # Performance note
//!
//! `BTreeMap` gives O(log W) push and pop where W = number of distinct
//! pending instants.  Continuous times rarely collide, so most buckets hold
//! one event; the `VecDeque` bucket only matters for same-instant chains such
//! as `END_MOVING → START_WAITING`.

use std::collections::{BTreeMap, VecDeque};

use swim_core::SimTime;

use crate::Event;

/// A min-priority queue of events keyed by time, FIFO within one instant.
#[derive(Default, Debug)]
pub struct EventQueue {
    inner: BTreeMap<SimTime, VecDeque<Event>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at `event.time`.
    pub fn push(&mut self, event: Event) {
        self.inner.entry(event.time).or_default().push_back(event);
        self.total += 1;
    }

    /// Remove and return the earliest event (oldest first among ties).
    pub fn pop(&mut self) -> Option<Event> {
        let mut bucket = self.inner.first_entry()?;
        let event = bucket.get_mut().pop_front();
        if bucket.get().is_empty() {
            bucket.remove();
        }
        if event.is_some() {
            self.total -= 1;
        }
        event
    }

    /// The earliest pending event without removing it.
    pub fn peek(&self) -> Option<&Event> {
        self.inner.values().next().and_then(|bucket| bucket.front())
    }

    /// The earliest pending instant, or `None` if empty.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    /// Drop every pending event.
    pub fn clear(&mut self) {
        self.inner.clear();
        self.total = 0;
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct pending instants.
    pub fn instant_count(&self) -> usize {
        self.inner.len()
    }
}
