//! Deterministic timeline of delayed events.
//!
//! Both engines are single-threaded state machines whose only suspension
//! points are timed delays. Instead of real timers, each engine owns a
//! `Timeline` with a virtual clock: handlers `schedule` follow-up events,
//! and the caller drives time forward with `pop_due`/`settle`.
//!
//! ## Ordering
//!
//! Events fire in due-time order. Events due at the same instant fire in
//! the order they were scheduled.
//!
//! ## Teardown
//!
//! `reset()` drops every pending event and bumps the epoch. A game reset
//! calls it so no timer from a previous game can touch the new one.

use std::time::Duration;

#[derive(Clone, Debug)]
struct Scheduled<E> {
    due: Duration,
    seq: u64,
    event: E,
}

/// Virtual clock with a queue of pending events.
#[derive(Clone, Debug)]
pub struct Timeline<E> {
    now: Duration,
    epoch: u64,
    next_seq: u64,
    /// Sorted by `(due, seq)`, earliest first.
    pending: Vec<Scheduled<E>>,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            epoch: 0,
            next_seq: 0,
            pending: Vec::new(),
        }
    }
}

impl<E> Timeline<E> {
    /// Create an empty timeline at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of resets so far.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Due time of the earliest pending event.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.first().map(|s| s.due)
    }

    /// Schedule `event` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, event: E) {
        let due = self.now.saturating_add(delay);
        let seq = self.next_seq;
        self.next_seq += 1;

        let index = self
            .pending
            .partition_point(|s| (s.due, s.seq) <= (due, seq));
        self.pending.insert(index, Scheduled { due, seq, event });
    }

    /// Pop the earliest event due at or before `until`, moving the clock
    /// to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<E> {
        match self.pending.first() {
            Some(first) if first.due <= until => {
                let scheduled = self.pending.remove(0);
                self.now = self.now.max(scheduled.due);
                Some(scheduled.event)
            }
            _ => None,
        }
    }

    /// Move the clock forward to `until` (never backwards).
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Drop all pending events and start a new epoch.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(300), "c");
        timeline.schedule(ms(100), "a");
        timeline.schedule(ms(200), "b");

        assert_eq!(timeline.pop_due(ms(1000)), Some("a"));
        assert_eq!(timeline.now(), ms(100));
        assert_eq!(timeline.pop_due(ms(1000)), Some("b"));
        assert_eq!(timeline.pop_due(ms(1000)), Some("c"));
        assert_eq!(timeline.pop_due(ms(1000)), None);
        assert_eq!(timeline.now(), ms(300));
    }

    #[test]
    fn test_same_instant_keeps_schedule_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(50), 1);
        timeline.schedule(ms(50), 2);
        timeline.schedule(ms(50), 3);

        let fired: Vec<_> = std::iter::from_fn(|| timeline.pop_due(ms(50))).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn test_not_due_yet() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(500), ());

        assert_eq!(timeline.pop_due(ms(499)), None);
        timeline.settle(ms(499));
        assert_eq!(timeline.now(), ms(499));
        assert_eq!(timeline.next_due(), Some(ms(500)));
        assert_eq!(timeline.pop_due(ms(500)), Some(()));
    }

    #[test]
    fn test_schedule_is_relative_to_now() {
        let mut timeline = Timeline::new();
        timeline.settle(ms(1000));
        timeline.schedule(ms(250), ());
        assert_eq!(timeline.next_due(), Some(ms(1250)));
    }

    #[test]
    fn test_settle_never_rewinds() {
        let mut timeline: Timeline<()> = Timeline::new();
        timeline.settle(ms(100));
        timeline.settle(ms(40));
        assert_eq!(timeline.now(), ms(100));
    }

    #[test]
    fn test_reset_drops_pending() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(10), ());
        timeline.schedule(ms(20), ());
        assert_eq!(timeline.pending_count(), 2);

        timeline.reset();
        assert!(timeline.is_idle());
        assert_eq!(timeline.epoch(), 1);
        assert_eq!(timeline.pop_due(ms(100)), None);
    }
}
