//! One-shot Timers
//!
//! A small deadline queue standing in for "run this after a delay" on the UI
//! thread. Deadlines are absolute times on the same clock the controller is
//! driven with; nothing fires on its own, the owner drains due entries from
//! its frame tick. Every scheduled entry gets a [`TimerHandle`] so it can be
//! cancelled, and dropping the owner (or calling [`TimerQueue::cancel_all`])
//! guarantees no callback outlives the screen.

use std::time::Duration;

/// Identifies one scheduled entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct PendingTimer<A> {
    handle: TimerHandle,
    deadline: Duration,
    action: A,
}

/// Pending one-shot actions ordered by deadline
#[derive(Debug, Clone)]
pub struct TimerQueue<A> {
    pending: Vec<PendingTimer<A>>,
    next_id: u64,
}

impl<A> Default for TimerQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> TimerQueue<A> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `action` to become due at `deadline`
    pub fn schedule(&mut self, deadline: Duration, action: A) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            handle,
            deadline,
            action,
        });
        handle
    }

    /// Returns false if the timer already fired or was cancelled
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.handle != handle);
        self.pending.len() != before
    }

    /// Drop every pending timer, returning how many were cancelled
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    pub fn contains(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|timer| timer.handle == handle)
    }

    /// Remove and return every action due at `now`.
    ///
    /// Ordered by deadline, ties broken by scheduling order.
    pub fn take_due(&mut self, now: Duration) -> Vec<A> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|timer| timer.deadline <= now);
        self.pending = pending;
        due.sort_by_key(|timer| (timer.deadline, timer.handle));
        due.into_iter().map(|timer| timer.action).collect()
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|timer| timer.deadline).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
