//! Simulated timer queue
//!
//! Behaviours never sleep. They schedule one-shot timers on a
//! [`TimerQueue`] owned by the host and receive the fired [`TimerId`]s back
//! when the host advances the clock. Cancelled or fired timers are removed
//! from the queue, so a stale id can never fire twice.

use std::time::Duration;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a scheduled one-shot timer
    pub struct TimerId;
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    due: Duration,
    /// Insertion sequence, breaks ties between timers due at the same time
    seq: u64,
}

/// One-shot timers on a simulated clock
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_seq: u64,
    timers: SlotMap<TimerId, Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time since the queue was created
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule a timer that fires `delay` from now
    pub fn schedule(&mut self, delay: Duration) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(Timer {
            due: self.now + delay,
            seq,
        })
    }

    /// Cancel a pending timer, returning true if it was still pending
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    /// Returns true if the timer has neither fired nor been cancelled
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Number of pending timers
    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Advance the clock and return every timer that fired, in due order
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerId> {
        self.now += elapsed;
        let now = self.now;

        let mut fired: Vec<(TimerId, Timer)> = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.due <= now)
            .map(|(id, timer)| (id, *timer))
            .collect();
        fired.sort_by_key(|(_, timer)| (timer.due, timer.seq));

        for (id, _) in &fired {
            self.timers.remove(*id);
        }
        fired.into_iter().map(|(id, _)| id).collect()
    }
}
