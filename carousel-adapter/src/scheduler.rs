use alloc::vec::Vec;

use carousel::{Scheduler, TimerHandle};

/// A [`Scheduler`] driven by a host-supplied millisecond clock.
///
/// Nothing fires on its own: the host calls [`TickScheduler::advance`] from its frame loop or
/// timer and delivers the returned handles to the controller. Cancelled handles are dropped
/// immediately and never come back out of `advance`.
#[derive(Clone, Debug, Default)]
pub struct TickScheduler {
    now_ms: u64,
    next: u64,
    pending: Vec<Deadline>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deadline {
    pub handle: TimerHandle,
    pub due_ms: u64,
}

impl TickScheduler {
    pub fn new(now_ms: u64) -> Self {
        Self {
            now_ms,
            next: 0,
            pending: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> &[Deadline] {
        &self.pending
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|d| d.due_ms).min()
    }

    /// Moves the clock to `now_ms` and removes every deadline at or before it.
    ///
    /// Returns the due handles ordered by deadline (ties in scheduling order). The clock never
    /// runs backwards; an earlier `now_ms` is treated as the current time.
    pub fn advance(&mut self, now_ms: u64) -> Vec<TimerHandle> {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;

        let mut due: Vec<Deadline> = Vec::new();
        self.pending.retain(|d| {
            if d.due_ms <= now {
                due.push(*d);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|d| (d.due_ms, d.handle));
        due.into_iter().map(|d| d.handle).collect()
    }
}

impl Scheduler for TickScheduler {
    fn schedule(&mut self, delay_ms: u64) -> TimerHandle {
        self.next = self.next.wrapping_add(1);
        let handle = TimerHandle(self.next);
        let due_ms = self.now_ms.saturating_add(delay_ms);
        self.pending.push(Deadline { handle, due_ms });
        atrace!(handle = handle.0, due_ms, "TickScheduler::schedule");
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|d| d.handle != handle);
    }
}
