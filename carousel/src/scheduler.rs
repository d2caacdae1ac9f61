use crate::TimerHandle;

/// The host's one-shot timer facility.
///
/// Scheduling is fire-and-forget: when the delay elapses, the host calls
/// [`crate::SlideController::on_timer_fired`] with the returned handle. The controller keeps at
/// most one handle outstanding and always cancels it before dropping it.
pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u64) -> TimerHandle;

    /// Must be a no-op for handles that already fired or were never issued.
    fn cancel(&mut self, handle: TimerHandle);
}

/// A scheduler that issues handles but never fires them.
///
/// Useful for sliders without auto-advance, or when the host drives fires by hand.
#[derive(Clone, Debug, Default)]
pub struct NullScheduler {
    next: u64,
}

impl Scheduler for NullScheduler {
    fn schedule(&mut self, _delay_ms: u64) -> TimerHandle {
        self.next = self.next.wrapping_add(1);
        TimerHandle(self.next)
    }

    fn cancel(&mut self, _handle: TimerHandle) {}
}
