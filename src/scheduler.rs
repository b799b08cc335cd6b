//! Cancellable timer scheduling
//!
//! The core's only deferral mechanism. Everything runs on one cooperative
//! event loop; a timer is the one way work is postponed. Every scheduled
//! event returns a handle, and the owner cancels outstanding handles on
//! teardown or rebuild so no callback outlives the widget it was armed for.

/// Opaque ticket for one scheduled event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Deferred work the wheel controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One-second countdown step during a spin
    CountdownTick,
    /// The spin animation has visually settled; controls may re-enable
    SpinComplete,
}

/// Event-loop timer facility the embedding environment provides
pub trait Scheduler {
    /// Arm a one-shot timer firing `delay_secs` from now
    fn schedule(&mut self, delay_secs: f32, event: TimerEvent) -> TimerHandle;
    /// Disarm a pending timer; unknown or already-fired handles are ignored
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    due_ms: u64,
    handle: TimerHandle,
    event: TimerEvent,
}

/// Deterministic scheduler driven by a simulated clock.
///
/// Used by tests and the demo driver; a real embedding implements
/// [`Scheduler`] over its own event-loop timers. Advance the clock in steps
/// no coarser than the finest armed timer (one second for the countdown) so
/// rescheduled chains keep their cadence.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_handle: u64,
    pending: Vec<PendingTimer>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated clock position in seconds
    pub fn now_secs(&self) -> f32 {
        self.now_ms as f32 / 1000.0
    }

    /// Number of armed timers
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Advance the clock by `secs`, draining events that come due within
    /// the window in firing order.
    pub fn advance(&mut self, secs: f32) -> Vec<TimerEvent> {
        self.now_ms += (secs * 1000.0).round() as u64;
        let now = self.now_ms;

        let mut due: Vec<PendingTimer> = self
            .pending
            .iter()
            .copied()
            .filter(|t| t.due_ms <= now)
            .collect();
        self.pending.retain(|t| t.due_ms > now);
        due.sort_by_key(|t| (t.due_ms, t.handle.0));
        due.into_iter().map(|t| t.event).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay_secs: f32, event: TimerEvent) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(PendingTimer {
            due_ms: self.now_ms + (delay_secs * 1000.0).round() as u64,
            handle,
            event,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|t| t.handle != handle);
    }
}
