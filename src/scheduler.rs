//! Tick sources the engine arms and cancels.
//!
//! The engine never sleeps or measures time itself. It asks a
//! [`TickScheduler`] to arm a cadence and cancels it when play stops; the
//! driver loop then asks the concrete scheduler whether a tick is due.

use std::time::{Duration, Instant};

/// Identifies one armed cadence. Cancelling a stale handle does nothing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct TickHandle(u64);

/// Arms and cancels the repeating tick cadence.
pub trait TickScheduler {
    /// Arms a repeating tick every `interval`, replacing any previous cadence.
    fn schedule(&mut self, interval: Duration) -> TickHandle;

    /// Disarms the cadence identified by `handle`.
    fn cancel(&mut self, handle: TickHandle);
}

#[derive(Debug, Clone, Copy)]
struct Armed {
    handle: TickHandle,
    interval: Duration,
    deadline: Instant,
}

/// Wall-clock scheduler polled by a single-threaded driver loop.
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    armed: Option<Armed>,
    next_id: u64,
}

impl IntervalScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms a cadence whose first tick falls one interval after `now`.
    pub fn schedule_at(&mut self, interval: Duration, now: Instant) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.armed = Some(Armed {
            handle,
            interval,
            deadline: now + interval,
        });
        handle
    }

    /// Returns true at most once per elapsed deadline.
    ///
    /// A driver that fell more than one interval behind gets a single tick
    /// and the cadence restarts from `now`, so missed ticks are never replayed.
    pub fn take_due(&mut self, now: Instant) -> bool {
        let Some(armed) = self.armed.as_mut() else {
            return false;
        };

        if now < armed.deadline {
            return false;
        }

        armed.deadline += armed.interval;
        if armed.deadline <= now {
            armed.deadline = now + armed.interval;
        }
        true
    }

    /// Time left until the next tick, if armed.
    #[must_use]
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.armed
            .map(|armed| armed.deadline.saturating_duration_since(now))
    }
}

impl TickScheduler for IntervalScheduler {
    fn schedule(&mut self, interval: Duration) -> TickHandle {
        self.schedule_at(interval, Instant::now())
    }

    fn cancel(&mut self, handle: TickHandle) {
        if self.armed.is_some_and(|armed| armed.handle == handle) {
            self.armed = None;
        }
    }
}

/// One recorded scheduler call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ScheduleCall {
    Schedule(Duration),
    Cancel,
}

/// Scheduler that only records calls. Tests drive ticks by hand.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    armed: Option<(TickHandle, Duration)>,
    next_id: u64,
    calls: Vec<ScheduleCall>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interval of the currently armed cadence.
    #[must_use]
    pub fn armed_interval(&self) -> Option<Duration> {
        self.armed.map(|(_, interval)| interval)
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    #[must_use]
    pub fn calls(&self) -> &[ScheduleCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl TickScheduler for ManualScheduler {
    fn schedule(&mut self, interval: Duration) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id += 1;
        self.armed = Some((handle, interval));
        self.calls.push(ScheduleCall::Schedule(interval));
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if self.armed.is_some_and(|(armed, _)| armed == handle) {
            self.armed = None;
            self.calls.push(ScheduleCall::Cancel);
        }
    }
}
