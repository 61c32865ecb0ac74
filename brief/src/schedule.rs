//! Repeating timers behind the carousel's automatic advance.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a running interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Source of repeating ticks. Each tick is delivered back as `Msg::Tick(id)`.
pub trait Scheduler {
    fn start_interval(&mut self, period: Duration) -> TimerId;

    /// Stop an interval. Cancelling an unknown or already cancelled id is a no-op.
    fn cancel(&mut self, id: TimerId);
}

#[derive(Debug, Clone, Copy)]
struct Interval {
    period: Duration,
    next_due: Duration,
}

/// Scheduler driven by a virtual clock, for tests and prerendering
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    intervals: BTreeMap<TimerId, Interval>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of intervals still running
    pub fn active(&self) -> usize {
        self.intervals.len()
    }

    /// When the interval will next fire, if it is still running
    pub fn next_due(&self, id: TimerId) -> Option<Duration> {
        self.intervals.get(&id).map(|interval| interval.next_due)
    }

    /// Move the clock forward and return every tick that fell due, in firing order
    pub fn advance(&mut self, by: Duration) -> Vec<TimerId> {
        let target = self.now + by;
        let mut fired = Vec::new();
        loop {
            let due = self
                .intervals
                .iter()
                .filter(|(_, interval)| interval.next_due <= target)
                .min_by_key(|(id, interval)| (interval.next_due, **id))
                .map(|(id, _)| *id);
            let Some(id) = due else {
                break;
            };
            if let Some(interval) = self.intervals.get_mut(&id) {
                self.now = interval.next_due;
                interval.next_due += interval.period;
            }
            fired.push(id);
        }
        self.now = target;
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn start_interval(&mut self, period: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        // A zero period would fire forever within a single advance.
        let period = period.max(Duration::from_millis(1));
        self.intervals.insert(
            id,
            Interval {
                period,
                next_due: self.now + period,
            },
        );
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.intervals.remove(&id);
    }
}
