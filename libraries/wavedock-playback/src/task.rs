//! Cancellable interval tasks
//!
//! Timers are plain values owned by whoever requested them: a seek request
//! owns its polling task and the player owns the playhead refresher.
//! Dropping the value cancels the task. The host drives time through
//! `PagePlayer::advance` and can ask for the next deadline to sleep until.

use std::time::Duration;

/// A repeating task with a fixed period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTask {
    period: Duration,
    next_due: Duration,
}

impl IntervalTask {
    /// Schedule the first run one period after `now`
    pub fn start(period: Duration, now: Duration) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Duration {
        self.next_due
    }

    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.next_due
    }

    /// Consume the run due at `now`, if any
    ///
    /// Missed runs are collapsed into one; the next run is scheduled one
    /// period after `now`.
    pub fn fire(&mut self, now: Duration) -> bool {
        if !self.is_due(now) {
            return false;
        }

        self.next_due = now + self.period;
        true
    }
}
