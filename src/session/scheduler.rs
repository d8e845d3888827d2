//! Timer scheduling on a virtual clock.
//!
//! The host reports elapsed wall time; the scheduler turns it into an
//! ordered stream of firings: the recurring level tick and one-shot
//! continuations. Nothing runs on its own thread, so every firing is
//! processed against the latest committed session.
//!
//! Firings come out in due-time order. When a tick and a one-shot fall due
//! at the same instant the tick goes first; one-shots with the same due
//! time fire in scheduling order.

use serde::Serialize;

use crate::core::Millis;

/// Identifier of a pending card strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StrikeId(pub u64);

/// A delayed continuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TimerTask {
    /// Remove the feedback message shown at `version`.
    ClearFeedback { version: u64 },
    /// Commit the damage of a played card.
    ResolveStrike { strike: StrikeId },
    /// End the post-mistake lockout on `level_index` and clear the
    /// mistake message shown at `version`.
    StunExpiry { level_index: usize, version: u64 },
}

/// Something that fell due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fired {
    Tick,
    Task(TimerTask),
}

#[derive(Clone, Debug)]
struct Scheduled {
    due: Millis,
    seq: u64,
    task: TimerTask,
}

/// Single authoritative clock for a session.
#[derive(Clone, Debug)]
pub struct Scheduler {
    now: Millis,
    tick_interval: Millis,
    next_tick: Option<Millis>,
    timers: Vec<Scheduled>,
    seq: u64,
}

impl Scheduler {
    /// Create a stopped scheduler at time zero.
    #[must_use]
    pub fn new(tick_interval: Millis) -> Self {
        Self {
            now: 0,
            tick_interval: tick_interval.max(1),
            next_tick: None,
            timers: Vec::new(),
            seq: 0,
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Start the recurring tick. The first tick is one interval from now;
    /// any previous schedule is discarded.
    pub fn start_ticking(&mut self) {
        self.next_tick = Some(self.now + self.tick_interval);
    }

    /// Stop the recurring tick.
    pub fn stop_ticking(&mut self) {
        self.next_tick = None;
    }

    /// Check if the tick is running.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Schedule a one-shot task `delay` ms from now.
    pub fn schedule(&mut self, delay: Millis, task: TimerTask) {
        self.seq += 1;
        self.timers.push(Scheduled {
            due: self.now + delay,
            seq: self.seq,
            task,
        });
    }

    /// Drop every pending one-shot.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    /// Stop the tick and drop every one-shot.
    pub fn halt(&mut self) {
        self.stop_ticking();
        self.cancel_all();
    }

    /// Number of pending one-shots.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Pop the earliest firing due at or before `until`, moving the clock
    /// to its due time.
    pub fn pop_due(&mut self, until: Millis) -> Option<Fired> {
        let earliest_timer = self
            .timers
            .iter()
            .enumerate()
            .min_by_key(|(_, s)| (s.due, s.seq))
            .map(|(i, s)| (i, s.due));

        let tick_first = match (self.next_tick, earliest_timer) {
            (Some(tick), Some((_, due))) => tick <= due,
            (Some(_), None) => true,
            (None, _) => false,
        };

        if tick_first {
            let due = self.next_tick?;
            if due > until {
                return None;
            }
            self.now = due;
            self.next_tick = Some(due + self.tick_interval);
            return Some(Fired::Tick);
        }

        let (index, due) = earliest_timer?;
        if due > until {
            return None;
        }
        self.now = due;
        let scheduled = self.timers.swap_remove(index);
        Some(Fired::Task(scheduled.task))
    }

    /// Move the clock to `until` once nothing else is due.
    pub fn settle(&mut self, until: Millis) {
        self.now = self.now.max(until);
    }
}
