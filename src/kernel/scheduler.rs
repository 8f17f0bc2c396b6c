//! Debouncing for resize bursts.
//!
//! Nothing here owns a timer thread. Callers report each signal with
//! [`Debouncer::call`] and poll with [`Debouncer::poll`] from their event loop,
//! passing the current time; a burst ends once `delay` passes with no call.

use std::time::{Duration, Instant};

pub const DEFAULT_RESIZE_DELAY: Duration = Duration::from_millis(250);

/// Which end of a burst fires the trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Edge {
    /// First call of a burst fires; the quiet period only re-arms.
    Leading,
    /// Fires once, `delay` after the last call of a burst.
    #[default]
    Trailing,
}

#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    edge: Edge,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration, edge: Edge) -> Self {
        Self {
            delay,
            edge,
            deadline: None,
        }
    }

    pub fn trailing(delay: Duration) -> Self {
        Self::new(delay, Edge::Trailing)
    }

    pub fn leading(delay: Duration) -> Self {
        Self::new(delay, Edge::Leading)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Records a signal at `now` and starts or extends a burst. Returns true
    /// when the trigger must run right away: on the leading edge of a new
    /// burst, or in trailing mode when the previous burst had already settled
    /// but was never polled.
    pub fn call(&mut self, now: Instant) -> bool {
        let settled = self.deadline.is_some_and(|deadline| deadline <= now);
        let fire_now = match self.edge {
            Edge::Leading => self.deadline.is_none() || settled,
            Edge::Trailing => settled,
        };
        self.deadline = Some(now + self.delay);
        fire_now
    }

    /// Returns true when a trailing trigger is due at `now`. Clears the
    /// pending deadline once it has passed, in either mode.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let overshoot = now.duration_since(deadline);
        if overshoot.as_millis() > 5 {
            tracing::debug!(
                overshoot_ms = overshoot.as_millis() as u64,
                target = "grid.resize",
                "debounce overshoot"
            );
        }

        self.deadline = None;
        self.edge == Edge::Trailing
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Drops any pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// A trigger wrapped behind a [`Debouncer`].
pub struct Debounced<F> {
    debouncer: Debouncer,
    trigger: F,
}

impl<F: FnMut()> Debounced<F> {
    pub fn new(trigger: F, delay: Duration, edge: Edge) -> Self {
        Self {
            debouncer: Debouncer::new(delay, edge),
            trigger,
        }
    }

    pub fn call(&mut self, now: Instant) {
        if self.debouncer.call(now) {
            (self.trigger)();
        }
    }

    /// Runs the trigger if a trailing fire is due. Returns whether it ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.debouncer.poll(now) {
            (self.trigger)();
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/scheduler.rs"]
mod tests;
