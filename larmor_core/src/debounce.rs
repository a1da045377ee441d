// Copyright 2025 the Larmor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reset-on-trigger, fire-after-quiet debouncing.
//!
//! [`Debouncer`] does not own a timer. Hosts either poll it with a clock
//! ([`Debouncer::poll`]) or schedule their own cancellable timer per trigger and
//! hand back the [`Ticket`] when it fires ([`Debouncer::fire`]). Both paths
//! agree: only the last trigger in a burst fires, and it fires at most once.

/// Identifies one trigger of a [`Debouncer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Default quiet period before a resize burst is acted on, in milliseconds.
pub const DEFAULT_QUIET_MS: f64 = 300.0;

/// Tracks the single pending action of a debounced trigger.
#[derive(Clone, Debug)]
pub struct Debouncer {
    quiet_ms: f64,
    generation: u64,
    deadline: Option<f64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_MS)
    }
}

impl Debouncer {
    /// Creates a debouncer with the given quiet period.
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms: quiet_ms.max(0.0),
            generation: 0,
            deadline: None,
        }
    }

    /// The quiet period in milliseconds.
    pub fn quiet_ms(&self) -> f64 {
        self.quiet_ms
    }

    /// Registers a trigger at `now_ms`, cancelling any pending one.
    pub fn trigger(&mut self, now_ms: f64) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.deadline = Some(now_ms + self.quiet_ms);
        Ticket(self.generation)
    }

    /// Returns `true` if an action is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time at which the pending action becomes due.
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Fires the pending action if its deadline has passed.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Fires the pending action if `ticket` is from the latest trigger.
    ///
    /// Superseded tickets are ignored, as are tickets whose action already ran.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if ticket.0 == self.generation && self.deadline.is_some() {
            self.deadline = None;
            true
        } else {
            false
        }
    }

    /// Drops the pending action, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_fires_once_after_last_trigger() {
        let mut d = Debouncer::default();
        for t in [0.0, 50.0, 120.0, 200.0, 280.0] {
            d.trigger(t);
            assert!(!d.poll(t + 1.0), "nothing fires inside the burst");
        }
        assert!(!d.poll(579.0), "still quiet-waiting");
        assert!(d.poll(580.0), "fires 300 ms after the last trigger");
        assert!(!d.poll(10_000.0), "fires only once");
    }

    #[test]
    fn only_latest_ticket_fires() {
        let mut d = Debouncer::new(300.0);
        let first = d.trigger(0.0);
        let second = d.trigger(10.0);
        assert!(!d.fire(first), "superseded ticket is ignored");
        assert!(d.fire(second));
        assert!(!d.fire(second), "a ticket fires once");
    }

    #[test]
    fn cancel_clears_pending() {
        let mut d = Debouncer::new(100.0);
        let t = d.trigger(0.0);
        d.cancel();
        assert!(!d.is_pending());
        assert!(!d.fire(t));
        assert!(!d.poll(1_000.0));
    }
}
