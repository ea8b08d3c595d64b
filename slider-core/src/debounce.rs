//! Trailing-edge debounce for geometry recomputes.
//!
//! Each controller owns one [`PendingRecompute`]. Scheduling replaces any
//! previous deadline, so a burst of resize events collapses into a single
//! recompute once the burst has been quiet for the full delay.

use std::time::{Duration, Instant};

/// Trailing deadline for one controller's geometry recompute.
#[derive(Debug, Clone, Default)]
pub struct PendingRecompute {
    deadline: Option<Instant>,
}

impl PendingRecompute {
    /// Nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending recompute and schedule a new one `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drop the scheduled recompute, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a recompute is scheduled.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the scheduled recompute is due.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once per schedule, at the first poll on or after
    /// the deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(120);

    #[test]
    fn fires_once_after_deadline() {
        let t0 = Instant::now();
        let mut pending = PendingRecompute::new();
        pending.schedule(t0, DELAY);

        assert!(!pending.fire_if_due(t0 + Duration::from_millis(119)));
        assert!(pending.fire_if_due(t0 + DELAY));
        assert!(!pending.fire_if_due(t0 + Duration::from_millis(500)));
        assert!(!pending.is_pending());
    }

    #[test]
    fn reschedule_pushes_deadline_back() {
        let t0 = Instant::now();
        let mut pending = PendingRecompute::new();
        pending.schedule(t0, DELAY);
        pending.schedule(t0 + Duration::from_millis(100), DELAY);

        assert!(!pending.fire_if_due(t0 + DELAY));
        assert_eq!(pending.deadline(), Some(t0 + Duration::from_millis(220)));
        assert!(pending.fire_if_due(t0 + Duration::from_millis(220)));
    }

    #[test]
    fn cancel_drops_deadline() {
        let t0 = Instant::now();
        let mut pending = PendingRecompute::new();
        pending.schedule(t0, DELAY);
        pending.cancel();

        assert!(!pending.is_pending());
        assert!(!pending.fire_if_due(t0 + Duration::from_secs(1)));
    }
}
