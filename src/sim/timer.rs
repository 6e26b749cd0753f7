//! Cooperative tick-based timers
//!
//! All scheduling is multiplexed onto the single simulation tick; nothing here
//! runs on another thread. A [`Periodic`] re-arms itself immediately after
//! firing, reading its (possibly updated) period at re-arm time.

/// A periodic timer counted in simulation ticks
#[derive(Debug, Clone)]
pub struct Periodic {
    remaining: u32,
    period: u32,
}

impl Periodic {
    pub fn new(period_ticks: u32) -> Self {
        let period = period_ticks.max(1);
        Self {
            remaining: period,
            period,
        }
    }

    /// Advance one tick. Returns true when the timer fires; the timer re-arms
    /// for its current period immediately, with no catch-up firing.
    pub fn tick(&mut self) -> bool {
        self.remaining -= 1;
        if self.remaining == 0 {
            self.remaining = self.period;
            true
        } else {
            false
        }
    }

    /// Update the period used at the next re-arm. The countdown in flight is
    /// left untouched.
    pub fn set_period(&mut self, period_ticks: u32) {
        self.period = period_ticks.max(1);
    }

    pub fn period(&self) -> u32 {
        self.period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_on_period() {
        let mut timer = Periodic::new(3);
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        // Re-armed
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
    }

    #[test]
    fn test_period_change_applies_at_rearm() {
        let mut timer = Periodic::new(4);
        timer.tick();
        timer.set_period(2);
        // The countdown in flight keeps its deadline
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        // Next cycle uses the new period
        assert!(!timer.tick());
        assert!(timer.tick());
    }

    #[test]
    fn test_zero_period_clamped() {
        let mut timer = Periodic::new(0);
        assert!(timer.tick());
        assert!(timer.tick());
    }
}
