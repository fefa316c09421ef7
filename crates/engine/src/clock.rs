//! Fixed-step accumulator clock.
//!
//! Wall-clock time is fed in as elapsed milliseconds; the clock answers how
//! many whole simulation steps are due. A catch-up cap keeps a stalled
//! process (suspend, debugger, huge terminal resize) from replaying seconds
//! of simulation in one frame.

/// Steps replayed at most per call to [`FixedStep::advance`].
pub const MAX_CATCH_UP_STEPS: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStep {
    interval_ms: u32,
    acc_ms: u32,
}

impl FixedStep {
    pub fn new(interval_ms: u32) -> Self {
        debug_assert!(interval_ms > 0);
        Self {
            interval_ms,
            acc_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Feed elapsed wall time; returns the number of whole steps now due.
    /// When the backlog exceeds the catch-up cap the remainder is dropped.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.acc_ms = self.acc_ms.saturating_add(elapsed_ms);
        let due = self.acc_ms / self.interval_ms;
        if due > MAX_CATCH_UP_STEPS {
            self.acc_ms = 0;
            MAX_CATCH_UP_STEPS
        } else {
            self.acc_ms -= due * self.interval_ms;
            due
        }
    }

    /// Milliseconds until the next step is due; the input poll deadline.
    pub fn until_next_ms(&self) -> u32 {
        self.interval_ms - self.acc_ms.min(self.interval_ms - 1)
    }

    pub fn reset(&mut self) {
        self.acc_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_intervals_accumulate() {
        let mut clock = FixedStep::new(16);
        assert_eq!(clock.advance(10), 0);
        assert_eq!(clock.advance(10), 1);
        assert_eq!(clock.advance(12), 1);
    }

    #[test]
    fn exact_interval_yields_one_step() {
        let mut clock = FixedStep::new(16);
        assert_eq!(clock.advance(16), 1);
        assert_eq!(clock.advance(16), 1);
    }

    #[test]
    fn backlog_is_capped_and_dropped() {
        let mut clock = FixedStep::new(16);
        assert_eq!(clock.advance(16 * 100), MAX_CATCH_UP_STEPS);
        // Remainder was discarded, not carried.
        assert_eq!(clock.advance(15), 0);
    }

    #[test]
    fn until_next_counts_down() {
        let mut clock = FixedStep::new(16);
        assert_eq!(clock.until_next_ms(), 16);
        clock.advance(10);
        assert_eq!(clock.until_next_ms(), 6);
    }

    #[test]
    fn reset_clears_the_accumulator() {
        let mut clock = FixedStep::new(16);
        clock.advance(10);
        clock.reset();
        assert_eq!(clock.advance(15), 0);
    }
}
