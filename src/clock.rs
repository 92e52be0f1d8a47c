use std::{thread::sleep, time::{Duration, Instant}};

pub trait Pacer {
    /// Blocks until the next tick boundary.
    fn tick(&mut self);
}

/// Sleeps away whatever is left of each tick's time budget.
pub struct FixedRatePacer {
    period: Duration,
    last_tick: Instant,
}

impl FixedRatePacer {
    pub fn new(period: Duration) -> Self {
        FixedRatePacer { period, last_tick: Instant::now() }
    }

    pub fn from_rate(rate_hz: u32) -> Self {
        FixedRatePacer::new(Duration::from_secs(1) / rate_hz.max(1))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left in the current tick as seen at `now`; zero once the budget is spent.
    pub fn budget_left(&self, now: Instant) -> Duration {
        self.period.saturating_sub(now.saturating_duration_since(self.last_tick))
    }
}

impl Pacer for FixedRatePacer {
    fn tick(&mut self) {
        let remaining = self.budget_left(Instant::now());
        if remaining > Duration::ZERO {
            sleep(remaining);
        }

        // A late tick is not made up for; the next budget starts now.
        self.last_tick = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_hertz_is_a_hundred_millis() {
        assert_eq!(FixedRatePacer::from_rate(10).period(), Duration::from_millis(100));
    }

    #[test]
    fn budget_shrinks_with_elapsed_time() {
        let pacer = FixedRatePacer::new(Duration::from_millis(100));
        let start = pacer.last_tick;

        assert_eq!(pacer.budget_left(start), Duration::from_millis(100));
        assert_eq!(pacer.budget_left(start + Duration::from_millis(30)), Duration::from_millis(70));
        assert_eq!(pacer.budget_left(start + Duration::from_millis(250)), Duration::ZERO);
    }

    #[test]
    fn tick_waits_out_the_period() {
        let mut pacer = FixedRatePacer::new(Duration::from_millis(20));
        let before = Instant::now();
        pacer.tick();
        pacer.tick();
        assert!(before.elapsed() >= Duration::from_millis(40));
    }
}
