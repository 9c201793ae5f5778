use std::time::Duration;

pub const TICK_INTERVAL: Duration = Duration::from_millis(120);

// Late ticks coalesce: a frame never runs more than one.
const MAX_CATCH_UP: u32 = 1;

/// Fixed-rate tick source fed with frame time.
///
/// A frame that arrives after several intervals yields a single tick and the
/// backlog is discarded, so input is read and the board drawn between moves.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    elapsed: Duration,
    active: bool,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
            active: false,
        }
    }

    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.elapsed = Duration::ZERO;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Adds `dt` and returns how many ticks are due.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.active {
            return 0;
        }
        self.elapsed += dt;
        let mut due = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            due += 1;
        }
        if due > MAX_CATCH_UP {
            due = MAX_CATCH_UP;
            self.elapsed = Duration::ZERO;
        }
        due
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_ticker_never_fires() {
        let mut ticker = Ticker::default();
        assert_eq!(ticker.advance(Duration::from_secs(5)), 0);
    }

    #[test]
    fn carries_leftover_time_between_frames() {
        let mut ticker = Ticker::default();
        ticker.start();
        assert_eq!(ticker.advance(Duration::from_millis(100)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(30)), 1);
        assert_eq!(ticker.advance(Duration::from_millis(110)), 1);
    }

    #[test]
    fn late_ticks_coalesce_into_one() {
        let mut ticker = Ticker::default();
        ticker.start();
        assert_eq!(ticker.advance(Duration::from_secs(2)), 1);
        assert_eq!(ticker.advance(Duration::from_millis(10)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(250)), 1);
        // The 20 ms left over after the second stall went with the backlog.
        assert_eq!(ticker.advance(Duration::from_millis(115)), 0);
    }

    #[test]
    fn restart_discards_partial_interval() {
        let mut ticker = Ticker::default();
        ticker.start();
        ticker.advance(Duration::from_millis(110));
        ticker.start();
        assert_eq!(ticker.advance(Duration::from_millis(20)), 0);
    }
}
