use std::time::Duration;

/// Turns presentation-loop frame timestamps into tick deltas and clamps them.
///
/// The first frame only records its timestamp and yields zero. A delta larger
/// than `max_dt` (tab switch, pause/resume, debugger stop) is clamped so one
/// tick never integrates a huge step.
pub struct FrameClock {
    /// Largest delta handed to the simulation.
    max_dt: Duration,
    /// Timestamp of the previous frame, in nanoseconds.
    last_nanos: Option<u64>,
}

impl FrameClock {
    /// A clock that has not seen a frame yet.
    pub fn new(max_dt: Duration) -> Self {
        Self {
            max_dt,
            last_nanos: None,
        }
    }

    /// Record a frame timestamp and return the raw, unclamped delta.
    pub fn measure(&mut self, now_nanos: u64) -> Duration {
        let dt = match self.last_nanos {
            Some(last) => Duration::from_nanos(now_nanos.saturating_sub(last)),
            None => Duration::ZERO,
        };
        self.last_nanos = Some(now_nanos);
        dt
    }

    /// Clamp an already-measured delta.
    pub fn clamp(&self, dt: Duration) -> Duration {
        dt.min(self.max_dt)
    }

    /// Whether `dt` would be shortened by `clamp`.
    pub fn exceeds(&self, dt: Duration) -> bool {
        dt > self.max_dt
    }

    /// Forget the previous timestamp (e.g. after the loop was suspended).
    pub fn reset(&mut self) {
        self.last_nanos = None;
    }

    /// Largest delta `clamp` lets through.
    pub fn max_dt(&self) -> Duration {
        self.max_dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: u64 = 1_000_000;

    #[test]
    fn first_frame_is_zero() {
        let mut clock = FrameClock::new(Duration::from_millis(50));
        assert_eq!(clock.measure(123 * MS), Duration::ZERO);
    }

    #[test]
    fn regular_frames_pass_through() {
        let mut clock = FrameClock::new(Duration::from_millis(50));
        clock.measure(0);
        assert_eq!(clock.measure(16 * MS), Duration::from_millis(16));
        assert_eq!(clock.measure(33 * MS), Duration::from_millis(17));
    }

    #[test]
    fn stalls_are_clamped() {
        let mut clock = FrameClock::new(Duration::from_millis(50));
        clock.measure(0);
        let raw = clock.measure(2_000 * MS);
        assert_eq!(raw, Duration::from_secs(2));
        assert_eq!(clock.clamp(raw), Duration::from_millis(50));
        assert!(clock.exceeds(Duration::from_millis(51)));
        assert!(!clock.exceeds(Duration::from_millis(50)));
    }

    #[test]
    fn timestamps_going_backwards_yield_zero() {
        let mut clock = FrameClock::new(Duration::from_millis(50));
        clock.measure(100 * MS);
        assert_eq!(clock.measure(90 * MS), Duration::ZERO);
    }

    #[test]
    fn reset_restarts_measurement() {
        let mut clock = FrameClock::new(Duration::from_millis(50));
        clock.measure(0);
        clock.reset();
        assert_eq!(clock.measure(10 * MS), Duration::ZERO);
    }
}
