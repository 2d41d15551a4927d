//! One-shot eased scroll animation.

use std::time::{Duration, Instant};

use super::easing::ease_in_out_quad;
use super::timing::{elapsed_ms, is_complete};

/// A time-boxed transition of the scroll offset from a captured start value
/// to an absolute target.
///
/// The tween is a value object: it never writes the offset itself. The
/// driver samples it once per frame and performs the write, and drops it
/// once complete. Targets outside the valid scroll range pass through
/// unchanged; the viewport clamps on write.
#[derive(Debug, Clone)]
pub struct Tween {
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
}

impl Tween {
    /// Capture the start offset and begin the clock at `now`
    pub fn new(from: f64, to: f64, duration: Duration, now: Instant) -> Self {
        Self {
            from,
            to,
            started: now,
            duration,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Eased offset at `now`.
    ///
    /// Once the duration has elapsed this returns exactly the target, so the
    /// final write lands with no residual error.
    pub fn sample(&self, now: Instant) -> f64 {
        if self.is_complete(now) {
            return self.to;
        }
        let duration_ms = self.duration.as_secs_f64() * 1000.0;
        ease_in_out_quad(
            elapsed_ms(self.started, now),
            self.from,
            self.to - self.from,
            duration_ms,
        )
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        is_complete(self.started, self.duration, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_at_start() {
        let now = Instant::now();
        let tween = Tween::new(600.0, 0.0, Duration::from_millis(500), now);
        assert_eq!(tween.sample(now), 600.0);
        assert!(!tween.is_complete(now));
    }

    #[test]
    fn test_reaches_exact_target() {
        let start = Instant::now();
        let tween = Tween::new(600.0, 0.0, Duration::from_millis(500), start);
        assert_eq!(tween.sample(start + Duration::from_millis(500)), 0.0);
        assert_eq!(tween.sample(start + Duration::from_millis(900)), 0.0);
        assert!(tween.is_complete(start + Duration::from_millis(500)));
    }

    #[test]
    fn test_in_flight_value_between_endpoints() {
        let start = Instant::now();
        let tween = Tween::new(0.0, 1000.0, Duration::from_millis(500), start);
        let value = tween.sample(start + Duration::from_millis(250));
        assert!(value > 0.0 && value < 1000.0);
    }

    #[test]
    fn test_zero_duration_is_immediately_complete() {
        let now = Instant::now();
        let tween = Tween::new(100.0, 0.0, Duration::ZERO, now);
        assert!(tween.is_complete(now));
        assert_eq!(tween.sample(now), 0.0);
    }
}
