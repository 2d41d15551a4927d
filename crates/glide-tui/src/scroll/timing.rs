//! Time calculation helpers for scroll animations.
//!
//! All functions take an explicit `now` instead of sampling the clock, so
//! tests can drive simulated time with `start + Duration::from_millis(..)`.

use std::time::{Duration, Instant};

/// Elapsed time between `start` and `now` in milliseconds.
///
/// Returns zero when `now` precedes `start`.
#[inline]
pub fn elapsed_ms(start: Instant, now: Instant) -> f64 {
    now.saturating_duration_since(start).as_secs_f64() * 1000.0
}

/// Check if an animation started at `start` has run for `duration`
#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_ms() {
        let start = Instant::now();
        let now = start + Duration::from_millis(250);
        assert!((elapsed_ms(start, now) - 250.0).abs() < 1e-6);
    }

    #[test]
    fn test_elapsed_before_start_is_zero() {
        let now = Instant::now();
        let start = now + Duration::from_millis(50);
        assert_eq!(elapsed_ms(start, now), 0.0);
    }

    #[test]
    fn test_is_complete() {
        let start = Instant::now();
        let duration = Duration::from_millis(500);
        assert!(!is_complete(start, duration, start + Duration::from_millis(499)));
        assert!(is_complete(start, duration, start + Duration::from_millis(500)));
        assert!(is_complete(start, duration, start + Duration::from_millis(800)));
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let start = Instant::now();
        assert!(is_complete(start, Duration::ZERO, start));
    }
}
