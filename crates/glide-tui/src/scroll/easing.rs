//! Pure easing function for the click-triggered animated scroll.

/// Quadratic ease-in-out over absolute values.
///
/// Accelerates away from `start` for the first half of `duration` and
/// decelerates symmetrically over the second half, landing exactly on
/// `start + delta` at `elapsed == duration`. Elapsed values outside
/// `[0, duration]` are clamped to the endpoints.
#[inline]
pub fn ease_in_out_quad(elapsed: f64, start: f64, delta: f64, duration: f64) -> f64 {
    if duration <= 0.0 || elapsed >= duration {
        return start + delta;
    }
    if elapsed <= 0.0 {
        return start;
    }

    let t = elapsed / (duration / 2.0);
    if t < 1.0 {
        delta / 2.0 * t * t + start
    } else {
        let t = t - 1.0;
        -delta / 2.0 * (t * (t - 2.0) - 1.0) + start
    }
}
