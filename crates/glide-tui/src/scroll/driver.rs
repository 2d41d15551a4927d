//! Scroll driver: the arbiter that owns every animated write to the offset.

use std::time::{Duration, Instant};

use glide_core::ScrollConfig;

use super::stepper::{Direction, Stepper};
use super::tween::Tween;
use super::viewport::Viewport;

/// Routes the click tween and the hover stepper onto the shared scroll
/// offset, with at most one of them active at any instant.
///
/// Starting a tween stops the stepper; starting a hover drops an in-flight
/// tween. The event loop advances the driver once per iteration, and
/// cancellation is replacing the active state.
#[derive(Debug, Clone)]
pub struct ScrollDriver {
    stepper: Stepper,
    tween: Option<Tween>,
    /// Time of the last applied hover step
    last_step: Option<Instant>,
    hover_interval: Duration,
    click_duration: Duration,
}

impl ScrollDriver {
    pub fn new(config: &ScrollConfig) -> Self {
        Self {
            stepper: Stepper::new(config.step_size),
            tween: None,
            last_step: None,
            hover_interval: config.hover_interval(),
            click_duration: config.click_duration(),
        }
    }

    /// Begin continuous scrolling in `direction`.
    ///
    /// Preempts an in-flight tween: the hover is the newer intent and takes
    /// ownership of the offset.
    pub fn start_hover(&mut self, direction: Direction) {
        if self.tween.take().is_some() {
            tracing::debug!(?direction, "hover preempts in-flight tween");
        }
        self.stepper.start(direction);
    }

    /// Stop continuous scrolling. Idempotent; a running tween is untouched.
    pub fn stop_hover(&mut self) {
        self.stepper.stop();
        self.last_step = None;
    }

    /// Start an eased scroll from the current offset to an absolute target.
    ///
    /// Any continuous scrolling is stopped first, so the tween has sole
    /// ownership of the offset until it completes or is superseded.
    pub fn scroll_to(&mut self, target: f64, viewport: &impl Viewport, now: Instant) {
        self.stop_hover();
        let from = viewport.offset();
        tracing::debug!(from, target, "starting animated scroll");
        self.tween = Some(Tween::new(from, target, self.click_duration, now));
    }

    /// Drop whatever animation is active; direct scrolling takes over.
    pub fn cancel(&mut self) {
        self.stop_hover();
        self.tween = None;
    }

    pub fn is_hovering(&self) -> bool {
        self.stepper.is_active()
    }

    pub fn is_tweening(&self) -> bool {
        self.tween.is_some()
    }

    /// Whether the event loop should run at the animation frame rate
    pub fn is_active(&self) -> bool {
        self.is_hovering() || self.is_tweening()
    }

    /// Advance the active animation by one loop iteration.
    ///
    /// Returns true while an animation remains active after this tick.
    pub fn advance(&mut self, now: Instant, viewport: &mut impl Viewport) -> bool {
        if let Some(tween) = &self.tween {
            viewport.set_offset(tween.sample(now));
            if tween.is_complete(now) {
                self.tween = None;
            }
            return self.tween.is_some();
        }

        if self.stepper.is_active() {
            let due = match self.last_step {
                Some(last) => now.saturating_duration_since(last) >= self.hover_interval,
                None => true,
            };
            if due {
                if let Some(next) = self.stepper.step(viewport.offset()) {
                    viewport.set_offset(next);
                }
                self.last_step = Some(now);
            }
            return true;
        }

        false
    }
}
