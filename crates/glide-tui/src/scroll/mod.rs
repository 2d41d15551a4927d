//! Smooth scrolling engine for the glide pager.
//!
//! Two animation strategies cooperate on the one scroll offset: a one-shot
//! eased tween (click) and a continuous stepper (hover). The `ScrollDriver`
//! arbiter owns both and guarantees only one writes the offset at a time.
//!
//! # Layers
//!
//! - `easing` / `timing` - pure functions (interpolation, elapsed time)
//! - `tween` / `stepper` - the two animation strategies
//! - `driver` - arbiter combining them, advanced once per event-loop tick
//! - `throttle` - coalesces scroll events for the visibility listener
//! - `viewport` - injected capability owning offset read/write
//!
//! # Usage
//!
//! ```ignore
//! use glide_tui::scroll::{Direction, ScrollDriver};
//!
//! let mut driver = ScrollDriver::new(&config.scroll);
//!
//! // Hover enter / leave
//! driver.start_hover(Direction::Up);
//! driver.stop_hover();
//!
//! // Click: eased scroll to the top
//! driver.scroll_to(0.0, &viewport, Instant::now());
//!
//! // In the main loop, once per frame
//! let still_animating = driver.advance(Instant::now(), &mut viewport);
//! ```

pub mod driver;
pub mod easing;
pub mod stepper;
pub mod throttle;
pub mod timing;
pub mod tween;
pub mod viewport;

pub use driver::ScrollDriver;
pub use stepper::{Direction, Stepper};
pub use throttle::Throttle;
pub use tween::Tween;
pub use viewport::{Viewport, ViewportGeometry};
