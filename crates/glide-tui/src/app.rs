use std::time::Instant;

use crossterm::event::{MouseEvent, MouseEventKind};
use glide_core::{AppConfig, Document};
use ratatui::layout::Rect;

use crate::controls::ScrollControls;
use crate::scroll::{ScrollDriver, Viewport, ViewportGeometry};

/// Lines moved per mouse wheel event
const WHEEL_SCROLL_LINES: f64 = 3.0;

/// The app's scroll state: the one writable offset plus the geometry it is
/// valid against.
#[derive(Debug, Clone)]
pub struct ViewportState {
    offset: f64,
    viewport_height: f64,
    document_height: f64,
}

impl ViewportState {
    pub fn new(document_height: f64) -> Self {
        Self {
            offset: 0.0,
            viewport_height: 0.0,
            document_height,
        }
    }

    /// Update the viewport height (initial attach, draw, resize).
    ///
    /// The offset is re-clamped so a taller viewport cannot leave the view
    /// hanging past the end of the document.
    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
        self.offset = self.offset.clamp(0.0, self.geometry().max_offset());
    }

    /// Offset rounded to the line the renderer starts at
    pub fn top_line(&self) -> usize {
        self.offset.round() as usize
    }
}

impl Viewport for ViewportState {
    fn offset(&self) -> f64 {
        self.offset
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, self.geometry().max_offset());
    }

    fn geometry(&self) -> ViewportGeometry {
        ViewportGeometry::new(self.viewport_height, self.document_height)
    }
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// The document being paged
    pub document: Document,
    /// Scroll offset and geometry
    pub viewport: ViewportState,
    /// Arbiter for the click tween and hover stepper
    pub driver: ScrollDriver,
    /// Floating controls; `None` when the activation gate rejected the page
    pub controls: Option<ScrollControls>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
}

impl App {
    pub fn new(document: Document, config: AppConfig) -> Self {
        let viewport = ViewportState::new(document.height() as f64);
        let driver = ScrollDriver::new(&config.scroll);
        Self {
            config,
            document,
            viewport,
            driver,
            controls: None,
            should_quit: false,
            pending_key: None,
        }
    }

    /// Run the activation gate. Called exactly once, after the initial
    /// terminal size is known.
    pub fn attach_controls(&mut self) {
        self.controls = ScrollControls::attach(&self.viewport, self.config.scroll.clone());
    }

    /// Advance animations and the deferred visibility update by one loop
    /// iteration. Returns true while an animation remains active.
    pub fn update_scroll_animation(&mut self, now: Instant) -> bool {
        let before = self.viewport.offset();
        let active = self.driver.advance(now, &mut self.viewport);

        if let Some(controls) = &mut self.controls {
            if self.viewport.offset() != before {
                controls.on_scroll(now);
            }
            controls.poll(now, &self.viewport, &mut self.driver);
        }

        active
    }

    /// Whether the loop should poll at the animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.driver.is_active()
            || self
                .controls
                .as_ref()
                .is_some_and(ScrollControls::visibility_pending)
    }

    /// Direct user scroll by `delta` lines. Takes the offset away from any
    /// running animation.
    pub fn scroll_by(&mut self, delta: f64, now: Instant) {
        self.driver.cancel();
        let before = self.viewport.offset();
        self.viewport.set_offset(before + delta);
        if self.viewport.offset() != before {
            if let Some(controls) = &mut self.controls {
                controls.on_scroll(now);
            }
        }
    }

    pub fn scroll_half_page(&mut self, direction: f64, now: Instant) {
        let half = (self.viewport.geometry().viewport_height / 2.0).max(1.0);
        self.scroll_by(direction * half, now);
    }

    pub fn scroll_full_page(&mut self, direction: f64, now: Instant) {
        let page = self.viewport.geometry().viewport_height.max(1.0);
        self.scroll_by(direction * page, now);
    }

    /// Animated jump to the top of the document
    pub fn animate_to_top(&mut self, now: Instant) {
        self.driver.scroll_to(0.0, &self.viewport, now);
    }

    /// Animated jump to the bottom of the document
    pub fn animate_to_bottom(&mut self, now: Instant) {
        let target = self.viewport.geometry().document_height;
        self.driver.scroll_to(target, &self.viewport, now);
    }

    /// Viewport height changed (terminal resize). Visibility refreshes
    /// immediately, unthrottled.
    pub fn handle_resize(&mut self, viewport_height: f64) {
        self.viewport.set_viewport_height(viewport_height);
        if let Some(controls) = &mut self.controls {
            controls.refresh_visibility(&self.viewport);
        }
    }

    /// Route a mouse event: wheel scrolls the view directly, everything else
    /// goes to the floating controls.
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect, now: Instant) {
        match event.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_SCROLL_LINES, now),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_SCROLL_LINES, now),
            _ => {
                if let Some(controls) = &mut self.controls {
                    controls.handle_mouse(event, area, &mut self.driver, &self.viewport, now);
                }
            }
        }
    }

    /// Position label for the status bar: TOP, BOT, ALL, or a percentage
    pub fn position_label(&self) -> String {
        let geometry = self.viewport.geometry();
        let max = geometry.max_offset();
        if max == 0.0 {
            "ALL".to_string()
        } else if self.viewport.offset() <= 0.0 {
            "TOP".to_string()
        } else if self.viewport.offset() >= max {
            "BOT".to_string()
        } else {
            format!("{}%", (self.viewport.offset() / max * 100.0).round() as u16)
        }
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}
