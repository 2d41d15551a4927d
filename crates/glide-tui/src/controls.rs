//! Floating scroll controls: activation gate, visibility policy, and
//! hover/click bindings.
//!
//! Two controls float at the right edge of the document area: up just above
//! the vertical center, down just below it. Hovering a control scrolls
//! continuously in its direction; clicking starts an eased scroll to the
//! top or bottom of the document.

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use glide_core::ScrollConfig;
use ratatui::layout::{Position, Rect};

use crate::scroll::{ScrollDriver, Throttle, Viewport, ViewportGeometry};

/// Width of a floating control in terminal columns
pub const CONTROL_WIDTH: u16 = 5;
/// Height of a floating control in terminal rows
pub const CONTROL_HEIGHT: u16 = 3;
/// Rows between a control and the vertical center of the area
const CONTROL_GAP: u16 = 1;

/// Interval for the throttled visibility recomputation on scroll
const VISIBILITY_THROTTLE: Duration = Duration::from_millis(100);

/// Which of the two controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    Up,
    Down,
}

impl ControlId {
    fn direction(self) -> crate::scroll::Direction {
        match self {
            ControlId::Up => crate::scroll::Direction::Up,
            ControlId::Down => crate::scroll::Direction::Down,
        }
    }
}

/// Derived visibility of the two controls, recomputed on (throttled) scroll,
/// on resize, and on attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlVisibility {
    pub show_up: bool,
    pub show_down: bool,
}

/// Visibility rule: the up control appears once scrolled past the hide
/// threshold, the down control hides within `edge_margin` of the bottom.
pub fn control_visibility(
    offset: f64,
    geometry: ViewportGeometry,
    config: &ScrollConfig,
) -> ControlVisibility {
    ControlVisibility {
        show_up: offset > config.hide_threshold,
        show_down: offset < geometry.max_offset() - config.edge_margin,
    }
}

/// Screen rectangles of the up and down controls within `area`
pub fn control_areas(area: Rect) -> (Rect, Rect) {
    let x = area.right().saturating_sub(CONTROL_WIDTH).max(area.x);
    let width = CONTROL_WIDTH.min(area.width);
    let mid = area.y + area.height / 2;

    let up_y = mid.saturating_sub(CONTROL_GAP + CONTROL_HEIGHT).max(area.y);
    let down_y = mid + CONTROL_GAP;

    let up = Rect::new(x, up_y, width, CONTROL_HEIGHT).intersection(area);
    let down = Rect::new(x, down_y, width, CONTROL_HEIGHT).intersection(area);
    (up, down)
}

/// The control policy: decides whether the controls exist at all, keeps
/// their visibility in sync with the scroll offset, and translates mouse
/// events into driver intents.
#[derive(Debug)]
pub struct ScrollControls {
    config: ScrollConfig,
    visibility: ControlVisibility,
    hovered: Option<ControlId>,
    throttle: Throttle,
}

impl ScrollControls {
    /// Activation gate: documents that fit the viewport get no controls.
    ///
    /// Evaluated once at startup with the initial geometry; a document that
    /// becomes scrollable later never gains controls.
    pub fn attach(viewport: &impl Viewport, config: ScrollConfig) -> Option<Self> {
        let geometry = viewport.geometry();
        if !geometry.is_scrollable() {
            tracing::debug!(
                document_height = geometry.document_height,
                viewport_height = geometry.viewport_height,
                "document fits the viewport, scroll controls disabled"
            );
            return None;
        }

        Some(Self {
            visibility: control_visibility(viewport.offset(), geometry, &config),
            config,
            hovered: None,
            throttle: Throttle::new(VISIBILITY_THROTTLE),
        })
    }

    pub fn visibility(&self) -> ControlVisibility {
        self.visibility
    }

    pub fn hovered(&self) -> Option<ControlId> {
        self.hovered
    }

    /// Whether a deferred visibility update is waiting on the throttle
    pub fn visibility_pending(&self) -> bool {
        self.throttle.is_pending()
    }

    /// Recompute visibility immediately (attach, resize)
    pub fn refresh_visibility(&mut self, viewport: &impl Viewport) {
        self.visibility = control_visibility(viewport.offset(), viewport.geometry(), &self.config);
    }

    /// Note a scroll-offset change; the recomputation itself is throttled
    pub fn on_scroll(&mut self, now: Instant) {
        self.throttle.request(now);
    }

    /// Run the deferred visibility update once its window closes.
    ///
    /// Uses the offset at fire time, not any intermediate offset. If the
    /// hovered control just disappeared, its hover scroll stops too.
    pub fn poll(&mut self, now: Instant, viewport: &impl Viewport, driver: &mut ScrollDriver) {
        if self.throttle.fire(now) {
            self.refresh_visibility(viewport);
            if let Some(hovered) = self.hovered {
                if !self.is_visible(hovered) {
                    driver.stop_hover();
                    self.hovered = None;
                }
            }
        }
    }

    fn is_visible(&self, control: ControlId) -> bool {
        match control {
            ControlId::Up => self.visibility.show_up,
            ControlId::Down => self.visibility.show_down,
        }
    }

    /// The visible control under (column, row), if any
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<ControlId> {
        let (up, down) = control_areas(area);
        let position = Position::new(column, row);
        if self.visibility.show_up && up.contains(position) {
            Some(ControlId::Up)
        } else if self.visibility.show_down && down.contains(position) {
            Some(ControlId::Down)
        } else {
            None
        }
    }

    /// Translate a mouse event into driver intents.
    ///
    /// Pointer-enter starts continuous scrolling, pointer-leave stops it,
    /// and a click hands the offset to the eased tween (the driver drops
    /// any hover first).
    pub fn handle_mouse(
        &mut self,
        event: MouseEvent,
        area: Rect,
        driver: &mut ScrollDriver,
        viewport: &impl Viewport,
        now: Instant,
    ) {
        match event.kind {
            MouseEventKind::Moved => {
                let hit = self.hit_test(area, event.column, event.row);
                if hit != self.hovered {
                    if self.hovered.is_some() {
                        driver.stop_hover();
                    }
                    if let Some(control) = hit {
                        driver.start_hover(control.direction());
                    }
                    self.hovered = hit;
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(control) = self.hit_test(area, event.column, event.row) {
                    let target = match control {
                        ControlId::Up => 0.0,
                        // The raw document height; the viewport clamps
                        ControlId::Down => viewport.geometry().document_height,
                    };
                    driver.scroll_to(target, viewport, now);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::viewport::FakeViewport;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_activation_gate_blocks_non_scrollable() {
        let viewport = FakeViewport::new(900.0, 900.0);
        assert!(ScrollControls::attach(&viewport, ScrollConfig::default()).is_none());
    }

    #[test]
    fn test_visibility_thresholds() {
        let geometry = ViewportGeometry::new(800.0, 2000.0);
        let config = ScrollConfig::default();

        let at_top = control_visibility(0.0, geometry, &config);
        assert!(!at_top.show_up);
        assert!(at_top.show_down);

        let middle = control_visibility(600.0, geometry, &config);
        assert!(middle.show_up);
        assert!(middle.show_down);

        // Within the edge margin of max_offset 1200
        let near_bottom = control_visibility(1195.0, geometry, &config);
        assert!(near_bottom.show_up);
        assert!(!near_bottom.show_down);
    }

    #[test]
    fn test_attach_computes_initial_visibility() {
        let viewport = FakeViewport::new(800.0, 2000.0);
        let controls = ScrollControls::attach(&viewport, ScrollConfig::default()).unwrap();
        assert!(!controls.visibility().show_up);
        assert!(controls.visibility().show_down);
    }

    #[test]
    fn test_throttled_update_uses_fire_time_offset() {
        let mut viewport = FakeViewport::new(800.0, 2000.0);
        let mut controls = ScrollControls::attach(&viewport, ScrollConfig::default()).unwrap();
        let mut driver = ScrollDriver::new(&ScrollConfig::default());
        let start = Instant::now();

        // Burst of scroll events while the offset moves
        for i in 0..10 {
            viewport.set_offset(i as f64 * 60.0);
            controls.on_scroll(start + Duration::from_millis(i * 5));
        }

        // Before the window closes nothing recomputes
        controls.poll(start + Duration::from_millis(99), &viewport, &mut driver);
        assert!(!controls.visibility().show_up);

        // After it closes, visibility reflects the offset at fire time
        controls.poll(start + Duration::from_millis(100), &viewport, &mut driver);
        assert!(controls.visibility().show_up);
        assert!(!controls.visibility_pending());
    }

    #[test]
    fn test_hover_enter_leave_drives_stepper() {
        let mut viewport = FakeViewport::new(24.0, 200.0);
        viewport.set_offset(50.0);
        let mut controls = ScrollControls::attach(&viewport, ScrollConfig::default()).unwrap();
        controls.refresh_visibility(&viewport);
        let mut driver = ScrollDriver::new(&ScrollConfig::default());

        let area = Rect::new(0, 0, 80, 24);
        let (up, _) = control_areas(area);
        let now = Instant::now();

        // Enter the up control
        controls.handle_mouse(
            mouse(MouseEventKind::Moved, up.x + 1, up.y + 1),
            area,
            &mut driver,
            &viewport,
            now,
        );
        assert_eq!(controls.hovered(), Some(ControlId::Up));
        assert!(driver.is_hovering());

        // Leave it
        controls.handle_mouse(
            mouse(MouseEventKind::Moved, 0, 0),
            area,
            &mut driver,
            &viewport,
            now,
        );
        assert_eq!(controls.hovered(), None);
        assert!(!driver.is_hovering());
    }

    #[test]
    fn test_click_stops_hover_and_starts_tween() {
        let mut viewport = FakeViewport::new(24.0, 200.0);
        viewport.set_offset(50.0);
        let mut controls = ScrollControls::attach(&viewport, ScrollConfig::default()).unwrap();
        controls.refresh_visibility(&viewport);
        let mut driver = ScrollDriver::new(&ScrollConfig::default());

        let area = Rect::new(0, 0, 80, 24);
        let (up, _) = control_areas(area);
        let now = Instant::now();

        controls.handle_mouse(
            mouse(MouseEventKind::Moved, up.x + 1, up.y + 1),
            area,
            &mut driver,
            &viewport,
            now,
        );
        assert!(driver.is_hovering());

        controls.handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), up.x + 1, up.y + 1),
            area,
            &mut driver,
            &viewport,
            now,
        );
        assert!(!driver.is_hovering());
        assert!(driver.is_tweening());
    }

    #[test]
    fn test_hidden_control_is_not_hit() {
        let viewport = FakeViewport::new(24.0, 200.0);
        // At offset 0 the up control is hidden
        let controls = ScrollControls::attach(&viewport, ScrollConfig::default()).unwrap();

        let area = Rect::new(0, 0, 80, 24);
        let (up, down) = control_areas(area);
        assert_eq!(controls.hit_test(area, up.x + 1, up.y + 1), None);
        assert_eq!(
            controls.hit_test(area, down.x + 1, down.y + 1),
            Some(ControlId::Down)
        );
    }

    #[test]
    fn test_hover_stops_when_control_hides() {
        let mut viewport = FakeViewport::new(24.0, 200.0);
        viewport.set_offset(50.0);
        let mut controls = ScrollControls::attach(&viewport, ScrollConfig::default()).unwrap();
        controls.refresh_visibility(&viewport);
        let mut driver = ScrollDriver::new(&ScrollConfig::default());

        let area = Rect::new(0, 0, 80, 24);
        let (up, _) = control_areas(area);
        let start = Instant::now();

        controls.handle_mouse(
            mouse(MouseEventKind::Moved, up.x + 1, up.y + 1),
            area,
            &mut driver,
            &viewport,
            start,
        );
        assert!(driver.is_hovering());

        // Hover scrolling reaches the top; the up control disappears
        viewport.set_offset(0.0);
        controls.on_scroll(start);
        controls.poll(start + Duration::from_millis(100), &viewport, &mut driver);

        assert!(!controls.visibility().show_up);
        assert_eq!(controls.hovered(), None);
        assert!(!driver.is_hovering());
    }

    #[test]
    fn test_control_areas_sit_at_right_edge() {
        let area = Rect::new(0, 0, 80, 24);
        let (up, down) = control_areas(area);
        assert_eq!(up.right(), 80);
        assert_eq!(down.right(), 80);
        assert!(up.bottom() <= 12);
        assert!(down.y >= 12);
    }
}
