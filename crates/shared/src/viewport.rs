//! Viewport Controller: zoom scalar, pan offset, drag state, and the label breakpoint.

use crate::config::{ViewportConfig, ZoomCurve};
use crate::models::Point;
use crate::surface::{Cursor, Transform};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub zoom: f64,
    /// Pan offset in unzoomed units.
    pub offset_x: f64,
    pub offset_y: f64,
    pub dragging: bool,
}

/// Emitted once per crossing of the label breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakpointCrossing {
    /// Labels shown, tooltip suppressed.
    Up,
    /// Labels hidden, tooltip re-enabled.
    Down,
}

#[derive(Debug, Clone)]
pub struct ViewportController {
    config: ViewportConfig,
    state: ViewportState,
    labels_visible: bool,
    last_pointer: Option<Point>,
    press_origin: Option<Point>,
    did_drag: bool,
}

impl ViewportController {
    pub fn new(config: ViewportConfig) -> Self {
        let state = ViewportState {
            zoom: config.min_zoom,
            offset_x: 0.0,
            offset_y: 0.0,
            dragging: false,
        };
        let labels_visible = config.breakpoint.is_some_and(|b| state.zoom > b);
        Self {
            config,
            state,
            labels_visible,
            last_pointer: None,
            press_origin: None,
            did_drag: false,
        }
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Whether the zoom is currently above the label breakpoint.
    pub fn labels_visible(&self) -> bool {
        self.labels_visible
    }

    /// Apply a wheel delta (positive = scroll down = zoom out).
    pub fn wheel(&mut self, delta: f64) -> Option<BreakpointCrossing> {
        if !self.config.zoom_enabled {
            return None;
        }
        let zoom = self.state.zoom;
        let step = match self.config.zoom_curve {
            ZoomCurve::Linear => delta * self.config.sensitivity,
            ZoomCurve::Proportional => delta * self.config.sensitivity * zoom,
        };
        let mut next = (zoom - step).max(self.config.min_zoom);
        if let Some(max) = self.config.max_zoom {
            next = next.min(max.max(self.config.min_zoom));
        }
        if !next.is_finite() {
            return None;
        }
        self.state.zoom = next;
        self.update_breakpoint()
    }

    fn update_breakpoint(&mut self) -> Option<BreakpointCrossing> {
        let above = self.config.breakpoint.is_some_and(|b| self.state.zoom > b);
        match (self.labels_visible, above) {
            (false, true) => {
                self.labels_visible = true;
                tracing::debug!(zoom = self.state.zoom, "label breakpoint crossed upward");
                Some(BreakpointCrossing::Up)
            }
            (true, false) => {
                self.labels_visible = false;
                tracing::debug!(zoom = self.state.zoom, "label breakpoint crossed downward");
                Some(BreakpointCrossing::Down)
            }
            _ => None,
        }
    }

    pub fn pointer_down(&mut self, at: Point) {
        self.state.dragging = true;
        self.last_pointer = Some(at);
        self.press_origin = Some(at);
        self.did_drag = false;
    }

    /// Track pointer motion; pans while dragging. Returns whether the pan offset changed.
    pub fn pointer_move(&mut self, at: Point) -> bool {
        if !self.state.dragging {
            return false;
        }
        let Some(last) = self.last_pointer.replace(at) else {
            return false;
        };
        if let Some(origin) = self.press_origin {
            let threshold = self.config.drag_threshold;
            if (at.x - origin.x).abs() > threshold || (at.y - origin.y).abs() > threshold {
                self.did_drag = true;
            }
        }
        self.drag_by(at.x - last.x, at.y - last.y)
    }

    /// Pan by a screen-space movement. Dividing by zoom keeps drag speed constant.
    pub fn drag_by(&mut self, dx: f64, dy: f64) -> bool {
        if !self.config.zoom_enabled || !self.state.dragging {
            return false;
        }
        self.state.offset_x += dx / self.state.zoom;
        self.state.offset_y += dy / self.state.zoom;
        true
    }

    /// End a drag. Returns `true` if the press never moved past the drag threshold.
    pub fn pointer_up(&mut self) -> bool {
        let was_click = self.state.dragging && !self.did_drag;
        self.end_drag();
        was_click
    }

    /// Pointer left the viewport; treated as a release so a drag never sticks.
    pub fn pointer_leave(&mut self) {
        self.end_drag();
    }

    fn end_drag(&mut self) {
        self.state.dragging = false;
        self.last_pointer = None;
        self.press_origin = None;
        self.did_drag = false;
    }

    /// Back to minimum zoom with no pan.
    pub fn reset(&mut self) -> Option<BreakpointCrossing> {
        self.state.zoom = self.config.min_zoom;
        self.state.offset_x = 0.0;
        self.state.offset_y = 0.0;
        self.end_drag();
        self.update_breakpoint()
    }

    pub fn transform(&self) -> Transform {
        let zoom = self.state.zoom;
        Transform {
            translate_x: self.state.offset_x * zoom,
            translate_y: self.state.offset_y * zoom,
            scale: self.config.scale_curve.apply(zoom),
        }
    }

    pub fn cursor(&self) -> Cursor {
        if self.state.zoom <= self.config.min_zoom {
            Cursor::Pointer
        } else if self.state.dragging {
            Cursor::Grabbing
        } else {
            Cursor::Grab
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaleCurve;

    fn linear() -> ViewportConfig {
        ViewportConfig {
            zoom_enabled: true,
            min_zoom: 1.0,
            max_zoom: None,
            sensitivity: 0.01,
            zoom_curve: ZoomCurve::Linear,
            scale_curve: ScaleCurve::Identity,
            breakpoint: Some(2.0),
            drag_threshold: 3.0,
        }
    }

    #[test]
    fn test_starts_at_min_zoom() {
        let vp = ViewportController::new(linear());
        assert!((vp.state().zoom - 1.0).abs() < 1e-9);
        assert!(!vp.labels_visible());
        assert_eq!(vp.cursor(), Cursor::Pointer);
    }

    #[test]
    fn test_scroll_up_zooms_in() {
        let mut vp = ViewportController::new(linear());
        vp.wheel(-50.0);
        assert!((vp.state().zoom - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_never_below_min() {
        let mut vp = ViewportController::new(linear());
        for delta in [-30.0, 500.0, 1e12, -10.0, f64::MAX, 3.0, f64::NAN, f64::INFINITY] {
            vp.wheel(delta);
            assert!(vp.state().zoom >= 1.0, "zoom {} after delta {delta}", vp.state().zoom);
        }
    }

    #[test]
    fn test_infinite_zoom_in_is_ignored() {
        let mut vp = ViewportController::new(linear());
        vp.wheel(-50.0);
        vp.wheel(f64::NEG_INFINITY);
        assert!((vp.state().zoom - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_max_zoom_caps() {
        let mut vp = ViewportController::new(ViewportConfig {
            max_zoom: Some(3.0),
            ..linear()
        });
        vp.wheel(-10_000.0);
        assert!((vp.state().zoom - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_proportional_curve() {
        let mut vp = ViewportController::new(ViewportConfig {
            zoom_curve: ZoomCurve::Proportional,
            ..linear()
        });
        vp.wheel(-100.0); // 1 + 100 * 0.01 * 1 = 2
        vp.wheel(-50.0); // 2 + 50 * 0.01 * 2 = 3
        assert!((vp.state().zoom - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_disabled_ignores_wheel_and_drag() {
        let mut vp = ViewportController::new(ViewportConfig {
            zoom_enabled: false,
            ..linear()
        });
        assert_eq!(vp.wheel(-500.0), None);
        assert!((vp.state().zoom - 1.0).abs() < 1e-9);
        vp.pointer_down(Point::new(0.0, 0.0));
        assert!(!vp.pointer_move(Point::new(40.0, 40.0)));
        assert!((vp.state().offset_x).abs() < 1e-9);
    }

    #[test]
    fn test_breakpoint_edge_triggered() {
        let mut vp = ViewportController::new(linear());
        assert_eq!(vp.wheel(-50.0), None); // 1.5
        assert_eq!(vp.wheel(-100.0), Some(BreakpointCrossing::Up)); // 2.5
        assert_eq!(vp.wheel(-100.0), None); // 3.5
        assert_eq!(vp.wheel(20.0), None); // 3.3
        assert!(vp.labels_visible());
        assert_eq!(vp.wheel(150.0), Some(BreakpointCrossing::Down)); // 1.8
        assert_eq!(vp.wheel(10.0), None);
        assert_eq!(vp.wheel(10.0), None);
        assert!(!vp.labels_visible());
    }

    #[test]
    fn test_exactly_at_breakpoint_is_below() {
        let mut vp = ViewportController::new(ViewportConfig {
            sensitivity: 0.5,
            ..linear()
        });
        assert_eq!(vp.wheel(-2.0), None); // exactly 2.0
        assert!(!vp.labels_visible());
    }

    #[test]
    fn test_no_breakpoint_never_crosses() {
        let mut vp = ViewportController::new(ViewportConfig {
            breakpoint: None,
            ..linear()
        });
        for _ in 0..10 {
            assert_eq!(vp.wheel(-100.0), None);
        }
    }

    #[test]
    fn test_drag_accumulates_over_zoom() {
        let mut vp = ViewportController::new(linear());
        vp.wheel(-100.0); // zoom 2
        vp.pointer_down(Point::new(0.0, 0.0));
        let moves = [(10.0, -4.0), (6.0, 8.0), (-2.0, 3.0)];
        for (dx, dy) in moves {
            assert!(vp.drag_by(dx, dy));
        }
        let s = vp.state();
        assert!((s.offset_x - 14.0 / 2.0).abs() < 1e-9);
        assert!((s.offset_y - 7.0 / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_move_uses_deltas_between_events() {
        let mut vp = ViewportController::new(linear());
        vp.wheel(-300.0); // zoom 4
        vp.pointer_down(Point::new(100.0, 100.0));
        vp.pointer_move(Point::new(108.0, 96.0));
        vp.pointer_move(Point::new(120.0, 100.0));
        let s = vp.state();
        assert!((s.offset_x - 20.0 / 4.0).abs() < 1e-9);
        assert!((s.offset_y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_move_without_press_does_not_pan() {
        let mut vp = ViewportController::new(linear());
        assert!(!vp.pointer_move(Point::new(50.0, 50.0)));
        assert!(!vp.drag_by(5.0, 5.0));
        assert!((vp.state().offset_x).abs() < 1e-9);
    }

    #[test]
    fn test_click_vs_drag() {
        let mut vp = ViewportController::new(linear());
        vp.pointer_down(Point::new(10.0, 10.0));
        vp.pointer_move(Point::new(12.0, 11.0));
        assert!(vp.pointer_up());

        vp.pointer_down(Point::new(10.0, 10.0));
        vp.pointer_move(Point::new(30.0, 10.0));
        assert!(!vp.pointer_up());
    }

    #[test]
    fn test_pointer_leave_ends_drag() {
        let mut vp = ViewportController::new(linear());
        vp.pointer_down(Point::new(0.0, 0.0));
        vp.pointer_leave();
        assert!(!vp.state().dragging);
        assert!(!vp.pointer_move(Point::new(20.0, 20.0)));
    }

    #[test]
    fn test_cursor_states() {
        let mut vp = ViewportController::new(linear());
        vp.pointer_down(Point::new(0.0, 0.0));
        assert_eq!(vp.cursor(), Cursor::Pointer);
        vp.pointer_up();
        vp.wheel(-10.0);
        assert_eq!(vp.cursor(), Cursor::Grab);
        vp.pointer_down(Point::new(0.0, 0.0));
        assert_eq!(vp.cursor(), Cursor::Grabbing);
        vp.pointer_up();
        vp.wheel(1000.0);
        assert_eq!(vp.cursor(), Cursor::Pointer);
    }

    #[test]
    fn test_transform_with_power_curve() {
        let mut vp = ViewportController::new(ViewportConfig {
            scale_curve: ScaleCurve::Power(4.0),
            ..linear()
        });
        vp.wheel(-100.0); // zoom 2
        vp.pointer_down(Point::new(0.0, 0.0));
        vp.drag_by(10.0, 20.0); // offset (5, 10)
        let t = vp.transform();
        assert!((t.translate_x - 10.0).abs() < 1e-9);
        assert!((t.translate_y - 20.0).abs() < 1e-9);
        assert!((t.scale - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset_returns_to_min_and_hides_labels() {
        let mut vp = ViewportController::new(linear());
        vp.wheel(-300.0);
        vp.pointer_down(Point::new(0.0, 0.0));
        vp.drag_by(40.0, 40.0);
        assert_eq!(vp.reset(), Some(BreakpointCrossing::Down));
        let s = vp.state();
        assert!((s.zoom - 1.0).abs() < 1e-9);
        assert!(s.offset_x.abs() < 1e-9 && s.offset_y.abs() < 1e-9);
        assert!(!s.dragging);
        assert_eq!(vp.reset(), None);
    }
}
