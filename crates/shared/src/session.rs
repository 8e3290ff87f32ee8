//! One interactive map: the Region Index, Viewport Controller and Hover/Tooltip
//! Coordinator sharing a single [`RenderSurface`].

use crate::config::MapConfig;
use crate::hover::{HoverContext, HoverCoordinator};
use crate::labels;
use crate::models::{ColorScheme, Point};
use crate::regions::{RegionIndex, RegionPaths};
use crate::surface::RenderSurface;
use crate::viewport::{BreakpointCrossing, ViewportController};

pub struct MapSession<S: RenderSurface> {
    surface: S,
    index: RegionIndex,
    paths: RegionPaths<S::Handle>,
    viewport: ViewportController,
    hover: HoverCoordinator,
    scheme: ColorScheme,
    /// Labels were injected but no breakpoint will ever reveal them; show them throughout.
    pinned_labels: bool,
}

impl<S: RenderSurface> MapSession<S> {
    /// Prepare an attached surface: resolve shapes, paint inactive fills, inject labels.
    ///
    /// The surface must already contain the rendered map, or every lookup comes back empty.
    pub fn new(mut surface: S, index: RegionIndex, config: MapConfig, scheme: ColorScheme) -> Self {
        let paths = index.resolve_paths(&surface);
        let has_breakpoint = config.viewport.breakpoint.is_some();
        let viewport = ViewportController::new(config.viewport);
        let hover = HoverCoordinator::new(config.hover, config.tooltip);

        let mut department_labels = 0;
        if config.labels.departments {
            department_labels = labels::inject_department_labels(&mut surface, &index, &paths);
        }
        let mut city_labels = 0;
        if config.labels.cities {
            city_labels = labels::inject_city_labels(&mut surface);
        }

        tracing::info!(
            regions = index.regions().len(),
            departments = index.department_count(),
            shapes = paths.len(),
            department_labels,
            city_labels,
            "map session ready"
        );

        let pinned_labels = !has_breakpoint && department_labels + city_labels > 0;
        let mut session = Self {
            surface,
            index,
            paths,
            viewport,
            hover,
            scheme,
            pinned_labels,
        };
        session.paint_inactive();
        let visible = pinned_labels || session.viewport.labels_visible();
        session.surface.set_labels_visible(visible);
        session.apply_view();
        session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn hover(&self) -> &HoverCoordinator {
        &self.hover
    }

    pub fn index(&self) -> &RegionIndex {
        &self.index
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Whether injected labels are shown regardless of zoom.
    pub fn labels_pinned(&self) -> bool {
        self.pinned_labels
    }

    fn paint_inactive(&mut self) {
        let fill = self.hover.inactive_fill(self.scheme);
        for region in self.index.regions() {
            for (_, shape) in self.paths.region(&region.name) {
                self.surface.set_fill(shape, &fill);
            }
        }
    }

    fn apply_view(&mut self) {
        self.surface.set_transform(&self.viewport.transform());
        self.surface.set_cursor(self.viewport.cursor());
    }

    fn apply_crossing(&mut self, crossing: Option<BreakpointCrossing>) {
        match crossing {
            Some(BreakpointCrossing::Up) => {
                self.surface.set_labels_visible(true);
                self.surface.hide_tooltip();
            }
            Some(BreakpointCrossing::Down) => self.surface.set_labels_visible(false),
            None => {}
        }
    }

    pub fn on_wheel(&mut self, delta: f64) {
        let crossing = self.viewport.wheel(delta);
        self.apply_crossing(crossing);
        self.apply_view();
    }

    pub fn on_pointer_down(&mut self, at: Point) {
        self.viewport.pointer_down(at);
        self.surface.set_cursor(self.viewport.cursor());
    }

    pub fn on_pointer_move(&mut self, at: Point) {
        if self.viewport.pointer_move(at) {
            self.apply_view();
        }
        let ctx = HoverContext {
            index: &self.index,
            paths: &self.paths,
            scheme: self.scheme,
        };
        let tooltip_enabled = !self.viewport.labels_visible();
        self.hover.pointer_moved(&mut self.surface, &ctx, at, tooltip_enabled);
    }

    /// Release. Returns the click caption when the press was a click on a department.
    pub fn on_pointer_up(&mut self, at: Point) -> Option<String> {
        let was_click = self.viewport.pointer_up();
        self.surface.set_cursor(self.viewport.cursor());
        if !was_click {
            return None;
        }
        self.hover.click_caption(&self.surface, &self.index, at)
    }

    pub fn on_pointer_leave(&mut self) {
        self.viewport.pointer_leave();
        let ctx = HoverContext {
            index: &self.index,
            paths: &self.paths,
            scheme: self.scheme,
        };
        self.hover.pointer_left(&mut self.surface, &ctx);
        self.surface.set_cursor(self.viewport.cursor());
    }

    pub fn on_double_click(&mut self) {
        let crossing = self.viewport.reset();
        self.apply_crossing(crossing);
        self.apply_view();
    }

    /// Host switched light/dark preference: repaint, keeping the hovered region colored.
    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        if scheme == self.scheme {
            return;
        }
        self.scheme = scheme;
        self.paint_inactive();
        if let Some(id) = self.hover.record().map(|r| r.department) {
            let ctx = HoverContext {
                index: &self.index,
                paths: &self.paths,
                scheme,
            };
            self.hover.enter(&mut self.surface, &ctx, id);
        }
    }
}
