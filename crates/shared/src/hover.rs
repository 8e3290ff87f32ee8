//! Hover/Tooltip Coordinator: tracks the department under the pointer, recolors
//! its region, and keeps the floating tooltip next to the pointer.

use crate::color::lighten;
use crate::config::{HoverConfig, TooltipConfig};
use crate::models::{ColorScheme, DepartmentId, Point, Size};
use crate::regions::{RegionIndex, RegionPaths};
use crate::surface::{Fill, RenderSurface};
use crate::tooltip;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverRecord {
    pub region: String,
    pub department: DepartmentId,
    pub name: String,
}

/// Everything the coordinator reads but does not own.
pub struct HoverContext<'a, H> {
    pub index: &'a RegionIndex,
    pub paths: &'a RegionPaths<H>,
    pub scheme: ColorScheme,
}

#[derive(Debug, Clone)]
pub struct HoverCoordinator {
    config: HoverConfig,
    tooltip: TooltipConfig,
    record: Option<HoverRecord>,
    under_pointer: Option<DepartmentId>,
}

impl HoverCoordinator {
    pub fn new(config: HoverConfig, tooltip: TooltipConfig) -> Self {
        Self {
            config,
            tooltip,
            record: None,
            under_pointer: None,
        }
    }

    pub fn record(&self) -> Option<&HoverRecord> {
        self.record.as_ref()
    }

    /// Fill used for every department outside the hovered region.
    pub fn inactive_fill(&self, scheme: ColorScheme) -> Fill {
        self.config.inactive.fill(scheme)
    }

    /// Pointer entered department `id`: color its region, lighten the department itself.
    pub fn enter<S: RenderSurface>(
        &mut self,
        surface: &mut S,
        ctx: &HoverContext<'_, S::Handle>,
        id: DepartmentId,
    ) {
        let Some(region) = ctx.index.region_of(id) else {
            return;
        };
        let name = ctx.index.department_name(id).unwrap_or_default();

        if let Some(color) = ctx.index.region_color(region, ctx.scheme) {
            let fill = Fill::Color(color.to_string());
            for (_, shape) in ctx.paths.region(region) {
                surface.set_fill(shape, &fill);
            }
            match lighten(color, self.config.lighten_factor) {
                Ok(light) => {
                    if let Some(shape) = ctx.paths.department(id) {
                        surface.set_fill(shape, &Fill::Color(light));
                    }
                }
                Err(e) => tracing::warn!(region, error = %e, "cannot lighten region color"),
            }
        }

        self.record = Some(HoverRecord {
            region: region.to_string(),
            department: id,
            name: name.to_string(),
        });
    }

    /// Pointer left department `id`: restore its whole region to the inactive fill.
    pub fn leave<S: RenderSurface>(
        &mut self,
        surface: &mut S,
        ctx: &HoverContext<'_, S::Handle>,
        id: DepartmentId,
    ) {
        if let Some(region) = ctx.index.region_of(id) {
            let fill = self.inactive_fill(ctx.scheme);
            for (_, shape) in ctx.paths.region(region) {
                surface.set_fill(shape, &fill);
            }
        }
        if self.record.as_ref().is_some_and(|r| r.department == id) {
            self.record = None;
        }
    }

    /// Hit-test `point`, synthesize enter/leave on change, then show or hide the tooltip.
    pub fn pointer_moved<S: RenderSurface>(
        &mut self,
        surface: &mut S,
        ctx: &HoverContext<'_, S::Handle>,
        point: Point,
        tooltip_enabled: bool,
    ) {
        let hit = surface.hit_test(point);
        if hit != self.under_pointer {
            if let Some(old) = self.under_pointer.take() {
                self.leave(surface, ctx, old);
            }
            if let Some(new) = hit {
                self.enter(surface, ctx, new);
            }
            self.under_pointer = hit;
        }

        match (&self.record, hit) {
            (Some(record), Some(_)) if tooltip_enabled => {
                let text = tooltip::text(
                    record.department,
                    &record.name,
                    &record.region,
                    self.tooltip.include_id,
                );
                let (width, height) = surface.show_tooltip(&text);
                let at = tooltip::place(
                    point,
                    Size { width, height },
                    surface.container_right(),
                    &self.tooltip,
                );
                surface.move_tooltip(at);
            }
            _ => surface.hide_tooltip(),
        }
    }

    /// Pointer left the whole map.
    pub fn pointer_left<S: RenderSurface>(&mut self, surface: &mut S, ctx: &HoverContext<'_, S::Handle>) {
        if let Some(old) = self.under_pointer.take() {
            self.leave(surface, ctx, old);
        }
        surface.hide_tooltip();
    }

    /// Caption for a click on `point`: "Department (Region)".
    pub fn click_caption<S: RenderSurface>(
        &self,
        surface: &S,
        index: &RegionIndex,
        point: Point,
    ) -> Option<String> {
        let id = surface.hit_test(point)?;
        let region = index.region_of(id)?;
        let name = index.department_name(id)?;
        Some(tooltip::text(id, name, region, false))
    }
}
