//! Persistent on-map labels shown above the zoom breakpoint.

use crate::models::BBox;
use crate::regions::{RegionIndex, RegionPaths};
use crate::surface::{Label, RenderSurface};

pub const DEPARTMENT_LABEL_CLASS: &str = "depart-text";
pub const CITY_LABEL_CLASS: &str = "city-text";

pub fn label_at_center(bbox: BBox, text: String, class: &'static str) -> Label {
    let c = bbox.center();
    Label {
        text,
        x: c.x,
        y: c.y,
        class,
    }
}

/// Add a "Department (Region)" label at the center of every resolved department shape.
/// Returns how many labels were added.
pub fn inject_department_labels<S: RenderSurface>(
    surface: &mut S,
    index: &RegionIndex,
    paths: &RegionPaths<S::Handle>,
) -> usize {
    let mut added = 0;
    for region in index.regions() {
        for (id, shape) in paths.region(&region.name) {
            let Some(bbox) = surface.shape_bbox(shape) else {
                tracing::debug!(department = id, "no bounding box, label skipped");
                continue;
            };
            let Some(name) = index.department_name(*id) else {
                continue;
            };
            let text = format!("{name} ({})", region.name);
            surface.add_label(shape, &label_at_center(bbox, text, DEPARTMENT_LABEL_CLASS));
            added += 1;
        }
    }
    added
}

pub fn inject_city_labels<S: RenderSurface>(surface: &mut S) -> usize {
    let mut added = 0;
    for city in surface.city_markers() {
        let Some(bbox) = surface.shape_bbox(&city.shape) else {
            continue;
        };
        surface.add_label(&city.shape, &label_at_center(bbox, city.name, CITY_LABEL_CLASS));
        added += 1;
    }
    added
}
