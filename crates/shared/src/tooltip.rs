use crate::config::{TooltipConfig, VerticalPlacement};
use crate::models::{DepartmentId, Point, Size};

/// Place a tooltip next to `anchor`.
///
/// When the tooltip would run past `container_right`, it flips to the left of the
/// pointer and drops below it; otherwise it sits `offset_x` to the right.
pub fn place(anchor: Point, size: Size, container_right: f64, config: &TooltipConfig) -> Point {
    if anchor.x + size.width > container_right {
        return Point::new(anchor.x - size.width, anchor.y + config.offset_y);
    }
    let y = match config.vertical {
        VerticalPlacement::AtPointer => anchor.y,
        VerticalPlacement::Centered => anchor.y - size.height / 2.0,
    };
    Point::new(anchor.x + config.offset_x, y)
}

/// Tooltip / caption text for a department.
pub fn text(id: DepartmentId, department: &str, region: &str, include_id: bool) -> String {
    if include_id {
        format!("{id} {department} ({region})")
    } else {
        format!("{department} ({region})")
    }
}
