//! The seam between interaction logic and whatever draws the map.
//!
//! The browser frontend implements [`RenderSurface`] over the live SVG document;
//! tests use [`FakeSurface`].

use crate::models::{BBox, DepartmentId, Point};

/// Fill applied to a department shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill {
    Color(String),
    /// Remove any inline fill so the asset's own styling shows.
    Unset,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Pointer,
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Pointer => "pointer",
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// Pan/zoom transform, applied as `translate(x, y) scale(s)` with origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            scale: 1.0,
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.scale
        )
    }
}

/// A text label centered on a shape, never hit-testable or selectable.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub class: &'static str,
}

/// A city marker found in the rendered map.
#[derive(Debug, Clone)]
pub struct CityMarker<H> {
    pub name: String,
    pub shape: H,
}

/// Rendering operations the map logic needs.
///
/// `Handle` identifies a shape owned by the surface (a DOM node in the browser).
pub trait RenderSurface {
    type Handle: Clone;

    /// The primary shape of a department's group, if present.
    fn department_shape(&self, id: DepartmentId) -> Option<Self::Handle>;

    /// Native hit-test: which department (if any) is under `point`.
    fn hit_test(&self, point: Point) -> Option<DepartmentId>;

    fn set_fill(&mut self, shape: &Self::Handle, fill: &Fill);

    fn set_transform(&mut self, transform: &Transform);

    fn set_cursor(&mut self, cursor: Cursor);

    /// Toggle persistent on-map labels.
    fn set_labels_visible(&mut self, visible: bool);

    /// Local bounding box of a shape.
    fn shape_bbox(&self, shape: &Self::Handle) -> Option<BBox>;

    /// Attach a label next to `shape` (inside its group).
    fn add_label(&mut self, shape: &Self::Handle, label: &Label);

    fn city_markers(&self) -> Vec<CityMarker<Self::Handle>>;

    /// Set tooltip content, make it visible, and return its rendered width and height.
    fn show_tooltip(&mut self, text: &str) -> (f64, f64);

    fn move_tooltip(&mut self, position: Point);

    fn hide_tooltip(&mut self);

    /// Right edge of the map's containing surface, in the same space as pointer points.
    fn container_right(&self) -> f64;
}

#[cfg(test)]
pub use fake::{FakeHandle, FakeSurface};

#[cfg(test)]
mod fake {
    use std::collections::HashMap;

    use super::*;

    /// In-memory surface that records every mutation.
    #[derive(Debug, Default)]
    pub struct FakeSurface {
        /// Departments present in the "document", with their bounding box.
        pub shapes: HashMap<DepartmentId, BBox>,
        pub cities: Vec<(String, BBox)>,
        /// Department returned by `hit_test` regardless of the point.
        pub under_pointer: Option<DepartmentId>,
        pub fills: HashMap<DepartmentId, Fill>,
        pub transform: Option<Transform>,
        pub transform_writes: usize,
        pub cursor: Cursor,
        pub labels_visible: bool,
        pub label_toggles: usize,
        pub labels: Vec<(FakeHandle, Label)>,
        pub tooltip: Option<(String, Point)>,
        pub tooltip_size: (f64, f64),
        pub right: f64,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum FakeHandle {
        Department(DepartmentId),
        City(usize),
    }

    impl FakeSurface {
        pub fn with_departments(ids: &[DepartmentId]) -> Self {
            let shapes = ids
                .iter()
                .map(|&id| {
                    let bbox = BBox {
                        x: id as f64 * 10.0,
                        y: 0.0,
                        width: 10.0,
                        height: 20.0,
                    };
                    (id, bbox)
                })
                .collect();
            Self {
                shapes,
                tooltip_size: (120.0, 30.0),
                right: 1000.0,
                ..Default::default()
            }
        }

        pub fn fill_of(&self, id: DepartmentId) -> Option<&Fill> {
            self.fills.get(&id)
        }
    }

    impl RenderSurface for FakeSurface {
        type Handle = FakeHandle;

        fn department_shape(&self, id: DepartmentId) -> Option<FakeHandle> {
            self.shapes.contains_key(&id).then_some(FakeHandle::Department(id))
        }

        fn hit_test(&self, _point: Point) -> Option<DepartmentId> {
            self.under_pointer
        }

        fn set_fill(&mut self, shape: &FakeHandle, fill: &Fill) {
            if let FakeHandle::Department(id) = shape {
                self.fills.insert(*id, fill.clone());
            }
        }

        fn set_transform(&mut self, transform: &Transform) {
            self.transform = Some(*transform);
            self.transform_writes += 1;
        }

        fn set_cursor(&mut self, cursor: Cursor) {
            self.cursor = cursor;
        }

        fn set_labels_visible(&mut self, visible: bool) {
            self.labels_visible = visible;
            self.label_toggles += 1;
        }

        fn shape_bbox(&self, shape: &FakeHandle) -> Option<BBox> {
            match shape {
                FakeHandle::Department(id) => self.shapes.get(id).copied(),
                FakeHandle::City(i) => self.cities.get(*i).map(|(_, b)| *b),
            }
        }

        fn add_label(&mut self, shape: &FakeHandle, label: &Label) {
            self.labels.push((shape.clone(), label.clone()));
        }

        fn city_markers(&self) -> Vec<CityMarker<FakeHandle>> {
            self.cities
                .iter()
                .enumerate()
                .map(|(i, (name, _))| CityMarker {
                    name: name.clone(),
                    shape: FakeHandle::City(i),
                })
                .collect()
        }

        fn show_tooltip(&mut self, text: &str) -> (f64, f64) {
            let pos = self.tooltip.as_ref().map(|(_, p)| *p).unwrap_or_default();
            self.tooltip = Some((text.to_string(), pos));
            self.tooltip_size
        }

        fn move_tooltip(&mut self, position: Point) {
            if let Some((_, p)) = self.tooltip.as_mut() {
                *p = position;
            }
        }

        fn hide_tooltip(&mut self) {
            self.tooltip = None;
        }

        fn container_right(&self) -> f64 {
            self.right
        }
    }
}
