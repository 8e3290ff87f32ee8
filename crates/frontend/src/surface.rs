use listenmap_shared::models::{BBox, DepartmentId, Point};
use listenmap_shared::surface::{CityMarker, Cursor, Fill, Label, RenderSurface, Transform};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub const MAP_CONTAINER_ID: &str = "map-container";
pub const MAP_STAGE_ID: &str = "map-stage";
pub const TOOLTIP_ID: &str = "tooltip";

const LABELS_VISIBLE_CLASS: &str = "labels-visible";

/// Department id carried by a group's element id.
pub fn parse_department_id(id: &str) -> Option<DepartmentId> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}

fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

/// [`RenderSurface`] over the inlined map SVG.
pub struct DomSurface {
    document: Document,
    container: HtmlElement,
    stage: HtmlElement,
    svg: Element,
    tooltip: HtmlElement,
}

impl DomSurface {
    /// `None` until the map SVG is attached to the document.
    pub fn attach() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let container = html_element(&document, MAP_CONTAINER_ID)?;
        let stage = html_element(&document, MAP_STAGE_ID)?;
        let svg = stage.query_selector("svg").ok().flatten()?;
        let tooltip = html_element(&document, TOOLTIP_ID)?;
        Some(Self {
            document,
            container,
            stage,
            svg,
            tooltip,
        })
    }
}

impl RenderSurface for DomSurface {
    type Handle = Element;

    fn department_shape(&self, id: DepartmentId) -> Option<Element> {
        self.svg
            .query_selector(&format!("g[id=\"{}\"] path", id))
            .ok()
            .flatten()
    }

    fn hit_test(&self, point: Point) -> Option<DepartmentId> {
        let mut node = self
            .document
            .element_from_point(point.x as f32, point.y as f32);
        while let Some(el) = node {
            if el == self.svg {
                break;
            }
            if el.tag_name().eq_ignore_ascii_case("g") {
                if let Some(id) = parse_department_id(&el.id()) {
                    return Some(id);
                }
            }
            node = el.parent_element();
        }
        None
    }

    fn set_fill(&mut self, shape: &Element, fill: &Fill) {
        let Some(el) = shape.dyn_ref::<web_sys::SvgElement>() else {
            return;
        };
        let style = el.style();
        let result = match fill {
            Fill::Color(color) => style.set_property("fill", color),
            Fill::Unset => style.remove_property("fill").map(|_| ()),
        };
        if result.is_err() {
            tracing::debug!(?fill, "could not update shape fill");
        }
    }

    fn set_transform(&mut self, transform: &Transform) {
        self.stage
            .style()
            .set_property("transform", &transform.to_string())
            .ok();
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.container
            .style()
            .set_property("cursor", cursor.css())
            .ok();
    }

    fn set_labels_visible(&mut self, visible: bool) {
        self.container
            .class_list()
            .toggle_with_force(LABELS_VISIBLE_CLASS, visible)
            .ok();
    }

    fn shape_bbox(&self, shape: &Element) -> Option<BBox> {
        let graphics = shape.dyn_ref::<web_sys::SvgGraphicsElement>()?;
        let rect = graphics.get_b_box().ok()?;
        Some(BBox {
            x: rect.x() as f64,
            y: rect.y() as f64,
            width: rect.width() as f64,
            height: rect.height() as f64,
        })
    }

    fn add_label(&mut self, shape: &Element, label: &Label) {
        let Some(group) = shape.parent_element() else {
            return;
        };
        let Ok(text) = self.document.create_element_ns(Some(SVG_NS), "text") else {
            return;
        };
        let attrs = [
            ("x", label.x.to_string()),
            ("y", label.y.to_string()),
            ("dominant-baseline", "middle".to_string()),
            ("text-anchor", "middle".to_string()),
            ("class", label.class.to_string()),
            (
                "style",
                "pointer-events:none;user-select:none;-webkit-user-select:none".to_string(),
            ),
        ];
        for (name, value) in &attrs {
            text.set_attribute(name, value).ok();
        }
        text.set_text_content(Some(&label.text));
        group.append_child(&text).ok();
    }

    fn city_markers(&self) -> Vec<CityMarker<Element>> {
        let Ok(groups) = self.svg.query_selector_all("g.city") else {
            return Vec::new();
        };
        (0..groups.length())
            .filter_map(|i| groups.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|group| {
                let name = group.get_attribute("data-city-name")?;
                let shape = group.query_selector("circle").ok().flatten()?;
                Some(CityMarker { name, shape })
            })
            .collect()
    }

    fn show_tooltip(&mut self, text: &str) -> (f64, f64) {
        self.tooltip.set_text_content(Some(text));
        self.tooltip.style().set_property("display", "block").ok();
        (
            self.tooltip.client_width() as f64,
            self.tooltip.client_height() as f64,
        )
    }

    fn move_tooltip(&mut self, position: Point) {
        let style = self.tooltip.style();
        style.set_property("left", &format!("{}px", position.x)).ok();
        style.set_property("top", &format!("{}px", position.y)).ok();
    }

    fn hide_tooltip(&mut self) {
        self.tooltip.style().set_property("display", "none").ok();
    }

    fn container_right(&self) -> f64 {
        self.container.get_bounding_client_rect().right()
    }
}
