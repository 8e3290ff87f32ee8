use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Numeric department id. The rendered map uses its decimal form as the group element id.
pub type DepartmentId = u32;

/// Preferred color scheme of the host document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::Dark => write!(f, "dark"),
        }
    }
}

/// A region fill: either one color, or a `[light, dark]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RegionColor {
    Single(String),
    Pair(String, String),
}

impl RegionColor {
    pub fn for_scheme(&self, scheme: ColorScheme) -> &str {
        match (self, scheme) {
            (RegionColor::Single(c), _) => c,
            (RegionColor::Pair(light, _), ColorScheme::Light) => light,
            (RegionColor::Pair(_, dark), ColorScheme::Dark) => dark,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionEntry {
    pub color: RegionColor,
    pub departments: Vec<(DepartmentId, String)>,
}

/// The static region/department table, keyed by region name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionTable {
    pub regions: BTreeMap<String, RegionEntry>,
}

impl RegionTable {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A point in surface (client) pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned box in a shape's local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BBox {
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
