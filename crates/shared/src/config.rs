//! Interaction settings. Each historical variant of the map is a [`Preset`].

use serde::{Deserialize, Serialize};

use crate::color::LIGHTEN_FACTOR;
use crate::error::Result;
use crate::models::ColorScheme;
use crate::surface::Fill;

/// Neutral gray used for departments outside the hovered region.
pub const INACTIVE_GRAY: &str = "#D6D6D6";

/// How a wheel delta changes the raw zoom scalar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomCurve {
    /// `zoom - delta * sensitivity`
    #[default]
    Linear,
    /// `zoom - delta * sensitivity * zoom`, for an exponential feel.
    Proportional,
}

/// Maps the raw zoom scalar to the rendered scale factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleCurve {
    #[default]
    Identity,
    Power(f64),
}

impl ScaleCurve {
    pub fn apply(self, zoom: f64) -> f64 {
        match self {
            ScaleCurve::Identity => zoom,
            ScaleCurve::Power(p) => zoom.powf(p),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub zoom_enabled: bool,
    pub min_zoom: f64,
    pub max_zoom: Option<f64>,
    pub sensitivity: f64,
    pub zoom_curve: ZoomCurve,
    pub scale_curve: ScaleCurve,
    /// Zoom above which persistent labels replace the tooltip. `None` never switches.
    pub breakpoint: Option<f64>,
    /// Pointer travel (px) below which a press/release is a click rather than a drag.
    pub drag_threshold: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            zoom_enabled: true,
            min_zoom: 1.0,
            max_zoom: None,
            sensitivity: 0.0005,
            zoom_curve: ZoomCurve::Proportional,
            scale_curve: ScaleCurve::Power(4.0),
            breakpoint: Some(1.5),
            drag_threshold: 3.0,
        }
    }
}

/// Fill for departments outside the hovered region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InactiveColor {
    Fixed(String),
    Unset,
    Scheme { light: String, dark: String },
}

impl InactiveColor {
    pub fn fill(&self, scheme: ColorScheme) -> Fill {
        match self {
            InactiveColor::Fixed(c) => Fill::Color(c.clone()),
            InactiveColor::Unset => Fill::Unset,
            InactiveColor::Scheme { light, dark } => match scheme {
                ColorScheme::Light => Fill::Color(light.clone()),
                ColorScheme::Dark => Fill::Color(dark.clone()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    pub lighten_factor: f64,
    pub inactive: InactiveColor,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            lighten_factor: LIGHTEN_FACTOR,
            inactive: InactiveColor::Scheme {
                light: INACTIVE_GRAY.to_string(),
                dark: "#3a3a3a".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalPlacement {
    /// Top edge level with the pointer.
    #[default]
    AtPointer,
    /// Vertically centered on the pointer.
    Centered,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub offset_x: f64,
    pub offset_y: f64,
    pub vertical: VerticalPlacement,
    /// Prefix tooltip text with the department id.
    pub include_id: bool,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: 25.0,
            offset_y: 25.0,
            vertical: VerticalPlacement::AtPointer,
            include_id: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub departments: bool,
    pub cities: bool,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            departments: true,
            cities: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub viewport: ViewportConfig,
    pub hover: HoverConfig,
    pub tooltip: TooltipConfig,
    pub labels: LabelConfig,
}

impl MapConfig {
    /// Parse a config; missing fields take the `Latest` defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Classic => Self {
                viewport: ViewportConfig {
                    zoom_enabled: false,
                    breakpoint: None,
                    scale_curve: ScaleCurve::Identity,
                    zoom_curve: ZoomCurve::Linear,
                    ..Default::default()
                },
                hover: HoverConfig {
                    inactive: InactiveColor::Fixed(INACTIVE_GRAY.to_string()),
                    ..Default::default()
                },
                tooltip: TooltipConfig {
                    include_id: false,
                    ..Default::default()
                },
                labels: LabelConfig {
                    departments: false,
                    cities: false,
                },
            },
            Preset::PanZoom => Self {
                viewport: ViewportConfig {
                    min_zoom: 0.75,
                    max_zoom: Some(6.0),
                    sensitivity: 0.3 / 100.0,
                    zoom_curve: ZoomCurve::Proportional,
                    scale_curve: ScaleCurve::Identity,
                    breakpoint: None,
                    ..Default::default()
                },
                hover: HoverConfig {
                    inactive: InactiveColor::Unset,
                    ..Default::default()
                },
                tooltip: TooltipConfig::default(),
                labels: LabelConfig::default(),
            },
            Preset::Latest => Self::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    /// Hover coloring and tooltip only, gray inactive fill.
    Classic,
    /// Library-style pan/zoom with bounded zoom and no label breakpoint.
    PanZoom,
    /// Custom transform zoom with a label breakpoint.
    #[default]
    Latest,
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(Preset::Classic),
            "panzoom" | "pan-zoom" | "pan_zoom" => Ok(Preset::PanZoom),
            "latest" => Ok(Preset::Latest),
            other => Err(format!("unknown preset {other:?}")),
        }
    }
}
