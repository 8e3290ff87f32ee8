use dioxus::prelude::*;
use listenmap_shared::config::{MapConfig, Preset};

use crate::assets;
use crate::components::map_view::MapView;

/// Config for the named preset, or the bundled deployment config when no preset is named.
/// Unknown names and an unreadable config fall back to the defaults.
pub fn preset_config(name: Option<&str>) -> MapConfig {
    let Some(name) = name else {
        return assets::map_config().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "bundled map config unreadable, using defaults");
            MapConfig::default()
        });
    };
    let preset = name.parse::<Preset>().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default preset");
        Preset::default()
    });
    MapConfig::preset(preset)
}

#[component]
pub fn MapPage(preset: Option<String>) -> Element {
    let config = preset_config(preset.as_deref());
    let caption = use_signal(|| None::<String>);
    let zoomable = config.viewport.zoom_enabled;

    rsx! {
        div { class: "app",
            div { class: "header",
                h1 { "Listenbourg" }
                if let Some(text) = caption.read().clone() {
                    span { class: "region-name", "{text}" }
                }
            }

            MapView { config, caption }

            div { class: "footer",
                if zoomable {
                    "Scroll to zoom, drag to pan, double-click to reset. Click a department to name it."
                } else {
                    "Hover a department to see its region. Click to name it."
                }
            }
        }
    }
}
