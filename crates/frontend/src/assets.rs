use dioxus::prelude::*;
use listenmap_shared::config::MapConfig;
use listenmap_shared::models::RegionTable;
use listenmap_shared::{MapError, Result};

pub const MAP_SVG: Asset = asset!("/assets/listenbourg.svg");

/// Region/department table, bundled at build time.
const REGIONS_JSON: &str = include_str!("../assets/regions.json");

/// Deployment settings for the default route.
const MAP_CONFIG_JSON: &str = include_str!("../assets/map_config.json");

pub fn region_table() -> Result<RegionTable> {
    RegionTable::from_json(REGIONS_JSON)
}

pub fn map_config() -> Result<MapConfig> {
    MapConfig::from_json(MAP_CONFIG_JSON)
}

fn asset_url(path: &str) -> Result<String> {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .ok_or_else(|| MapError::AssetLoad("no window origin".to_string()))?;
    Ok(format!("{}{}", origin, path))
}

/// Minimal sanity check that a response body is SVG markup.
pub fn check_svg_markup(body: &str) -> Result<()> {
    if body.contains("<svg") {
        Ok(())
    } else {
        Err(MapError::AssetLoad("response is not SVG markup".to_string()))
    }
}

/// Fetch the map SVG so it can be inlined into the page.
pub async fn fetch_map_svg() -> Result<String> {
    let url = asset_url(&MAP_SVG.to_string())?;
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| MapError::AssetLoad(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(MapError::AssetLoad(format!("{}: HTTP {}", url, resp.status())));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| MapError::AssetLoad(e.to_string()))?;
    check_svg_markup(&body)?;
    tracing::info!(bytes = body.len(), "Loaded map asset");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use listenmap_shared::regions::RegionIndex;

    #[test]
    fn test_bundled_table_is_valid() {
        let table = region_table().unwrap();
        let index = RegionIndex::new(table).unwrap();
        assert_eq!(index.regions().len(), 4);
        assert_eq!(index.department_count(), 12);
        assert_eq!(index.region_of(10), Some("Littorale"));
    }

    #[test]
    fn test_bundled_svg_covers_every_department() {
        let svg = include_str!("../assets/listenbourg.svg");
        check_svg_markup(svg).unwrap();
        let index = RegionIndex::new(region_table().unwrap()).unwrap();
        for id in index.departments() {
            assert!(svg.contains(&format!("id=\"{}\"", id)), "department {} missing", id);
        }
    }

    #[test]
    fn test_bundled_config_matches_latest() {
        assert_eq!(map_config().unwrap(), MapConfig::default());
    }

    #[test]
    fn test_check_svg_markup_rejects_html() {
        assert!(check_svg_markup("<html><body>404</body></html>").is_err());
    }
}
