//! Bridge to the Leaflet global (`L`), loaded from the CDN by `Dioxus.toml`.
//! The JavaScript half lives in `leaflet.js` next to this file.
//!
//! Leaflet owns tiles, markers, popups, polylines and pan/zoom. Rust only
//! hands it a serialized [`MapScene`] per render.

use wasm_bindgen::prelude::*;

use crate::scene::MapScene;

#[wasm_bindgen(module = "/src/leaflet.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn safepath_render_scene(container_id: &str, scene_json: &str) -> Result<(), JsValue>;

    fn safepath_destroy_map(container_id: &str);
}

/// Draw `scene` into the element with id `container_id`, creating the map on
/// first use. The viewport only moves when `scene.view_key` changed.
pub fn render(container_id: &str, scene: &MapScene) -> Result<(), String> {
    let json = serde_json::to_string(scene).map_err(|e| e.to_string())?;
    safepath_render_scene(container_id, &json)
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{e:?}")))
}

pub fn destroy(container_id: &str) {
    safepath_destroy_map(container_id);
}

#[cfg(test)]
mod tests {
    const BRIDGE_JS: &str = include_str!("leaflet.js");

    #[test]
    fn test_bridge_exports_match_externs() {
        assert!(BRIDGE_JS.contains("export function safepath_render_scene(containerId, sceneJson)"));
        assert!(BRIDGE_JS.contains("export function safepath_destroy_map(containerId)"));
    }

    #[test]
    fn test_size_refreshed_before_recentering() {
        let resize = BRIDGE_JS.find("invalidateSize(").expect("container size is refreshed");
        let recenter = BRIDGE_JS.find("setView(").expect("viewport is recentered");
        assert!(resize < recenter);
    }

    #[test]
    fn test_recenter_keyed_on_view_key() {
        assert!(BRIDGE_JS.contains("scene.view_key"));
        assert!(!BRIDGE_JS.contains("scene.center[0]},"));
    }
}
