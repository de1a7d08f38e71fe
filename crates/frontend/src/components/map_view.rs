use dioxus::logger::tracing;
use dioxus::prelude::*;
use safepath_shared::models::LatLng;

use crate::coords;
use crate::leaflet;
use crate::scene::MapScene;

const MAP_CONTAINER_ID: &str = "hazard-map-container";

/// Text for the fixed center readout in the corner of the map.
fn center_readout(scene: &MapScene) -> String {
    let center = LatLng::new(scene.center[0], scene.center[1]);
    format!("{} \u{00b7} z{}", coords::format_lat_lng(center), scene.zoom)
}

#[component]
pub fn MapView(scene: Memo<MapScene>) -> Element {
    // Runs after every commit in which the scene changed; Leaflet only
    // recenters when the scene's view key differs from the one it last showed.
    use_effect(move || {
        let scene = scene.read();
        if let Err(e) = leaflet::render(MAP_CONTAINER_ID, &scene) {
            tracing::error!(error = %e, "failed to render map scene");
        }
    });

    use_drop(|| leaflet::destroy(MAP_CONTAINER_ID));

    let readout = center_readout(&scene.read());

    rsx! {
        div { class: "map-wrapper",
            div { id: MAP_CONTAINER_ID, class: "map-container" }
            div { class: "coord-readout",
                span { class: "coord-tag", "{readout}" }
            }
        }
    }
}
