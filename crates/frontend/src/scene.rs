//! Everything the Leaflet bridge needs to draw one frame, as plain data.
//!
//! Building the scene is pure so it can be tested without a browser; the
//! bridge only serializes it and hands it to JavaScript.

use safepath_shared::config::MapConfig;
use safepath_shared::models::Location;
use safepath_shared::style::{self, ROUTE_LINE_OPACITY, ROUTE_LINE_WEIGHT};
use safepath_shared::view_state::ViewState;
use serde::Serialize;

use crate::coords;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileSource {
    pub url: String,
    pub attribution: String,
    pub max_zoom: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerIcon {
    pub color: &'static str,
    pub glyph: &'static str,
    pub size: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerSpec {
    pub position: [f64; 2],
    pub title: String,
    pub popup: String,
    pub icon: MarkerIcon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolylineSpec {
    pub points: Vec<[f64; 2]>,
    pub color: String,
    pub weight: u8,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub center: [f64; 2],
    pub zoom: u8,
    /// The bridge moves the viewport to `center`/`zoom` only when this
    /// changes, so route selection leaves the user's pan and zoom alone.
    pub view_key: u64,
    pub tiles: TileSource,
    pub markers: Vec<MarkerSpec>,
    /// Only the selected route is drawn.
    pub route: Option<PolylineSpec>,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn popup_html(location: &Location) -> String {
    format!(
        r#"<div class="popup"><strong>{}</strong><div>{}</div><div>Risk: <span class="risk-{}">{}</span></div><div class="popup-coords">{}</div></div>"#,
        escape_html(&location.name),
        coords::category_label(location.category),
        location.risk,
        location.risk,
        coords::format_lat_lng(location.position()),
    )
}

fn marker_for(location: &Location) -> MarkerSpec {
    let s = style::marker_style(location.risk);
    MarkerSpec {
        position: location.position().to_array(),
        title: location.name.clone(),
        popup: popup_html(location),
        icon: MarkerIcon {
            color: s.color,
            glyph: s.glyph,
            size: s.size,
        },
    }
}

pub fn build_scene(state: &ViewState, map: &MapConfig) -> MapScene {
    let markers = if state.show_results {
        state.locations.iter().map(marker_for).collect()
    } else {
        Vec::new()
    };

    let route = state
        .selected_route()
        .filter(|_| state.show_results)
        .map(|r| PolylineSpec {
            points: r.coordinates.iter().map(|p| p.to_array()).collect(),
            color: r.color.clone(),
            weight: ROUTE_LINE_WEIGHT,
            opacity: ROUTE_LINE_OPACITY,
        });

    MapScene {
        center: state.center.to_array(),
        zoom: state.zoom,
        view_key: state.submissions,
        tiles: TileSource {
            url: map.tile_url.clone(),
            attribution: map.attribution.clone(),
            max_zoom: map.max_zoom,
        },
        markers,
        route,
    }
}
