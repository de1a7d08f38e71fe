use safepath_shared::models::{LatLng, LocationCategory};

/// Decimal places shown for coordinates. Four places is roughly 11 m.
const DISPLAY_DECIMALS: usize = 4;

/// Decimal places used in share links, enough to reproduce the submitted point.
const LINK_DECIMALS: usize = 6;

fn hemisphere(value: f64, positive: char, negative: char) -> char {
    if value < 0.0 {
        negative
    } else {
        positive
    }
}

/// Format a latitude as e.g. `40.0012° N`.
pub fn format_lat(lat: f64) -> String {
    format!(
        "{:.*}\u{00b0} {}",
        DISPLAY_DECIMALS,
        lat.abs(),
        hemisphere(lat, 'N', 'S')
    )
}

/// Format a longitude as e.g. `74.0060° W`.
pub fn format_lng(lng: f64) -> String {
    format!(
        "{:.*}\u{00b0} {}",
        DISPLAY_DECIMALS,
        lng.abs(),
        hemisphere(lng, 'E', 'W')
    )
}

pub fn format_lat_lng(p: LatLng) -> String {
    format!("{}, {}", format_lat(p.lat), format_lng(p.lng))
}

pub fn category_label(category: LocationCategory) -> &'static str {
    match category {
        LocationCategory::Mine => "Mine hazard",
        LocationCategory::EmergencyAssembly => "Emergency assembly",
        LocationCategory::EvacuationCenter => "Evacuation center",
    }
}

/// Path of the deep link that re-runs a submission for `p`.
pub fn focus_path(p: LatLng) -> String {
    format!("/at/{:.*}/{:.*}", LINK_DECIMALS, p.lat, LINK_DECIMALS, p.lng)
}

/// Build a shareable link from the page origin.
pub fn build_share_url(origin: &str, p: LatLng) -> String {
    format!("{}{}", origin.trim_end_matches('/'), focus_path(p))
}

/// Current page origin, if running in a browser.
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
