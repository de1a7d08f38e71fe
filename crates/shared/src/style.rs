//! Marker and route styling, keyed by classification.
//!
//! Both tables are indexed by the enum discriminant, so adding a variant means
//! adding a row here and nowhere else.

use crate::models::{RiskLevel, RouteKind};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub glyph: &'static str,
    /// Icon edge length in screen pixels.
    pub size: u16,
    pub label: &'static str,
}

// Order follows the RiskLevel discriminants.
const MARKER_STYLES: [MarkerStyle; 4] = [
    MarkerStyle {
        color: "#16a34a",
        glyph: "\u{2713}",
        size: 28,
        label: "Safe zone",
    },
    MarkerStyle {
        color: "#f59e0b",
        glyph: "!",
        size: 28,
        label: "Medium risk",
    },
    MarkerStyle {
        color: "#ea580c",
        glyph: "!!",
        size: 30,
        label: "High risk",
    },
    MarkerStyle {
        color: "#dc2626",
        glyph: "\u{2620}",
        size: 34,
        label: "Mine hazard",
    },
];

pub fn marker_style(risk: RiskLevel) -> &'static MarkerStyle {
    &MARKER_STYLES[risk as usize]
}

/// Cosmetic profile of a generated route. Duration is
/// `floor(distance_km * minutes_per_km + base_minutes)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteProfile {
    pub kind: RouteKind,
    pub color: &'static str,
    pub risk: &'static str,
    pub minutes_per_km: f64,
    pub base_minutes: f64,
}

// Order follows the RouteKind discriminants.
const ROUTE_PROFILES: [RouteProfile; 2] = [
    RouteProfile {
        kind: RouteKind::Fastest,
        color: "#2563eb",
        risk: "Moderate - passes close to the hazard perimeter",
        minutes_per_km: 2.0,
        base_minutes: 3.0,
    },
    RouteProfile {
        kind: RouteKind::Safest,
        color: "#16a34a",
        risk: "Low - keeps clear of the hazard perimeter",
        minutes_per_km: 3.0,
        base_minutes: 5.0,
    },
];

pub fn route_profile(kind: RouteKind) -> &'static RouteProfile {
    &ROUTE_PROFILES[kind as usize]
}

pub const ROUTE_LINE_WEIGHT: u8 = 5;
pub const ROUTE_LINE_OPACITY: f64 = 0.8;
