use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::LatLng;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level application configuration. Every field has a default so a JSON
/// document only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub map: MapConfig,
    pub generator: GeneratorConfig,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let (lo, hi) = self.generator.distance_km;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(ConfigError::Invalid(format!(
                "distanceKm must be an increasing pair, got [{lo}, {hi}]"
            )));
        }
        if self.map.focus_zoom > self.map.max_zoom || self.map.initial_zoom > self.map.max_zoom {
            return Err(ConfigError::Invalid(format!(
                "zoom levels must not exceed maxZoom ({})",
                self.map.max_zoom
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    /// Leaflet tile URL template (`{s}`, `{z}`, `{x}`, `{y}` placeholders).
    pub tile_url: String,
    pub attribution: String,
    pub max_zoom: u8,
    pub initial_center: LatLng,
    pub initial_zoom: u8,
    /// Zoom applied when the viewport recenters on a submitted point.
    pub focus_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution:
                "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                    .to_string(),
            max_zoom: 19,
            initial_center: LatLng::new(20.0, 0.0),
            initial_zoom: 3,
            focus_zoom: 15,
        }
    }
}

/// Placement of a generated point relative to the submitted center: a fixed
/// bias plus a uniform offset in `[-spread, +spread]` on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offset {
    pub spread_lat: f64,
    pub spread_lng: f64,
    pub bias_lat: f64,
    pub bias_lng: f64,
}

impl Offset {
    pub const fn uniform(spread: f64, bias_lat: f64, bias_lng: f64) -> Self {
        Offset {
            spread_lat: spread,
            spread_lng: spread,
            bias_lat,
            bias_lng,
        }
    }
}

/// Every field, including each offset axis, can be overridden on its own;
/// anything left out keeps the value from [`GeneratorConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "GeneratorOverrides", rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub hazard: Offset,
    pub emergency_assembly: Offset,
    pub evacuation_center: Offset,
    /// Per-axis jitter applied to each interior route control point.
    pub route_jitter: f64,
    /// Half-open range `[lo, hi)` the cosmetic route distance is drawn from.
    pub distance_km: (f64, f64),
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            hazard: Offset::uniform(0.005, 0.0, 0.0),
            emergency_assembly: Offset::uniform(0.0125, 0.015, 0.018),
            evacuation_center: Offset::uniform(0.015, -0.012, 0.015),
            route_jitter: 0.001,
            distance_km: (1.0, 3.0),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct OffsetOverrides {
    spread_lat: Option<f64>,
    spread_lng: Option<f64>,
    bias_lat: Option<f64>,
    bias_lng: Option<f64>,
}

impl OffsetOverrides {
    fn over(self, base: Offset) -> Offset {
        Offset {
            spread_lat: self.spread_lat.unwrap_or(base.spread_lat),
            spread_lng: self.spread_lng.unwrap_or(base.spread_lng),
            bias_lat: self.bias_lat.unwrap_or(base.bias_lat),
            bias_lng: self.bias_lng.unwrap_or(base.bias_lng),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GeneratorOverrides {
    hazard: OffsetOverrides,
    emergency_assembly: OffsetOverrides,
    evacuation_center: OffsetOverrides,
    route_jitter: Option<f64>,
    distance_km: Option<(f64, f64)>,
}

impl From<GeneratorOverrides> for GeneratorConfig {
    fn from(o: GeneratorOverrides) -> Self {
        let base = GeneratorConfig::default();
        GeneratorConfig {
            hazard: o.hazard.over(base.hazard),
            emergency_assembly: o.emergency_assembly.over(base.emergency_assembly),
            evacuation_center: o.evacuation_center.over(base.evacuation_center),
            route_jitter: o.route_jitter.unwrap_or(base.route_jitter),
            distance_km: o.distance_km.unwrap_or(base.distance_km),
        }
    }
}
