//! Synthetic hazard data.
//!
//! Nothing here models real terrain or travel. Every point is the submitted
//! center moved by a fixed bias plus uniform noise, and every route is two
//! jittered interpolation points between a hazard and a safe zone.

use crate::config::{GeneratorConfig, Offset};
use crate::models::{LatLng, Location, LocationCategory, RiskLevel, Route, RouteKind};
use crate::style;

/// Interpolation fractions (lat, lng) of the two interior route points.
const CONTROL_POINT_1: (f64, f64) = (0.3, 0.4);
const CONTROL_POINT_2: (f64, f64) = (0.7, 0.6);

/// Source of uniform samples. The UI uses a seeded `rand` generator; tests
/// replay fixed sequences.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform sample in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_unit()
    }

    /// Uniform sample in `[-spread, +spread)`.
    fn symmetric(&mut self, spread: f64) -> f64 {
        (self.next_unit() - 0.5) * 2.0 * spread
    }
}

/// Adapts any `rand` generator.
pub struct RngSource<R>(pub R);

impl<R: rand::Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed list of unit samples, wrapping around at the end.
/// Test-only; enable the `test-util` feature to use it from another crate.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(any(test, feature = "test-util"))]
impl ScriptedSource {
    /// Panics if `values` is empty or holds a sample outside `[0, 1)`.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "scripted samples must lie in [0, 1)"
        );
        ScriptedSource { values, cursor: 0 }
    }

    pub fn constant(value: f64) -> Self {
        ScriptedSource::new(vec![value])
    }

    /// Number of samples drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

#[cfg(any(test, feature = "test-util"))]
impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

fn displace<R: RandomSource + ?Sized>(center: LatLng, offset: &Offset, rng: &mut R) -> LatLng {
    // Draw order is lat then lng; scripted tests rely on it.
    let lat = center.lat + offset.bias_lat + rng.symmetric(offset.spread_lat);
    let lng = center.lng + offset.bias_lng + rng.symmetric(offset.spread_lng);
    LatLng::new(lat, lng)
}

/// Generate the hazard and the two safe zones around `center`, in that
/// order. `next_id` is advanced once per record.
pub fn generate_locations<R: RandomSource + ?Sized>(
    center: LatLng,
    rng: &mut R,
    config: &GeneratorConfig,
    next_id: &mut u64,
) -> Vec<Location> {
    let specs = [
        (
            &config.hazard,
            "Detected Mine Hazard",
            RiskLevel::Mine,
            LocationCategory::Mine,
        ),
        (
            &config.emergency_assembly,
            "Emergency Assembly Point",
            RiskLevel::Safe,
            LocationCategory::EmergencyAssembly,
        ),
        (
            &config.evacuation_center,
            "Evacuation Center",
            RiskLevel::Safe,
            LocationCategory::EvacuationCenter,
        ),
    ];

    specs
        .into_iter()
        .map(|(offset, name, risk, category)| {
            let pos = displace(center, offset, rng);
            *next_id += 1;
            Location {
                id: *next_id,
                lat: pos.lat,
                lng: pos.lng,
                name: name.to_string(),
                risk,
                category,
            }
        })
        .collect()
}

fn jittered<R: RandomSource + ?Sized>(p: LatLng, jitter: f64, rng: &mut R) -> LatLng {
    let lat = p.lat + rng.symmetric(jitter);
    let lng = p.lng + rng.symmetric(jitter);
    LatLng::new(lat, lng)
}

fn build_route<R: RandomSource + ?Sized>(
    kind: RouteKind,
    from: LatLng,
    to: LatLng,
    rng: &mut R,
    config: &GeneratorConfig,
) -> Route {
    let profile = style::route_profile(kind);
    let (lo, hi) = config.distance_km;
    let distance_km = rng.uniform(lo, hi);
    let minutes = (distance_km * profile.minutes_per_km + profile.base_minutes).floor();

    let cp1 = jittered(
        from.lerp(to, CONTROL_POINT_1.0, CONTROL_POINT_1.1),
        config.route_jitter,
        rng,
    );
    let cp2 = jittered(
        from.lerp(to, CONTROL_POINT_2.0, CONTROL_POINT_2.1),
        config.route_jitter,
        rng,
    );

    Route {
        kind,
        name: kind.label().to_string(),
        duration: format!("{} min", minutes as u32),
        distance: format!("{:.1} km", distance_km),
        risk: profile.risk.to_string(),
        coordinates: vec![from, cp1, cp2, to],
        color: profile.color.to_string(),
    }
}

/// One route from `hazard` to each safe zone, order-preserving. The first
/// safe zone gets the fastest profile, the rest the safest.
pub fn generate_routes<'a, R, I>(
    hazard: &Location,
    safe_zones: I,
    rng: &mut R,
    config: &GeneratorConfig,
) -> Vec<Route>
where
    R: RandomSource + ?Sized,
    I: IntoIterator<Item = &'a Location>,
{
    safe_zones
        .into_iter()
        .enumerate()
        .map(|(i, zone)| {
            build_route(
                RouteKind::for_index(i),
                hazard.position(),
                zone.position(),
                rng,
                config,
            )
        })
        .collect()
}

/// Full generation cycle: locations around `center`, then routes from the
/// first hazard-tagged record to every safe-tagged one.
pub fn generate_scenario<R: RandomSource + ?Sized>(
    center: LatLng,
    rng: &mut R,
    config: &GeneratorConfig,
    next_id: &mut u64,
) -> (Vec<Location>, Vec<Route>) {
    let locations = generate_locations(center, rng, config, next_id);
    let routes = match locations.iter().find(|l| l.risk == RiskLevel::Mine) {
        Some(hazard) => generate_routes(
            hazard,
            locations.iter().filter(|l| l.risk == RiskLevel::Safe),
            rng,
            config,
        ),
        None => Vec::new(),
    };
    (locations, routes)
}
