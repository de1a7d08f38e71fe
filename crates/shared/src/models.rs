use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }

    /// Point at fraction `t_lat` / `t_lng` of the way from `self` to `other`,
    /// interpolating each axis independently.
    pub fn lerp(self, other: LatLng, t_lat: f64, t_lng: f64) -> LatLng {
        LatLng {
            lat: self.lat + (other.lat - self.lat) * t_lat,
            lng: self.lng + (other.lng - self.lng) * t_lng,
        }
    }

    /// `[lat, lng]` pair in the order Leaflet expects.
    pub fn to_array(self) -> [f64; 2] {
        [self.lat, self.lng]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Safe = 0,
    Medium = 1,
    High = 2,
    Mine = 3,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Safe,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Mine,
    ];
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Safe => write!(f, "safe"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Mine => write!(f, "mine"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationCategory {
    Mine,
    EmergencyAssembly,
    EvacuationCenter,
}

impl LocationCategory {
    pub fn is_safe_zone(self) -> bool {
        !matches!(self, LocationCategory::Mine)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u64,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub risk: RiskLevel,
    pub category: LocationCategory,
}

impl Location {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// The two fixed route labels. The token form (`"fastest"` / `"safest"`) is
/// what the selection state stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    #[default]
    Fastest = 0,
    Safest = 1,
}

impl RouteKind {
    pub const ALL: [RouteKind; 2] = [RouteKind::Fastest, RouteKind::Safest];

    /// Profile assigned to the `index`-th safe zone: the first one gets the
    /// fastest route, every later one the safest.
    pub fn for_index(index: usize) -> Self {
        if index == 0 {
            RouteKind::Fastest
        } else {
            RouteKind::Safest
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            RouteKind::Fastest => "fastest",
            RouteKind::Safest => "safest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RouteKind::Fastest => "Fastest Route",
            RouteKind::Safest => "Safest Route",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        RouteKind::ALL.into_iter().find(|k| k.token() == token)
    }
}

impl std::fmt::Display for RouteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub kind: RouteKind,
    pub name: String,
    pub duration: String,
    pub distance: String,
    pub risk: String,
    pub coordinates: Vec<LatLng>,
    pub color: String,
}

impl Route {
    pub fn origin(&self) -> Option<LatLng> {
        self.coordinates.first().copied()
    }

    pub fn destination(&self) -> Option<LatLng> {
        self.coordinates.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = LatLng::new(10.0, 20.0);
        let b = LatLng::new(12.0, 24.0);
        assert_eq!(a.lerp(b, 0.0, 0.0), a);
        assert_eq!(a.lerp(b, 1.0, 1.0), b);
    }

    #[test]
    fn test_lerp_axes_are_independent() {
        let a = LatLng::new(0.0, 0.0);
        let b = LatLng::new(10.0, 10.0);
        let p = a.lerp(b, 0.3, 0.4);
        assert!((p.lat - 3.0).abs() < 1e-9);
        assert!((p.lng - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_route_kind_tokens_round_trip() {
        for kind in RouteKind::ALL {
            assert_eq!(RouteKind::from_token(kind.token()), Some(kind));
        }
        assert_eq!(RouteKind::from_token("scenic"), None);
    }

    #[test]
    fn test_route_kind_for_index() {
        assert_eq!(RouteKind::for_index(0), RouteKind::Fastest);
        assert_eq!(RouteKind::for_index(1), RouteKind::Safest);
        assert_eq!(RouteKind::for_index(5), RouteKind::Safest);
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&LocationCategory::EmergencyAssembly).unwrap();
        assert_eq!(json, r#""emergency_assembly""#);
        let json = serde_json::to_string(&RiskLevel::Mine).unwrap();
        assert_eq!(json, r#""mine""#);
    }

    #[test]
    fn test_safe_zone_categories() {
        assert!(!LocationCategory::Mine.is_safe_zone());
        assert!(LocationCategory::EmergencyAssembly.is_safe_zone());
        assert!(LocationCategory::EvacuationCenter.is_safe_zone());
    }
}
