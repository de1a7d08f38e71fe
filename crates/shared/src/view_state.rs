use crate::config::{AppConfig, MapConfig};
use crate::generator::{self, RandomSource};
use crate::input::{self, InputError};
use crate::models::{LatLng, Location, RiskLevel, Route, RouteKind};

/// Discrete user actions that change the session state.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Submit { lat: String, lng: String },
    SelectRoute(RouteKind),
}

/// Session-local state behind the map page. Transitions never mutate in
/// place; `apply` returns the next state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub center: LatLng,
    pub zoom: u8,
    pub locations: Vec<Location>,
    pub routes: Vec<Route>,
    pub selected: RouteKind,
    /// Gates the route and location panels.
    pub show_results: bool,
    /// Successful submissions so far. The map recenters whenever it changes,
    /// even if the submitted point is the same as before.
    pub submissions: u64,
    next_id: u64,
}

impl ViewState {
    pub fn new(map: &MapConfig) -> Self {
        ViewState {
            center: map.initial_center,
            zoom: map.initial_zoom,
            locations: Vec::new(),
            routes: Vec::new(),
            selected: RouteKind::default(),
            show_results: false,
            submissions: 0,
            next_id: 0,
        }
    }

    pub fn apply<R: RandomSource + ?Sized>(
        &self,
        event: &ViewEvent,
        rng: &mut R,
        config: &AppConfig,
    ) -> Result<ViewState, InputError> {
        match event {
            ViewEvent::Submit { lat, lng } => self.submit(lat, lng, rng, config),
            ViewEvent::SelectRoute(kind) => Ok(self.select_route(*kind)),
        }
    }

    /// Validate, regenerate everything around the submitted point and focus
    /// the viewport on it. On error `self` is left as it was.
    pub fn submit<R: RandomSource + ?Sized>(
        &self,
        lat_text: &str,
        lng_text: &str,
        rng: &mut R,
        config: &AppConfig,
    ) -> Result<ViewState, InputError> {
        let center = input::parse_coordinates(lat_text, lng_text)?;

        let mut next_id = self.next_id;
        let (locations, routes) =
            generator::generate_scenario(center, rng, &config.generator, &mut next_id);

        Ok(ViewState {
            center,
            zoom: config.map.focus_zoom,
            locations,
            routes,
            selected: self.selected,
            show_results: true,
            submissions: self.submissions + 1,
            next_id,
        })
    }

    pub fn select_route(&self, kind: RouteKind) -> ViewState {
        ViewState {
            selected: kind,
            ..self.clone()
        }
    }

    pub fn hazard(&self) -> Option<&Location> {
        self.locations.iter().find(|l| l.risk == RiskLevel::Mine)
    }

    pub fn safe_zones(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(|l| l.risk == RiskLevel::Safe)
    }

    /// Route whose display name matches `kind`'s label.
    pub fn route(&self, kind: RouteKind) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == kind.label())
    }

    pub fn selected_route(&self) -> Option<&Route> {
        self.route(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{RngSource, ScriptedSource};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn initial() -> (ViewState, AppConfig) {
        let config = AppConfig::default();
        (ViewState::new(&config.map), config)
    }

    fn submit(lat: &str, lng: &str) -> ViewEvent {
        ViewEvent::Submit {
            lat: lat.to_string(),
            lng: lng.to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let (state, config) = initial();
        assert_eq!(state.center, config.map.initial_center);
        assert_eq!(state.zoom, config.map.initial_zoom);
        assert!(state.locations.is_empty());
        assert!(state.routes.is_empty());
        assert_eq!(state.selected, RouteKind::Fastest);
        assert!(!state.show_results);
        assert!(state.selected_route().is_none());
    }

    #[test]
    fn test_submit_scenario_new_york() {
        let (state, config) = initial();
        let mut rng = RngSource(SmallRng::seed_from_u64(40));
        let next = state.apply(&submit("40.0", "-74.0"), &mut rng, &config).unwrap();

        assert_eq!(next.locations.len(), 3);
        assert_eq!(next.routes.len(), 2);
        assert_eq!(next.center, LatLng::new(40.0, -74.0));
        assert_eq!(next.zoom, 15);
        assert!(next.show_results);

        let mines: Vec<_> = next
            .locations
            .iter()
            .filter(|l| l.risk == RiskLevel::Mine)
            .collect();
        assert_eq!(mines.len(), 1);
        assert!((mines[0].lat - 40.0).abs() <= 0.005);
        assert!((mines[0].lng + 74.0).abs() <= 0.005);
        assert_eq!(next.safe_zones().count(), 2);
    }

    #[test]
    fn test_submit_invalid_leaves_state_untouched() {
        let (state, config) = initial();
        let mut rng = ScriptedSource::constant(0.5);
        let err = state.apply(&submit("abc", "-74.0"), &mut rng, &config).unwrap_err();
        assert!(matches!(err, InputError::NotANumber { .. }));
        // No generation happened
        assert_eq!(rng.draws(), 0);
        assert_eq!(state, ViewState::new(&config.map));
    }

    #[test]
    fn test_invalid_submit_after_valid_keeps_previous_results() {
        let (state, config) = initial();
        let mut rng = RngSource(SmallRng::seed_from_u64(1));
        let first = state.submit("10", "20", &mut rng, &config).unwrap();
        assert!(first.submit("10", "north", &mut rng, &config).is_err());
        // `first` is a value; the failed transition produced nothing to commit
        assert_eq!(first.center, LatLng::new(10.0, 20.0));
        assert_eq!(first.locations.len(), 3);
    }

    #[test]
    fn test_out_of_range_submit_rejected() {
        let (state, config) = initial();
        let mut rng = ScriptedSource::constant(0.5);
        let err = state.submit("95", "0", &mut rng, &config).unwrap_err();
        assert_eq!(err, InputError::LatitudeOutOfRange(95.0));
    }

    #[test]
    fn test_resubmit_replaces_everything() {
        let (state, config) = initial();
        let mut rng = RngSource(SmallRng::seed_from_u64(2));
        let first = state.submit("10", "20", &mut rng, &config).unwrap();
        let second = first.submit("-33.9", "151.2", &mut rng, &config).unwrap();

        assert_eq!(second.locations.len(), 3);
        assert_eq!(second.routes.len(), 2);
        assert!((second.hazard().unwrap().lat + 33.9).abs() <= 0.005 + 1e-9);

        let first_ids: Vec<u64> = first.locations.iter().map(|l| l.id).collect();
        assert!(second.locations.iter().all(|l| !first_ids.contains(&l.id)));
    }

    #[test]
    fn test_routes_connect_hazard_to_safe_zones() {
        let (state, config) = initial();
        let mut rng = RngSource(SmallRng::seed_from_u64(3));
        let next = state.submit("51.5", "-0.12", &mut rng, &config).unwrap();

        let hazard = next.hazard().unwrap().position();
        let zones: Vec<LatLng> = next.safe_zones().map(|l| l.position()).collect();
        for (route, zone) in next.routes.iter().zip(zones) {
            assert_eq!(route.coordinates.len(), 4);
            assert_eq!(route.origin(), Some(hazard));
            assert_eq!(route.destination(), Some(zone));
        }
    }

    #[test]
    fn test_select_route_resolves_by_name() {
        let (state, config) = initial();
        let mut rng = RngSource(SmallRng::seed_from_u64(4));
        let next = state.submit("0", "0", &mut rng, &config).unwrap();

        let fastest = next.apply(&ViewEvent::SelectRoute(RouteKind::Fastest), &mut rng, &config).unwrap();
        assert_eq!(fastest.selected_route().unwrap().name, "Fastest Route");

        let safest = next.apply(&ViewEvent::SelectRoute(RouteKind::Safest), &mut rng, &config).unwrap();
        assert_eq!(safest.selected_route().unwrap().name, "Safest Route");
    }

    #[test]
    fn test_select_route_does_not_regenerate() {
        let (state, config) = initial();
        let mut rng = RngSource(SmallRng::seed_from_u64(5));
        let next = state.submit("0", "0", &mut rng, &config).unwrap();

        let mut counting = ScriptedSource::constant(0.5);
        let selected = next
            .apply(&ViewEvent::SelectRoute(RouteKind::Safest), &mut counting, &config)
            .unwrap();
        assert_eq!(counting.draws(), 0);
        assert_eq!(selected.locations, next.locations);
        assert_eq!(selected.routes, next.routes);
        assert_eq!(selected.center, next.center);
    }

    #[test]
    fn test_same_point_resubmit_counts_as_new_submission() {
        let (state, config) = initial();
        let mut rng = RngSource(SmallRng::seed_from_u64(7));
        let first = state.submit("40.0", "-74.0", &mut rng, &config).unwrap();
        let second = first.submit("40.0", "-74.0", &mut rng, &config).unwrap();
        assert_eq!(state.submissions, 0);
        assert_eq!(first.submissions, 1);
        assert_eq!(second.submissions, 2);
        assert_eq!(first.center, second.center);

        let selected = second.select_route(RouteKind::Safest);
        assert_eq!(selected.submissions, 2);
        assert!(second.submit("abc", "0", &mut rng, &config).is_err());
    }

    #[test]
    fn test_selection_survives_resubmit() {
        let (state, config) = initial();
        let mut rng = RngSource(SmallRng::seed_from_u64(6));
        let safest = state
            .select_route(RouteKind::Safest)
            .submit("1", "1", &mut rng, &config)
            .unwrap();
        assert_eq!(safest.selected, RouteKind::Safest);
        assert_eq!(safest.selected_route().unwrap().kind, RouteKind::Safest);
    }

    #[test]
    fn test_selection_before_any_submit_resolves_to_nothing() {
        let (state, _) = initial();
        assert!(state.select_route(RouteKind::Safest).selected_route().is_none());
    }

    #[test]
    fn test_focus_zoom_comes_from_config() {
        let mut config = AppConfig::default();
        config.map.focus_zoom = 12;
        let state = ViewState::new(&config.map);
        let next = state
            .submit("1", "1", &mut ScriptedSource::constant(0.25), &config)
            .unwrap();
        assert_eq!(next.zoom, 12);
    }
}
