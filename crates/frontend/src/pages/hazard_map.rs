use dioxus::logger::tracing;
use dioxus::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use safepath_shared::config::AppConfig;
use safepath_shared::generator::{RandomSource, RngSource};
use safepath_shared::input::InputError;
use safepath_shared::models::RouteKind;
use safepath_shared::view_state::{ViewEvent, ViewState};

use crate::components::coordinate_input::CoordinateInput;
use crate::components::help_overlay::HelpOverlay;
use crate::components::location_panel::LocationPanel;
use crate::components::map_view::MapView;
use crate::components::route_panel::RoutePanel;
use crate::coords;
use crate::scene;

const CONFIG_JSON: &str = include_str!("../../assets/config.json");

fn load_config() -> AppConfig {
    match AppConfig::from_json(CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "bundled config rejected, using defaults");
            AppConfig::default()
        }
    }
}

/// Unseeded from the user's point of view: every page load draws new data.
fn browser_rng() -> RngSource<SmallRng> {
    let entropy = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let clock = js_sys::Date::now() as u64;
    RngSource(SmallRng::seed_from_u64((entropy << 32) ^ clock))
}

/// View state plus the random source that feeds its transitions.
pub struct Session<R> {
    pub view: ViewState,
    rng: R,
}

impl<R: RandomSource> Session<R> {
    pub fn new(config: &AppConfig, rng: R) -> Self {
        Session {
            view: ViewState::new(&config.map),
            rng,
        }
    }

    /// Apply `event`, committing the next state only on success.
    pub fn dispatch(&mut self, event: &ViewEvent, config: &AppConfig) -> Result<(), InputError> {
        let next = self.view.apply(event, &mut self.rng, config)?;
        self.view = next;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shortcut {
    Select(RouteKind),
    ToggleHelp,
    CloseHelp,
}

pub fn shortcut_for(key: &Key) -> Option<Shortcut> {
    match key {
        Key::Character(c) => match c.to_ascii_lowercase().as_str() {
            "f" => Some(Shortcut::Select(RouteKind::Fastest)),
            "s" => Some(Shortcut::Select(RouteKind::Safest)),
            "h" | "?" => Some(Shortcut::ToggleHelp),
            _ => None,
        },
        Key::Escape => Some(Shortcut::CloseHelp),
        _ => None,
    }
}

/// Help overlay visibility after `shortcut`, given whether it is open now.
pub fn help_after(shortcut: Shortcut, open: bool) -> bool {
    match shortcut {
        Shortcut::ToggleHelp => !open,
        Shortcut::CloseHelp => false,
        Shortcut::Select(_) => open,
    }
}

/// Blocking notice for rejected input.
fn reject(err: &InputError) {
    tracing::warn!(error = %err, "rejected coordinate input");
    if let Some(window) = web_sys::window() {
        window.alert_with_message(&err.to_string()).ok();
    }
}

#[component]
pub fn HazardMap(focus: Option<(String, String)>) -> Element {
    let config = use_signal(load_config);

    // Deep links pre-fill the inputs and run one submission on load
    let lat_text = use_signal(|| focus.as_ref().map(|f| f.0.clone()).unwrap_or_default());
    let lng_text = use_signal(|| focus.as_ref().map(|f| f.1.clone()).unwrap_or_default());
    let mut show_help = use_signal(|| false);

    let mut session = use_signal(|| {
        let config = config.peek();
        let mut session = Session::new(&config, browser_rng());
        if let Some((lat, lng)) = &focus {
            let event = ViewEvent::Submit {
                lat: lat.clone(),
                lng: lng.clone(),
            };
            if let Err(e) = session.dispatch(&event, &config) {
                reject(&e);
            }
        }
        session
    });

    let mut dispatch = move |event: ViewEvent| {
        let result = session.write().dispatch(&event, &config.read());
        match result {
            Ok(()) => {
                let s = session.read();
                match event {
                    ViewEvent::Submit { .. } => tracing::info!(
                        lat = s.view.center.lat,
                        lng = s.view.center.lng,
                        locations = s.view.locations.len(),
                        routes = s.view.routes.len(),
                        "generated hazard scenario"
                    ),
                    ViewEvent::SelectRoute(kind) => {
                        tracing::debug!(route = kind.token(), "selected route")
                    }
                }
            }
            Err(e) => reject(&e),
        }
    };

    let scene = use_memo(move || scene::build_scene(&session.read().view, &config.read().map));

    let (show_results, routes, locations, selected, center) = {
        let s = session.read();
        (
            s.view.show_results,
            s.view.routes.clone(),
            s.view.locations.clone(),
            s.view.selected,
            s.view.center,
        )
    };

    let share_url = if show_results {
        coords::page_origin().map(|origin| coords::build_share_url(&origin, center))
    } else {
        None
    };

    rsx! {
        div {
            class: "app",
            tabindex: "0",
            // Text inputs stop propagation, so typing never reaches this
            onkeydown: move |evt: Event<KeyboardData>| {
                let Some(shortcut) = shortcut_for(&evt.key()) else {
                    return;
                };
                if let Shortcut::Select(kind) = shortcut {
                    dispatch(ViewEvent::SelectRoute(kind));
                }
                let open = *show_help.read();
                let next = help_after(shortcut, open);
                if next != open {
                    show_help.set(next);
                }
            },

            // Header
            div { class: "header",
                button {
                    class: "back-button",
                    onclick: move |_| tracing::debug!("back requested; there is no previous view"),
                    "\u{2190} Back"
                }
                h1 { "SafePath Mine Hazard Map" }
                button {
                    class: "help-button",
                    "aria-label": "Help",
                    onclick: move |_| {
                        let cur = *show_help.read();
                        show_help.set(!cur);
                    },
                    "?"
                }
            }

            CoordinateInput {
                lat_text: lat_text,
                lng_text: lng_text,
                share_url: share_url,
                on_submit: move |_| {
                    dispatch(ViewEvent::Submit {
                        lat: lat_text.read().clone(),
                        lng: lng_text.read().clone(),
                    });
                },
            }

            div { class: "main",
                // Sidebar
                if show_results {
                    div { class: "sidebar",
                        RoutePanel {
                            routes: routes,
                            selected: selected,
                            on_select: move |kind: RouteKind| dispatch(ViewEvent::SelectRoute(kind)),
                        }
                        LocationPanel { locations: locations }
                    }
                }

                MapView { scene: scene }
            }

            HelpOverlay { show: show_help }
        }
    }
}
