use dioxus::prelude::*;
use safepath_shared::models::{Route, RouteKind};

use crate::components::panel::CollapsiblePanel;

#[component]
pub fn RoutePanel(
    routes: Vec<Route>,
    selected: RouteKind,
    on_select: EventHandler<RouteKind>,
) -> Element {
    rsx! {
        CollapsiblePanel { title: "Evacuation Routes".to_string(),
            if routes.is_empty() {
                p { class: "dim", "No routes generated." }
            }
            for route in routes.iter() {
                {
                    let kind = route.kind;
                    let cls = if kind == selected { "route-card selected" } else { "route-card" };
                    rsx! {
                        div {
                            key: "{kind.token()}",
                            class: "{cls}",
                            style: "border-left-color: {route.color};",
                            onclick: move |_| on_select.call(kind),
                            div { class: "route-title",
                                span { class: "swatch", style: "background: {route.color};" }
                                h4 { "{route.name}" }
                            }
                            div { class: "route-meta",
                                span { "\u{23f1} {route.duration}" }
                                span { "\u{2194} {route.distance}" }
                            }
                            p { class: "route-risk", "Risk: {route.risk}" }
                        }
                    }
                }
            }
        }
    }
}
