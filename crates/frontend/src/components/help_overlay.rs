use dioxus::prelude::*;
use safepath_shared::models::{RiskLevel, RouteKind};
use safepath_shared::style;

#[component]
pub fn HelpOverlay(show: Signal<bool>) -> Element {
    if !*show.read() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "help-overlay-backdrop",
            onclick: move |_| show.set(false),

            div {
                class: "help-overlay",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                h2 { "Help" }

                // --- Legend ---

                div { class: "shortcut-section",
                    h3 { "Markers" }
                    for risk in RiskLevel::ALL {
                        {
                            let s = style::marker_style(risk);
                            rsx! {
                                div { class: "shortcut-row",
                                    span { class: "badge", style: "background: {s.color};", "{s.glyph}" }
                                    span { "{s.label}" }
                                }
                            }
                        }
                    }
                }

                div { class: "shortcut-section",
                    h3 { "Routes" }
                    for kind in RouteKind::ALL {
                        {
                            let p = style::route_profile(kind);
                            rsx! {
                                div { class: "shortcut-row",
                                    span { class: "swatch", style: "background: {p.color};" }
                                    span { "{kind.label()}" }
                                }
                            }
                        }
                    }
                }

                // --- Keyboard shortcuts ---

                div { class: "shortcut-section",
                    h3 { "Keyboard" }
                    div { class: "shortcut-row",
                        span { class: "shortcut-keys", kbd { "F" } }
                        span { "Show fastest route" }
                    }
                    div { class: "shortcut-row",
                        span { class: "shortcut-keys", kbd { "S" } }
                        span { "Show safest route" }
                    }
                    div { class: "shortcut-row",
                        span { class: "shortcut-keys", kbd { "H" } " / " kbd { "?" } }
                        span { "Toggle this help" }
                    }
                    div { class: "shortcut-row",
                        span { class: "shortcut-keys", kbd { "Esc" } }
                        span { "Close help" }
                    }
                }

                div { class: "help-divider" }

                h2 { class: "help-section-title", "About the Data" }

                div { class: "help-info-section",
                    p { "Every scan is simulated. The hazard and both safe zones are placed at random offsets around the coordinates you enter, and route distance, duration and risk are illustrative only. Do not use this map for real navigation." }
                }

                button {
                    class: "close-help",
                    onclick: move |_| show.set(false),
                    "Close"
                }
            }
        }
    }
}
