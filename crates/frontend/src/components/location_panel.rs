use dioxus::prelude::*;
use safepath_shared::models::Location;
use safepath_shared::style;

use crate::components::panel::CollapsiblePanel;
use crate::coords;

#[component]
pub fn LocationPanel(locations: Vec<Location>) -> Element {
    rsx! {
        CollapsiblePanel { title: "Locations".to_string(),
            for loc in locations.iter() {
                {
                    let marker = style::marker_style(loc.risk);
                    rsx! {
                        div { key: "{loc.id}", class: "location-item",
                            span {
                                class: "badge",
                                style: "background: {marker.color};",
                                "{marker.glyph}"
                            }
                            div { class: "location-text",
                                div { class: "location-name", "{loc.name}" }
                                div { class: "dim", "{coords::category_label(loc.category)} \u{00b7} {loc.risk}" }
                                div { class: "coord-info", "{coords::format_lat_lng(loc.position())}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
