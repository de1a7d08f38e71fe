mod components;
mod coords;
mod leaflet;
mod pages;
mod scene;

use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/at/:lat/:lng")]
    Focus { lat: String, lng: String },
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::hazard_map::HazardMap { focus: None::<(String, String)> }
    }
}

#[component]
fn Focus(lat: String, lng: String) -> Element {
    rsx! {
        pages::hazard_map::HazardMap { focus: Some((lat, lng)) }
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}
