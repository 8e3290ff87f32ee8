mod assets;
mod components;
mod pages;
mod scheme;
mod surface;

use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/preset/:name")]
    PresetView { name: String },
}

#[component]
fn Home() -> Element {
    rsx! {
        pages::map_page::MapPage { preset: None::<String> }
    }
}

#[component]
fn PresetView(name: String) -> Element {
    rsx! {
        pages::map_page::MapPage { key: "{name}", preset: Some(name.clone()) }
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
