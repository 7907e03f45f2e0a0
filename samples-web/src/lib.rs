//! samples-web - Sample-code gallery web app
//!
//! Hosts the filter bar on a gallery page that owns the filter state and
//! keeps it in the URL.

pub mod demo_data;
pub mod pages;
pub mod url_state;

use dioxus::prelude::*;
use pages::Samples;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:state")]
    Samples { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "page", Router::<Route> {} }
    }
}
