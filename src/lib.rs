//! Health Portal - a single-page health services catalog built with Dioxus
//!
//! The services catalog is rendered lazily: each category's items are built
//! the first time the category is opened and reused on every later toggle.
//!
//! ## Example
//! ```rust
//! use health_portal::services::{health_services_catalog, ServicesShell};
//!
//! let mut shell = ServicesShell::bootstrap(health_services_catalog().unwrap());
//! assert!(shell.toggle("symptoms").unwrap().is_open());
//! assert_eq!(shell.panel("symptoms").unwrap().content().len(), 3);
//! ```

use dioxus::prelude::*;

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod services;
pub mod types;

use pages::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

// GSAP timelines, bound from components::effects::gsap_bindings
static PAGE_EFFECTS: &str = include_str!("page_effects.js");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Script { src: "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.5/gsap.min.js" }
        document::Script { src: "https://cdnjs.cloudflare.com/ajax/libs/gsap/3.12.5/ScrollTrigger.min.js" }
        script { {PAGE_EFFECTS} }

        Router::<Route> {}
    }
}
