use dioxus::prelude::*;

use crate::components::navigation::{MobileMenuPanel, NavLink};
use crate::hooks::use_mobile_menu::MobileMenu;

#[component]
pub fn NavBar() -> Element {
    let mut menu = use_context::<MobileMenu>();
    let icon_path = menu.state.read().icon_path();

    rsx! {
        nav { class: "fixed top-0 inset-x-0 z-40 transition-all",
            div { class: "max-w-7xl mx-auto px-6 py-4 flex justify-between items-center",
                NavLink { href: "#hero", label: "HealthCare+", class: "text-2xl font-bold gradient-text" }
                div { class: "hidden md:flex items-center gap-8",
                    NavLink { href: "#hero", label: "Home" }
                    NavLink { href: "#features", label: "Features" }
                    NavLink { href: "#services", label: "Services" }
                }
                div { class: "md:hidden",
                    button {
                        class: "p-2",
                        onclick: move |evt| menu.toggle(evt),
                        svg {
                            class: "w-6 h-6",
                            fill: "none",
                            view_box: "0 0 24 24",
                            stroke: "currentColor",
                            path {
                                class: "menu-icon",
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                stroke_width: "2",
                                d: icon_path,
                            }
                        }
                    }
                }
            }
            MobileMenuPanel {}
        }
    }
}
