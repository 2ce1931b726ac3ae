use dioxus::prelude::*;

use crate::components::navigation::NavLink;
use crate::hooks::use_mobile_menu::MobileMenu;

const MOBILE_LINK_CLASS: &str = "block py-2 text-lg hover:text-emerald-400 transition-colors";

#[component]
pub fn MobileMenuPanel() -> Element {
    let menu = use_context::<MobileMenu>();
    let state = *menu.state.read();

    rsx! {
        div {
            id: "mobileMenu",
            class: "{state.menu_class()}",
            // Clicks inside the menu never count as outside clicks
            onclick: move |evt: MouseEvent| evt.stop_propagation(),
            NavLink { href: "#hero", label: "Home", class: MOBILE_LINK_CLASS }
            NavLink { href: "#features", label: "Features", class: MOBILE_LINK_CLASS }
            NavLink { href: "#services", label: "Services", class: MOBILE_LINK_CLASS }
        }
    }
}
