use dioxus::prelude::*;
use tracing::error;

use crate::components::effects::smooth_scroll_to;
use crate::config::PageConfig;
use crate::hooks::use_mobile_menu::MobileMenu;

const DEFAULT_CLASS: &str = "hover:text-emerald-400 transition-colors";

/// In-page anchor that smooth-scrolls instead of jumping.
#[component]
pub fn NavLink(
    #[props(into)] href: String,
    #[props(into)] label: String,
    #[props(default, into)] class: String,
) -> Element {
    let config = use_context::<PageConfig>();
    let mut menu = use_context::<MobileMenu>();
    let target = href.clone();
    let link_class = if class.is_empty() { DEFAULT_CLASS.to_string() } else { class.clone() };

    rsx! {
        a {
            href: "{href}",
            class: "{link_class}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                if let Err(e) = smooth_scroll_to(&target, &config.highlight_anchor) {
                    error!("Smooth scroll to '{}' failed: {}", target, e);
                }
                menu.close();
            },
            "{label}"
        }
    }
}
