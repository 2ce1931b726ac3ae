use dioxus::prelude::*;
use tracing::error;

use crate::components::effects::scroll_to_top;
use crate::config::PageConfig;
use crate::hooks::use_scrolled_past::use_scrolled_past;

#[component]
pub fn ScrollToTop() -> Element {
    let config = use_context::<PageConfig>();
    let visible = use_scrolled_past(config.scroll_top_threshold);

    rsx! {
        button {
            class: "fixed bottom-8 right-8 z-40 gradient-bg pulse-on-hover w-12 h-12 rounded-full transition-opacity",
            style: if visible() {
                "opacity: 1; pointer-events: auto;"
            } else {
                "opacity: 0; pointer-events: none;"
            },
            title: "Back to top",
            onclick: move |_| {
                if let Err(e) = scroll_to_top() {
                    error!("Scroll to top failed: {}", e);
                }
            },
            "↑"
        }
    }
}
