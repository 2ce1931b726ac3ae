use dioxus::prelude::*;
use tracing::error;

use crate::components::effects::smooth_scroll_to;
use crate::config::PageConfig;

const HERO_IMAGE: Asset = asset!("/assets/hero.svg");

#[component]
pub fn Hero() -> Element {
    let config = use_context::<PageConfig>();
    let anchor = config.highlight_anchor.clone();

    rsx! {
        section { id: "hero", class: "min-h-screen pt-32 px-6 flex items-center",
            div { class: "max-w-7xl mx-auto grid md:grid-cols-2 gap-12 items-center",
                div {
                    h1 { class: "text-5xl md:text-6xl font-bold leading-tight mb-6",
                        "Trusted health guidance, "
                        span { class: "gradient-text", "whenever you need it" }
                    }
                    p { class: "text-xl text-white/70 mb-8",
                        "Check symptoms, keep vaccinations on schedule and know what to do in an emergency."
                    }
                    div { class: "flex flex-wrap gap-4",
                        button {
                            class: "gradient-bg pulse-on-hover px-8 py-4 rounded-xl font-semibold",
                            onclick: move |_| {
                                if let Err(e) = smooth_scroll_to(&anchor, &anchor) {
                                    error!("Scroll to services failed: {}", e);
                                }
                            },
                            "Explore Services"
                        }
                        button {
                            class: "px-8 py-4 rounded-xl font-semibold border border-white/20",
                            onclick: move |_| {
                                if let Err(e) = smooth_scroll_to("#features", "") {
                                    error!("Scroll to features failed: {}", e);
                                }
                            },
                            "Learn More"
                        }
                    }
                }
                img { class: "w-full", src: HERO_IMAGE, alt: "Health portal illustration" }
            }
        }
    }
}
