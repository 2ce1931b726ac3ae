use dioxus::prelude::*;

use crate::hooks::use_services_state::ServicesState;
use crate::services::CategoryPanel;

#[component]
pub fn CategoryCard(panel: CategoryPanel) -> Element {
    let mut services = use_context::<ServicesState>();
    let key = panel.key().to_string();
    let header = panel.header().clone();
    let indicator_class = panel.indicator_class();
    let content_class = panel.content_class();

    rsx! {
        div { class: "bg-white/5 rounded-2xl border border-white/10",
            button {
                class: "w-full px-8 py-6 flex justify-between items-center text-2xl font-semibold",
                onclick: move |_| {
                    services.toggle_category(&key);
                },
                div { class: "flex items-center gap-4",
                    div { class: "w-10 h-10 gradient-bg rounded-lg flex items-center justify-center",
                        "{header.icon}"
                    }
                    span { "{header.title}" }
                }
                svg {
                    class: "{indicator_class}",
                    fill: "none",
                    view_box: "0 0 24 24",
                    stroke: "currentColor",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M19 9l-7 7-7-7",
                    }
                }
            }
            div { class: "{content_class}",
                for (idx, fragment) in panel.content().iter().enumerate() {
                    crate::components::sections::ItemCard {
                        key: "{idx}",
                        fragment: fragment.clone(),
                    }
                }
            }
        }
    }
}
