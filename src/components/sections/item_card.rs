use dioxus::prelude::*;

use crate::services::ItemFragment;

#[component]
pub fn ItemCard(fragment: ItemFragment) -> Element {
    rsx! {
        div { class: "command-card bg-white/5 p-6 rounded-xl border border-white/10",
            div { class: "flex justify-between items-start",
                div {
                    h4 { class: "text-xl font-semibold mb-2", "{fragment.heading}" }
                    p { class: "text-white/70", "{fragment.body}" }
                }
                span {
                    class: "px-3 py-1 bg-emerald-500/20 text-emerald-400 rounded-lg text-sm",
                    "{fragment.badge}"
                }
            }
        }
    }
}
