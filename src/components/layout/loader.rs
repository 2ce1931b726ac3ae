use dioxus::prelude::*;

use crate::hooks::use_loader::use_loader;

#[component]
pub fn Loader() -> Element {
    let phase = use_loader();

    if phase().is_removed() {
        return rsx! {};
    }
    let opacity = phase().opacity();

    rsx! {
        div {
            id: "loader",
            class: "fixed inset-0 z-50 flex items-center justify-center bg-slate-950 transition-opacity duration-500",
            style: "opacity: {opacity};",
            div { class: "w-16 h-16 border-4 border-emerald-400 border-t-transparent rounded-full animate-spin" }
        }
    }
}
