use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "py-12 px-6 border-t border-white/10 text-center text-white/50",
            p { "Information on this site is general guidance and does not replace professional medical advice." }
            p { class: "mt-2", "In an emergency, contact your local emergency services immediately." }
        }
    }
}
