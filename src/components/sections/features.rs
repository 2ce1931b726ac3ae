use dioxus::prelude::*;

const FEATURES: [(&str, &str, &str); 3] = [
    ("⚡", "Instant Answers", "Practical guidance on common conditions, available around the clock."),
    ("🔒", "Private by Default", "Nothing you browse here is stored or shared."),
    ("🌍", "Community Focused", "Advice tailored to local health concerns and seasonal outbreaks."),
];

#[component]
pub fn Features() -> Element {
    rsx! {
        section { id: "features", class: "py-24 px-6",
            div { class: "max-w-7xl mx-auto",
                h2 { class: "text-4xl font-bold text-center mb-12", "Why Use Our Portal" }
                div { class: "grid md:grid-cols-3 gap-8",
                    for (icon, title, text) in FEATURES {
                        div {
                            key: "{title}",
                            class: "feature-card shine-effect bg-white/5 p-8 rounded-2xl border border-white/10",
                            div { class: "text-4xl mb-4", "{icon}" }
                            h3 { class: "text-2xl font-semibold mb-2", "{title}" }
                            p { class: "text-white/70", "{text}" }
                        }
                    }
                }
            }
        }
    }
}
