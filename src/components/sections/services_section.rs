use dioxus::prelude::*;

use crate::hooks::use_services_state::ServicesState;
use crate::services::CategoryPanel;

#[component]
pub fn ServicesSection() -> Element {
    let services = use_context::<ServicesState>();
    let panels: Vec<CategoryPanel> = services.shell.read().panels().cloned().collect();

    rsx! {
        section { id: "services", class: "py-24 px-6",
            div { class: "max-w-4xl mx-auto",
                h2 { class: "text-4xl font-bold text-center mb-4", "Health Services" }
                p { class: "text-white/70 text-center mb-12",
                    "Free guidance for everyday health questions. Pick a category to see what is available."
                }
                div { id: "services-container", class: "space-y-6",
                    for panel in panels {
                        {
                            let key = panel.key().to_string();
                            rsx! {
                                crate::components::sections::CategoryCard {
                                    key: "{key}",
                                    panel: panel.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
