use dioxus::prelude::*;

use crate::hooks::use_mobile_menu::use_mobile_menu;
use crate::hooks::use_page_effects::use_page_effects;
use crate::hooks::use_services_state::use_services_state;

#[component]
pub fn PageLayout() -> Element {
    let services = use_services_state();
    use_context_provider(|| services);
    let mut menu = use_mobile_menu();
    use_context_provider(|| menu);

    use_page_effects();

    rsx! {
        div {
            class: "min-h-screen bg-slate-950 text-white",
            onclick: move |_| menu.close_from_outside(),
            crate::components::layout::Loader {}
            crate::components::navigation::NavBar {}
            main {
                crate::components::sections::Hero {}
                crate::components::sections::Features {}
                crate::components::sections::ServicesSection {}
            }
            crate::components::layout::Footer {}
            crate::components::layout::ScrollToTop {}
        }
    }
}
