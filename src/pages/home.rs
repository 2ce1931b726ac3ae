use dioxus::prelude::*;
use crate::components::layout::PageLayout;

#[component]
pub fn Home() -> Element {
    rsx! {
        PageLayout {}
    }
}
