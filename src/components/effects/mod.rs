pub mod gsap_bindings;
pub mod smooth_scroll;

pub use gsap_bindings::{flash_section, init_page_effects, page_effects_ready};
pub use smooth_scroll::{scroll_to_top, smooth_scroll_to};
