pub mod use_loader;
pub mod use_mobile_menu;
pub mod use_page_effects;
pub mod use_scrolled_past;
pub mod use_services_state;
