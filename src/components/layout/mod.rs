pub mod footer;
pub mod loader;
pub mod page_layout;
pub mod scroll_to_top;

pub use footer::Footer;
pub use loader::Loader;
pub use page_layout::PageLayout;
pub use scroll_to_top::ScrollToTop;
