pub mod catalog;
pub mod controller;
pub mod data;
pub mod fragment;
pub mod panel;
pub mod shell;
pub mod tracker;

pub use catalog::CatalogStore;
pub use controller::DisclosureController;
pub use data::{health_services, health_services_catalog};
pub use fragment::{CardRenderer, CategoryFragment, ItemFragment, ItemRenderer};
pub use panel::{CategoryPanel, MountedPanels};
pub use shell::ServicesShell;
pub use tracker::RenderedSet;
