use dioxus::prelude::*;
use tracing::error;

use crate::services::{health_services_catalog, CatalogStore, ServicesShell};
use crate::types::Disclosure;

#[derive(Clone, Copy)]
pub struct ServicesState {
    pub shell: Signal<ServicesShell>,
}

pub fn use_services_state() -> ServicesState {
    let shell = use_signal(|| {
        let catalog = health_services_catalog().unwrap_or_else(|e| {
            error!("Built-in service catalog rejected: {}", e);
            CatalogStore::default()
        });
        ServicesShell::bootstrap(catalog)
    });

    ServicesState { shell }
}

impl ServicesState {
    /// Open or close a category. Failures are logged and leave the page as is.
    pub fn toggle_category(&mut self, key: &str) -> Option<Disclosure> {
        match self.shell.write().toggle(key) {
            Ok(state) => Some(state),
            Err(e) => {
                error!("Failed to toggle category '{}': {}", key, e);
                None
            }
        }
    }
}
