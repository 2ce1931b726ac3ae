//! Page shell for the services catalog: owns the catalog, the mounted panels
//! and the disclosure controller, and hands them to each other by reference.

use tracing::{info, warn};

use crate::error::PortalResult;
use crate::services::catalog::CatalogStore;
use crate::services::controller::DisclosureController;
use crate::services::fragment::{CardRenderer, CategoryFragment, ItemRenderer};
use crate::services::panel::{CategoryPanel, MountedPanels};
use crate::types::Disclosure;

#[derive(Clone, Debug, PartialEq)]
pub struct ServicesShell<R = CardRenderer> {
    catalog: CatalogStore,
    panels: MountedPanels,
    controller: DisclosureController<R>,
    mounted: bool,
}

impl ServicesShell<CardRenderer> {
    /// Create and mount in one step, as done on page ready.
    pub fn bootstrap(catalog: CatalogStore) -> Self {
        let mut shell = Self::new(catalog, CardRenderer);
        shell.mount();
        shell
    }
}

impl<R: ItemRenderer> ServicesShell<R> {
    /// An unmounted shell; toggles fail until `mount` runs.
    pub fn new(catalog: CatalogStore, renderer: R) -> Self {
        Self {
            catalog,
            panels: MountedPanels::default(),
            controller: DisclosureController::with_renderer(renderer),
            mounted: false,
        }
    }

    /// Mount one collapsed panel per catalog entry, in catalog order.
    ///
    /// Runs once per page load; later calls leave the panels untouched.
    pub fn mount(&mut self) {
        if self.mounted {
            warn!("Services catalog already mounted, ignoring");
            return;
        }

        let fragments = self
            .catalog
            .entries()
            .map(|(_, category)| CategoryFragment::from_category(category));
        self.panels = MountedPanels::from_fragments(fragments);
        self.mounted = true;

        info!("Mounted {} service categories", self.panels.len());
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn toggle(&mut self, key: &str) -> PortalResult<Disclosure> {
        self.controller.toggle(&self.catalog, &mut self.panels, key)
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn controller(&self) -> &DisclosureController<R> {
        &self.controller
    }

    pub fn panels(&self) -> impl Iterator<Item = &CategoryPanel> {
        self.panels.iter()
    }

    pub fn panel(&self, key: &str) -> PortalResult<&CategoryPanel> {
        self.panels.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortalError;
    use crate::services::data::health_services_catalog;

    #[test]
    fn bootstrap_mounts_every_category_collapsed() {
        let shell = ServicesShell::bootstrap(health_services_catalog().unwrap());
        let keys: Vec<&str> = shell.panels().map(CategoryPanel::key).collect();
        assert_eq!(keys, vec!["symptoms", "vaccination", "prevention", "emergency"]);
        assert!(shell.panels().all(|panel| !panel.is_visible() && panel.content().is_empty()));
    }

    #[test]
    fn unmounted_shell_rejects_toggles() {
        let mut shell = ServicesShell::new(health_services_catalog().unwrap(), CardRenderer);
        assert!(!shell.is_mounted());
        assert!(matches!(shell.toggle("symptoms"), Err(PortalError::ElementNotFound(_))));

        shell.mount();
        assert!(shell.is_mounted());
        assert_eq!(shell.toggle("symptoms").unwrap(), Disclosure::Open);
    }

    #[test]
    fn second_mount_keeps_open_panels() {
        let mut shell = ServicesShell::bootstrap(health_services_catalog().unwrap());
        shell.toggle("emergency").unwrap();
        shell.mount();
        assert!(shell.is_mounted());
        assert!(shell.panel("emergency").unwrap().is_visible());
    }
}
