//! Category disclosure: lazy, render-once expansion of catalog categories.

use tracing::debug;

use crate::error::PortalResult;
use crate::services::catalog::CatalogStore;
use crate::services::fragment::{CardRenderer, ItemFragment, ItemRenderer};
use crate::services::panel::MountedPanels;
use crate::services::tracker::RenderedSet;
use crate::types::Disclosure;

/// Opens and closes mounted category panels, rendering each category's items
/// the first time it is opened.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisclosureController<R = CardRenderer> {
    rendered: RenderedSet,
    renderer: R,
}

impl DisclosureController<CardRenderer> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: ItemRenderer> DisclosureController<R> {
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            rendered: RenderedSet::new(),
            renderer,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn rendered(&self) -> &RenderedSet {
        &self.rendered
    }

    /// Fragments for every item of `key`, in catalog order.
    pub fn render_category(&self, catalog: &CatalogStore, key: &str) -> PortalResult<Vec<ItemFragment>> {
        let category = catalog.get(key)?;
        Ok(self.renderer.render_items(&category.items))
    }

    /// Flip the disclosure state of `key`, rendering its items on first open.
    ///
    /// The panel is resolved before anything is rendered, so an unmounted page
    /// fails without touching the tracker.
    pub fn toggle(
        &mut self,
        catalog: &CatalogStore,
        panels: &mut MountedPanels,
        key: &str,
    ) -> PortalResult<Disclosure> {
        let panel = panels.get_mut(key)?;

        if !self.rendered.has_rendered(key) {
            let fragments = self.render_category(catalog, key)?;
            debug!("Rendered {} items for category '{}'", fragments.len(), key);
            panel.replace_content(fragments);
            self.rendered.mark_rendered(key);
        }

        panel.flip_visibility();
        panel.flip_indicator();

        let state = Disclosure::from_visible(panel.is_visible());
        debug!("Category '{}' is now {:?}", key, state);
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::PortalError;
    use crate::services::fragment::CategoryFragment;
    use crate::types::{Category, Item};

    #[derive(Default)]
    struct CountingRenderer {
        calls: Cell<usize>,
    }

    impl ItemRenderer for CountingRenderer {
        fn render_item(&self, item: &Item) -> ItemFragment {
            self.calls.set(self.calls.get() + 1);
            CardRenderer.render_item(item)
        }
    }

    fn catalog() -> CatalogStore {
        CatalogStore::new(vec![
            Category::new(
                "symptoms",
                "🩺",
                "Symptom Checker",
                vec![
                    Item::free("Fever & Cold", "fever"),
                    Item::free("Digestive Issues", "stomach"),
                    Item::free("Skin Conditions", "skin"),
                ],
            ),
            Category::new("vaccination", "💉", "Vaccination Schedule", vec![Item::free("Adult Vaccines", "flu")]),
        ])
        .unwrap()
    }

    fn mounted(catalog: &CatalogStore) -> MountedPanels {
        MountedPanels::from_fragments(catalog.entries().map(|(_, c)| CategoryFragment::from_category(c)))
    }

    #[test]
    fn first_toggle_renders_and_opens() {
        let catalog = catalog();
        let mut panels = mounted(&catalog);
        let mut controller = DisclosureController::new();

        let state = controller.toggle(&catalog, &mut panels, "symptoms").unwrap();

        assert_eq!(state, Disclosure::Open);
        let panel = panels.get("symptoms").unwrap();
        assert!(panel.is_visible());
        assert!(panel.is_expanded());
        assert_eq!(panel.content().len(), 3);
        assert!(controller.rendered().has_rendered("symptoms"));
    }

    #[test]
    fn items_render_once_across_many_toggles() {
        let catalog = catalog();
        let mut panels = mounted(&catalog);
        let mut controller = DisclosureController::with_renderer(CountingRenderer::default());

        controller.toggle(&catalog, &mut panels, "symptoms").unwrap();
        let first = panels.get("symptoms").unwrap().content().to_vec();
        for _ in 0..6 {
            controller.toggle(&catalog, &mut panels, "symptoms").unwrap();
        }

        assert_eq!(controller.renderer().calls.get(), 3);
        assert_eq!(panels.get("symptoms").unwrap().content(), first.as_slice());
    }

    #[test]
    fn parity_of_toggles_decides_visibility() {
        let catalog = catalog();
        let mut panels = mounted(&catalog);
        let mut controller = DisclosureController::new();

        for n in 1..=5 {
            let state = controller.toggle(&catalog, &mut panels, "vaccination").unwrap();
            assert_eq!(state.is_open(), n % 2 == 1);
            assert_eq!(panels.get("vaccination").unwrap().is_visible(), n % 2 == 1);
        }
    }

    #[test]
    fn toggle_before_mount_is_element_not_found() {
        let catalog = catalog();
        let mut panels = MountedPanels::default();
        let mut controller = DisclosureController::new();

        let err = controller.toggle(&catalog, &mut panels, "symptoms").unwrap_err();

        assert!(matches!(err, PortalError::ElementNotFound(_)));
        assert!(!controller.rendered().has_rendered("symptoms"));
    }

    #[test]
    fn render_category_reports_unknown_key() {
        let controller = DisclosureController::new();
        let err = controller.render_category(&catalog(), "dentistry").unwrap_err();
        assert!(matches!(err, PortalError::CategoryNotFound(key) if key == "dentistry"));
    }

    #[test]
    fn rendered_items_follow_catalog_order() {
        let catalog = catalog();
        let controller = DisclosureController::new();
        let headings: Vec<String> = controller
            .render_category(&catalog, "symptoms")
            .unwrap()
            .into_iter()
            .map(|fragment| fragment.heading)
            .collect();
        assert_eq!(headings, vec!["Fever & Cold", "Digestive Issues", "Skin Conditions"]);
    }
}
