//! Mounted category panels: the handles the disclosure controller mutates.

use indexmap::IndexMap;

use crate::error::{PortalError, PortalResult};
use crate::services::fragment::{CategoryFragment, ItemFragment};

const CONTENT_CLASS: &str = "px-8 pb-6 space-y-4";
const INDICATOR_CLASS: &str = "w-6 h-6 transform transition-transform";

/// A collapsed-or-open category as it exists on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryPanel {
    header: CategoryFragment,
    content: Vec<ItemFragment>,
    visible: bool,
    expanded: bool,
}

impl CategoryPanel {
    /// Empty, hidden container with a collapsed indicator.
    pub fn collapsed(header: CategoryFragment) -> Self {
        Self {
            header,
            content: Vec::new(),
            visible: false,
            expanded: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.header.key
    }

    pub fn header(&self) -> &CategoryFragment {
        &self.header
    }

    pub fn content(&self) -> &[ItemFragment] {
        &self.content
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub(crate) fn replace_content(&mut self, fragments: Vec<ItemFragment>) {
        self.content = fragments;
    }

    pub(crate) fn flip_visibility(&mut self) {
        self.visible = !self.visible;
    }

    pub(crate) fn flip_indicator(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn content_class(&self) -> String {
        if self.visible {
            CONTENT_CLASS.to_string()
        } else {
            format!("hidden {CONTENT_CLASS}")
        }
    }

    pub fn indicator_class(&self) -> String {
        if self.expanded {
            format!("{INDICATOR_CLASS} rotate-180")
        } else {
            INDICATOR_CLASS.to_string()
        }
    }
}

/// Panels registered by the page shell at mount time, in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MountedPanels {
    panels: IndexMap<String, CategoryPanel>,
}

impl MountedPanels {
    pub fn from_fragments(fragments: impl IntoIterator<Item = CategoryFragment>) -> Self {
        let panels = fragments
            .into_iter()
            .map(|header| (header.key.clone(), CategoryPanel::collapsed(header)))
            .collect();
        Self { panels }
    }

    pub fn get(&self, key: &str) -> PortalResult<&CategoryPanel> {
        self.panels
            .get(key)
            .ok_or_else(|| PortalError::ElementNotFound(format!("{key} panel")))
    }

    pub fn get_mut(&mut self, key: &str) -> PortalResult<&mut CategoryPanel> {
        self.panels
            .get_mut(key)
            .ok_or_else(|| PortalError::ElementNotFound(format!("{key} panel")))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryPanel> {
        self.panels.values()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(key: &str) -> CategoryFragment {
        CategoryFragment {
            key: key.to_string(),
            icon: "*".to_string(),
            title: key.to_string(),
        }
    }

    #[test]
    fn collapsed_panel_is_hidden_and_empty() {
        let panel = CategoryPanel::collapsed(header("symptoms"));
        assert!(!panel.is_visible());
        assert!(!panel.is_expanded());
        assert!(panel.content().is_empty());
        assert!(panel.content_class().starts_with("hidden "));
        assert!(!panel.indicator_class().contains("rotate-180"));
    }

    #[test]
    fn flipped_panel_shows_rotated_indicator() {
        let mut panel = CategoryPanel::collapsed(header("symptoms"));
        panel.flip_visibility();
        panel.flip_indicator();
        assert!(!panel.content_class().contains("hidden"));
        assert!(panel.indicator_class().ends_with("rotate-180"));
    }

    #[test]
    fn missing_panel_is_element_not_found() {
        let mut panels = MountedPanels::from_fragments(vec![header("symptoms")]);
        assert!(matches!(panels.get_mut("vaccination"), Err(PortalError::ElementNotFound(_))));
        assert!(panels.get("symptoms").is_ok());
    }

    #[test]
    fn panels_mount_in_fragment_order() {
        assert!(MountedPanels::default().is_empty());

        let panels = MountedPanels::from_fragments(vec![header("vaccination"), header("symptoms")]);
        assert!(!panels.is_empty());
        assert_eq!(panels.len(), 2);
        let keys: Vec<&str> = panels.iter().map(CategoryPanel::key).collect();
        assert_eq!(keys, vec!["vaccination", "symptoms"]);
    }
}
