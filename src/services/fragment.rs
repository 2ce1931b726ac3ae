//! Renderable fragments produced from catalog data.

use crate::types::{Category, Item};

/// One rendered item block: heading, body text, then badge.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemFragment {
    pub heading: String,
    pub body: String,
    pub badge: String,
}

/// Header of a collapsed category, as mounted by the page shell.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryFragment {
    pub key: String,
    pub icon: String,
    pub title: String,
}

impl CategoryFragment {
    pub fn from_category(category: &Category) -> Self {
        Self {
            key: category.key.clone(),
            icon: category.icon.clone(),
            title: category.title.clone(),
        }
    }
}

/// Turns catalog items into fragments for a category's content container.
pub trait ItemRenderer {
    fn render_item(&self, item: &Item) -> ItemFragment;

    /// Fragments for every item, in list order.
    fn render_items(&self, items: &[Item]) -> Vec<ItemFragment> {
        items.iter().map(|item| self.render_item(item)).collect()
    }
}

/// Default renderer used by the landing page service cards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CardRenderer;

impl ItemRenderer for CardRenderer {
    fn render_item(&self, item: &Item) -> ItemFragment {
        ItemFragment {
            heading: item.name.clone(),
            body: item.description.clone(),
            badge: item.access_level.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_keeps_content_and_order() {
        let items = vec![
            Item::free("First Aid", "Basic first aid"),
            Item::free("Outbreak Alerts", "Alerts in your area"),
        ];
        let fragments = CardRenderer.render_items(&items);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].heading, "First Aid");
        assert_eq!(fragments[0].body, "Basic first aid");
        assert_eq!(fragments[0].badge, "Free");
        assert_eq!(fragments[1].heading, "Outbreak Alerts");
    }
}
