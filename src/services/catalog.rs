//! Read-only store of service categories, keyed by category key.

use indexmap::IndexMap;

use crate::error::{PortalError, PortalResult};
use crate::types::Category;

/// Immutable catalog of categories in insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogStore {
    categories: IndexMap<String, Category>,
}

impl CatalogStore {
    /// Build a catalog, rejecting repeated keys.
    pub fn new(categories: impl IntoIterator<Item = Category>) -> PortalResult<Self> {
        let mut map = IndexMap::new();
        for category in categories {
            if map.contains_key(&category.key) {
                return Err(PortalError::DuplicateCategory(category.key));
            }
            map.insert(category.key.clone(), category);
        }
        Ok(Self { categories: map })
    }

    pub fn get(&self, key: &str) -> PortalResult<&Category> {
        self.categories
            .get(key)
            .ok_or_else(|| PortalError::CategoryNotFound(key.to_string()))
    }

    /// Categories in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter().map(|(key, category)| (key.as_str(), category))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.categories.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
