use std::collections::HashSet;

/// Keys of categories whose items have been rendered at least once.
///
/// Grows monotonically for the lifetime of a page view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderedSet {
    keys: HashSet<String>,
}

impl RenderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_rendered(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Marking an already-marked key is a no-op.
    pub fn mark_rendered(&mut self, key: &str) {
        if !self.keys.contains(key) {
            self.keys.insert(key.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
