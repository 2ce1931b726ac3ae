#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessLevel {
    Free,
}

impl AccessLevel {
    pub fn label(self) -> &'static str {
        match self {
            AccessLevel::Free => "Free",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub access_level: AccessLevel,
}

impl Item {
    pub fn free(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            access_level: AccessLevel::Free,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub key: String,    // Stable identifier, unique within a catalog
    pub icon: String,   // Short display glyph
    pub title: String,
    pub items: Vec<Item>,
}

impl Category {
    pub fn new(key: &str, icon: &str, title: &str, items: Vec<Item>) -> Self {
        Self {
            key: key.to_string(),
            icon: icon.to_string(),
            title: title.to_string(),
            items,
        }
    }
}

/// Visibility of a category's content after a toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disclosure {
    Open,
    Closed,
}

impl Disclosure {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Disclosure::Open
        } else {
            Disclosure::Closed
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Disclosure::Open)
    }
}
