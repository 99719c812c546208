//! Item types for list entries.

use crate::model::ItemId;

/// The icon assigned to a newly appended social link.
pub const DEFAULT_ICON: &str = "wordpress";

/// A social-link item: an icon identifier plus a URL.
///
/// No uniqueness constraints: the same icon or URL may appear in multiple
/// entries. An empty URL is valid (the user picks the icon first and fills
/// in the URL afterwards).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    /// Icon identifier (a dashicon-style slug, e.g. `"twitter"`).
    pub icon: String,
    /// Link target. Possibly empty.
    pub url: String,
}

impl SocialLink {
    /// Creates a social link with the given icon and an empty URL.
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            url: String::new(),
        }
    }

    /// Creates a social link with both fields set.
    pub fn with_url(icon: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            url: url.into(),
        }
    }

    /// Returns true if the URL has not been filled in yet.
    pub fn url_is_empty(&self) -> bool {
        self.url.is_empty()
    }
}

impl Default for SocialLink {
    /// The item appended by the "add link" action: default icon, empty URL.
    fn default() -> Self {
        SocialLink::new(DEFAULT_ICON)
    }
}

/// An identified list slot: a stable id plus the item it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    /// Stable identity, assigned at creation and never reused.
    pub id: ItemId,
    /// The item payload.
    pub item: T,
}

impl<T> Entry<T> {
    /// Creates an entry with a fresh random id.
    pub fn new(item: T) -> Self {
        Self {
            id: ItemId::random(),
            item,
        }
    }

    /// Creates an entry with an explicit id.
    pub fn with_id(id: ItemId, item: T) -> Self {
        Self { id, item }
    }
}
