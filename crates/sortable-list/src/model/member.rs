//! Team member attributes.
//!
//! The editable state of one member card: display fields, the optional
//! photo, and the ordered social-link list. The host owns markup
//! serialization; these are the in-memory attributes it loads and persists.

use crate::model::{OrderedList, SocialLink};

/// Column bounds for the parent members grid.
pub const MIN_COLUMNS: u8 = 1;
/// Column bounds for the parent members grid.
pub const MAX_COLUMNS: u8 = 6;

/// Clamps a requested column count to the grid bounds.
pub fn clamp_columns(columns: u8) -> u8 {
    columns.clamp(MIN_COLUMNS, MAX_COLUMNS)
}

/// A selected member photo.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberImage {
    /// Host media-library id, if the image came from the library rather
    /// than a direct URL.
    pub id: Option<u64>,
    /// Image URL.
    pub url: String,
    /// Alt text.
    pub alt: String,
}

impl MemberImage {
    /// Creates an image from a media-library selection.
    pub fn from_library(id: u64, url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            url: url.into(),
            alt: alt.into(),
        }
    }

    /// Creates an image from a direct URL (no library id, no alt).
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            id: None,
            url: url.into(),
            alt: String::new(),
        }
    }
}

/// One member card's editable attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamMember {
    /// Member name.
    pub name: String,
    /// Short bio.
    pub bio: String,
    /// Optional photo.
    pub image: Option<MemberImage>,
    /// Ordered social links with selection state.
    pub links: OrderedList<SocialLink>,
}

impl TeamMember {
    /// Creates an empty member card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a media selection.
    ///
    /// A selection without a URL clears the photo entirely, matching the
    /// editor's behavior when the user removes or fails to pick an image.
    pub fn set_image(&mut self, image: Option<MemberImage>) {
        match image {
            Some(img) if !img.url.is_empty() => self.image = Some(img),
            _ => self.image = None,
        }
    }

    /// Removes the photo.
    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Returns true if a photo is set.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
