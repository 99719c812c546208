//! Image-size option computation.
//!
//! When the host's media library describes a selected image, the inspector
//! offers a size dropdown: the sizes the theme registers, restricted to the
//! ones this particular image was actually generated at. Registration order
//! is the display order.

use std::collections::HashMap;

/// One generated size of a media item, keyed by slug in the media metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSize {
    /// URL of the image at this size.
    pub source_url: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// A theme-registered image size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredSize {
    /// Size slug (e.g. `"thumbnail"`, `"full"`).
    pub slug: String,
    /// Human-readable label shown in the dropdown.
    pub label: String,
}

impl RegisteredSize {
    /// Creates a registered size.
    pub fn new(slug: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            label: label.into(),
        }
    }
}

/// A selectable size option: the label to show and the URL to switch to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeOption {
    /// Label from the registered size.
    pub label: String,
    /// URL of the media item at this size.
    pub value: String,
}

/// Computes the size options for one media item.
///
/// Walks the registered sizes in order and keeps those the media item was
/// generated at. Sizes present in the metadata but not registered by the
/// theme are not offered.
pub fn size_options(
    registered: &[RegisteredSize],
    available: &HashMap<String, MediaSize>,
) -> Vec<SizeOption> {
    registered
        .iter()
        .filter_map(|reg| {
            available.get(&reg.slug).map(|size| SizeOption {
                label: reg.label.clone(),
                value: size.source_url.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> HashMap<String, MediaSize> {
        let mut sizes = HashMap::new();
        sizes.insert(
            "thumbnail".to_string(),
            MediaSize {
                source_url: "https://x/img-150x150.jpg".into(),
                width: 150,
                height: 150,
            },
        );
        sizes.insert(
            "full".to_string(),
            MediaSize {
                source_url: "https://x/img.jpg".into(),
                width: 1200,
                height: 800,
            },
        );
        sizes
    }

    #[test]
    fn test_options_follow_registration_order() {
        let registered = vec![
            RegisteredSize::new("thumbnail", "Thumbnail"),
            RegisteredSize::new("medium", "Medium"),
            RegisteredSize::new("full", "Full Size"),
        ];

        let options = size_options(&registered, &metadata());
        // "medium" was not generated for this image
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "Thumbnail");
        assert_eq!(options[0].value, "https://x/img-150x150.jpg");
        assert_eq!(options[1].label, "Full Size");
    }

    #[test]
    fn test_unregistered_sizes_not_offered() {
        let registered = vec![RegisteredSize::new("full", "Full Size")];
        let options = size_options(&registered, &metadata());
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "Full Size");
    }

    #[test]
    fn test_no_metadata_means_no_options() {
        let registered = vec![RegisteredSize::new("thumbnail", "Thumbnail")];
        let options = size_options(&registered, &HashMap::new());
        assert!(options.is_empty());
    }
}
