//! Advisory validation for item fields.
//!
//! The list core enforces nothing about item contents (any icon/URL pair is
//! a valid entry). Hosts that want to warn before persisting can use these
//! checks; they are advisory, like the rest of this crate's boundary.

use lazy_static::lazy_static;
use rustc_hash::FxHashSet;

/// Maximum accepted icon slug length.
pub const MAX_ICON_SLUG_LEN: usize = 64;

lazy_static! {
    /// Icon slugs the stock link picker offers.
    static ref KNOWN_ICONS: FxHashSet<&'static str> = {
        let mut set = FxHashSet::default();
        for slug in [
            "wordpress",
            "facebook",
            "twitter",
            "instagram",
            "linkedin",
            "youtube",
            "pinterest",
            "reddit",
            "spotify",
            "twitch",
            "whatsapp",
            "xing",
            "email",
            "admin-site",
            "admin-links",
        ] {
            set.insert(slug);
        }
        set
    };
}

/// Validates an icon slug.
///
/// Slugs must:
/// - Not be empty
/// - Only contain lowercase ASCII letters, digits, and `-`
/// - Not exceed 64 characters
pub fn validate_icon_slug(slug: &str) -> Result<(), &'static str> {
    if slug.is_empty() {
        return Err("icon slug cannot be empty");
    }
    if slug.len() > MAX_ICON_SLUG_LEN {
        return Err("icon slug exceeds 64 characters");
    }
    for c in slug.chars() {
        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
            return Err("icon slug contains invalid character");
        }
    }
    Ok(())
}

/// Returns true if the slug is one the stock link picker offers.
///
/// Unknown slugs are still valid entries (themes register their own icons);
/// this only tells the host whether it can render the icon itself.
pub fn is_known_icon(slug: &str) -> bool {
    KNOWN_ICONS.contains(slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_icon_slug() {
        assert!(validate_icon_slug("wordpress").is_ok());
        assert!(validate_icon_slug("admin-site").is_ok());
        assert!(validate_icon_slug("icon2").is_ok());

        assert!(validate_icon_slug("").is_err());
        assert!(validate_icon_slug("Twitter").is_err());
        assert!(validate_icon_slug("two words").is_err());
        assert!(validate_icon_slug("under_score").is_err());

        let long = "a".repeat(65);
        assert!(validate_icon_slug(&long).is_err());
        let exact = "a".repeat(64);
        assert!(validate_icon_slug(&exact).is_ok());
    }

    #[test]
    fn test_known_icons() {
        assert!(is_known_icon("wordpress"));
        assert!(is_known_icon("twitter"));
        assert!(!is_known_icon("myspace"));
    }
}
