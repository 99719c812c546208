//! Ordered-list editing state with stable item identity and selection
//! tracking.
//!
//! This crate is the framework-free core behind a drag-sortable list of
//! items in a block editor, as found in a "Team Members" gallery: each
//! member carries an ordered list of social links the user appends to,
//! removes from, reorders by drag, and selects for editing.
//!
//! # Overview
//!
//! The host editor owns rendering, focus, drag gestures, and markup
//! persistence. This crate owns the state:
//! - **Stable identity**: every entry gets an opaque [`ItemId`] at creation;
//!   selection and UI bindings key off it, so reordering never confuses
//!   "which item is active" with "which position is active"
//! - **Ordered mutations**: append, remove, and single-element reorder,
//!   each preserving the relative order of unaffected entries
//! - **Explicit transitions**: selection changes are named operations on a
//!   small state machine, not side effects
//!
//! All mutations are synchronous; a failed call (the only error is
//! [`OutOfRange`](ListError::OutOfRange)) leaves list and selection
//! untouched.
//!
//! # Quick Start
//!
//! ```rust
//! use sortable_list::{OrderedList, SocialLink};
//!
//! let mut links: OrderedList<SocialLink> = OrderedList::new();
//!
//! // "Add link" appends a default item and starts editing it
//! links.append_and_select(SocialLink::default());
//! links.selected_item_mut().unwrap().url = "https://wordpress.org".into();
//!
//! links.append(SocialLink::with_url("twitter", "https://twitter.com/wp"));
//!
//! // Drag the second link to the front; the selection follows the item
//! links.select(0).unwrap();
//! links.reorder(1, 0).unwrap();
//! assert_eq!(links.selected_index(), Some(1));
//!
//! // The host renders and persists the snapshot after every mutation
//! let snapshot = links.snapshot();
//! assert_eq!(snapshot.entries[0].item.icon, "twitter");
//! ```
//!
//! # Modules
//!
//! - [`model`]: Core types (ItemId, Entry, Selection, OrderedList, builder,
//!   member attributes)
//! - [`media`]: Image-size option computation from media metadata
//! - [`validate`]: Advisory icon-slug validation
//! - [`error`]: Error types

pub mod error;
pub mod media;
pub mod model;
pub mod validate;

// Re-export commonly used types at crate root
pub use error::ListError;
pub use model::{
    clamp_columns, Entry, ItemId, ListBuilder, MemberImage, OrderedList, Selection, SocialLink,
    Snapshot, TeamMember, DEFAULT_ICON, MAX_COLUMNS, MIN_COLUMNS,
};
pub use model::id::{format_id, parse_id, NIL_ID};
pub use media::{size_options, MediaSize, RegisteredSize, SizeOption};
pub use validate::{is_known_icon, validate_icon_slug};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
