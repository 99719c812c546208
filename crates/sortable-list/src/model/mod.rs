//! Data model for ordered-list editing state.
//!
//! This module contains all the core types:
//! - Identifiers (stable per-entry ids)
//! - Items (social links and the generic entry slot)
//! - Selection (the active-entry state machine)
//! - The ordered list itself
//! - Builders (rehydration from persisted attributes)
//! - Member attributes (the team-member card)

pub mod builder;
pub mod id;
pub mod item;
pub mod list;
pub mod member;
pub mod selection;

pub use builder::ListBuilder;
pub use id::{format_id, parse_id, ItemId, NIL_ID};
pub use item::{Entry, SocialLink, DEFAULT_ICON};
pub use list::{OrderedList, Snapshot};
pub use member::{clamp_columns, MemberImage, TeamMember, MAX_COLUMNS, MIN_COLUMNS};
pub use selection::Selection;
