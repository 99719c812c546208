//! Selection state for the item being edited.
//!
//! The selection is keyed by [`ItemId`], never by position. Translating to
//! an index happens at the list boundary, so removes and reorders cannot
//! leave the selection pointing at the wrong item.
//!
//! State machine:
//!
//! ```text
//! None          --activate(id)-->          Active(id)
//! Active(id)    --clear()-->               None
//! Active(id)    --container_deselected()-> None
//! Active(id)    --activate(id')-->         Active(id')
//! ```
//!
//! The list layer adds two more transitions: removing the active entry
//! clears the selection, and reordering leaves `Active(id)` untouched (the
//! id still names the same logical item, whatever position it landed on).

use crate::model::ItemId;

/// Which entry, if any, is active for editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No entry is being edited.
    #[default]
    None,
    /// The entry with this id is being edited.
    Active(ItemId),
}

impl Selection {
    /// Makes the given entry active.
    ///
    /// The caller (the owning list) guarantees the id is present.
    pub fn activate(&mut self, id: ItemId) {
        *self = Selection::Active(id);
    }

    /// Explicitly drops the selection.
    pub fn clear(&mut self) {
        *self = Selection::None;
    }

    /// The host signal that the enclosing container lost its active status.
    ///
    /// Always results in no selection. Hosts must emit this only on true
    /// container-level deselection, not when a child transiently loses
    /// focus mid-drag; this crate never observes focus events itself.
    pub fn container_deselected(&mut self) {
        *self = Selection::None;
    }

    /// Returns the active id, if any.
    pub fn active_id(&self) -> Option<ItemId> {
        match self {
            Selection::None => None,
            Selection::Active(id) => Some(*id),
        }
    }

    /// Returns true if nothing is selected.
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// Returns true if the given entry is the active one.
    pub fn is_active(&self, id: ItemId) -> bool {
        matches!(self, Selection::Active(active) if *active == id)
    }
}
