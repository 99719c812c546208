//! The ordered item list and its editing operations.
//!
//! [`OrderedList`] owns an ordered sequence of identified entries plus the
//! current [`Selection`]. All mutations are synchronous and validate their
//! indices up front: a failed call is a complete no-op.
//!
//! Drag-in-progress is host UI state; the list only ever sees the final
//! [`reorder`](OrderedList::reorder) on drop. A cancelled drag reaches this
//! crate as nothing at all.

use crate::error::ListError;
use crate::model::{Entry, ItemId, Selection};

/// An ordered sequence of identified entries with a tracked selection.
///
/// Insertion order is the display and persistence order. The only mutations
/// are append, remove, and single-element reorder; relative order of
/// unaffected entries is always preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderedList<T> {
    entries: Vec<Entry<T>>,
    selection: Selection,
}

/// The `(list, selection)` view handed to the host after a mutation.
///
/// The host renders entries in slice order and highlights `selected`, then
/// serializes the items into its own persistence format.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a, T> {
    /// Entries in display order.
    pub entries: &'a [Entry<T>],
    /// Position of the active entry, if any.
    pub selected: Option<usize>,
}

impl<'a, T> Snapshot<'a, T> {
    /// Returns the active entry, if any.
    pub fn selected_entry(&self) -> Option<&'a Entry<T>> {
        self.selected.and_then(|i| self.entries.get(i))
    }
}

impl<T> OrderedList<T> {
    /// Creates an empty list with no selection.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selection: Selection::None,
        }
    }

    /// Creates a list from pre-built entries (no selection).
    ///
    /// Used by the builder when rehydrating persisted attributes. Entry ids
    /// must be distinct; this is checked in debug builds only.
    pub fn from_entries(entries: Vec<Entry<T>>) -> Self {
        #[cfg(debug_assertions)]
        {
            let mut seen = rustc_hash::FxHashSet::default();
            for entry in &entries {
                debug_assert!(seen.insert(entry.id), "duplicate entry id {}", entry.id);
            }
        }
        Self {
            entries,
            selection: Selection::None,
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`.
    pub fn entry(&self, index: usize) -> Option<&Entry<T>> {
        self.entries.get(index)
    }

    /// Returns the item at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index).map(|e| &e.item)
    }

    /// Returns a mutable reference to the item at `index`.
    ///
    /// In-place edits (e.g. typing a URL into the selected link) don't move
    /// entries, so they can't invalidate the selection.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index).map(|e| &mut e.item)
    }

    /// Iterates over entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.entries.iter()
    }

    /// Returns the current position of the entry with the given id.
    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Appends an item with a fresh id. Returns the new length.
    ///
    /// The selection is untouched; use [`append_and_select`] for the
    /// "add a link and start editing it" transition.
    ///
    /// [`append_and_select`]: OrderedList::append_and_select
    pub fn append(&mut self, item: T) -> usize {
        self.entries.push(Entry::new(item));
        self.entries.len()
    }

    /// Appends an item and makes it the active selection. Returns the new
    /// length (the new entry sits at `len - 1`).
    pub fn append_and_select(&mut self, item: T) -> usize {
        let entry = Entry::new(item);
        self.selection.activate(entry.id);
        self.entries.push(entry);
        self.entries.len()
    }

    /// Removes the entry at `index`, shifting later entries left.
    ///
    /// If the removed entry was selected, the selection becomes none. A
    /// selection on any other entry keeps tracking it by id, so its
    /// reported index shifts along with the entry.
    pub fn remove(&mut self, index: usize) -> Result<Entry<T>, ListError> {
        if index >= self.entries.len() {
            return Err(ListError::OutOfRange {
                op: "remove",
                index,
                len: self.entries.len(),
            });
        }

        let removed = self.entries.remove(index);
        if self.selection.is_active(removed.id) {
            self.selection.clear();
        }
        Ok(removed)
    }

    /// Moves the entry at `from` to position `to`, shifting the entries in
    /// between. A single-element move, not a swap: the relative order of
    /// every other entry is preserved.
    ///
    /// The selection is keyed by id, so it keeps pointing at the same
    /// logical item whatever position the move leaves it at.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        let len = self.entries.len();
        if from >= len {
            return Err(ListError::OutOfRange {
                op: "reorder from",
                index: from,
                len,
            });
        }
        if to >= len {
            return Err(ListError::OutOfRange {
                op: "reorder to",
                index: to,
                len,
            });
        }
        if from == to {
            return Ok(());
        }

        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        Ok(())
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Makes the entry at `index` the active selection.
    ///
    /// Bounds-checked: the index must resolve to an entry id, which keeps
    /// the invariant that an active selection always names a present entry.
    pub fn select(&mut self, index: usize) -> Result<(), ListError> {
        match self.entries.get(index) {
            Some(entry) => {
                self.selection.activate(entry.id);
                Ok(())
            }
            None => Err(ListError::OutOfRange {
                op: "select",
                index,
                len: self.entries.len(),
            }),
        }
    }

    /// Explicitly drops the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Host signal: the enclosing container lost its active status.
    ///
    /// See [`Selection::container_deselected`] for the contract on when the
    /// host should emit this.
    pub fn container_deselected(&mut self) {
        self.selection.container_deselected();
    }

    /// Returns the id of the active entry, if any.
    pub fn selected_id(&self) -> Option<ItemId> {
        self.selection.active_id()
    }

    /// Returns the current position of the active entry, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.active_id().and_then(|id| self.index_of(id))
    }

    /// Returns the active item, if any.
    pub fn selected_item(&self) -> Option<&T> {
        self.selected_index().and_then(|i| self.get(i))
    }

    /// Returns the active item mutably, if any.
    pub fn selected_item_mut(&mut self) -> Option<&mut T> {
        let index = self.selected_index()?;
        self.get_mut(index)
    }

    /// Returns the `(list, selection)` view for rendering and persistence.
    pub fn snapshot(&self) -> Snapshot<'_, T> {
        Snapshot {
            entries: &self.entries,
            selected: self.selected_index(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a Entry<T>;
    type IntoIter = std::slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SocialLink;

    fn two_links() -> OrderedList<SocialLink> {
        let mut list = OrderedList::new();
        list.append(SocialLink::new("wordpress"));
        list.append(SocialLink::new("twitter"));
        list
    }

    #[test]
    fn test_append_returns_new_length() {
        let mut list = OrderedList::new();
        assert_eq!(list.append(SocialLink::new("wordpress")), 1);
        assert_eq!(list.append(SocialLink::new("twitter")), 2);
        assert!(list.selected_index().is_none());
    }

    #[test]
    fn test_append_and_select_activates_last() {
        let mut list = two_links();
        let len = list.append_and_select(SocialLink::default());
        assert_eq!(len, 3);
        assert_eq!(list.selected_index(), Some(2));
        assert_eq!(list.selected_item().unwrap().icon, "wordpress");
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut list = OrderedList::new();
        list.append(SocialLink::new("a"));
        list.append(SocialLink::new("b"));
        list.append(SocialLink::new("c"));

        let removed = list.remove(1).unwrap();
        assert_eq!(removed.item.icon, "b");
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().icon, "a");
        assert_eq!(list.get(1).unwrap().icon, "c");
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        // [A, B, C], selection 1, remove(1) -> selection none
        let mut list = OrderedList::new();
        list.append(SocialLink::new("a"));
        list.append(SocialLink::new("b"));
        list.append(SocialLink::new("c"));
        list.select(1).unwrap();

        list.remove(1).unwrap();
        assert!(list.selected_index().is_none());
        assert!(list.selected_id().is_none());
    }

    #[test]
    fn test_remove_before_selected_shifts_selection() {
        // [A, B, C], selection 2, remove(1) -> selection 1 (still C)
        let mut list = OrderedList::new();
        list.append(SocialLink::new("a"));
        list.append(SocialLink::new("b"));
        list.append(SocialLink::new("c"));
        list.select(2).unwrap();

        list.remove(1).unwrap();
        assert_eq!(list.selected_index(), Some(1));
        assert_eq!(list.selected_item().unwrap().icon, "c");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut list = OrderedList::new();
        list.append(SocialLink::new("a"));
        list.append(SocialLink::new("b"));
        list.append(SocialLink::new("c"));
        list.select(0).unwrap();
        let before = list.clone();

        let err = list.remove(5).unwrap_err();
        assert_eq!(
            err,
            ListError::OutOfRange {
                op: "remove",
                index: 5,
                len: 3
            }
        );
        assert_eq!(list, before);
    }

    #[test]
    fn test_reorder_moves_not_swaps() {
        let mut list = OrderedList::new();
        list.append(SocialLink::new("a"));
        list.append(SocialLink::new("b"));
        list.append(SocialLink::new("c"));
        list.append(SocialLink::new("d"));

        list.reorder(0, 2).unwrap();
        let icons: Vec<&str> = list.iter().map(|e| e.item.icon.as_str()).collect();
        assert_eq!(icons, ["b", "c", "a", "d"]);
    }

    #[test]
    fn test_reorder_selection_follows_item() {
        // [A("wordpress"), B("twitter")], select 1 (B), reorder(1, 0)
        // -> [B, A], selection 0
        let mut list = two_links();
        list.select(1).unwrap();
        let selected_id = list.selected_id().unwrap();

        list.reorder(1, 0).unwrap();
        let icons: Vec<&str> = list.iter().map(|e| e.item.icon.as_str()).collect();
        assert_eq!(icons, ["twitter", "wordpress"]);
        assert_eq!(list.selected_index(), Some(0));
        assert_eq!(list.selected_id(), Some(selected_id));
    }

    #[test]
    fn test_reorder_roundtrip_restores_order() {
        let mut list = OrderedList::new();
        for icon in ["a", "b", "c", "d", "e"] {
            list.append(SocialLink::new(icon));
        }
        let before = list.clone();

        list.reorder(1, 3).unwrap();
        list.reorder(3, 1).unwrap();
        assert_eq!(list, before);
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let mut list = two_links();
        let before = list.clone();
        list.reorder(1, 1).unwrap();
        assert_eq!(list, before);
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let mut list = two_links();
        let before = list.clone();

        assert!(matches!(
            list.reorder(2, 0),
            Err(ListError::OutOfRange { op: "reorder from", .. })
        ));
        assert!(matches!(
            list.reorder(0, 2),
            Err(ListError::OutOfRange { op: "reorder to", .. })
        ));
        assert_eq!(list, before);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut list = two_links();
        assert!(list.select(2).is_err());
        assert!(list.selected_index().is_none());
    }

    #[test]
    fn test_container_deselected_clears() {
        let mut list = two_links();
        list.select(0).unwrap();
        list.container_deselected();
        assert!(list.selected_index().is_none());

        // Idempotent from the empty state
        list.container_deselected();
        assert!(list.selected_index().is_none());
    }

    #[test]
    fn test_selected_item_mut_edits_in_place() {
        let mut list = two_links();
        list.select(1).unwrap();
        list.selected_item_mut().unwrap().url = "https://twitter.com/example".into();
        assert_eq!(list.get(1).unwrap().url, "https://twitter.com/example");
        assert_eq!(list.selected_index(), Some(1));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut list = two_links();
        list.select(1).unwrap();

        let snap = list.snapshot();
        assert_eq!(snap.entries.len(), 2);
        assert_eq!(snap.selected, Some(1));
        assert_eq!(snap.selected_entry().unwrap().item.icon, "twitter");
    }
}
