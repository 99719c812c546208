//! Builder API for rehydrating a list from persisted attributes.
//!
//! Persisted block markup stores items without ids; the builder assigns
//! them as entries are pushed. Hosts that want ids stable across editor
//! sessions push with [`derived`](ListBuilder::item_derived) ids instead of
//! random ones.
//!
//! # Example
//!
//! ```rust
//! use sortable_list::{ListBuilder, SocialLink};
//!
//! let list = ListBuilder::new()
//!     .item(SocialLink::with_url("wordpress", "https://wordpress.org"))
//!     .item(SocialLink::with_url("twitter", "https://twitter.com/wp"))
//!     .select(0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.selected_index(), Some(0));
//! ```

use crate::error::ListError;
use crate::model::{Entry, ItemId, OrderedList};

/// Builder for constructing an [`OrderedList`] with seeded entries.
#[derive(Debug, Clone)]
pub struct ListBuilder<T> {
    entries: Vec<Entry<T>>,
    selected: Option<usize>,
}

impl<T> ListBuilder<T> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected: None,
        }
    }

    /// Pushes an item with a fresh random id.
    pub fn item(mut self, item: T) -> Self {
        self.entries.push(Entry::new(item));
        self
    }

    /// Pushes an item with a deterministic id derived from `seed`.
    ///
    /// Rehydrating the same persisted items with the same seeds yields the
    /// same ids on every load.
    pub fn item_derived(mut self, seed: &[u8], item: T) -> Self {
        self.entries.push(Entry::with_id(ItemId::derived(seed), item));
        self
    }

    /// Pushes an item with an explicit id.
    pub fn item_with_id(mut self, id: ItemId, item: T) -> Self {
        self.entries.push(Entry::with_id(id, item));
        self
    }

    /// Pushes several items at once, each with a fresh random id.
    pub fn items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.entries.extend(items.into_iter().map(Entry::new));
        self
    }

    /// Sets the initial selection by position.
    pub fn select(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    /// Builds the list, applying the initial selection.
    ///
    /// Fails with `OutOfRange` if the requested selection doesn't resolve
    /// to a seeded entry.
    pub fn build(self) -> Result<OrderedList<T>, ListError> {
        let mut list = OrderedList::from_entries(self.entries);
        if let Some(index) = self.selected {
            list.select(index)?;
        }
        Ok(list)
    }
}

impl<T> Default for ListBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
