//! Stable identifiers for list entries.
//!
//! Every entry gets an [`ItemId`] when it is created, and all internal
//! state (most importantly the selection) is keyed by id. Positions only
//! exist at the public boundary, which is what keeps selection correct
//! across removes and drag-reorders.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// A 16-byte opaque identifier for a list entry.
///
/// Stable for the lifetime of the entry: reordering never changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId([u8; 16]);

/// The zero/nil id. Never assigned to a live entry.
pub const NIL_ID: ItemId = ItemId([0u8; 16]);

impl ItemId {
    /// Creates a fresh random id (UUIDv4).
    pub fn random() -> Self {
        ItemId(Uuid::new_v4().into_bytes())
    }

    /// Derives a deterministic id (UUIDv8) from input bytes using SHA-256.
    ///
    /// ```text
    /// hash = SHA-256(input_bytes)[0:16]
    /// hash[6] = (hash[6] & 0x0F) | 0x80  // version 8
    /// hash[8] = (hash[8] & 0x3F) | 0x80  // RFC 4122 variant
    /// ```
    ///
    /// Persisted list attributes carry no ids; a host that derives ids from
    /// stable per-item input (e.g. the persistence slot) gets the same ids
    /// back on every reload.
    pub fn derived(input: &[u8]) -> Self {
        let hash = Sha256::digest(input);
        let mut id = [0u8; 16];
        id.copy_from_slice(&hash[..16]);

        // Set version 8 (bits 4-7 of byte 6)
        id[6] = (id[6] & 0x0F) | 0x80;
        // Set RFC 4122 variant (bits 6-7 of byte 8)
        id[8] = (id[8] & 0x3F) | 0x80;

        ItemId(id)
    }

    /// Creates an id from raw bytes.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        ItemId(bytes)
    }

    /// Returns the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns true if this is the nil id.
    pub fn is_nil(&self) -> bool {
        self.0 == [0u8; 16]
    }
}

/// Formats an id as non-hyphenated lowercase hex.
pub fn format_id(id: &ItemId) -> String {
    let mut s = String::with_capacity(32);
    for byte in id.as_bytes() {
        s.push_str(&format!("{:02x}", byte));
    }
    s
}

/// Parses an id from hex string (with or without hyphens).
pub fn parse_id(s: &str) -> Option<ItemId> {
    let hex: String = s.chars().filter(|c| *c != '-').collect();
    if hex.len() != 32 {
        return None;
    }

    let mut id = [0u8; 16];
    for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
        let byte_str = std::str::from_utf8(chunk).ok()?;
        id[i] = u8::from_str_radix(byte_str, 16).ok()?;
    }
    Some(ItemId(id))
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_id(self))
    }
}
