//! Error types for list operations.

use thiserror::Error;

/// Error from an index-bearing list operation.
///
/// Every operation validates its indices before touching any state, so a
/// returned error means the list and its selection are exactly as they were
/// before the call. There is no fatal error class: the caller can always
/// retry with valid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// An index was outside `[0, len)`.
    ///
    /// `op` names the failing operation argument (e.g. `"remove"`,
    /// `"reorder from"`).
    #[error("{op} index {index} out of bounds (len: {len})")]
    OutOfRange {
        op: &'static str,
        index: usize,
        len: usize,
    },
}

impl ListError {
    /// Returns the offending index.
    pub fn index(&self) -> usize {
        match self {
            ListError::OutOfRange { index, .. } => *index,
        }
    }

    /// Returns the list length at the time of the failure.
    pub fn len(&self) -> usize {
        match self {
            ListError::OutOfRange { len, .. } => *len,
        }
    }
}
