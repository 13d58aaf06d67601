//! Identity types for sections and viewers.
//!
//! Membership in a [`SectionContainer`](crate::SectionContainer) and the
//! section→viewer back-reference are both expressed through these IDs
//! rather than through aliased pointers. An ID is process-unique and
//! cheap to copy and compare.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique section IDs.
static SECTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Counter for generating unique viewer IDs.
static VIEWER_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a section.
///
/// Identity comparison for list membership goes through this ID: two
/// sections are "the same" exactly when their IDs are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(u64);

impl SectionId {
    /// Create a new unique section ID.
    ///
    /// Each call returns a different ID.
    pub fn new() -> Self {
        Self(SECTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Create a section ID from an existing value.
    ///
    /// Use this for deterministic IDs derived from external state.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for SectionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a viewer surface.
///
/// Sections carry an `Option<ViewerId>` back-reference to the viewer
/// currently hosting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewerId(u64);

impl ViewerId {
    /// Create a new unique viewer ID.
    pub fn new() -> Self {
        Self(VIEWER_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Create a viewer ID from an existing value.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl Default for ViewerId {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_unique() {
        let a = SectionId::new();
        let b = SectionId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn viewer_ids_are_unique() {
        let a = ViewerId::new();
        let b = ViewerId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn from_raw_round_trips() {
        let id = SectionId::from_raw(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(id, SectionId::from_raw(42));

        let v = ViewerId::from_raw(7);
        assert_eq!(v.raw(), 7);
    }
}
