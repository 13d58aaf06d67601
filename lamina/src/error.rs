//! Container error types.
//!
//! Insert and move failures are surfaced as explicit results rather than
//! swallowed. A rejected insert hands the section back to the caller
//! inside the error, so ownership is never lost.

use std::fmt;

use thiserror::Error;

/// A rejected insertion. Carries the section back to the caller.
#[derive(Error)]
pub enum InsertError<S> {
    /// The container is at capacity; the section was not added.
    #[error("section container is full (capacity {capacity})")]
    Full {
        /// The section that was rejected.
        section: S,
        /// The capacity that was hit.
        capacity: usize,
    },

    /// The insertion index was past the end of the list.
    #[error("insert index {index} out of bounds (len {len})")]
    OutOfBounds {
        /// The section that was rejected.
        section: S,
        /// The requested index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },
}

// Manual `Debug` so the error is debuggable (e.g. via `Result::unwrap`)
// even when `S` is not `Debug` — such as `Box<dyn Section>`. The carried
// section is elided rather than printed, matching the fact that `Section`
// itself carries no `Debug` bound.
impl<S> fmt::Debug for InsertError<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::Full { capacity, .. } => f
                .debug_struct("Full")
                .field("capacity", capacity)
                .finish_non_exhaustive(),
            InsertError::OutOfBounds { index, len, .. } => f
                .debug_struct("OutOfBounds")
                .field("index", index)
                .field("len", len)
                .finish_non_exhaustive(),
        }
    }
}

impl<S> InsertError<S> {
    /// Recover the rejected section.
    pub fn into_section(self) -> S {
        match self {
            InsertError::Full { section, .. } => section,
            InsertError::OutOfBounds { section, .. } => section,
        }
    }

    /// Borrow the rejected section.
    pub fn section(&self) -> &S {
        match self {
            InsertError::Full { section, .. } => section,
            InsertError::OutOfBounds { section, .. } => section,
        }
    }
}

/// A rejected move. The container is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The section is not a member of this container.
    #[error("section is not in this container")]
    NotFound,

    /// The target index was past the end of the list.
    #[error("move target index {index} out of bounds (len {len})")]
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// The container length at the time of the call.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_error_returns_section() {
        let err: InsertError<&str> = InsertError::Full {
            section: "s",
            capacity: 2,
        };
        assert_eq!(*err.section(), "s");
        assert_eq!(err.into_section(), "s");
    }

    #[test]
    fn error_messages() {
        let err: InsertError<()> = InsertError::OutOfBounds {
            section: (),
            index: 5,
            len: 2,
        };
        assert_eq!(err.to_string(), "insert index 5 out of bounds (len 2)");

        assert_eq!(
            MoveError::NotFound.to_string(),
            "section is not in this container"
        );
        assert_eq!(
            MoveError::OutOfBounds { index: 3, len: 3 }.to_string(),
            "move target index 3 out of bounds (len 3)"
        );
    }
}
