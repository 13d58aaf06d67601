//! Lamina: bounded, ordered section stacks for viewer surfaces.
//!
//! A *section* is a displayable widget hosted by a *viewer*. Lamina
//! provides the membership layer between the two:
//! - `SectionContainer` — ordered, capacity-bounded membership with
//!   position-based insert/move/remove, keeping each section's
//!   viewer back-reference in sync
//! - `SectionViewer` — the hosting surface that owns a container and
//!   feeds it geometry/change notifications
//! - Listener contracts for host geometry and state-change events
//!
//! # Usage
//!
//! ```
//! use lamina::{PanelSection, Section, SectionViewer};
//!
//! let mut viewer = SectionViewer::new(2);
//! viewer.add(PanelSection::new("header")).unwrap();
//! viewer.add(PanelSection::new("body")).unwrap();
//!
//! // Third section bounces off the capacity bound, ownership returned.
//! let rejected = viewer.add(PanelSection::new("footer")).unwrap_err();
//! assert_eq!(rejected.into_section().viewer(), None);
//! ```
//!
//! # Ownership model
//!
//! Sections move into the container by value and come back out by value
//! (`remove`, `clear`, and the section carried inside a rejected
//! insert). The container manages membership and the viewer binding,
//! never destruction. All mutation is `&mut self`: the single-writer
//! contract of a UI event loop, enforced by the borrow checker.

// Core primitives
pub mod id;
pub mod primitives;

// Section capability contract
pub mod section;

// Membership container
pub mod container;
pub mod error;

// Host surface and notification contracts
pub mod config;
pub mod event;
pub mod viewer;

// Re-export core types
pub use config::ViewerConfig;
pub use container::SectionContainer;
pub use error::{InsertError, MoveError};
pub use event::{dispatch_geometry, ChangeListener, GeometryEvent, GeometryListener};
pub use id::{SectionId, ViewerId};
pub use primitives::{Color, Point, Rect, Size};
pub use section::{BoxedSection, PanelSection, Section};
pub use viewer::SectionViewer;
