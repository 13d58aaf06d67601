//! Section capability contract.
//!
//! A section is a displayable unit managed by a
//! [`SectionContainer`](crate::SectionContainer). The trait is the
//! explicit form of what a container needs from its members: identity,
//! the viewer back-reference, and a settable background color.
//!
//! Containers call `set_viewer` when a section is admitted; they do NOT
//! clear the binding on removal, so a drained section still reports the
//! viewer it last belonged to.

use crate::id::{SectionId, ViewerId};
use crate::primitives::Color;

/// A widget-like unit managed within a section container.
pub trait Section {
    /// Get the identity of this section.
    ///
    /// Must be stable for the lifetime of the section; membership
    /// queries compare this ID.
    fn id(&self) -> SectionId;

    /// Get the viewer currently hosting this section, if any.
    fn viewer(&self) -> Option<ViewerId>;

    /// Set or clear the hosting viewer back-reference.
    fn set_viewer(&mut self, viewer: Option<ViewerId>);

    /// Apply a background color to this section.
    fn set_background(&mut self, color: Color);
}

impl<S: Section + ?Sized> Section for Box<S> {
    fn id(&self) -> SectionId {
        (**self).id()
    }

    fn viewer(&self) -> Option<ViewerId> {
        (**self).viewer()
    }

    fn set_viewer(&mut self, viewer: Option<ViewerId>) {
        (**self).set_viewer(viewer)
    }

    fn set_background(&mut self, color: Color) {
        (**self).set_background(color)
    }
}

/// A boxed section for heterogeneous containers.
pub type BoxedSection = Box<dyn Section>;

/// A basic titled section.
///
/// The simplest useful [`Section`] implementation: a titled panel with a
/// background color. Heavier section kinds live in the applications
/// that embed lamina; this one exists so the crate is usable out of the
/// box.
#[derive(Debug, Clone)]
pub struct PanelSection {
    id: SectionId,
    title: String,
    viewer: Option<ViewerId>,
    background: Color,
}

impl PanelSection {
    /// Create a panel section with a fresh ID and no viewer binding.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: SectionId::new(),
            title: title.into(),
            viewer: None,
            background: Color::TRANSPARENT,
        }
    }

    /// Get the panel title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the current background color.
    pub fn background(&self) -> Color {
        self.background
    }
}

impl Section for PanelSection {
    fn id(&self) -> SectionId {
        self.id
    }

    fn viewer(&self) -> Option<ViewerId> {
        self.viewer
    }

    fn set_viewer(&mut self, viewer: Option<ViewerId>) {
        self.viewer = viewer;
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
    }
}
