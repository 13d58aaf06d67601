//! The section viewer surface.
//!
//! A [`SectionViewer`] is the logical host that displays an ordered
//! stack of sections. It owns the [`SectionContainer`] that manages
//! membership, tracks its own geometry and visibility from
//! [`GeometryEvent`]s, and forwards every notification to the container
//! through the listener contracts.

use crate::config::ViewerConfig;
use crate::container::SectionContainer;
use crate::error::{InsertError, MoveError};
use crate::event::{dispatch_geometry, ChangeListener, GeometryEvent};
use crate::id::{SectionId, ViewerId};
use crate::primitives::{Color, Rect};
use crate::section::Section;

/// A host surface for an ordered stack of sections.
#[derive(Debug)]
pub struct SectionViewer<S> {
    id: ViewerId,
    container: SectionContainer<S>,
    bounds: Rect,
    background: Color,
    visible: bool,
}

impl<S: Section> SectionViewer<S> {
    /// Create a viewer whose container holds at most `max_sections`
    /// sections (zero means unlimited).
    pub fn new(max_sections: usize) -> Self {
        let id = ViewerId::new();
        Self {
            id,
            container: SectionContainer::new(id, max_sections),
            bounds: Rect::ZERO,
            background: Color::TRANSPARENT,
            visible: true,
        }
    }

    /// Create a viewer from a [`ViewerConfig`].
    pub fn with_config(config: &ViewerConfig) -> Self {
        let mut viewer = Self::new(config.max_sections);
        if let Some(background) = config.background {
            viewer.set_background(background);
        }
        viewer
    }

    /// The identity sections are bound to while hosted here.
    pub fn id(&self) -> ViewerId {
        self.id
    }

    /// The membership container.
    pub fn container(&self) -> &SectionContainer<S> {
        &self.container
    }

    /// Mutable access to the membership container.
    pub fn container_mut(&mut self) -> &mut SectionContainer<S> {
        &mut self.container
    }

    /// Current on-screen bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether the viewer is currently visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The viewer's own background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Append a section to the stack.
    pub fn add(&mut self, section: S) -> Result<(), InsertError<S>> {
        self.container.add(section)
    }

    /// Insert a section at `index`.
    pub fn insert(&mut self, index: usize, section: S) -> Result<(), InsertError<S>> {
        self.container.insert(index, section)
    }

    /// Move a hosted section to `index`.
    pub fn move_to(&mut self, index: usize, id: SectionId) -> Result<(), MoveError> {
        self.container.move_to(index, id)
    }

    /// Remove a hosted section by identity.
    pub fn remove(&mut self, id: SectionId) -> Option<S> {
        self.container.remove(id)
    }

    /// Drain all hosted sections.
    pub fn clear(&mut self) -> Vec<S> {
        self.container.clear()
    }

    /// Apply a background color to the viewer surface and every hosted
    /// section.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
        self.container.set_background(color);
    }

    /// Handle a geometry event from the windowing layer.
    ///
    /// Updates the viewer's own bounds/visibility bookkeeping, then
    /// forwards the event to the container's listener impl.
    pub fn handle_geometry(&mut self, event: GeometryEvent) {
        match event {
            GeometryEvent::Resized { bounds } => self.bounds = bounds,
            GeometryEvent::Moved { origin } => self.bounds = self.bounds.at(origin),
            GeometryEvent::Shown => self.visible = true,
            GeometryEvent::Hidden => self.visible = false,
        }
        dispatch_geometry(&mut self.container, event);
    }

    /// Forward a generic state-change notification to the container.
    pub fn notify_change(&mut self) {
        self.container.on_change();
    }
}
