//! Host notification contracts.
//!
//! A viewer (or any host component) reports geometry and visibility
//! changes to interested parties through [`GeometryListener`], and
//! generic state changes through [`ChangeListener`]. Both traits default
//! every method to a no-op, so an implementor opts into exactly the
//! notifications it cares about.
//!
//! [`SectionContainer`](crate::SectionContainer) implements both
//! contracts inertly: it can be registered as a listener, but currently
//! computes nothing from the events.

use crate::primitives::{Point, Rect};

/// A change to the on-screen geometry or visibility of a host component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryEvent {
    /// The component was resized; `bounds` is the new rectangle.
    Resized { bounds: Rect },

    /// The component moved; `origin` is the new top-left corner.
    Moved { origin: Point },

    /// The component became visible.
    Shown,

    /// The component was hidden.
    Hidden,
}

/// Receiver for component geometry and visibility notifications.
pub trait GeometryListener {
    /// The host component was resized.
    fn on_resized(&mut self, _bounds: Rect) {}

    /// The host component moved.
    fn on_moved(&mut self, _origin: Point) {}

    /// The host component became visible.
    fn on_shown(&mut self) {}

    /// The host component was hidden.
    fn on_hidden(&mut self) {}
}

/// Receiver for generic state-change notifications.
pub trait ChangeListener {
    /// Some state of the host changed.
    fn on_change(&mut self) {}
}

/// Route a [`GeometryEvent`] to the matching listener method.
pub fn dispatch_geometry<L: GeometryListener + ?Sized>(listener: &mut L, event: GeometryEvent) {
    match event {
        GeometryEvent::Resized { bounds } => listener.on_resized(bounds),
        GeometryEvent::Moved { origin } => listener.on_moved(origin),
        GeometryEvent::Shown => listener.on_shown(),
        GeometryEvent::Hidden => listener.on_hidden(),
    }
}
