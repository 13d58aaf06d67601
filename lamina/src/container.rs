//! Bounded, ordered section membership.
//!
//! [`SectionContainer`] owns the ordered list of sections hosted by a
//! viewer surface, enforces an optional capacity bound, and keeps each
//! admitted section's viewer back-reference in sync.
//!
//! Insertion order is significant: it is the render/tab order of the
//! sections within the viewer.
//!
//! # Ownership
//!
//! Sections enter by value and leave by value: a rejected insert hands
//! the section back inside the error, [`remove`](SectionContainer::remove)
//! returns the removed section, and [`clear`](SectionContainer::clear)
//! drains into a `Vec`. The container manages membership, never
//! destruction. Removal does not reset a section's viewer binding.
//!
//! # Single writer
//!
//! All mutation goes through `&mut self`; there is no interior
//! mutability and no locking. Exclusive borrows are the single-writer
//! contract that a UI event loop needs.

use std::slice;

use crate::error::{InsertError, MoveError};
use crate::event::{ChangeListener, GeometryListener};
use crate::id::{SectionId, ViewerId};
use crate::primitives::Color;
use crate::section::Section;

/// An ordered, capacity-bounded collection of sections bound to one viewer.
#[derive(Debug)]
pub struct SectionContainer<S> {
    sections: Vec<S>,
    viewer: ViewerId,
    max_sections: usize,
}

impl<S: Section> SectionContainer<S> {
    /// Capacity value meaning "no bound".
    pub const UNLIMITED: usize = 0;

    /// Create a container bound to `viewer`.
    ///
    /// `max_sections` of [`UNLIMITED`](Self::UNLIMITED) (zero) means no
    /// capacity bound.
    pub fn new(viewer: ViewerId, max_sections: usize) -> Self {
        let max_sections = if max_sections > Self::UNLIMITED {
            max_sections
        } else {
            usize::MAX
        };

        Self {
            sections: Vec::new(),
            viewer,
            max_sections,
        }
    }

    /// The viewer this container is bound to.
    pub fn viewer(&self) -> ViewerId {
        self.viewer
    }

    /// The capacity bound, normalized: unlimited reports `usize::MAX`.
    pub fn max_sections(&self) -> usize {
        self.max_sections
    }

    /// Number of sections currently held.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the container holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether the container is at capacity.
    pub fn is_full(&self) -> bool {
        self.sections.len() >= self.max_sections
    }

    /// The sections in render order.
    pub fn sections(&self) -> &[S] {
        &self.sections
    }

    /// The section at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&S> {
        self.sections.get(index)
    }

    /// Mutable access to the section at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut S> {
        self.sections.get_mut(index)
    }

    /// The position of a section, or `None` if it is not a member.
    pub fn position(&self, id: SectionId) -> Option<usize> {
        self.sections.iter().position(|s| s.id() == id)
    }

    /// Whether a section is a member of this container.
    pub fn contains(&self, id: SectionId) -> bool {
        self.position(id).is_some()
    }

    /// Append a section, binding it to this container's viewer.
    ///
    /// At capacity the section is handed back in
    /// [`InsertError::Full`] with its viewer binding untouched.
    pub fn add(&mut self, mut section: S) -> Result<(), InsertError<S>> {
        if self.is_full() {
            tracing::debug!(
                "container full (capacity {}), rejecting section {:?}",
                self.max_sections,
                section.id()
            );
            return Err(InsertError::Full {
                section,
                capacity: self.max_sections,
            });
        }

        section.set_viewer(Some(self.viewer));
        self.sections.push(section);
        Ok(())
    }

    /// Insert a section at `index`, binding it to this container's viewer.
    ///
    /// The capacity guard runs first, then the index check
    /// (`index <= len`). On either rejection the section is handed back
    /// with its viewer binding untouched and the list unmodified.
    pub fn insert(&mut self, index: usize, mut section: S) -> Result<(), InsertError<S>> {
        if self.is_full() {
            return Err(InsertError::Full {
                section,
                capacity: self.max_sections,
            });
        }

        let len = self.sections.len();
        if index > len {
            tracing::debug!(
                "insert index {} out of bounds (len {}), rejecting section {:?}",
                index,
                len,
                section.id()
            );
            return Err(InsertError::OutOfBounds { section, index, len });
        }

        section.set_viewer(Some(self.viewer));
        self.sections.insert(index, section);
        Ok(())
    }

    /// Append each section in order via [`add`](Self::add).
    ///
    /// Every element respects the capacity guard independently, so a
    /// partial add is possible when capacity is reached mid-iteration.
    /// Returns the rejections, in input order.
    pub fn add_all<I>(&mut self, sections: I) -> Vec<InsertError<S>>
    where
        I: IntoIterator<Item = S>,
    {
        sections
            .into_iter()
            .filter_map(|section| self.add(section).err())
            .collect()
    }

    /// Move a member section to `index`, re-asserting its viewer binding.
    ///
    /// Validation happens before any mutation: a non-member or an
    /// out-of-bounds target leaves the list and every binding untouched.
    pub fn move_to(&mut self, index: usize, id: SectionId) -> Result<(), MoveError> {
        let from = self.position(id).ok_or(MoveError::NotFound)?;

        let len = self.sections.len();
        if index >= len {
            tracing::debug!("move target {} out of bounds (len {})", index, len);
            return Err(MoveError::OutOfBounds { index, len });
        }

        let mut section = self.sections.remove(from);
        section.set_viewer(Some(self.viewer));
        self.sections.insert(index, section);
        Ok(())
    }

    /// Remove a section by identity.
    ///
    /// Returns the section iff removal occurred. Its viewer binding is
    /// left as-is.
    pub fn remove(&mut self, id: SectionId) -> Option<S> {
        let index = self.position(id)?;
        Some(self.sections.remove(index))
    }

    /// Apply a background color to every contained section.
    pub fn set_background(&mut self, color: Color) {
        for section in &mut self.sections {
            section.set_background(color);
        }
    }

    /// Drain all sections, preserving order.
    ///
    /// The drained sections keep whatever viewer binding they had; the
    /// container does not own their destruction.
    pub fn clear(&mut self) -> Vec<S> {
        std::mem::take(&mut self.sections)
    }

    /// Iterate the sections in render order.
    pub fn iter(&self) -> slice::Iter<'_, S> {
        self.sections.iter()
    }
}

impl<'a, S: Section> IntoIterator for &'a SectionContainer<S> {
    type Item = &'a S;
    type IntoIter = slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// The container satisfies the host notification contracts, but computes
// nothing from them: viewport-driven visibility culling is not
// implemented, so geometry and change events are ignored.
impl<S: Section> GeometryListener for SectionContainer<S> {}

impl<S: Section> ChangeListener for SectionContainer<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::PanelSection;

    fn container(max: usize) -> SectionContainer<PanelSection> {
        SectionContainer::new(ViewerId::new(), max)
    }

    #[test]
    fn starts_empty() {
        let c = container(SectionContainer::<PanelSection>::UNLIMITED);
        assert_eq!(c.len(), 0);
        assert!(c.is_empty());
        assert!(c.sections().is_empty());
    }

    #[test]
    fn add_binds_viewer_and_appends() {
        let mut c = container(0);
        let a = PanelSection::new("a");
        let a_id = a.id();

        c.add(a).unwrap();

        assert_eq!(c.len(), 1);
        assert_eq!(c.position(a_id), Some(0));
        assert_eq!(c.get(0).unwrap().viewer(), Some(c.viewer()));
    }

    #[test]
    fn capacity_invariant_holds_under_adds() {
        let mut c = container(3);
        for i in 0..10 {
            let _ = c.add(PanelSection::new(format!("s{i}")));
            assert!(c.len() <= 3);
        }
        assert_eq!(c.len(), 3);
        assert!(c.is_full());
    }

    #[test]
    fn add_beyond_capacity_leaves_section_untouched() {
        let mut c = container(2);
        let a = PanelSection::new("a");
        let b = PanelSection::new("b");
        let (a_id, b_id) = (a.id(), b.id());
        c.add(a).unwrap();
        c.add(b).unwrap();

        let rejected = c.add(PanelSection::new("c")).unwrap_err();
        let section = match rejected {
            InsertError::Full { section, capacity } => {
                assert_eq!(capacity, 2);
                section
            }
            other => panic!("expected Full, got {other:?}"),
        };

        // The rejected section never saw a viewer binding.
        assert_eq!(section.viewer(), None);
        assert_eq!(c.len(), 2);
        assert_eq!(c.position(a_id), Some(0));
        assert_eq!(c.position(b_id), Some(1));
    }

    #[test]
    fn unlimited_container_is_never_full() {
        let mut c = container(SectionContainer::<PanelSection>::UNLIMITED);
        assert_eq!(c.max_sections(), usize::MAX);
        for i in 0..100 {
            c.add(PanelSection::new(format!("s{i}"))).unwrap();
        }
        assert!(!c.is_full());
    }

    #[test]
    fn insert_at_index_preserves_order() {
        let mut c = container(0);
        let a = PanelSection::new("a");
        let b = PanelSection::new("b");
        let m = PanelSection::new("m");
        let m_id = m.id();
        c.add(a).unwrap();
        c.add(b).unwrap();

        c.insert(1, m).unwrap();

        assert_eq!(c.position(m_id), Some(1));
        assert_eq!(c.get(1).unwrap().viewer(), Some(c.viewer()));
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut c = container(0);
        c.add(PanelSection::new("a")).unwrap();

        let b = PanelSection::new("b");
        let b_id = b.id();
        c.insert(1, b).unwrap();
        assert_eq!(c.position(b_id), Some(1));
    }

    #[test]
    fn insert_out_of_bounds_hands_section_back() {
        let mut c = container(0);
        c.add(PanelSection::new("a")).unwrap();

        let stray = PanelSection::new("stray");
        let err = c.insert(5, stray).unwrap_err();

        match err {
            InsertError::OutOfBounds { section, index, len } => {
                assert_eq!(index, 5);
                assert_eq!(len, 1);
                // Binding untouched by the failed insert.
                assert_eq!(section.viewer(), None);
            }
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn insert_checks_capacity_before_index() {
        let mut c = container(1);
        c.add(PanelSection::new("a")).unwrap();

        // Bad index AND full: the capacity guard runs first.
        let err = c.insert(9, PanelSection::new("b")).unwrap_err();
        assert!(matches!(err, InsertError::Full { .. }));
    }

    #[test]
    fn add_all_partial_fill_returns_overflow() {
        let mut c = container(2);
        let sections: Vec<_> = ["a", "b", "c", "d"]
            .iter()
            .map(|t| PanelSection::new(*t))
            .collect();

        let rejected = c.add_all(sections);

        assert_eq!(c.len(), 2);
        assert_eq!(rejected.len(), 2);
        assert_eq!(c.get(0).unwrap().title(), "a");
        assert_eq!(c.get(1).unwrap().title(), "b");
        // Overflow preserved input order and bindings stayed clear.
        assert_eq!(rejected[0].section().title(), "c");
        assert_eq!(rejected[1].section().title(), "d");
        assert_eq!(rejected[0].section().viewer(), None);
    }

    #[test]
    fn add_all_empty_input_is_noop() {
        let mut c = container(2);
        let rejected = c.add_all(Vec::new());
        assert!(rejected.is_empty());
        assert!(c.is_empty());
    }

    #[test]
    fn move_to_front_reorders() {
        let mut c = container(0);
        let a = PanelSection::new("a");
        let b = PanelSection::new("b");
        let x = PanelSection::new("c");
        let (a_id, b_id, c_id) = (a.id(), b.id(), x.id());
        c.add_all([a, b, x]);

        c.move_to(0, c_id).unwrap();

        assert_eq!(c.position(c_id), Some(0));
        assert_eq!(c.position(a_id), Some(1));
        assert_eq!(c.position(b_id), Some(2));
    }

    #[test]
    fn move_of_non_member_leaves_list_unchanged() {
        let mut c = container(0);
        let a = PanelSection::new("a");
        let a_id = a.id();
        c.add(a).unwrap();

        let outsider = PanelSection::new("outsider");
        let err = c.move_to(0, outsider.id()).unwrap_err();

        assert_eq!(err, MoveError::NotFound);
        assert_eq!(c.len(), 1);
        assert_eq!(c.position(a_id), Some(0));
    }

    #[test]
    fn move_out_of_bounds_leaves_list_unchanged() {
        let mut c = container(0);
        let a = PanelSection::new("a");
        let b = PanelSection::new("b");
        let (a_id, b_id) = (a.id(), b.id());
        c.add_all([a, b]);

        let err = c.move_to(2, a_id).unwrap_err();

        assert_eq!(err, MoveError::OutOfBounds { index: 2, len: 2 });
        assert_eq!(c.position(a_id), Some(0));
        assert_eq!(c.position(b_id), Some(1));
    }

    #[test]
    fn get_past_end_returns_none() {
        let mut c = container(0);
        c.add(PanelSection::new("a")).unwrap();
        assert!(c.get(1).is_none());
        assert!(c.get(100).is_none());
    }

    #[test]
    fn remove_returns_section_with_binding_intact() {
        let mut c = container(0);
        let a = PanelSection::new("a");
        let a_id = a.id();
        c.add(a).unwrap();
        let viewer = c.viewer();

        let removed = c.remove(a_id).expect("was a member");

        // Removal does not reset the binding.
        assert_eq!(removed.viewer(), Some(viewer));
        assert!(c.is_empty());
        assert!(c.remove(a_id).is_none());
    }

    #[test]
    fn clear_drains_without_resetting_bindings() {
        let mut c = container(0);
        c.add_all([PanelSection::new("a"), PanelSection::new("b")]);
        let viewer = c.viewer();

        let drained = c.clear();

        assert_eq!(c.len(), 0);
        assert!(c.is_empty());
        assert_eq!(drained.len(), 2);
        for section in &drained {
            assert_eq!(section.viewer(), Some(viewer));
        }
    }

    #[test]
    fn set_background_applies_to_all() {
        let mut c = container(0);
        c.add_all([PanelSection::new("a"), PanelSection::new("b")]);

        c.set_background(Color::WHITE);

        for section in &c {
            assert_eq!(section.background(), Color::WHITE);
        }
    }

    #[test]
    fn readding_rebinds_to_new_viewer() {
        let mut first = container(0);
        let mut second = container(0);

        let a = PanelSection::new("a");
        let a_id = a.id();
        first.add(a).unwrap();

        let a = first.remove(a_id).unwrap();
        assert_eq!(a.viewer(), Some(first.viewer()));

        second.add(a).unwrap();
        assert_eq!(second.get(0).unwrap().viewer(), Some(second.viewer()));
    }

    #[test]
    fn boxed_sections_work() {
        use crate::section::BoxedSection;

        let mut c: SectionContainer<BoxedSection> =
            SectionContainer::new(ViewerId::new(), 2);
        c.add(Box::new(PanelSection::new("a"))).unwrap();
        c.add(Box::new(PanelSection::new("b"))).unwrap();

        assert!(c.is_full());
        assert!(c.add(Box::new(PanelSection::new("c"))).is_err());
    }
}
