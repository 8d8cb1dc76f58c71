//! Synthetic stacked layout
//!
//! Lays sections out top to bottom from an origin, the way a single-page
//! portfolio renders them. Used by `folio simulate` and by tests in place of
//! a real rendering tree.

use super::error::GeometryError;
use super::geometry::{Bounds, ViewportGeometryProvider};
use super::section::SectionId;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct StackedLayout {
    origin: f64,
    entries: Vec<(SectionId, f64)>,
    unmounted: HashSet<SectionId>,
    detached: HashSet<SectionId>,
}

impl StackedLayout {
    /// Create an empty layout whose first section starts at `origin`
    pub fn new(origin: f64) -> Self {
        Self {
            origin,
            ..Self::default()
        }
    }

    /// Append a section below the existing ones
    pub fn with_section(mut self, id: impl Into<String>, height: f64) -> Self {
        self.push(id, height);
        self
    }

    pub fn push(&mut self, id: impl Into<String>, height: f64) {
        self.entries.push((SectionId::new(id), height));
    }

    /// Take a section out of the tree; the sections below move up
    pub fn unmount(&mut self, id: &str) {
        self.unmounted.insert(SectionId::from(id));
    }

    pub fn remount(&mut self, id: &str) {
        self.unmounted.remove(&SectionId::from(id));
    }

    /// Make sampling fail for a section, as a detached node would
    pub fn detach(&mut self, id: &str) {
        self.detached.insert(SectionId::from(id));
    }

    pub fn reattach(&mut self, id: &str) {
        self.detached.remove(&SectionId::from(id));
    }

    /// Height of every mounted section combined
    pub fn total_height(&self) -> f64 {
        self.mounted().map(|(_, height)| height).sum()
    }

    /// Bounds of a mounted section
    pub fn bounds_of(&self, id: &SectionId) -> Option<Bounds> {
        let mut top = self.origin;
        for (entry_id, height) in self.mounted() {
            if entry_id == id {
                return Some(Bounds::new(top, height));
            }
            top += height;
        }
        None
    }

    fn mounted(&self) -> impl Iterator<Item = (&SectionId, f64)> {
        self.entries
            .iter()
            .filter(|(id, _)| !self.unmounted.contains(id))
            .map(|(id, height)| (id, *height))
    }
}

impl ViewportGeometryProvider for StackedLayout {
    fn section_bounds(&self, id: &SectionId) -> Result<Option<Bounds>, GeometryError> {
        if self.detached.contains(id) {
            return Err(GeometryError::Detached(id.clone()));
        }
        Ok(self.bounds_of(id))
    }
}
