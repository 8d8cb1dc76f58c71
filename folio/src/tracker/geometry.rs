//! Viewport geometry sampling

use super::error::GeometryError;
use super::section::{SectionId, SectionList};
use std::collections::HashMap;

/// Vertical extent of a section in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Offset of the top edge from the top of the page
    pub top: f64,
    /// Rendered height
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: `top <= y < top + height`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }

    pub fn is_finite(&self) -> bool {
        self.top.is_finite() && self.height.is_finite()
    }
}

/// Geometry of one section, valid for a single resolution pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample<'a> {
    pub section_id: &'a SectionId,
    pub bounds: Bounds,
}

/// Source of live section geometry
pub trait ViewportGeometryProvider {
    /// Current bounds of a section's element
    ///
    /// # Returns
    /// * `Ok(Some(bounds))` - The element is mounted
    /// * `Ok(None)` - The element is not mounted; it is left out of the pass
    /// * `Err(GeometryError)` - Sampling failed; the whole pass is skipped
    fn section_bounds(&self, id: &SectionId) -> Result<Option<Bounds>, GeometryError>;
}

impl<P: ViewportGeometryProvider + ?Sized> ViewportGeometryProvider for &P {
    fn section_bounds(&self, id: &SectionId) -> Result<Option<Bounds>, GeometryError> {
        (**self).section_bounds(id)
    }
}

impl ViewportGeometryProvider for HashMap<SectionId, Bounds> {
    fn section_bounds(&self, id: &SectionId) -> Result<Option<Bounds>, GeometryError> {
        Ok(self.get(id).copied())
    }
}

/// Sample every declared section, in declared order
///
/// Sections whose element is absent are excluded rather than replaced by a
/// zero-height entry.
pub fn sample_sections<'a, P>(
    sections: &'a SectionList,
    provider: &P,
) -> Result<Vec<ScrollSample<'a>>, GeometryError>
where
    P: ViewportGeometryProvider + ?Sized,
{
    let mut samples = Vec::with_capacity(sections.len());

    for descriptor in sections {
        match provider.section_bounds(&descriptor.id)? {
            Some(bounds) if bounds.is_finite() => samples.push(ScrollSample {
                section_id: &descriptor.id,
                bounds,
            }),
            Some(_) => return Err(GeometryError::NonFinite(descriptor.id.clone())),
            None => log::trace!("Section '{}' is not mounted, skipping", descriptor.id),
        }
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains_is_half_open() {
        let bounds = Bounds::new(800.0, 800.0);
        assert!(bounds.contains(800.0));
        assert!(bounds.contains(1599.5));
        assert!(!bounds.contains(1600.0));
        assert!(!bounds.contains(799.9));
    }

    #[test]
    fn test_sample_excludes_unmounted_sections() {
        let sections = SectionList::from_ids(["home", "about", "skills"]).unwrap();
        let mut geometry = HashMap::new();
        geometry.insert(SectionId::from("home"), Bounds::new(0.0, 800.0));
        geometry.insert(SectionId::from("skills"), Bounds::new(1600.0, 800.0));

        let samples = sample_sections(&sections, &geometry).unwrap();
        let ids: Vec<&str> = samples.iter().map(|s| s.section_id.as_str()).collect();
        assert_eq!(ids, vec!["home", "skills"]);
    }

    #[test]
    fn test_sample_rejects_non_finite_bounds() {
        let sections = SectionList::from_ids(["home"]).unwrap();
        let mut geometry = HashMap::new();
        geometry.insert(SectionId::from("home"), Bounds::new(f64::NAN, 800.0));

        let result = sample_sections(&sections, &geometry);
        assert_eq!(result, Err(GeometryError::NonFinite(SectionId::from("home"))));
    }
}
