//! Active-section resolution

use super::geometry::ScrollSample;
use super::section::SectionId;

/// Comparison point for a scroll offset: `scroll_y + activation_offset`
pub fn effective_y(scroll_y: f64, activation_offset: f64) -> f64 {
    scroll_y + activation_offset
}

/// Resolve the section in focus for a scroll offset
///
/// Scans `samples` in order and returns the first section whose
/// `[top, top + height)` range contains the effective offset. Overlapping
/// ranges resolve to the earliest declared section.
///
/// # Returns
/// * `Some(id)` - The section in focus
/// * `None` - No range contains the effective offset; callers keep their
///   previous value
pub fn resolve<'a>(
    samples: &[ScrollSample<'a>],
    scroll_y: f64,
    activation_offset: f64,
) -> Option<&'a SectionId> {
    let y = effective_y(scroll_y, activation_offset);
    samples
        .iter()
        .find(|sample| sample.bounds.contains(y))
        .map(|sample| sample.section_id)
}
