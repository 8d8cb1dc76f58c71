//! Reveal-on-view latches
//!
//! Each section owns one latch. It starts `Hidden` and flips to `Visible` the
//! first time the section's visible fraction reaches its threshold. There is
//! no way back, so an entrance animation plays once per page load.

use super::geometry::Bounds;
use serde::{Deserialize, Serialize};

/// State of a reveal latch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// CSS class applied to the section container
    pub fn css_class(self) -> &'static str {
        match self {
            RevealState::Hidden => "reveal",
            RevealState::Visible => "reveal revealed",
        }
    }
}

/// Visibility threshold and root margin for one section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Fraction of the section (0.0 - 1.0) that must be visible
    pub threshold: f64,
    /// Pixels added to the viewport on top and bottom; negative shrinks it
    pub margin: f64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            margin: 0.0,
        }
    }
}

/// One-shot `Hidden -> Visible` gate
#[derive(Debug, Clone, Default)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    /// Feed one intersection measurement
    ///
    /// A ratio at or above `threshold` latches the state to `Visible`. A zero
    /// threshold needs any positive intersection. Once visible, the state never
    /// changes again.
    pub fn observe(&mut self, intersection_ratio: f64, threshold: f64) -> RevealState {
        if self.state == RevealState::Hidden && crosses(intersection_ratio, threshold) {
            self.state = RevealState::Visible;
        }
        self.state
    }
}

fn crosses(ratio: f64, threshold: f64) -> bool {
    if threshold <= 0.0 {
        ratio > 0.0
    } else {
        ratio >= threshold
    }
}

/// Visible window in page coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Scroll offset of the window's top edge
    pub top: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Fraction of `section` inside the viewport grown by `margin` on both edges
pub fn intersection_ratio(section: Bounds, viewport: Viewport, margin: f64) -> f64 {
    if section.height <= 0.0 {
        return 0.0;
    }

    let root_top = viewport.top - margin;
    let root_bottom = viewport.top + viewport.height + margin;
    let overlap = section.bottom().min(root_bottom) - section.top.max(root_top);

    (overlap.max(0.0) / section.height).clamp(0.0, 1.0)
}

/// A section's latch bundled with its settings
#[derive(Debug, Clone, Default)]
pub struct RevealController {
    settings: RevealSettings,
    latch: RevealLatch,
}

impl RevealController {
    pub fn new(settings: RevealSettings) -> Self {
        Self {
            settings,
            latch: RevealLatch::new(),
        }
    }

    pub fn settings(&self) -> RevealSettings {
        self.settings
    }

    pub fn state(&self) -> RevealState {
        self.latch.state()
    }

    /// Feed a precomputed intersection ratio
    pub fn observe(&mut self, intersection_ratio: f64) -> RevealState {
        self.latch
            .observe(intersection_ratio, self.settings.threshold)
    }

    /// Measure the section against the viewport and feed the ratio
    pub fn observe_geometry(&mut self, section: Bounds, viewport: Viewport) -> RevealState {
        let ratio = intersection_ratio(section, viewport, self.settings.margin);
        self.observe(ratio)
    }
}
