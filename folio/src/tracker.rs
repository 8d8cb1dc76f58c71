//! Active-section tracking and reveal-on-view latches
//!
//! This module holds the only stateful behaviour of a generated portfolio page:
//! - **Resolver**: maps a scroll offset onto the section currently in focus
//! - **Coordinator**: owns the active section, resamples geometry on scroll and
//!   notifies subscribers when the active section changes
//! - **Reveal latch**: a one-shot `Hidden -> Visible` gate per section
//!
//! Geometry is read through [`ViewportGeometryProvider`], so everything here can
//! be driven by synthetic layouts such as [`StackedLayout`].

mod coordinator;
mod error;
mod geometry;
mod layout;
mod resolver;
mod reveal;
mod section;

pub use coordinator::{ScrollCoordinator, ScrollOutcome, Subscription, TrackerSettings};
pub use error::{GeometryError, TrackerError};
pub use geometry::{sample_sections, Bounds, ScrollSample, ViewportGeometryProvider};
pub use layout::StackedLayout;
pub use resolver::{effective_y, resolve};
pub use reveal::{
    intersection_ratio, RevealController, RevealLatch, RevealSettings, RevealState, Viewport,
};
pub use section::{SectionDescriptor, SectionId, SectionList};
