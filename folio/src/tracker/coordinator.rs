//! Scroll event coordination
//!
//! The coordinator owns the active section. Each scroll signal resamples
//! geometry for every declared section, resolves the section in focus and,
//! when it changed, notifies every subscriber. Signals arrive one at a time on
//! the UI thread, so no locking is involved.

use super::error::TrackerError;
use super::geometry::{sample_sections, ViewportGeometryProvider};
use super::resolver::resolve;
use super::section::{SectionId, SectionList};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_COORDINATOR: AtomicU64 = AtomicU64::new(0);

/// Tracker parameters taken from site configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerSettings {
    /// Lead distance added to the scroll offset before range comparison
    pub activation_offset: f64,
    /// Active section before the first resolved scroll
    pub initial_section: SectionId,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            activation_offset: 100.0,
            initial_section: SectionId::from("home"),
        }
    }
}

/// Result of handling one scroll signal
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollOutcome {
    /// The active section changed and subscribers were notified
    Changed(SectionId),
    /// The resolved section equals the current one
    Unchanged,
    /// No section contains the offset; the current section is kept
    NoMatch,
    /// Geometry sampling failed; the cycle was dropped
    Skipped,
    /// The coordinator is not mounted
    Unmounted,
}

/// Handle returned by [`ScrollCoordinator::subscribe`]
///
/// Consumed by [`ScrollCoordinator::unsubscribe`], so a subscription can be
/// cancelled at most once. Only the coordinator that issued it accepts it.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "dropping a Subscription leaves the listener registered until unmount"]
pub struct Subscription {
    owner: u64,
    id: u64,
}

type Listener = Box<dyn FnMut(&SectionId)>;

/// Owner of the active-section state
pub struct ScrollCoordinator<P> {
    owner: u64,
    sections: SectionList,
    provider: P,
    activation_offset: f64,
    active: SectionId,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
    mounted: bool,
    pending_scroll: Option<f64>,
}

impl<P: ViewportGeometryProvider> ScrollCoordinator<P> {
    /// Create an unmounted coordinator
    ///
    /// # Returns
    /// * `Ok(ScrollCoordinator)` - Active section set to the configured initial section
    /// * `Err(TrackerError)` - The initial section is not declared or the offset is not finite
    pub fn new(
        sections: SectionList,
        provider: P,
        settings: &TrackerSettings,
    ) -> Result<Self, TrackerError> {
        if !settings.activation_offset.is_finite() {
            return Err(TrackerError::InvalidActivationOffset(
                settings.activation_offset,
            ));
        }
        if !sections.contains(&settings.initial_section) {
            return Err(TrackerError::UnknownInitialSection(
                settings.initial_section.clone(),
            ));
        }

        Ok(Self {
            owner: NEXT_COORDINATOR.fetch_add(1, Ordering::Relaxed),
            sections,
            provider,
            activation_offset: settings.activation_offset,
            active: settings.initial_section.clone(),
            listeners: Vec::new(),
            next_listener: 0,
            mounted: false,
            pending_scroll: None,
        })
    }

    /// Currently active section
    pub fn active(&self) -> &SectionId {
        &self.active
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Start accepting scroll signals
    pub fn mount(&mut self) {
        self.mounted = true;
    }

    /// Stop accepting scroll signals and drop every subscriber
    ///
    /// Pending coalesced signals are discarded. The active section is kept.
    pub fn unmount(&mut self) {
        if self.mounted {
            log::debug!(
                "Unmounting tracker, dropping {} listener(s)",
                self.listeners.len()
            );
        }
        self.mounted = false;
        self.pending_scroll = None;
        self.listeners.clear();
    }

    /// Register a callback invoked with the new section on every change
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&SectionId) + 'static,
    {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        Subscription {
            owner: self.owner,
            id,
        }
    }

    /// Remove a subscriber
    ///
    /// Returns `false` if the listener was already dropped by [`unmount`](Self::unmount)
    /// or the subscription belongs to another coordinator.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        if subscription.owner != self.owner {
            return false;
        }
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription.id);
        self.listeners.len() != before
    }

    /// Handle one scroll signal immediately
    pub fn on_scroll(&mut self, scroll_y: f64) -> ScrollOutcome {
        if !self.mounted {
            return ScrollOutcome::Unmounted;
        }

        let resolved = match sample_sections(&self.sections, &self.provider) {
            Ok(samples) => resolve(&samples, scroll_y, self.activation_offset).cloned(),
            Err(e) => {
                log::debug!("Skipping scroll cycle at {}: {}", scroll_y, e);
                return ScrollOutcome::Skipped;
            }
        };

        match resolved {
            None => ScrollOutcome::NoMatch,
            Some(id) if id == self.active => ScrollOutcome::Unchanged,
            Some(id) => {
                log::debug!("Active section {} -> {}", self.active, id);
                self.active = id.clone();
                for (_, listener) in self.listeners.iter_mut() {
                    listener(&id);
                }
                ScrollOutcome::Changed(id)
            }
        }
    }

    /// Record a scroll signal for the next animation frame
    ///
    /// Only the latest offset queued before a frame is resolved.
    pub fn queue_scroll(&mut self, scroll_y: f64) {
        if self.mounted {
            self.pending_scroll = Some(scroll_y);
        }
    }

    /// Resolve the latest queued offset, if any
    pub fn on_animation_frame(&mut self) -> Option<ScrollOutcome> {
        let scroll_y = self.pending_scroll.take()?;
        Some(self.on_scroll(scroll_y))
    }
}

impl<P> std::fmt::Debug for ScrollCoordinator<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollCoordinator")
            .field("sections", &self.sections)
            .field("activation_offset", &self.activation_offset)
            .field("active", &self.active)
            .field("listeners", &self.listeners.len())
            .field("mounted", &self.mounted)
            .field("pending_scroll", &self.pending_scroll)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::layout::StackedLayout;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn layout() -> StackedLayout {
        StackedLayout::new(0.0)
            .with_section("home", 800.0)
            .with_section("about", 800.0)
            .with_section("skills", 800.0)
    }

    fn coordinator() -> ScrollCoordinator<StackedLayout> {
        let sections = SectionList::from_ids(["home", "about", "skills"]).unwrap();
        let mut coordinator =
            ScrollCoordinator::new(sections, layout(), &TrackerSettings::default()).unwrap();
        coordinator.mount();
        coordinator
    }

    fn recorder(coordinator: &mut ScrollCoordinator<StackedLayout>) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _subscription = coordinator.subscribe(move |id| sink.borrow_mut().push(id.to_string()));
        seen
    }

    #[test]
    fn test_starts_at_initial_section() {
        let coordinator = coordinator();
        assert_eq!(coordinator.active().as_str(), "home");
    }

    #[test]
    fn test_rejects_unknown_initial_section() {
        let sections = SectionList::from_ids(["about", "skills"]).unwrap();
        let result = ScrollCoordinator::new(sections, layout(), &TrackerSettings::default());
        assert_eq!(
            result.unwrap_err(),
            TrackerError::UnknownInitialSection(SectionId::from("home"))
        );
    }

    #[test]
    fn test_rejects_non_finite_offset() {
        let sections = SectionList::from_ids(["home"]).unwrap();
        let settings = TrackerSettings {
            activation_offset: f64::INFINITY,
            ..TrackerSettings::default()
        };
        assert!(matches!(
            ScrollCoordinator::new(sections, layout(), &settings),
            Err(TrackerError::InvalidActivationOffset(_))
        ));
    }

    #[test]
    fn test_notifies_only_on_change() {
        let mut coordinator = coordinator();
        let seen = recorder(&mut coordinator);

        assert_eq!(coordinator.on_scroll(0.0), ScrollOutcome::Unchanged);
        assert_eq!(
            coordinator.on_scroll(750.0),
            ScrollOutcome::Changed(SectionId::from("about"))
        );
        assert_eq!(coordinator.on_scroll(900.0), ScrollOutcome::Unchanged);
        assert_eq!(
            coordinator.on_scroll(1600.0),
            ScrollOutcome::Changed(SectionId::from("skills"))
        );

        assert_eq!(*seen.borrow(), vec!["about", "skills"]);
    }

    #[test]
    fn test_no_match_keeps_previous_section() {
        let mut coordinator = coordinator();
        coordinator.on_scroll(1700.0);
        assert_eq!(coordinator.active().as_str(), "skills");

        assert_eq!(coordinator.on_scroll(5000.0), ScrollOutcome::NoMatch);
        assert_eq!(coordinator.active().as_str(), "skills");
    }

    #[test]
    fn test_geometry_failure_skips_cycle() {
        let mut coordinator = coordinator();
        coordinator.on_scroll(750.0);
        coordinator.provider_mut().detach("skills");

        assert_eq!(coordinator.on_scroll(1700.0), ScrollOutcome::Skipped);
        assert_eq!(coordinator.active().as_str(), "about");

        coordinator.provider_mut().reattach("skills");
        assert_eq!(
            coordinator.on_scroll(1700.0),
            ScrollOutcome::Changed(SectionId::from("skills"))
        );
    }

    #[test]
    fn test_unmounted_section_is_excluded() {
        let mut coordinator = coordinator();
        coordinator.provider_mut().unmount("about");

        // skills now starts at 800
        assert_eq!(
            coordinator.on_scroll(750.0),
            ScrollOutcome::Changed(SectionId::from("skills"))
        );
    }

    #[test]
    fn test_signals_ignored_until_mounted() {
        let sections = SectionList::from_ids(["home", "about", "skills"]).unwrap();
        let mut coordinator =
            ScrollCoordinator::new(sections, layout(), &TrackerSettings::default()).unwrap();

        assert_eq!(coordinator.on_scroll(750.0), ScrollOutcome::Unmounted);
        assert_eq!(coordinator.active().as_str(), "home");

        coordinator.mount();
        assert_eq!(
            coordinator.on_scroll(750.0),
            ScrollOutcome::Changed(SectionId::from("about"))
        );
    }

    #[test]
    fn test_unmount_drops_listeners() {
        let mut coordinator = coordinator();
        let seen = recorder(&mut coordinator);
        assert_eq!(coordinator.listener_count(), 1);

        coordinator.unmount();
        assert_eq!(coordinator.listener_count(), 0);
        assert_eq!(coordinator.on_scroll(750.0), ScrollOutcome::Unmounted);

        coordinator.mount();
        coordinator.on_scroll(750.0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_unsubscribe() {
        let mut coordinator = coordinator();
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        let subscription = coordinator.subscribe(move |_| *sink.borrow_mut() += 1);

        coordinator.on_scroll(750.0);
        assert!(coordinator.unsubscribe(subscription));
        coordinator.on_scroll(1600.0);

        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn test_unsubscribe_ignores_other_coordinators_handle() {
        let mut first = coordinator();
        let mut second = coordinator();
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        let from_first = first.subscribe(|_| {});
        let from_second = second.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(!second.unsubscribe(from_first));
        assert_eq!(second.listener_count(), 1);
        assert_eq!(first.listener_count(), 1);

        second.on_scroll(750.0);
        assert_eq!(*seen.borrow(), 1);
        assert!(second.unsubscribe(from_second));
        assert_eq!(second.listener_count(), 0);
    }

    #[test]
    fn test_unsubscribe_after_unmount_reports_missing() {
        let mut coordinator = coordinator();
        let subscription = coordinator.subscribe(|_| {});
        coordinator.unmount();
        assert!(!coordinator.unsubscribe(subscription));
    }

    #[test]
    fn test_animation_frame_coalesces_signals() {
        let mut coordinator = coordinator();
        let seen = recorder(&mut coordinator);

        coordinator.queue_scroll(750.0);
        coordinator.queue_scroll(1000.0);
        coordinator.queue_scroll(1700.0);
        assert_eq!(
            coordinator.on_animation_frame(),
            Some(ScrollOutcome::Changed(SectionId::from("skills")))
        );
        assert_eq!(coordinator.on_animation_frame(), None);
        assert_eq!(*seen.borrow(), vec!["skills"]);
    }

    #[test]
    fn test_unmount_discards_queued_signal() {
        let mut coordinator = coordinator();
        coordinator.queue_scroll(750.0);
        coordinator.unmount();
        assert_eq!(coordinator.on_animation_frame(), None);
    }
}
