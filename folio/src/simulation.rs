//! Scroll simulation over the configured layout
//!
//! Drives a [`ScrollCoordinator`] and one [`RevealController`] per section
//! across a sequence of scroll offsets, using the section heights from
//! folio.toml as a [`StackedLayout`]. Each offset is delivered as its own
//! animation frame.

use crate::site_model::Site;
use crate::tracker::{
    RevealController, RevealState, ScrollCoordinator, ScrollOutcome, SectionId, TrackerError,
    Viewport,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Default viewport height for simulations
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

/// Something observable that happened at a scroll offset
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationEvent {
    /// The coordinator handled the scroll signal
    Scroll {
        scroll_y: f64,
        outcome: ScrollOutcome,
        active: SectionId,
    },
    /// A section latched visible
    Revealed { scroll_y: f64, section: SectionId },
}

/// Result of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub events: Vec<SimulationEvent>,
    /// Sections delivered to the change subscriber, in order
    pub notifications: Vec<SectionId>,
    /// Active section after the last offset
    pub final_active: SectionId,
    /// Sections still hidden after the last offset
    pub hidden: Vec<SectionId>,
}

/// Replay scroll offsets against the site's layout
///
/// # Parameters
/// * `site` - Assembled site; section heights define the layout
/// * `offsets` - Scroll offsets in delivery order
/// * `viewport_height` - Height of the simulated viewport
///
/// # Returns
/// * `Ok(SimulationReport)` - Events and final state
/// * `Err(TrackerError)` - The section list or tracker settings are invalid
pub fn simulate(
    site: &Site,
    offsets: &[f64],
    viewport_height: f64,
) -> Result<SimulationReport, TrackerError> {
    let sections = site.section_list()?;
    let mut coordinator = ScrollCoordinator::new(sections, site.stacked_layout(), &site.tracker)?;

    let notifications = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notifications);
    coordinator.mount();
    let subscription = coordinator.subscribe(move |id| sink.borrow_mut().push(id.clone()));

    let mut reveals: Vec<(SectionId, RevealController)> = site
        .sections
        .iter()
        .map(|section| {
            (
                section.descriptor.id.clone(),
                RevealController::new(section.reveal),
            )
        })
        .collect();

    let mut events = Vec::new();
    for &scroll_y in offsets {
        coordinator.queue_scroll(scroll_y);
        if let Some(outcome) = coordinator.on_animation_frame() {
            events.push(SimulationEvent::Scroll {
                scroll_y,
                outcome,
                active: coordinator.active().clone(),
            });
        }

        let viewport = Viewport::new(scroll_y, viewport_height);
        for (id, controller) in reveals.iter_mut() {
            let Some(bounds) = coordinator.provider().bounds_of(id) else {
                continue;
            };
            let before = controller.state();
            if controller.observe_geometry(bounds, viewport) != before {
                log::debug!("Revealed {} at {}", id, scroll_y);
                events.push(SimulationEvent::Revealed {
                    scroll_y,
                    section: id.clone(),
                });
            }
        }
    }

    let final_active = coordinator.active().clone();
    coordinator.unsubscribe(subscription);
    coordinator.unmount();

    let hidden = reveals
        .iter()
        .filter(|(_, controller)| controller.state() == RevealState::Hidden)
        .map(|(id, _)| id.clone())
        .collect();
    let notifications = notifications.borrow().clone();

    Ok(SimulationReport {
        events,
        notifications,
        final_active,
        hidden,
    })
}

/// Parse a comma-separated list of scroll offsets ("0, 750,1500")
pub fn parse_offsets(text: &str) -> Result<Vec<f64>, String> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| format!("invalid scroll offset '{}'", part))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{assemble, SiteSources};
    use crate::site_config::SiteConfig;
    use std::collections::HashMap;
    use std::path::PathBuf;

    const CONFIG: &str = r#"
title = "Test"
description = "Test site"

[owner]
name = "Sam Rivera"
email = "sam@example.com"

[[sections]]
id = "home"
label = "Home"
title = "Home"

[[sections]]
id = "about"
label = "About"
title = "About"

[[sections]]
id = "skills"
label = "Skills"
title = "Skills"
"#;

    fn site(config: &str) -> Site {
        assemble(SiteSources {
            root: PathBuf::from("."),
            config: SiteConfig::parse(config).unwrap(),
            csv_skills: HashMap::new(),
            project_sources: Vec::new(),
            avatar: None,
        })
    }

    fn scroll(scroll_y: f64, outcome: ScrollOutcome, active: &str) -> SimulationEvent {
        SimulationEvent::Scroll {
            scroll_y,
            outcome,
            active: SectionId::from(active),
        }
    }

    fn revealed(scroll_y: f64, section: &str) -> SimulationEvent {
        SimulationEvent::Revealed {
            scroll_y,
            section: SectionId::from(section),
        }
    }

    #[test]
    fn test_scroll_down_and_back() {
        let report = simulate(&site(CONFIG), &[0.0, 750.0, 1500.0, 100.0], 800.0).unwrap();

        assert_eq!(
            report.events,
            vec![
                scroll(0.0, ScrollOutcome::Unchanged, "home"),
                revealed(0.0, "home"),
                scroll(750.0, ScrollOutcome::Changed("about".into()), "about"),
                revealed(750.0, "about"),
                scroll(1500.0, ScrollOutcome::Changed("skills".into()), "skills"),
                revealed(1500.0, "skills"),
                scroll(100.0, ScrollOutcome::Changed("home".into()), "home"),
            ]
        );
        assert_eq!(
            report.notifications,
            vec![
                SectionId::from("about"),
                SectionId::from("skills"),
                SectionId::from("home")
            ]
        );
        assert_eq!(report.final_active.as_str(), "home");
        assert!(report.hidden.is_empty());
    }

    #[test]
    fn test_past_the_end_keeps_last_section() {
        let report = simulate(&site(CONFIG), &[1500.0, 5000.0], 800.0).unwrap();

        assert_eq!(
            report.events[2],
            scroll(5000.0, ScrollOutcome::NoMatch, "skills")
        );
        assert_eq!(report.final_active.as_str(), "skills");
    }

    #[test]
    fn test_sections_below_the_fold_stay_hidden() {
        let report = simulate(&site(CONFIG), &[0.0], 800.0).unwrap();

        assert_eq!(
            report.hidden,
            vec![SectionId::from("about"), SectionId::from("skills")]
        );
    }

    #[test]
    fn test_unknown_initial_section() {
        let config = format!("{}\n[tracker]\ninitial_section = \"hero\"\n", CONFIG);
        let err = simulate(&site(&config), &[0.0], 800.0).unwrap_err();

        assert_eq!(err, TrackerError::UnknownInitialSection("hero".into()));
    }

    #[test]
    fn test_parse_offsets() {
        assert_eq!(parse_offsets("0, 750,1500").unwrap(), vec![0.0, 750.0, 1500.0]);
        assert_eq!(parse_offsets("").unwrap(), Vec::<f64>::new());
        assert!(parse_offsets("0,abc").is_err());
        assert!(parse_offsets("NaN").is_err());
    }
}
