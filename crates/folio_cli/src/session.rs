//! Interaction sessions
//!
//! A session file describes a page, carousel option overrides and a list of
//! timed interaction steps. Replaying it mounts the carousel and drives it
//! on a virtual clock, so the same file always produces the same report.
//!
//! ```toml
//! [page]
//! slides = 4
//! width = 1200.0
//!
//! [carousel]
//! autoplay_speed_ms = 1000
//!
//! [[step]]
//! at_ms = 250
//! action = "next"
//!
//! [[step]]
//! at_ms = 900
//! action = "click_dot"
//! index = 3
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use folio_core::{Document, ElementId, EventResponse, HostEvent};
use folio_widgets::{Carousel, CarouselConfig, CarouselOptions};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::page::{self, PageSpec};
use crate::report::{Report, StepRecord};

/// A scripted interaction session
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Session {
    pub page: PageSpec,
    /// Overrides applied on top of the portfolio page's own options
    pub carousel: CarouselOptions,
    #[serde(rename = "step")]
    pub steps: Vec<Step>,
    /// Clock time to run to after the last step
    pub until_ms: Option<u64>,
}

/// One timed interaction
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Step {
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: Action,
}

/// Interactions a session can perform
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Call `next()` directly
    Next,
    /// Call `previous()` directly
    Previous,
    /// Call `go_to_slide(index)` directly
    GoTo { index: usize },
    /// Click the previous arrow
    ClickPrev,
    /// Click the next arrow
    ClickNext,
    /// Click the dot for `index`
    ClickDot { index: usize },
    /// Pointer enters the slider container
    HoverEnter,
    /// Pointer leaves the slider container
    HoverLeave,
    /// Resize the viewport
    Resize { width: f32 },
    StartAutoplay,
    PauseAutoplay,
}

impl Session {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Resolved carousel configuration for this session
    pub fn carousel_config(&self) -> CarouselConfig {
        CarouselConfig::default()
            .with_options(&page::portfolio_options())
            .with_options(&self.carousel)
    }

    /// Replay the session and report where the carousel ended up
    ///
    /// `until_ms` overrides the session's own end time. Without either, the
    /// clock stops once the last step's transition would have finished.
    pub fn replay(&self, until_ms: Option<u64>) -> Result<Report> {
        let mut doc = page::build(&self.page);
        if !page::has_projects(&doc) {
            info!("page has no projects section, carousel not mounted");
            return Ok(Report::not_mounted());
        }

        let config = self.carousel_config();
        let settle_ms = config.transition_speed_ms;
        let Some(mut carousel) =
            Carousel::mount(&mut doc, config).context("Failed to mount carousel")?
        else {
            warn!("carousel markup missing from the projects section");
            return Ok(Report::not_mounted());
        };
        info!(slides = carousel.slide_count(), "carousel mounted");

        let mut steps = self.steps.clone();
        steps.sort_by_key(|s| s.at_ms);

        let mut records = Vec::with_capacity(steps.len());
        for step in &steps {
            carousel.advance_to(&mut doc, step.at_ms);
            let accepted = self.perform(&mut doc, &mut carousel, &step.action);
            debug!(
                at_ms = step.at_ms,
                action = ?step.action,
                accepted,
                slide = carousel.current_slide(),
                "step"
            );
            records.push(StepRecord {
                at_ms: step.at_ms,
                action: step.action.clone(),
                accepted,
                slide: carousel.current_slide(),
                state: carousel.state(),
            });
        }

        let last = steps.last().map(|s| s.at_ms).unwrap_or(0);
        let end = until_ms
            .or(self.until_ms)
            .unwrap_or(last + settle_ms)
            .max(carousel.now_ms());
        carousel.advance_to(&mut doc, end);

        Ok(Report::capture(&doc, &carousel, records))
    }

    /// Apply one action
    ///
    /// Direct calls report whether the carousel accepted the request;
    /// simulated input reports whether the carousel handled the event.
    fn perform(&self, doc: &mut Document, carousel: &mut Carousel, action: &Action) -> bool {
        let click = |el: Option<ElementId>| el.map(HostEvent::Click);
        let event = match *action {
            Action::Next => return carousel.next(doc),
            Action::Previous => return carousel.previous(doc),
            Action::GoTo { index } => return carousel.go_to_slide(doc, index),
            Action::StartAutoplay => {
                carousel.start_autoplay();
                return carousel.is_autoplay_running();
            }
            Action::PauseAutoplay => {
                carousel.pause_autoplay();
                return true;
            }
            Action::ClickPrev => click(carousel.controls().prev_button()),
            Action::ClickNext => click(carousel.controls().next_button()),
            Action::ClickDot { index } => click(carousel.controls().dots().get(index).copied()),
            Action::HoverEnter => Some(HostEvent::PointerEnter(carousel.container())),
            Action::HoverLeave => Some(HostEvent::PointerLeave(carousel.container())),
            Action::Resize { width } => Some(HostEvent::Resize {
                width,
                height: self.page.height,
            }),
        };

        let Some(event) = event else {
            warn!(?action, "control not present on the page");
            return false;
        };
        let response: EventResponse = carousel.handle_event(doc, &event);
        response.handled
    }
}
