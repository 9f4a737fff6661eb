//! Slide carousel
//!
//! A horizontally sliding panel carousel with arrow and dot navigation,
//! autoplay and hover pausing.
//!
//! # Host markup
//!
//! ```text
//! div#projects-slider-container        <- container (hover region, width source)
//!   div#projects-slider                <- track (receives the transform)
//!     div.project-slide                <- slide panels, direct children
//!     div.project-slide
//!   div.slider-nav                     <- created when arrows are shown
//! div.slider-dots                      <- created when dots are shown
//! ```
//!
//! # Driving a carousel
//!
//! The carousel is single-threaded and owns its timers. The host delivers
//! events with [`Carousel::handle_event`] and moves time forward with
//! [`Carousel::advance_to`]; deferred work (autoplay, transition
//! completion, the initial layout pass) runs from there.
//!
//! ```rust
//! use folio_core::Document;
//! use folio_widgets::{Carousel, CarouselOptions};
//!
//! let mut doc = Document::new(800.0);
//! let root = doc.root();
//! let container = doc.build("div").id("projects-slider-container").append_to(root);
//! let track = doc.build("div").id("projects-slider").append_to(container);
//! for _ in 0..3 {
//!     doc.build("div").class("project-slide").append_to(track);
//! }
//!
//! let options = CarouselOptions::new().autoplay(false);
//! let mut carousel = Carousel::mount_with(&mut doc, &options).unwrap().unwrap();
//!
//! assert!(carousel.next(&mut doc));
//! assert!(!carousel.next(&mut doc)); // dropped while transitioning
//! carousel.advance_to(&mut doc, 500);
//! assert_eq!(carousel.current_slide(), 1);
//! assert!(!carousel.is_transitioning());
//! ```

mod config;
mod controls;

pub use config::{CarouselConfig, CarouselOptions};
pub use controls::{ControlAction, Controls, ACTIVE_CLASS};

use folio_animation::{css_transition, translate_x, Transition};
use folio_core::{
    Document, ElementId, EventId, EventResponse, HostEvent, Result, StateId, StateMachine,
    TimerId, TimerQueue,
};
use serde::Serialize;
use tracing::{debug, trace, warn};

// Transition guard states
const IDLE: StateId = 0;
const TRANSITIONING: StateId = 1;

// Guard events
const NAVIGATE: EventId = 1;
const SETTLED: EventId = 2;

/// Observable state of the transition guard
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselState {
    /// Ready to accept navigation
    Idle,
    /// A transition is running; navigation requests are dropped
    Transitioning,
}

/// Deferred work scheduled on the carousel's timer queue
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselTask {
    /// First positioning pass once layout has settled
    SettleLayout,
    /// Recurring autoplay advance
    AutoplayTick,
    /// End of the running transition
    TransitionEnd,
}

/// A mounted slide carousel
#[derive(Debug)]
pub struct Carousel {
    config: CarouselConfig,
    container: ElementId,
    track: ElementId,
    slides: Vec<ElementId>,
    current: usize,
    guard: StateMachine,
    timers: TimerQueue<CarouselTask>,
    autoplay_timer: Option<TimerId>,
    transition_timer: Option<TimerId>,
    controls: Controls,
    /// Resting track offset for the current slide
    offset: f32,
    motion: Option<Transition<f32>>,
}

impl Carousel {
    /// Mount a carousel onto the host markup in `doc`
    ///
    /// Returns `Ok(None)` when the container or track is not on the page
    /// (or the track is not inside the container). A carousel whose track has
    /// no slide panels is still returned, but stays inert: it creates no
    /// controls, schedules no timers and ignores every request.
    pub fn mount(doc: &mut Document, config: CarouselConfig) -> Result<Option<Self>> {
        config.validate()?;

        let Some(container) = doc.get_element_by_id(&config.container_id) else {
            debug!(id = %config.container_id, "carousel container not present");
            return Ok(None);
        };
        let Some(track) = doc.get_element_by_id(&config.track_id) else {
            debug!(id = %config.track_id, "carousel track not present");
            return Ok(None);
        };
        if !doc.is_descendant_of(track, container) {
            debug!(
                container = %config.container_id,
                track = %config.track_id,
                "carousel track is outside its container"
            );
            return Ok(None);
        }

        let slides = doc.children_with_class(track, &config.slide_class);
        let mut carousel = Self {
            config,
            container,
            track,
            slides,
            current: 0,
            guard: StateMachine::builder(IDLE)
                .on(IDLE, NAVIGATE, TRANSITIONING)
                .on(TRANSITIONING, SETTLED, IDLE)
                .build(),
            timers: TimerQueue::new(),
            autoplay_timer: None,
            transition_timer: None,
            controls: Controls::default(),
            offset: 0.0,
            motion: None,
        };

        if carousel.slides.is_empty() {
            debug!("carousel has no slides, staying inert");
        } else {
            carousel.init(doc);
        }
        Ok(Some(carousel))
    }

    /// Mount with the default configuration overridden by `options`
    pub fn mount_with(doc: &mut Document, options: &CarouselOptions) -> Result<Option<Self>> {
        Self::mount(doc, CarouselConfig::default().with_options(options))
    }

    fn init(&mut self, doc: &mut Document) {
        for &slide in &self.slides {
            doc.set_style(slide, "min-width", "100%");
        }

        if self.config.show_arrows {
            self.controls.attach_arrows(doc, self.container);
        }
        if self.config.show_dots {
            self.controls
                .attach_dots(doc, self.container, self.slides.len(), self.current);
        }
        if self.config.autoplay {
            self.start_autoplay();
        }

        self.timers
            .set_timeout(self.config.initial_delay_ms, CarouselTask::SettleLayout);

        debug!(
            slides = self.slides.len(),
            autoplay = self.config.autoplay,
            arrows = self.config.show_arrows,
            dots = self.config.show_dots,
            "carousel mounted"
        );
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Advance to the next slide, wrapping to the first
    ///
    /// Returns whether the request was accepted.
    pub fn next(&mut self, doc: &mut Document) -> bool {
        if self.is_inert() || self.is_transitioning() {
            return false;
        }
        let index = (self.current + 1) % self.slides.len();
        self.go_to_slide(doc, index)
    }

    /// Go back to the previous slide, wrapping to the last
    ///
    /// Returns whether the request was accepted.
    pub fn previous(&mut self, doc: &mut Document) -> bool {
        if self.is_inert() || self.is_transitioning() {
            return false;
        }
        let count = self.slides.len();
        let index = (self.current + count - 1) % count;
        self.go_to_slide(doc, index)
    }

    /// Navigate to slide `index`
    ///
    /// Dropped (returning false) while a transition is running, when `index`
    /// is already current, or when `index` is out of range. An accepted
    /// request updates the index immediately; the guard clears once the
    /// transition duration has elapsed.
    pub fn go_to_slide(&mut self, doc: &mut Document, index: usize) -> bool {
        if self.is_inert() {
            return false;
        }
        if self.is_transitioning() {
            trace!(index, "navigation dropped, transition in progress");
            return false;
        }
        if index >= self.slides.len() {
            warn!(
                index,
                slides = self.slides.len(),
                "ignoring navigation to a slide that does not exist"
            );
            return false;
        }
        if index == self.current {
            return false;
        }

        let from = self.track_offset();
        self.guard.send(NAVIGATE);
        self.current = index;

        let target = self.target_offset(doc);
        let speed = self.config.transition_speed_ms;
        doc.set_style(
            self.track,
            "transition",
            &css_transition("transform", speed, self.config.easing),
        );
        doc.set_style(self.track, "transform", &translate_x(target));
        self.offset = target;
        self.motion = Some(Transition::new(
            from,
            target,
            self.timers.now(),
            speed,
            self.config.easing,
        ));

        self.controls.sync_dots(doc, index);

        // Manual navigation resets the autoplay cadence
        if self.autoplay_timer.is_some() {
            self.start_autoplay();
        }

        self.transition_timer = Some(self.timers.set_timeout(speed, CarouselTask::TransitionEnd));

        debug!(slide = index, offset = target, "carousel navigating");
        true
    }

    // =========================================================================
    // Autoplay
    // =========================================================================

    /// Start (or restart) the autoplay timer
    ///
    /// Any running autoplay timer is cancelled first, so at most one is ever
    /// scheduled.
    pub fn start_autoplay(&mut self) {
        if self.is_inert() {
            return;
        }
        if let Some(id) = self.autoplay_timer.take() {
            self.timers.clear(id);
        }
        self.autoplay_timer = Some(
            self.timers
                .set_interval(self.config.autoplay_speed_ms, CarouselTask::AutoplayTick),
        );
        trace!(every_ms = self.config.autoplay_speed_ms, "autoplay started");
    }

    /// Cancel the autoplay timer; [`start_autoplay`](Self::start_autoplay) resumes it
    pub fn pause_autoplay(&mut self) {
        if let Some(id) = self.autoplay_timer.take() {
            self.timers.clear(id);
            trace!("autoplay paused");
        }
    }

    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay_timer.is_some()
    }

    /// Number of autoplay timers on the queue (never more than one)
    pub fn autoplay_timer_count(&self) -> usize {
        self.timers
            .tasks()
            .filter(|(_, task)| **task == CarouselTask::AutoplayTick)
            .count()
    }

    // =========================================================================
    // Host integration
    // =========================================================================

    /// Deliver a host event
    ///
    /// A resize updates the document viewport from the event before the
    /// track is repositioned.
    pub fn handle_event(&mut self, doc: &mut Document, event: &HostEvent) -> EventResponse {
        if let HostEvent::Resize { width, .. } = *event {
            doc.set_viewport_width(width);
        }
        if self.is_inert() {
            return EventResponse::IGNORED;
        }

        match *event {
            HostEvent::Click(el) => match self.controls.action_for(el) {
                Some(ControlAction::Previous) => {
                    self.previous(doc);
                    EventResponse::handled_prevent_default()
                }
                Some(ControlAction::Next) => {
                    self.next(doc);
                    EventResponse::handled_prevent_default()
                }
                Some(ControlAction::GoTo(index)) => {
                    self.go_to_slide(doc, index);
                    EventResponse::handled()
                }
                None => EventResponse::IGNORED,
            },
            HostEvent::PointerEnter(el) if el == self.container && self.pauses_on_hover() => {
                self.pause_autoplay();
                EventResponse::handled()
            }
            HostEvent::PointerLeave(el) if el == self.container && self.pauses_on_hover() => {
                self.start_autoplay();
                EventResponse::handled()
            }
            HostEvent::Resize { .. } => {
                self.reposition(doc);
                EventResponse::handled()
            }
            _ => EventResponse::IGNORED,
        }
    }

    /// Move the carousel clock to `now_ms`, running every task that falls due
    pub fn advance_to(&mut self, doc: &mut Document, now_ms: u64) {
        while let Some((id, task)) = self.timers.pop_due(now_ms) {
            self.run_task(doc, id, task);
        }
        self.timers.advance_to(now_ms);
    }

    fn run_task(&mut self, doc: &mut Document, id: TimerId, task: CarouselTask) {
        match task {
            CarouselTask::SettleLayout => self.reposition(doc),
            CarouselTask::AutoplayTick => {
                if self.autoplay_timer == Some(id) {
                    trace!(at_ms = self.timers.now(), "autoplay tick");
                    self.next(doc);
                }
            }
            CarouselTask::TransitionEnd => {
                if self.transition_timer == Some(id) {
                    self.transition_timer = None;
                    self.guard.send(SETTLED);
                    debug!(slide = self.current, "carousel transition finished");
                }
            }
        }
    }

    /// Re-apply the current slide's offset against the current container width
    ///
    /// Leaves the index, the guard and any completion timeout alone; a
    /// running transition is retargeted to the recomputed offset.
    fn reposition(&mut self, doc: &mut Document) {
        let target = self.target_offset(doc);
        self.offset = target;
        doc.set_style(self.track, "transform", &translate_x(target));

        let now = self.timers.now();
        if let Some(motion) = self.motion.as_mut() {
            if !motion.is_finished_at(now) {
                motion.retarget(target);
            }
        }
        trace!(slide = self.current, offset = target, "carousel repositioned");
    }

    fn target_offset(&self, doc: &Document) -> f32 {
        -(self.current as f32) * doc.client_width(self.container)
    }

    fn pauses_on_hover(&self) -> bool {
        self.config.autoplay && self.config.pause_on_hover
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn track(&self) -> ElementId {
        self.track
    }

    pub fn slides(&self) -> &[ElementId] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn current_slide(&self) -> usize {
        self.current
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// A carousel without slides does nothing
    pub fn is_inert(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn state(&self) -> CarouselState {
        if self.guard.is(TRANSITIONING) {
            CarouselState::Transitioning
        } else {
            CarouselState::Idle
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.state() == CarouselState::Transitioning
    }

    /// Current carousel clock in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.timers.now()
    }

    /// Number of pending timers of any kind
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Track offset in pixels as rendered right now, mid-transition included
    pub fn track_offset(&self) -> f32 {
        let now = self.timers.now();
        match &self.motion {
            Some(motion) if !motion.is_finished_at(now) => motion.value_at(now),
            _ => self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 800.0;

    fn page(slides: usize) -> Document {
        let mut doc = Document::new(1280.0);
        let root = doc.root();
        let section = doc.build("section").id("projects").append_to(root);
        let container = doc
            .build("div")
            .id("projects-slider-container")
            .width(WIDTH)
            .append_to(section);
        let track = doc.build("div").id("projects-slider").append_to(container);
        for i in 0..slides {
            doc.build("div")
                .class("project-slide")
                .text(&format!("Project {}", i + 1))
                .append_to(track);
        }
        doc
    }

    fn manual() -> CarouselOptions {
        CarouselOptions::new().autoplay(false)
    }

    fn mount(doc: &mut Document, options: &CarouselOptions) -> Carousel {
        Carousel::mount_with(doc, options).unwrap().unwrap()
    }

    #[test]
    fn test_mount_scans_slides() {
        let mut doc = page(4);
        let carousel = mount(&mut doc, &manual());
        assert_eq!(carousel.slide_count(), 4);
        assert_eq!(carousel.current_slide(), 0);
        assert_eq!(carousel.state(), CarouselState::Idle);
        for &slide in carousel.slides() {
            assert_eq!(doc.style(slide, "min-width"), Some("100%"));
        }
    }

    #[test]
    fn test_missing_host_is_not_present() {
        let mut doc = Document::new(1280.0);
        assert!(Carousel::mount_with(&mut doc, &manual()).unwrap().is_none());

        // container without track
        let root = doc.root();
        doc.build("div")
            .id("projects-slider-container")
            .append_to(root);
        assert!(Carousel::mount_with(&mut doc, &manual()).unwrap().is_none());

        // track outside the container
        doc.build("div").id("projects-slider").append_to(root);
        assert!(Carousel::mount_with(&mut doc, &manual()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let mut doc = page(2);
        let result = Carousel::mount_with(&mut doc, &CarouselOptions::new().transition_speed(0));
        assert!(result.is_err());
    }

    #[test]
    fn test_go_to_slide_is_idempotent() {
        let mut doc = page(3);
        let mut carousel = mount(&mut doc, &manual());
        let timers = carousel.pending_timers();

        assert!(!carousel.go_to_slide(&mut doc, 0));
        assert_eq!(carousel.state(), CarouselState::Idle);
        assert_eq!(carousel.pending_timers(), timers);
        assert_eq!(doc.style(carousel.track(), "transition"), None);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut doc = page(3);
        let mut carousel = mount(&mut doc, &manual());
        assert!(!carousel.go_to_slide(&mut doc, 3));
        assert!(!carousel.go_to_slide(&mut doc, usize::MAX));
        assert_eq!(carousel.current_slide(), 0);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn test_navigation_applies_transform() {
        let mut doc = page(4);
        let mut carousel = mount(&mut doc, &manual());

        assert!(carousel.go_to_slide(&mut doc, 2));
        let track = carousel.track();
        assert_eq!(doc.style(track, "transform"), Some("translateX(-1600px)"));
        assert_eq!(
            doc.style(track, "transition"),
            Some("transform 500ms ease-in-out")
        );
        assert_eq!(carousel.current_slide(), 2);
        assert!(carousel.is_transitioning());
    }

    #[test]
    fn test_wraparound() {
        let mut doc = page(3);
        let mut carousel = mount(&mut doc, &manual());

        assert!(carousel.previous(&mut doc));
        assert_eq!(carousel.current_slide(), 2);
        carousel.advance_to(&mut doc, 500);

        assert!(carousel.next(&mut doc));
        assert_eq!(carousel.current_slide(), 0);
    }

    #[test]
    fn test_requests_dropped_while_transitioning() {
        let mut doc = page(4);
        let mut carousel = mount(&mut doc, &manual());

        assert!(carousel.next(&mut doc));
        let end = carousel
            .transition_timer
            .and_then(|id| carousel.timers.due_at(id));
        assert_eq!(end, Some(500));

        carousel.advance_to(&mut doc, 200);
        assert!(!carousel.go_to_slide(&mut doc, 3));
        assert!(!carousel.previous(&mut doc));
        assert_eq!(carousel.current_slide(), 1);
        // the completion timeout was not pushed back
        assert_eq!(
            carousel
                .transition_timer
                .and_then(|id| carousel.timers.due_at(id)),
            Some(500)
        );

        carousel.advance_to(&mut doc, 499);
        assert!(carousel.is_transitioning());
        carousel.advance_to(&mut doc, 500);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn test_track_offset_follows_transition() {
        let mut doc = page(2);
        let options = manual().easing(folio_animation::Easing::Linear);
        let mut carousel = mount(&mut doc, &options);
        carousel.advance_to(&mut doc, 1000);

        carousel.next(&mut doc);
        assert_eq!(carousel.track_offset(), 0.0);
        carousel.advance_to(&mut doc, 1250);
        assert_eq!(carousel.track_offset(), -400.0);
        carousel.advance_to(&mut doc, 1500);
        assert_eq!(carousel.track_offset(), -800.0);
    }

    #[test]
    fn test_resize_recomputes_offset() {
        let mut doc = page(3);
        let mut carousel = mount(&mut doc, &manual());
        carousel.go_to_slide(&mut doc, 1);
        carousel.advance_to(&mut doc, 600);

        let container = carousel.container();
        doc.set_width(container, Some(600.0));
        let response = carousel.handle_event(
            &mut doc,
            &HostEvent::Resize {
                width: 600.0,
                height: 900.0,
            },
        );
        assert!(response.handled);
        assert_eq!(carousel.current_slide(), 1);
        assert!(!carousel.is_transitioning());
        assert_eq!(
            doc.style(carousel.track(), "transform"),
            Some("translateX(-600px)")
        );
        assert_eq!(carousel.track_offset(), -600.0);
    }

    #[test]
    fn test_resize_applies_viewport_width() {
        let mut doc = page(3);
        let mut carousel = mount(&mut doc, &manual());
        doc.set_width(carousel.container(), None);
        carousel.go_to_slide(&mut doc, 2);
        carousel.advance_to(&mut doc, 600);

        carousel.handle_event(
            &mut doc,
            &HostEvent::Resize {
                width: 320.0,
                height: 640.0,
            },
        );
        assert_eq!(doc.viewport_width(), 320.0);
        assert_eq!(doc.client_width(carousel.container()), 320.0);
        assert_eq!(
            doc.style(carousel.track(), "transform"),
            Some("translateX(-640px)")
        );
    }

    #[test]
    fn test_resize_mid_transition_keeps_guard() {
        let mut doc = page(3);
        let mut carousel = mount(&mut doc, &manual());
        carousel.go_to_slide(&mut doc, 2);
        carousel.advance_to(&mut doc, 100);

        doc.set_width(carousel.container(), Some(500.0));
        carousel.handle_event(
            &mut doc,
            &HostEvent::Resize {
                width: 500.0,
                height: 900.0,
            },
        );
        assert!(carousel.is_transitioning());
        assert_eq!(carousel.current_slide(), 2);

        carousel.advance_to(&mut doc, 500);
        assert!(!carousel.is_transitioning());
        assert_eq!(carousel.track_offset(), -1000.0);
    }

    #[test]
    fn test_settle_layout_positions_first_slide() {
        let mut doc = page(2);
        let mut carousel = mount(&mut doc, &manual());
        assert_eq!(doc.style(carousel.track(), "transform"), None);
        carousel.advance_to(&mut doc, 99);
        assert_eq!(doc.style(carousel.track(), "transform"), None);
        carousel.advance_to(&mut doc, 100);
        assert_eq!(
            doc.style(carousel.track(), "transform"),
            Some("translateX(0px)")
        );
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn test_clicks_map_to_navigation() {
        let mut doc = page(3);
        let mut carousel = mount(&mut doc, &manual());
        let next = carousel.controls().next_button().unwrap();
        let prev = carousel.controls().prev_button().unwrap();
        let last_dot = carousel.controls().dots()[2];

        let response = carousel.handle_event(&mut doc, &HostEvent::Click(next));
        assert_eq!(response, EventResponse::handled_prevent_default());
        assert_eq!(carousel.current_slide(), 1);
        carousel.advance_to(&mut doc, 500);

        carousel.handle_event(&mut doc, &HostEvent::Click(prev));
        assert_eq!(carousel.current_slide(), 0);
        carousel.advance_to(&mut doc, 1000);

        let response = carousel.handle_event(&mut doc, &HostEvent::Click(last_dot));
        assert_eq!(response, EventResponse::handled());
        assert_eq!(carousel.current_slide(), 2);
        assert_eq!(carousel.controls().active_dot(&doc), Some(2));

        let slide = carousel.slides()[0];
        assert_eq!(
            carousel.handle_event(&mut doc, &HostEvent::Click(slide)),
            EventResponse::IGNORED
        );
    }

    #[test]
    fn test_controls_can_be_hidden() {
        let mut doc = page(3);
        let options = manual().show_arrows(false).show_dots(false);
        let carousel = mount(&mut doc, &options);
        assert!(carousel.controls().nav().is_none());
        assert!(carousel.controls().dots().is_empty());
        assert!(doc.query_class(doc.root(), "slider-dot").is_empty());
    }

    #[test]
    fn test_autoplay_timer_is_singular() {
        let mut doc = page(3);
        let mut carousel = mount(&mut doc, &CarouselOptions::new());
        assert_eq!(carousel.autoplay_timer_count(), 1);

        carousel.start_autoplay();
        carousel.start_autoplay();
        assert_eq!(carousel.autoplay_timer_count(), 1);

        carousel.pause_autoplay();
        assert_eq!(carousel.autoplay_timer_count(), 0);
        assert!(!carousel.is_autoplay_running());
    }

    #[test]
    fn test_manual_navigation_resets_autoplay_cadence() {
        let mut doc = page(3);
        let options = CarouselOptions::new().autoplay_speed(1000);
        let mut carousel = mount(&mut doc, &options);

        carousel.advance_to(&mut doc, 800);
        assert!(carousel.next(&mut doc));
        assert_eq!(carousel.autoplay_timer_count(), 1);

        // the original tick at 1000 is gone; the next one lands at 1800
        carousel.advance_to(&mut doc, 1799);
        assert_eq!(carousel.current_slide(), 1);
        carousel.advance_to(&mut doc, 1800);
        assert_eq!(carousel.current_slide(), 2);
    }

    #[test]
    fn test_hover_ignored_without_autoplay() {
        let mut doc = page(3);
        let mut carousel = mount(&mut doc, &manual());
        let container = carousel.container();
        let response = carousel.handle_event(&mut doc, &HostEvent::PointerLeave(container));
        assert_eq!(response, EventResponse::IGNORED);
        assert!(!carousel.is_autoplay_running());
    }
}
