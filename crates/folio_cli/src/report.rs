//! Session reports

use folio_core::Document;
use folio_widgets::{Carousel, CarouselState};
use serde::Serialize;

use crate::session::Action;

/// Outcome of one replayed step
#[derive(Clone, Debug, Serialize)]
pub struct StepRecord {
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: Action,
    pub accepted: bool,
    /// Current slide right after the step
    pub slide: usize,
    pub state: CarouselState,
}

/// Final carousel state after a replay
#[derive(Clone, Debug, Default, Serialize)]
pub struct Report {
    pub mounted: bool,
    pub now_ms: u64,
    pub slide_count: usize,
    pub current_slide: Option<usize>,
    pub state: Option<CarouselState>,
    /// Inline `transform` on the track
    pub transform: Option<String>,
    /// Inline `transition` on the track
    pub transition: Option<String>,
    pub active_dot: Option<usize>,
    pub autoplay_running: bool,
    pub track_offset: Option<f32>,
    pub steps: Vec<StepRecord>,
}

impl Report {
    pub fn not_mounted() -> Self {
        Self::default()
    }

    pub fn capture(doc: &Document, carousel: &Carousel, steps: Vec<StepRecord>) -> Self {
        let track = carousel.track();
        Self {
            mounted: true,
            now_ms: carousel.now_ms(),
            slide_count: carousel.slide_count(),
            current_slide: Some(carousel.current_slide()),
            state: Some(carousel.state()),
            transform: doc.style(track, "transform").map(str::to_string),
            transition: doc.style(track, "transition").map(str::to_string),
            active_dot: carousel.controls().active_dot(doc),
            autoplay_running: carousel.is_autoplay_running(),
            track_offset: Some(carousel.track_offset()),
            steps,
        }
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        match (self.current_slide, self.state) {
            (Some(slide), Some(state)) => format!(
                "slide {}/{} at {}ms ({:?}, autoplay {})",
                slide + 1,
                self.slide_count,
                self.now_ms,
                state,
                if self.autoplay_running { "on" } else { "off" }
            ),
            _ => "carousel not mounted".to_string(),
        }
    }
}
