//! Carousel configuration
//!
//! [`CarouselConfig`] is the resolved, immutable option set a carousel runs
//! with. [`CarouselOptions`] is the partial form callers pass to override
//! a subset of the defaults, either in code or from a config file.

use folio_animation::Easing;
use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Resolved carousel options
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Id of the element wrapping the track (hover region, width source)
    pub container_id: String,
    /// Id of the element holding the slide panels
    pub track_id: String,
    /// Class marking slide panels among the track's children
    pub slide_class: String,
    /// Advance automatically
    pub autoplay: bool,
    /// Autoplay interval
    pub autoplay_speed_ms: u64,
    /// Pause autoplay while the pointer is over the container
    pub pause_on_hover: bool,
    /// Duration of one slide transition
    pub transition_speed_ms: u64,
    pub show_dots: bool,
    pub show_arrows: bool,
    /// Delay before the first positioning, letting layout settle
    pub initial_delay_ms: u64,
    /// Timing function of the track transition
    pub easing: Easing,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            container_id: "projects-slider-container".to_string(),
            track_id: "projects-slider".to_string(),
            slide_class: "project-slide".to_string(),
            autoplay: true,
            autoplay_speed_ms: 5000,
            pause_on_hover: true,
            transition_speed_ms: 500,
            show_dots: true,
            show_arrows: true,
            initial_delay_ms: 100,
            easing: Easing::EaseInOut,
        }
    }
}

impl CarouselConfig {
    /// Defaults overridden by whatever `options` sets
    pub fn with_options(mut self, options: &CarouselOptions) -> Self {
        self.apply(options);
        self
    }

    /// Override the fields `options` sets, leaving the rest untouched
    pub fn apply(&mut self, options: &CarouselOptions) {
        fn set<T: Clone>(field: &mut T, value: &Option<T>) {
            if let Some(v) = value {
                *field = v.clone();
            }
        }

        set(&mut self.container_id, &options.container_id);
        set(&mut self.track_id, &options.track_id);
        set(&mut self.slide_class, &options.slide_class);
        set(&mut self.autoplay, &options.autoplay);
        set(&mut self.autoplay_speed_ms, &options.autoplay_speed_ms);
        set(&mut self.pause_on_hover, &options.pause_on_hover);
        set(&mut self.transition_speed_ms, &options.transition_speed_ms);
        set(&mut self.show_dots, &options.show_dots);
        set(&mut self.show_arrows, &options.show_arrows);
        set(&mut self.initial_delay_ms, &options.initial_delay_ms);
        set(&mut self.easing, &options.easing);
    }

    /// Reject option sets a carousel cannot run with
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("container_id", &self.container_id),
            ("track_id", &self.track_id),
            ("slide_class", &self.slide_class),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("{} must not be empty", name)));
            }
        }
        if self.transition_speed_ms == 0 {
            return Err(Error::InvalidConfig(
                "transition_speed_ms must be greater than zero".into(),
            ));
        }
        if self.autoplay && self.autoplay_speed_ms == 0 {
            return Err(Error::InvalidConfig(
                "autoplay_speed_ms must be greater than zero when autoplay is enabled".into(),
            ));
        }
        Ok(())
    }
}

/// Partial carousel options; unset fields keep their defaults
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay_speed_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pause_on_hover: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_speed_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_dots: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_arrows: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_delay_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<Easing>,
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn autoplay(mut self, enabled: bool) -> Self {
        self.autoplay = Some(enabled);
        self
    }

    pub fn autoplay_speed(mut self, ms: u64) -> Self {
        self.autoplay_speed_ms = Some(ms);
        self
    }

    pub fn pause_on_hover(mut self, enabled: bool) -> Self {
        self.pause_on_hover = Some(enabled);
        self
    }

    pub fn transition_speed(mut self, ms: u64) -> Self {
        self.transition_speed_ms = Some(ms);
        self
    }

    pub fn show_dots(mut self, show: bool) -> Self {
        self.show_dots = Some(show);
        self
    }

    pub fn show_arrows(mut self, show: bool) -> Self {
        self.show_arrows = Some(show);
        self
    }

    pub fn initial_delay(mut self, ms: u64) -> Self {
        self.initial_delay_ms = Some(ms);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Point the carousel at different host markup
    pub fn selectors(mut self, container_id: &str, track_id: &str, slide_class: &str) -> Self {
        self.container_id = Some(container_id.to_string());
        self.track_id = Some(track_id.to_string());
        self.slide_class = Some(slide_class.to_string());
        self
    }
}
