//! Timed transitions
//!
//! A [`Transition`] moves a value from one endpoint to another over a fixed
//! duration. It holds no clock of its own: callers sample it with the time
//! they already track, which keeps it usable from timer-driven widgets.

use crate::easing::Easing;
use crate::values::Interpolate;

/// A value travelling between two endpoints
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<T: Interpolate> {
    from: T,
    to: T,
    start_ms: u64,
    duration_ms: u64,
    easing: Easing,
}

impl<T: Interpolate> Transition<T> {
    pub fn new(from: T, to: T, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing,
        }
    }

    pub fn from(&self) -> &T {
        &self.from
    }

    pub fn to(&self) -> &T {
        &self.to
    }

    pub fn start_ms(&self) -> u64 {
        self.start_ms
    }

    pub fn end_ms(&self) -> u64 {
        self.start_ms.saturating_add(self.duration_ms)
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Linear progress in `[0, 1]` at `now_ms`
    pub fn progress_at(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 || now_ms >= self.end_ms() {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        elapsed as f32 / self.duration_ms as f32
    }

    /// Sampled value at `now_ms`
    pub fn value_at(&self, now_ms: u64) -> T {
        let eased = self.easing.apply(self.progress_at(now_ms));
        self.from.lerp(&self.to, eased)
    }

    pub fn is_finished_at(&self, now_ms: u64) -> bool {
        now_ms >= self.end_ms()
    }

    /// Change the destination without restarting the clock
    pub fn retarget(&mut self, to: T) {
        self.to = to;
    }
}

/// CSS `transition` shorthand, e.g. `transform 500ms ease-in-out`
pub fn css_transition(property: &str, duration_ms: u64, easing: Easing) -> String {
    format!("{} {}ms {}", property, duration_ms, easing.css())
}

/// CSS `transform` value for a horizontal offset in pixels
pub fn translate_x(px: f32) -> String {
    // Avoid rendering `-0px`
    let px = if px == 0.0 { 0.0 } else { px };
    format!("translateX({}px)", px)
}
