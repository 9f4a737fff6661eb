//! Easing functions
//!
//! The CSS timing functions. Named curves are the standard cubic Béziers
//! from the CSS Easing spec, so a transition sampled here lines up with the
//! same transition rendered by a browser.

use serde::{Deserialize, Serialize};

/// A timing function mapping linear progress to eased progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
    /// `cubic-bezier(x1, y1, x2, y2)`; x coordinates are clamped to `[0, 1]`
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Control points of the curve, `None` for linear
    fn control_points(&self) -> Option<(f32, f32, f32, f32)> {
        match *self {
            Easing::Linear => None,
            Easing::Ease => Some((0.25, 0.1, 0.25, 1.0)),
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                Some((x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2))
            }
        }
    }

    /// Eased progress for linear progress `t` (clamped to `[0, 1]`)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self.control_points() {
            None => t,
            Some(_) if t == 0.0 || t == 1.0 => t,
            Some((x1, y1, x2, y2)) => {
                let s = solve_bezier_x(t, x1, x2);
                bezier(s, y1, y2)
            }
        }
    }

    /// CSS `transition-timing-function` value
    pub fn css(&self) -> String {
        match *self {
            Easing::Linear => "linear".to_string(),
            Easing::Ease => "ease".to_string(),
            Easing::EaseIn => "ease-in".to_string(),
            Easing::EaseOut => "ease-out".to_string(),
            Easing::EaseInOut => "ease-in-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// One coordinate of a cubic Bézier anchored at 0 and 1
fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_derivative(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x coordinate is `x`
fn solve_bezier_x(x: f32, x1: f32, x2: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    // Newton-Raphson converges in a handful of steps for well-behaved curves
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(s, x1, x2) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let d = bezier_derivative(s, x1, x2);
        if d.abs() < EPSILON {
            break;
        }
        s -= err / d;
    }

    // Bisection fallback for flat regions
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;
    for _ in 0..32 {
        let value = bezier(s, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::Ease,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::CubicBezier(0.4, 0.0, 0.2, 1.0),
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-1.0), 0.0);
            assert_eq!(easing.apply(2.0), 1.0);
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let e = Easing::EaseInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-3);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-3);
        // slow start, slow end
        assert!(e.apply(0.1) < 0.1);
        assert!(e.apply(0.9) > 0.9);
    }

    #[test]
    fn test_monotonic() {
        let e = Easing::Ease;
        let mut last = 0.0;
        for i in 1..=100 {
            let v = e.apply(i as f32 / 100.0);
            assert!(v >= last - 1e-4);
            last = v;
        }
    }

    #[test]
    fn test_css_names() {
        assert_eq!(Easing::default().css(), "ease-in-out");
        assert_eq!(Easing::Linear.css(), "linear");
        assert_eq!(
            Easing::CubicBezier(0.4, 0.0, 0.2, 1.0).css(),
            "cubic-bezier(0.4, 0, 0.2, 1)"
        );
    }

    #[test]
    fn test_deserialize_kebab_case() {
        let e: Easing = serde_json::from_str("\"ease-out\"").unwrap();
        assert_eq!(e, Easing::EaseOut);
        let e: Easing = serde_json::from_str(r#"{"cubic-bezier":[0.1,0.2,0.3,0.4]}"#).unwrap();
        assert_eq!(e, Easing::CubicBezier(0.1, 0.2, 0.3, 0.4));
    }
}
