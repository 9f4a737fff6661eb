//! Folio Animation
//!
//! Easing curves and timed transitions for widget motion.
//!
//! - **Easing**: the CSS timing functions, including arbitrary cubic Béziers
//! - **Transitions**: a value moving between two endpoints over a fixed
//!   duration, sampled against the owner's clock and renderable as CSS

pub mod easing;
pub mod transition;
pub mod values;

pub use easing::Easing;
pub use transition::{css_transition, translate_x, Transition};
pub use values::Interpolate;
