//! Folio Widgets
//!
//! Interactive page components built on the folio host primitives.
//!
//! Currently a single widget: the [`Carousel`], a slide carousel with arrow
//! and dot navigation, autoplay and hover pausing. See the [`carousel`]
//! module for the host markup it expects and how to drive it.

pub mod carousel;

pub use carousel::{
    Carousel, CarouselConfig, CarouselOptions, CarouselState, CarouselTask, ControlAction,
    Controls,
};
