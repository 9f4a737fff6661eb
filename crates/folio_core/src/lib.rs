//! Folio Core
//!
//! Host primitives shared by folio components:
//!
//! - **Document**: an arena element tree with ids, classes, attributes and
//!   inline styles, standing in for the page markup a widget mounts into
//! - **Host Events**: clicks, pointer hover and viewport resizes
//! - **Timers**: a single-threaded queue of deferred single-shot and
//!   recurring tasks driven by an explicit clock
//! - **State Machines**: small transition tables for widget states
//!
//! # Example
//!
//! ```rust
//! use folio_core::{Document, TimerQueue};
//!
//! let mut doc = Document::new(1200.0);
//! let root = doc.root();
//! let panel = doc.build("div").id("panel").class("card").append_to(root);
//! assert_eq!(doc.get_element_by_id("panel"), Some(panel));
//!
//! let mut timers = TimerQueue::new();
//! timers.set_timeout(100, "settle");
//! assert_eq!(timers.pop_due(99), None);
//! assert_eq!(timers.pop_due(100).map(|(_, task)| task), Some("settle"));
//! ```

pub mod dom;
pub mod error;
pub mod events;
pub mod fsm;
pub mod timer;

pub use dom::{Document, Element, ElementBuilder, ElementId};
pub use error::{Error, Result};
pub use events::{EventResponse, HostEvent};
pub use fsm::{EventId, StateId, StateMachine, StateMachineBuilder};
pub use timer::{TimerId, TimerQueue};
