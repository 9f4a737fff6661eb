//! Host events
//!
//! Events the page delivers to a mounted widget. A [`HostEvent::Resize`]
//! carries the new viewport size; the receiving widget applies it to the
//! [`Document`](crate::Document).

use crate::dom::ElementId;

/// Events delivered by the host page
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    /// Primary-button click on an element
    Click(ElementId),
    /// Pointer entered an element's hover region
    PointerEnter(ElementId),
    /// Pointer left an element's hover region
    PointerLeave(ElementId),
    /// Viewport was resized
    Resize {
        /// New viewport width in CSS pixels
        width: f32,
        /// New viewport height in CSS pixels
        height: f32,
    },
}

impl HostEvent {
    /// The element an event is targeted at, if any
    pub fn target(&self) -> Option<ElementId> {
        match *self {
            HostEvent::Click(el) | HostEvent::PointerEnter(el) | HostEvent::PointerLeave(el) => {
                Some(el)
            }
            HostEvent::Resize { .. } => None,
        }
    }
}

/// What a widget did with an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// The widget recognized the event
    pub handled: bool,
    /// The host should suppress its default behaviour (e.g. link navigation)
    pub prevent_default: bool,
}

impl EventResponse {
    pub const IGNORED: Self = Self {
        handled: false,
        prevent_default: false,
    };

    pub fn handled() -> Self {
        Self {
            handled: true,
            prevent_default: false,
        }
    }

    pub fn handled_prevent_default() -> Self {
        Self {
            handled: true,
            prevent_default: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn test_event_target() {
        let mut doc = Document::new(800.0);
        let el = doc.create_element("button");
        assert_eq!(HostEvent::Click(el).target(), Some(el));
        assert_eq!(HostEvent::PointerLeave(el).target(), Some(el));
        assert_eq!(
            HostEvent::Resize {
                width: 10.0,
                height: 10.0
            }
            .target(),
            None
        );
    }

    #[test]
    fn test_response_defaults() {
        assert_eq!(EventResponse::default(), EventResponse::IGNORED);
        assert!(EventResponse::handled_prevent_default().prevent_default);
        assert!(!EventResponse::handled().prevent_default);
    }
}
