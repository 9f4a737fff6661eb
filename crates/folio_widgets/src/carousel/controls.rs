//! Carousel controls
//!
//! Arrow buttons live inside the container in a `div.slider-nav`; the dot
//! indicators live in a `div.slider-dots` inserted right after the
//! container. Both are plain elements in the host document; clicks on them
//! come back through [`Controls::action_for`].

use folio_core::{Document, ElementId};

/// Class toggled on the dot of the current slide
pub const ACTIVE_CLASS: &str = "active";

/// What a control asks the carousel to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    Previous,
    Next,
    GoTo(usize),
}

/// Elements created for navigating a carousel
#[derive(Clone, Debug, Default)]
pub struct Controls {
    nav: Option<ElementId>,
    prev: Option<ElementId>,
    next: Option<ElementId>,
    dots_container: Option<ElementId>,
    dots: Vec<ElementId>,
}

impl Controls {
    /// Append the previous/next arrow pair to `container`
    pub(crate) fn attach_arrows(&mut self, doc: &mut Document, container: ElementId) {
        let nav = doc.build("div").class("slider-nav").append_to(container);
        let prev = doc
            .build("button")
            .class("slider-arrow")
            .class("prev")
            .attr("aria-label", "Previous slide")
            .text("\u{276E}")
            .append_to(nav);
        let next = doc
            .build("button")
            .class("slider-arrow")
            .class("next")
            .attr("aria-label", "Next slide")
            .text("\u{276F}")
            .append_to(nav);

        self.nav = Some(nav);
        self.prev = Some(prev);
        self.next = Some(next);
    }

    /// Insert one dot per slide right after `container`
    pub(crate) fn attach_dots(
        &mut self,
        doc: &mut Document,
        container: ElementId,
        slide_count: usize,
        current: usize,
    ) {
        let dots_container = doc.build("div").class("slider-dots").finish();
        if !doc.insert_after(container, dots_container) {
            tracing::debug!("slider container is detached, nesting dots inside it");
            doc.append_child(container, dots_container);
        }

        self.dots = (0..slide_count)
            .map(|index| {
                doc.build("button")
                    .class("slider-dot")
                    .attr("aria-label", &format!("Go to slide {}", index + 1))
                    .append_to(dots_container)
            })
            .collect();
        self.dots_container = Some(dots_container);
        self.sync_dots(doc, current);
    }

    /// Mark the dot for `current` active and clear the rest
    pub(crate) fn sync_dots(&self, doc: &mut Document, current: usize) {
        for (index, &dot) in self.dots.iter().enumerate() {
            doc.toggle_class(dot, ACTIVE_CLASS, index == current);
        }
    }

    /// Map a clicked element to a navigation request
    pub fn action_for(&self, el: ElementId) -> Option<ControlAction> {
        if self.prev == Some(el) {
            return Some(ControlAction::Previous);
        }
        if self.next == Some(el) {
            return Some(ControlAction::Next);
        }
        self.dots
            .iter()
            .position(|&dot| dot == el)
            .map(ControlAction::GoTo)
    }

    pub fn nav(&self) -> Option<ElementId> {
        self.nav
    }

    pub fn prev_button(&self) -> Option<ElementId> {
        self.prev
    }

    pub fn next_button(&self) -> Option<ElementId> {
        self.next
    }

    pub fn dots_container(&self) -> Option<ElementId> {
        self.dots_container
    }

    pub fn dots(&self) -> &[ElementId] {
        &self.dots
    }

    /// Index of the dot currently marked active, if exactly one is
    pub fn active_dot(&self, doc: &Document) -> Option<usize> {
        let mut active = self
            .dots
            .iter()
            .enumerate()
            .filter(|(_, dot)| doc.has_class(**dot, ACTIVE_CLASS))
            .map(|(index, _)| index);
        match (active.next(), active.next()) {
            (Some(index), None) => Some(index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> (Document, ElementId, ElementId) {
        let mut doc = Document::new(800.0);
        let root = doc.root();
        let section = doc.build("section").append_to(root);
        let container = doc.build("div").append_to(section);
        (doc, section, container)
    }

    #[test]
    fn test_arrow_markup() {
        let (mut doc, _, container) = host();
        let mut controls = Controls::default();
        controls.attach_arrows(&mut doc, container);

        let nav = controls.nav().unwrap();
        assert_eq!(doc.parent(nav), Some(container));
        let prev = controls.prev_button().unwrap();
        assert_eq!(doc.element(prev).unwrap().class_name(), "slider-arrow prev");
        assert_eq!(doc.attribute(prev, "aria-label"), Some("Previous slide"));
        let next = controls.next_button().unwrap();
        assert_eq!(doc.attribute(next, "aria-label"), Some("Next slide"));
        assert_eq!(doc.children(nav), &[prev, next]);

        assert_eq!(controls.action_for(prev), Some(ControlAction::Previous));
        assert_eq!(controls.action_for(next), Some(ControlAction::Next));
        assert_eq!(controls.action_for(nav), None);
    }

    #[test]
    fn test_dot_markup() {
        let (mut doc, section, container) = host();
        let mut controls = Controls::default();
        controls.attach_dots(&mut doc, container, 3, 0);

        let dots_container = controls.dots_container().unwrap();
        assert_eq!(doc.children(section), &[container, dots_container]);
        assert_eq!(controls.dots().len(), 3);
        assert_eq!(
            doc.attribute(controls.dots()[2], "aria-label"),
            Some("Go to slide 3")
        );
        assert_eq!(controls.active_dot(&doc), Some(0));
        assert_eq!(
            controls.action_for(controls.dots()[1]),
            Some(ControlAction::GoTo(1))
        );

        controls.sync_dots(&mut doc, 2);
        assert_eq!(controls.active_dot(&doc), Some(2));
        assert!(!doc.has_class(controls.dots()[0], ACTIVE_CLASS));
    }

    #[test]
    fn test_dots_nest_when_container_detached() {
        let mut doc = Document::new(800.0);
        let container = doc.create_element("div");
        let mut controls = Controls::default();
        controls.attach_dots(&mut doc, container, 2, 0);
        assert_eq!(
            doc.parent(controls.dots_container().unwrap()),
            Some(container)
        );
    }
}
