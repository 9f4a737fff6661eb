//! Element tree
//!
//! A minimal arena-backed document model. Elements live in a `SlotMap` and
//! are addressed by generational [`ElementId`] handles, so a stale handle
//! simply resolves to `None` instead of aliasing a newer element.
//!
//! The model carries exactly what widgets need from page markup: an id
//! index, class lists, attributes, inline styles, text content and a
//! measured client width.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to an element in a [`Document`]
    pub struct ElementId;
}

/// A single element node
#[derive(Clone, Debug, Default)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: SmallVec<[String; 4]>,
    attributes: IndexMap<String, String>,
    style: IndexMap<String, String>,
    text: Option<String>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    /// Explicit layout width; `None` means "fill the parent"
    width: Option<f32>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Space-separated class list, as it would appear in markup
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Inline style declarations in insertion order (`prop: value; ...`)
    pub fn style_text(&self) -> String {
        self.style
            .iter()
            .map(|(k, v)| format!("{}: {};", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

/// Arena element tree with an id index
#[derive(Debug)]
pub struct Document {
    elements: SlotMap<ElementId, Element>,
    ids: FxHashMap<String, ElementId>,
    root: ElementId,
    viewport_width: f32,
}

impl Document {
    /// Create an empty document with a `body` root and the given viewport width
    pub fn new(viewport_width: f32) -> Self {
        let mut elements = SlotMap::with_key();
        let root = elements.insert(Element::new("body"));
        Self {
            elements,
            ids: FxHashMap::default(),
            root,
            viewport_width: viewport_width.max(0.0),
        }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Update the viewport width
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width.max(0.0);
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Create a detached element
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.elements.insert(Element::new(tag))
    }

    /// Start building an element with a fluent API
    pub fn build(&mut self, tag: &str) -> ElementBuilder<'_> {
        let id = self.create_element(tag);
        ElementBuilder { doc: self, id }
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        self.ids.get(id).copied()
    }

    /// Assign the element's id, replacing any previous one in the index
    ///
    /// Ids are unique: an element that already carries `id` loses it.
    pub fn set_id(&mut self, el: ElementId, id: &str) {
        let Some(element) = self.elements.get_mut(el) else {
            return;
        };
        if let Some(old) = element.id.replace(id.to_string()) {
            if self.ids.get(&old) == Some(&el) {
                self.ids.remove(&old);
            }
        }
        if let Some(previous) = self.ids.insert(id.to_string(), el) {
            if previous != el {
                if let Some(owner) = self.elements.get_mut(previous) {
                    owner.id = None;
                }
            }
        }
    }

    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> bool {
        if parent == child
            || !self.contains(parent)
            || !self.contains(child)
            || self.is_descendant_of(parent, child)
        {
            return false;
        }
        self.detach(child);
        self.elements[parent].children.push(child);
        self.elements[child].parent = Some(parent);
        true
    }

    /// Insert `node` as the sibling immediately after `reference`
    ///
    /// Returns false when `reference` has no parent or sits inside `node`.
    pub fn insert_after(&mut self, reference: ElementId, node: ElementId) -> bool {
        if reference == node || !self.contains(node) || self.is_descendant_of(reference, node) {
            return false;
        }
        let Some(parent) = self.parent(reference) else {
            return false;
        };
        self.detach(node);
        let siblings = &mut self.elements[parent].children;
        let Some(pos) = siblings.iter().position(|&c| c == reference) else {
            return false;
        };
        siblings.insert(pos + 1, node);
        self.elements[node].parent = Some(parent);
        true
    }

    fn detach(&mut self, el: ElementId) {
        if let Some(parent) = self.elements.get_mut(el).and_then(|e| e.parent.take()) {
            if let Some(p) = self.elements.get_mut(parent) {
                p.children.retain(|&c| c != el);
            }
        }
    }

    pub fn parent(&self, el: ElementId) -> Option<ElementId> {
        self.elements.get(el).and_then(|e| e.parent)
    }

    pub fn children(&self, el: ElementId) -> &[ElementId] {
        self.elements
            .get(el)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    /// Whether `el` sits somewhere below `ancestor`
    pub fn is_descendant_of(&self, el: ElementId, ancestor: ElementId) -> bool {
        let mut current = self.parent(el);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.parent(p);
        }
        false
    }

    pub fn next_sibling(&self, el: ElementId) -> Option<ElementId> {
        let parent = self.parent(el)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|&c| c == el)?;
        siblings.get(pos + 1).copied()
    }

    /// Direct children of `parent` carrying `class`, in document order
    pub fn children_with_class(&self, parent: ElementId, class: &str) -> Vec<ElementId> {
        self.children(parent)
            .iter()
            .copied()
            .filter(|&c| self.has_class(c, class))
            .collect()
    }

    /// All descendants of `ancestor` carrying `class`, depth-first in document order
    pub fn query_class(&self, ancestor: ElementId, class: &str) -> Vec<ElementId> {
        let mut found = Vec::new();
        let mut stack: Vec<ElementId> = self.children(ancestor).iter().rev().copied().collect();
        while let Some(el) = stack.pop() {
            if self.has_class(el, class) {
                found.push(el);
            }
            stack.extend(self.children(el).iter().rev().copied());
        }
        found
    }

    pub fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.elements.get(el).is_some_and(|e| e.has_class(class))
    }

    pub fn add_class(&mut self, el: ElementId, class: &str) {
        if let Some(element) = self.elements.get_mut(el) {
            if !element.has_class(class) {
                element.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, el: ElementId, class: &str) {
        if let Some(element) = self.elements.get_mut(el) {
            element.classes.retain(|c| c != class);
        }
    }

    /// Add or remove `class` depending on `on`
    pub fn toggle_class(&mut self, el: ElementId, class: &str, on: bool) {
        if on {
            self.add_class(el, class);
        } else {
            self.remove_class(el, class);
        }
    }

    pub fn set_attribute(&mut self, el: ElementId, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(el) {
            element.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn attribute(&self, el: ElementId, name: &str) -> Option<&str> {
        self.elements.get(el).and_then(|e| e.attribute(name))
    }

    /// Set an inline style property
    pub fn set_style(&mut self, el: ElementId, property: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(el) {
            element.style.insert(property.to_string(), value.to_string());
        }
    }

    pub fn style(&self, el: ElementId, property: &str) -> Option<&str> {
        self.elements.get(el).and_then(|e| e.style(property))
    }

    pub fn set_text(&mut self, el: ElementId, text: &str) {
        if let Some(element) = self.elements.get_mut(el) {
            element.text = Some(text.to_string());
        }
    }

    /// Pin an element to a fixed width (`None` makes it fill its parent again)
    pub fn set_width(&mut self, el: ElementId, width: Option<f32>) {
        if let Some(element) = self.elements.get_mut(el) {
            element.width = width.map(|w| w.max(0.0));
        }
    }

    /// Measured inner width of an element
    ///
    /// Elements without an explicit width fill their parent; the root fills
    /// the viewport. Detached or unknown elements measure zero.
    pub fn client_width(&self, el: ElementId) -> f32 {
        let mut current = el;
        loop {
            let Some(element) = self.elements.get(current) else {
                return 0.0;
            };
            if let Some(width) = element.width {
                return width;
            }
            if current == self.root {
                return self.viewport_width;
            }
            match element.parent {
                Some(parent) => current = parent,
                None => return 0.0,
            }
        }
    }
}

/// Fluent builder returned by [`Document::build`]
pub struct ElementBuilder<'a> {
    doc: &'a mut Document,
    id: ElementId,
}

impl<'a> ElementBuilder<'a> {
    pub fn id(self, id: &str) -> Self {
        self.doc.set_id(self.id, id);
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.doc.add_class(self.id, class);
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        self.doc.set_attribute(self.id, name, value);
        self
    }

    pub fn text(self, text: &str) -> Self {
        self.doc.set_text(self.id, text);
        self
    }

    pub fn width(self, width: f32) -> Self {
        self.doc.set_width(self.id, Some(width));
        self
    }

    /// Append to `parent` and return the new element's handle
    pub fn append_to(self, parent: ElementId) -> ElementId {
        self.doc.append_child(parent, self.id);
        self.id
    }

    /// Finish without attaching the element anywhere
    pub fn finish(self) -> ElementId {
        self.id
    }
}
