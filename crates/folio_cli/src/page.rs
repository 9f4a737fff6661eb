//! Portfolio page markup
//!
//! Builds the document the portfolio's project section renders, and prints
//! documents back out as an indented outline.

use folio_core::{Document, ElementId};
use folio_widgets::{CarouselConfig, CarouselOptions};
use serde::{Deserialize, Serialize};

/// Id of the section whose presence enables the carousel
pub const PROJECTS_SECTION: &str = "projects";

/// Shape of the generated page
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PageSpec {
    /// Number of project slides in the track
    pub slides: usize,
    /// Viewport width in CSS pixels
    pub width: f32,
    /// Viewport height in CSS pixels
    pub height: f32,
    /// Fixed container width; the container fills the viewport when unset
    pub container_width: Option<f32>,
    /// Render the projects section at all
    pub projects_section: bool,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            slides: 4,
            width: 1200.0,
            height: 800.0,
            container_width: None,
            projects_section: true,
        }
    }
}

/// Build the portfolio page
pub fn build(spec: &PageSpec) -> Document {
    let mut doc = Document::new(spec.width);
    let root = doc.root();
    doc.build("header").class("site-header").append_to(root);

    if spec.projects_section {
        let config = CarouselConfig::default();
        let section = doc
            .build("section")
            .id(PROJECTS_SECTION)
            .class("projects")
            .append_to(root);
        doc.build("h2")
            .class("section-title")
            .text("Projects")
            .append_to(section);

        let container = doc
            .build("div")
            .id(&config.container_id)
            .class("slider-container")
            .append_to(section);
        if let Some(width) = spec.container_width {
            doc.set_width(container, Some(width));
        }

        let track = doc
            .build("div")
            .id(&config.track_id)
            .class("slider")
            .append_to(container);
        for i in 0..spec.slides {
            let slide = doc
                .build("div")
                .class(&config.slide_class)
                .append_to(track);
            doc.build("h3")
                .text(&format!("Project {}", i + 1))
                .append_to(slide);
        }
    }

    doc.build("footer").class("site-footer").append_to(root);
    doc
}

/// Whether the page carries a projects section
pub fn has_projects(doc: &Document) -> bool {
    doc.get_element_by_id(PROJECTS_SECTION).is_some()
}

/// Options the portfolio page mounts its carousel with
pub fn portfolio_options() -> CarouselOptions {
    CarouselOptions::new()
        .autoplay(true)
        .autoplay_speed(6000)
        .pause_on_hover(true)
        .show_dots(true)
        .show_arrows(true)
}

/// Render the document as an indented outline, one element per line
pub fn outline(doc: &Document) -> String {
    let mut out = String::new();
    write_outline(doc, doc.root(), 0, &mut out);
    out
}

fn write_outline(doc: &Document, el: ElementId, depth: usize, out: &mut String) {
    let Some(element) = doc.element(el) else {
        return;
    };

    out.push_str(&"  ".repeat(depth));
    out.push_str(element.tag());
    if let Some(id) = element.id() {
        out.push('#');
        out.push_str(id);
    }
    for class in element.classes() {
        out.push('.');
        out.push_str(class);
    }
    if let Some(label) = element.attribute("aria-label") {
        out.push_str(&format!(" [aria-label=\"{}\"]", label));
    }
    let style = element.style_text();
    if !style.is_empty() {
        out.push_str(&format!(" {{{}}}", style));
    }
    if let Some(text) = element.text() {
        out.push_str(&format!(" \"{}\"", text));
    }
    out.push('\n');

    for &child in element.children() {
        write_outline(doc, child, depth + 1, out);
    }
}
