//! Browser-backed scroll host for same-page navigation.

use dnavault_core::{Navigation, ScrollHost, Section, navigate};
use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions};

/// Looks anchors up in the live document.
///
/// Without a window or document (e.g. outside a browser) every lookup misses,
/// which turns navigation into a no-op.
pub struct DomViewport {
    document: Option<Document>,
}

impl DomViewport {
    pub fn new() -> Self {
        Self {
            document: web_sys::window().and_then(|w| w.document()),
        }
    }
}

impl Default for DomViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollHost for DomViewport {
    type Target = Element;

    fn find(&self, anchor: &str) -> Option<Element> {
        self.document.as_ref()?.get_element_by_id(anchor)
    }

    fn smooth_scroll(&self, target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Smooth-scroll to an arbitrary element id.
pub fn scroll_to_anchor(anchor: &str) -> Navigation {
    navigate(&DomViewport::new(), anchor)
}

/// Smooth-scroll to a page section.
pub fn scroll_to(section: Section) -> Navigation {
    scroll_to_anchor(section.anchor())
}
