//! Step records for the "How We Did It" explainer.
//!
//! These types mirror the embedded `content/steps.json`. They're designed to be:
//!
//! - **Serializable** - loaded once from JSON via serde
//! - **Renderer-agnostic** - content items are a tagged enum, not markup
//! - **Clone-friendly** - components can own a copy of the step they display

use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based identifier of a step. Also its display position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(u32);

impl StepId {
    /// The first step, selected on page load
    pub const FIRST: StepId = StepId(1);

    /// Create a step id. Returns `None` for zero.
    pub fn new(id: u32) -> Option<Self> {
        (id > 0).then_some(StepId(id))
    }

    /// Raw numeric id
    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-based position in the registry
    pub fn index(self) -> usize {
        self.0.saturating_sub(1) as usize
    }

    /// Id at a zero-based position
    pub(crate) fn from_index(index: usize) -> Self {
        StepId(index as u32 + 1)
    }

    /// Following id, without bounds checking against a registry
    pub fn next(self) -> Self {
        StepId(self.0.saturating_add(1))
    }

    /// Preceding id, or `None` for the first step
    pub fn previous(self) -> Option<Self> {
        StepId::new(self.0.saturating_sub(1))
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One renderable item inside a step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentItem {
    /// A paragraph of plain text
    Text {
        /// Paragraph body
        text: String,
    },
    /// An external link rendered as a button
    Link {
        /// Button label
        label: String,
        /// Absolute target URL, opened in a new tab
        href: String,
    },
}

impl ContentItem {
    /// Plain text paragraph
    pub fn text(text: impl Into<String>) -> Self {
        ContentItem::Text { text: text.into() }
    }

    /// External link button
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        ContentItem::Link {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A single step of the explainer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Position of this step, starting at 1
    pub id: StepId,
    /// Heading shown above the content. The closing step has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Items rendered in order
    #[serde(default)]
    pub content: Vec<ContentItem>,
}
