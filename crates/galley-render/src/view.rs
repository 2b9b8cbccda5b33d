//! Field view contract
//!
//! A view turns one resolved manifest field into display output. Views
//! never touch the page directly: they receive a [`FieldInput`] prepared
//! by the renderer and return a [`RenderedField`], a plain data
//! description of what to show and which actions to offer. Side effects
//! happen only when an action is dispatched through caller-supplied
//! hooks.

use galley_model::{FaqEntry, FaqMapping};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Everything a view gets to see about one field
///
/// `value` is `None` when the field's path resolved to nothing; views
/// must render an empty state rather than fail.
#[derive(Debug, Clone, Copy)]
pub struct FieldInput<'a> {
    /// Display label, already resolved through the fallback chain
    pub label: &'a str,
    /// Resolved value, if the path found one
    pub value: Option<&'a Value>,
    /// FAQ mapping in effect for this field
    pub mapping: Option<&'a FaqMapping>,
}

/// Display body of a rendered field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldBody {
    /// Plain text content
    Text {
        /// Coerced text, empty when the value was missing
        text: String,
    },
    /// Raw HTML content, passed through without sanitization
    Html {
        /// Markup exactly as the backend produced it
        html: String,
    },
    /// Normalized FAQ rows
    Faq {
        /// Entries in input order
        entries: Vec<FaqEntry>,
    },
}

/// An affordance attached to a rendered field
///
/// Actions are inert data until dispatched through
/// [`ReviewHooks`](crate::hooks::ReviewHooks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FieldAction {
    /// Put text on the clipboard and confirm with a message
    Copy {
        /// Clipboard payload
        text: String,
        /// Confirmation message; `None` means the stock one
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    /// Open markup in a larger view
    Expand {
        /// Dialog title, normally the field label
        title: String,
        /// Markup to show
        html: String,
    },
}

/// One field, rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedField {
    /// Display label
    pub label: String,
    /// Body content
    pub body: FieldBody,
    /// Actions in display order
    pub actions: Vec<FieldAction>,
}

impl RenderedField {
    /// Check whether the body has nothing to show
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match &self.body {
            FieldBody::Text { text } => text.is_empty(),
            FieldBody::Html { html } => html.is_empty(),
            FieldBody::Faq { entries } => entries.is_empty(),
        }
    }
}

/// A renderer for one field tag
///
/// Implement this to add support for new field tags, then register the
/// view under its tag in a
/// [`ViewRegistry`](crate::registry::ViewRegistry).
pub trait FieldView: Send + Sync + 'static {
    /// Render one field into display output
    fn render(&self, input: FieldInput<'_>) -> RenderedField;
}
