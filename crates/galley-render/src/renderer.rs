//! Field and panel rendering
//!
//! [`FieldRenderer`] drives the pipeline: resolve the field's path
//! against the page data, pick the view for its tag, and let the view
//! produce display output. Fields with unknown tags render through the
//! text view; nothing here ever fails on malformed input.

use galley_model::{resolve_rooted, FieldDescriptor, FormattedPage, Manifest};
use serde_json::Value;

use crate::registry::ViewRegistry;
use crate::view::{FieldInput, FieldView, RenderedField};
use crate::views::TextView;

static TEXT_FALLBACK: TextView = TextView;

/// Renders manifest fields through a view registry
#[derive(Debug, Clone)]
pub struct FieldRenderer {
    registry: ViewRegistry,
}

impl Default for FieldRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRenderer {
    /// Renderer over the process-wide default registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: ViewRegistry::global().clone(),
        }
    }

    /// Renderer over a custom registry
    ///
    /// Build one with [`ViewRegistry::merged`] to override or extend the
    /// stock views for a single rendering pass.
    #[must_use]
    pub fn with_registry(registry: ViewRegistry) -> Self {
        Self { registry }
    }

    /// The registry this renderer dispatches through
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    /// Render one field against a page's data record
    ///
    /// The path resolves against the synthetic `data` root; a path that
    /// resolves to nothing renders the view's empty state. A tag with no
    /// registered view falls back to plain text with a debug log.
    #[must_use]
    pub fn render_field(&self, field: &FieldDescriptor, data: &Value) -> RenderedField {
        let value = resolve_rooted(data, field.path.as_str());
        let view: &dyn FieldView = match self.registry.get(field.kind.as_str()) {
            Some(view) => view,
            None => {
                tracing::debug!(
                    tag = field.kind.as_str(),
                    "no view registered for tag; falling back to text"
                );
                &TEXT_FALLBACK
            }
        };
        view.render(FieldInput {
            label: field.display_label(),
            value,
            mapping: field.effective_mapping(),
        })
    }

    /// Render a whole manifest against a data record
    #[must_use]
    pub fn render_panel(
        &self,
        manifest: &Manifest,
        data: &Value,
        title: Option<&str>,
    ) -> RenderedPanel {
        RenderedPanel {
            title: title.map(str::to_string),
            fields: manifest
                .iter()
                .map(|field| self.render_field(field, data))
                .collect(),
        }
    }

    /// Render one formatted page, titling the panel from the page
    ///
    /// `position` is the page's 0-based place in its list, used for the
    /// `Page N` title fallback when the page carries no heading.
    #[must_use]
    pub fn render_page(&self, page: &FormattedPage, position: usize) -> RenderedPanel {
        self.render_panel(
            &page.manifest,
            &page.data,
            Some(&page.display_title(position)),
        )
    }
}

/// A page's worth of rendered fields
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderedPanel {
    /// Panel title, when the caller supplied one
    pub title: Option<String>,
    /// Rendered fields in manifest order
    pub fields: Vec<RenderedField>,
}

impl RenderedPanel {
    /// Number of rendered fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the panel has no fields
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterator over the rendered fields
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, RenderedField> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a RenderedPanel {
    type Item = &'a RenderedField;
    type IntoIter = std::slice::Iter<'a, RenderedField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
