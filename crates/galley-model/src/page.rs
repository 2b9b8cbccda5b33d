//! Document and page payload shapes
//!
//! Two stages of the pipeline meet here. [`DocPage`] is an interpreted
//! document page before formatting: loosely structured, camelCase keys,
//! whatever the interpreter extracted. [`FormattedPage`] is the backend's
//! formatting output: a data record plus the manifest describing it.
//! [`FormattedDoc`] wraps a whole formatting response and absorbs both
//! result shapes the backend has shipped over time.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::ModelError;
use crate::field::Manifest;
use crate::path::{plain_text, resolve};

/// Document-wide values extracted during interpretation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Globals {
    /// Client display name as written in the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// Client site URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_url: Option<String>,
    /// Page count the document claims to contain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_pages: Option<u32>,
    /// Unrecognized global keys, preserved for export
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One interpreted document page, before formatting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocPage {
    /// Position in the source document, 1-based
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    /// Target URL for the page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    /// Main heading found on the page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_heading: Option<String>,
    /// Title marker from the document structure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_marker: Option<String>,
    /// Meta title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    /// Meta description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// Body markup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_body: Option<String>,
    /// Everything else the interpreter extracted
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DocPage {
    /// Title shown in page lists: heading, then title marker, then a stub
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.page_heading
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.title_marker.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("Untitled")
    }
}

/// An interpreted document: globals plus its segmented pages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedDoc {
    /// Document-wide values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub globals: Option<Globals>,
    /// Segmented pages, in interpreter order
    pub pages: Vec<DocPage>,
}

impl ParsedDoc {
    /// Decode an interpreter response from a JSON string
    ///
    /// # Errors
    /// Returns [`ModelError::Json`] when the payload is not JSON or the
    /// pages array is malformed.
    pub fn from_json(payload: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Decode an interpreter response from an already-parsed JSON value
    ///
    /// # Errors
    /// Returns [`ModelError::Json`] when the shape does not match.
    pub fn from_value(payload: Value) -> Result<Self, ModelError> {
        Ok(serde_json::from_value(payload)?)
    }

    /// Number of segmented pages
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check whether the document segmented into no pages
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages sorted by page number, ascending and stable
    ///
    /// Missing page numbers sort as zero, so unnumbered pages lead in
    /// their original relative order. Review screens list pages in this
    /// order.
    #[must_use]
    pub fn sorted_pages(&self) -> Vec<&DocPage> {
        let mut pages: Vec<&DocPage> = self.pages.iter().collect();
        pages.sort_by_key(|p| p.page_number.unwrap_or(0));
        pages
    }

    /// Look up a page by its exact page number
    #[must_use]
    pub fn page(&self, number: u32) -> Option<&DocPage> {
        self.pages.iter().find(|p| p.page_number == Some(number))
    }
}

/// One formatted page: data record plus its manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattedPage {
    /// Position in the source document, 1-based
    #[serde(rename = "pageNumber", skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    /// Target URL for the page
    #[serde(rename = "pageUrl", skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    /// Content type the page was formatted as
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Whether the backend reported the page as formatted cleanly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok: Option<bool>,
    /// The formatted data record that manifest paths resolve against
    #[serde(skip_serializing_if = "Value::is_null")]
    pub data: Value,
    /// Manifest describing the data record
    #[serde(skip_serializing_if = "manifest_is_vacant")]
    pub manifest: Manifest,
    /// Unrecognized page keys, preserved for export
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn manifest_is_vacant(manifest: &Manifest) -> bool {
    manifest.version.is_none() && manifest.fields.is_empty()
}

impl FormattedPage {
    /// Title shown above the page's field panel
    ///
    /// Prefers a `pageHeading` inside the data record, then one at the
    /// page level, then `Page N` from the page number. A missing or zero
    /// page number falls back to the 0-based `position` plus one.
    #[must_use]
    pub fn display_title(&self, position: usize) -> String {
        let from_data = resolve(&self.data, "pageHeading")
            .map(plain_text)
            .filter(|s| !s.is_empty());
        if let Some(heading) = from_data {
            return heading;
        }
        let from_page = self
            .extra
            .get("pageHeading")
            .map(plain_text)
            .filter(|s| !s.is_empty());
        if let Some(heading) = from_page {
            return heading;
        }
        match self.page_number {
            Some(n) if n != 0 => format!("Page {n}"),
            _ => format!("Page {}", position + 1),
        }
    }
}

/// A page the backend failed to format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageFailure {
    /// Position in the source document, 1-based
    #[serde(rename = "pageNumber", skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    /// Content type the page was being formatted as
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Backend error text
    pub error: String,
    /// Unrecognized keys, preserved for export
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Formatting results: pages that succeeded and pages that failed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormattedBatch {
    /// Successfully formatted pages, in backend order
    #[serde(default)]
    pub pages: Vec<FormattedPage>,
    /// Pages the backend could not format
    #[serde(default)]
    pub errors: Vec<PageFailure>,
}

impl FormattedBatch {
    /// Number of formatted pages
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check whether the batch formatted no pages
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Check whether any page failed
    #[inline]
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Pages sorted by page number, ascending and stable
    ///
    /// Missing page numbers sort as zero, so unnumbered pages lead in
    /// their original relative order.
    #[must_use]
    pub fn sorted_pages(&self) -> Vec<&FormattedPage> {
        let mut pages: Vec<&FormattedPage> = self.pages.iter().collect();
        pages.sort_by_key(|p| p.page_number.unwrap_or(0));
        pages
    }
}

/// A whole formatting response
///
/// The backend has shipped `results` in two shapes: the current
/// `{ "pages": [...], "errors": [...] }` object and a legacy flat array
/// of pages. Deserialization accepts both and always lands on
/// [`FormattedBatch`]; re-serialization always emits the current shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormattedDoc {
    /// Catalog id of the client the document was formatted for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Document-wide values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub globals: Option<Globals>,
    /// Formatting results
    pub results: FormattedBatch,
}

impl FormattedDoc {
    /// Decode a formatting response from a JSON string
    ///
    /// # Errors
    /// Returns [`ModelError::Json`] when the payload is not JSON or the
    /// top-level shape does not match either known results shape.
    pub fn from_json(payload: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Decode a formatting response from an already-parsed JSON value
    ///
    /// # Errors
    /// Returns [`ModelError::Json`] when the shape does not match.
    pub fn from_value(payload: Value) -> Result<Self, ModelError> {
        Ok(serde_json::from_value(payload)?)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ResultsShape {
    Batch(FormattedBatch),
    Legacy(Vec<FormattedPage>),
}

impl From<ResultsShape> for FormattedBatch {
    fn from(shape: ResultsShape) -> Self {
        match shape {
            ResultsShape::Batch(batch) => batch,
            ResultsShape::Legacy(pages) => Self {
                pages,
                errors: Vec::new(),
            },
        }
    }
}

#[derive(Deserialize)]
struct FormattedDocWire {
    #[serde(default)]
    client_id: Option<String>,
    #[serde(default)]
    globals: Option<Globals>,
    #[serde(default)]
    results: Option<ResultsShape>,
}

impl From<FormattedDocWire> for FormattedDoc {
    fn from(wire: FormattedDocWire) -> Self {
        Self {
            client_id: wire.client_id,
            globals: wire.globals,
            results: wire.results.map(FormattedBatch::from).unwrap_or_default(),
        }
    }
}

impl<'de> Deserialize<'de> for FormattedDoc {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        FormattedDocWire::deserialize(deserializer).map(Self::from)
    }
}
