//! Draft page assembly
//!
//! Besides reviewing interpreted documents, an editor can hand-build a
//! single page submission from pasted content, a document URL, or an
//! uploaded file. [`DraftBuilder`] accumulates that form state and
//! derives the suggestions the intake screen shows: a working H1
//! pulled out of the raw content and a slug derived from the title.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use galley_outline::{extract_h1, slugify};

use crate::error::ReviewError;

static DOC_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/document/d/([a-zA-Z0-9_-]+)").expect("document id pattern"));

/// Pull the document id out of a document URL
///
/// # Errors
/// Returns [`ReviewError::InvalidDocUrl`] when the URL carries no
/// `/document/d/<id>` segment.
pub fn extract_doc_id(url: &str) -> Result<String, ReviewError> {
    DOC_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_owned())
        .ok_or(ReviewError::InvalidDocUrl)
}

/// Where a draft's raw content came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftSource {
    /// Pasted into the intake form
    #[default]
    Paste,
    /// Fetched from a document URL
    Url,
    /// Read from an uploaded file
    File,
}

/// One FAQ row of the intake form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqDraft {
    /// Question text
    pub q: String,
    /// Answer text
    pub a: String,
}

impl FaqDraft {
    /// Build a row from parts
    pub fn new(q: impl Into<String>, a: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            a: a.into(),
        }
    }

    /// Check whether both sides are blank
    ///
    /// Blank rows are dropped on build; a row with either side filled
    /// in survives.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.q.trim().is_empty() && self.a.trim().is_empty()
    }
}

/// A hand-assembled page submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftPage {
    /// Where the raw content came from
    pub source: DraftSource,
    /// Document URL, when the source is one
    pub doc_url: String,
    /// Page title, falling back to the working H1
    pub title: String,
    /// Working H1
    pub h1: String,
    /// URL slug
    pub slug: String,
    /// Meta title
    pub meta_title: String,
    /// Meta description
    pub meta_description: String,
    /// Tags, in the order they were added
    pub tags: Vec<String>,
    /// FAQ rows with at least one side filled in
    pub faqs: Vec<FaqDraft>,
    /// Raw pasted or uploaded content
    pub raw: String,
}

/// Accumulates intake form state and derives its suggestions
#[derive(Debug, Clone, Default)]
pub struct DraftBuilder {
    source: DraftSource,
    doc_url: String,
    title: String,
    h1: String,
    slug: String,
    meta_title: String,
    meta_description: String,
    tags: Vec<String>,
    faqs: Vec<FaqDraft>,
    raw: String,
}

impl DraftBuilder {
    /// New, empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set where the raw content came from
    #[must_use]
    pub fn with_source(mut self, source: DraftSource) -> Self {
        self.source = source;
        self
    }

    /// Set the document URL
    #[must_use]
    pub fn with_doc_url(mut self, doc_url: impl Into<String>) -> Self {
        self.doc_url = doc_url.into();
        self
    }

    /// Set an explicit title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set an explicit H1, overriding the suggestion
    #[must_use]
    pub fn with_h1(mut self, h1: impl Into<String>) -> Self {
        self.h1 = h1.into();
        self
    }

    /// Set an explicit slug, overriding the suggestion
    #[must_use]
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Set the meta title
    #[must_use]
    pub fn with_meta_title(mut self, meta_title: impl Into<String>) -> Self {
        self.meta_title = meta_title.into();
        self
    }

    /// Set the meta description
    #[must_use]
    pub fn with_meta_description(mut self, meta_description: impl Into<String>) -> Self {
        self.meta_description = meta_description.into();
        self
    }

    /// Set the raw content
    #[must_use]
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }

    /// Add a tag, trimmed; blanks and exact duplicates are ignored
    #[must_use]
    pub fn add_tag(mut self, tag: &str) -> Self {
        let tag = tag.trim();
        if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_owned());
        }
        self
    }

    /// Add an FAQ row; blank rows are filtered on build
    #[must_use]
    pub fn add_faq(mut self, q: impl Into<String>, a: impl Into<String>) -> Self {
        self.faqs.push(FaqDraft::new(q, a));
        self
    }

    /// The working H1: the explicit one, else extracted from the raw
    /// content
    #[must_use]
    pub fn suggested_h1(&self) -> String {
        if self.h1.is_empty() {
            extract_h1(&self.raw)
        } else {
            self.h1.clone()
        }
    }

    /// The working slug: the explicit one, else a slug of the title or
    /// the working H1
    #[must_use]
    pub fn suggested_slug(&self) -> String {
        if !self.slug.is_empty() {
            return self.slug.clone();
        }
        let basis = if self.title.is_empty() {
            self.suggested_h1()
        } else {
            self.title.clone()
        };
        slugify(&basis)
    }

    /// Produce the submission payload
    ///
    /// The title falls back to the working H1, suggestions are baked
    /// in, and blank FAQ rows are dropped.
    #[must_use]
    pub fn build(self) -> DraftPage {
        let h1 = self.suggested_h1();
        let slug = self.suggested_slug();
        let title = if self.title.is_empty() {
            h1.clone()
        } else {
            self.title
        };
        DraftPage {
            source: self.source,
            doc_url: self.doc_url,
            title,
            h1,
            slug,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            tags: self.tags,
            faqs: self.faqs.into_iter().filter(|f| !f.is_blank()).collect(),
            raw: self.raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn doc_ids_extract() {
        let id = extract_doc_id("https://docs.google.com/document/d/1aB-c_9/edit#heading=h.x")
            .unwrap();
        assert_eq!(id, "1aB-c_9");
        assert!(matches!(
            extract_doc_id("https://example.com/spreadsheet/d/1aB"),
            Err(ReviewError::InvalidDocUrl)
        ));
    }

    #[test]
    fn suggestions_derive_from_raw_content() {
        let builder = DraftBuilder::new().with_raw("# Digital Cameras\n\nBody text.");
        assert_eq!(builder.suggested_h1(), "Digital Cameras");
        assert_eq!(builder.suggested_slug(), "digital-cameras");
    }

    #[test]
    fn explicit_values_override_suggestions() {
        let builder = DraftBuilder::new()
            .with_raw("# Extracted\n")
            .with_h1("Chosen Heading")
            .with_slug("chosen-slug");
        assert_eq!(builder.suggested_h1(), "Chosen Heading");
        assert_eq!(builder.suggested_slug(), "chosen-slug");
    }

    #[test]
    fn slug_prefers_the_title() {
        let builder = DraftBuilder::new()
            .with_raw("# From Raw\n")
            .with_title("George's Cameras");
        assert_eq!(builder.suggested_slug(), "georges-cameras");
    }

    #[test]
    fn build_bakes_in_suggestions() {
        let page = DraftBuilder::new()
            .with_source(DraftSource::Paste)
            .with_raw("# Digital Cameras\n\nBody.")
            .build();
        assert_eq!(page.title, "Digital Cameras");
        assert_eq!(page.h1, "Digital Cameras");
        assert_eq!(page.slug, "digital-cameras");
    }

    #[test]
    fn tags_trim_and_deduplicate() {
        let page = DraftBuilder::new()
            .add_tag("  cameras ")
            .add_tag("cameras")
            .add_tag("")
            .add_tag("lenses")
            .build();
        assert_eq!(page.tags, vec!["cameras", "lenses"]);
    }

    #[test]
    fn blank_faq_rows_are_dropped() {
        let page = DraftBuilder::new()
            .add_faq("Ships fast?", "Yes.")
            .add_faq("  ", "")
            .add_faq("", "Answer only.")
            .build();
        assert_eq!(
            page.faqs,
            vec![
                FaqDraft::new("Ships fast?", "Yes."),
                FaqDraft::new("", "Answer only."),
            ]
        );
    }

    #[test]
    fn the_wire_shape_is_camel_case() {
        let page = DraftBuilder::new()
            .with_source(DraftSource::File)
            .with_doc_url("https://docs.google.com/document/d/1aB/edit")
            .with_title("Digital Cameras")
            .with_meta_title("Buy Digital Cameras")
            .build();
        let wire = serde_json::to_value(&page).unwrap();
        assert_eq!(wire["source"], json!("file"));
        assert_eq!(wire["docUrl"], json!("https://docs.google.com/document/d/1aB/edit"));
        assert_eq!(wire["metaTitle"], json!("Buy Digital Cameras"));
        assert_eq!(wire["h1"], json!("Digital Cameras"));
    }
}
