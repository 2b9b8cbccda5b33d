//! Testing utilities for the Galley workspace
//!
//! Shared fixtures shaped like real backend payloads: a collection-page
//! manifest, matching page data, and whole formatting responses in both
//! results shapes.

#![allow(missing_docs)]

use galley_model::{DocPage, FormattedDoc, FormattedPage, Manifest};
use serde_json::{json, Value};

/// Manifest for a retail collection page, mirroring what the backend
/// generates for one
pub fn collection_manifest_value() -> Value {
    json!({
        "version": "1.0",
        "fields": [
            { "label": "Page Heading", "path": "data.pageHeading", "type": "text" },
            { "label": "Meta Title", "path": "data.metaTitle", "type": "text",
              "upload": { "mode": "metafield", "metafield": "custom.meta_title",
                          "type": "single_line_text_field" } },
            { "label": "Meta Description", "path": "data.metaDescription", "type": "text",
              "upload": { "mode": "metafield", "metafield": "custom.meta_description",
                          "type": "multi_line_text_field" } },
            { "label": "Body", "path": "data.pageBody", "type": "html" },
            { "label": "FAQs", "path": "data.faq.items", "type": "faq",
              "mapping": { "question": { "type": "text", "path": "q" },
                           "answer": { "type": "html", "path": "a" } },
              "upload": { "mode": "metaobject", "metaobject_type": "faq" } },
            { "label": "Handle", "path": "data.handle", "type": "link" },
        ],
    })
}

pub fn collection_manifest() -> Manifest {
    Manifest::from_value(&collection_manifest_value())
}

/// Data record matching [`collection_manifest`]
pub fn collection_data() -> Value {
    json!({
        "pageHeading": "Digital Cameras",
        "metaTitle": "Buy Digital Cameras Online",
        "metaDescription": "Shop our full range of digital cameras.",
        "pageBody": "<h2>Why Us</h2><p>Fast shipping.</p><h2>Why Us</h2><p>Again.</p>",
        "faq": { "items": [
            { "q": "Ships fast?", "a": "<p>Yes, same day.</p>" },
            { "q": "Warranty?", "a": "<p>Two years.</p>" },
        ] },
        "handle": "digital-cameras",
    })
}

pub fn collection_page() -> FormattedPage {
    page_with(1, collection_data(), collection_manifest_value())
}

pub fn page_with(number: u32, data: Value, manifest: Value) -> FormattedPage {
    serde_json::from_value(json!({
        "pageNumber": number,
        "content_type": "collection",
        "ok": true,
        "data": data,
        "manifest": manifest,
    }))
    .unwrap()
}

/// Formatting response in the current `{pages, errors}` shape
pub fn batch_response_json() -> String {
    json!({
        "client_id": "georges_cameras",
        "globals": {
            "clientName": "Georges Cameras",
            "clientUrl": "https://georges.example",
            "numberOfPages": 3,
        },
        "results": {
            "pages": [
                { "pageNumber": 2, "content_type": "collection",
                  "data": { "metaTitle": "Second" },
                  "manifest": { "fields": [
                      { "label": "Meta Title", "path": "data.metaTitle", "type": "text" } ] } },
                { "pageNumber": 1, "content_type": "collection",
                  "data": collection_data(),
                  "manifest": collection_manifest_value() },
            ],
            "errors": [
                { "pageNumber": 3, "content_type": "collection", "error": "model timeout" },
            ],
        },
    })
    .to_string()
}

/// The same response in the legacy flat-array shape
pub fn legacy_response_json() -> String {
    json!({
        "client_id": "georges_cameras",
        "results": [
            { "pageNumber": 1, "data": collection_data(),
              "manifest": collection_manifest_value() },
            { "pageNumber": 2, "ok": false, "error": "model timeout" },
        ],
    })
    .to_string()
}

pub fn batch_response() -> FormattedDoc {
    FormattedDoc::from_json(&batch_response_json()).unwrap()
}

pub fn doc_pages_value() -> Value {
    json!([
        { "pageNumber": 1, "pageHeading": "Digital Cameras",
          "pageUrl": "https://georges.example/collections/digital-cameras",
          "metaTitle": "Buy Digital Cameras Online",
          "pageBody": "<h2>Why Us</h2><p>Fast shipping.</p>" },
        { "pageNumber": 2, "titleMarker": "film-cameras",
          "pageBody": "<p>No heading here.</p>" },
        { "pageNumber": 3 },
    ])
}

/// Interpreted document pages as the review screen receives them
pub fn doc_pages() -> Vec<DocPage> {
    serde_json::from_value(doc_pages_value()).unwrap()
}

/// Whole interpreter response: globals plus [`doc_pages`]
pub fn parsed_response_json() -> String {
    json!({
        "globals": {
            "clientName": "Georges Cameras",
            "clientUrl": "https://georges.example",
            "numberOfPages": 3,
        },
        "pages": doc_pages_value(),
    })
    .to_string()
}
