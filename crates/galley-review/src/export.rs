//! Export payloads and upload summaries
//!
//! The upload screen offers three exits for a formatted document: a
//! pages-only JSON download, a CSV download whose content the backend
//! assembles, and the upload itself. This module shapes the client
//! side of each: the JSON body, the download file names, and the
//! summary the upload endpoint returns.

use std::fmt;

use serde::{Deserialize, Serialize};

use galley_model::FormattedDoc;

use crate::error::ReviewError;

/// File name for the pages-only JSON download
pub const JSON_FILE_NAME: &str = "pages.json";

/// Encode the pages-only export, pretty-printed
///
/// Only the formatted pages are exported; globals, errors and the rest
/// of the response envelope stay behind.
///
/// # Errors
/// Returns [`ReviewError::Json`] when encoding fails.
pub fn pages_json(doc: &FormattedDoc) -> Result<String, ReviewError> {
    Ok(serde_json::to_string_pretty(&doc.results.pages)?)
}

/// File name for the CSV download, derived from the client id
///
/// An absent or empty client id falls back to `pages.csv`.
#[must_use]
pub fn csv_file_name(client_id: Option<&str>) -> String {
    let client = client_id.filter(|c| !c.is_empty()).unwrap_or("pages");
    format!("{client}.csv")
}

/// Outcome of uploading one page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadDetail {
    /// Position in the source document, 1-based
    #[serde(rename = "pageNumber", skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    /// Upload status, `success` or `failed`
    pub status: String,
    /// Error text for failed uploads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadDetail {
    /// Check whether this page uploaded cleanly
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.status == "success"
    }
}

/// Summary returned by the upload endpoint
///
/// Displays as the report the upload screen shows:
///
/// ```text
/// Upload Complete:
///
/// Uploaded: 5
/// Failed: 1
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadSummary {
    /// Catalog id of the client the pages were uploaded for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Pages uploaded successfully
    pub uploaded: u32,
    /// Pages that failed to upload
    pub failed: u32,
    /// Per-page outcomes
    pub details: Vec<UploadDetail>,
}

impl UploadSummary {
    /// Decode an upload response
    ///
    /// # Errors
    /// Returns [`ReviewError::Json`] when the payload is not JSON.
    pub fn from_json(payload: &str) -> Result<Self, ReviewError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Check whether any page failed to upload
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl fmt::Display for UploadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Upload Complete:\n\nUploaded: {}\nFailed: {}",
            self.uploaded, self.failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn csv_names_follow_the_client() {
        assert_eq!(csv_file_name(Some("georges_cameras")), "georges_cameras.csv");
        assert_eq!(csv_file_name(Some("")), "pages.csv");
        assert_eq!(csv_file_name(None), "pages.csv");
    }

    #[test]
    fn pages_json_exports_pages_only() {
        let doc = FormattedDoc::from_json(
            r#"{
                "client_id": "georges_cameras",
                "globals": { "clientName": "Georges Cameras" },
                "results": {
                    "pages": [ { "pageNumber": 1, "data": { "metaTitle": "A" } } ],
                    "errors": [ { "pageNumber": 2, "error": "boom" } ]
                }
            }"#,
        )
        .unwrap();

        let exported = pages_json(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&exported).unwrap();
        assert_eq!(
            value,
            json!([ { "pageNumber": 1, "data": { "metaTitle": "A" } } ])
        );
        // pretty-printed with two-space indentation
        assert!(exported.contains("\n  {"));
    }

    #[test]
    fn summary_decodes_and_displays() {
        let summary = UploadSummary::from_json(
            r#"{
                "client_id": "georges_cameras",
                "uploaded": 5,
                "failed": 1,
                "details": [
                    { "pageNumber": 1, "status": "success" },
                    { "pageNumber": 2, "status": "failed", "error": "No formatter found for brand_page" }
                ]
            }"#,
        )
        .unwrap();

        assert!(summary.has_failures());
        assert!(summary.details[0].succeeded());
        assert!(!summary.details[1].succeeded());
        assert_eq!(
            summary.to_string(),
            "Upload Complete:\n\nUploaded: 5\nFailed: 1"
        );
    }
}
