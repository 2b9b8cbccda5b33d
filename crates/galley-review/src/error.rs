//! Review session errors

use thiserror::Error;

/// Errors surfaced while preparing or decoding review payloads
///
/// The two validation variants carry the exact messages the review
/// screen shows, so callers can display them unchanged.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Format requested before a client was chosen
    #[error("Please select a client.")]
    NoClientSelected,

    /// Format requested while a page still has no content type
    #[error("Please select a content type for every page.")]
    MissingContentType {
        /// Number of the first page without an assignment, when known
        page_number: Option<u32>,
    },

    /// A document URL that does not contain a document id
    #[error("Could not extract document ID from the provided URL.")]
    InvalidDocUrl,

    /// A payload that could not be decoded or encoded
    #[error("invalid payload json: {0}")]
    Json(#[from] serde_json::Error),
}
