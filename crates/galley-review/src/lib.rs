//! Galley review-session operations
//!
//! The state transitions a review session goes through, as pure
//! operations over the model types:
//!
//! - [`catalog`]: client and content-type catalogs, and matching a
//!   document's client name against them
//! - [`edits`]: the per-page edit buffer and its merge back into the
//!   page list
//! - [`request`]: content-type assignments and format-request assembly
//! - [`export`]: download payloads, file names, and upload summaries
//! - [`draft`]: hand-assembled page submissions with derived H1 and
//!   slug suggestions
//!
//! Nothing here performs I/O. Fetching, storage, and display belong to
//! the embedding application; this crate shapes the payloads and
//! enforces the session rules.

pub mod catalog;
pub mod draft;
pub mod edits;
pub mod error;
pub mod export;
pub mod request;

pub use catalog::{
    clients_from_json, content_types_from_json, find_entry, is_safe_name, prettify_label,
    CatalogEntry,
};
pub use draft::{extract_doc_id, DraftBuilder, DraftPage, DraftSource, FaqDraft};
pub use edits::PageEdits;
pub use error::ReviewError;
pub use export::{csv_file_name, pages_json, UploadDetail, UploadSummary, JSON_FILE_NAME};
pub use request::{build_format_request, ContentTypeAssignments, FormatRequest, FormatRequestPage};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
