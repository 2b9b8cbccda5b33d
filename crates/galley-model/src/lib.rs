//! Galley document and manifest model
//!
//! Typed shapes for the payloads the formatting backend produces, plus
//! the lookup and normalization primitives the rest of the workspace
//! renders from.
//!
//! # Core Concepts
//!
//! - [`KeyPath`] with [`resolve`] / [`resolve_rooted`]: dot-path lookup
//!   into JSON records, rooted at the synthetic `data` key
//! - [`Manifest`] and [`FieldDescriptor`]: the backend's description of a
//!   formatted page, decoded leniently
//! - [`normalize_faq`]: flattening of the FAQ shapes backends emit
//! - [`FormattedDoc`] / [`FormattedBatch`]: a whole formatting response,
//!   accepting both the current and the legacy results shape
//!
//! Decoding favors degradation over failure: malformed manifests become
//! empty field lists, junk fields are dropped with a debug log, and
//! missing values render as empty rather than erroring.

pub mod error;
pub mod faq;
pub mod field;
pub mod page;
pub mod path;

pub use error::ModelError;
pub use faq::{clip_all, normalize_faq, FaqEntry, FaqMapping, MappingRule};
pub use field::{FieldDescriptor, FieldKind, Manifest, UploadSpec};
pub use page::{
    DocPage, FormattedBatch, FormattedDoc, FormattedPage, Globals, PageFailure, ParsedDoc,
};
pub use path::{plain_text, resolve, resolve_rooted, KeyPath};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
