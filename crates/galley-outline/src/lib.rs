//! Galley heading outline support
//!
//! Everything anchor-shaped for rendered page HTML:
//!
//! - [`build_outline`]: scan `h1`-`h3` headings, insert anchor ids, and
//!   report the heading list in document order
//! - [`anchor_slug`], [`slugify`], [`normalize_id`]: the three id
//!   normalizations used across the review flow
//! - [`extract_h1`]: working-title extraction from pasted Markdown,
//!   HTML, or plain text
//!
//! The outline pass is a textual rewrite, not a DOM round-trip: input
//! markup survives byte-for-byte apart from the inserted `id`
//! attributes, and malformed headings are skipped rather than repaired.

pub mod extract;
pub mod outline;
pub mod slug;

pub use extract::extract_h1;
pub use outline::{build_outline, HeadingAnchor, Outline};
pub use slug::{anchor_slug, normalize_id, slugify, AnchorSet};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
