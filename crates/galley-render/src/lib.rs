//! Galley field rendering
//!
//! Turns a manifest plus a page data record into display output, the
//! way the review surface shows formatted pages.
//!
//! # Core Concepts
//!
//! - [`FieldView`]: trait rendering one field tag; stock views cover
//!   `text`, `html`, and `faq`
//! - [`ViewRegistry`]: tag-to-view lookup with an immutable process-wide
//!   default; customize by merging overrides, not by mutation
//! - [`FieldRenderer`]: resolves paths, dispatches views, and assembles
//!   [`RenderedPanel`]s; unknown tags fall back to text
//! - [`ReviewHooks`]: the seam where clipboard and dialog side effects
//!   live, fed by [`FieldAction::dispatch`]
//!
//! # Example
//!
//! ```rust,ignore
//! use galley_render::FieldRenderer;
//!
//! let renderer = FieldRenderer::new();
//! let panel = renderer.render_page(&page, 0);
//! println!("{}", panel.to_html());
//! ```

pub mod hooks;
pub mod preview;
pub mod registry;
pub mod renderer;
pub mod view;
pub mod views;

pub use hooks::{NoopHooks, ReviewHooks, DEFAULT_COPY_MESSAGE};
pub use preview::escape_text;
pub use registry::ViewRegistry;
pub use renderer::{FieldRenderer, RenderedPanel};
pub use view::{FieldAction, FieldBody, FieldInput, FieldView, RenderedField};
pub use views::{FaqView, HtmlView, TextView};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
