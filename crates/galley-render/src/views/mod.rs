//! Built-in field views
//!
//! One view per stock manifest tag:
//! - [`TextView`] for `text`, also the fallback for unknown tags
//! - [`HtmlView`] for `html`
//! - [`FaqView`] for `faq`
//!
//! The backend also emits a `link` tag; it has no dedicated view and
//! renders through the text fallback.

mod faq;
mod html;
mod text;

pub use faq::FaqView;
pub use html::HtmlView;
pub use text::TextView;
