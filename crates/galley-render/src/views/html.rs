//! Raw HTML view

use galley_model::plain_text;

use crate::view::{FieldAction, FieldBody, FieldInput, FieldView, RenderedField};

/// View for `html` fields
///
/// Passes the markup through untouched and offers copy and expand
/// actions. The markup is trusted backend output and is not sanitized;
/// callers embedding it elsewhere take on that responsibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlView;

impl FieldView for HtmlView {
    fn render(&self, input: FieldInput<'_>) -> RenderedField {
        let html = input.value.map(plain_text).unwrap_or_default();
        RenderedField {
            label: input.label.to_string(),
            actions: vec![
                FieldAction::Copy {
                    text: html.clone(),
                    message: Some("HTML copied!".to_string()),
                },
                FieldAction::Expand {
                    title: input.label.to_string(),
                    html: html.clone(),
                },
            ],
            body: FieldBody::Html { html },
        }
    }
}
