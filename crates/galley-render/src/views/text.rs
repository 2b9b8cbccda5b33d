//! Plain text view

use galley_model::plain_text;

use crate::view::{FieldAction, FieldBody, FieldInput, FieldView, RenderedField};

/// View for `text` fields and the fallback for unregistered tags
///
/// Coerces the value to text and offers a single copy action with the
/// stock confirmation message.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextView;

impl FieldView for TextView {
    fn render(&self, input: FieldInput<'_>) -> RenderedField {
        let text = input.value.map(plain_text).unwrap_or_default();
        RenderedField {
            label: input.label.to_string(),
            actions: vec![FieldAction::Copy {
                text: text.clone(),
                message: None,
            }],
            body: FieldBody::Text { text },
        }
    }
}
