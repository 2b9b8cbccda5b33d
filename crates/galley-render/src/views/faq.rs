//! FAQ list view

use galley_model::{clip_all, normalize_faq, FaqEntry};

use crate::view::{FieldAction, FieldBody, FieldInput, FieldView, RenderedField};

/// View for `faq` fields
///
/// Normalizes the raw list through the field's mapping and offers one
/// copy-all action plus a copy action per entry. Non-list values render
/// as an empty FAQ with no actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaqView;

impl FieldView for FaqView {
    fn render(&self, input: FieldInput<'_>) -> RenderedField {
        let entries = input
            .value
            .map_or_else(Vec::new, |value| normalize_faq(value, input.mapping));
        let mut actions = Vec::with_capacity(entries.len() + 1);
        if !entries.is_empty() {
            actions.push(FieldAction::Copy {
                text: clip_all(&entries),
                message: Some("FAQs copied!".to_string()),
            });
        }
        for entry in &entries {
            actions.push(FieldAction::Copy {
                text: entry.clip(),
                message: Some("FAQ copied!".to_string()),
            });
        }
        RenderedField {
            label: input.label.to_string(),
            actions,
            body: FieldBody::Faq { entries },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn entries_get_copy_all_plus_one_copy_each() {
        let value = json!([
            { "question": "Ships fast?", "answer": "Yes." },
            { "q": "Returns?", "a": "Within 30 days." },
        ]);
        let rendered = FaqView.render(FieldInput {
            label: "FAQs",
            value: Some(&value),
            mapping: None,
        });

        let FieldBody::Faq { entries } = &rendered.body else {
            panic!("expected a faq body");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], FaqEntry::new("Ships fast?", "Yes."));

        assert_eq!(rendered.actions.len(), 3);
        assert_eq!(
            rendered.actions[0],
            FieldAction::Copy {
                text: "Q: Ships fast?\nA: Yes.\n\nQ: Returns?\nA: Within 30 days.".into(),
                message: Some("FAQs copied!".into()),
            }
        );
        assert_eq!(
            rendered.actions[1],
            FieldAction::Copy {
                text: "Q: Ships fast?\nA: Yes.".into(),
                message: Some("FAQ copied!".into()),
            }
        );
    }

    #[test]
    fn non_list_value_renders_empty_with_no_actions() {
        let value = json!("not a list");
        let rendered = FaqView.render(FieldInput {
            label: "FAQs",
            value: Some(&value),
            mapping: None,
        });
        assert_eq!(rendered.body, FieldBody::Faq { entries: vec![] });
        assert!(rendered.actions.is_empty());

        let missing = FaqView.render(FieldInput {
            label: "FAQs",
            value: None,
            mapping: None,
        });
        assert!(missing.is_blank());
        assert!(missing.actions.is_empty());
    }
}
