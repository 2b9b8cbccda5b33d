//! Static HTML emission for rendered panels
//!
//! Turns [`RenderedPanel`] and [`RenderedField`] into a plain HTML
//! fragment for previews and exports. Text content is escaped; `html`
//! and FAQ answer bodies are emitted verbatim, matching how the review
//! surface displays them.

use std::fmt::Write as _;

use crate::renderer::RenderedPanel;
use crate::view::{FieldBody, RenderedField};

/// Placeholder shown for text content that resolved to nothing
const EMPTY_MARK: &str = "\u{2014}";

/// Escape text for placement in HTML content or attribute values
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

impl RenderedField {
    /// HTML fragment for this field
    ///
    /// Empty text and empty FAQ lists show an em dash placeholder the
    /// way the review surface does; empty markup stays empty.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::from("<section class=\"field\">");
        let _ = write!(out, "<h4>{}</h4>", escape_text(&self.label));
        match &self.body {
            FieldBody::Text { text } => {
                if text.is_empty() {
                    let _ = write!(out, "<p>{EMPTY_MARK}</p>");
                } else {
                    let _ = write!(out, "<p>{}</p>", escape_text(text));
                }
            }
            FieldBody::Html { html } => {
                let _ = write!(out, "<div class=\"html-preview\">{html}</div>");
            }
            FieldBody::Faq { entries } => {
                if entries.is_empty() {
                    let _ = write!(out, "<p>{EMPTY_MARK}</p>");
                } else {
                    out.push_str("<dl class=\"faq\">");
                    for entry in entries {
                        if entry.question.is_empty() {
                            let _ = write!(out, "<dt>{EMPTY_MARK}</dt>");
                        } else {
                            let _ = write!(out, "<dt>{}</dt>", escape_text(&entry.question));
                        }
                        let _ = write!(out, "<dd>{}</dd>", entry.answer);
                    }
                    out.push_str("</dl>");
                }
            }
        }
        out.push_str("</section>");
        out
    }
}

impl RenderedPanel {
    /// HTML fragment for the whole panel, fields separated by rules
    ///
    /// An empty field list renders nothing beyond the optional title.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if let Some(title) = &self.title {
            let _ = write!(out, "<h3 class=\"panel-title\">{}</h3>", escape_text(title));
        }
        for (index, field) in self.fields.iter().enumerate() {
            if index > 0 {
                out.push_str("<hr>");
            }
            out.push_str(&field.to_html());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::FieldBody;
    use galley_model::FaqEntry;
    use pretty_assertions::assert_eq;

    fn field(label: &str, body: FieldBody) -> RenderedField {
        RenderedField {
            label: label.to_string(),
            body,
            actions: vec![],
        }
    }

    #[test]
    fn escape_covers_the_usual_suspects() {
        assert_eq!(
            escape_text(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_text("plain"), "plain");
    }

    #[test]
    fn text_field_is_escaped() {
        let html = field(
            "Title <script>",
            FieldBody::Text {
                text: "5 > 4 & 3".into(),
            },
        )
        .to_html();
        assert_eq!(
            html,
            "<section class=\"field\"><h4>Title &lt;script&gt;</h4><p>5 &gt; 4 &amp; 3</p></section>"
        );
    }

    #[test]
    fn empty_text_shows_the_placeholder() {
        let html = field("Title", FieldBody::Text { text: String::new() }).to_html();
        assert!(html.contains("<p>\u{2014}</p>"));
    }

    #[test]
    fn html_field_is_verbatim() {
        let html = field(
            "Body",
            FieldBody::Html {
                html: "<p>kept <em>as is</em></p>".into(),
            },
        )
        .to_html();
        assert!(html.contains("<div class=\"html-preview\"><p>kept <em>as is</em></p></div>"));
    }

    #[test]
    fn faq_field_escapes_questions_but_not_answers() {
        let html = field(
            "FAQs",
            FieldBody::Faq {
                entries: vec![FaqEntry::new("Cheaper > elsewhere?", "<p>Often.</p>")],
            },
        )
        .to_html();
        assert!(html.contains("<dt>Cheaper &gt; elsewhere?</dt>"));
        assert!(html.contains("<dd><p>Often.</p></dd>"));
    }

    #[test]
    fn empty_faq_shows_the_placeholder() {
        let html = field("FAQs", FieldBody::Faq { entries: vec![] }).to_html();
        assert!(html.contains("<p>\u{2014}</p>"));
    }

    #[test]
    fn panel_joins_fields_with_rules() {
        let panel = RenderedPanel {
            title: Some("Page 1".into()),
            fields: vec![
                field("A", FieldBody::Text { text: "a".into() }),
                field("B", FieldBody::Text { text: "b".into() }),
            ],
        };
        let html = panel.to_html();
        assert!(html.starts_with("<h3 class=\"panel-title\">Page 1</h3>"));
        assert_eq!(html.matches("<hr>").count(), 1);
        assert_eq!(html.matches("<section class=\"field\">").count(), 2);
    }

    #[test]
    fn empty_panel_renders_nothing_but_the_title() {
        let untitled = RenderedPanel {
            title: None,
            fields: vec![],
        };
        assert_eq!(untitled.to_html(), "");

        let titled = RenderedPanel {
            title: Some("Page 1".into()),
            fields: vec![],
        };
        assert_eq!(titled.to_html(), "<h3 class=\"panel-title\">Page 1</h3>");
    }
}
