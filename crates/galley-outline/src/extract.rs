//! Title extraction from pasted page content
//!
//! Draft pages start from raw pasted content that may be Markdown, HTML,
//! or plain text. [`extract_h1`] pulls a working title out of whichever
//! of those it gets.

use once_cell::sync::Lazy;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use regex::Regex;

static H1_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1\s*>").expect("h1 block pattern"));

static INNER_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern"));

/// Pull a title out of raw pasted content
///
/// Tries, in order: the first Markdown level-1 heading, the first HTML
/// `<h1>` block with inner markup stripped, and finally the first
/// non-empty line. Empty input gives an empty string.
#[must_use]
pub fn extract_h1(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if let Some(title) = markdown_h1(raw) {
        return title;
    }
    if let Some(title) = html_h1(raw) {
        return title;
    }
    raw.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}

/// First level-1 Markdown heading with non-empty text
fn markdown_h1(raw: &str) -> Option<String> {
    let mut in_h1 = false;
    let mut title = String::new();
    for event in Parser::new(raw) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_h1 = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let trimmed = title.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
                in_h1 = false;
                title.clear();
            }
            Event::Text(text) | Event::Code(text) if in_h1 => title.push_str(&text),
            _ => {}
        }
    }
    None
}

/// First `<h1>` block with non-empty stripped text
fn html_h1(raw: &str) -> Option<String> {
    let caps = H1_BLOCK.captures(raw)?;
    let inner = caps.get(1).map_or("", |m| m.as_str());
    let stripped = INNER_TAG.replace_all(inner, "");
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
