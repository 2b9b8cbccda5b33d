//! Heading outline pass over rendered page HTML
//!
//! [`build_outline`] scans a page's HTML for `h1` through `h3` headings,
//! gives each one an anchor id when it has none, and returns the
//! rewritten markup together with the heading list in document order.
//! The pass is textual: markup is left byte-for-byte untouched except
//! for inserted `id` attributes, and anything that does not look like a
//! well-formed heading is skipped rather than repaired.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::slug::{anchor_slug, AnchorSet};

static OPEN_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<(h[1-3])\b([^>]*)>").expect("heading open pattern")
});

static CLOSE_TAGS: Lazy<[Regex; 3]> = Lazy::new(|| {
    let close = |level: &str| {
        Regex::new(&format!(r"(?i)</{level}\s*>")).expect("heading close pattern")
    };
    [close("h1"), close("h2"), close("h3")]
});

static ID_ATTR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:^|\s)id\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>'"]+))"#)
        .expect("id attribute pattern")
});

static INNER_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));

/// One heading found by the outline pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingAnchor {
    /// Heading level, 1 through 3
    pub level: u8,
    /// Text content with inner markup stripped and entities decoded
    pub text: String,
    /// Anchor id, pre-existing or generated
    pub id: String,
    /// Whether the pass generated the id
    pub generated: bool,
}

/// Result of one outline pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    /// Input HTML with generated ids inserted
    pub html: String,
    /// Headings in document order
    pub headings: Vec<HeadingAnchor>,
}

impl Outline {
    /// Check whether the pass found no headings
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// Number of headings found
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.headings.len()
    }
}

/// Scan page HTML for `h1`-`h3` headings and anchor them
///
/// Headings that already carry a non-empty `id` keep it untouched; those
/// ids are not recorded, so a later generated id can collide with them.
/// Generated ids are unique within one call only. Headings with no text
/// content are skipped entirely, and an opening tag with no matching
/// close tag is left alone.
#[must_use]
pub fn build_outline(html: &str) -> Outline {
    let mut out = String::with_capacity(html.len() + 48);
    let mut headings = Vec::new();
    let mut anchors = AnchorSet::new();
    let mut cursor = 0usize;

    for caps in OPEN_TAG.captures_iter(html) {
        let Some(open) = caps.get(0) else { continue };
        let name = caps.get(1).map_or("", |m| m.as_str());
        let attrs = caps.get(2).map_or("", |m| m.as_str());
        let level = heading_level(name);

        let Some(close) = close_tag(html, open.end(), level) else {
            tracing::debug!(level, "unclosed heading tag; leaving markup untouched");
            continue;
        };
        let text = heading_text(&html[open.end()..close.start()]);
        if text.is_empty() {
            continue;
        }

        let existing = existing_id(attrs);
        if let Some(id) = existing.filter(|id| !id.is_empty()) {
            headings.push(HeadingAnchor {
                level,
                text,
                id: id.to_string(),
                generated: false,
            });
            continue;
        }

        let id = anchors.assign(&anchor_slug(&text));
        out.push_str(&html[cursor..open.start()]);
        out.push('<');
        out.push_str(name);
        if existing.is_some() {
            // an empty id attribute is replaced, not duplicated
            out.push_str(&ID_ATTR.replace(attrs, ""));
        } else {
            out.push_str(attrs);
        }
        out.push_str(" id=\"");
        out.push_str(&id);
        out.push_str("\">");
        cursor = open.end();

        headings.push(HeadingAnchor {
            level,
            text,
            id,
            generated: true,
        });
    }

    out.push_str(&html[cursor..]);
    Outline {
        html: out,
        headings,
    }
}

fn heading_level(name: &str) -> u8 {
    name.as_bytes().get(1).map_or(1, |b| b.saturating_sub(b'0'))
}

fn close_tag<'h>(html: &'h str, from: usize, level: u8) -> Option<regex::Match<'h>> {
    let index = usize::from(level.saturating_sub(1)).min(2);
    CLOSE_TAGS[index].find_at(html, from)
}

/// First id attribute value in a tag's attribute span, if any
fn existing_id(attrs: &str) -> Option<&str> {
    let caps = ID_ATTR.captures(attrs)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str())
}

/// Text content of a heading: inner markup stripped, entities decoded,
/// then trimmed
fn heading_text(inner: &str) -> String {
    let stripped = INNER_TAG.replace_all(inner, "");
    decode_entities(&stripped).trim().to_string()
}

/// Decode the handful of entities that show up in backend headings
///
/// Named forms for the XML five plus `&nbsp;`, and numeric decimal and
/// hex references. Anything unrecognized stays literal.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match entity_at(tail) {
            Some((decoded, consumed)) => {
                out.push(decoded);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn entity_at(tail: &str) -> Option<(char, usize)> {
    let end = tail.find(';').filter(|&e| e > 1 && e <= 10)?;
    let name = &tail[1..end];
    let decoded = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse::<u32>().ok()?,
            };
            char::from_u32(value)?
        }
    };
    Some((decoded, end + 1))
}
