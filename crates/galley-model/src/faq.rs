//! FAQ list normalization
//!
//! Backend pages carry FAQ lists in a handful of shapes: `question`/`answer`
//! keys, abbreviated `q`/`a` keys, or client-specific keys described by a
//! manifest mapping. [`normalize_faq`] flattens all of them into
//! [`FaqEntry`] rows for rendering and clipboard export.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::FieldKind;
use crate::path::{plain_text, resolve, KeyPath};

/// A single normalized question/answer pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    /// Question text, empty when absent in every known shape
    pub question: String,
    /// Answer text, may contain HTML markup
    pub answer: String,
}

impl FaqEntry {
    /// Create an entry from owned parts
    #[inline]
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Clipboard form of one entry: `Q: ...` and `A: ...` lines
    #[must_use]
    pub fn clip(&self) -> String {
        format!("Q: {}\nA: {}", self.question, self.answer)
    }
}

/// Clipboard form of a whole FAQ list, entries separated by blank lines
#[must_use]
pub fn clip_all(entries: &[FaqEntry]) -> String {
    entries
        .iter()
        .map(FaqEntry::clip)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Where to find one side of a question/answer pair inside a list item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    /// Declared shape of the mapped value; informational, never dispatched on
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldKind>,
    /// Path into each list item; empty falls back to the conventional keys
    #[serde(default)]
    pub path: KeyPath,
}

impl MappingRule {
    /// Rule reading the given item path
    #[inline]
    pub fn at(path: impl Into<KeyPath>) -> Self {
        Self {
            kind: None,
            path: path.into(),
        }
    }
}

/// Manifest mapping describing client-specific FAQ item keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqMapping {
    /// Rule for the question side
    #[serde(default)]
    pub question: MappingRule,
    /// Rule for the answer side
    #[serde(default)]
    pub answer: MappingRule,
}

impl FaqMapping {
    /// Mapping with explicit question and answer item paths
    #[inline]
    pub fn new(question: impl Into<KeyPath>, answer: impl Into<KeyPath>) -> Self {
        Self {
            question: MappingRule::at(question),
            answer: MappingRule::at(answer),
        }
    }
}

/// Normalize a raw FAQ value into question/answer rows
///
/// Non-array input (including `null` and missing values passed as `null`)
/// yields an empty list. Each item is read through the mapping's path
/// first, then the conventional `question`/`q` (resp. `answer`/`a`) keys;
/// the first present, non-null value wins and is coerced to text. Items
/// matching nothing become entries with empty strings, so row count and
/// order always mirror the input list.
#[must_use]
pub fn normalize_faq(raw: &Value, mapping: Option<&FaqMapping>) -> Vec<FaqEntry> {
    let Some(list) = raw.as_array() else {
        return Vec::new();
    };

    let question_path = mapped_path(mapping.map(|m| &m.question), "question");
    let answer_path = mapped_path(mapping.map(|m| &m.answer), "answer");

    list.iter()
        .map(|item| FaqEntry {
            question: first_present(item, question_path, &["question", "q"]),
            answer: first_present(item, answer_path, &["answer", "a"]),
        })
        .collect()
}

/// Mapped item path, or the conventional key when the rule is absent or empty
fn mapped_path<'m>(rule: Option<&'m MappingRule>, conventional: &'m str) -> &'m str {
    rule.map(|r| r.path.as_str())
        .filter(|p| !p.is_empty())
        .unwrap_or(conventional)
}

/// First present, non-null value: mapped path first, then fallback keys
fn first_present(item: &Value, mapped: &str, fallbacks: &[&str]) -> String {
    if let Some(value) = resolve(item, mapped) {
        if !value.is_null() {
            return plain_text(value);
        }
    }
    for key in fallbacks {
        if let Some(value) = item.get(key) {
            if !value.is_null() {
                return plain_text(value);
            }
        }
    }
    String::new()
}
