//! Dot-separated key paths into JSON records
//!
//! Provides [`KeyPath`] plus the [`resolve`] / [`resolve_rooted`] lookup
//! functions that manifest fields use to address values inside a page's
//! data record.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Dot-separated path addressing a value inside a JSON object tree
///
/// Segments are split on `.` only; there is no escaping, so keys that
/// themselves contain a dot cannot be addressed. Array elements cannot be
/// addressed either: lookup walks objects exclusively.
///
/// # Examples
/// - `"metaTitle"` → one segment
/// - `"faq.items"` → `faq`, then `items`
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyPath(String);

impl KeyPath {
    /// Create a path from its dotted string form
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The dotted string form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the path is empty
    ///
    /// Empty paths never resolve to anything.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments
    ///
    /// An empty path has zero segments; `"a."` has two (the second empty).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        if self.0.is_empty() {
            0
        } else {
            self.0.split('.').count()
        }
    }

    /// Iterator over the segments from root to leaf
    #[inline]
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Resolve this path against a record, root-first
    #[inline]
    #[must_use]
    pub fn lookup<'a>(&self, record: &'a Value) -> Option<&'a Value> {
        resolve(record, &self.0)
    }
}

impl Display for KeyPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for KeyPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl AsRef<str> for KeyPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolve a dotted path against a JSON record
///
/// Walks one object level per segment. Returns `None` as soon as a segment
/// is missing or the current value is not an object, and `None` for the
/// empty path. A stored JSON `null` is returned as `Some(&Value::Null)`;
/// distinguishing "absent" from "present but null" is left to the caller.
#[must_use]
pub fn resolve<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    let mut current = record;
    for segment in path.split('.') {
        match current {
            Value::Object(map) => current = map.get(segment)?,
            _ => return None,
        }
    }
    Some(current)
}

/// Resolve a path written against the synthetic `data` root
///
/// Manifest paths are rooted at a `data` key that wraps the page record
/// (`data.metaTitle` rather than `metaTitle`). This strips that root and
/// resolves the remainder against the record directly, without building
/// the wrapper object. `"data"` alone resolves to the whole record; paths
/// not rooted at `data` resolve to `None`.
#[must_use]
pub fn resolve_rooted<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    match path.strip_prefix("data") {
        Some("") => Some(data),
        Some(rest) => resolve(data, rest.strip_prefix('.')?),
        None => None,
    }
}

/// Render a resolved value as plain text
///
/// Strings pass through unquoted; numbers and booleans use their JSON
/// form; `null` becomes the empty string; arrays and objects are
/// serialized as compact JSON. This is the text used for copy payloads
/// and text-field display.
#[must_use]
pub fn plain_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn record() -> Value {
        json!({
            "metaTitle": "Buy Cameras",
            "seo": {
                "description": "All the cameras",
                "score": 87,
                "indexable": true,
            },
            "faq": { "items": [{ "q": "One?", "a": "Yes" }] },
            "empty": null,
        })
    }

    #[test]
    fn resolve_single_segment() {
        let data = record();
        assert_eq!(resolve(&data, "metaTitle"), Some(&json!("Buy Cameras")));
    }

    #[test]
    fn resolve_nested_segments() {
        let data = record();
        assert_eq!(resolve(&data, "seo.description"), Some(&json!("All the cameras")));
        assert_eq!(resolve(&data, "seo.score"), Some(&json!(87)));
    }

    #[test]
    fn resolve_missing_key_is_none() {
        let data = record();
        assert_eq!(resolve(&data, "seo.missing"), None);
        assert_eq!(resolve(&data, "nope"), None);
    }

    #[test]
    fn resolve_empty_path_is_none() {
        let data = record();
        assert_eq!(resolve(&data, ""), None);
    }

    #[test]
    fn resolve_through_non_object_is_none() {
        let data = record();
        // metaTitle is a string; descending further fails
        assert_eq!(resolve(&data, "metaTitle.length"), None);
        // arrays are not traversed
        assert_eq!(resolve(&data, "faq.items.0"), None);
    }

    #[test]
    fn resolve_present_null_is_some_null() {
        let data = record();
        assert_eq!(resolve(&data, "empty"), Some(&Value::Null));
    }

    #[test]
    fn resolve_trailing_dot_is_none() {
        let data = record();
        // "seo." has an empty final segment, which no object contains
        assert_eq!(resolve(&data, "seo."), None);
    }

    #[test]
    fn resolve_on_non_object_record() {
        assert_eq!(resolve(&json!("scalar"), "anything"), None);
        assert_eq!(resolve(&Value::Null, "anything"), None);
    }

    #[test]
    fn rooted_strips_data_prefix() {
        let data = record();
        assert_eq!(
            resolve_rooted(&data, "data.metaTitle"),
            Some(&json!("Buy Cameras"))
        );
        assert_eq!(resolve_rooted(&data, "data.seo.score"), Some(&json!(87)));
    }

    #[test]
    fn rooted_bare_data_is_whole_record() {
        let data = record();
        assert_eq!(resolve_rooted(&data, "data"), Some(&data));
    }

    #[test]
    fn rooted_rejects_other_roots() {
        let data = record();
        assert_eq!(resolve_rooted(&data, "metaTitle"), None);
        assert_eq!(resolve_rooted(&data, "database.host"), None);
        assert_eq!(resolve_rooted(&data, ""), None);
    }

    #[test]
    fn rooted_trailing_dot_is_none() {
        let data = record();
        assert_eq!(resolve_rooted(&data, "data."), None);
    }

    #[test]
    fn key_path_segments_and_len() {
        let path = KeyPath::new("a.b.c");
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(path.len(), 3);
        assert_eq!(KeyPath::default().len(), 0);
    }

    #[test]
    fn key_path_lookup() {
        let data = record();
        let path = KeyPath::from("seo.indexable");
        assert_eq!(path.lookup(&data), Some(&json!(true)));
    }

    #[test]
    fn key_path_display_round_trips() {
        let path = KeyPath::from("seo.description");
        assert_eq!(path.to_string(), "seo.description");
    }

    #[test]
    fn plain_text_shapes() {
        assert_eq!(plain_text(&json!("hello")), "hello");
        assert_eq!(plain_text(&json!(42)), "42");
        assert_eq!(plain_text(&json!(2.5)), "2.5");
        assert_eq!(plain_text(&json!(true)), "true");
        assert_eq!(plain_text(&Value::Null), "");
        assert_eq!(plain_text(&json!(["a", 1])), r#"["a",1]"#);
        assert_eq!(plain_text(&json!({"k": "v"})), r#"{"k":"v"}"#);
    }
}
