//! Client and content-type catalogs
//!
//! The backend lists clients and their content types as `{id, label}`
//! pairs, ids being safe snake_case names and labels prettified from
//! them. This module decodes those envelopes and matches catalog
//! entries against free-form names such as the client name written in
//! a document.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use galley_outline::normalize_id;

use crate::error::ReviewError;

static SAFE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9_]+$").expect("safe name pattern"));

/// One catalog entry, either a client or a content type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogEntry {
    /// Stable identifier, a safe snake_case name
    pub id: String,
    /// Human-readable label
    pub label: String,
}

impl CatalogEntry {
    /// Build an entry from parts
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Build an entry from a safe name, prettifying the label
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self {
            id: name.to_owned(),
            label: prettify_label(name),
        }
    }
}

/// Turn a safe snake_case name into a display label
///
/// Underscores become spaces, the result is trimmed, and every run of
/// letters is capitalized: `georges_cameras` becomes `Georges Cameras`
/// and `web2print` becomes `Web2Print`.
#[must_use]
pub fn prettify_label(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let trimmed = spaced.trim();
    let mut label = String::with_capacity(trimmed.len());
    let mut prev_cased = false;
    for ch in trimmed.chars() {
        if ch.is_alphabetic() {
            if prev_cased {
                label.extend(ch.to_lowercase());
            } else {
                label.extend(ch.to_uppercase());
            }
            prev_cased = true;
        } else {
            label.push(ch);
            prev_cased = false;
        }
    }
    label
}

/// Check whether a name is a safe catalog identifier
///
/// Safe names are non-empty and drawn from `[a-z0-9_]`, the same rule
/// the backend applies before touching client directories.
#[must_use]
pub fn is_safe_name(name: &str) -> bool {
    SAFE_NAME.is_match(name)
}

/// Find the catalog entry a free-form name refers to
///
/// Matches `normalize_id(wanted)` against entry ids first, then falls
/// back to a case-insensitive label comparison. Used to preselect the
/// client named in document globals. An empty name matches nothing.
#[must_use]
pub fn find_entry<'a>(entries: &'a [CatalogEntry], wanted: &str) -> Option<&'a CatalogEntry> {
    if wanted.is_empty() {
        return None;
    }
    let wanted_id = normalize_id(wanted);
    entries
        .iter()
        .find(|e| e.id == wanted_id)
        .or_else(|| {
            let wanted_label = wanted.to_lowercase();
            entries.iter().find(|e| e.label.to_lowercase() == wanted_label)
        })
}

/// Decode a `{"clients": [...]}` envelope
///
/// # Errors
/// Returns [`ReviewError::Json`] when the payload is not JSON or the
/// list entries are malformed. A missing or null `clients` key decodes
/// as an empty list.
pub fn clients_from_json(payload: &str) -> Result<Vec<CatalogEntry>, ReviewError> {
    entries_from_json(payload, "clients")
}

/// Decode a `{"contentTypes": [...]}` envelope
///
/// # Errors
/// Returns [`ReviewError::Json`] when the payload is not JSON or the
/// list entries are malformed. A missing or null `contentTypes` key
/// decodes as an empty list.
pub fn content_types_from_json(payload: &str) -> Result<Vec<CatalogEntry>, ReviewError> {
    entries_from_json(payload, "contentTypes")
}

fn entries_from_json(payload: &str, key: &str) -> Result<Vec<CatalogEntry>, ReviewError> {
    let value: Value = serde_json::from_str(payload)?;
    match value.get(key) {
        None | Some(Value::Null) => {
            tracing::debug!(key, "catalog payload has no list, treating as empty");
            Ok(Vec::new())
        }
        Some(list) => Ok(serde_json::from_value(list.clone())?),
    }
}
