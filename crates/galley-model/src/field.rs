//! Manifest field descriptors
//!
//! A manifest is the backend's description of what a formatted page
//! contains: an ordered list of fields, each naming a label, a path into
//! the page data, and a view tag. Manifests arrive as JSON alongside the
//! page payload and are decoded leniently: anything malformed degrades to
//! an empty field list rather than failing the page.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::faq::FaqMapping;
use crate::path::KeyPath;

/// View tag attached to a manifest field
///
/// The tag decides which view renders the field. Tags outside the known
/// set are preserved verbatim in [`FieldKind::Other`] so unknown manifests
/// still round-trip; rendering falls back to the text view for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Plain text, the default when a field declares no tag
    Text,
    /// Raw HTML markup
    Html,
    /// FAQ list of question/answer items
    Faq,
    /// Hyperlink; a known backend tag with no dedicated view
    Link,
    /// Any other tag, preserved as written
    Other(String),
}

impl FieldKind {
    /// The wire form of the tag
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Faq => "faq",
            Self::Link => "link",
            Self::Other(tag) => tag,
        }
    }

    /// Parse a wire tag; never fails, unknown tags become [`FieldKind::Other`]
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "html" => Self::Html,
            "faq" => Self::Faq,
            "link" => Self::Link,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Default for FieldKind {
    fn default() -> Self {
        Self::Text
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FieldKind {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl Serialize for FieldKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

/// Backend upload instructions attached to a field
///
/// Carried through for export fidelity; the review core only reads
/// `metafield` (label fallback) and `mapping` (FAQ key mapping).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadSpec {
    /// Upload mode, typically `metafield` or `metaobject`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Target metafield key, doubles as a label fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metafield: Option<String>,
    /// Target metaobject type for list uploads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metaobject_type: Option<String>,
    /// FAQ key mapping; preferred over the field-level mapping when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<FaqMapping>,
    /// Unrecognized upload keys, preserved for export
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One field of a manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Human label; falls back to the upload metafield, then the path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Path to the value, rooted at the synthetic `data` key
    #[serde(default)]
    pub path: KeyPath,
    /// View tag, `text` when the manifest omits it
    #[serde(rename = "type", default)]
    pub kind: FieldKind,
    /// FAQ key mapping declared at the field level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<FaqMapping>,
    /// Backend upload instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload: Option<UploadSpec>,
    /// Unrecognized field keys, preserved for export
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldDescriptor {
    /// Descriptor with a tag and data path, no label
    #[inline]
    pub fn new(kind: FieldKind, path: impl Into<KeyPath>) -> Self {
        Self {
            kind,
            path: path.into(),
            ..Self::default()
        }
    }

    /// Set the human label
    #[must_use]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the field-level FAQ mapping
    #[must_use]
    pub fn with_mapping(mut self, mapping: FaqMapping) -> Self {
        self.mapping = Some(mapping);
        self
    }

    /// Set the upload instructions
    #[must_use]
    pub fn with_upload(mut self, upload: UploadSpec) -> Self {
        self.upload = Some(upload);
        self
    }

    /// Label shown next to the field
    ///
    /// Falls back from the declared label to the upload metafield, then to
    /// the raw path. Empty strings count as absent at each step.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .filter(|l| !l.is_empty())
            .or_else(|| {
                self.upload
                    .as_ref()
                    .and_then(|u| u.metafield.as_deref())
                    .filter(|m| !m.is_empty())
            })
            .unwrap_or_else(|| self.path.as_str())
    }

    /// FAQ mapping in effect: the upload-level mapping wins over the
    /// field-level one
    #[must_use]
    pub fn effective_mapping(&self) -> Option<&FaqMapping> {
        self.upload
            .as_ref()
            .and_then(|u| u.mapping.as_ref())
            .or(self.mapping.as_ref())
    }
}

/// Ordered list of field descriptors for one content type
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Manifest {
    /// Manifest schema version as declared by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Fields in display order
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl Manifest {
    /// Manifest from a field list
    #[inline]
    #[must_use]
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            version: None,
            fields,
        }
    }

    /// Decode a manifest from raw JSON, degrading instead of failing
    ///
    /// Anything without an array under `fields` becomes the empty
    /// manifest; individual fields that do not decode are dropped. Both
    /// degradations log at debug level.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(list) = value.get("fields").and_then(Value::as_array) else {
            if !value.is_null() {
                tracing::debug!("manifest without a field list; treating as empty");
            }
            return Self::default();
        };
        let version = value
            .get("version")
            .and_then(Value::as_str)
            .map(str::to_owned);
        let fields = list
            .iter()
            .filter_map(|raw| match serde_json::from_value(raw.clone()) {
                Ok(field) => Some(field),
                Err(err) => {
                    tracing::debug!(%err, "dropping undecodable manifest field");
                    None
                }
            })
            .collect();
        Self { version, fields }
    }

    /// Number of fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the manifest has no fields
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterator over the fields in display order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, FieldDescriptor> {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

// Deserialization reuses the lenient `from_value` path so a malformed
// manifest embedded in a page payload never fails the page.
impl<'de> Deserialize<'de> for Manifest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
