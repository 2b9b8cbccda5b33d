//! Slug and identifier normalization
//!
//! Three flavors coexist because three surfaces consume them: anchor ids
//! inside rendered HTML ([`anchor_slug`]), URL path segments for draft
//! pages ([`slugify`]), and catalog ids ([`normalize_id`]). They differ
//! in separator, quote handling, and length capping, and are kept
//! separate on purpose.

use std::collections::HashSet;

/// Slug for heading anchor ids
///
/// Lowercases, drops everything outside ASCII alphanumerics, whitespace
/// and hyphens, trims, then collapses each whitespace run to a single
/// hyphen. Capped at 64 bytes; input that slugs to nothing becomes
/// `section`. Literal hyphens survive, including leading ones, so
/// `a - b` gives `a---b`.
#[must_use]
pub fn anchor_slug(text: &str) -> String {
    let mut kept = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c.is_whitespace() {
            kept.push(c);
        }
    }
    let trimmed = kept.trim();
    let mut slug = String::with_capacity(trimmed.len());
    let mut in_whitespace = false;
    for c in trimmed.chars() {
        if c.is_whitespace() {
            in_whitespace = true;
        } else {
            if in_whitespace {
                slug.push('-');
                in_whitespace = false;
            }
            slug.push(c);
        }
    }
    slug.truncate(64);
    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

/// Slug for URL path segments
///
/// Lowercases, deletes quote characters outright (so `it's` becomes
/// `its`, not `it-s`), collapses every other non-alphanumeric run to a
/// single hyphen, and strips leading and trailing hyphens.
#[must_use]
pub fn slugify(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;
    for c in lowered.chars() {
        if c == '\'' || c == '"' {
            continue;
        }
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(c);
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// Identifier form used for catalog lookups
///
/// Like [`slugify`] but with underscores and no quote special-casing:
/// `Georges Cameras` becomes `georges_cameras`.
#[must_use]
pub fn normalize_id(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut id = String::with_capacity(lowered.len());
    let mut pending_separator = false;
    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !id.is_empty() {
                id.push('_');
            }
            id.push(c);
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }
    id
}

/// Anchor ids already handed out during one outline pass
///
/// [`assign`](AnchorSet::assign) resolves collisions by suffixing `-2`,
/// `-3` and so on until the id is free, then records it. Uniqueness holds
/// only among ids assigned through the same set; ids that exist in the
/// markup beforehand are not recorded here.
#[derive(Debug, Clone, Default)]
pub struct AnchorSet {
    used: HashSet<String>,
}

impl AnchorSet {
    /// Empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out a unique id derived from `base`
    #[must_use]
    pub fn assign(&mut self, base: &str) -> String {
        let mut id = base.to_string();
        let mut n = 2usize;
        while self.used.contains(&id) {
            id = format!("{base}-{n}");
            n += 1;
        }
        self.used.insert(id.clone());
        id
    }

    /// Check whether an id has been assigned through this set
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    /// Number of assigned ids
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Check whether nothing has been assigned yet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
