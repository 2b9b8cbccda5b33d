//! View registration and lookup
//!
//! Views are looked up by the manifest field tag. The stock registry is
//! an immutable process-wide default reachable through
//! [`ViewRegistry::global`]; customization happens by building a
//! registry of overrides and laying it over a base with
//! [`ViewRegistry::merged`], never by mutating the default in place.

use std::sync::Arc;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::view::FieldView;
use crate::views::{FaqView, HtmlView, TextView};

/// Tag-keyed collection of field views
///
/// Insertion order is preserved, so [`tags`](Self::tags) and the debug
/// output are deterministic.
#[derive(Clone)]
pub struct ViewRegistry {
    views: IndexMap<String, Arc<dyn FieldView>>,
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("view_count", &self.views.len())
            .field("tags", &self.tags().collect::<Vec<_>>())
            .finish()
    }
}

impl ViewRegistry {
    /// Empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            views: IndexMap::new(),
        }
    }

    /// Registry with the stock views: `text`, `html`, `faq`
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("text", Arc::new(TextView));
        registry.register("html", Arc::new(HtmlView));
        registry.register("faq", Arc::new(FaqView));
        registry
    }

    /// The process-wide default registry
    ///
    /// Built once, never mutated. Layer overrides on top with
    /// [`merged`](Self::merged) instead.
    #[must_use]
    pub fn global() -> &'static Self {
        static GLOBAL: Lazy<ViewRegistry> = Lazy::new(ViewRegistry::with_defaults);
        &GLOBAL
    }

    /// Register a view under a tag, replacing any previous view for it
    pub fn register(&mut self, tag: impl Into<String>, view: Arc<dyn FieldView>) {
        self.views.insert(tag.into(), view);
    }

    /// Look up the view for a tag
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&dyn FieldView> {
        self.views.get(tag).map(|v| &**v)
    }

    /// Check whether a tag has a view
    #[inline]
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.views.contains_key(tag)
    }

    /// Registered tags in insertion order
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.views.keys().map(String::as_str)
    }

    /// Number of registered views
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Check whether no views are registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Copy of this registry with `overrides` laid on top
    ///
    /// Tags present in both take the override's view; tags only in
    /// `overrides` are appended. Neither input is modified.
    #[must_use]
    pub fn merged(&self, overrides: &Self) -> Self {
        let mut merged = self.clone();
        for (tag, view) in &overrides.views {
            merged.views.insert(tag.clone(), Arc::clone(view));
        }
        merged
    }
}
