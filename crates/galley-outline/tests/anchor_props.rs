//! Property tests for slugging and the outline pass

use galley_outline::{anchor_slug, build_outline, normalize_id, slugify, AnchorSet};
use proptest::prelude::*;

proptest! {
    #[test]
    fn anchor_slugs_stay_in_charset(text in "\\PC{0,120}") {
        let slug = anchor_slug(&text);
        prop_assert!(!slug.is_empty());
        prop_assert!(slug.len() <= 64);
        prop_assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn anchor_slug_is_idempotent(text in "\\PC{0,80}") {
        let once = anchor_slug(&text);
        prop_assert_eq!(anchor_slug(&once), once);
    }

    #[test]
    fn slugify_never_has_edge_hyphens(text in "\\PC{0,80}") {
        let slug = slugify(&text);
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn normalize_id_output_is_safe(text in "\\PC{0,80}") {
        let id = normalize_id(&text);
        prop_assert!(id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        prop_assert!(!id.starts_with('_'));
        prop_assert!(!id.ends_with('_'));
    }

    #[test]
    fn assigned_anchors_are_unique(bases in prop::collection::vec("[a-z]{1,8}", 0..40)) {
        let mut set = AnchorSet::new();
        let assigned: Vec<_> = bases.iter().map(|b| set.assign(b)).collect();
        let mut seen = std::collections::HashSet::new();
        for id in &assigned {
            prop_assert!(seen.insert(id.clone()), "duplicate id {}", id);
        }
        prop_assert_eq!(set.len(), bases.len());
    }

    #[test]
    fn outline_pass_is_deterministic(
        titles in prop::collection::vec("[A-Za-z ]{0,20}", 0..6),
    ) {
        let html: String = titles
            .iter()
            .map(|t| format!("<h2>{t}</h2>"))
            .collect();
        let first = build_outline(&html);
        let second = build_outline(&html);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn outline_never_loses_content(
        titles in prop::collection::vec("[A-Za-z ]{1,20}", 1..6),
    ) {
        let html: String = titles
            .iter()
            .enumerate()
            .map(|(i, t)| format!("<h2>{t}</h2><p>body {i}</p>"))
            .collect();
        let outline = build_outline(&html);
        for i in 0..titles.len() {
            let needle = format!("<p>body {i}</p>");
            prop_assert!(outline.html.contains(&needle));
        }
        // blank headings are skipped, everything else is anchored
        let expected = titles.iter().filter(|t| !t.trim().is_empty()).count();
        prop_assert_eq!(outline.len(), expected);
    }
}
