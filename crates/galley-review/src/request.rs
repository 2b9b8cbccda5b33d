//! Format-request assembly
//!
//! Once every reviewed page has a content type, the edited pages are
//! sent back to the backend for formatting. [`build_format_request`]
//! validates the session state and produces that payload; validation
//! failures carry the review screen's own messages.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use galley_model::{DocPage, Globals};

use crate::error::ReviewError;

/// Content-type choices keyed by page number
///
/// An empty string counts as unassigned, matching a cleared selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTypeAssignments {
    by_page: BTreeMap<u32, String>,
}

impl ContentTypeAssignments {
    /// New, empty assignment set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the content type chosen for a page
    pub fn assign(&mut self, page_number: u32, content_type: impl Into<String>) {
        self.by_page.insert(page_number, content_type.into());
    }

    /// The choice recorded for a page, if any
    #[must_use]
    pub fn get(&self, page_number: u32) -> Option<&str> {
        self.by_page.get(&page_number).map(String::as_str)
    }

    /// Check whether a page has a non-empty assignment
    #[must_use]
    pub fn is_assigned(&self, page_number: u32) -> bool {
        self.get(page_number).is_some_and(|ct| !ct.is_empty())
    }

    /// Check whether every page has a non-empty assignment
    ///
    /// False for an empty page list, and false when a page has no page
    /// number at all, since such a page can never be assigned.
    #[must_use]
    pub fn all_assigned(&self, pages: &[DocPage]) -> bool {
        if pages.is_empty() {
            return false;
        }
        pages
            .iter()
            .all(|p| p.page_number.is_some_and(|n| self.is_assigned(n)))
    }

    /// Drop every assignment, as when the selected client changes
    pub fn clear(&mut self) {
        self.by_page.clear();
    }

    /// Number of recorded choices, empty ones included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_page.len()
    }

    /// Check whether no choice has been recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_page.is_empty()
    }
}

/// One page of a format request: the edited page plus its content type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatRequestPage {
    /// The page as edited in the review session
    #[serde(flatten)]
    pub page: DocPage,
    /// Assigned content type id
    pub content_type: String,
}

/// Payload sent to the backend formatting endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatRequest {
    /// Catalog id of the selected client
    pub client_id: String,
    /// Document-wide values, always present even when empty
    pub globals: Globals,
    /// Pages to format, each with its content type
    pub pages: Vec<FormatRequestPage>,
}

impl FormatRequest {
    /// Encode the request body
    ///
    /// # Errors
    /// Returns [`ReviewError::Json`] when encoding fails.
    pub fn to_json(&self) -> Result<String, ReviewError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Assemble a format request from the review session state
///
/// # Errors
/// Returns [`ReviewError::NoClientSelected`] when `client_id` is empty
/// and [`ReviewError::MissingContentType`] when the page list is empty
/// or any page lacks a non-empty assignment; the first offending page
/// number is carried in the error.
pub fn build_format_request(
    client_id: &str,
    globals: Option<&Globals>,
    pages: &[DocPage],
    assignments: &ContentTypeAssignments,
) -> Result<FormatRequest, ReviewError> {
    if client_id.is_empty() {
        return Err(ReviewError::NoClientSelected);
    }
    if pages.is_empty() {
        return Err(ReviewError::MissingContentType { page_number: None });
    }

    let mut request_pages = Vec::with_capacity(pages.len());
    for page in pages {
        let content_type = page
            .page_number
            .and_then(|n| assignments.get(n))
            .filter(|ct| !ct.is_empty());
        let Some(content_type) = content_type else {
            return Err(ReviewError::MissingContentType {
                page_number: page.page_number,
            });
        };
        request_pages.push(FormatRequestPage {
            page: page.clone(),
            content_type: content_type.to_owned(),
        });
    }

    Ok(FormatRequest {
        client_id: client_id.to_owned(),
        globals: globals.cloned().unwrap_or_default(),
        pages: request_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn two_pages() -> Vec<DocPage> {
        serde_json::from_value(json!([
            { "pageNumber": 1, "pageHeading": "Cameras" },
            { "pageNumber": 2, "pageHeading": "Lenses" },
        ]))
        .unwrap()
    }

    #[test]
    fn assignments_track_choices() {
        let mut assignments = ContentTypeAssignments::new();
        assignments.assign(1, "collection_page");
        assignments.assign(2, "");

        assert_eq!(assignments.get(1), Some("collection_page"));
        assert!(assignments.is_assigned(1));
        assert!(!assignments.is_assigned(2));
        assert!(!assignments.is_assigned(9));
        assert_eq!(assignments.len(), 2);

        assignments.clear();
        assert!(assignments.is_empty());
    }

    #[test]
    fn all_assigned_rules() {
        let pages = two_pages();
        let mut assignments = ContentTypeAssignments::new();
        assert!(!assignments.all_assigned(&pages));
        assert!(!assignments.all_assigned(&[]));

        assignments.assign(1, "collection_page");
        assert!(!assignments.all_assigned(&pages));
        assignments.assign(2, "brand_page");
        assert!(assignments.all_assigned(&pages));

        // a page without a number can never be assigned
        let mut with_unnumbered = pages;
        with_unnumbered.push(DocPage::default());
        assert!(!assignments.all_assigned(&with_unnumbered));
    }

    #[test]
    fn assignments_serialize_as_an_object() {
        let mut assignments = ContentTypeAssignments::new();
        assignments.assign(1, "collection_page");
        assert_eq!(
            serde_json::to_value(&assignments).unwrap(),
            json!({ "1": "collection_page" })
        );
    }

    #[test]
    fn builds_a_request_from_assigned_pages() {
        let pages = two_pages();
        let mut assignments = ContentTypeAssignments::new();
        assignments.assign(1, "collection_page");
        assignments.assign(2, "brand_page");

        let request = build_format_request("georges_cameras", None, &pages, &assignments).unwrap();
        assert_eq!(request.client_id, "georges_cameras");
        assert_eq!(request.pages.len(), 2);
        assert_eq!(request.pages[1].content_type, "brand_page");

        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire["globals"], json!({}));
        assert_eq!(wire["pages"][0]["pageHeading"], json!("Cameras"));
        assert_eq!(wire["pages"][0]["content_type"], json!("collection_page"));
    }

    #[test]
    fn rejects_a_missing_client() {
        let err =
            build_format_request("", None, &two_pages(), &ContentTypeAssignments::new())
                .unwrap_err();
        assert!(matches!(err, ReviewError::NoClientSelected));
    }

    #[test]
    fn reports_the_first_unassigned_page() {
        let pages = two_pages();
        let mut assignments = ContentTypeAssignments::new();
        assignments.assign(1, "collection_page");

        let err = build_format_request("georges_cameras", None, &pages, &assignments).unwrap_err();
        assert!(matches!(
            err,
            ReviewError::MissingContentType {
                page_number: Some(2)
            }
        ));
    }

    #[test]
    fn rejects_an_empty_page_list() {
        let err = build_format_request(
            "georges_cameras",
            None,
            &[],
            &ContentTypeAssignments::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ReviewError::MissingContentType { page_number: None }
        ));
    }
}
