//! Page edit buffers
//!
//! The review screen opens one page at a time in an editable modal.
//! [`PageEdits`] is that buffer: seeded from the page, edited freely,
//! then written back over the page list on save. Saving writes all
//! four fields unconditionally, so clearing a field in the editor
//! clears it on the page.

use galley_model::DocPage;

/// Editable fields of a page under review
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageEdits {
    /// Main heading (H1)
    pub page_heading: String,
    /// Meta title
    pub meta_title: String,
    /// Meta description
    pub meta_description: String,
    /// Body markup
    pub page_body: String,
}

impl PageEdits {
    /// Seed an edit buffer from a page, missing fields as empty
    #[must_use]
    pub fn from_page(page: &DocPage) -> Self {
        Self {
            page_heading: page.page_heading.clone().unwrap_or_default(),
            meta_title: page.meta_title.clone().unwrap_or_default(),
            meta_description: page.meta_description.clone().unwrap_or_default(),
            page_body: page.page_body.clone().unwrap_or_default(),
        }
    }

    /// Write the buffer into a page, replacing all four fields
    pub fn apply(&self, page: &mut DocPage) {
        page.page_heading = Some(self.page_heading.clone());
        page.meta_title = Some(self.meta_title.clone());
        page.meta_description = Some(self.meta_description.clone());
        page.page_body = Some(self.page_body.clone());
    }

    /// Produce a new page list with the edits merged into every page
    /// whose number matches
    ///
    /// Other pages are untouched and order is kept. Pages without a
    /// number match `None`.
    #[must_use]
    pub fn apply_to(&self, pages: &[DocPage], page_number: Option<u32>) -> Vec<DocPage> {
        pages
            .iter()
            .map(|page| {
                let mut next = page.clone();
                if next.page_number == page_number {
                    self.apply(&mut next);
                }
                next
            })
            .collect()
    }
}
