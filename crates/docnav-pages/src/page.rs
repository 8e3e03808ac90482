//! Discovered pages and the page index.

use std::collections::{BTreeMap, HashSet};
use std::path::PathBuf;

use crate::PagesError;

/// A content page that navigation entries can reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// Stable page id (e.g. `getting-started/quick-start`).
    pub id: String,
    /// Page title (resolved: front matter > H1 > file name).
    pub title: String,
    /// Sidebar label from front matter.
    pub sidebar_label: Option<String>,
    /// Source file path.
    pub source_path: PathBuf,
}

impl Page {
    /// Default sidebar label: `sidebar_label` if set, otherwise the title.
    pub fn label(&self) -> &str {
        self.sidebar_label.as_deref().unwrap_or(&self.title)
    }
}

/// Pages keyed by id, ordered by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageIndex {
    pages: BTreeMap<String, Page>,
}

impl PageIndex {
    /// Build an index, rejecting two pages with the same id.
    pub fn from_pages(pages: impl IntoIterator<Item = Page>) -> Result<Self, PagesError> {
        let mut index: BTreeMap<String, Page> = BTreeMap::new();
        for page in pages {
            if let Some(existing) = index.get(&page.id) {
                return Err(PagesError::DuplicateId {
                    id: page.id,
                    first: existing.source_path.clone(),
                    second: page.source_path,
                });
            }
            index.insert(page.id.clone(), page);
        }
        Ok(Self { pages: index })
    }

    /// Page by id.
    pub fn get(&self, id: &str) -> Option<&Page> {
        self.pages.get(id)
    }

    /// Whether a page with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.pages.contains_key(id)
    }

    /// Default sidebar label of a page.
    pub fn label(&self, id: &str) -> Option<&str> {
        self.get(id).map(Page::label)
    }

    /// All page ids.
    pub fn ids(&self) -> HashSet<String> {
        self.pages.keys().cloned().collect()
    }

    /// Pages ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.values()
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the index has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Convert a slug (kebab-case or `snake_case`) to title case.
///
/// Replaces `-` and `_` with spaces, then capitalizes the first letter of each word.
pub(crate) fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        capitalize_first_into(word, &mut result);
    }
    result
}

/// Capitalize the first character of a word, appending to `buf`.
fn capitalize_first_into(word: &str, buf: &mut String) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        buf.extend(first.to_uppercase());
        buf.push_str(chars.as_str());
    }
}
