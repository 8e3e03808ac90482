//! Content page discovery for docnav.
//!
//! Scans a documentation source directory and builds a [`PageIndex`]: the set
//! of page ids that navigation entries may reference, with each page's title.
//!
//! # Page ids
//!
//! A page id is the file path relative to the source directory, without
//! extension and with `/` separators:
//!
//! - `index.md` -> `index`
//! - `getting-started/quick-start.md` -> `getting-started/quick-start`
//! - `core-components/index.mdx` -> `core-components/index`
//!
//! An `id` key in the page's front matter replaces the last segment.
//!
//! # Titles
//!
//! Resolved as front matter `title`, then the first `# ` heading, then the
//! title-cased file name.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use docnav_pages::PageScanner;
//!
//! let scanner = PageScanner::new(PathBuf::from("docs"), vec!["md".to_owned()]);
//! let pages = scanner.scan()?;
//! for page in pages.iter() {
//!     println!("{}: {}", page.id, page.title);
//! }
//! ```

mod front_matter;
mod page;
mod scanner;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;

pub use page::{Page, PageIndex};

use page::titlecase_from_slug;
use scanner::{Scanner, SourceFile};

/// ATX heading level 1; a closing `#` run only counts after whitespace.
static H1_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#[ \t]+(.+?)(?:[ \t]+#+)?[ \t]*\r?$").expect("H1 pattern is valid")
});

/// Page discovery error.
#[derive(Debug, thiserror::Error)]
pub enum PagesError {
    /// Source directory does not exist or is not a directory.
    #[error("Docs source directory not found: {}", .0.display())]
    SourceDirMissing(PathBuf),
    /// Page file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Page file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Front matter is not valid YAML.
    #[error("Invalid front matter in {}: {source}", path.display())]
    FrontMatter {
        /// Page file.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
    /// Front matter `id` is empty or contains `/`.
    #[error("Invalid page id \"{id}\" in front matter of {}", path.display())]
    InvalidId {
        /// Offending id.
        id: String,
        /// Page file.
        path: PathBuf,
    },
    /// Two files resolve to the same page id.
    #[error("Duplicate page id \"{id}\": {} and {}", first.display(), second.display())]
    DuplicateId {
        /// Page id.
        id: String,
        /// First file with this id.
        first: PathBuf,
        /// Second file with this id.
        second: PathBuf,
    },
}

/// Builds a [`PageIndex`] from a source directory.
#[derive(Clone, Debug)]
pub struct PageScanner {
    source_dir: PathBuf,
    extensions: Vec<String>,
}

impl PageScanner {
    /// Create a scanner for files with one of `extensions` (without leading dot).
    pub fn new(source_dir: PathBuf, extensions: Vec<String>) -> Self {
        Self {
            source_dir,
            extensions,
        }
    }

    /// Source directory being scanned.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Discover, read and index all pages.
    ///
    /// Files are read in parallel. Source paths in the resulting pages are
    /// relative to the source directory.
    pub fn scan(&self) -> Result<PageIndex, PagesError> {
        if !self.source_dir.is_dir() {
            return Err(PagesError::SourceDirMissing(self.source_dir.clone()));
        }

        let files = Scanner::new(&self.source_dir, &self.extensions).scan();
        tracing::debug!(
            source_dir = %self.source_dir.display(),
            files = files.len(),
            "Discovered page files"
        );

        let pages = files
            .par_iter()
            .map(|file| self.read_page(file))
            .collect::<Result<Vec<_>, _>>()?;

        let index = PageIndex::from_pages(pages)?;
        tracing::info!(
            source_dir = %self.source_dir.display(),
            pages = index.len(),
            "Indexed pages"
        );
        Ok(index)
    }

    fn read_page(&self, file: &SourceFile) -> Result<Page, PagesError> {
        let content = fs::read_to_string(&file.path).map_err(|source| PagesError::Io {
            path: file.path.clone(),
            source,
        })?;
        let source_path = file
            .path
            .strip_prefix(&self.source_dir)
            .unwrap_or(&file.path)
            .to_path_buf();

        let (block, body) = front_matter::split(&content);
        let meta = match block {
            Some(block) => front_matter::parse(block).map_err(|source| PagesError::FrontMatter {
                path: source_path.clone(),
                source,
            })?,
            None => front_matter::FrontMatter::default(),
        };

        if let Some(id) = &meta.id
            && (id.trim().is_empty() || id.contains('/'))
        {
            return Err(PagesError::InvalidId {
                id: id.clone(),
                path: source_path,
            });
        }

        let id = file.page_id(meta.id.as_deref());
        let title = meta
            .title
            .filter(|t| !t.trim().is_empty())
            .or_else(|| extract_h1(body))
            .unwrap_or_else(|| titlecase_from_slug(&file.stem));

        tracing::debug!(%id, %title, path = %source_path.display(), "Read page");
        Ok(Page {
            id,
            title,
            sidebar_label: meta.sidebar_label.filter(|l| !l.trim().is_empty()),
            source_path,
        })
    }
}

/// First `# ` heading text, if any.
fn extract_h1(body: &str) -> Option<String> {
    H1_REGEX
        .captures(body)
        .map(|caps| caps[1].trim().to_owned())
        .filter(|title| !title.is_empty())
}
