//! Page discovery by filesystem walking.
//!
//! Discovery is separate from reading: the scanner only finds candidate files
//! and returns lightweight references. [`PageScanner`](crate::PageScanner)
//! reads and parses them afterwards.

use std::fs;
use std::path::{Path, PathBuf};

/// Reference to a page source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceFile {
    /// Directory part of the page id (e.g. "", "getting-started").
    pub id_prefix: String,
    /// File name without extension (e.g. "quick-start", "index").
    pub stem: String,
    /// Path to the file.
    pub path: PathBuf,
}

impl SourceFile {
    /// Page id derived from the file location, with `stem` optionally replaced.
    pub fn page_id(&self, stem: Option<&str>) -> String {
        join_id(&self.id_prefix, stem.unwrap_or(&self.stem))
    }
}

/// Walks a source directory for page files.
pub(crate) struct Scanner<'a> {
    source_dir: &'a Path,
    extensions: &'a [String],
}

impl<'a> Scanner<'a> {
    /// Create a scanner accepting files with one of `extensions` (without dot).
    pub fn new(source_dir: &'a Path, extensions: &'a [String]) -> Self {
        Self {
            source_dir,
            extensions,
        }
    }

    /// Collect page files, sorted by path within each directory.
    ///
    /// Hidden files and directories are skipped. Unreadable subdirectories are
    /// logged and skipped.
    pub fn scan(&self) -> Vec<SourceFile> {
        let mut files = Vec::new();
        self.scan_directory(self.source_dir, "", &mut files);
        files
    }

    fn scan_directory(&self, dir_path: &Path, id_prefix: &str, files: &mut Vec<SourceFile>) {
        let entries = match fs::read_dir(dir_path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %dir_path.display(), error = %e, "Failed to read directory, skipping");
                return;
            }
        };

        // Cache file_type to avoid repeated stat calls
        let mut entries: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|e| {
                let is_dir = e.file_type().is_ok_and(|t| t.is_dir());
                (e, is_dir)
            })
            .collect();
        entries.sort_by_key(|(e, _)| e.file_name());

        for (entry, is_dir) in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            if is_dir {
                self.scan_directory(&path, &join_id(id_prefix, &name), files);
            } else if let Some(stem) = self.page_stem(&path) {
                files.push(SourceFile {
                    id_prefix: id_prefix.to_owned(),
                    stem,
                    path,
                });
            }
        }
    }

    /// File stem if the extension is accepted.
    fn page_stem(&self, path: &Path) -> Option<String> {
        let extension = path.extension()?.to_string_lossy();
        if !self
            .extensions
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(&extension))
        {
            return None;
        }
        Some(path.file_stem()?.to_string_lossy().into_owned())
    }
}

/// Join an id prefix and a final segment with `/`.
fn join_id(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}/{segment}")
    }
}
