//! YAML front matter parsing.
//!
//! Front matter is a `---` fenced YAML block at the very top of a page:
//!
//! ```text
//! ---
//! id: quick-start
//! title: Quick Start
//! sidebar_label: Start here
//! ---
//! # Body
//! ```

use serde::Deserialize;

/// Front matter fields relevant to navigation. Other keys are ignored.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct FrontMatter {
    /// Replaces the file-name part of the page id.
    pub id: Option<String>,
    /// Page title.
    pub title: Option<String>,
    /// Default sidebar label, preferred over `title`.
    pub sidebar_label: Option<String>,
}

const FENCE: &str = "---";

/// Split `content` into its front matter block (if any) and the body.
///
/// The opening fence must be the first line; the block ends at the next line
/// consisting of `---`. An unterminated block is treated as body text.
pub(crate) fn split(content: &str) -> (Option<&str>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some(rest) = content
        .strip_prefix(FENCE)
        .and_then(|rest| rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')))
    else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, content)
}

/// Parse a front matter block.
///
/// An empty block yields default (all `None`) fields.
pub(crate) fn parse(block: &str) -> Result<FrontMatter, serde_yaml::Error> {
    if block.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(block)
}
