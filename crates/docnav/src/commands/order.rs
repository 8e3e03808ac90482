//! `docnav order` command implementation.

use clap::Args;
use docnav_tree::{DocRef, NavTree};
use serde::Serialize;

use super::{Project, ProjectArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the order command.
#[derive(Args)]
pub(crate) struct OrderArgs {
    #[command(flatten)]
    project: ProjectArgs,

    /// Sidebar to flatten (default: first declared).
    #[arg(long)]
    sidebar: Option<String>,

    /// Only show previous/next links for this page id.
    #[arg(long)]
    page: Option<String>,

    /// Print JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

/// One page in reading order with its neighbours.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct OrderEntry<'a> {
    id: &'a str,
    previous: Option<&'a str>,
    next: Option<&'a str>,
}

impl OrderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let project = Project::load(&self.project)?;
        let tree = project.sidebar(self.sidebar.as_deref())?;

        let entries = match &self.page {
            Some(id) => vec![page_entry(tree, id)?],
            None => reading_order(tree),
        };

        output.print(&render(&entries, self.json)?)?;
        Ok(())
    }
}

/// Format entries as pretty JSON or as one tab-separated line per page.
fn render(entries: &[OrderEntry<'_>], json: bool) -> Result<String, CliError> {
    if json {
        return Ok(serde_json::to_string_pretty(entries)?);
    }
    let lines: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "{}\tprev: {}\tnext: {}",
                entry.id,
                entry.previous.unwrap_or("-"),
                entry.next.unwrap_or("-")
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

/// Every doc in reading order, each with its positional neighbours.
fn reading_order(tree: &NavTree) -> Vec<OrderEntry<'_>> {
    let docs: Vec<&str> = tree.flatten().map(DocRef::id).collect();
    docs.iter()
        .enumerate()
        .map(|(index, &id)| OrderEntry {
            id,
            previous: index.checked_sub(1).map(|prev| docs[prev]),
            next: docs.get(index + 1).copied(),
        })
        .collect()
}

/// Previous/next links for one page id.
fn page_entry<'a>(tree: &'a NavTree, id: &str) -> Result<OrderEntry<'a>, CliError> {
    let pager = tree.pager(id).ok_or_else(|| {
        CliError::Validation(format!(
            "Page \"{id}\" is not in sidebar \"{}\"",
            tree.name().unwrap_or_default()
        ))
    })?;
    Ok(OrderEntry {
        id: pager.current.id(),
        previous: pager.previous.map(DocRef::id),
        next: pager.next.map(DocRef::id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{SIDEBARS, write_project};
    use pretty_assertions::assert_eq;

    fn project() -> (tempfile::TempDir, Project) {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = write_project(temp_dir.path(), SIDEBARS);
        let project = Project::from_config(config).unwrap();
        (temp_dir, project)
    }

    #[test]
    fn test_reading_order() {
        let (_dir, project) = project();

        let entries = reading_order(project.sidebars.first());

        assert_eq!(
            entries,
            vec![
                OrderEntry {
                    id: "index",
                    previous: None,
                    next: Some("getting-started/quick-start"),
                },
                OrderEntry {
                    id: "getting-started/quick-start",
                    previous: Some("index"),
                    next: Some("getting-started/installation"),
                },
                OrderEntry {
                    id: "getting-started/installation",
                    previous: Some("getting-started/quick-start"),
                    next: None,
                },
            ]
        );
    }

    #[test]
    fn test_page_entry() {
        let (_dir, project) = project();

        let entry = page_entry(project.sidebars.first(), "getting-started/quick-start").unwrap();

        assert_eq!(entry.previous, Some("index"));
        assert_eq!(entry.next, Some("getting-started/installation"));
    }

    #[test]
    fn test_page_entry_unknown_page() {
        let (_dir, project) = project();

        let err = page_entry(project.sidebars.first(), "contributing")
            .err()
            .unwrap();

        assert!(err.to_string().contains("contributing"));
    }

    #[test]
    fn test_render_text() {
        let (_dir, project) = project();

        let text = render(&reading_order(project.sidebars.first()), false).unwrap();

        assert_eq!(
            text,
            "index\tprev: -\tnext: getting-started/quick-start\n\
             getting-started/quick-start\tprev: index\tnext: getting-started/installation\n\
             getting-started/installation\tprev: getting-started/quick-start\tnext: -"
        );
    }

    #[test]
    fn test_json_shape() {
        let (_dir, project) = project();

        let json = serde_json::to_value(reading_order(project.sidebars.first())).unwrap();

        assert_eq!(json[0]["id"], "index");
        assert!(json[0]["previous"].is_null());
        assert_eq!(json[2]["previous"], "getting-started/quick-start");
    }
}
