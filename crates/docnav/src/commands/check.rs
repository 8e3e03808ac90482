//! `docnav check` command implementation.

use clap::Args;
use docnav_tree::{NavNode, NavTree};

use super::{Project, ProjectArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    project: ProjectArgs,

    /// Fail when a page is not referenced by any sidebar.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let project = Project::load(&self.project)?;
        report(&project, self.strict, &output)
    }
}

/// Print the project summary and fail in strict mode on unreferenced pages.
fn report(project: &Project, strict: bool, output: &Output) -> Result<(), CliError> {
    let docs = &project.config.docs_resolved;
    if let Some(path) = &project.config.config_path {
        output.info(&format!("Config: {}", path.display()));
    }
    output.info(&format!(
        "Pages: {} in {}",
        project.pages.len(),
        docs.source_dir.display()
    ));
    output.info(&format!("Sidebars: {}", docs.sidebar_path.display()));

    for tree in &project.sidebars {
        let (entries, categories) = count_nodes(tree);
        output.highlight(tree.name().unwrap_or_default());
        output.info(&format!("  {entries} entries in {categories} categories"));
    }

    let unreferenced = project.unreferenced_pages();
    for page in &unreferenced {
        output.warning(&format!(
            "Page \"{}\" ({}) is not in any sidebar",
            page.id,
            page.source_path.display()
        ));
    }
    if strict && !unreferenced.is_empty() {
        return Err(CliError::Validation(format!(
            "{} page(s) not referenced by any sidebar",
            unreferenced.len()
        )));
    }

    output.success(&format!(
        "Navigation for \"{}\" is valid",
        project.config.site.title
    ));
    Ok(())
}

/// Count doc entries and categories in a tree.
fn count_nodes(tree: &NavTree) -> (usize, usize) {
    fn visit(nodes: &[NavNode], counts: &mut (usize, usize)) {
        for node in nodes {
            match node {
                NavNode::Doc(_) => counts.0 += 1,
                NavNode::Category(category) => {
                    counts.1 += 1;
                    visit(category.items(), counts);
                }
            }
        }
    }

    let mut counts = (0, 0);
    visit(tree.items(), &mut counts);
    counts
}
