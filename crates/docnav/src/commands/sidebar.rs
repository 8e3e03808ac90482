//! `docnav sidebar` command implementation.

use clap::Args;
use docnav_tree::{NavTree, SidebarItem};
use serde_json::{Map, Value};

use super::{Project, ProjectArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    #[command(flatten)]
    project: ProjectArgs,

    /// Sidebar to print (default: first declared).
    #[arg(long, conflicts_with = "all")]
    sidebar: Option<String>,

    /// Print every sidebar, keyed by name.
    #[arg(long)]
    all: bool,
}

impl SidebarArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let project = Project::load(&self.project)?;

        let json = if self.all {
            all_sidebars(&project)?
        } else {
            let tree = project.sidebar(self.sidebar.as_deref())?;
            serde_json::to_value(resolve(&project, tree))?
        };

        output.print(&serde_json::to_string_pretty(&json)?)?;
        Ok(())
    }
}

/// Renderer view of `tree` with labels resolved against the project's pages.
fn resolve(project: &Project, tree: &NavTree) -> Vec<SidebarItem> {
    tree.sidebar_items(|id| project.label_of(id))
}

/// Every sidebar's renderer view in a JSON object keyed by name, in declared order.
fn all_sidebars(project: &Project) -> Result<Value, CliError> {
    let mut sidebars = Map::new();
    for tree in &project.sidebars {
        sidebars.insert(
            tree.name().unwrap_or_default().to_owned(),
            serde_json::to_value(resolve(project, tree))?,
        );
    }
    Ok(Value::Object(sidebars))
}
