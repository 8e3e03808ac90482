//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod order;
pub(crate) mod sidebar;

pub(crate) use check::CheckArgs;
pub(crate) use order::OrderArgs;
pub(crate) use sidebar::SidebarArgs;

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_pages::{Page, PageIndex, PageScanner};
use docnav_tree::{NavTree, Sidebars};

use crate::error::CliError;

/// Arguments shared by every command that loads a project.
#[derive(Args, Debug)]
pub(crate) struct ProjectArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long, env = "DOCNAV_CONFIG")]
    config: Option<PathBuf>,

    /// Docs source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Sidebar declaration file (overrides config).
    #[arg(long)]
    sidebar_path: Option<PathBuf>,
}

/// A loaded and fully validated documentation project.
///
/// Construction fails on the first configuration, page or navigation error,
/// so holding a `Project` means every sidebar reference resolves.
pub(crate) struct Project {
    pub config: Config,
    pub pages: PageIndex,
    pub sidebars: Sidebars,
}

impl Project {
    /// Load config from `args`, then scan pages and validate sidebars.
    pub(crate) fn load(args: &ProjectArgs) -> Result<Self, CliError> {
        let settings = CliSettings {
            source_dir: args.source_dir.clone(),
            sidebar_path: args.sidebar_path.clone(),
        };
        let config = Config::load(args.config.as_deref(), Some(&settings))?;
        Self::from_config(config)
    }

    /// Scan pages and build and validate sidebars for a resolved config.
    pub(crate) fn from_config(config: Config) -> Result<Self, CliError> {
        let docs = &config.docs_resolved;
        let pages = PageScanner::new(docs.source_dir.clone(), docs.extensions.clone()).scan()?;
        let sidebars = Sidebars::load(&docs.sidebar_path)?;
        sidebars.validate_references(&pages.ids())?;
        tracing::info!(
            pages = pages.len(),
            sidebars = sidebars.len(),
            "Validated navigation"
        );

        Ok(Self {
            config,
            pages,
            sidebars,
        })
    }

    /// Sidebar by name, or the first declared one.
    pub(crate) fn sidebar(&self, name: Option<&str>) -> Result<&NavTree, CliError> {
        let Some(name) = name else {
            return Ok(self.sidebars.first());
        };
        self.sidebars.get(name).ok_or_else(|| {
            let declared: Vec<_> = self.sidebars.names().collect();
            CliError::Validation(format!(
                "Unknown sidebar \"{name}\" (declared: {})",
                declared.join(", ")
            ))
        })
    }

    /// Pages that no sidebar references, ordered by id.
    pub(crate) fn unreferenced_pages(&self) -> Vec<&Page> {
        let referenced = self.sidebars.referenced_ids();
        self.pages
            .iter()
            .filter(|page| !referenced.contains(page.id.as_str()))
            .collect()
    }

    /// Default label for a page id, as owned string for the sidebar view.
    pub(crate) fn label_of(&self, id: &str) -> Option<String> {
        self.pages.label(id).map(str::to_owned)
    }
}
