//! docnav CLI - documentation navigation checker.
//!
//! Provides commands for:
//! - `check`: Validate sidebars against the docs directory
//! - `order`: Print pages in reading order with previous/next links
//! - `sidebar`: Print the resolved sidebar tree as JSON for the renderer

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, OrderArgs, SidebarArgs};
use output::Output;

/// docnav - documentation navigation checker.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    /// Enable informational logging (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate sidebar declarations against the docs directory.
    Check(CheckArgs),
    /// Print pages in reading order with previous/next links.
    Order(OrderArgs),
    /// Print the resolved sidebar tree as JSON.
    Sidebar(SidebarArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Order(args) => args.execute(),
        Commands::Sidebar(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_order_with_global_verbose() {
        let cli = Cli::try_parse_from(["docnav", "order", "--json", "--verbose"]).unwrap();

        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Order(_)));
    }

    #[test]
    fn test_sidebar_and_all_conflict() {
        let result = Cli::try_parse_from(["docnav", "sidebar", "--all", "--sidebar", "docs"]);

        assert!(result.is_err());
    }
}
