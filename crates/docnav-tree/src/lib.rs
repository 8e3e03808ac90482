//! Navigation tree model for docnav.
//!
//! A documentation site's table of contents is declared as a nested structure
//! of page references (`doc`) and labeled groups (`category`). This crate turns
//! that declaration into a validated [`NavTree`]:
//!
//! - [`NavTree::build`] checks the declaration's shape (node kinds, ids,
//!   non-empty categories)
//! - [`NavTree::validate_references`] checks every doc id against the set of
//!   existing pages
//! - [`NavTree::flatten`] yields docs in reading order for next/previous links
//! - [`NavTree::sidebar_items`] produces the serializable view for the renderer
//!
//! Several named sidebars can be loaded from one YAML file with [`Sidebars`].
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use docnav_tree::{NavTree, NodeDecl};
//!
//! let declaration = NodeDecl::category(
//!     "Getting Started",
//!     vec![NodeDecl::doc("quick-start"), NodeDecl::doc("installation")],
//! )
//! .into();
//! let tree = NavTree::build(&declaration).unwrap();
//!
//! let ids: Vec<_> = tree.flatten().map(|doc| doc.id()).collect();
//! assert_eq!(ids, ["quick-start", "installation"]);
//!
//! let known: HashSet<String> = HashSet::from(["quick-start".to_owned()]);
//! let err = tree.validate_references(&known).unwrap_err();
//! assert!(err.to_string().contains("installation"));
//! ```

mod declaration;
mod error;
mod node;
mod sidebars;
mod traverse;
mod tree;
mod view;

pub use declaration::{NodeDecl, NodeFields, SidebarDecl};
pub use error::ConfigurationError;
pub use node::{Category, DocRef, NavNode};
pub use sidebars::Sidebars;
pub use traverse::{Flatten, Pager, Visit, Walk};
pub use tree::NavTree;
pub use view::SidebarItem;
