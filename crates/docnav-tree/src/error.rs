//! Configuration errors raised while building or validating navigation trees.

use std::path::PathBuf;

/// Error in a sidebar declaration.
///
/// Every variant is fatal: a tree that fails to build or validate must not
/// be handed to the renderer. Locations use the form `docsSidebar[1].items[0]`
/// (sidebar name, top-level index, then nested item indices).
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    /// Node has no `type` key.
    #[error("{location}: node is missing its `type` (expected \"doc\" or \"category\")")]
    MissingKind {
        /// Node location.
        location: String,
    },
    /// Node `type` is neither `doc` nor `category`.
    #[error("{location}: unknown node type \"{kind}\" (expected \"doc\" or \"category\")")]
    UnknownKind {
        /// Node location.
        location: String,
        /// The unrecognized `type` value.
        kind: String,
    },
    /// `doc` node without an `id`.
    #[error("{location}: doc node is missing its `id`")]
    MissingId {
        /// Node location.
        location: String,
    },
    /// `doc` node whose `id` is empty or blank.
    #[error("{location}: doc id cannot be empty")]
    EmptyId {
        /// Node location.
        location: String,
    },
    /// `category` node without a `label`.
    #[error("{location}: category is missing its `label`")]
    MissingLabel {
        /// Node location.
        location: String,
    },
    /// Label present but blank.
    #[error("{location}: label cannot be empty")]
    EmptyLabel {
        /// Node location.
        location: String,
    },
    /// Key that does not belong to the node's type (e.g. `items` on a doc).
    #[error("{location}: `{field}` is not allowed on a {kind} node")]
    UnexpectedField {
        /// Node location.
        location: String,
        /// Node type.
        kind: &'static str,
        /// Offending key.
        field: &'static str,
    },
    /// Category with no children.
    #[error("{location}: category \"{label}\" has no items")]
    EmptyCategory {
        /// Node location.
        location: String,
        /// Category label.
        label: String,
    },
    /// Sidebar with no top-level nodes.
    #[error("sidebar \"{name}\" has no items")]
    EmptySidebar {
        /// Sidebar name.
        name: String,
    },
    /// Two sidebars share a name.
    #[error("sidebar \"{name}\" is declared more than once")]
    DuplicateSidebar {
        /// Sidebar name.
        name: String,
    },
    /// Declaration file contains no sidebars.
    #[error("no sidebars declared")]
    NoSidebars,
    /// Sidebar key that is not a string.
    #[error("sidebar name must be a string, got {key}")]
    InvalidSidebarName {
        /// Debug rendering of the key.
        key: String,
    },
    /// `doc` node pointing to a page that does not exist.
    #[error("{location}: doc \"{id}\" does not match any page")]
    DanglingReference {
        /// Unresolved page id.
        id: String,
        /// Node location.
        location: String,
    },
    /// Declaration is not valid YAML or does not match the node shape.
    #[error("invalid sidebar declaration: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// A single sidebar does not match the node shape.
    #[error("invalid declaration for sidebar \"{name}\": {source}")]
    ParseSidebar {
        /// Sidebar name.
        name: String,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },
    /// Declaration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Declaration file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
