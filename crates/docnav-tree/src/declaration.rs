//! Raw sidebar declarations as authored in YAML.
//!
//! Declarations keep every field optional so that [`NavTree::build`](crate::NavTree::build)
//! can report a missing `type`, `id` or `label` with the node's location instead
//! of a generic deserialization failure.

use serde::Deserialize;

/// `type` value of a page reference.
pub(crate) const DOC_KIND: &str = "doc";
/// `type` value of a grouping.
pub(crate) const CATEGORY_KIND: &str = "category";

/// One declared sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NodeDecl {
    /// Bare string: shorthand for a doc node with this id.
    Shorthand(String),
    /// Full node mapping.
    Node(NodeFields),
}

/// Fields of a node mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeFields {
    /// Discriminating kind (`doc` or `category`).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Page id (docs only).
    pub id: Option<String>,
    /// Display label.
    pub label: Option<String>,
    /// Children (categories only).
    pub items: Option<Vec<NodeDecl>>,
}

impl NodeDecl {
    /// Doc node declaration.
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Node(NodeFields {
            kind: Some(DOC_KIND.to_owned()),
            id: Some(id.into()),
            ..NodeFields::default()
        })
    }

    /// Doc node declaration with a label override.
    pub fn labeled_doc(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Node(NodeFields {
            kind: Some(DOC_KIND.to_owned()),
            id: Some(id.into()),
            label: Some(label.into()),
            items: None,
        })
    }

    /// Category declaration.
    pub fn category(label: impl Into<String>, items: Vec<NodeDecl>) -> Self {
        Self::Node(NodeFields {
            kind: Some(CATEGORY_KIND.to_owned()),
            id: None,
            label: Some(label.into()),
            items: Some(items),
        })
    }
}

/// Declaration of one sidebar: a node list, or a single node.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SidebarDecl {
    /// Ordered top-level nodes.
    Items(Vec<NodeDecl>),
    /// Single top-level node.
    Single(NodeDecl),
}

impl SidebarDecl {
    /// Top-level node declarations in order.
    pub fn nodes(&self) -> &[NodeDecl] {
        match self {
            Self::Items(items) => items,
            Self::Single(node) => std::slice::from_ref(node),
        }
    }
}

impl From<NodeDecl> for SidebarDecl {
    fn from(node: NodeDecl) -> Self {
        Self::Single(node)
    }
}

impl From<Vec<NodeDecl>> for SidebarDecl {
    fn from(items: Vec<NodeDecl>) -> Self {
        Self::Items(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_nodes() {
        let yaml = r"
- type: doc
  id: index
  label: Introduction
- type: category
  label: Getting Started
  items:
    - type: doc
      id: getting-started/quick-start
";
        let decl: SidebarDecl = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            decl,
            SidebarDecl::Items(vec![
                NodeDecl::labeled_doc("index", "Introduction"),
                NodeDecl::category(
                    "Getting Started",
                    vec![NodeDecl::doc("getting-started/quick-start")]
                ),
            ])
        );
    }

    #[test]
    fn test_parse_shorthand_string() {
        let yaml = "- quick-start\n- installation\n";
        let decl: SidebarDecl = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(
            decl.nodes(),
            &[
                NodeDecl::Shorthand("quick-start".to_owned()),
                NodeDecl::Shorthand("installation".to_owned()),
            ]
        );
    }

    #[test]
    fn test_parse_single_node() {
        let yaml = "type: category\nlabel: Guides\nitems: [intro]\n";
        let decl: SidebarDecl = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(decl.nodes().len(), 1);
        assert!(matches!(decl, SidebarDecl::Single(_)));
    }

    #[test]
    fn test_parse_keeps_missing_type() {
        let yaml = "- id: orphan\n";
        let decl: SidebarDecl = serde_yaml::from_str(yaml).unwrap();

        let NodeDecl::Node(fields) = &decl.nodes()[0] else {
            panic!("expected node mapping");
        };
        assert!(fields.kind.is_none());
        assert_eq!(fields.id.as_deref(), Some("orphan"));
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let yaml = "- type: doc\n  id: intro\n  lable: Typo\n";
        let result: Result<SidebarDecl, _> = serde_yaml::from_str(yaml);

        assert!(result.is_err());
    }
}
