//! Serializable sidebar view consumed by the renderer.

use serde::Serialize;

use crate::node::NavNode;

/// Sidebar entry with its display label resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarItem {
    /// Link to a page.
    Doc {
        /// Page id.
        id: String,
        /// Display label.
        label: String,
    },
    /// Group of entries.
    Category {
        /// Display label.
        label: String,
        /// Children in declared order.
        items: Vec<SidebarItem>,
    },
}

impl SidebarItem {
    pub(crate) fn from_node<F>(node: &NavNode, title_of: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match node {
            NavNode::Doc(doc) => {
                let label = doc
                    .label()
                    .map(str::to_owned)
                    .or_else(|| title_of(doc.id()))
                    .unwrap_or_else(|| doc.id().to_owned());
                Self::Doc {
                    id: doc.id().to_owned(),
                    label,
                }
            }
            NavNode::Category(category) => Self::Category {
                label: category.label().to_owned(),
                items: category
                    .items()
                    .iter()
                    .map(|child| Self::from_node(child, title_of))
                    .collect(),
            },
        }
    }
}
