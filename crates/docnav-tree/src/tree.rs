//! Navigation tree construction and validation.

use std::collections::HashSet;
use std::hash::BuildHasher;

use crate::declaration::{CATEGORY_KIND, DOC_KIND, NodeDecl, NodeFields, SidebarDecl};
use crate::error::ConfigurationError;
use crate::node::{Category, DocRef, NavNode};
use crate::traverse::{Flatten, Pager, Walk};
use crate::view::SidebarItem;

/// Validated navigation tree of one sidebar.
///
/// Built once from a [`SidebarDecl`] and read-only afterwards. Nodes own their
/// children, so the tree is always finite and acyclic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavTree {
    name: Option<String>,
    items: Vec<NavNode>,
}

impl NavTree {
    /// Build an anonymous tree from a declaration.
    ///
    /// Error locations start at the top-level index, e.g. `[1].items[0]`.
    pub fn build(declaration: &SidebarDecl) -> Result<Self, ConfigurationError> {
        Self::build_tree(None, declaration)
    }

    /// Build a tree for the sidebar `name`.
    ///
    /// Error locations are prefixed with the name, e.g. `docsSidebar[1].items[0]`.
    pub fn build_named(
        name: impl Into<String>,
        declaration: &SidebarDecl,
    ) -> Result<Self, ConfigurationError> {
        Self::build_tree(Some(name.into()), declaration)
    }

    fn build_tree(
        name: Option<String>,
        declaration: &SidebarDecl,
    ) -> Result<Self, ConfigurationError> {
        let root = name.as_deref().unwrap_or_default();
        let nodes = declaration.nodes();
        if nodes.is_empty() {
            return Err(ConfigurationError::EmptySidebar {
                name: root.to_owned(),
            });
        }

        let items = nodes
            .iter()
            .enumerate()
            .map(|(index, decl)| build_node(decl, format!("{root}[{index}]")))
            .collect::<Result<Vec<_>, _>>()?;

        let tree = Self { name, items };
        tracing::debug!(
            sidebar = tree.name().unwrap_or_default(),
            docs = tree.flatten().count(),
            "Built navigation tree"
        );
        Ok(tree)
    }

    /// Sidebar name, if built with [`NavTree::build_named`].
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Top-level nodes in declared order.
    pub fn items(&self) -> &[NavNode] {
        &self.items
    }

    /// Check that every doc id is one of `known_page_ids`.
    ///
    /// Nodes are checked in pre-order, so the error names the first
    /// offending id in reading order.
    pub fn validate_references<S: BuildHasher>(
        &self,
        known_page_ids: &HashSet<String, S>,
    ) -> Result<(), ConfigurationError> {
        let root = self.name().unwrap_or_default();
        for (index, node) in self.items.iter().enumerate() {
            check_references(node, &format!("{root}[{index}]"), known_page_ids)?;
        }
        Ok(())
    }

    /// Doc references in pre-order, depth-first, declared order.
    ///
    /// Each call starts a fresh traversal.
    pub fn flatten(&self) -> Flatten<'_> {
        Flatten::new(self.walk())
    }

    /// Like [`NavTree::flatten`], but also reports each doc's parent category
    /// and its position among the parent's items.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.items)
    }

    /// Previous and next docs around the first occurrence of `id`.
    ///
    /// Returns `None` if `id` is not in the tree.
    pub fn pager(&self, id: &str) -> Option<Pager<'_>> {
        let docs: Vec<&DocRef> = self.flatten().collect();
        let index = docs.iter().position(|doc| doc.id() == id)?;
        Some(Pager {
            previous: index.checked_sub(1).map(|prev| docs[prev]),
            current: docs[index],
            next: docs.get(index + 1).copied(),
        })
    }

    /// Renderer view of the tree with doc labels resolved.
    ///
    /// A doc's label is its override if set, otherwise `title_of(id)`,
    /// otherwise the id itself.
    pub fn sidebar_items<F>(&self, title_of: F) -> Vec<SidebarItem>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.items
            .iter()
            .map(|node| SidebarItem::from_node(node, &title_of))
            .collect()
    }
}

/// Build one node and its subtree.
fn build_node(decl: &NodeDecl, location: String) -> Result<NavNode, ConfigurationError> {
    let fields = match decl {
        NodeDecl::Shorthand(id) => {
            return Ok(NavNode::Doc(DocRef::new(
                require_id(Some(id), &location)?,
                None,
            )));
        }
        NodeDecl::Node(fields) => fields,
    };

    match fields.kind.as_deref() {
        Some(DOC_KIND) => build_doc(fields, location),
        Some(CATEGORY_KIND) => build_category(fields, location),
        Some(other) => Err(ConfigurationError::UnknownKind {
            location,
            kind: other.to_owned(),
        }),
        None => Err(ConfigurationError::MissingKind { location }),
    }
}

fn build_doc(fields: &NodeFields, location: String) -> Result<NavNode, ConfigurationError> {
    if fields.items.is_some() {
        return Err(ConfigurationError::UnexpectedField {
            location,
            kind: DOC_KIND,
            field: "items",
        });
    }
    let id = require_id(fields.id.as_ref(), &location)?;
    let label = match &fields.label {
        Some(label) if label.trim().is_empty() => {
            return Err(ConfigurationError::EmptyLabel { location });
        }
        label => label.clone(),
    };
    Ok(NavNode::Doc(DocRef::new(id, label)))
}

fn build_category(fields: &NodeFields, location: String) -> Result<NavNode, ConfigurationError> {
    if fields.id.is_some() {
        return Err(ConfigurationError::UnexpectedField {
            location,
            kind: CATEGORY_KIND,
            field: "id",
        });
    }
    let label = match &fields.label {
        None => return Err(ConfigurationError::MissingLabel { location }),
        Some(label) if label.trim().is_empty() => {
            return Err(ConfigurationError::EmptyLabel { location });
        }
        Some(label) => label.clone(),
    };

    let decls = fields.items.as_deref().unwrap_or_default();
    if decls.is_empty() {
        return Err(ConfigurationError::EmptyCategory { location, label });
    }

    let items = decls
        .iter()
        .enumerate()
        .map(|(index, decl)| build_node(decl, format!("{location}.items[{index}]")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NavNode::Category(Category::new(label, items)))
}

fn require_id(id: Option<&String>, location: &str) -> Result<String, ConfigurationError> {
    match id {
        None => Err(ConfigurationError::MissingId {
            location: location.to_owned(),
        }),
        Some(id) if id.trim().is_empty() => Err(ConfigurationError::EmptyId {
            location: location.to_owned(),
        }),
        Some(id) => Ok(id.clone()),
    }
}

fn check_references<S: BuildHasher>(
    node: &NavNode,
    location: &str,
    known_page_ids: &HashSet<String, S>,
) -> Result<(), ConfigurationError> {
    match node {
        NavNode::Doc(doc) => {
            if known_page_ids.contains(doc.id()) {
                Ok(())
            } else {
                Err(ConfigurationError::DanglingReference {
                    id: doc.id().to_owned(),
                    location: location.to_owned(),
                })
            }
        }
        NavNode::Category(category) => {
            for (index, child) in category.items().iter().enumerate() {
                check_references(
                    child,
                    &format!("{location}.items[{index}]"),
                    known_page_ids,
                )?;
            }
            Ok(())
        }
    }
}
