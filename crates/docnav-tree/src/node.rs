//! Navigation tree nodes.

/// One element of a navigation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavNode {
    /// Reference to a single content page.
    Doc(DocRef),
    /// Labeled group of child nodes.
    Category(Category),
}

/// Leaf node referencing a content page by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocRef {
    id: String,
    label: Option<String>,
}

impl DocRef {
    /// Page id, e.g. `getting-started/quick-start`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Label override. `None` means the page's own title is used.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub(crate) fn new(id: String, label: Option<String>) -> Self {
        Self { id, label }
    }
}

/// Internal node grouping an ordered, non-empty list of children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    label: String,
    items: Vec<NavNode>,
}

impl Category {
    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Children in declared order.
    pub fn items(&self) -> &[NavNode] {
        &self.items
    }

    pub(crate) fn new(label: String, items: Vec<NavNode>) -> Self {
        Self { label, items }
    }
}

impl NavNode {
    /// The page reference, if this node is a doc.
    pub fn as_doc(&self) -> Option<&DocRef> {
        match self {
            Self::Doc(doc) => Some(doc),
            Self::Category(_) => None,
        }
    }

    /// The category, if this node is one.
    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Self::Doc(_) => None,
            Self::Category(category) => Some(category),
        }
    }
}
