//! Pre-order traversal over doc references.

use std::iter::FusedIterator;
use std::slice;

use crate::node::{Category, DocRef, NavNode};

/// A doc reference together with where it sits in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visit<'a> {
    /// The doc reference.
    pub doc: &'a DocRef,
    /// Enclosing category, `None` at the top level.
    pub parent: Option<&'a Category>,
    /// Index of the doc among its parent's items (categories included).
    pub position: usize,
}

#[derive(Clone, Debug)]
struct Frame<'a> {
    parent: Option<&'a Category>,
    items: std::iter::Enumerate<slice::Iter<'a, NavNode>>,
}

/// Lazy pre-order walk over the docs of a tree.
///
/// Created by [`NavTree::walk`](crate::NavTree::walk). Uses an explicit stack,
/// so deep trees do not grow the call stack.
#[derive(Clone, Debug)]
pub struct Walk<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(items: &'a [NavNode]) -> Self {
        Self {
            stack: vec![Frame {
                parent: None,
                items: items.iter().enumerate(),
            }],
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.last_mut() {
            match frame.items.next() {
                Some((position, NavNode::Doc(doc))) => {
                    return Some(Visit {
                        doc,
                        parent: frame.parent,
                        position,
                    });
                }
                Some((_, NavNode::Category(category))) => {
                    self.stack.push(Frame {
                        parent: Some(category),
                        items: category.items().iter().enumerate(),
                    });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl FusedIterator for Walk<'_> {}

/// Lazy pre-order sequence of doc references.
///
/// Created by [`NavTree::flatten`](crate::NavTree::flatten).
#[derive(Clone, Debug)]
pub struct Flatten<'a> {
    walk: Walk<'a>,
}

impl<'a> Flatten<'a> {
    pub(crate) fn new(walk: Walk<'a>) -> Self {
        Self { walk }
    }
}

impl<'a> Iterator for Flatten<'a> {
    type Item = &'a DocRef;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next().map(|visit| visit.doc)
    }
}

impl FusedIterator for Flatten<'_> {}

/// Previous/next links for one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager<'a> {
    /// Doc before the current one in reading order.
    pub previous: Option<&'a DocRef>,
    /// The current doc.
    pub current: &'a DocRef,
    /// Doc after the current one in reading order.
    pub next: Option<&'a DocRef>,
}

#[cfg(test)]
mod tests {
    use crate::{NavTree, NodeDecl, SidebarDecl};

    fn deep_declaration(depth: usize) -> SidebarDecl {
        let mut node = NodeDecl::doc("leaf");
        for level in 0..depth {
            node = NodeDecl::category(format!("Level {level}"), vec![node]);
        }
        node.into()
    }

    #[test]
    fn test_walk_deep_tree() {
        let tree = NavTree::build(&deep_declaration(64)).unwrap();

        let visits: Vec<_> = tree.walk().collect();

        assert_eq!(visits.len(), 1);
        assert_eq!(visits[0].doc.id(), "leaf");
        assert_eq!(visits[0].position, 0);
        assert_eq!(visits[0].parent.map(|c| c.label()), Some("Level 0"));
    }

    #[test]
    fn test_walk_is_fused() {
        let decl = SidebarDecl::Items(vec![NodeDecl::doc("only")]);
        let tree = NavTree::build(&decl).unwrap();
        let mut walk = tree.walk();

        assert!(walk.next().is_some());
        assert!(walk.next().is_none());
        assert!(walk.next().is_none());
    }

    #[test]
    fn test_cloned_flatten_resumes_independently() {
        let decl = SidebarDecl::Items(vec![
            NodeDecl::doc("a"),
            NodeDecl::category("B", vec![NodeDecl::doc("b1"), NodeDecl::doc("b2")]),
        ]);
        let tree = NavTree::build(&decl).unwrap();
        let mut docs = tree.flatten();
        docs.next();

        let rest: Vec<_> = docs.clone().map(|d| d.id()).collect();
        let again: Vec<_> = docs.map(|d| d.id()).collect();

        assert_eq!(rest, vec!["b1", "b2"]);
        assert_eq!(again, rest);
    }

    #[test]
    fn test_walk_skips_to_next_sibling_after_category() {
        let decl = SidebarDecl::Items(vec![
            NodeDecl::category("A", vec![NodeDecl::category("A1", vec![NodeDecl::doc("x")])]),
            NodeDecl::doc("y"),
        ]);
        let tree = NavTree::build(&decl).unwrap();

        let ids: Vec<_> = tree.flatten().map(|d| d.id()).collect();

        assert_eq!(ids, vec!["x", "y"]);
    }
}
