//! Named sidebar collections loaded from a declaration file.

use std::collections::HashSet;
use std::hash::BuildHasher;
use std::path::Path;

use crate::declaration::SidebarDecl;
use crate::error::ConfigurationError;
use crate::tree::NavTree;

/// Ordered collection of named navigation trees.
///
/// Always holds at least one sidebar; names are unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sidebars {
    trees: Vec<NavTree>,
}

impl Sidebars {
    /// Build every sidebar from `(name, declaration)` pairs, keeping their order.
    pub fn from_declarations<I>(declarations: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (String, SidebarDecl)>,
    {
        let mut seen = HashSet::new();
        let mut trees = Vec::new();
        for (name, declaration) in declarations {
            if !seen.insert(name.clone()) {
                return Err(ConfigurationError::DuplicateSidebar { name });
            }
            trees.push(NavTree::build_named(name, &declaration)?);
        }
        if trees.is_empty() {
            return Err(ConfigurationError::NoSidebars);
        }
        Ok(Self { trees })
    }

    /// Parse and build a YAML declaration (mapping of sidebar name to nodes).
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigurationError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ConfigurationError::NoSidebars);
        }

        let mapping: serde_yaml::Mapping = serde_yaml::from_str(trimmed)?;
        let declarations = mapping
            .into_iter()
            .map(|(key, value)| {
                let serde_yaml::Value::String(name) = key else {
                    return Err(ConfigurationError::InvalidSidebarName {
                        key: format!("{key:?}"),
                    });
                };
                match serde_yaml::from_value::<SidebarDecl>(value) {
                    Ok(declaration) => Ok((name, declaration)),
                    Err(source) => Err(ConfigurationError::ParseSidebar { name, source }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_declarations(declarations)
    }

    /// Read and build a declaration file.
    pub fn load(path: &Path) -> Result<Self, ConfigurationError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sidebars = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            sidebars = sidebars.len(),
            "Loaded sidebar declaration"
        );
        Ok(sidebars)
    }

    /// Sidebar by name.
    pub fn get(&self, name: &str) -> Option<&NavTree> {
        self.trees.iter().find(|tree| tree.name() == Some(name))
    }

    /// First declared sidebar.
    pub fn first(&self) -> &NavTree {
        &self.trees[0]
    }

    /// Sidebars in declared order.
    pub fn iter(&self) -> std::slice::Iter<'_, NavTree> {
        self.trees.iter()
    }

    /// Sidebar names in declared order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.trees.iter().filter_map(NavTree::name)
    }

    /// Number of sidebars.
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Whether there are no sidebars.
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Validate every sidebar in declared order, stopping at the first error.
    pub fn validate_references<S: BuildHasher>(
        &self,
        known_page_ids: &HashSet<String, S>,
    ) -> Result<(), ConfigurationError> {
        self.trees
            .iter()
            .try_for_each(|tree| tree.validate_references(known_page_ids))
    }

    /// Page ids referenced by at least one sidebar.
    pub fn referenced_ids(&self) -> HashSet<&str> {
        self.trees
            .iter()
            .flat_map(NavTree::flatten)
            .map(|doc| doc.id())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Sidebars {
    type Item = &'a NavTree;
    type IntoIter = std::slice::Iter<'a, NavTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
